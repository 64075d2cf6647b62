//! Base45 text as the serialized form of a byte field.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Certificate {
//!     #[serde(with = "base45::serde")]
//!     payload: Vec<u8>,
//! }
//! ```

use ::serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<T: AsRef<[u8]>, S: Serializer>(bytes: T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&super::encode(bytes))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let text = String::deserialize(deserializer)?;
    super::decode(text).map_err(de::Error::custom)
}
