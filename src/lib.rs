//! ```
//! assert_eq!(base45::encode("Hello!!"), "%69 VD92EX0");
//! assert_eq!(base45::decode("%69 VD92EX0").unwrap(), b"Hello!!");
//! ```

pub mod base45;
pub mod base_common;

pub use self::base45::{
    decode, decode_into, decoded_len, encode, encode_into, encoded_len, pack, serde, Alphabet, Decoder, Encoder, ALPHABET,
};
