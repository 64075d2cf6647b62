pub mod decode;
pub mod encode;
pub mod pack;
pub mod serde;

pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_into, decoded_len, Decoder};
pub use encode::{encode, encode_into, encoded_len, Encoder};

pub const ALPHABET: Alphabet<45> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

#[cfg(test)]
mod tests {
    use super::ALPHABET;

    #[test]
    fn alphabet() {
        assert_eq!(ALPHABET.len(), 45);
        assert_eq!(ALPHABET.as_str(), "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:");
        for index in 0..ALPHABET.len() {
            assert_eq!(ALPHABET.decode(ALPHABET.encode(index), 0), Ok(index as u8));
        }
    }

    #[test]
    fn round_trip() {
        let mut state = 0x2545_f491u32;
        for len in 0..200 {
            let input: Vec<u8> = (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    state as u8
                })
                .collect();
            let encoded = super::encode(&input);
            assert_eq!(encoded.len(), super::encoded_len(len));
            assert_eq!(super::decoded_len(encoded.len()), len);
            assert_eq!(super::decode(&encoded), Ok(input));
        }
    }

    #[test]
    fn round_trip_all_pairs() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(super::decode(super::encode([a, b])), Ok(vec![a, b]));
            }
        }
    }

    #[test]
    fn custom_alphabet() {
        const LOWERCASE: super::Alphabet<45> = match super::Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyz $%*+-./:") {
            Ok(alphabet) => alphabet,
            Err(_) => panic!("Could not build alphabet"),
        };
        let encoder = super::Encoder::new(&LOWERCASE);
        let decoder = super::Decoder::new(&LOWERCASE);
        assert_eq!(encoder.encode([65, 66]), "bb8");
        assert_eq!(decoder.decode("bb8"), Ok(vec![65, 66]));
        assert!(decoder.decode("BB8").is_err());
    }
}
