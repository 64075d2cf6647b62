use super::{
    pack::{merge16, pack16, pack8},
    Alphabet, ALPHABET,
};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoded input.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Number of characters produced for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    (len / 2) * 3 + (len % 2) * 2
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<45>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<45>) -> Self {
        Self { alphabet }
    }

    fn write(&self, input: &[u8], output: &mut [u8]) -> usize {
        let pairs = input.chunks_exact(2);
        let tail = pairs.remainder();
        let mut index = 0;
        for pair in pairs {
            let (c, d, e) = pack16(merge16(pair[0], pair[1]));
            for digit in [c, d, e] {
                output[index] = self.alphabet.encode(digit as usize);
                index += 1;
            }
        }
        if let [byte] = *tail {
            let (c, d) = pack8(byte);
            for digit in [c, d] {
                output[index] = self.alphabet.encode(digit as usize);
                index += 1;
            }
        }
        index
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < encoded_len(input.len()) {
            return Err(Error::BufferTooSmall);
        }
        Ok(self.write(input, output))
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = vec![0u8; encoded_len(input.len())];
        self.write(input, &mut output);
        // Alphabet characters are ascii.
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

#[cfg(test)]
mod tests {
    use super::{encoded_len, Error};

    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode([65, 66]), "BB8");
        assert_eq!(super::encode("Hello!!"), "%69 VD92EX0");
        assert_eq!(super::encode([98, 97, 115, 101, 45, 52, 53]), "UJCLQE7W581");
        assert_eq!(super::encode("ietf!"), "QED8WEX0");
        assert_eq!(super::encode([0]), "00");
        assert_eq!(super::encode([0xFF]), "U5");
        assert_eq!(super::encode([0xFF, 0xFF]), "FGW");
    }

    #[test]
    fn encoded_length() {
        for len in 0..64 {
            let input = vec![0xA5u8; len];
            let output = super::encode(&input);
            assert_eq!(output.len(), encoded_len(len));
            assert_eq!(output.len(), 3 * (len / 2) + if len % 2 == 1 { 2 } else { 0 });
        }
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 11];
        assert_eq!(super::encode_into("Hello!!", &mut output), Ok(11));
        assert_eq!(&output, b"%69 VD92EX0");

        let mut output = [b'#'; 6];
        assert_eq!(super::encode_into([65, 66], &mut output), Ok(3));
        assert_eq!(&output, b"BB8###");
    }

    #[test]
    fn encode_into_buffer_too_small() {
        let mut output = [0u8; 10];
        assert_eq!(super::encode_into("Hello!!", &mut output), Err(Error::BufferTooSmall));
        assert_eq!(output, [0u8; 10]);
    }
}
