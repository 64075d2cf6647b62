use super::{
    pack::{split16, unpack16, unpack8},
    Alphabet, ALPHABET,
};
use crate::base_common::alphabet;
use std::{error, fmt};

/// Besides characters outside the alphabet, a group of valid characters whose value does not fit
/// the bytes it stands for (such as `":::"`) is rejected as `InvalidGroup` rather than wrapped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    /// `index` is the position of the first character of the group.
    InvalidGroup { index: usize },
    /// Every group was valid but a single character is left over.
    InvalidLength { len: usize },
}

impl Error {
    pub fn index(&self) -> Option<usize> {
        match *self {
            Error::InvalidCharacter { index, .. } | Error::InvalidGroup { index } => Some(index),
            Error::BufferTooSmall | Error::InvalidLength { .. } => None,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::InvalidGroup { index } => write!(f, "Invalid group at index {}", index),
            Error::InvalidLength { len } => write!(f, "Invalid length {}", len),
        }
    }
}

// Decoding stops at the first byte outside the alphabet, so every byte before `index` is a single
// ascii character and `index` is a character position as well as a byte position.
fn character_at(input: &[u8], index: usize) -> char {
    let end = input.len().min(index + 4);
    String::from_utf8_lossy(&input[index..end])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Number of bytes produced for `len` input characters. A single leftover character counts for
/// nothing; such input is rejected by the decoder.
pub const fn decoded_len(len: usize) -> usize {
    (len / 3) * 2 + (len % 3) / 2
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<45>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<45>) -> Self {
        Self { alphabet }
    }

    fn digit(&self, input: &[u8], index: usize) -> Result<u8, Error> {
        self.alphabet.decode(input[index], index).map_err(|error| match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { index, .. } => Error::InvalidCharacter {
                character: character_at(input, index),
                index,
            },
        })
    }

    /// On error, `output` may already hold the bytes of the groups decoded before the failure.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < decoded_len(input.len()) {
            return Err(Error::BufferTooSmall);
        }
        let mut output_index = 0;
        for index in (0..input.len() - input.len() % 3).step_by(3) {
            let c = self.digit(input, index)?;
            let d = self.digit(input, index + 1)?;
            let e = self.digit(input, index + 2)?;
            let n = u16::try_from(unpack16(c, d, e)).map_err(|_| Error::InvalidGroup { index })?;
            let (a, b) = split16(n);
            output[output_index] = a;
            output[output_index + 1] = b;
            output_index += 2;
        }
        let index = input.len() - input.len() % 3;
        match input.len() % 3 {
            2 => {
                let c = self.digit(input, index)?;
                let d = self.digit(input, index + 1)?;
                output[output_index] = u8::try_from(unpack8(c, d)).map_err(|_| Error::InvalidGroup { index })?;
                output_index += 1;
            }
            1 => return Err(Error::InvalidLength { len: input.len() }),
            _ => {}
        }
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}
