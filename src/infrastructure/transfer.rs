//! Byte codec for moving a [`Pet`] across a navigation boundary.
//!
//! The receiving screen never shares memory with the sender, so a pet
//! travels as an owned [`TransferMessage`]. Layout, in order:
//!
//! ```text
//! id: u32 | name: str | age: u32 | weight: u32 | location: str | image: str
//! ```
//!
//! Integers are little-endian. A `str` is a `u32` byte length, the UTF-8
//! bytes, then zero padding up to the next 4-byte boundary.

use thiserror::Error;

use crate::domain::{DomainError, ImageRef, Pet};

const ALIGNMENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Transfer message is empty")]
    Empty,
    #[error("Transfer message ended while reading '{field}'")]
    Truncated { field: &'static str },
    #[error("Field '{field}' is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },
    #[error("Padding after '{field}' is not zeroed")]
    NonZeroPadding { field: &'static str },
    #[error("{0} unexpected trailing bytes")]
    TrailingBytes(usize),
    #[error("Decoded pet is invalid: {0}")]
    InvalidPet(#[from] DomainError),
}

pub type TransferResult<T> = Result<T, TransferError>;

/// Serialized form of a single pet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransferMessage(Vec<u8>);

impl TransferMessage {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Serializes every field of `pet` in wire order.
pub fn encode(pet: &Pet) -> TransferMessage {
    let mut writer = ParcelWriter::default();
    writer.write_u32(pet.id());
    writer.write_str(pet.name());
    writer.write_u32(pet.age());
    writer.write_u32(pet.weight());
    writer.write_str(pet.location());
    writer.write_str(pet.image().key());
    TransferMessage(writer.finish())
}

/// Reconstructs a pet from an optional message.
///
/// A missing message means no pet was selected and yields `None`. A
/// malformed message is logged and also yields `None`.
pub fn decode(message: Option<&TransferMessage>) -> Option<Pet> {
    let message = message?;
    match try_decode(message) {
        Ok(pet) => Some(pet),
        Err(err) => {
            tracing::warn!(%err, len = message.len(), "discarding malformed transfer message");
            None
        }
    }
}

pub fn try_decode(message: &TransferMessage) -> TransferResult<Pet> {
    if message.is_empty() {
        return Err(TransferError::Empty);
    }

    let mut reader = ParcelReader::new(message.as_bytes());
    let id = reader.read_u32("id")?;
    let name = reader.read_string("name")?;
    let age = reader.read_u32("age")?;
    let weight = reader.read_u32("weight")?;
    let location = reader.read_string("location")?;
    let image = reader.read_string("image")?;
    reader.finish()?;

    Ok(Pet::new(id, name, age, weight, location, ImageRef::new(image))?)
}

#[derive(Default)]
struct ParcelWriter {
    buf: Vec<u8>,
}

impl ParcelWriter {
    fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn write_str(&mut self, value: &str) {
        let bytes = value.as_bytes();
        // Field values are short display strings; u32 covers them.
        self.write_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
        let padded = padded_len(bytes.len());
        self.buf.resize(self.buf.len() + (padded - bytes.len()), 0);
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }
}

struct ParcelReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ParcelReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize, field: &'static str) -> TransferResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(TransferError::Truncated { field })?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self, field: &'static str) -> TransferResult<u32> {
        let bytes = self.take(4, field)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(raw))
    }

    fn read_string(&mut self, field: &'static str) -> TransferResult<String> {
        let len = self.read_u32(field)? as usize;
        let bytes = self.take(len, field)?;
        let text = std::str::from_utf8(bytes).map_err(|_| TransferError::InvalidUtf8 { field })?;

        let padding = self.take(padded_len(len) - len, field)?;
        if padding.iter().any(|b| *b != 0) {
            return Err(TransferError::NonZeroPadding { field });
        }

        Ok(text.to_string())
    }

    fn finish(self) -> TransferResult<()> {
        match self.data.len() - self.pos {
            0 => Ok(()),
            extra => Err(TransferError::TrailingBytes(extra)),
        }
    }
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(ALIGNMENT) * ALIGNMENT
}
