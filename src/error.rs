//! Error types for tree access and for reading or writing the binary format.
//!
//! This module contains the [`Error`] type which represents every failure the
//! crate can report. Tree operations fail with [`TypeMismatch`](Error::TypeMismatch),
//! [`KeyNotFound`](Error::KeyNotFound) or [`IndexOutOfRange`](Error::IndexOutOfRange);
//! the codec fails with one of the format errors (see [`Error::is_format_error`]).
//!
//! # Example
//!
//! ```
//! use nbt_tree::{BigEndian, Error, Result, Tag, from_slice};
//!
//! fn try_parse(data: &[u8]) -> Result<Tag> {
//!     match from_slice::<BigEndian>(data) {
//!         Ok((_, tag)) => Ok(tag),
//!         Err(Error::EndOfFile) => {
//!             println!("Data was truncated");
//!             Err(Error::EndOfFile)
//!         }
//!         Err(Error::InvalidTagType(tag)) => {
//!             println!("Unknown tag type: {:#04x}", tag);
//!             Err(Error::InvalidTagType(tag))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(matches!(try_parse(&[0x0a, 0x00]), Err(Error::EndOfFile)));
//! ```

use std::fmt::{self, Display};
use std::io;

use crate::TagID;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when accessing,
/// reading or writing an NBT tree.
#[derive(Debug)]
pub enum Error {
    /// The type id an operation required differs from the one it found.
    ///
    /// `actual` is [`TagID::End`] when the value involved was empty.
    TypeMismatch { expected: TagID, actual: TagID },

    /// A compound lookup with `at` did not find the key.
    KeyNotFound(String),

    /// A checked list access was outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },

    /// An I/O error occurred.
    ///
    /// This typically happens when writing to a [`std::io::Write`] implementation
    /// or reading from a [`std::io::Read`] implementation that encounters an error.
    /// Premature end of input is reported as [`EndOfFile`](Error::EndOfFile) instead.
    IO(io::Error),

    /// The input ended unexpectedly.
    ///
    /// This error occurs when the NBT data is truncated or incomplete.
    /// For example, if a compound tag declares a string field but the data
    /// ends before the string content.
    EndOfFile,

    /// Extra bytes remain after parsing the NBT data.
    TrailingData(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// NBT defines tag types 0-11. If a byte outside this range is found
    /// where a tag type is expected, this error is returned with the
    /// invalid byte value.
    InvalidTagType(u8),

    /// An `End` tag appeared where a real tag is required, such as the root
    /// of a document or the element type of a non-empty list.
    UnexpectedEnd,

    /// An array or list declared a negative element count.
    NegativeLength(i32),

    /// String bytes were not valid UTF-8.
    InvalidString,

    /// The tree nests deeper than the reader allows.
    DepthLimitExceeded(usize),

    /// A string is longer than its 16-bit length prefix can express.
    StringTooLong(usize),

    /// An array or list is longer than its signed 32-bit count can express.
    LengthTooLong(usize),
}

impl Error {
    /// Returns `true` for errors caused by malformed encoded input.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::EndOfFile
                | Error::TrailingData(_)
                | Error::InvalidTagType(_)
                | Error::UnexpectedEnd
                | Error::NegativeLength(_)
                | Error::InvalidString
                | Error::DepthLimitExceeded(_)
        )
    }

    pub(crate) fn mismatch(expected: TagID, actual: TagID) -> Self {
        Error::TypeMismatch { expected, actual }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch { expected, actual } => write!(
                formatter,
                "type mismatch: expected {}, found {}",
                expected.name(),
                actual.name()
            ),
            Error::KeyNotFound(key) => write!(formatter, "key not found: {key:?}"),
            Error::IndexOutOfRange { index, len } => {
                write!(formatter, "index {index} out of range for list of length {len}")
            }
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => write!(
                formatter,
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            ),
            Error::InvalidTagType(tag) => write!(formatter, "invalid NBT tag type: {tag:#04x}"),
            Error::UnexpectedEnd => formatter.write_str("unexpected End tag"),
            Error::NegativeLength(len) => write!(formatter, "negative length: {len}"),
            Error::InvalidString => formatter.write_str("string is not valid UTF-8"),
            Error::DepthLimitExceeded(depth) => {
                write!(formatter, "nesting depth exceeds limit of {depth}")
            }
            Error::StringTooLong(len) => write!(formatter, "string too long: {len} bytes"),
            Error::LengthTooLong(len) => write!(formatter, "length too long: {len}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Error::IO(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::EndOfFile
        } else {
            Error::IO(e)
        }
    }
}
