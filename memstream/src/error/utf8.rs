// SPDX-License-Identifier: Apache-2.0

use amplify_derive::Display;
use simdutf8::compat;
use thiserror::Error;

/// A UTF-8 decode error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} UTF-8 byte sequence from index {valid_up_to}")]
pub struct Utf8Error {
	/// The length of the valid string before the error.
	pub valid_up_to: usize,
	/// The number of bytes in the invalid sequence, or `None` if the input ended
	/// in the middle of a character.
	pub error_len: Option<usize>,
	/// The error kind.
	pub kind: Utf8ErrorKind,
}

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Utf8ErrorKind {
	/// An invalid byte sequence.
	#[display("invalid")]
	InvalidSequence,
	/// An incomplete character byte sequence.
	#[display("incomplete")]
	IncompleteChar,
}

impl Utf8ErrorKind {
	pub fn is_invalid_sequence(&self) -> bool {
		matches!(self, Self::InvalidSequence)
	}

	pub fn is_incomplete_char(&self) -> bool {
		matches!(self, Self::IncompleteChar)
	}
}

impl From<compat::Utf8Error> for Utf8Error {
	fn from(value: compat::Utf8Error) -> Self {
		let error_len = value.error_len();
		let kind = if error_len.is_some() {
			Utf8ErrorKind::InvalidSequence
		} else {
			Utf8ErrorKind::IncompleteChar
		};
		Self {
			valid_up_to: value.valid_up_to(),
			error_len,
			kind,
		}
	}
}

/// Decodes `bytes` as UTF-8.
pub(crate) fn decode_utf8(bytes: Vec<u8>) -> Result<String, Utf8Error> {
	compat::from_utf8(&bytes)?;
	// Validated above.
	Ok(unsafe { String::from_utf8_unchecked(bytes) })
}
