// SPDX-License-Identifier: Apache-2.0

use std::ops::Deref;
use crate::error::{decode_utf8, Utf8Error};

/// A length-prefixed byte string read from a stream.
///
/// The declared length is the one found in the prefix. When the stream is set to
/// truncate strings, fewer bytes than declared may have been read; this is
/// reported by [`is_truncated`](Self::is_truncated).
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LengthPrefixed {
	bytes: Vec<u8>,
	declared: u16,
}

impl LengthPrefixed {
	pub(crate) fn new(bytes: Vec<u8>, declared: u16) -> Self {
		Self { bytes, declared }
	}

	/// Returns the bytes read.
	#[inline]
	pub fn bytes(&self) -> &[u8] { &self.bytes }

	/// Returns the number of bytes read.
	#[inline]
	pub fn len(&self) -> usize { self.bytes.len() }

	/// Returns `true` if no bytes were read.
	#[inline]
	pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

	/// Returns the length declared by the prefix.
	#[inline]
	pub fn declared_len(&self) -> u16 { self.declared }

	/// Returns `true` if fewer bytes were read than the prefix declared.
	#[inline]
	pub fn is_truncated(&self) -> bool { self.bytes.len() < self.declared as usize }

	/// Consumes the string, returning its bytes.
	#[inline]
	pub fn into_bytes(self) -> Vec<u8> { self.bytes }

	/// Consumes the string, decoding its bytes as UTF-8.
	pub fn into_utf8(self) -> Result<String, Utf8Error> {
		decode_utf8(self.bytes)
	}
}

impl Deref for LengthPrefixed {
	type Target = [u8];

	fn deref(&self) -> &[u8] { &self.bytes }
}

impl AsRef<[u8]> for LengthPrefixed {
	fn as_ref(&self) -> &[u8] { &self.bytes }
}

impl From<LengthPrefixed> for Vec<u8> {
	fn from(value: LengthPrefixed) -> Self { value.bytes }
}

impl PartialEq<[u8]> for LengthPrefixed {
	fn eq(&self, other: &[u8]) -> bool { self.bytes == other }
}

impl PartialEq<&[u8]> for LengthPrefixed {
	fn eq(&self, other: &&[u8]) -> bool { self.bytes == *other }
}

impl<const N: usize> PartialEq<&[u8; N]> for LengthPrefixed {
	fn eq(&self, other: &&[u8; N]) -> bool { self.bytes == other[..] }
}

#[cfg(test)]
mod test {
	use super::LengthPrefixed;

	#[test]
	fn truncated() {
		let string = LengthPrefixed::new(b"abc".to_vec(), 5);
		assert!(string.is_truncated());
		assert_eq!(string.len(), 3);
		assert_eq!(string.declared_len(), 5);
		assert!(!LengthPrefixed::new(b"abc".to_vec(), 3).is_truncated());
	}

	#[test]
	fn compare() {
		let string = LengthPrefixed::new(b"abc".to_vec(), 3);
		assert_eq!(string, b"abc");
		assert_eq!(string, &b"abc"[..]);
		assert_eq!(string.into_utf8().unwrap(), "abc");
	}
}
