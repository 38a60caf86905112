// SPDX-License-Identifier: Apache-2.0

use crate::endian::Element;
use crate::error::{decode_utf8, Error, OperationKind::Read, Result};
use crate::MAX_STRING_LEN;
use crate::string::LengthPrefixed;
use super::MemoryStream;

const PREFIX_WIDTH: usize = 2;

macro_rules! gen_int_reads {
	($($(#[$attr:meta])*$name:ident $ty:ident),+) => {
		$(
		$(#[$attr])*
		#[inline]
		pub fn $name(&mut self) -> Result<$ty> {
			self.read_int()
		}
		)+
	};
}

impl MemoryStream {
	/// Borrows the next `count` unread bytes without consuming them.
	fn peek_slice(&self, count: usize) -> Result<&[u8]> {
		let available = self.unread_size();
		if count > available {
			return Err(Error::underrun(Read, count, available))
		}

		Ok(&self.storage[self.read..self.read + count])
	}

	/// Consumes the next `count` unread bytes.
	fn take(&mut self, count: usize) -> Result<&[u8]> {
		let available = self.unread_size();
		if count > available {
			return Err(Error::underrun(Read, count, available))
		}

		let start = self.read;
		self.read += count;
		Ok(&self.storage[start..self.read])
	}

	/// Reads an integer in the stream's byte order.
	pub fn read_int<T: Element>(&mut self) -> Result<T> {
		let order = self.options.byte_order;
		Ok(T::from_wire(self.take(T::WIDTH)?, order))
	}

	/// Reads an integer in the stream's byte order without consuming it.
	pub fn peek_int<T: Element>(&self) -> Result<T> {
		Ok(T::from_wire(self.peek_slice(T::WIDTH)?, self.options.byte_order))
	}

	gen_int_reads! {
		/// Reads a signed byte.
		read_byte  i8,
		/// Reads a 16-bit signed integer.
		read_int16 i16,
		/// Reads a 32-bit signed integer.
		read_int32 i32,
		/// Reads a 64-bit signed integer.
		read_int64 i64,
		read_u8    u8,
		read_u16   u16,
		read_u32   u32,
		read_u64   u64
	}

	/// Reads a string prefixed with its 16-bit unsigned length.
	///
	/// A declared length over [`MAX_STRING_LEN`] fails with an invalid argument
	/// error, and one longer than the unread bytes fails with an underrun error;
	/// the read cursor doesn't move in either case. If the stream truncates
	/// strings, the length is instead clamped to both limits and the prefix and
	/// clamped bytes are consumed.
	pub fn read_string(&mut self) -> Result<LengthPrefixed> {
		let declared = self.peek_int::<u16>()?;
		let available = self.unread_size() - PREFIX_WIDTH;
		let declared_len = declared as usize;

		let len = if self.options.truncate_strings {
			declared_len.min(MAX_STRING_LEN).min(available)
		} else if declared_len > MAX_STRING_LEN {
			return Err(Error::invalid_argument(Read, "string length exceeds the maximum"))
		} else if declared_len > available {
			return Err(Error::underrun(Read, PREFIX_WIDTH + declared_len, available + PREFIX_WIDTH))
		} else {
			declared_len
		};

		self.read += PREFIX_WIDTH;
		let bytes = self.take(len)?.to_vec();
		Ok(LengthPrefixed::new(bytes, declared))
	}

	/// Reads a length-prefixed string, decoding it as UTF-8. On decode failure,
	/// nothing is consumed.
	pub fn read_utf8_string(&mut self) -> Result<String> {
		let mark = self.read;
		let bytes = self.read_string()?.into_bytes();
		decode_utf8(bytes).map_err(|err| {
			self.read = mark;
			Error::utf8(Read, err)
		})
	}

	/// Reads exactly `len` raw bytes.
	pub fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
		Ok(self.take(len)?.to_vec())
	}

	/// Reads exactly enough raw bytes to fill `target`.
	pub fn read_raw_into(&mut self, target: &mut [u8]) -> Result {
		target.copy_from_slice(self.take(target.len())?);
		Ok(())
	}

	/// Reads up to `max` raw bytes, fewer if not enough are unread.
	pub fn read_available(&mut self, max: usize) -> Vec<u8> {
		let count = max.min(self.unread_size());
		let start = self.read;
		self.read += count;
		self.storage[start..self.read].to_vec()
	}

	/// Reads all unread bytes.
	pub fn read_remaining(&mut self) -> Vec<u8> {
		self.read_available(usize::MAX)
	}
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;
	use crate::endian::ByteOrder;
	use crate::error::ErrorKind;
	use crate::stream::{MemoryStream, StreamOptions};

	#[test]
	fn underrun_keeps_cursor() {
		let mut stream = MemoryStream::new(16).unwrap();
		stream.write_int16(7).unwrap();
		let error = stream.read_int32().unwrap_err();
		assert_eq!(error.kind(), ErrorKind::Underrun { needed: 4, available: 2 });
		assert_eq!(stream.read_position(), 0);
		assert_eq!(stream.read_int16().unwrap(), 7);
	}

	#[test]
	fn empty_read() {
		let mut stream = MemoryStream::new(4).unwrap();
		assert!(stream.read_byte().unwrap_err().kind().is_underrun());
		assert!(stream.read_string().unwrap_err().kind().is_underrun());
	}

	#[test]
	fn peek() {
		let mut stream = MemoryStream::new(8).unwrap();
		stream.write_int32(42).unwrap();
		assert_eq!(stream.peek_int::<i32>().unwrap(), 42);
		assert_eq!(stream.read_position(), 0);
		assert_eq!(stream.read_int32().unwrap(), 42);
	}

	#[test]
	fn network_order() {
		let mut stream = MemoryStream::from_vec(vec![0, 0, 1, 2]);
		let mut network = MemoryStream::with_options(
			StreamOptions::new().with_capacity(4).network_order()
		).unwrap();
		network.write_slice(&[0, 0, 1, 2]).unwrap();
		assert_eq!(network.read_int32().unwrap(), 0x0102);
		assert_eq!(network.byte_order(), ByteOrder::Network);
		assert_eq!(stream.read_int32().unwrap(), i32::from_ne_bytes([0, 0, 1, 2]));
	}

	#[test]
	fn string_too_long_for_data() {
		let mut stream = MemoryStream::new(16).unwrap();
		stream.write_u16(10).unwrap();
		stream.write_slice(b"abc").unwrap();
		let error = stream.read_string().unwrap_err();
		assert_eq!(error.kind(), ErrorKind::Underrun { needed: 12, available: 5 });
		assert_eq!(stream.read_position(), 0);
	}

	#[test]
	fn string_over_maximum() {
		let mut stream = MemoryStream::new(16).unwrap();
		stream.write_u16(40000).unwrap();
		assert!(stream.read_string().unwrap_err().kind().is_invalid_argument());
	}

	#[test]
	fn string_truncation() {
		let mut stream = MemoryStream::with_options(StreamOptions::compat().with_capacity(16)).unwrap();
		stream.write_u16(10).unwrap();
		stream.write_slice(b"abc").unwrap();
		let string = stream.read_string().unwrap();
		assert_eq!(string, b"abc");
		assert!(string.is_truncated());
		assert_eq!(string.declared_len(), 10);
		assert!(stream.is_empty());
	}

	#[test]
	fn utf8_string() {
		let mut stream = MemoryStream::new(16).unwrap();
		stream.write_str("héllo").unwrap();
		assert_eq!(stream.read_utf8_string().unwrap(), "héllo");

		stream.write_string(&[0xFF, 0xFE], 2).unwrap();
		let mark = stream.read_position();
		let error = stream.read_utf8_string().unwrap_err();
		assert!(error.kind().is_utf8());
		assert_eq!(error.utf8_source().unwrap().valid_up_to, 0);
		assert_eq!(stream.read_position(), mark);
	}

	#[test]
	fn raw() {
		let mut stream = MemoryStream::new(16).unwrap();
		stream.write_slice(b"abcdef").unwrap();
		assert_eq!(stream.read_raw(2).unwrap(), b"ab");
		let mut target = [0; 2];
		stream.read_raw_into(&mut target).unwrap();
		assert_eq!(&target, b"cd");
		assert!(stream.read_raw(3).unwrap_err().kind().is_underrun());
		assert_eq!(stream.read_available(8), b"ef");
		assert_eq!(stream.read_remaining(), b"");
	}
}
