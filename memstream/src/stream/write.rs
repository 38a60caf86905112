// SPDX-License-Identifier: Apache-2.0

use crate::endian::Element;
use crate::error::{Error, OperationKind::Write, Result};
use crate::MAX_STRING_LEN;
use super::MemoryStream;

macro_rules! gen_int_writes {
	($($(#[$attr:meta])*$name:ident $ty:ident),+) => {
		$(
		$(#[$attr])*
		#[inline]
		pub fn $name(&mut self, value: $ty) -> Result {
			self.write_int(value)
		}
		)+
	};
}

impl MemoryStream {
	/// Claims the next `count` bytes at the write cursor.
	fn put(&mut self, count: usize) -> Result<&mut [u8]> {
		self.ensure_writable(count)?;
		let start = self.write;
		self.write += count;
		Ok(&mut self.storage[start..self.write])
	}

	/// Writes an integer in the stream's byte order.
	pub fn write_int<T: Element>(&mut self, value: T) -> Result {
		let order = self.options.byte_order;
		value.to_wire(self.put(T::WIDTH)?, order);
		Ok(())
	}

	gen_int_writes! {
		/// Writes a signed byte.
		write_byte  i8,
		/// Writes a 16-bit signed integer.
		write_int16 i16,
		/// Writes a 32-bit signed integer.
		write_int32 i32,
		/// Writes a 64-bit signed integer.
		write_int64 i64,
		write_u8    u8,
		write_u16   u16,
		write_u32   u32,
		write_u64   u64
	}

	/// Writes the first `len` bytes of `bytes`, prefixed with `len` as a 16-bit
	/// unsigned integer. Fails without writing anything if `len` is more than the
	/// length of `bytes` or [`MAX_STRING_LEN`], or if the whole string doesn't
	/// fit.
	pub fn write_string(&mut self, bytes: &[u8], len: u16) -> Result {
		let len = len as usize;
		if len > bytes.len() {
			return Err(Error::invalid_argument(Write, "string length exceeds the data length"))
		}
		if len > MAX_STRING_LEN {
			return Err(Error::invalid_argument(Write, "string length exceeds the maximum"))
		}

		self.ensure_writable(2 + len)?;
		self.write_u16(len as u16)?;
		self.write_slice(&bytes[..len])
	}

	/// Writes a string prefixed with its length.
	pub fn write_str(&mut self, value: &str) -> Result {
		let len = u16::try_from(value.len()).map_err(|_|
			Error::invalid_argument(Write, "string length exceeds the maximum")
		)?;
		self.write_string(value.as_bytes(), len)
	}

	/// Writes the first `len` bytes of `bytes`, with no prefix.
	pub fn write_raw(&mut self, bytes: &[u8], len: usize) -> Result {
		if len > bytes.len() {
			return Err(Error::invalid_argument(Write, "raw length exceeds the data length"))
		}

		self.write_slice(&bytes[..len])
	}

	/// Writes all of `bytes`, with no prefix.
	pub fn write_slice(&mut self, bytes: &[u8]) -> Result {
		self.put(bytes.len())?.copy_from_slice(bytes);
		Ok(())
	}
}
