// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides Encode and Decode traits for composing messages out of stream
//! primitives.

use crate::{MemoryStream, Result};
use crate::error::{Error, OperationKind::Write};
use crate::string::LengthPrefixed;

/// Defines encoding behavior.
pub trait Encode {
	/// Encodes into `stream` at its write cursor.
	fn encode(&self, stream: &mut MemoryStream) -> Result;
}

/// Defines decoding behavior.
pub trait Decode: Sized {
	/// Decodes from `stream` at its read cursor.
	fn decode(stream: &mut MemoryStream) -> Result<Self>;
}

impl MemoryStream {
	/// Encodes `value`. If encoding fails part way through, the write cursor is
	/// moved back to where it was.
	pub fn write_value<T: Encode + ?Sized>(&mut self, value: &T) -> Result {
		let mark = self.write_position();
		value.encode(self).map_err(|err| {
			self.write = mark;
			err
		})
	}

	/// Decodes a value. If decoding fails part way through, the read cursor is
	/// moved back to where it was.
	pub fn read_value<T: Decode>(&mut self) -> Result<T> {
		let mark = self.read_position();
		T::decode(self).map_err(|err| {
			self.read = mark;
			err
		})
	}
}

impl<T: Encode + ?Sized> Encode for &T {
	fn encode(&self, stream: &mut MemoryStream) -> Result {
		(**self).encode(stream)
	}
}

// Numbers

macro_rules! gen_num_codec {
	($($ty:ident)+) => {
		$(
		impl Encode for $ty {
			fn encode(&self, stream: &mut MemoryStream) -> Result {
				stream.write_int(*self)
			}
		}

		impl Decode for $ty {
			fn decode(stream: &mut MemoryStream) -> Result<Self> {
				stream.read_int()
			}
		}
		)+
	};
}

gen_num_codec! { i8 u8 i16 u16 i32 u32 i64 u64 }

// Strings

impl Encode for [u8] {
	fn encode(&self, stream: &mut MemoryStream) -> Result {
		let len = u16::try_from(self.len()).map_err(|_|
			Error::invalid_argument(Write, "string length exceeds the maximum")
		)?;
		stream.write_string(self, len)
	}
}

impl Encode for Vec<u8> {
	fn encode(&self, stream: &mut MemoryStream) -> Result {
		self[..].encode(stream)
	}
}

/// Decodes a length-prefixed byte string. Truncation is not reported; decode a
/// [`LengthPrefixed`] to inspect it.
impl Decode for Vec<u8> {
	fn decode(stream: &mut MemoryStream) -> Result<Self> {
		Ok(stream.read_string()?.into_bytes())
	}
}

impl Encode for LengthPrefixed {
	fn encode(&self, stream: &mut MemoryStream) -> Result {
		self.bytes().encode(stream)
	}
}

impl Decode for LengthPrefixed {
	fn decode(stream: &mut MemoryStream) -> Result<Self> {
		stream.read_string()
	}
}

impl Encode for str {
	fn encode(&self, stream: &mut MemoryStream) -> Result {
		stream.write_str(self)
	}
}

impl Encode for String {
	fn encode(&self, stream: &mut MemoryStream) -> Result {
		stream.write_str(self)
	}
}

impl Decode for String {
	fn decode(stream: &mut MemoryStream) -> Result<Self> {
		stream.read_utf8_string()
	}
}

// Tuples

macro_rules! gen_tuple_codec {
	($(($($name:ident)+))+) => {
		$(
		#[allow(non_snake_case)]
		impl<$($name: Encode),+> Encode for ($($name,)+) {
			fn encode(&self, stream: &mut MemoryStream) -> Result {
				let ($($name,)+) = self;
				$($name.encode(stream)?;)+
				Ok(())
			}
		}

		impl<$($name: Decode),+> Decode for ($($name,)+) {
			fn decode(stream: &mut MemoryStream) -> Result<Self> {
				Ok(($($name::decode(stream)?,)+))
			}
		}
		)+
	};
}

gen_tuple_codec! {
	(A)
	(A B)
	(A B C)
	(A B C D)
}
