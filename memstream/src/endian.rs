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

//! Byte order handling for multi-byte stream elements.

use std::mem;
use amplify_derive::Display;
use bytemuck::Pod;
use num_traits::PrimInt;

/// A platform byte order. The discriminants match the values the scripting
/// binding has always reported for the host endianness.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Endian {
	#[display("little-endian")]
	Little = 1,
	#[display("big-endian")]
	Big = 2,
}

cfg_if::cfg_if! {
	if #[cfg(target_endian = "big")] {
		const NATIVE: Endian = Endian::Big;
	} else {
		const NATIVE: Endian = Endian::Little;
	}
}

/// Returns the byte order of the host.
#[inline]
pub const fn native_endian() -> Endian { NATIVE }

impl Endian {
	/// Returns `true` if this is the host byte order.
	#[inline]
	pub const fn is_native(self) -> bool {
		self as u8 == NATIVE as u8
	}
}

/// The byte order multi-byte integers are written to the wire in.
///
/// [`Native`](Self::Native) copies the integer's memory as-is, which is what
/// existing data has always been encoded with. The other modes convert, and are
/// therefore incompatible with native data written on a host of the opposite
/// endianness.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
pub enum ByteOrder {
	/// Host byte order, no conversion.
	#[default]
	#[display("native")]
	Native,
	/// Big-endian, "network" byte order.
	#[display("network")]
	Network,
	/// Little-endian byte order.
	#[display("little-endian")]
	Little,
}

impl ByteOrder {
	/// Returns the concrete byte order on this host.
	pub const fn endian(self) -> Endian {
		match self {
			Self::Native  => NATIVE,
			Self::Network => Endian::Big,
			Self::Little  => Endian::Little,
		}
	}

	/// Converts a host value into its wire representation.
	#[inline]
	pub fn encode<T: Element>(self, value: T) -> T {
		match self {
			Self::Native  => value,
			Self::Network => value.to_be(),
			Self::Little  => value.to_le(),
		}
	}

	/// Converts a wire representation back into a host value.
	#[inline]
	pub fn decode<T: Element>(self, value: T) -> T {
		match self {
			Self::Native  => value,
			Self::Network => T::from_be(value),
			Self::Little  => T::from_le(value),
		}
	}
}

impl From<Endian> for ByteOrder {
	fn from(value: Endian) -> Self {
		match value {
			Endian::Little => Self::Little,
			Endian::Big    => Self::Network,
		}
	}
}

/// A fixed-width integer that can be read from and written to a stream.
pub trait Element: PrimInt + Pod {
	/// The encoded width in bytes.
	const WIDTH: usize = mem::size_of::<Self>();

	/// Decodes a value from exactly [`WIDTH`](Self::WIDTH) bytes.
	#[inline]
	fn from_wire(bytes: &[u8], order: ByteOrder) -> Self {
		order.decode(bytemuck::pod_read_unaligned(bytes))
	}

	/// Encodes the value into exactly [`WIDTH`](Self::WIDTH) bytes.
	#[inline]
	fn to_wire(self, target: &mut [u8], order: ByteOrder) {
		target.copy_from_slice(bytemuck::bytes_of(&order.encode(self)))
	}
}

macro_rules! gen_elements {
	($($ty:ident)+) => {
		$(impl Element for $ty { })+
	};
}

gen_elements! { i8 u8 i16 u16 i32 u32 i64 u64 }

#[cfg(test)]
mod test {
	use quickcheck_macros::quickcheck;
	use super::{ByteOrder, Element, Endian, native_endian};

	#[test]
	fn native() {
		let expected = if cfg!(target_endian = "big") { Endian::Big } else { Endian::Little };
		assert_eq!(native_endian(), expected);
		assert!(native_endian().is_native());
		assert_eq!(ByteOrder::Native.endian(), expected);
		assert_eq!(Endian::Little as u8, 1);
		assert_eq!(Endian::Big as u8, 2);
	}

	#[test]
	fn network_is_big_endian() {
		let mut bytes = [0; 4];
		0x01020304_i32.to_wire(&mut bytes, ByteOrder::Network);
		assert_eq!(bytes, [1, 2, 3, 4]);
		0x01020304_i32.to_wire(&mut bytes, ByteOrder::Little);
		assert_eq!(bytes, [4, 3, 2, 1]);
		0x01020304_i32.to_wire(&mut bytes, ByteOrder::Native);
		assert_eq!(bytes, 0x01020304_i32.to_ne_bytes());
	}

	#[quickcheck]
	fn wire_i64(value: i64) -> bool {
		let mut bytes = [0; 8];
		[ByteOrder::Native, ByteOrder::Network, ByteOrder::Little].into_iter().all(|order| {
			value.to_wire(&mut bytes, order);
			i64::from_wire(&bytes, order) == value
		})
	}
}
