// SPDX-License-Identifier: Apache-2.0

use crate::DEFAULT_CAPACITY;
use crate::endian::ByteOrder;

/// Options for tuning [`MemoryStream`](super::MemoryStream)'s behavior.
///
/// # Capacity
///
/// The number of bytes allocated up front. Defaults to `4096B`.
///
/// # Byte order
///
/// The wire order for multi-byte integers, including the length prefix of
/// strings. Defaults to [`ByteOrder::Native`], which matches data written by
/// earlier versions of the stream. Choosing another order changes the wire
/// format.
///
/// # Growth
///
/// What happens when a write doesn't fit. By default the capacity is fixed and
/// the write fails. It can also be set to double the capacity, or grow by exactly
/// the shortfall, in both cases up to a limit.
///
/// # String truncation
///
/// By default, reading a length-prefixed string declaring more than
/// [`MAX_STRING_LEN`](crate::MAX_STRING_LEN) bytes, or more bytes than are
/// unread, fails. With truncation enabled, the string is clamped to what can be
/// read instead, and the result is flagged as truncated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct StreamOptions {
	pub capacity: usize,
	pub byte_order: ByteOrder,
	pub growth: Growth,
	pub truncate_strings: bool,
}

/// The capacity growth mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Growth {
	/// Never grow on write; writes past capacity fail.
	#[default]
	Fixed,
	/// Double the capacity until the write fits, never past `limit`.
	Double { limit: usize },
	/// Grow by exactly the bytes missing, never past `limit`.
	Exact { limit: usize },
}

impl Growth {
	/// Doubling growth with no limit.
	pub const UNBOUNDED: Self = Self::Double { limit: usize::MAX };

	/// Returns `true` if the mode is [`Fixed`](Self::Fixed).
	pub fn is_fixed(&self) -> bool {
		matches!(self, Self::Fixed)
	}

	/// Returns the largest capacity this mode grows to. A fixed stream never
	/// grows on its own, so this is `0`.
	pub fn max_capacity(&self) -> usize {
		match *self {
			Self::Fixed => 0,
			Self::Double { limit } | Self::Exact { limit } => limit,
		}
	}

	/// Returns the capacity to grow to such that at least `required` bytes fit,
	/// or `None` if growing isn't allowed or would exceed the limit.
	pub fn next_capacity(&self, capacity: usize, required: usize) -> Option<usize> {
		if required <= capacity {
			return Some(capacity)
		}

		match *self {
			Self::Fixed => None,
			Self::Double { limit } => {
				let mut next = capacity.max(1);
				while next < required {
					next = next.saturating_mul(2);
				}
				let next = next.min(limit);
				(next >= required).then_some(next)
			}
			Self::Exact { limit } => (required <= limit).then_some(required),
		}
	}
}

impl Default for StreamOptions {
	fn default() -> Self { Self::new() }
}

impl StreamOptions {
	/// Creates a new set of stream options.
	pub const fn new() -> Self {
		Self {
			capacity: DEFAULT_CAPACITY,
			byte_order: ByteOrder::Native,
			growth: Growth::Fixed,
			truncate_strings: false,
		}
	}

	/// Presets the options for a stream that grows without limit, starting at the
	/// default capacity.
	#[inline]
	pub const fn growable() -> Self {
		Self {
			growth: Growth::UNBOUNDED,
			..Self::new()
		}
	}

	/// Presets the options to read and write exactly as earlier versions of the
	/// stream did: native byte order, fixed capacity, truncated strings.
	#[inline]
	pub const fn compat() -> Self {
		Self {
			truncate_strings: true,
			..Self::new()
		}
	}

	/// Returns the initial capacity.
	#[inline]
	pub const fn capacity(&self) -> usize { self.capacity }

	/// Returns the wire byte order.
	#[inline]
	pub const fn byte_order(&self) -> ByteOrder { self.byte_order }

	/// Returns the growth mode.
	#[inline]
	pub const fn growth(&self) -> Growth { self.growth }

	/// Returns `true` if string reads truncate rather than fail.
	#[inline]
	pub const fn truncate_strings(&self) -> bool { self.truncate_strings }

	/// Sets the initial capacity.
	#[inline]
	pub fn set_capacity(&mut self, value: usize) {
		self.capacity = value;
	}

	/// Sets the wire byte order.
	#[inline]
	pub fn set_byte_order(&mut self, value: ByteOrder) {
		self.byte_order = value;
	}

	/// Sets the growth mode.
	#[inline]
	pub fn set_growth(&mut self, value: Growth) {
		self.growth = value;
	}

	/// Sets whether string reads truncate rather than fail.
	#[inline]
	pub fn set_truncate_strings(&mut self, value: bool) {
		self.truncate_strings = value;
	}

	/// Sets the initial capacity.
	#[inline]
	pub const fn with_capacity(mut self, value: usize) -> Self {
		self.capacity = value;
		self
	}

	/// Sets the wire byte order.
	#[inline]
	pub const fn with_byte_order(mut self, value: ByteOrder) -> Self {
		self.byte_order = value;
		self
	}

	/// Sets the wire byte order to [`Network`](ByteOrder::Network).
	#[inline]
	pub const fn network_order(self) -> Self {
		self.with_byte_order(ByteOrder::Network)
	}

	/// Sets the growth mode.
	#[inline]
	pub const fn with_growth(mut self, value: Growth) -> Self {
		self.growth = value;
		self
	}

	/// Sets whether string reads truncate rather than fail.
	#[inline]
	pub const fn with_truncate_strings(mut self, value: bool) -> Self {
		self.truncate_strings = value;
		self
	}
}
