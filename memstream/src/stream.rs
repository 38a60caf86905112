// SPDX-License-Identifier: Apache-2.0

mod options;
mod read;
mod write;

pub use options::*;

use std::collections::TryReserveError;
use std::fmt;
use std::fmt::{Debug, Formatter};
use tracing::{debug, trace};
use crate::DEFAULT_CAPACITY;
use crate::endian::ByteOrder;
use crate::error::{Error, OperationKind, Result};
use OperationKind::{Create, Grow, Skip, Write};

/// A byte buffer with independent read and write cursors, used to stage binary
/// messages. Integers, length-prefixed strings and raw byte ranges are written at
/// the write cursor and read back from the read cursor, in order.
///
/// The cursors always satisfy `read_position <= write_position <= capacity`.
/// Reads past the written data fail with an underrun error, and writes past the
/// capacity either grow the buffer or fail with an overflow error, depending on
/// [`Growth`]. A failed operation doesn't move either cursor.
#[derive(Clone)]
pub struct MemoryStream {
	/// Backing storage. Its length is the capacity; bytes past the write cursor
	/// are stale.
	storage: Vec<u8>,
	pub(crate) read: usize,
	pub(crate) write: usize,
	options: StreamOptions,
}

impl Default for MemoryStream {
	fn default() -> Self {
		Self {
			storage: vec![0; DEFAULT_CAPACITY],
			read: 0,
			write: 0,
			options: StreamOptions::default(),
		}
	}
}

impl Debug for MemoryStream {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryStream")
			.field("capacity", &self.capacity())
			.field("read", &self.read)
			.field("write", &self.write)
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

impl From<Vec<u8>> for MemoryStream {
	fn from(value: Vec<u8>) -> Self { Self::from_vec(value) }
}

fn allocate(capacity: usize) -> std::result::Result<Vec<u8>, TryReserveError> {
	let mut storage = Vec::new();
	storage.try_reserve_exact(capacity)?;
	storage.resize(capacity, 0);
	Ok(storage)
}

impl MemoryStream {
	/// Creates a new stream with `capacity` bytes of storage and default options.
	pub fn new(capacity: usize) -> Result<Self> {
		Self::with_options(StreamOptions::new().with_capacity(capacity))
	}

	/// Creates a new stream from `options`.
	pub fn with_options(options: StreamOptions) -> Result<Self> {
		let storage = allocate(options.capacity)
			.map_err(|err| Error::allocation(Create, err))?;
		Ok(Self {
			storage,
			read: 0,
			write: 0,
			options,
		})
	}

	/// Creates a stream containing `bytes` as unread data. The capacity is the
	/// length of `bytes`.
	pub fn from_vec(bytes: Vec<u8>) -> Self {
		let write = bytes.len();
		Self {
			options: StreamOptions::new().with_capacity(write),
			storage: bytes,
			read: 0,
			write,
		}
	}

	/// Consumes the stream, returning all bytes written since the last reset,
	/// including those already read.
	pub fn into_vec(mut self) -> Vec<u8> {
		self.storage.truncate(self.write);
		self.storage
	}

	/// Consumes the stream, returning its unread bytes.
	pub fn into_unread(mut self) -> Vec<u8> {
		self.storage.truncate(self.write);
		self.storage.drain(..self.read);
		self.storage
	}

	/// Returns the stream options.
	#[inline]
	pub fn options(&self) -> &StreamOptions { &self.options }

	/// Returns the wire byte order.
	#[inline]
	pub fn byte_order(&self) -> ByteOrder { self.options.byte_order }

	/// Sets the growth mode.
	#[inline]
	pub fn set_growth(&mut self, growth: Growth) {
		self.options.growth = growth;
	}

	/// Sets whether string reads truncate rather than fail.
	#[inline]
	pub fn set_truncate_strings(&mut self, value: bool) {
		self.options.truncate_strings = value;
	}
}

// Positional control
impl MemoryStream {
	/// Empties the stream without releasing its storage.
	pub fn reset(&mut self) {
		self.read = 0;
		self.write = 0;
	}

	/// Moves unread bytes to the start of the storage, reclaiming the space taken
	/// by bytes already read. Empties the stream if nothing is left unread.
	pub fn rewind(&mut self) {
		if self.write > self.read {
			let unread = self.write - self.read;
			if self.read > 0 {
				self.storage.copy_within(self.read..self.write, 0);
				trace!(moved = unread, reclaimed = self.read, "compacted stream");
			}
			self.read = 0;
			self.write = unread;
		} else {
			self.reset();
		}
	}

	/// Skips up to `count` unread bytes, returning the number skipped. Skipping
	/// more bytes than are unread discards everything unread.
	pub fn skip(&mut self, count: usize) -> usize {
		let count = count.min(self.unread_size());
		self.read += count;
		count
	}

	/// Skips exactly `count` unread bytes, failing if fewer are available.
	pub fn skip_checked(&mut self, count: usize) -> Result {
		let available = self.unread_size();
		if count > available {
			return Err(Error::underrun(Skip, count, available))
		}

		self.read += count;
		Ok(())
	}

	/// Empties the stream. Unlike skipping [`unread_size`](Self::unread_size)
	/// bytes, this also moves the write cursor back to the start.
	pub fn skip_all(&mut self) {
		self.reset()
	}
}

// Queries
impl MemoryStream {
	/// Returns the size of the storage in bytes.
	#[inline]
	pub fn capacity(&self) -> usize { self.storage.len() }

	/// Returns the number of bytes written since the last reset, including bytes
	/// already read.
	#[inline]
	pub fn used_size(&self) -> usize { self.write }

	/// Returns the number of bytes that can be written without growing.
	#[inline]
	pub fn free_size(&self) -> usize { self.capacity() - self.write }

	/// Returns `true` if *more* than `size` bytes are free. The comparison is
	/// strict: a stream with exactly `size` free bytes returns `false`. This only
	/// checks; see [`reserve`](Self::reserve) to grow.
	#[inline]
	pub fn ensure_free_size(&self, size: usize) -> bool {
		self.free_size() > size
	}

	/// Returns the number of written bytes not yet read.
	#[inline]
	pub fn unread_size(&self) -> usize { self.write - self.read }

	/// Returns `true` if there are no unread bytes.
	#[inline]
	pub fn is_empty(&self) -> bool { self.read == self.write }

	/// Returns the read cursor offset.
	#[inline]
	pub fn read_position(&self) -> usize { self.read }

	/// Returns the write cursor offset.
	#[inline]
	pub fn write_position(&self) -> usize { self.write }

	/// Returns the unread bytes.
	#[inline]
	pub fn unread(&self) -> &[u8] { &self.storage[self.read..self.write] }

	/// Returns all bytes written since the last reset.
	#[inline]
	pub fn written(&self) -> &[u8] { &self.storage[..self.write] }
}

// Capacity
impl MemoryStream {
	/// Ensures at least `size` bytes are free, growing according to the growth
	/// mode. With [`Growth::Fixed`], grows by exactly the bytes missing. The
	/// other modes never grow past their limit; a reservation beyond it fails
	/// with an overflow error.
	pub fn reserve(&mut self, size: usize) -> Result {
		let free = self.free_size();
		if free >= size {
			return Ok(())
		}

		let growth = self.options.growth;
		let capacity = self.write
						   .checked_add(size)
						   .and_then(|required|
							   if growth.is_fixed() {
								   Some(required)
							   } else {
								   growth.next_capacity(self.capacity(), required)
							   }
						   )
						   .ok_or_else(|| Error::overflow(Grow, size, free))?;
		self.grow_storage(capacity, Grow)
	}

	/// Grows the storage to at least `capacity` bytes. Never shrinks, and never
	/// grows past the growth mode's limit.
	pub fn grow_to(&mut self, capacity: usize) -> Result {
		let current = self.capacity();
		if capacity <= current {
			return Ok(())
		}
		let growth = self.options.growth;
		if !growth.is_fixed() && capacity > growth.max_capacity() {
			return Err(Error::overflow(Grow, capacity - self.write, self.free_size()))
		}

		self.grow_storage(capacity, Grow)
	}

	/// Compacts unread bytes to the start of the storage, then releases all free
	/// space.
	pub fn shrink_to_fit(&mut self) {
		self.rewind();
		self.storage.truncate(self.write);
		self.storage.shrink_to_fit();
		debug!(capacity = self.capacity(), "shrank stream");
	}

	/// Makes room for `count` more bytes at the write cursor, growing if the growth
	/// mode allows.
	pub(crate) fn ensure_writable(&mut self, count: usize) -> Result {
		let free = self.free_size();
		if count <= free {
			return Ok(())
		}

		let capacity = self.write
						   .checked_add(count)
						   .and_then(|required|
							   self.options
								   .growth
								   .next_capacity(self.capacity(), required)
						   )
						   .ok_or_else(|| Error::overflow(Write, count, free))?;
		self.grow_storage(capacity, Write)
	}

	/// Grows as close to `count` more writable bytes as the growth mode allows,
	/// stopping at its limit. Returns the free size afterward.
	pub(crate) fn grow_toward(&mut self, count: usize) -> Result<usize> {
		let required = self.write.saturating_add(count);
		let capacity = required.min(self.options.growth.max_capacity());
		if capacity > self.capacity() {
			self.grow_storage(capacity, Write)?;
		}
		Ok(self.free_size())
	}

	fn grow_storage(&mut self, capacity: usize, op: OperationKind) -> Result {
		let previous = self.capacity();
		self.storage
			.try_reserve_exact(capacity - previous)
			.map_err(|err| Error::allocation(op, err))?;
		self.storage.resize(capacity, 0);
		debug!(from = previous, to = capacity, "grew stream");
		Ok(())
	}
}
