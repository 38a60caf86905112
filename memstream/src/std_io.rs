// SPDX-License-Identifier: Apache-2.0

//! [`std::io`] adapters, so a stream can be filled straight from a reader or
//! drained into a writer.

use std::io;
use std::io::{BufRead, Read, Write};
use crate::MemoryStream;

impl Read for MemoryStream {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let unread = self.unread();
		let count = buf.len().min(unread.len());
		buf[..count].copy_from_slice(&unread[..count]);
		self.skip(count);
		Ok(count)
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
		Ok(self.read_raw_into(buf)?)
	}
}

impl BufRead for MemoryStream {
	fn fill_buf(&mut self) -> io::Result<&[u8]> {
		Ok(self.unread())
	}

	fn consume(&mut self, amt: usize) {
		self.skip(amt);
	}
}

impl Write for MemoryStream {
	/// Writes as much of `buf` as fits, growing if the growth mode allows. Returns
	/// `Ok(0)` only once the stream is full and can't grow.
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let free = match self.ensure_writable(buf.len()) {
			Ok(()) => self.free_size(),
			Err(err) if err.kind().is_overflow() => self.grow_toward(buf.len())?,
			Err(err) => return Err(err.into()),
		};

		let count = buf.len().min(free);
		self.write_slice(&buf[..count])?;
		Ok(count)
	}

	fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
