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

//! ## How it works
//!
//! A [`MemoryStream`] stages binary messages in one contiguous buffer. Values are
//! written at a *write cursor* and read back from a *read cursor*, which trails
//! behind it. Between network reads, the already-read front of the buffer can be
//! reclaimed with [`rewind`](MemoryStream::rewind), which moves any unread tail to
//! the start; [`reset`](MemoryStream::reset) empties the buffer outright.
//!
//! ### Wire format
//!
//! | Value   | Encoding                                       |
//! |---------|------------------------------------------------|
//! | `int8`  | 1 byte                                         |
//! | `int16` | 2 bytes                                        |
//! | `int32` | 4 bytes                                        |
//! | `int64` | 8 bytes                                        |
//! | string  | `int16` unsigned length, then bytes, no terminator |
//! | raw     | bytes, no length                               |
//!
//! Multi-byte integers are written in the stream's [`ByteOrder`]. The default,
//! [`ByteOrder::Native`], copies integers as they are laid out in memory, which is
//! how data has always been encoded; big-endian network order is opt-in.
//!
//! ### Bounds
//!
//! Every read is checked against the written data and every write against the
//! capacity. Reads past the write cursor fail with an underrun error. Writes past
//! the capacity fail with an overflow error, unless the stream was created with a
//! [`Growth`] mode that lets it grow. Failed operations leave the cursors where
//! they were.

#[cfg(feature = "bytes")]
mod bytes;
pub mod codec;
pub mod endian;
pub mod error;
mod std_io;
mod stream;
mod string;

pub use codec::{Decode, Encode};
pub use endian::{ByteOrder, Endian, native_endian};
pub use error::{Error, ErrorKind, OperationKind, Result, Utf8Error};
pub use stream::*;
pub use string::LengthPrefixed;

/// The capacity of a stream created without one.
pub const DEFAULT_CAPACITY: usize = 4096;

/// The longest string a length-prefixed read returns.
pub const MAX_STRING_LEN: usize = 32768;
