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

mod utf8;

pub use utf8::*;

use std::{fmt, io, result};
use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter};
use amplify_derive::Display;
use ErrorKind::{Allocation, InvalidArgument, Overflow, Underrun, Utf8};

pub type ErrorBox = Box<dyn StdError + Send + Sync>;
pub type Result<T = ()> = result::Result<T, Error>;

/// The stream error type.
pub type Error = ContextError<OperationKind, ErrorKind>;

pub trait Operation: Copy + Debug + Display { }

pub trait Kind: Copy + Debug + Display { }

/// An error raised by an operation, with an optional source error.
#[derive(Debug)]
pub struct ContextError<O: Operation, K: Kind> {
	op: O,
	kind: K,
	source: Option<ErrorBox>,
}

impl<O: Operation, K: Kind> Display for ContextError<O, K> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self { op, kind, source } = self;
		if let Some(source) = source {
			write!(f, "{op} failed; {kind} ({source})")
		} else {
			write!(f, "{op} failed; {kind}")
		}
	}
}

impl<O: Operation, K: Kind> StdError for ContextError<O, K> {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		if let Some(ref source) = self.source {
			Some(source.as_ref())
		} else {
			None
		}
	}
}

impl<O: Operation, K: Kind> ContextError<O, K> {
	pub(crate) fn new(op: O, kind: K, source: Option<ErrorBox>) -> Self {
		Self { op, kind, source }
	}

	/// Returns the operation kind.
	pub fn operation(&self) -> O { self.op }

	/// Sets the operation kind.
	pub fn with_operation(mut self, op: O) -> Self {
		self.op = op;
		self
	}

	/// Returns the error kind.
	pub fn kind(&self) -> K { self.kind }
}

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum OperationKind {
	#[display("create stream")]
	Create,
	#[display("grow stream")]
	Grow,
	#[display("read from stream")]
	Read,
	#[display("write to stream")]
	Write,
	#[display("skip stream bytes")]
	Skip,
}

impl Operation for OperationKind { }

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
	#[display("storage allocation failed")]
	Allocation,
	#[display("buffer overflow ({needed} bytes needed, {free} free)")]
	Overflow {
		needed: usize,
		free: usize,
	},
	#[display("buffer underrun ({needed} bytes needed, {available} unread)")]
	Underrun {
		needed: usize,
		available: usize,
	},
	#[display("invalid argument: {0}")]
	InvalidArgument(&'static str),
	#[display("invalid UTF-8")]
	Utf8,
}

impl Kind for ErrorKind { }

impl ErrorKind {
	pub fn is_allocation(&self) -> bool { matches!(self, Allocation) }

	pub fn is_overflow(&self) -> bool { matches!(self, Overflow { .. }) }

	pub fn is_underrun(&self) -> bool { matches!(self, Underrun { .. }) }

	pub fn is_invalid_argument(&self) -> bool { matches!(self, InvalidArgument(_)) }

	pub fn is_utf8(&self) -> bool { matches!(self, Utf8) }
}

impl Error {
	/// Creates a new allocation error.
	pub fn allocation(op: OperationKind, source: impl Into<ErrorBox>) -> Self {
		Self::new(op, Allocation, Some(source.into()))
	}

	/// Creates a new "buffer overflow" error.
	pub fn overflow(op: OperationKind, needed: usize, free: usize) -> Self {
		Self::new(op, Overflow { needed, free }, None)
	}

	/// Creates a new "buffer underrun" error.
	pub fn underrun(op: OperationKind, needed: usize, available: usize) -> Self {
		Self::new(op, Underrun { needed, available }, None)
	}

	/// Creates a new "invalid argument" error.
	pub fn invalid_argument(op: OperationKind, message: &'static str) -> Self {
		Self::new(op, InvalidArgument(message), None)
	}

	/// Creates a new UTF-8 decode error.
	pub fn utf8(op: OperationKind, error: Utf8Error) -> Self {
		Self::new(op, Utf8, Some(error.into()))
	}

	/// Returns the source downcast into a [`Utf8Error`], if possible.
	pub fn utf8_source(&self) -> Option<&Utf8Error> {
		self.source()?.downcast_ref()
	}
}

impl From<Error> for io::Error {
	fn from(value: Error) -> Self {
		let kind = match value.kind() {
			Underrun { .. } => io::ErrorKind::UnexpectedEof,
			Overflow { .. } => io::ErrorKind::WriteZero,
			InvalidArgument(_) => io::ErrorKind::InvalidInput,
			Utf8 => io::ErrorKind::InvalidData,
			Allocation => io::ErrorKind::OutOfMemory,
		};
		io::Error::new(kind, value)
	}
}

#[cfg(test)]
mod test {
	use std::io;
	use pretty_assertions::assert_eq;
	use super::{Error, ErrorKind, OperationKind};

	#[test]
	fn display() {
		let error = Error::underrun(OperationKind::Read, 4, 1);
		assert_eq!(
			error.to_string(),
			"read from stream failed; buffer underrun (4 bytes needed, 1 unread)"
		);
		assert_eq!(
			Error::invalid_argument(OperationKind::Write, "length exceeds data").to_string(),
			"write to stream failed; invalid argument: length exceeds data"
		);
	}

	#[test]
	fn kind() {
		let error = Error::overflow(OperationKind::Write, 8, 2);
		assert!(error.kind().is_overflow());
		assert_eq!(error.kind(), ErrorKind::Overflow { needed: 8, free: 2 });
		assert_eq!(error.with_operation(OperationKind::Grow).operation(), OperationKind::Grow);
	}

	#[test]
	fn into_io() {
		let error: io::Error = Error::underrun(OperationKind::Read, 2, 0).into();
		assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
		let error: io::Error = Error::overflow(OperationKind::Write, 2, 0).into();
		assert_eq!(error.kind(), io::ErrorKind::WriteZero);
		let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
		let error: io::Error = Error::allocation(OperationKind::Grow, source).into();
		assert_eq!(error.kind(), io::ErrorKind::OutOfMemory);
	}
}
