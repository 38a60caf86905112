// SPDX-License-Identifier: Apache-2.0

use all_asserts::assert_le;
use ::bytes::{Buf, Bytes};
use crate::MemoryStream;

impl Buf for MemoryStream {
	fn remaining(&self) -> usize { self.unread_size() }

	fn chunk(&self) -> &[u8] { self.unread() }

	fn advance(&mut self, cnt: usize) {
		assert_le!(cnt, self.unread_size());
		self.read += cnt;
	}
}

impl From<MemoryStream> for Bytes {
	fn from(value: MemoryStream) -> Self {
		value.into_unread().into()
	}
}
