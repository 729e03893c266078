use crate::constants::{DEFAULT_NODENAME, NODENAME_CAPACITY};
use libc::c_char;
use std::fmt::{Debug, Display, Formatter};

/// A hostname held in a fixed-capacity buffer.
///
/// The stored bytes never contain NUL and never exceed
/// `NODENAME_CAPACITY - 1` bytes, longer input is truncated.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Nodename {
    buf: [u8; NODENAME_CAPACITY],
    len: usize,
}

impl Nodename {
    /// Build from raw bytes, stopping at the first NUL and truncating to capacity.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        let bytes = bytes
            .iter()
            .position(|b| *b == 0)
            .map_or(bytes, |end| &bytes[..end]);
        let len = bytes.len().min(NODENAME_CAPACITY - 1);
        let mut buf = [0; NODENAME_CAPACITY];
        buf[..len].copy_from_slice(&bytes[..len]);
        Nodename { buf, len }
    }

    /// Build from a C character field such as `utsname::nodename`.
    #[must_use]
    pub fn from_c_chars(chars: &[c_char]) -> Self {
        let bytes: Vec<u8> = chars
            .iter()
            .take_while(|c| **c != 0)
            .map(|c| *c as u8)
            .collect();
        Self::new(&bytes)
    }

    /// The stored bytes, without terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of stored bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the nodename is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy into `dst` with `strncpy` semantics: at most `dst.len()` bytes are
    /// written, the rest of `dst` is zero filled, and no terminator is written
    /// when the nodename does not fit.
    pub fn copy_to(&self, dst: &mut [c_char]) {
        let n = self.len.min(dst.len());
        for (d, s) in dst.iter_mut().zip(&self.buf[..n]) {
            *d = *s as c_char;
        }
        dst[n..].fill(0);
    }
}

impl Default for Nodename {
    fn default() -> Self {
        Self::new(DEFAULT_NODENAME.as_bytes())
    }
}

/// Invalid UTF-8 is rendered as U+FFFD, [`Nodename::copy_to`] keeps the raw bytes.
impl Display for Nodename {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Debug for Nodename {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Nodename")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
