/// A cursor for byte-by-byte inline scanning.
///
/// All inline delimiters are ASCII, so a byte that matches one is always on a
/// `char` boundary; slicing at a matched delimiter never splits a code point.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The whole input as bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.s.as_bytes()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
