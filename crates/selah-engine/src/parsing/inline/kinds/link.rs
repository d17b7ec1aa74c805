/// Inline link `[text](href)` delimiters.
///
/// The text runs to the first `]`, which must be followed directly by `(`;
/// the href runs to the first `)`. Both must be non-empty.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}

/// Finds the next occurrence of one byte, remembering the last answer.
///
/// Link openers are tried at increasing positions and each one searches for
/// the *first* `]` or `)` after it, so consecutive searches usually share an
/// answer. A cached result is reused whenever the new search starts inside
/// the range the previous scan already covered, which keeps every byte of
/// the input scanned at most once per delimiter.
#[derive(Debug)]
pub struct NextByte {
    byte: u8,
    /// `(scan start, first hit at or after it)` of the last real scan.
    last: Option<(usize, Option<usize>)>,
    scanned: usize,
}

impl NextByte {
    pub fn new(byte: u8) -> Self {
        Self {
            byte,
            last: None,
            scanned: 0,
        }
    }

    /// Index of the first `byte` in `b` at or after `from`.
    pub fn find(&mut self, b: &[u8], from: usize) -> Option<usize> {
        if let Some((start, hit)) = self.last
            && from >= start
            && hit.is_none_or(|at| from <= at)
        {
            return hit;
        }
        let rest = b.get(from..).unwrap_or_default();
        let hit = rest.iter().position(|&c| c == self.byte);
        self.scanned += hit.map_or(rest.len(), |i| i + 1);
        let hit = hit.map(|i| from + i);
        self.last = Some((from, hit));
        hit
    }

    /// Total bytes examined so far.
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

/// Per-call lookahead state for link parsing.
#[derive(Debug)]
pub struct LinkScan {
    pub text_close: NextByte,
    pub href_close: NextByte,
}

impl LinkScan {
    pub fn new() -> Self {
        Self {
            text_close: NextByte::new(Link::TEXT_CLOSE),
            href_close: NextByte::new(Link::HREF_CLOSE),
        }
    }
}

impl Default for LinkScan {
    fn default() -> Self {
        Self::new()
    }
}
