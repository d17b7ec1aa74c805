/// Emphasis and strong emphasis delimiters.
///
/// `*` and `_` open emphasis singly and strong emphasis when doubled. The
/// two markers never close each other.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// Length of a strong delimiter run.
    pub const STRONG_RUN: usize = 2;

    pub fn is_marker(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Finds the index of the closing `marker marker` for strong text whose
    /// inner content starts at `from`. The inner content is never empty.
    ///
    /// Backticks are plain bytes here: a closer inside a later code span
    /// still closes, since strong is tried before code at every position.
    ///
    /// A closer inside a longer run (`***`) closes at the end of the run so a
    /// trailing single marker stays with the inner text.
    pub fn strong_close(b: &[u8], marker: u8, from: usize) -> Option<usize> {
        let mut j = from;
        while j < b.len() {
            if j > from && b[j] == marker && b.get(j + 1) == Some(&marker) {
                while b.get(j + Self::STRONG_RUN) == Some(&marker) {
                    j += 1;
                }
                return Some(j);
            }
            j += 1;
        }
        None
    }

    /// Finds the index of the single closing `marker` for emphasis whose
    /// inner content starts at `from`.
    ///
    /// Doubled markers that have their own strong closer are nested strong
    /// text and are skipped whole.
    pub fn emphasis_close(b: &[u8], marker: u8, from: usize) -> Option<usize> {
        let mut j = from;
        while j < b.len() {
            if j > from && b[j] == marker {
                if b.get(j + 1) == Some(&marker)
                    && let Some(close) = Self::strong_close(b, marker, j + Self::STRONG_RUN)
                {
                    j = close + Self::STRONG_RUN;
                    continue;
                }
                return Some(j);
            }
            j += 1;
        }
        None
    }
}
