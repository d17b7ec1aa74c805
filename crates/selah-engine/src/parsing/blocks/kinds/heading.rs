/// ATX heading block type with owned marker constants.
///
/// A heading line is 1 to 6 `#` characters followed by whitespace. The
/// content is everything after that, trimmed.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level recognized; longer marker runs are plain text.
    pub const MAX_DEPTH: usize = 6;

    /// Parses a trimmed line as a heading, returning `(depth, content)`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let depth = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if depth == 0 || depth > Self::MAX_DEPTH {
            return None;
        }
        let rest = &line[depth..];
        if !rest.chars().next()?.is_whitespace() {
            return None;
        }
        Some((depth as u8, rest.trim()))
    }
}
