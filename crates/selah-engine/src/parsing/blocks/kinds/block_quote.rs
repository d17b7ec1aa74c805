/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in classifier
/// code. Only a single leading `>` is stripped; `>> nested` keeps its second
/// marker as content.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix and at most one following whitespace
    /// character, returning the quoted content.
    ///
    /// Returns `None` when the line does not start with `>`.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => Some(rest),
        }
    }
}
