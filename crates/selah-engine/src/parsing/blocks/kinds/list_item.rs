/// List item markers, both bullet (`-`, `*`, `+`) and ordinal (`1.`).
///
/// A marker only counts when followed by whitespace; the item text is the
/// remainder after that whitespace run.
pub struct ListItem;

impl ListItem {
    /// Characters that open an unordered item.
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    /// Character that terminates the digits of an ordered item.
    pub const ORDINAL_SUFFIX: char = '.';

    /// Parses an unordered item, returning its text.
    pub fn bullet(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::BULLETS)?;
        Self::after_gap(rest)
    }

    /// Parses an ordered item, returning its text. The number itself is
    /// not kept; ordered lists are always numbered from one on display.
    pub fn ordinal(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = line[digits..].strip_prefix(Self::ORDINAL_SUFFIX)?;
        Self::after_gap(rest)
    }

    fn after_gap(rest: &str) -> Option<&str> {
        let content = rest.trim_start();
        if content.len() == rest.len() {
            return None;
        }
        Some(content)
    }
}
