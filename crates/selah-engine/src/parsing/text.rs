use std::borrow::Cow;

/// Byte order mark some clients prepend to pasted text.
const BOM: char = '\u{feff}';

/// Drops a leading byte order mark and rewrites `\r\n` and lone `\r` line
/// breaks to `\n`.
///
/// Borrows when the input has no carriage returns, which is the common case
/// for text coming from the chat service.
pub fn normalize_line_breaks(s: &str) -> Cow<'_, str> {
    let s = s.strip_prefix(BOM).unwrap_or(s);
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Splits normalized text into lines, without their `\n` terminators.
///
/// A trailing newline yields a final empty line, which classifies as blank.
pub fn lines(s: &str) -> impl Iterator<Item = &str> + '_ {
    s.split('\n')
}
