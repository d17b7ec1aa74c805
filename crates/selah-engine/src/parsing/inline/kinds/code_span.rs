/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
/// They do not shield their backticked text from an emphasis or strong token
/// that opened earlier and finds its closer inside.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Given the index of an opening tick, returns the index just past the
    /// closing tick. Empty spans (two adjacent ticks) do not count.
    pub fn end(b: &[u8], open: usize) -> Option<usize> {
        if b.get(open) != Some(&Self::TICK) {
            return None;
        }
        let inner = open + 1;
        let close = inner + b.get(inner..)?.iter().position(|&c| c == Self::TICK)?;
        (close > inner).then_some(close + 1)
    }
}
