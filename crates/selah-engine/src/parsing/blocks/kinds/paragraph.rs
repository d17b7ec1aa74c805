/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the default block when no other
/// opener matches. Their lines are trimmed and joined with [`Paragraph::JOINER`].
pub struct Paragraph;

impl Paragraph {
    /// Separator placed between the accumulated lines of one paragraph.
    pub const JOINER: &'static str = " ";
}
