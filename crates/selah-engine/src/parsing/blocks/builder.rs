use super::{classify::LineClass, kinds::Paragraph, types::Block};

/// An open list waiting for more items.
#[derive(Debug)]
struct ListBuffer<'a> {
    ordered: bool,
    items: Vec<&'a str>,
}

/// Phase 2 of block parsing: a line-driven state machine.
///
/// Holds at most one pending paragraph and one pending list. Each classified
/// line either extends one of them or flushes them and emits a block
/// directly. Output order always equals the order lines were pushed.
pub struct BlockBuilder<'a> {
    paragraph: Vec<&'a str>,
    list: Option<ListBuffer<'a>>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            paragraph: vec![],
            list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'a>) {
        match c {
            LineClass::Blank => {
                self.flush_paragraph();
                self.flush_list();
            }
            LineClass::Heading { depth, content } => {
                self.flush_paragraph();
                self.flush_list();
                self.out.push(Block::Heading {
                    depth,
                    content: content.to_string(),
                });
            }
            LineClass::Quote { content } => {
                self.flush_paragraph();
                self.flush_list();
                self.out.push(Block::Blockquote {
                    content: content.to_string(),
                });
            }
            LineClass::ListItem { ordered, content } => {
                self.flush_paragraph();
                self.extend_list(ordered, content);
            }
            LineClass::Text(line) => {
                self.flush_list();
                self.paragraph.push(line);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        self.flush_list();
        self.out
    }

    fn extend_list(&mut self, ordered: bool, item: &'a str) {
        if self.list.as_ref().is_some_and(|l| l.ordered != ordered) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| ListBuffer {
                ordered,
                items: vec![],
            })
            .items
            .push(item);
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let content = self.paragraph.join(Paragraph::JOINER);
        self.paragraph.clear();
        self.out.push(Block::Paragraph { content });
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.out.push(Block::List {
                ordered: list.ordered,
                items: list.items.into_iter().map(str::to_string).collect(),
            });
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
