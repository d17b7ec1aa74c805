use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, LinkScan},
    options::InlineOptions,
    types::Span,
};

/// A recognized token before its inner text has been rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Strong(&'a str),
    Emphasis(&'a str),
    Code(&'a str),
    Link { text: &'a str, href: &'a str },
}

/// Parses inline content into a sequence of [`Span`]s with default options.
pub fn parse_inline(s: &str) -> Vec<Span> {
    parse_inline_with(s, &InlineOptions::default())
}

/// Parses inline content into a sequence of [`Span`]s.
///
/// # Precedence
/// At each position strong, emphasis, code span and link are tried in that
/// order and the first that matches wins. Strong must come before emphasis
/// since `**` starts with `*`.
///
/// # Returns
/// Nodes covering the entire input. Text between tokens, including any
/// unterminated or malformed delimiter, is emitted as one `Span::Text` per
/// run. Never fails.
pub fn parse_inline_with(s: &str, options: &InlineOptions) -> Vec<Span> {
    parse_nested(s, 0, options.effective_max_depth())
}

fn parse_nested(s: &str, depth: usize, max_depth: usize) -> Vec<Span> {
    if s.is_empty() {
        return vec![];
    }
    if depth >= max_depth {
        log::debug!(
            "inline nesting limit {max_depth} reached, keeping {} bytes as text",
            s.len()
        );
        return vec![Span::text(s)];
    }

    let mut cur = Cursor::new(s);
    let mut links = LinkScan::new();
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<Span>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Span::text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(token) = try_parse_token(&mut cur, &mut links) {
            flush_text(&mut out, s, text_start, start);
            out.push(render_token(token, depth + 1, max_depth));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Tries every token shape in precedence order at the cursor.
fn try_parse_token<'a>(cur: &mut Cursor<'a>, links: &mut LinkScan) -> Option<Token<'a>> {
    try_parse_strong(cur)
        .or_else(|| try_parse_emphasis(cur))
        .or_else(|| try_parse_code_span(cur))
        .or_else(|| try_parse_link(cur, links))
}

fn render_token(token: Token<'_>, depth: usize, max_depth: usize) -> Span {
    match token {
        Token::Strong(inner) => Span::strong(parse_nested(inner, depth, max_depth)),
        Token::Emphasis(inner) => Span::emphasis(parse_nested(inner, depth, max_depth)),
        Token::Code(inner) => Span::code(inner),
        Token::Link { text, href } => Span::link(href, parse_nested(text, depth, max_depth)),
    }
}

/// Attempts to parse `**strong**` or `__strong__` at the cursor.
///
/// On failure the cursor is left where it was.
fn try_parse_strong<'a>(cur: &mut Cursor<'a>) -> Option<Token<'a>> {
    let marker = cur.peek().filter(|&b| Emphasis::is_marker(b))?;
    if !cur.starts_with(&[marker, marker]) {
        return None;
    }

    let open = cur.pos();
    let inner_start = open + Emphasis::STRONG_RUN;
    let close = Emphasis::strong_close(cur.bytes(), marker, inner_start)?;
    cur.bump_n(close + Emphasis::STRONG_RUN - open);

    Some(Token::Strong(&cur.s[inner_start..close]))
}

/// Attempts to parse `*emphasis*` or `_emphasis_` at the cursor.
///
/// A doubled marker is never an emphasis opener, so `**oops*` leaves the
/// first `*` as text and emphasizes from the second one.
fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<Token<'a>> {
    let marker = cur.peek().filter(|&b| Emphasis::is_marker(b))?;
    if cur.starts_with(&[marker, marker]) {
        return None;
    }

    let open = cur.pos();
    let inner_start = open + 1;
    let close = Emphasis::emphasis_close(cur.bytes(), marker, inner_start)?;
    cur.bump_n(close + 1 - open);

    Some(Token::Emphasis(&cur.s[inner_start..close]))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty or if it isn't
/// closed.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<Token<'a>> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let start = cur.pos();
    let end = CodeSpan::end(cur.bytes(), start)?;
    cur.bump_n(end - start);

    Some(Token::Code(&cur.s[start + 1..end - 1]))
}

/// Attempts to parse `[text](href)` starting at the current position.
///
/// Delimiter lookups go through `scan`, which is shared by every opener in
/// one scan so runs of unmatched brackets stay linear. The cursor only moves
/// on success.
fn try_parse_link<'a>(cur: &mut Cursor<'a>, scan: &mut LinkScan) -> Option<Token<'a>> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let b = cur.bytes();
    let text_start = cur.pos() + 1;
    let text_end = scan.text_close.find(b, text_start)?;
    if text_end == text_start || b.get(text_end + 1) != Some(&Link::HREF_OPEN) {
        return None;
    }

    let href_start = text_end + 2;
    let href_end = scan.href_close.find(b, href_start)?;
    if href_end == href_start {
        return None;
    }
    cur.bump_n(href_end + 1 - cur.pos());

    Some(Token::Link {
        text: &cur.s[text_start..text_end],
        href: &cur.s[href_start..href_end],
    })
}
