//! Span scanning for `{{...}}` tokens and `{{if}}` blocks.
//!
//! Both scanners walk the input left to right and never revisit text they
//! already consumed, so a block can't be produced by another block's
//! replacement and blocks never nest.

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const IF_OPEN: &str = "{{if";
const ELSE_TAG: &str = "{{else}}";
const ENDIF_TAG: &str = "{{endif}}";

/// A `{{...}}` token; `content` excludes the braces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub start: usize,
    pub end: usize,
    pub content: &'a str,
}

/// A complete `{{if ...}}...{{endif}}` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalBlock<'a> {
    pub start: usize,
    pub end: usize,
    pub condition: &'a str,
    pub then_branch: &'a str,
    pub else_branch: Option<&'a str>,
}

/// Find every `{{content}}` token with non-empty content containing no `}`.
pub fn tokens(input: &str) -> Vec<Token<'_>> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(OPEN) {
        let start = cursor + offset;
        let inner = start + OPEN.len();
        let rest = &input[inner..];

        match rest.find('}') {
            Some(close) if close > 0 && rest[close..].starts_with(CLOSE) => {
                let end = inner + close + CLOSE.len();
                found.push(Token {
                    start,
                    end,
                    content: &rest[..close],
                });
                cursor = end;
            }
            _ => cursor = start + 1,
        }
    }

    found
}

/// Find every well-formed conditional block.
///
/// The `then` branch stops at the first `{{else}}` or `{{endif}}` after the
/// head; the `else` branch stops at the first `{{endif}}`. An `{{if}}` with
/// no `{{endif}}` after it is skipped and stays plain text.
pub fn conditional_blocks(input: &str) -> Vec<ConditionalBlock<'_>> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(IF_OPEN) {
        let start = cursor + offset;
        match match_conditional(input, start) {
            Some(block) => {
                cursor = block.end;
                found.push(block);
            }
            None => cursor = start + 1,
        }
    }

    found
}

fn match_conditional(input: &str, start: usize) -> Option<ConditionalBlock<'_>> {
    let head_start = start + IF_OPEN.len();
    let rest = &input[head_start..];
    let close = rest.find('}')?;
    let head = &rest[..close];

    // At least one whitespace separator followed by at least one more char
    let mut chars = head.chars();
    if !chars.next()?.is_whitespace() || chars.next().is_none() {
        return None;
    }
    if !rest[close..].starts_with(CLOSE) {
        return None;
    }

    let body_start = head_start + close + CLOSE.len();
    let body_end = body_start + input[body_start..].find(ENDIF_TAG)?;
    let body = &input[body_start..body_end];

    let (then_branch, else_branch) = match body.find(ELSE_TAG) {
        Some(split) => (&body[..split], Some(&body[split + ELSE_TAG.len()..])),
        None => (body, None),
    };

    Some(ConditionalBlock {
        start,
        end: body_end + ENDIF_TAG.len(),
        condition: head,
        then_branch,
        else_branch,
    })
}

/// A byte range of the scanned input
pub trait Span {
    fn bounds(&self) -> (usize, usize);
}

impl Span for Token<'_> {
    fn bounds(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl Span for ConditionalBlock<'_> {
    fn bounds(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Rebuild `input` with each span replaced by `replace(span)`.
///
/// Spans must be sorted and non-overlapping, as both scanners guarantee.
pub fn replace_spans<S, F>(input: &str, spans: &[S], mut replace: F) -> String
where
    S: Span,
    F: FnMut(&S) -> String,
{
    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;

    for span in spans {
        let (start, end) = span.bounds();
        output.push_str(&input[cursor..start]);
        output.push_str(&replace(span));
        cursor = end;
    }

    output.push_str(&input[cursor..]);
    output
}
