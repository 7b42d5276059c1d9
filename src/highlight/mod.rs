//! Incremental syntax highlighting for C-family sources.
//!
//! The highlighter re-derives colored spans for the visible row range on
//! every full redraw. The only state threaded between lines is a single
//! "inside block comment" flag plus the running bracket nesting depth; both
//! are recomputed from scratch each redraw, nothing is cached across
//! renders.
//!
//! Per line, in order: quoted strings are matched and masked out first (so
//! comment and keyword markers inside them are ignored), then block and
//! line comments, then preprocessor directives, angle-bracket includes,
//! reserved words, digit runs, and finally brackets colored by nesting
//! depth.

use std::ops::Range;
use std::path::Path;

use crate::buffer::TextBuffer;

/// Reserved words highlighted at identifier boundaries.
pub const KEYWORDS: [&str; 39] = [
    "auto", "bool", "break", "case", "char", "class", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long",
    "namespace", "private", "public", "register", "restrict", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void", "volatile",
    "while",
];

/// Span category. `Bracket` carries the nesting depth mod 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Directive,
    Comment,
    Str,
    Keyword,
    Number,
    Bracket(u8),
}

impl SpanKind {
    /// Fixed z-order: higher indices are painted over lower ones.
    pub const fn z_index(self) -> u8 {
        match self {
            Self::Directive => 0,
            Self::Comment => 1,
            Self::Str => 2,
            Self::Keyword => 3,
            Self::Number => 4,
            Self::Bracket(_) => 5,
        }
    }
}

/// A colored region of one buffer line, in byte columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub row: usize,
    pub start: usize,
    pub len: usize,
    pub kind: SpanKind,
}

/// Whether the highlighter is active for this path.
///
/// Case-sensitive extension match, decided once at load time.
pub fn is_c_family(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "c" | "cpp" | "h" | "hpp"))
}

#[derive(Debug, Default)]
struct ScanState {
    inside_block_comment: bool,
    bracket_depth: i32,
}

/// Compute highlight spans for a row range.
///
/// The block-comment flag starts clear at the first row and the bracket
/// depth counter runs across the entire range without resetting per line.
pub fn highlight_rows(buffer: &TextBuffer, rows: Range<usize>) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut state = ScanState::default();
    for row in rows {
        let Some(line) = buffer.line_at(row) else {
            break;
        };
        scan_line(&mut state, row, &line, &mut spans);
    }
    spans
}

fn scan_line(state: &mut ScanState, row: usize, line: &str, out: &mut Vec<HighlightSpan>) {
    let bytes = line.as_bytes();
    let mut masked = bytes.to_vec();
    let push = |out: &mut Vec<HighlightSpan>, start: usize, len: usize, kind: SpanKind| {
        if len > 0 {
            out.push(HighlightSpan {
                row,
                start,
                len,
                kind,
            });
        }
    };

    // 1. Match and blank quoted strings. An unterminated trailing quote
    // extends to end of line. Spans are suppressed inside a block comment
    // but the masking still happens.
    let mut i = 0;
    while i < masked.len() {
        if masked[i] == b'"' && !is_escaped(&masked, i) {
            let mut j = i + 1;
            while j < masked.len() && !(masked[j] == b'"' && !is_escaped(&masked, j)) {
                j += 1;
            }
            let end = if j < masked.len() { j + 1 } else { masked.len() };
            if !state.inside_block_comment {
                push(out, i, end - i, SpanKind::Str);
            }
            for b in &mut masked[i..end] {
                *b = b' ';
            }
            i = end;
        } else {
            i += 1;
        }
    }

    // 2. A carried block comment either terminates on this line or
    // swallows it whole.
    if state.inside_block_comment {
        let Some(t) = find(bytes, b"*/", 0) else {
            push(out, 0, line.len(), SpanKind::Comment);
            return;
        };
        push(out, 0, t + 2, SpanKind::Comment);
        state.inside_block_comment = false;
        let end = (t + 2).min(masked.len());
        for b in &mut masked[..end] {
            *b = b' ';
        }
        // remainder of the line scans as code
    }

    // 3. Comment openers, on the string-masked text.
    if let Some(t) = find(&masked, b"/*", 0) {
        state.inside_block_comment = true;
        push(out, t, line.len() - t, SpanKind::Comment);
        return;
    }
    if let Some(t) = find(&masked, b"//", 0) {
        push(out, t, line.len() - t, SpanKind::Comment);
        masked.truncate(t);
    }

    // 4. Preprocessor directives claim the whole line; no further scanning.
    if bytes.first() == Some(&b'#') {
        push(out, 0, line.len(), SpanKind::Directive);
        if line.starts_with("#include") {
            push(out, 8, line.len().saturating_sub(8), SpanKind::Str);
        } else if !line.starts_with("#define")
            && let Some((start, len)) = directive_arg_token(&masked)
        {
            push(out, start, len, SpanKind::Keyword);
        }
        return;
    }

    // 5. Text strictly between < and >, a `#include <...>` heuristic that
    // deliberately ignores pairing.
    let mut i = 0;
    while let Some(a) = find(&masked, b"<", i) {
        let Some(b) = find(&masked, b">", a + 1) else {
            break;
        };
        push(out, a + 1, b - a - 1, SpanKind::Keyword);
        i = b + 1;
    }

    // 6. Reserved words at identifier boundaries.
    for kw in KEYWORDS {
        let needle = kw.as_bytes();
        let mut from = 0;
        while let Some(at) = find(&masked, needle, from) {
            let left_ok = at == 0 || !masked[at - 1].is_ascii_alphanumeric();
            let after = at + needle.len();
            let right_ok = after >= masked.len() || !masked[after].is_ascii_alphanumeric();
            if left_ok && right_ok {
                push(out, at, needle.len(), SpanKind::Keyword);
            }
            from = at + 1;
        }
    }

    // 7. Maximal digit runs not adjacent to alphanumerics.
    let mut i = 0;
    while i < masked.len() {
        if masked[i].is_ascii_digit() {
            let mut j = i;
            while j < masked.len() && masked[j].is_ascii_digit() {
                j += 1;
            }
            let left_ok = i == 0 || !masked[i - 1].is_ascii_alphanumeric();
            let right_ok = j >= masked.len() || !masked[j].is_ascii_alphanumeric();
            if left_ok && right_ok {
                push(out, i, j - i, SpanKind::Number);
            }
            i = j;
        } else {
            i += 1;
        }
    }

    // 8. Brackets, colored by the depth before adjusting it. rem_euclid
    // keeps unbalanced closers in palette range.
    for (j, &b) in masked.iter().enumerate() {
        match b {
            b'(' | b'[' | b'{' => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let level = state.bracket_depth.rem_euclid(3) as u8;
                push(out, j, 1, SpanKind::Bracket(level));
                state.bracket_depth += 1;
            }
            b')' | b']' | b'}' => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let level = state.bracket_depth.rem_euclid(3) as u8;
                push(out, j, 1, SpanKind::Bracket(level));
                state.bracket_depth -= 1;
            }
            _ => {}
        }
    }
}

// A quote is escaped when preceded by an odd number of backslashes.
fn is_escaped(bytes: &[u8], at: usize) -> bool {
    let mut backslashes = 0;
    while backslashes < at && bytes[at - 1 - backslashes] == b'\\' {
        backslashes += 1;
    }
    backslashes % 2 == 1
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

// The first whitespace-delimited token after the directive name, in the
// comment-stripped text.
fn directive_arg_token(masked: &[u8]) -> Option<(usize, usize)> {
    let is_ws = |b: u8| b == b' ' || b == b'\t';
    let name_start = masked.iter().position(|&b| !is_ws(b))?;
    let name_end = name_start + masked[name_start..].iter().position(|&b| is_ws(b))?;
    let tok_start = name_end + masked[name_end..].iter().position(|&b| !is_ws(b))?;
    let tok_end = masked[tok_start..]
        .iter()
        .position(|&b| is_ws(b))
        .map_or(masked.len(), |p| p + tok_start);
    if tok_end > tok_start {
        Some((tok_start, tok_end - tok_start))
    } else {
        None
    }
}
