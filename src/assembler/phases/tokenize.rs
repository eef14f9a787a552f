use super::types::Loc;

const COMMENT_CHAR: char = '#';

/// One source line that is worth attempting to assemble: its code text
/// (comment stripped, whitespace trimmed) is nonempty.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub loc: Loc,
    pub code: &'a str,
    pub comment: Option<&'a str>,
}

/// Splits a raw line at the first `#` into (code, comment), trimming
/// both halves. Total over all strings; a line with no `#` comes back
/// whole with no comment.
pub fn split_comment(raw: &str) -> (&str, Option<&str>) {
    match raw.find(COMMENT_CHAR) {
        Some(idx) => (
            raw[..idx].trim(),
            Some(raw[idx + COMMENT_CHAR.len_utf8()..].trim()),
        ),
        None => (raw.trim(), None),
    }
}

/// Splits a source into its assemblable lines, numbered from 1. Blank
/// lines and comment-only lines are dropped here, before any parsing
/// is attempted.
pub fn tokenize(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let (code, comment) = split_comment(raw);
            if code.is_empty() {
                return None;
            }
            Some(SourceLine {
                loc: Loc::new(idx + 1),
                code,
                comment,
            })
        })
        .collect()
}
