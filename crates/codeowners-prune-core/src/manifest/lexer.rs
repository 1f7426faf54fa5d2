//! Lexer for manifest lines.
//!
//! This module contains nom-based parsers that split entry lines into
//! their pattern and owner components.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{char, space0, space1},
    combinator::rest,
};

/// Characters that can appear in a pattern token.
///
/// A `#` only introduces a comment at the start of a line; inside an entry
/// it is ordinary pattern or owner text.
fn is_pattern_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (space0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Result of splitting an entry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryComponents<'a> {
    /// The pattern token.
    pub pattern: &'a str,
    /// The owner text after the first run of whitespace, trailing
    /// whitespace trimmed. `None` when the line holds only a pattern.
    pub owner: Option<&'a str>,
}

/// Splits an entry line into its pattern and owner text.
///
/// The pattern is the first whitespace-delimited token; the owner is
/// everything after the first run of whitespace, with internal whitespace
/// preserved.
pub fn parse_entry_components(input: &str) -> IResult<&str, EntryComponents<'_>> {
    // Skip leading whitespace
    let (after_ws, _) = space0(input)?;

    // Parse pattern
    let (after_pattern, pattern) = take_while1(is_pattern_char)(after_ws)?;

    // Owner text is optional
    let parsed: IResult<&str, (&str, &str)> = (space1, rest).parse(after_pattern);
    match parsed {
        Ok((remaining, (_, owner_text))) => {
            let owner_text = owner_text.trim_end();
            let owner = (!owner_text.is_empty()).then_some(owner_text);
            Ok((remaining, EntryComponents { pattern, owner }))
        }
        Err(_) => Ok((after_pattern, EntryComponents { pattern, owner: None })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_blank_line_cases() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   "));
        assert!(is_blank_line("\t  \t"));
        assert!(!is_blank_line("*.rs @owner"));
        assert!(!is_blank_line("# comment"));
    }

    #[test]
    fn parse_comment_line_no_whitespace() {
        let (_rest, content) = parse_comment_line("# This is a comment").unwrap();
        assert_eq!(content, " This is a comment");
    }

    #[test]
    fn parse_comment_line_with_leading_whitespace() {
        let (_rest, content) = parse_comment_line("   # comment").unwrap();
        assert_eq!(content, " comment");
    }

    #[test]
    fn parse_comment_line_rejects_entries() {
        assert!(parse_comment_line("*.rs @owner").is_err());
    }

    #[test]
    fn entry_with_single_owner() {
        let (_rest, components) = parse_entry_components("*.rs @owner").unwrap();
        assert_eq!(components.pattern, "*.rs");
        assert_eq!(components.owner, Some("@owner"));
    }

    #[test]
    fn entry_owner_keeps_internal_whitespace() {
        let (_rest, components) =
            parse_entry_components("/src/ @dev @github/core dev@example.com").unwrap();
        assert_eq!(components.pattern, "/src/");
        assert_eq!(components.owner, Some("@dev @github/core dev@example.com"));
    }

    #[test]
    fn entry_without_owner() {
        let (_rest, components) = parse_entry_components("*.rs").unwrap();
        assert_eq!(components.pattern, "*.rs");
        assert_eq!(components.owner, None);
    }

    #[test]
    fn entry_with_trailing_whitespace_only() {
        let (_rest, components) = parse_entry_components("*.rs   ").unwrap();
        assert_eq!(components.pattern, "*.rs");
        assert_eq!(components.owner, None);
    }

    #[test]
    fn entry_with_leading_whitespace() {
        let (_rest, components) = parse_entry_components("  *.md @docs").unwrap();
        assert_eq!(components.pattern, "*.md");
        assert_eq!(components.owner, Some("@docs"));
    }

    #[test]
    fn hash_inside_entry_is_not_a_comment() {
        let (_rest, components) = parse_entry_components("src/x.txt # note").unwrap();
        assert_eq!(components.pattern, "src/x.txt");
        assert_eq!(components.owner, Some("# note"));
    }

    #[test]
    fn blank_input_fails() {
        assert!(parse_entry_components("   ").is_err());
    }
}
