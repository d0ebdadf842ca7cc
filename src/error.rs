// Error handling for uritemplate

use std::fmt;
use thiserror::Error;

/// The kind of structural problem found while parsing a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnmatchedClosingBrace,
    NestedOpeningBrace,
    UnterminatedExpression,
    EmptyExpression,
    EmptyVariableName,
    MalformedModifier,
    ConflictingModifiers,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnmatchedClosingBrace => {
                write!(f, "closing brace without a matching opening brace")
            }
            ParseErrorKind::NestedOpeningBrace => write!(f, "nested opening brace"),
            ParseErrorKind::UnterminatedExpression => {
                write!(f, "unterminated expression, expected a closing brace")
            }
            ParseErrorKind::EmptyExpression => write!(f, "empty braces"),
            ParseErrorKind::EmptyVariableName => write!(f, "empty variable name"),
            ParseErrorKind::MalformedModifier => write!(f, "malformed variable modifier"),
            ParseErrorKind::ConflictingModifiers => {
                write!(f, "explode and prefix-truncation are mutually exclusive")
            }
        }
    }
}

/// Template syntax error.
///
/// `position` is 1-based and counts characters (not bytes) of `template`.
/// `character` is the character found at that position, or `None` when the
/// problem sits at the end of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position} ({}) in template {template:?}", describe(.character))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub character: Option<char>,
    pub position: usize,
    pub template: String,
}

fn describe(character: &Option<char>) -> String {
    match character {
        Some(ch) => format!("found '{}'", ch),
        None => "at end of input".to_string(),
    }
}

impl ParseError {
    pub fn new(
        kind: ParseErrorKind,
        character: Option<char>,
        position: usize,
        template: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            character,
            position,
            template: template.into(),
        }
    }

    /// Re-anchor an error raised on a fragment of `template`.
    ///
    /// `offset` is the number of characters of `template` that precede the
    /// fragment. The offending character is looked up again in the full text.
    pub(crate) fn rebase(mut self, offset: usize, template: &str) -> Self {
        self.position += offset;
        self.character = template.chars().nth(self.position - 1);
        self.template = template.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position_and_character() {
        let err = ParseError::new(ParseErrorKind::EmptyExpression, Some('}'), 2, "{}");
        assert_eq!(
            err.to_string(),
            "empty braces at position 2 (found '}') in template \"{}\""
        );
    }

    #[test]
    fn test_display_at_end_of_input() {
        let err = ParseError::new(ParseErrorKind::EmptyVariableName, None, 1, "");
        assert_eq!(
            err.to_string(),
            "empty variable name at position 1 (at end of input) in template \"\""
        );
    }

    #[test]
    fn test_rebase_moves_into_full_template() {
        // error at the second char of "a:b:c" inside "x{a:b:c}"
        let err = ParseError::new(ParseErrorKind::MalformedModifier, Some(':'), 4, "a:b:c")
            .rebase(2, "x{a:b:c}");
        assert_eq!(err.position, 6);
        assert_eq!(err.character, Some(':'));
        assert_eq!(err.template, "x{a:b:c}");
    }
}
