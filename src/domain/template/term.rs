// Variable-spec parsing: `name`, `name:N`, `name*`

use crate::error::{ParseError, ParseErrorKind};

use super::ast::Term;

/// Parse one comma-separated variable-spec.
///
/// Error positions are relative to `spec` (1-based).
pub fn parse_term(spec: &str) -> Result<Term, ParseError> {
    let (body, explode) = match spec.strip_suffix('*') {
        Some(stripped) => (stripped, true),
        None => (spec, false),
    };

    let mut parts = body.split(':');
    let name = parts.next().unwrap_or_default();
    let length = parts.next();

    if parts.next().is_some() {
        // points at the second ':'
        let position = name.chars().count() + length.map_or(0, |l| l.chars().count()) + 2;
        return Err(malformed(spec, position));
    }

    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::EmptyVariableName,
            spec.chars().next(),
            1,
            spec,
        ));
    }

    let colon = name.chars().count() + 1;
    let truncate = match length {
        None => 0,
        Some(length) => parse_length(spec, length, colon)?,
    };

    if explode && truncate > 0 {
        return Err(ParseError::new(
            ParseErrorKind::ConflictingModifiers,
            Some('*'),
            spec.chars().count(),
            spec,
        ));
    }

    Ok(Term {
        name: name.to_string(),
        explode,
        truncate,
    })
}

/// Digits following the `:` at character position `colon`
fn parse_length(spec: &str, length: &str, colon: usize) -> Result<usize, ParseError> {
    if length.is_empty() {
        return Err(malformed(spec, colon));
    }

    if let Some(index) = length.chars().position(|ch| !ch.is_ascii_digit()) {
        return Err(malformed(spec, colon + index + 1));
    }

    // all digits, so the only failure is overflow: a limit no value can reach
    Ok(length.parse().unwrap_or(usize::MAX))
}

fn malformed(spec: &str, position: usize) -> ParseError {
    ParseError::new(
        ParseErrorKind::MalformedModifier,
        spec.chars().nth(position - 1),
        position,
        spec,
    )
}
