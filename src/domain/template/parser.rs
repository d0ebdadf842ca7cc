// Template parser: single pass over the template text

use tracing::{debug, trace};

use crate::error::{ParseError, ParseErrorKind};

use super::ast::{Expression, Template, VariableExpression};
use super::operator::Operator;
use super::term::parse_term;

#[derive(Debug, Clone, Copy)]
enum ParseState {
    Literal,
    /// Inside `{...}`; byte offset and 1-based position of the opening brace
    Variable { open: usize, position: usize },
}

pub struct TemplateParser<'a> {
    input: &'a str,
    state: ParseState,
    /// Byte offset where the pending literal starts
    cursor: usize,
    parts: Vec<Expression>,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Result<Template, ParseError> {
        let mut parser = Self {
            input: template,
            state: ParseState::Literal,
            cursor: 0,
            parts: Vec::new(),
        };
        parser.parse_template()?;

        debug!(template, expressions = parser.parts.len(), "parsed template");
        Ok(Template::new(parser.parts))
    }

    fn parse_template(&mut self) -> Result<(), ParseError> {
        let mut last = None;

        for (index, (offset, ch)) in self.input.char_indices().enumerate() {
            let position = index + 1;
            last = Some(ch);

            match (self.state, ch) {
                (ParseState::Literal, '{') => {
                    self.flush_literal(offset);
                    self.state = ParseState::Variable {
                        open: offset,
                        position,
                    };
                }
                (ParseState::Literal, '}') => {
                    return Err(self.error(ParseErrorKind::UnmatchedClosingBrace, ch, position));
                }
                (ParseState::Variable { .. }, '{') => {
                    return Err(self.error(ParseErrorKind::NestedOpeningBrace, ch, position));
                }
                (ParseState::Variable { open, position: open_position }, '}') => {
                    let body = &self.input[open + 1..offset];
                    if body.is_empty() {
                        return Err(self.error(ParseErrorKind::EmptyExpression, ch, position));
                    }

                    let expression = parse_expression(body)
                        .map_err(|err| err.rebase(open_position, self.input))?;
                    trace!(%expression, "parsed expression");
                    self.parts.push(Expression::Variable(expression));

                    self.state = ParseState::Literal;
                    self.cursor = offset + 1;
                }
                _ => {}
            }
        }

        match (self.state, last) {
            (ParseState::Variable { .. }, Some(ch)) => Err(self.error(
                ParseErrorKind::UnterminatedExpression,
                ch,
                self.input.chars().count(),
            )),
            _ => {
                self.flush_literal(self.input.len());
                Ok(())
            }
        }
    }

    fn flush_literal(&mut self, end: usize) {
        if end > self.cursor {
            let literal = &self.input[self.cursor..end];
            trace!(literal, "parsed literal");
            self.parts.push(Expression::Literal(literal.to_string()));
        }
    }

    fn error(&self, kind: ParseErrorKind, ch: char, position: usize) -> ParseError {
        ParseError::new(kind, Some(ch), position, self.input)
    }
}

/// Parse the text between a pair of braces into a variable expression.
///
/// Error positions are relative to `body` (1-based); a position one past the
/// end of `body` refers to the closing brace.
pub fn parse_expression(body: &str) -> Result<VariableExpression, ParseError> {
    let operator = body.chars().next().and_then(Operator::from_char);
    let (list, mut consumed) = match operator {
        // operator characters are all single-byte
        Some(_) => (&body[1..], 1),
        None => (body, 0),
    };

    let mut terms = Vec::new();
    for spec in list.split(',') {
        let term = if spec.is_empty() {
            Err(ParseError::new(
                ParseErrorKind::EmptyVariableName,
                body.chars().nth(consumed),
                consumed + 1,
                body,
            ))
        } else {
            parse_term(spec).map_err(|err| err.rebase(consumed, body))
        }?;
        terms.push(term);
        consumed += spec.chars().count() + 1;
    }

    Ok(VariableExpression::new(
        operator.unwrap_or(Operator::Simple),
        terms,
    ))
}
