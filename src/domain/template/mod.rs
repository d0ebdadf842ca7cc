// Template module for RFC 6570 URI templates (levels 1-4)
//
// This module provides parsing of URI templates into expressions and their
// expansion against variable bindings, including percent-encoding.

mod ast;
mod encoding;
mod expansion;
mod operator;
mod parser;
mod term;

pub use ast::{Expression, Template, Term, VariableExpression};
pub use encoding::{is_reserved, is_unreserved, pct_encode, pct_encode_char};
pub use expansion::{
    expand_expression, expand_list, expand_map, expand_name, expand_string, ExpandContext,
};
pub use operator::{Operator, OperatorSpec};
pub use parser::{parse_expression, TemplateParser};
pub use term::parse_term;

use crate::domain::value::Variables;
use crate::error::ParseError;

/// Parse `template` into its ordered expressions
pub fn parse(template: &str) -> Result<Vec<Expression>, ParseError> {
    TemplateParser::parse(template).map(Template::into_expressions)
}

/// Parse `template` and expand it against `variables`.
///
/// Variables that are missing or undefined expand to nothing; only syntax
/// errors fail.
pub fn expand(template: &str, variables: &Variables) -> Result<String, ParseError> {
    Ok(TemplateParser::parse(template)?.expand(variables))
}

impl Template {
    pub fn parse(template: &str) -> Result<Self, ParseError> {
        TemplateParser::parse(template)
    }
}

impl std::str::FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateParser::parse(s)
    }
}
