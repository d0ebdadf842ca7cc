//! RFC 6570 URI Template parsing and expansion (levels 1 to 4).
//!
//! ```
//! use uritemplate::{expand, Value, Variables};
//!
//! let mut vars = Variables::new();
//! vars.insert("x".to_string(), Value::from("1024"));
//! vars.insert("y".to_string(), Value::from("768"));
//!
//! assert_eq!(expand("{?x,y}", &vars).unwrap(), "?x=1024&y=768");
//! ```

pub mod commands;
pub mod config;
pub mod domain;
mod error;

pub use domain::template::{
    expand, parse, parse_expression, parse_term, pct_encode, pct_encode_char, Expression,
    Operator, OperatorSpec, Template, Term, VariableExpression,
};
pub use domain::value::{Value, Variables};
pub use error::{ParseError, ParseErrorKind};
