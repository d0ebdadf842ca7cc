// Domain model: URI templates and the values they expand

pub mod template;
pub mod value;

pub use template::{Expression, Template, Term, VariableExpression};
pub use value::{Value, Variables};
