// Abstract Syntax Tree types for URI templates

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

use super::operator::{Operator, OperatorSpec};

/// A parsed template as a list of expressions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    parts: Vec<Expression>,
}

impl Template {
    pub fn new(parts: Vec<Expression>) -> Self {
        Self { parts }
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.parts
    }

    pub fn into_expressions(self) -> Vec<Expression> {
        self.parts
    }

    /// Names referenced by the template in declared order, without repeats
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for term in self.parts.iter().flat_map(Expression::terms) {
            if !names.contains(&term.name.as_str()) {
                names.push(&term.name);
            }
        }
        names
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parts.iter().try_for_each(|part| write!(f, "{}", part))
    }
}

/// A template consists of literal text and variable expressions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Expression {
    Literal(String),
    Variable(VariableExpression),
}

impl Expression {
    pub fn terms(&self) -> &[Term] {
        match self {
            Expression::Literal(_) => &[],
            Expression::Variable(var) => &var.terms,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(text) => f.write_str(text),
            Expression::Variable(var) => write!(f, "{}", var),
        }
    }
}

/// A `{...}` expression: its operator and the terms it lists.
///
/// Every expansion parameter derives from the operator, so they are exposed
/// as accessors rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableExpression {
    pub operator: Operator,
    pub terms: Vec<Term>,
}

impl VariableExpression {
    pub fn new(operator: Operator, terms: Vec<Term>) -> Self {
        Self { operator, terms }
    }

    pub fn spec(&self) -> &'static OperatorSpec {
        self.operator.spec()
    }

    pub fn allow_reserved(&self) -> bool {
        self.spec().allow_reserved
    }

    pub fn first(&self) -> &'static str {
        self.spec().first
    }

    pub fn if_empty(&self) -> &'static str {
        self.spec().if_empty
    }

    pub fn named(&self) -> bool {
        self.spec().named
    }

    pub fn separator(&self) -> &'static str {
        self.spec().separator
    }
}

impl Serialize for VariableExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VariableExpression", 7)?;
        state.serialize_field("operator", &self.operator)?;
        state.serialize_field("allow_reserved", &self.allow_reserved())?;
        state.serialize_field("first", self.first())?;
        state.serialize_field("if_empty", self.if_empty())?;
        state.serialize_field("named", &self.named())?;
        state.serialize_field("separator", self.separator())?;
        state.serialize_field("terms", &self.terms)?;
        state.end()
    }
}

impl fmt::Display for VariableExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        if let Some(symbol) = self.operator.symbol() {
            write!(f, "{}", symbol)?;
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", term)?;
        }
        f.write_str("}")
    }
}

/// One variable reference inside an expression
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Term {
    pub name: String,
    pub explode: bool,
    /// Maximum prefix length, 0 for none
    pub truncate: usize,
}

impl Term {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    pub fn with_truncate(mut self, truncate: usize) -> Self {
        self.truncate = truncate;
        self
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.truncate > 0 {
            write!(f, ":{}", self.truncate)?;
        }
        if self.explode {
            f.write_str("*")?;
        }
        Ok(())
    }
}
