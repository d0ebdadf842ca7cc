// Expression operators and their expansion parameters

use serde::{Serialize, Serializer};

/// Leading character of an expression body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator: `{var}`
    Simple,
    /// `{+var}`
    Reserved,
    /// `{#var}`
    Fragment,
    /// `{.var}`
    Label,
    /// `{/var}`
    PathSegment,
    /// `{;var}`
    PathParameter,
    /// `{?var}`
    Query,
    /// `{&var}`
    QueryContinuation,
}

/// Fixed expansion parameters selected by an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub allow_reserved: bool,
    pub first: &'static str,
    pub if_empty: &'static str,
    pub named: bool,
    pub separator: &'static str,
}

const SIMPLE: OperatorSpec = OperatorSpec {
    allow_reserved: false,
    first: "",
    if_empty: "",
    named: false,
    separator: ",",
};

const RESERVED: OperatorSpec = OperatorSpec {
    allow_reserved: true,
    ..SIMPLE
};

const FRAGMENT: OperatorSpec = OperatorSpec {
    allow_reserved: true,
    first: "#",
    ..SIMPLE
};

const LABEL: OperatorSpec = OperatorSpec {
    first: ".",
    separator: ".",
    ..SIMPLE
};

const PATH_SEGMENT: OperatorSpec = OperatorSpec {
    first: "/",
    separator: "/",
    ..SIMPLE
};

const PATH_PARAMETER: OperatorSpec = OperatorSpec {
    first: ";",
    named: true,
    separator: ";",
    ..SIMPLE
};

const QUERY: OperatorSpec = OperatorSpec {
    first: "?",
    if_empty: "=",
    named: true,
    separator: "&",
    ..SIMPLE
};

const QUERY_CONTINUATION: OperatorSpec = OperatorSpec {
    first: "&",
    ..QUERY
};

impl Operator {
    /// Operator selected by `ch`, or `None` when `ch` starts a variable name
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParameter),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Operator::Simple => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::PathSegment => Some('/'),
            Operator::PathParameter => Some(';'),
            Operator::Query => Some('?'),
            Operator::QueryContinuation => Some('&'),
        }
    }

    pub fn spec(self) -> &'static OperatorSpec {
        match self {
            Operator::Simple => &SIMPLE,
            Operator::Reserved => &RESERVED,
            Operator::Fragment => &FRAGMENT,
            Operator::Label => &LABEL,
            Operator::PathSegment => &PATH_SEGMENT,
            Operator::PathParameter => &PATH_PARAMETER,
            Operator::Query => &QUERY,
            Operator::QueryContinuation => &QUERY_CONTINUATION,
        }
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.symbol() {
            Some(ch) => serializer.serialize_char(ch),
            None => serializer.serialize_str(""),
        }
    }
}
