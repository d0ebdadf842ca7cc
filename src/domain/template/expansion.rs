// Expansion of parsed templates against variable bindings

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::domain::value::{Value, Variables};

use super::ast::{Expression, Template, Term, VariableExpression};
use super::encoding::pct_encode;
use super::operator::OperatorSpec;

/// Parameters for expanding one value: the operator's bundle plus the
/// term-level name and modifiers.
#[derive(Debug, Clone, Copy)]
pub struct ExpandContext<'a> {
    pub spec: &'static OperatorSpec,
    pub name: &'a str,
    pub named: bool,
    pub explode: bool,
    pub truncate: usize,
}

impl<'a> ExpandContext<'a> {
    pub fn new(spec: &'static OperatorSpec, term: &'a Term) -> Self {
        Self {
            spec,
            name: &term.name,
            named: spec.named,
            explode: term.explode,
            truncate: term.truncate,
        }
    }

    /// Context for one exploded mapping entry: named after its key
    fn for_key(self, key: &'a str) -> Self {
        Self {
            name: key,
            named: true,
            ..self
        }
    }
}

impl Template {
    pub fn expand(&self, variables: &Variables) -> String {
        let output: String = self
            .expressions()
            .iter()
            .map(|expression| expand_expression(expression, variables))
            .collect();

        debug!(template = %self, length = output.len(), "expanded template");
        output
    }
}

pub fn expand_expression(expression: &Expression, variables: &Variables) -> String {
    match expression {
        Expression::Literal(text) => text.clone(),
        Expression::Variable(var) => expand_variable(var, variables),
    }
}

fn expand_variable(expression: &VariableExpression, variables: &Variables) -> String {
    let spec = expression.spec();

    let fragments: Vec<String> = expression
        .terms
        .iter()
        .filter_map(|term| {
            let value = variables.get(&term.name).filter(|value| value.is_defined());
            if value.is_none() {
                trace!(name = %term.name, "skipping undefined variable");
            }

            let ctx = ExpandContext::new(spec, term);
            match value? {
                Value::Undefined => None,
                Value::String(input) => Some(expand_string(input, &ctx)),
                Value::List(entries) => Some(expand_list(entries, &ctx)),
                Value::Map(entries) => Some(expand_map(entries, &ctx)),
            }
        })
        .collect();

    if fragments.is_empty() {
        return String::new();
    }

    format!("{}{}", spec.first, fragments.join(spec.separator))
}

/// Prefix `input` with `name=` (or `name` plus the if-empty text) when named
pub fn expand_name(input: &str, ctx: &ExpandContext) -> String {
    if !ctx.named {
        input.to_string()
    } else if input.is_empty() {
        format!("{}{}", ctx.name, ctx.spec.if_empty)
    } else {
        format!("{}={}", ctx.name, input)
    }
}

pub fn expand_string(input: &str, ctx: &ExpandContext) -> String {
    let truncated = truncate_chars(input, ctx.truncate);
    expand_name(&pct_encode(truncated, ctx.spec.allow_reserved), ctx)
}

pub fn expand_list(entries: &[String], ctx: &ExpandContext) -> String {
    if ctx.explode {
        return entries
            .iter()
            .map(|entry| expand_string(entry, ctx))
            .collect::<Vec<_>>()
            .join(ctx.spec.separator);
    }

    let mut joined = String::new();
    for (i, entry) in entries.iter().enumerate() {
        // the limit applies against what has been joined so far
        let entry = if ctx.truncate > 0 && joined.chars().count() > ctx.truncate {
            truncate_chars(entry, ctx.truncate)
        } else {
            entry
        };

        if i > 0 {
            joined.push(',');
        }
        joined.push_str(&pct_encode(entry, ctx.spec.allow_reserved));
    }

    expand_name(&joined, ctx)
}

pub fn expand_map(entries: &IndexMap<String, String>, ctx: &ExpandContext) -> String {
    if ctx.explode {
        return entries
            .iter()
            .map(|(key, value)| expand_string(value, &ctx.for_key(key)))
            .collect::<Vec<_>>()
            .join(ctx.spec.separator);
    }

    let joined = entries
        .iter()
        .map(|(key, value)| format!("{},{}", key, pct_encode(value, ctx.spec.allow_reserved)))
        .collect::<Vec<_>>()
        .join(",");

    expand_name(&joined, ctx)
}

/// First `max` characters of `input`; all of it when `max` is 0
fn truncate_chars(input: &str, max: usize) -> &str {
    if max == 0 {
        return input;
    }
    match input.char_indices().nth(max) {
        Some((end, _)) => &input[..end],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::operator::Operator;
    use crate::domain::template::TemplateParser;

    fn vars(pairs: Vec<(&str, Value)>) -> Variables {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn expand(template: &str, variables: &Variables) -> String {
        TemplateParser::parse(template).unwrap().expand(variables)
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("value", 0), "value");
        assert_eq!(truncate_chars("value", 3), "val");
        assert_eq!(truncate_chars("value", 30), "value");
        assert_eq!(truncate_chars("éèê", 2), "éè");
    }

    #[test]
    fn test_expand_name() {
        let term = Term::new("x");
        let query = ExpandContext::new(Operator::Query.spec(), &term);
        assert_eq!(expand_name("1", &query), "x=1");
        assert_eq!(expand_name("", &query), "x=");

        let params = ExpandContext::new(Operator::PathParameter.spec(), &term);
        assert_eq!(expand_name("", &params), "x");

        let simple = ExpandContext::new(Operator::Simple.spec(), &term);
        assert_eq!(expand_name("1", &simple), "1");
    }

    #[test]
    fn test_expand_string_truncates_before_encoding() {
        let term = Term::new("hello").with_truncate(6);
        let ctx = ExpandContext::new(Operator::Simple.spec(), &term);
        assert_eq!(expand_string("Hello World!", &ctx), "Hello%20");
    }

    #[test]
    fn test_expand_list_exploded_uses_separator() {
        let term = Term::new("list").with_explode(true);
        let ctx = ExpandContext::new(Operator::PathParameter.spec(), &term);
        let list = vec!["red".to_string(), "green".to_string()];
        assert_eq!(expand_list(&list, &ctx), "list=red;list=green");
    }

    #[test]
    fn test_expand_list_truncation_uses_joined_length() {
        let term = Term::new("list").with_truncate(3);
        let ctx = ExpandContext::new(Operator::Simple.spec(), &term);
        let list = vec![
            "alpha".to_string(),
            "beta".to_string(),
            "gamma".to_string(),
        ];
        // nothing joined yet for the first entry, "alpha" (5 > 3) for the rest
        assert_eq!(expand_list(&list, &ctx), "alpha,bet,gam");
    }

    #[test]
    fn test_expand_map_exploded_forces_named() {
        let term = Term::new("keys").with_explode(true);
        let ctx = ExpandContext::new(Operator::Label.spec(), &term);
        let map: IndexMap<String, String> = [("a", "1"), ("b", "")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(expand_map(&map, &ctx), "a=1.b");
    }

    #[test]
    fn test_expand_map_not_exploded() {
        let term = Term::new("keys");
        let ctx = ExpandContext::new(Operator::Query.spec(), &term);
        let map: IndexMap<String, String> = [("semi", ";"), ("dot", ".")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(expand_map(&map, &ctx), "keys=semi,%3B,dot,.");
    }

    #[test]
    fn test_undefined_terms_are_skipped() {
        let variables = vars(vec![
            ("undef", Value::Undefined),
            ("empty_list", Value::List(Vec::new())),
            ("y", Value::from("768")),
        ]);
        assert_eq!(expand("{?undef,missing,empty_list,y}", &variables), "?y=768");
        assert_eq!(expand("X{.undef}", &variables), "X");
    }

    #[test]
    fn test_empty_string_is_defined() {
        let variables = vars(vec![("empty", Value::from(""))]);
        assert_eq!(expand("{?empty}", &variables), "?empty=");
        assert_eq!(expand("{;empty}", &variables), ";empty");
        assert_eq!(expand("X{.empty}", &variables), "X.");
        assert_eq!(expand("O{empty}X", &variables), "OX");
    }

    #[test]
    fn test_literals_are_copied_verbatim() {
        let variables = Variables::new();
        assert_eq!(expand("http://ex ample/é", &variables), "http://ex ample/é");
    }
}
