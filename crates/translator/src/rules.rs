//! Static tables mapping query vocabulary onto `find` primitives.

use crate::{
    command::ast::FilterTerm,
    condition::{Comparator, Condition},
    error::{TranslateError, TranslateResult},
};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Projection attribute computed by a pre-command instead of per entry.
pub const SUM_ATTRIBUTE: &str = "sum";

/// Shell variable the `sum` pre-command binds.
pub const SUM_VARIABLE: &str = "sum";

/// `-printf` directive for an entry's size in bytes.
pub const SIZE_PLACEHOLDER: &str = "%s";

lazy_static! {
    static ref ATTRIBUTE_MAP: HashMap<&'static str, &'static str> = build_attribute_map();
    static ref CONDITION_MAP: HashMap<&'static str, FieldFilter> = build_condition_map();
}

fn build_attribute_map() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("name", "%p"),
        ("sz", SIZE_PLACEHOLDER),
        ("perm", "%M"),
        ("u", "%u"),
        ("g", "%g"),
        ("modified", "%t"),
        (SUM_ATTRIBUTE, "${sum}"),
    ])
}

fn build_condition_map() -> HashMap<&'static str, FieldFilter> {
    HashMap::from([
        (
            "sz",
            FieldFilter::Numeric {
                test: "-size",
                unit: "c",
            },
        ),
        (
            "modified",
            FieldFilter::Numeric {
                test: "-mtime",
                unit: "",
            },
        ),
        ("name", FieldFilter::Exact { test: "-name" }),
        ("perm", FieldFilter::Exact { test: "-perm" }),
        ("u", FieldFilter::Exact { test: "-user" }),
        ("g", FieldFilter::Exact { test: "-group" }),
    ])
}

/// How a `WHERE` field becomes a `find` test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFilter {
    /// `<test> <modifier><value><unit>`: accepts `<`, `=` and `>`.
    Numeric {
        test: &'static str,
        unit: &'static str,
    },
    /// `<test> <value>`: only `=` has a meaning.
    Exact { test: &'static str },
}

impl FieldFilter {
    pub fn apply(&self, condition: &Condition) -> TranslateResult<FilterTerm> {
        let argument = match *self {
            FieldFilter::Numeric { .. } if !is_whole_number(&condition.value) => {
                return Err(TranslateError::MalformedCondition(format!(
                    "'{}' needs a whole number, found {}",
                    condition.field, condition.value
                )));
            }
            FieldFilter::Numeric { unit, .. } => {
                format!("{}{}{}", modifier(condition.comparator), condition.value, unit)
            }
            FieldFilter::Exact { .. } if condition.comparator == Comparator::Equal => {
                condition.value.clone()
            }
            FieldFilter::Exact { .. } => {
                return Err(TranslateError::UnsupportedComparator {
                    field: condition.field.clone(),
                    comparator: condition.comparator.to_string(),
                });
            }
        };

        Ok(FilterTerm {
            connective: condition.connective,
            test: self.test(),
            argument,
        })
    }

    pub fn test(&self) -> &'static str {
        match *self {
            FieldFilter::Numeric { test, .. } | FieldFilter::Exact { test } => test,
        }
    }
}

fn is_whole_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// `find`'s "less than / exactly / more than" prefix for numeric arguments.
pub fn modifier(comparator: Comparator) -> &'static str {
    match comparator {
        Comparator::LessThan => "-",
        Comparator::Equal => "",
        Comparator::GreaterThan => "+",
    }
}

pub fn attribute_placeholder(name: &str) -> TranslateResult<&'static str> {
    ATTRIBUTE_MAP
        .get(name.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| TranslateError::UnknownField(name.to_string()))
}

pub fn field_filter(name: &str) -> TranslateResult<FieldFilter> {
    CONDITION_MAP
        .get(name.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| TranslateError::UnknownField(name.to_string()))
}
