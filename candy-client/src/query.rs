//! Table query builder
//!
//! A [`Query`] describes column selection, equality/range filters,
//! ordering and a row limit. [`Query::to_pairs`] renders it as
//! PostgREST query-string pairs; the in-memory store evaluates the same
//! description directly against JSON rows.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Filter operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Neq,
    Gte,
    Lte,
    In,
}

impl FilterOp {
    fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Neq => "neq",
            FilterOp::Gte => "gte",
            FilterOp::Lte => "lte",
            FilterOp::In => "in",
        }
    }
}

/// Single column filter
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    /// Scalar for comparisons, array for `In`
    pub value: Value,
}

impl Filter {
    /// Evaluate against a JSON row; a missing column never matches
    pub fn matches(&self, row: &Value) -> bool {
        let Some(actual) = row.get(&self.column) else {
            return false;
        };
        match self.op {
            FilterOp::Eq => values_equal(actual, &self.value),
            FilterOp::Neq => !values_equal(actual, &self.value),
            FilterOp::Gte => compare_values(actual, &self.value).is_some_and(|o| o != Ordering::Less),
            FilterOp::Lte => compare_values(actual, &self.value).is_some_and(|o| o != Ordering::Greater),
            FilterOp::In => self
                .value
                .as_array()
                .is_some_and(|list| list.iter().any(|v| values_equal(actual, v))),
        }
    }

    fn render(&self) -> String {
        match self.op {
            FilterOp::In => {
                let items: Vec<String> = self
                    .value
                    .as_array()
                    .map(|list| list.iter().map(render_list_item).collect())
                    .unwrap_or_default();
                format!("in.({})", items.join(","))
            }
            op => format!("{}.{}", op.as_str(), render_scalar(&self.value)),
        }
    }
}

/// Sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

/// Query over a single table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub columns: Option<String>,
    pub filters: Vec<Filter>,
    pub order: Vec<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the returned columns (comma separated)
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Eq, value.into())
    }

    pub fn neq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Neq, value.into())
    }

    pub fn gte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Gte, value.into())
    }

    pub fn lte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Lte, value.into())
    }

    pub fn in_list<V: Into<Value>>(self, column: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        let list = Value::Array(values.into_iter().map(Into::into).collect());
        self.filter(column, FilterOp::In, list)
    }

    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order.push(OrderBy {
            column: column.into(),
            ascending,
        });
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Shorthand for the common `id = ?` filter
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new().eq("id", id.into())
    }

    fn filter(mut self, column: impl Into<String>, op: FilterOp, value: Value) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op,
            value,
        });
        self
    }

    /// Does a row satisfy every filter
    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }

    /// Compare two rows by the sort keys
    pub fn compare_rows(&self, a: &Value, b: &Value) -> Ordering {
        for key in &self.order {
            let left = a.get(&key.column).unwrap_or(&Value::Null);
            let right = b.get(&key.column).unwrap_or(&Value::Null);
            let ord = compare_values(left, right).unwrap_or(Ordering::Equal);
            let ord = if key.ascending { ord } else { ord.reverse() };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Render as PostgREST query-string pairs
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(columns) = &self.columns {
            pairs.push(("select".to_string(), columns.clone()));
        }
        for f in &self.filters {
            pairs.push((f.column.clone(), f.render()));
        }
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|o| format!("{}.{}", o.column, if o.ascending { "asc" } else { "desc" }))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_string(), order));
        }
        if let Some(n) = self.limit {
            pairs.push(("limit".to_string(), n.to_string()));
        }
        pairs
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn render_list_item(value: &Value) -> String {
    let raw = render_scalar(value);
    if raw.contains([',', '(', ')', '"']) {
        format!("\"{}\"", raw.replace('"', "\\\""))
    } else {
        raw
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Order numbers numerically, RFC 3339 strings chronologically, other
/// strings lexically; nulls sort first
fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Null, _) => Some(Ordering::Less),
        (_, Value::Null) => Some(Ordering::Greater),
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => {
            match (x.parse::<DateTime<Utc>>(), y.parse::<DateTime<Utc>>()) {
                (Ok(dx), Ok(dy)) => Some(dx.cmp(&dy)),
                _ => Some(x.cmp(y)),
            }
        }
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_pairs() {
        let q = Query::new()
            .select("*")
            .eq("is_template", true)
            .eq("language", "en")
            .in_list("event_id", ["e1", "e2"])
            .order("suggestion_score", false)
            .limit(10);
        let pairs = q.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("select".into(), "*".into()),
                ("is_template".into(), "eq.true".into()),
                ("language".into(), "eq.en".into()),
                ("event_id".into(), "in.(e1,e2)".into()),
                ("order".into(), "suggestion_score.desc".into()),
                ("limit".into(), "10".into()),
            ]
        );
    }

    #[test]
    fn test_in_list_quotes_commas() {
        let q = Query::new().in_list("name", ["a,b", "c"]);
        assert_eq!(q.to_pairs()[0].1, "in.(\"a,b\",c)");
    }

    #[test]
    fn test_matches() {
        let row = json!({ "id": "1", "price": 2.5, "language": "en", "created_at": "2025-06-01T10:00:00Z" });
        assert!(Query::by_id("1").matches(&row));
        assert!(!Query::by_id("2").matches(&row));
        assert!(Query::new().gte("price", 2).matches(&row));
        assert!(!Query::new().gte("price", 3).matches(&row));
        assert!(Query::new().neq("language", "ar").matches(&row));
        assert!(Query::new().gte("created_at", "2025-06-01T09:59:59.500Z").matches(&row));
        assert!(!Query::new().eq("missing", "x").matches(&row));
    }

    #[test]
    fn test_compare_rows_desc_then_asc() {
        let q = Query::new().order("score", false).order("name", true);
        let a = json!({ "score": 5, "name": "b" });
        let b = json!({ "score": 5, "name": "a" });
        let c = json!({ "score": 9, "name": "z" });
        assert_eq!(q.compare_rows(&c, &a), Ordering::Less);
        assert_eq!(q.compare_rows(&b, &a), Ordering::Less);
    }
}
