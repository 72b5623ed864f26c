//! Case-insensitive substring search over a list of rows

/// Field accessor used by [`SearchFilter`]
pub type FieldSelector<T> = fn(&T) -> &str;

/// Linear-scan search across a fixed set of text fields
#[derive(Clone, Copy)]
pub struct SearchFilter<T: 'static> {
    fields: &'static [FieldSelector<T>],
}

impl<T: 'static> SearchFilter<T> {
    pub const fn new(fields: &'static [FieldSelector<T>]) -> Self {
        Self { fields }
    }

    /// Does any selected field contain `query` (case-insensitive)
    ///
    /// Whitespace only marks a blank query; otherwise the query is
    /// matched as typed, surrounding spaces included.
    pub fn matches(&self, item: &T, query: &str) -> bool {
        query.trim().is_empty() || self.matches_lowered(item, &query.to_lowercase())
    }

    fn matches_lowered(&self, item: &T, needle: &str) -> bool {
        self.fields
            .iter()
            .any(|field| field(item).to_lowercase().contains(needle))
    }

    /// Matching items in their original order; a blank query keeps all
    pub fn apply<'a>(&self, items: &'a [T], query: &str) -> Vec<&'a T> {
        if query.trim().is_empty() {
            return items.iter().collect();
        }
        let needle = query.to_lowercase();
        items
            .iter()
            .filter(|item| self.matches_lowered(item, &needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        category: &'static str,
    }

    fn name(row: &Row) -> &str {
        row.name
    }

    fn category(row: &Row) -> &str {
        row.category
    }

    const BY_NAME_OR_CATEGORY: SearchFilter<Row> = SearchFilter::new(&[name, category]);

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Chocolate Bar", category: "Chocolate" },
            Row { name: "Gummy Bears", category: "Gummies" },
            Row { name: "Mint Chocolates", category: "Chocolate" },
        ]
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let rows = rows();
        assert_eq!(BY_NAME_OR_CATEGORY.apply(&rows, "").len(), 3);
        assert_eq!(BY_NAME_OR_CATEGORY.apply(&rows, "   ").len(), 3);
    }

    #[test]
    fn test_case_insensitive_any_field() {
        let rows = rows();
        let names: Vec<_> = BY_NAME_OR_CATEGORY
            .apply(&rows, "CHOC")
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Chocolate Bar", "Mint Chocolates"]);
        assert_eq!(BY_NAME_OR_CATEGORY.apply(&rows, "gummies").len(), 1);
        assert!(BY_NAME_OR_CATEGORY.apply(&rows, "taffy").is_empty());
    }

    #[test]
    fn test_result_is_exact_subset() {
        let rows = rows();
        for query in ["a", "bar", "ies", "o", "zz"] {
            let hits = BY_NAME_OR_CATEGORY.apply(&rows, query);
            let expected = rows
                .iter()
                .filter(|r| {
                    r.name.to_lowercase().contains(query) || r.category.to_lowercase().contains(query)
                })
                .count();
            assert_eq!(hits.len(), expected, "query {query}");
            assert!(hits.iter().all(|r| BY_NAME_OR_CATEGORY.matches(r, query)));
        }
    }

    #[test]
    fn test_surrounding_spaces_are_matched() {
        let rows = rows();
        assert!(BY_NAME_OR_CATEGORY.apply(&rows, "chocolate ").is_empty());
        assert!(!BY_NAME_OR_CATEGORY.matches(&rows[0], " chocolate"));

        let names: Vec<_> = BY_NAME_OR_CATEGORY
            .apply(&rows, "mint ")
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Mint Chocolates"]);
    }
}
