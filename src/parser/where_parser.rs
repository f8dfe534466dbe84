use once_cell::sync::Lazy;
use regex::Regex;

const WHERE: &str = " where ";
const AND: &str = " and ";
const ALLOW_FILTERING: &str = "allow filtering";

// Two-character operators first so `<=` is not read as `<`.
static COMPARISON: Lazy<Regex> = Lazy::new(|| Regex::new(r"<=|>=|!=|=|<|>").unwrap());

// Each trailing clause runs to the end of the text.
static TRAILING_CLAUSES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?s)(?:^|\s+)order\s+by\b.*$").unwrap(),
        Regex::new(r"(?s)(?:^|\s+)limit\b.*$").unwrap(),
        Regex::new(r"(?s)(?:^|\s+)allow\s+filtering.*$").unwrap(),
    ]
});

pub struct WhereParser;

impl WhereParser {
    /// Body of the `WHERE` clause with trailing `ORDER BY`, `LIMIT` and
    /// `ALLOW FILTERING` removed. `None` when there is no `" where "`.
    pub fn where_clause(normalized_query: &str) -> Option<String> {
        let (_, rest) = normalized_query.split_once(WHERE)?;

        let mut clause = rest.to_string();
        for trailing in TRAILING_CLAUSES.iter() {
            clause = trailing.replace(&clause, "").into_owned();
        }
        Some(clause)
    }

    /// Column names referenced by the `WHERE` clause, in order, duplicates kept.
    ///
    /// The clause is split on the literal `" and "`, which does not know about
    /// quoted literals, so `name = 'rock and roll'` yields two terms. Each term
    /// ends its column name at the earliest of `=`, `<`, `>`, `<=`, `>=` or
    /// `!=`. A term without one, such as `id in (1, 2)`, is kept whole.
    pub fn extract_where_conditions(normalized_query: &str) -> Vec<String> {
        let Some(clause) = Self::where_clause(normalized_query) else {
            return vec![];
        };

        clause
            .split(AND)
            .map(Self::condition_column)
            .filter(|column| !column.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Left-hand side of one `AND` term, trimmed.
    pub fn condition_column(fragment: &str) -> &str {
        match COMPARISON.find(fragment) {
            Some(op) => fragment[..op.start()].trim(),
            None => fragment.trim(),
        }
    }

    pub fn uses_allow_filtering(normalized_query: &str) -> bool {
        normalized_query.contains(ALLOW_FILTERING)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::parser::{QueryNormalizer, WhereParser};

    fn columns(query: &str) -> Vec<String> {
        WhereParser::extract_where_conditions(&QueryNormalizer::normalize(query))
    }

    #[test]
    fn test_where() {
        assert_eq!(columns("SELECT * FROM t WHERE a = 1"), vec!["a"]);
    }

    #[test]
    fn test_where_and() {
        let cols = columns("SELECT * FROM ks.orders WHERE customer_id = 5 AND order_date > '2020-01-01'");
        assert_eq!(cols, vec!["customer_id", "order_date"]);
    }

    #[test]
    fn test_no_where() {
        assert!(columns("SELECT * FROM t").is_empty());
        assert!(columns("SELECT * FROM t LIMIT 10").is_empty());
        // the keyword must be surrounded by single spaces
        assert!(columns("SELECT * FROM t\nWHERE a = 1").is_empty());
    }

    #[test]
    fn test_trailing_clauses_removed() {
        let cols = columns("SELECT * FROM t WHERE a = 1 AND b >= 2 ORDER BY b DESC LIMIT 10 ALLOW FILTERING");
        assert_eq!(cols, vec!["a", "b"]);

        let cols = columns("SELECT * FROM t WHERE a = 1 LIMIT 5");
        assert_eq!(cols, vec!["a"]);

        let cols = columns("SELECT * FROM t WHERE status = 'open' ALLOW FILTERING");
        assert_eq!(cols, vec!["status"]);
    }

    #[test]
    fn test_where_clause_body() {
        let clause = WhereParser::where_clause("select * from t where a = 1 and b = 2 order by b limit 3");
        assert_eq!(clause.as_deref(), Some("a = 1 and b = 2"));
        assert_eq!(WhereParser::where_clause("select * from t"), None);
    }

    #[test]
    fn test_duplicates_kept() {
        let cols = columns("SELECT * FROM t WHERE a > 1 AND a < 10");
        assert_eq!(cols, vec!["a", "a"]);
    }

    #[test]
    fn test_operators() {
        let cols = columns("SELECT * FROM t WHERE a != 1 AND b <= 2 AND c>=3 AND d < 4 AND e > 5");
        assert_eq!(cols, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_word_operators_keep_whole_term() {
        assert_eq!(columns("SELECT * FROM t WHERE id IN (1, 2)"), vec!["id in (1, 2)"]);
        assert_eq!(columns("SELECT * FROM t WHERE tags CONTAINS 'vip'"), vec!["tags contains 'vip'"]);
        assert_eq!(
            columns("SELECT * FROM t WHERE a = 1 AND b IN (2, 3)"),
            vec!["a", "b in (2, 3)"]
        );
    }

    #[test]
    fn test_condition_column() {
        assert_eq!(WhereParser::condition_column(" customer_id = 5 "), "customer_id");
        assert_eq!(WhereParser::condition_column("id<=1"), "id");
        assert_eq!(WhereParser::condition_column(" token(id) "), "token(id)");
        assert_eq!(WhereParser::condition_column("a = 'x < y'"), "a");
        assert_eq!(WhereParser::condition_column("= 5"), "");
    }

    #[test]
    fn test_quoted_and_is_split() {
        let cols = columns("SELECT * FROM songs WHERE genre = 'rock and roll' AND year = 1970");
        assert_eq!(cols, vec!["genre", "roll'", "year"]);
    }

    #[test]
    fn test_empty_fragments_dropped() {
        assert!(columns("SELECT * FROM t WHERE = 1").is_empty());
    }

    #[test]
    fn test_allow_filtering() {
        assert!(WhereParser::uses_allow_filtering("select * from t where a = 1 allow filtering"));
        assert!(WhereParser::uses_allow_filtering("select * from t allow filtering;"));
        assert!(!WhereParser::uses_allow_filtering("select * from t where a = 1"));
    }
}
