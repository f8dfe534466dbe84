use once_cell::sync::Lazy;
use regex::Regex;

// `from` as a whole word, then a run of identifier characters and dots.
static FROM_TABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfrom\s+([\w.]+)").unwrap());

pub struct TableNameParser;

impl TableNameParser {
    /// Table referenced by the first `FROM` clause of a normalized query.
    ///
    /// A keyspace qualifier (`ks.table`) is dropped by keeping everything
    /// after the first dot. Returns an empty string when no table can be
    /// found, including a bare `ks.` reference.
    pub fn extract_table_name(normalized_query: &str) -> String {
        let Some(captures) = FROM_TABLE.captures(normalized_query) else {
            return String::new();
        };

        let reference = &captures[1];
        match reference.split_once('.') {
            Some((_keyspace, table)) => table.to_string(),
            None => reference.to_string(),
        }
    }

    /// Keyspace qualifier of the `FROM` reference, if one was written.
    pub fn extract_keyspace(normalized_query: &str) -> Option<String> {
        let captures = FROM_TABLE.captures(normalized_query)?;
        captures[1]
            .split_once('.')
            .map(|(keyspace, _)| keyspace.to_string())
            .filter(|keyspace| !keyspace.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::QueryNormalizer;

    #[test]
    fn plain_table() {
        assert_eq!(TableNameParser::extract_table_name("select * from orders where id = 1"), "orders");
    }

    #[test]
    fn qualified_table_drops_keyspace() {
        let q = "select * from shop.orders where customer_id = 5";
        assert_eq!(TableNameParser::extract_table_name(q), "orders");
        assert_eq!(TableNameParser::extract_keyspace(q), Some("shop".to_string()));
    }

    #[test]
    fn keeps_text_after_first_dot_only() {
        assert_eq!(TableNameParser::extract_table_name("select * from a.b.c"), "b.c");
    }

    #[test]
    fn missing_from_yields_empty() {
        assert_eq!(TableNameParser::extract_table_name("select 1"), "");
        assert_eq!(TableNameParser::extract_keyspace("select 1"), None);
    }

    #[test]
    fn from_must_be_followed_by_identifier() {
        assert_eq!(TableNameParser::extract_table_name("select * from "), "");
        assert_eq!(TableNameParser::extract_table_name("select * from ;"), "");
    }

    #[test]
    fn bare_keyspace_qualifier_yields_empty() {
        assert_eq!(TableNameParser::extract_table_name("select * from shop."), "");
    }

    #[test]
    fn from_inside_identifier_is_not_a_keyword() {
        let q = "select datefrom from events";
        assert_eq!(TableNameParser::extract_table_name(q), "events");
    }

    #[test]
    fn multiline_query() {
        let q = QueryNormalizer::normalize("SELECT *\nFROM\n  Shop.Orders\nWHERE id = 3");
        assert_eq!(TableNameParser::extract_table_name(&q), "orders");
    }

    #[test]
    fn normalization_does_not_change_extraction() {
        for q in ["SELECT * FROM Ks.T", "  select x from y  ", "SELECT 1", "select * FROM a.b.c where z = 1"] {
            let once = QueryNormalizer::normalize(q);
            let twice = QueryNormalizer::normalize(&once);
            assert_eq!(
                TableNameParser::extract_table_name(&once),
                TableNameParser::extract_table_name(&twice)
            );
        }
    }
}
