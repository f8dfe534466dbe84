pub struct QueryNormalizer;

impl QueryNormalizer {
    /// Trim surrounding whitespace and lowercase the query so keyword and
    /// column matching can work on plain substrings.
    pub fn normalize(query: &str) -> String {
        query.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        let text = "  \n SELECT * FROM Ks.Orders WHERE Customer_ID = 5\t ";
        assert_eq!(
            QueryNormalizer::normalize(text),
            "select * from ks.orders where customer_id = 5"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = QueryNormalizer::normalize("  SELECT A FROM B  ");
        assert_eq!(QueryNormalizer::normalize(&once), once);
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(QueryNormalizer::normalize("   "), "");
    }
}
