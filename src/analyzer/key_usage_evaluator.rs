/// Primary key coverage of a query's `WHERE` clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyUsage {
    pub uses_partition_key: bool,
    pub uses_clustering_columns: bool,
}

pub struct KeyUsageEvaluator;

impl KeyUsageEvaluator {
    pub fn evaluate(partition_key_columns: &[String], clustering_columns: &[String], condition_columns: &[String]) -> KeyUsage {
        KeyUsage {
            uses_partition_key: Self::partition_key_covered(partition_key_columns, condition_columns),
            uses_clustering_columns: Self::clustering_columns_used(clustering_columns, condition_columns),
        }
    }

    /// Every partition key column is restricted. True for an empty key,
    /// which only means the table has no key metadata.
    pub fn partition_key_covered(partition_key_columns: &[String], condition_columns: &[String]) -> bool {
        partition_key_columns
            .iter()
            .all(|column| Self::column_referenced(column, condition_columns))
    }

    pub fn clustering_columns_used(clustering_columns: &[String], condition_columns: &[String]) -> bool {
        clustering_columns
            .iter()
            .any(|column| Self::column_referenced(column, condition_columns))
    }

    pub fn column_referenced(column: &str, condition_columns: &[String]) -> bool {
        let column = column.to_lowercase();
        condition_columns.iter().any(|cond| cond.to_lowercase() == column)
    }
}
