use crate::{analyzer::KeyUsageEvaluator, schema::IndexDescriptor};

pub struct IndexUsageEvaluator;

impl IndexUsageEvaluator {
    /// Whether any index with a `target` option covers a restricted column.
    pub fn secondary_index_used(indexes: &[IndexDescriptor], condition_columns: &[String]) -> bool {
        indexes
            .iter()
            .filter_map(IndexDescriptor::target_column)
            .any(|column| KeyUsageEvaluator::column_referenced(&column, condition_columns))
    }
}
