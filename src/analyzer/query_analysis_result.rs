use serde::Serialize;

use crate::analyzer::{KeyUsage, ScanClassifier};

/// Diagnostic produced for one analyzed query.
///
/// Fields are read-only once built. Results from [`QueryAnalysisResult::analyzed`]
/// always satisfy `is_full_table_scan == !uses_partition_key && !uses_secondary_index`;
/// degraded results carry only the query, table name, assessment and
/// recommendations, with every flag false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryAnalysisResult {
    query: String,
    table_name: String,
    uses_partition_key: bool,
    uses_clustering_columns: bool,
    uses_allow_filtering: bool,
    uses_secondary_index: bool,
    is_full_table_scan: bool,
    recommendations: Vec<String>,
    performance_assessment: String,
}

impl QueryAnalysisResult {
    pub fn analyzed(
        query: impl Into<String>,
        table_name: impl Into<String>,
        key_usage: KeyUsage,
        uses_allow_filtering: bool,
        uses_secondary_index: bool,
    ) -> Self {
        Self {
            query: query.into(),
            table_name: table_name.into(),
            uses_partition_key: key_usage.uses_partition_key,
            uses_clustering_columns: key_usage.uses_clustering_columns,
            uses_allow_filtering,
            uses_secondary_index,
            is_full_table_scan: ScanClassifier::is_full_table_scan(key_usage.uses_partition_key, uses_secondary_index),
            ..Default::default()
        }
    }

    pub fn degraded(
        query: impl Into<String>,
        table_name: impl Into<String>,
        performance_assessment: impl Into<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            query: query.into(),
            table_name: table_name.into(),
            performance_assessment: performance_assessment.into(),
            recommendations,
            ..Default::default()
        }
    }

    /// Attach the generated prose and recommendations.
    pub fn with_assessment(mut self, performance_assessment: String, recommendations: Vec<String>) -> Self {
        self.performance_assessment = performance_assessment;
        self.recommendations = recommendations;
        self
    }

    pub fn query(&self) -> &str { &self.query }
    pub fn table_name(&self) -> &str { &self.table_name }
    pub fn uses_partition_key(&self) -> bool { self.uses_partition_key }
    pub fn uses_clustering_columns(&self) -> bool { self.uses_clustering_columns }
    pub fn uses_allow_filtering(&self) -> bool { self.uses_allow_filtering }
    pub fn uses_secondary_index(&self) -> bool { self.uses_secondary_index }
    pub fn is_full_table_scan(&self) -> bool { self.is_full_table_scan }
    pub fn recommendations(&self) -> &[String] { &self.recommendations }
    pub fn performance_assessment(&self) -> &str { &self.performance_assessment }
}
