use tracing::{debug, warn};

use crate::{
    analyzer::{AnalysisOutcome, AssessmentGenerator, DegradedReason, IndexUsageEvaluator, KeyUsageEvaluator, QueryAnalysisResult},
    parser::{QueryNormalizer, TableNameParser, WhereParser},
    schema::{SchemaError, SchemaProvider},
};

pub const UNPARSEABLE_ASSESSMENT: &str = "Unable to determine table name from query";
pub const UNPARSEABLE_RECOMMENDATION: &str = "Ensure the query follows standard CQL SELECT syntax";
pub const TABLE_NOT_FOUND_RECOMMENDATION: &str = "Verify the table name and keyspace are correct";

/// Checks a CQL `SELECT` against the table metadata of a [`SchemaProvider`].
///
/// Stateless apart from the borrowed provider; one analyzer may serve
/// concurrent callers if the provider allows it. Each call makes at most
/// one `list_tables` and one `describe_table` request.
pub struct QueryAnalyzer<'a> {
    schemas: &'a dyn SchemaProvider,
}

impl<'a> QueryAnalyzer<'a> {
    pub fn new(schemas: &'a dyn SchemaProvider) -> Self {
        Self { schemas }
    }

    /// Analyze `query` against `keyspace_name`. Never fails: provider
    /// errors and unusable input come back as a degraded result.
    pub fn analyze(&self, keyspace_name: &str, query: &str) -> QueryAnalysisResult {
        self.analyze_outcome(keyspace_name, query).into_result()
    }

    /// Same as [`analyze`](Self::analyze) but tells success and degraded
    /// results apart.
    #[tracing::instrument(skip(self))]
    pub fn analyze_outcome(&self, keyspace_name: &str, query: &str) -> AnalysisOutcome {
        let normalized = QueryNormalizer::normalize(query);

        let table_name = TableNameParser::extract_table_name(&normalized);
        if table_name.is_empty() {
            warn!("unable to determine table name from query");
            return AnalysisOutcome::Degraded {
                result: QueryAnalysisResult::degraded(
                    query,
                    "",
                    UNPARSEABLE_ASSESSMENT,
                    vec![UNPARSEABLE_RECOMMENDATION.to_string()],
                ),
                reason: DegradedReason::UnparseableQuery,
            };
        }

        if let Some(qualifier) = TableNameParser::extract_keyspace(&normalized) {
            if qualifier != keyspace_name.to_lowercase() {
                debug!(%qualifier, keyspace = %keyspace_name, "query keyspace qualifier differs, using the requested keyspace");
            }
        }

        match self.analyze_table(keyspace_name, query, &normalized, &table_name) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(keyspace = %keyspace_name, table = %table_name, error = %e, "schema lookup failed");
                AnalysisOutcome::Degraded {
                    result: QueryAnalysisResult::degraded(query, table_name, format!("Error analyzing query: {e}"), vec![]),
                    reason: DegradedReason::SchemaFailure(e.to_string()),
                }
            }
        }
    }

    fn analyze_table(
        &self,
        keyspace_name: &str,
        query: &str,
        normalized: &str,
        table_name: &str,
    ) -> Result<AnalysisOutcome, SchemaError> {
        let tables = self.schemas.list_tables(keyspace_name)?;
        let Some(listed) = tables.iter().find(|t| t.matches(table_name)) else {
            warn!(keyspace = %keyspace_name, table = %table_name, "table not found");
            return Ok(AnalysisOutcome::Degraded {
                result: QueryAnalysisResult::degraded(
                    query,
                    table_name,
                    format!("Table '{table_name}' not found in keyspace '{keyspace_name}'"),
                    vec![TABLE_NOT_FOUND_RECOMMENDATION.to_string()],
                ),
                reason: DegradedReason::TableNotFound,
            });
        };

        let schema = self.schemas.describe_table(keyspace_name, &listed.name)?;
        schema.validate()?;

        let conditions = WhereParser::extract_where_conditions(normalized);
        let uses_allow_filtering = WhereParser::uses_allow_filtering(normalized);
        debug!(table = %table_name, ?conditions, uses_allow_filtering, "parsed where clause");

        let key_usage = KeyUsageEvaluator::evaluate(&schema.partition_key_columns, &schema.clustering_columns, &conditions);
        let uses_secondary_index = IndexUsageEvaluator::secondary_index_used(&schema.secondary_indexes, &conditions);

        let result = QueryAnalysisResult::analyzed(query, table_name, key_usage, uses_allow_filtering, uses_secondary_index);
        debug!(
            uses_partition_key = result.uses_partition_key(),
            uses_clustering_columns = result.uses_clustering_columns(),
            uses_secondary_index,
            is_full_table_scan = result.is_full_table_scan(),
            "evaluated key and index usage"
        );

        let (assessment, recommendations) =
            AssessmentGenerator::generate(&result, &schema.partition_key_columns, &schema.clustering_columns);

        Ok(AnalysisOutcome::Success(result.with_assessment(assessment, recommendations)))
    }
}
