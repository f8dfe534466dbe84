use crate::analyzer::QueryAnalysisResult;

/// Turns the computed flags of a result into prose and recommendations.
///
/// Rules run in a fixed order and only ever append:
/// 1. partition key (missing => high cost, present => efficient)
/// 2. clustering columns (unused while the table has some => optimization
///    hint, used => efficient)
/// 3. `ALLOW FILTERING`
/// 4. secondary index
/// 5. full table scan
pub struct AssessmentGenerator;

#[derive(Debug, Default)]
struct Assessment {
    paragraphs: Vec<String>,
    recommendations: Vec<String>,
}

impl Assessment {
    fn paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }
}

impl AssessmentGenerator {
    pub fn generate(
        result: &QueryAnalysisResult,
        partition_key_columns: &[String],
        clustering_columns: &[String],
    ) -> (String, Vec<String>) {
        let mut out = Assessment::default();

        Self::partition_key_rule(&mut out, result, partition_key_columns);
        Self::clustering_rule(&mut out, result, clustering_columns);
        Self::allow_filtering_rule(&mut out, result);
        Self::secondary_index_rule(&mut out, result);
        Self::full_table_scan_rule(&mut out, result);

        (out.paragraphs.join("\n"), out.recommendations)
    }

    fn partition_key_rule(out: &mut Assessment, result: &QueryAnalysisResult, partition_key_columns: &[String]) {
        if result.uses_partition_key() {
            out.paragraph(
                "EFFICIENT PARTITION KEY USAGE: The query restricts the full partition key, \
                 so it is routed to a single partition.",
            );
            return;
        }

        out.paragraph(
            "HIGH COST QUERY: The query does not restrict the full partition key, \
             so it may have to scan multiple partitions across the cluster.",
        );
        out.recommend(format!(
            "Filter on all partition key columns ({}) in the WHERE clause",
            partition_key_columns.join(", ")
        ));
    }

    fn clustering_rule(out: &mut Assessment, result: &QueryAnalysisResult, clustering_columns: &[String]) {
        if result.uses_clustering_columns() {
            out.paragraph(
                "EFFICIENT CLUSTERING COLUMN USAGE: The query restricts clustering columns, \
                 which narrows the rows read within each partition.",
            );
        } else if !clustering_columns.is_empty() {
            out.paragraph(
                "POTENTIAL OPTIMIZATION: The query does not filter on any clustering column, \
                 so every row of the selected partitions is read.",
            );
            out.recommend(format!(
                "Consider filtering on clustering columns ({}) to narrow the rows read within a partition",
                clustering_columns.join(", ")
            ));
        }
    }

    fn allow_filtering_rule(out: &mut Assessment, result: &QueryAnalysisResult) {
        if !result.uses_allow_filtering() {
            return;
        }

        out.paragraph(
            "WARNING - ALLOW FILTERING: The query asks the server to read and discard \
             non-matching rows, which can be very expensive on large tables.",
        );
        out.recommend("Avoid ALLOW FILTERING in production workloads");
        out.recommend("Consider a secondary index or a data model redesign that serves this query without filtering");
    }

    fn secondary_index_rule(out: &mut Assessment, result: &QueryAnalysisResult) {
        if !result.uses_secondary_index() {
            return;
        }

        out.paragraph(
            "SECONDARY INDEX USAGE: The query relies on a secondary index, which may \
             contact many nodes and degrade as the indexed data grows.",
        );
        out.recommend("Monitor the latency of queries served by secondary indexes");
        out.recommend("Consider denormalizing into a table keyed by the indexed column");
    }

    fn full_table_scan_rule(out: &mut Assessment, result: &QueryAnalysisResult) {
        if !result.is_full_table_scan() {
            return;
        }

        out.paragraph(
            "CRITICAL PERFORMANCE ISSUE - FULL TABLE SCAN: Without the partition key or a \
             secondary index the query must read every partition of the table.",
        );
        out.recommend("Redesign the query to restrict the partition key");
        out.recommend("Consider a materialized view or a new table whose primary key matches this access pattern");
    }
}
