use crate::analyzer::QueryAnalysisResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedReason {
    /// No table could be extracted from the query text.
    UnparseableQuery,
    /// The provider does not list the table in the keyspace.
    TableNotFound,
    /// The provider failed or returned unusable metadata.
    SchemaFailure(String),
}

/// Result of one analysis before it is collapsed for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Success(QueryAnalysisResult),
    Degraded { result: QueryAnalysisResult, reason: DegradedReason },
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }

    pub fn reason(&self) -> Option<&DegradedReason> {
        match self {
            AnalysisOutcome::Success(_) => None,
            AnalysisOutcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn result(&self) -> &QueryAnalysisResult {
        match self {
            AnalysisOutcome::Success(result) | AnalysisOutcome::Degraded { result, .. } => result,
        }
    }

    pub fn into_result(self) -> QueryAnalysisResult {
        match self {
            AnalysisOutcome::Success(result) | AnalysisOutcome::Degraded { result, .. } => result,
        }
    }
}
