//! Static performance analysis of CQL `SELECT` statements.
//!
//! A [`QueryAnalyzer`] reads the table named in the query's `FROM` clause
//! from a [`SchemaProvider`], checks the `WHERE` clause against the
//! partition key, clustering columns and secondary indexes, and returns a
//! [`QueryAnalysisResult`] with flags, prose and recommendations.

pub mod parser;

pub mod schema;
pub use schema::{Catalog, CatalogCommon, CatalogConfig, IndexDescriptor, SchemaError, SchemaProvider, TableSchema, TableSummary};

pub mod analyzer;
pub use analyzer::{AnalysisOutcome, DegradedReason, QueryAnalysisResult, QueryAnalyzer};
