pub mod schema_error;
pub use schema_error::*;

pub mod table_summary;
pub use table_summary::*;

pub mod index_descriptor;
pub use index_descriptor::*;

pub mod table_schema;
pub use table_schema::*;

pub mod catalog_config;
pub use catalog_config::*;

pub mod catalog;
pub use catalog::*;

/// Source of keyspace and table metadata.
///
/// Implementations may block on I/O; the analyzer issues at most one call
/// to each method per analyzed query and never retries.
pub trait SchemaProvider {
    /// Tables of a keyspace, in the provider's order.
    fn list_tables(&self, keyspace: &str) -> Result<Vec<TableSummary>, SchemaError>;

    /// Key columns and secondary indexes of one table.
    fn describe_table(&self, keyspace: &str, table: &str) -> Result<TableSchema, SchemaError>;
}
