use serde::{Deserialize, Serialize};

use crate::schema::{IndexDescriptor, SchemaError};

/// Primary key layout and secondary indexes of a table.
///
/// Column order follows the declaration order of the primary key. Any of
/// the sequences may be empty, e.g. when the provider has no key metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    #[serde(default)]
    pub partition_key_columns: Vec<String>,
    #[serde(default)]
    pub clustering_columns: Vec<String>,
    #[serde(default)]
    pub secondary_indexes: Vec<IndexDescriptor>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn with_partition_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_key_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_clustering<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clustering_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_index(mut self, index: IndexDescriptor) -> Self {
        self.secondary_indexes.push(index);
        self
    }

    /// Reject key metadata the analyzer cannot reason about: a blank key
    /// column name.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut keys = self.partition_key_columns.iter().chain(self.clustering_columns.iter());
        if keys.any(|column| column.trim().is_empty()) {
            return Err(SchemaError::MalformedMetadata(format!(
                "table '{}' declares a key column with an empty name",
                self.name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder() {
        let schema = TableSchema::new("orders")
            .with_partition_key(["customer_id"])
            .with_clustering(["order_date", "order_id"])
            .with_index(IndexDescriptor::new("status_idx").with_target("status"));

        assert_eq!(schema.partition_key_columns, vec!["customer_id"]);
        assert_eq!(schema.clustering_columns, vec!["order_date", "order_id"]);
        assert_eq!(schema.secondary_indexes.len(), 1);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn deserializes_with_defaults() {
        let schema: TableSchema = serde_json::from_value(json!({ "name": "events" })).unwrap();
        assert_eq!(schema, TableSchema::new("events"));
    }

    #[test]
    fn blank_key_column_is_malformed() {
        let schema = TableSchema::new("t").with_partition_key(["id", " "]);
        assert!(matches!(schema.validate(), Err(SchemaError::MalformedMetadata(_))));
    }

    #[test]
    fn blank_clustering_column_is_malformed() {
        let schema = TableSchema::new("t").with_partition_key(["id"]).with_clustering([""]);
        let err = schema.validate().unwrap_err();
        assert_eq!(err.to_string(), "Malformed metadata: table 't' declares a key column with an empty name");
    }

    #[test]
    fn quoted_identifiers_differing_in_case_are_valid() {
        // PRIMARY KEY (("Id"), id)
        let schema = TableSchema::new("t").with_partition_key(["Id"]).with_clustering(["id"]);
        assert!(schema.validate().is_ok());
    }
}
