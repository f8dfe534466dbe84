use serde::{Deserialize, Serialize};

/// Entry returned by [`SchemaProvider::list_tables`](crate::schema::SchemaProvider::list_tables).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub name: String,
}

impl TableSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn matches(&self, table_name: &str) -> bool {
        self.name.to_lowercase() == table_name.to_lowercase()
    }
}
