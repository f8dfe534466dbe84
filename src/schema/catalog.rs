use std::{collections::HashMap, fs, path::Path, sync::{Arc, RwLock}};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::schema::{CatalogConfig, SchemaError, SchemaProvider, TableSchema, TableSummary};

/// Shared handle to an in-memory keyspace catalog.
pub type Catalog = Arc<RwLock<InternalCatalog>>;

/// Keyspaces and their tables. Names are matched case-insensitively;
/// tables keep their insertion order.
#[derive(Debug, Default)]
pub struct InternalCatalog {
    config: CatalogConfig,
    keyspaces: HashMap<String, IndexMap<String, TableSchema>>,
}

impl InternalCatalog {
    pub fn new_catalog() -> Self {
        Self::new_catalog_with_config(CatalogConfig::default())
    }

    pub fn new_catalog_with_config(config: CatalogConfig) -> Self {
        Self { config, keyspaces: HashMap::new() }
    }

    pub fn into_protected(self) -> Catalog {
        Arc::new(RwLock::new(self))
    }

    /// Register a table, replacing any table of the same name.
    pub fn add_table(&mut self, keyspace: &str, schema: TableSchema) -> Option<TableSchema> {
        self.keyspaces
            .entry(keyspace.to_lowercase())
            .or_default()
            .insert(schema.name.to_lowercase(), schema)
    }

    pub fn list_keyspaces(&self) -> Vec<String> {
        let mut names = self.keyspaces.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Load a JSON array of table schemas into `keyspace`.
    pub fn load_from_json(&mut self, keyspace: &str, json_value: Value) -> Result<usize, SchemaError> {
        let Value::Array(_) = json_value else {
            return Err(SchemaError::MalformedMetadata(
                "catalog JSON must be an array of table definitions".to_string(),
            ));
        };

        let tables: Vec<TableSchema> = serde_json::from_value(json_value)?;
        let count = tables.len();
        for table in tables {
            self.add_table(keyspace, table);
        }

        debug!(%keyspace, count, "loaded tables into catalog");
        Ok(count)
    }

    pub fn load_from_file(&mut self, keyspace: &str, file_path: &Path) -> Result<usize, SchemaError> {
        let file_content = fs::read_to_string(file_path)?;
        let json_value = serde_json::from_str::<Value>(&file_content)?;
        self.load_from_json(keyspace, json_value)
    }

    pub fn list_tables(&self, keyspace: &str) -> Result<Vec<TableSummary>, SchemaError> {
        match self.keyspaces.get(&keyspace.to_lowercase()) {
            Some(tables) => Ok(tables.values().map(|t| TableSummary::new(t.name.clone())).collect()),
            None if self.config.strict_keyspaces => Err(SchemaError::KeyspaceNotFound(keyspace.to_string())),
            None => Ok(vec![]),
        }
    }

    pub fn describe_table(&self, keyspace: &str, table: &str) -> Result<TableSchema, SchemaError> {
        self.keyspaces
            .get(&keyspace.to_lowercase())
            .and_then(|tables| tables.get(&table.to_lowercase()))
            .cloned()
            .ok_or_else(|| SchemaError::TableNotFound {
                keyspace: keyspace.to_string(),
                table: table.to_string(),
            })
    }
}

pub trait CatalogCommon {
    fn new_catalog() -> Self;
    fn new_catalog_with_config(config: CatalogConfig) -> Self;
    fn add_table(&self, keyspace: &str, schema: TableSchema) -> Option<TableSchema>;
    fn list_keyspaces(&self) -> Vec<String>;
    fn load_from_json(&self, keyspace: &str, json_value: Value) -> Result<usize, SchemaError>;
    fn load_from_file(&self, keyspace: &str, file_path: &Path) -> Result<usize, SchemaError>;
}

impl CatalogCommon for Catalog {
    fn new_catalog() -> Self {
        InternalCatalog::new_catalog().into_protected()
    }

    fn new_catalog_with_config(config: CatalogConfig) -> Self {
        InternalCatalog::new_catalog_with_config(config).into_protected()
    }

    fn add_table(&self, keyspace: &str, schema: TableSchema) -> Option<TableSchema> {
        self.write().unwrap_or_else(|poisoned| poisoned.into_inner()).add_table(keyspace, schema)
    }

    fn list_keyspaces(&self) -> Vec<String> {
        self.read().unwrap_or_else(|poisoned| poisoned.into_inner()).list_keyspaces()
    }

    fn load_from_json(&self, keyspace: &str, json_value: Value) -> Result<usize, SchemaError> {
        self.write()
            .map_err(|_| SchemaError::Connectivity("catalog lock poisoned".to_string()))?
            .load_from_json(keyspace, json_value)
    }

    fn load_from_file(&self, keyspace: &str, file_path: &Path) -> Result<usize, SchemaError> {
        self.write()
            .map_err(|_| SchemaError::Connectivity("catalog lock poisoned".to_string()))?
            .load_from_file(keyspace, file_path)
    }
}

impl SchemaProvider for Catalog {
    fn list_tables(&self, keyspace: &str) -> Result<Vec<TableSummary>, SchemaError> {
        self.read()
            .map_err(|_| SchemaError::Connectivity("catalog lock poisoned".to_string()))?
            .list_tables(keyspace)
    }

    fn describe_table(&self, keyspace: &str, table: &str) -> Result<TableSchema, SchemaError> {
        self.read()
            .map_err(|_| SchemaError::Connectivity("catalog lock poisoned".to_string()))?
            .describe_table(keyspace, table)
    }
}
