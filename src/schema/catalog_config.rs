/// Behaviour of the in-memory [`Catalog`](crate::schema::Catalog).
///
/// - `strict_keyspaces` makes `list_tables` fail with
///   `SchemaError::KeyspaceNotFound` for unknown keyspaces instead of
///   returning an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    /// Reject lookups in keyspaces that were never registered
    pub strict_keyspaces: bool,
}

impl CatalogConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown keyspaces are an error.
    pub fn strict() -> Self {
        Self { strict_keyspaces: true }
    }

    /// Unknown keyspaces behave like empty ones.
    pub fn lenient() -> Self {
        Self { strict_keyspaces: false }
    }
}
