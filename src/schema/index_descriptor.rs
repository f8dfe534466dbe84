use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const TARGET_OPTION: &str = "target";
const COLLECTION_TARGETS: [&str; 4] = ["keys", "values", "entries", "full"];

/// A secondary index declared on a table.
///
/// `options["target"]` names the indexed column, possibly quoted and, for
/// collection columns, wrapped as `keys(col)`, `values(col)`, `entries(col)`
/// or `full(col)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub name: String,
    #[serde(default)]
    pub options: IndexMap<String, String>,
}

impl IndexDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), options: IndexMap::new() }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_target(self, target: impl Into<String>) -> Self {
        self.with_option(TARGET_OPTION, target)
    }

    /// Column covered by the index, or `None` if it declares no target.
    pub fn target_column(&self) -> Option<String> {
        let target = Self::strip_quotes(self.options.get(TARGET_OPTION)?.trim());

        for wrapper in COLLECTION_TARGETS {
            let inner = target
                .strip_prefix(wrapper)
                .and_then(|rest| rest.strip_prefix('('))
                .and_then(|rest| rest.strip_suffix(')'));
            if let Some(inner) = inner {
                return Some(Self::strip_quotes(inner.trim()).to_string());
            }
        }

        Some(target.to_string())
    }

    fn strip_quotes(text: &str) -> &str {
        let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
        text.strip_suffix(['"', '\'']).unwrap_or(text)
    }
}
