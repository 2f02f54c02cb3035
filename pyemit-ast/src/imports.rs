//! Python import builders.

use serde::{Deserialize, Serialize};

/// A Python import statement.
///
/// Renders as `import a, b as c` when [`from`](Self::from) is unset, or
/// `from module import a, b as c` when it is. An import must carry at least
/// one [`ImportWhat`] item by emission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Module path for the `from <module> import ...` form.
    #[serde(default)]
    pub from: Option<String>,
    /// Imported items, in source order.
    #[serde(default)]
    pub what: Vec<ImportWhat>,
}

impl Import {
    /// Plain `import <name>`.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            from: None,
            what: vec![ImportWhat::new(name)],
        }
    }

    /// Start a `from <module> import ...` statement with no items yet.
    pub fn from_module(module: impl Into<String>) -> Self {
        Self {
            from: Some(module.into()),
            what: Vec::new(),
        }
    }

    /// Import an additional name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.what.push(ImportWhat::new(name));
        self
    }

    /// Import an additional item, alias included.
    pub fn item(mut self, item: ImportWhat) -> Self {
        self.what.push(item);
        self
    }
}

/// A single imported item, optionally aliased (`name as alias`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportWhat {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl ImportWhat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Bind the imported name under an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
