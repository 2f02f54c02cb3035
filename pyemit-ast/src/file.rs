//! The module-level root node.

use serde::{Deserialize, Serialize};

use crate::{Class, Function, Import};

/// A Python module: the root of an AST tree.
///
/// Sections render in a fixed order — header comments, imports, classes,
/// functions — each followed by one blank line when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// File name, carried for the host (the emitter never touches disk).
    pub name: String,
    #[serde(default)]
    pub header_comments: Vec<String>,
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub classes: Vec<Class>,
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a `#`-comment line at the top of the module.
    pub fn header_comment(mut self, comment: impl Into<String>) -> Self {
        self.header_comments.push(comment.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_builder() {
        let file = File::new("model.py")
            .header_comment("Generated file")
            .import(Import::plain("os"))
            .class(Class::new("Model"))
            .function(Function::new("main"));

        assert_eq!(file.name, "model.py");
        assert_eq!(file.header_comments, vec!["Generated file"]);
        assert_eq!(file.imports.len(), 1);
        assert_eq!(file.classes.len(), 1);
        assert_eq!(file.functions.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let file = File::new("model.py")
            .import(Import::from_module("typing").named("List"))
            .function(
                Function::new("main").statement(crate::Assignment::new("a").value("1")),
            );

        let json = serde_json::to_string(&file).unwrap();
        let back: File = serde_json::from_str(&json).unwrap();
        assert_eq!(file, back);
    }
}
