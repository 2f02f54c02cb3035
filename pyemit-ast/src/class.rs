//! Python class and class-attribute builders.

use serde::{Deserialize, Serialize};

use crate::{Function, Statement};

/// A Python class declaration.
///
/// The body renders in a fixed order: typed fields, class-level statements,
/// then methods. A class with none of the three emits a single `pass`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    /// Base class, if any (`class Name(Extend):`).
    #[serde(default)]
    pub extend: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Class-body statements, distinct from fields and methods.
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub methods: Vec<Function>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the base class.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extend = Some(base.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(statement.into());
        self
    }

    pub fn method(mut self, method: Function) -> Self {
        self.methods.push(method);
        self
    }
}

/// A typed class attribute declaration (`name: type`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
