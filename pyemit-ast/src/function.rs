//! Python function and parameter builders.

use serde::{Deserialize, Serialize};

use crate::{Import, Statement};

/// A Python function declaration.
///
/// Function-local imports render at the top of the body, before the
/// statements. A function with neither imports nor body statements emits a
/// single `pass`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Return type annotation (`def name(...) -> ReturnType:`).
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// Imports emitted inside the function body, before the statements.
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the return type annotation.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Append a statement to the body.
    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.body.push(statement.into());
        self
    }
}

/// A parameter in a Python function signature.
///
/// Once any parameter in a list carries a default, every parameter after it
/// must too; the emitter rejects a non-defaulted parameter that follows a
/// defaulted one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
        }
    }

    /// Set the type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the default value.
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Return;

    #[test]
    fn test_function_builder() {
        let f = Function::new("main")
            .returns("int")
            .param(Parameter::new("args").ty("List[str]"))
            .import(Import::plain("sys"))
            .statement(Return::value("0"));

        assert_eq!(f.name, "main");
        assert_eq!(f.return_type.as_deref(), Some("int"));
        assert_eq!(f.params.len(), 1);
        assert_eq!(f.imports.len(), 1);
        assert_eq!(f.body.len(), 1);
    }

    #[test]
    fn test_parameter_builder() {
        let p = Parameter::new("device").ty("str").default("\"cpu\"");
        assert_eq!(p.name, "device");
        assert_eq!(p.ty.as_deref(), Some("str"));
        assert_eq!(p.default.as_deref(), Some("\"cpu\""));
    }
}
