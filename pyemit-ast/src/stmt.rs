//! The closed set of Python statement variants.

use serde::{Deserialize, Serialize};

/// A statement in a function, class, or conditional body.
///
/// The set is closed on purpose: hosts cannot introduce statement kinds the
/// emitter does not know how to render, and every visitor match over it is
/// exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Assignment(Assignment),
    Comment(Comment),
    Call(CallStmt),
    Return(Return),
    If(If),
}

/// A plain or call assignment (`var = value`, `var: type = value`,
/// `var = call(...)`).
///
/// Exactly one of [`value`](Self::value) and [`call`](Self::call) must be
/// set; the emitter rejects both-or-neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub variable: String,
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub call: Option<FunctionCall>,
}

impl Assignment {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            ..Self::default()
        }
    }

    /// Set the type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Assign a literal value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Assign the result of a function call.
    pub fn call(mut self, call: FunctionCall) -> Self {
        self.call = Some(call);
        self
    }
}

/// A comment: one line renders as `# ...`, two or more as a `"""` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub lines: Vec<String>,
}

impl Comment {
    /// A single-line `#` comment.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// A comment from multiple lines.
    pub fn block(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// A bare function call used as a statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallStmt {
    pub call: FunctionCall,
}

impl CallStmt {
    pub fn new(call: FunctionCall) -> Self {
        Self { call }
    }
}

/// A `return` statement, bare or with a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    #[serde(default)]
    pub value: Option<String>,
}

impl Return {
    /// A bare `return`.
    pub fn bare() -> Self {
        Self { value: None }
    }

    /// `return <value>`.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

/// An `if` statement with optional `elif` chains and `else` branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub condition: String,
    #[serde(default)]
    pub body: Vec<Statement>,
    #[serde(default)]
    pub elifs: Vec<Elif>,
    #[serde(default)]
    pub orelse: Option<Else>,
}

impl If {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            ..Self::default()
        }
    }

    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.body.push(statement.into());
        self
    }

    pub fn elif(mut self, elif: Elif) -> Self {
        self.elifs.push(elif);
        self
    }

    pub fn orelse(mut self, orelse: Else) -> Self {
        self.orelse = Some(orelse);
        self
    }
}

/// An `elif` branch of an [`If`] statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Elif {
    pub condition: String,
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl Elif {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.body.push(statement.into());
        self
    }
}

/// The `else` branch of an [`If`] statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Else {
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl Else {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.body.push(statement.into());
        self
    }
}

/// A function call expression, rendered with one argument per line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub params: Vec<FunctionCallParameter>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Add a positional argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.params.push(FunctionCallParameter::positional(value));
        self
    }

    /// Add a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(FunctionCallParameter::keyword(name, value));
        self
    }
}

/// A single call argument, positional (`value`) or keyword (`name = value`).
///
/// A positional argument must not follow a keyword one, mirroring Python's
/// own call syntax rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCallParameter {
    #[serde(default)]
    pub name: Option<String>,
    pub value: String,
}

impl FunctionCallParameter {
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    pub fn keyword(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }
}

impl From<Assignment> for Statement {
    fn from(stmt: Assignment) -> Self {
        Statement::Assignment(stmt)
    }
}

impl From<Comment> for Statement {
    fn from(stmt: Comment) -> Self {
        Statement::Comment(stmt)
    }
}

impl From<CallStmt> for Statement {
    fn from(stmt: CallStmt) -> Self {
        Statement::Call(stmt)
    }
}

impl From<FunctionCall> for Statement {
    fn from(call: FunctionCall) -> Self {
        Statement::Call(CallStmt::new(call))
    }
}

impl From<Return> for Statement {
    fn from(stmt: Return) -> Self {
        Statement::Return(stmt)
    }
}

impl From<If> for Statement {
    fn from(stmt: If) -> Self {
        Statement::If(stmt)
    }
}
