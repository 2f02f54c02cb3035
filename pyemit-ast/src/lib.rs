//! Python AST node types for the pyemit code generator.
//!
//! This crate defines the typed, in-memory representation of a Python module
//! that the emitter in `pyemit-codegen` renders to source text. The node set
//! is deliberately closed: a module ([`File`]) holds header comments, imports,
//! classes, and functions, and statement bodies are limited to a fixed set of
//! [`Statement`] variants.
//!
//! # Architecture
//!
//! ```text
//! host metadata → pyemit-ast (node tree) → pyemit-codegen (Python source)
//! ```
//!
//! The types here are plain data:
//! - Constructed wholesale by the host through the fluent builders
//! - Immutable once handed to a visitor
//! - Free of rendering concerns (the emitter owns those)
//!
//! Traversal goes through the [`Visitor`] trait and the [`Node::accept`]
//! dispatch method on every node. [`Statement`] is an enum, so a visitor
//! that forgets a statement kind fails to compile rather than at runtime.

mod class;
mod file;
mod function;
mod imports;
mod stmt;
mod visitor;

pub use class::{Class, Field};
pub use file::File;
pub use function::{Function, Parameter};
pub use imports::{Import, ImportWhat};
pub use stmt::{
    Assignment, CallStmt, Comment, Elif, Else, FunctionCall, FunctionCallParameter, If, Return,
    Statement,
};
pub use visitor::{Node, Visitor};
