//! Python source emitter for pyemit AST trees.
//!
//! This crate renders a [`pyemit_ast::File`] tree to syntactically
//! well-formed, correctly indented Python source. On a structural violation
//! it aborts the walk and reports the exact output line and column, together
//! with the partial emission annotated by a tilde/caret pointer under the
//! failing position.
//!
//! # Module Organization
//!
//! - [`writer`] - Output buffer primitives ([`CodeWriter`], [`Indent`])
//! - [`generator`] - The emitting visitor ([`PythonGenerator`], [`generate`])
//! - [`error`] - Structural-violation taxonomy ([`EmitError`], [`GenerateError`])
//!
//! # Usage
//!
//! ```
//! use pyemit_ast::{Assignment, File, Function};
//! use pyemit_codegen::{generate, Indent};
//!
//! let file = File::new("main.py").function(
//!     Function::new("main").statement(Assignment::new("a").value("1")),
//! );
//!
//! let code = generate(&file, Indent::Four)?;
//! assert_eq!(code, "def main():\n    a = 1\n\n");
//! # Ok::<(), pyemit_codegen::GenerateError>(())
//! ```
//!
//! The emitter holds no state across calls; each [`generate`] invocation
//! owns a fresh buffer and cursor, so independent trees can be rendered
//! concurrently without synchronization.

pub mod error;
pub mod generator;
pub mod writer;

pub use error::{EmitError, GenerateError};
pub use generator::{PythonGenerator, generate};
pub use writer::{CodeWriter, Indent};

// Re-exported so hosts can depend on this crate alone.
pub use pyemit_ast as ast;
