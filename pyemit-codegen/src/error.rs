//! Structural-violation errors raised during emission.
//!
//! Every error here is the same kind of failure — the AST handed to the
//! emitter is structurally invalid — distinguished only by message and the
//! node that raised it. The first violation in document order aborts the
//! walk; [`GenerateError`] wraps it with the output cursor position and the
//! caret-annotated partial emission.

use miette::Diagnostic;
use thiserror::Error;

/// A structural violation detected while walking the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitError {
    #[error("function name cannot be empty")]
    #[diagnostic(code(pyemit::empty_function_name))]
    EmptyFunctionName,

    #[error("non-default argument follows default argument")]
    #[diagnostic(
        code(pyemit::non_default_after_default),
        help("move every parameter without a default ahead of the defaulted ones")
    )]
    NonDefaultAfterDefault,

    #[error("class name cannot be empty")]
    #[diagnostic(code(pyemit::empty_class_name))]
    EmptyClassName,

    #[error("field name cannot be empty")]
    #[diagnostic(code(pyemit::empty_field_name))]
    EmptyFieldName,

    #[error("field type cannot be empty")]
    #[diagnostic(code(pyemit::empty_field_type))]
    EmptyFieldType,

    #[error("parameter name cannot be empty")]
    #[diagnostic(code(pyemit::empty_parameter_name))]
    EmptyParameterName,

    #[error("import statement must have at least one item")]
    #[diagnostic(code(pyemit::empty_import))]
    EmptyImportList,

    #[error("imported name cannot be empty")]
    #[diagnostic(code(pyemit::empty_import_name))]
    EmptyImportName,

    #[error("assignment variable cannot be empty")]
    #[diagnostic(code(pyemit::empty_assignment_variable))]
    EmptyAssignmentVariable,

    #[error("assignment must have either a function call or a string value")]
    #[diagnostic(code(pyemit::missing_assignment_value))]
    MissingAssignmentValue,

    #[error("assignment cannot have both a function call and a string value")]
    #[diagnostic(code(pyemit::conflicting_assignment_value))]
    ConflictingAssignmentValue,

    #[error("comment must have at least one line")]
    #[diagnostic(code(pyemit::empty_comment))]
    EmptyComment,

    #[error("function call name cannot be empty")]
    #[diagnostic(code(pyemit::empty_call_name))]
    EmptyCallName,

    #[error("function call parameter value cannot be empty")]
    #[diagnostic(code(pyemit::empty_call_parameter_value))]
    EmptyCallParameterValue,

    #[error("positional argument follows keyword argument")]
    #[diagnostic(
        code(pyemit::positional_after_keyword),
        help("move every positional argument ahead of the keyword ones")
    )]
    PositionalAfterKeyword,

    #[error("if condition cannot be empty")]
    #[diagnostic(code(pyemit::empty_if_condition))]
    EmptyIfCondition,

    #[error("elif condition cannot be empty")]
    #[diagnostic(code(pyemit::empty_elif_condition))]
    EmptyElifCondition,
}

/// Emission failure, positioned at the output cursor where the walk aborted.
///
/// `output` holds everything emitted before the failure plus the tilde/caret
/// annotation under the failing column. It is meant for display, never for
/// use as a final artifact.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("error generating code (L{line}, Col{column}): {source}")]
pub struct GenerateError {
    /// 1-based output line at which emission failed.
    pub line: usize,
    /// 0-based output column at which emission failed.
    pub column: usize,
    #[source]
    #[diagnostic_source]
    pub source: EmitError,
    /// Partial emission with the caret annotation appended.
    pub output: String,
}
