//! The Python emitter: a visitor that renders an AST tree to source text.

use pyemit_ast::{
    Assignment, CallStmt, Class, Comment, Elif, Else, Field, File, Function, FunctionCall,
    FunctionCallParameter, If, Import, ImportWhat, Node, Parameter, Return, Visitor,
};

use crate::error::{EmitError, GenerateError};
use crate::writer::{CodeWriter, Indent};

/// Render a [`File`] tree to Python source with the given indentation width.
///
/// Each call owns a fresh generator, so concurrent calls on independent trees
/// need no synchronization.
///
/// ```
/// use pyemit_ast::{File, Function};
/// use pyemit_codegen::{generate, Indent};
///
/// let file = File::new("hello.py").function(Function::new("main"));
/// let code = generate(&file, Indent::Four).unwrap();
/// assert_eq!(code, "def main():\n    pass\n\n");
/// ```
pub fn generate(file: &File, indent: Indent) -> Result<String, GenerateError> {
    PythonGenerator::new(indent).generate(file)
}

/// Stateful Python source emitter.
///
/// Walks a [`File`] depth-first through the visitor dispatch, writing into a
/// [`CodeWriter`]. Once a node begins emitting, its text is committed even if
/// a later sibling fails; the caret diagnostic is computed from the buffer as
/// it stands at failure time.
#[derive(Debug, Default)]
pub struct PythonGenerator {
    writer: CodeWriter,
}

impl PythonGenerator {
    pub fn new(indent: Indent) -> Self {
        Self {
            writer: CodeWriter::new(indent),
        }
    }

    /// Walk the tree and return the generated source.
    ///
    /// On a structural violation the walk aborts at the first failing node in
    /// document order. The returned [`GenerateError`] carries the failure
    /// position and the partial output annotated with a tilde run up to the
    /// failing column followed by `^^^`.
    pub fn generate(&mut self, file: &File) -> Result<String, GenerateError> {
        self.writer.reset();

        match file.accept(self) {
            Ok(()) => Ok(self.writer.take()),
            Err(source) => {
                let line = self.writer.line();
                let column = self.writer.column();

                self.writer.push("\n");
                if column > 0 {
                    self.writer.push(&"~".repeat(column - 1));
                }
                self.writer.push("^^^\n");

                Err(GenerateError {
                    line,
                    column,
                    source,
                    output: self.writer.take(),
                })
            }
        }
    }
}

impl Visitor for PythonGenerator {
    type Error = EmitError;

    fn visit_file(&mut self, file: &File) -> Result<(), EmitError> {
        for comment in &file.header_comments {
            self.writer.push(&format!("# {comment}\n"));
        }
        if !file.header_comments.is_empty() {
            self.writer.blank_line();
        }

        for import in &file.imports {
            import.accept(self)?;
        }
        if !file.imports.is_empty() {
            self.writer.blank_line();
        }

        for class in &file.classes {
            class.accept(self)?;
        }
        if !file.classes.is_empty() {
            self.writer.blank_line();
        }

        for function in &file.functions {
            function.accept(self)?;
        }
        if !file.functions.is_empty() {
            self.writer.blank_line();
        }

        Ok(())
    }

    fn visit_import(&mut self, import: &Import) -> Result<(), EmitError> {
        match &import.from {
            Some(module) => self.writer.push_indented(&format!("from {module} import ")),
            None => self.writer.push_indented("import "),
        }

        if import.what.is_empty() {
            return Err(EmitError::EmptyImportList);
        }

        for (i, what) in import.what.iter().enumerate() {
            if i > 0 {
                self.writer.push(", ");
            }
            what.accept(self)?;
        }

        self.writer.blank_line();

        Ok(())
    }

    fn visit_import_what(&mut self, what: &ImportWhat) -> Result<(), EmitError> {
        if what.name.is_empty() {
            return Err(EmitError::EmptyImportName);
        }

        self.writer.push(&what.name);

        if let Some(alias) = &what.alias {
            self.writer.push(&format!(" as {alias}"));
        }

        Ok(())
    }

    fn visit_class(&mut self, class: &Class) -> Result<(), EmitError> {
        self.writer.push_indented("class ");

        if class.name.is_empty() {
            return Err(EmitError::EmptyClassName);
        }

        self.writer.push(&class.name);

        match &class.extend {
            Some(base) => self.writer.push(&format!("({base}):\n")),
            None => self.writer.push(":\n"),
        }

        self.writer.indent();

        for field in &class.fields {
            field.accept(self)?;
        }
        if !class.fields.is_empty() {
            self.writer.blank_line();
        }

        for stmt in &class.statements {
            stmt.accept(self)?;
        }
        if !class.statements.is_empty() {
            self.writer.blank_line();
        }

        for method in &class.methods {
            method.accept(self)?;
        }

        if class.fields.is_empty() && class.statements.is_empty() && class.methods.is_empty() {
            self.writer.push_indented("pass\n");
        }

        self.writer.dedent();

        Ok(())
    }

    fn visit_field(&mut self, field: &Field) -> Result<(), EmitError> {
        if field.name.is_empty() {
            return Err(EmitError::EmptyFieldName);
        }

        self.writer.push_indented(&format!("{}: ", field.name));

        if field.ty.is_empty() {
            return Err(EmitError::EmptyFieldType);
        }

        self.writer.push(&format!("{}\n", field.ty));

        Ok(())
    }

    fn visit_function(&mut self, function: &Function) -> Result<(), EmitError> {
        self.writer.push_indented("def ");

        if function.name.is_empty() {
            return Err(EmitError::EmptyFunctionName);
        }

        self.writer.push(&format!("{}(", function.name));

        let mut default_seen = false;

        for (i, param) in function.params.iter().enumerate() {
            if param.default.is_some() {
                default_seen = true;
            }

            param.accept(self)?;

            if param.default.is_none() && default_seen {
                return Err(EmitError::NonDefaultAfterDefault);
            }

            if i < function.params.len() - 1 {
                self.writer.push(", ");
            }
        }

        match &function.return_type {
            Some(ty) => self.writer.push(&format!(") -> {ty}:\n")),
            None => self.writer.push("):\n"),
        }

        self.writer.indent();

        for import in &function.imports {
            import.accept(self)?;
        }

        for stmt in &function.body {
            stmt.accept(self)?;
        }

        // An import-only body is a valid suite; pass only when both are empty.
        if function.body.is_empty() && function.imports.is_empty() {
            self.writer.push_indented("pass\n");
        }

        self.writer.dedent();

        Ok(())
    }

    fn visit_parameter(&mut self, parameter: &Parameter) -> Result<(), EmitError> {
        if parameter.name.is_empty() {
            return Err(EmitError::EmptyParameterName);
        }

        let Some(ty) = &parameter.ty else {
            self.writer.push(&parameter.name);
            return Ok(());
        };

        match &parameter.default {
            Some(default) => self
                .writer
                .push(&format!("{}: {} = {}", parameter.name, ty, default)),
            None => self.writer.push(&format!("{}: {}", parameter.name, ty)),
        }

        Ok(())
    }

    fn visit_function_call(&mut self, call: &FunctionCall) -> Result<(), EmitError> {
        if call.name.is_empty() {
            return Err(EmitError::EmptyCallName);
        }

        self.writer.push(&format!("{}(\n", call.name));
        self.writer.indent();

        let mut keyword_seen = false;

        for (i, param) in call.params.iter().enumerate() {
            if param.name.is_some() {
                keyword_seen = true;
            }

            self.writer.push_indented("");
            param.accept(self)?;

            if param.name.is_none() && keyword_seen {
                return Err(EmitError::PositionalAfterKeyword);
            }

            if i < call.params.len() - 1 {
                self.writer.push(",\n");
            }
        }

        self.writer.dedent();
        self.writer.blank_line();
        self.writer.push(")\n");

        Ok(())
    }

    fn visit_function_call_parameter(
        &mut self,
        parameter: &FunctionCallParameter,
    ) -> Result<(), EmitError> {
        if parameter.value.is_empty() {
            return Err(EmitError::EmptyCallParameterValue);
        }

        match &parameter.name {
            Some(name) => self.writer.push(&format!("{} = {}", name, parameter.value)),
            None => self.writer.push(&parameter.value),
        }

        Ok(())
    }

    fn visit_assignment(&mut self, stmt: &Assignment) -> Result<(), EmitError> {
        if stmt.variable.is_empty() {
            return Err(EmitError::EmptyAssignmentVariable);
        }

        match &stmt.ty {
            Some(ty) => self
                .writer
                .push_indented(&format!("{}: {} = ", stmt.variable, ty)),
            None => self.writer.push_indented(&format!("{} = ", stmt.variable)),
        }

        match (&stmt.value, &stmt.call) {
            (Some(_), Some(_)) => Err(EmitError::ConflictingAssignmentValue),
            (None, None) => Err(EmitError::MissingAssignmentValue),
            (None, Some(call)) => call.accept(self),
            (Some(value), None) => {
                self.writer.push(&format!("{value}\n"));
                Ok(())
            }
        }
    }

    fn visit_comment(&mut self, stmt: &Comment) -> Result<(), EmitError> {
        if stmt.lines.is_empty() {
            return Err(EmitError::EmptyComment);
        }

        if let [line] = stmt.lines.as_slice() {
            self.writer.push_indented(&format!("# {line}\n"));
            return Ok(());
        }

        self.writer.push_indented("\"\"\"\n");
        for line in &stmt.lines {
            self.writer.push_indented(&format!("{line}\n"));
        }
        self.writer.push_indented("\"\"\"\n");

        Ok(())
    }

    fn visit_call_stmt(&mut self, stmt: &CallStmt) -> Result<(), EmitError> {
        self.writer.push_indented("");
        stmt.call.accept(self)
    }

    fn visit_return(&mut self, stmt: &Return) -> Result<(), EmitError> {
        match &stmt.value {
            Some(value) => self.writer.push_indented(&format!("return {value}\n")),
            None => self.writer.push_indented("return\n"),
        }

        Ok(())
    }

    fn visit_if(&mut self, stmt: &If) -> Result<(), EmitError> {
        if stmt.condition.is_empty() {
            return Err(EmitError::EmptyIfCondition);
        }

        self.writer.push_indented(&format!("if {}:\n", stmt.condition));
        self.writer.indent();

        for inner in &stmt.body {
            inner.accept(self)?;
        }
        if stmt.body.is_empty() {
            self.writer.push_indented("pass\n");
        }

        self.writer.dedent();

        for elif in &stmt.elifs {
            elif.accept(self)?;
        }

        if let Some(orelse) = &stmt.orelse {
            orelse.accept(self)?;
        }

        Ok(())
    }

    fn visit_elif(&mut self, stmt: &Elif) -> Result<(), EmitError> {
        if stmt.condition.is_empty() {
            return Err(EmitError::EmptyElifCondition);
        }

        self.writer
            .push_indented(&format!("elif {}:\n", stmt.condition));
        self.writer.indent();

        for inner in &stmt.body {
            inner.accept(self)?;
        }
        if stmt.body.is_empty() {
            self.writer.push_indented("pass\n");
        }

        self.writer.dedent();

        Ok(())
    }

    fn visit_else(&mut self, stmt: &Else) -> Result<(), EmitError> {
        self.writer.push_indented("else:\n");
        self.writer.indent();

        for inner in &stmt.body {
            inner.accept(self)?;
        }
        if stmt.body.is_empty() {
            self.writer.push_indented("pass\n");
        }

        self.writer.dedent();

        Ok(())
    }
}
