//! Visitor dispatch over the node tree.
//!
//! Every node type implements [`Node::accept`], which calls the matching
//! [`Visitor`] method for its own kind and forwards the result unchanged.
//! This is the only coupling between the data model and consumers: adding a
//! statement variant means adding one visitor method and one dispatch arm,
//! and the exhaustive match on [`Statement`] makes a missing arm a compile
//! error.

use crate::{
    Assignment, CallStmt, Class, Comment, Elif, Else, Field, File, Function, FunctionCall,
    FunctionCallParameter, If, Import, ImportWhat, Parameter, Return, Statement,
};

/// Operations over every node kind in the tree.
///
/// The associated `Error` keeps this crate agnostic of any particular error
/// taxonomy; the emitter in `pyemit-codegen` plugs in its own.
pub trait Visitor {
    type Error;

    fn visit_file(&mut self, file: &File) -> Result<(), Self::Error>;
    fn visit_import(&mut self, import: &Import) -> Result<(), Self::Error>;
    fn visit_import_what(&mut self, what: &ImportWhat) -> Result<(), Self::Error>;
    fn visit_class(&mut self, class: &Class) -> Result<(), Self::Error>;
    fn visit_field(&mut self, field: &Field) -> Result<(), Self::Error>;
    fn visit_function(&mut self, function: &Function) -> Result<(), Self::Error>;
    fn visit_parameter(&mut self, parameter: &Parameter) -> Result<(), Self::Error>;
    fn visit_function_call(&mut self, call: &FunctionCall) -> Result<(), Self::Error>;
    fn visit_function_call_parameter(
        &mut self,
        parameter: &FunctionCallParameter,
    ) -> Result<(), Self::Error>;

    // Statements
    fn visit_assignment(&mut self, stmt: &Assignment) -> Result<(), Self::Error>;
    fn visit_comment(&mut self, stmt: &Comment) -> Result<(), Self::Error>;
    fn visit_call_stmt(&mut self, stmt: &CallStmt) -> Result<(), Self::Error>;
    fn visit_return(&mut self, stmt: &Return) -> Result<(), Self::Error>;
    fn visit_if(&mut self, stmt: &If) -> Result<(), Self::Error>;
    fn visit_elif(&mut self, stmt: &Elif) -> Result<(), Self::Error>;
    fn visit_else(&mut self, stmt: &Else) -> Result<(), Self::Error>;
}

/// Accept a visitor, dispatching on the concrete node kind.
pub trait Node {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error>;
}

impl Node for File {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_file(self)
    }
}

impl Node for Import {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_import(self)
    }
}

impl Node for ImportWhat {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_import_what(self)
    }
}

impl Node for Class {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_class(self)
    }
}

impl Node for Field {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_field(self)
    }
}

impl Node for Function {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_function(self)
    }
}

impl Node for Parameter {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_parameter(self)
    }
}

impl Node for FunctionCall {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_function_call(self)
    }
}

impl Node for FunctionCallParameter {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_function_call_parameter(self)
    }
}

impl Node for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            Statement::Assignment(stmt) => visitor.visit_assignment(stmt),
            Statement::Comment(stmt) => visitor.visit_comment(stmt),
            Statement::Call(stmt) => visitor.visit_call_stmt(stmt),
            Statement::Return(stmt) => visitor.visit_return(stmt),
            Statement::If(stmt) => visitor.visit_if(stmt),
        }
    }
}

impl Node for Elif {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_elif(self)
    }
}

impl Node for Else {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_else(self)
    }
}
