//! Core library for the Lotus S-expression language: a tagged value tree,
//! a symbol environment, a reader over a generic parse tree, a recursive
//! evaluator, and the builtin prelude, plus REPL utilities.

pub mod ast;
pub mod diagnostics;
pub mod environment;
pub mod lexer;
pub mod parser;
pub mod reader;
pub mod repl;
pub mod runtime;
pub mod stdlib;
pub mod value;

pub use diagnostics::{Diagnostic, DiagnosticKind, LotusError, SourceSpan};
pub use environment::Environment;
pub use repl::Repl;
pub use runtime::{eval, Interpreter};
pub use value::Value;
