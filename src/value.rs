use std::fmt;

use crate::stdlib::Builtin;

/// The tagged runtime datum of the Lotus language.
///
/// Every value is a single-owner tree: an expression list exclusively owns
/// its elements, so `Clone` is a structural deep copy. The environment
/// relies on this to store independent copies of bindings, decoupling a
/// binding's lifetime from the expression that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    Function(Builtin),
    /// An expression awaiting evaluation; elements reduce left-to-right.
    Sexpr(Vec<Value>),
    /// A quoted list; elements stay opaque data until explicitly
    /// re-entered through the `eval` builtin.
    Qexpr(Vec<Value>),
}

impl Value {
    pub fn number(value: i64) -> Self {
        Self::Number(value)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn function(builtin: Builtin) -> Self {
        Self::Function(builtin)
    }

    pub fn sexpr(elements: Vec<Value>) -> Self {
        Self::Sexpr(elements)
    }

    pub fn qexpr(elements: Vec<Value>) -> Self {
        Self::Qexpr(elements)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Error(_) => "Error",
            Self::Symbol(_) => "Symbol",
            Self::Function(_) => "Function",
            Self::Sexpr(_) => "S-expression",
            Self::Qexpr(_) => "Q-expression",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Function(builtin) => write!(f, "<builtin {}>", builtin.name()),
            Self::Sexpr(elements) => write_list(f, '(', elements, ')'),
            Self::Qexpr(elements) => write_list(f, '{', elements, '}'),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, open: char, elements: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (idx, element) in elements.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{element}")?;
    }
    write!(f, "{close}")
}
