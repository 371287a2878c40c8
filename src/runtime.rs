use crate::{
    diagnostics::Result,
    environment::Environment,
    parser, reader, stdlib,
    value::Value,
};

/// Reduces a value tree against the environment. Total over every variant:
/// all failure is encoded as an `Error` value and nothing here aborts the
/// process.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => match env.get(&name) {
            Some(bound) => bound,
            None => Value::error(format!("unbound symbol: {name}")),
        },
        Value::Sexpr(elements) => eval_sexpr(env, elements),
        // Numbers, errors, quoted lists, and functions self-evaluate.
        other => other,
    }
}

fn eval_sexpr(env: &mut Environment, elements: Vec<Value>) -> Value {
    // Each element is evaluated exactly once, in order; error precedence
    // below depends on this.
    let mut evaluated = Vec::with_capacity(elements.len());
    for element in elements {
        evaluated.push(eval(env, element));
    }

    // The first error found left-to-right becomes the whole result; the
    // remaining elements are dropped.
    if let Some(idx) = evaluated.iter().position(Value::is_error) {
        return evaluated.swap_remove(idx);
    }

    if evaluated.is_empty() {
        return Value::sexpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.remove(0);
    }

    let callee = evaluated.remove(0);
    match callee {
        Value::Function(builtin) => builtin.call(env, evaluated),
        _ => Value::error("S-expression does not start with a function"),
    }
}

/// Owns the one environment of the process and drives the parse, read,
/// and eval pipeline over it.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        let mut env = Environment::new();
        stdlib::install(&mut env);
        Self { env }
    }

    /// Evaluates a whole source string as one root expression. Grammar
    /// violations come back as `Err`; language-level failures come back as
    /// `Ok` carrying an `Error` value.
    pub fn eval_source(&mut self, source: &str) -> Result<Value> {
        let root = parser::parse_program(source)?;
        let value = reader::read(&root);
        Ok(eval(&mut self.env, value))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}
