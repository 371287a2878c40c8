use crate::{environment::Environment, runtime, value::Value};

/// The closed set of native operations. Builtins live inside `Value` as
/// this enum rather than as function pointers, which keeps the function
/// case of the value type copyable and comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    List,
    Head,
    Tail,
    Eval,
    Join,
    Len,
}

impl Builtin {
    pub const ALL: [Builtin; 10] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Len,
    ];

    /// The stable name the builtin is bound to in the prelude.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Len => "len",
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Invokes the builtin with an already-evaluated argument list. All
    /// failures come back as `Error` values, never as host errors.
    pub fn call(self, env: &mut Environment, args: Vec<Value>) -> Value {
        dispatch(env, self.name(), args)
    }
}

/// Populates the prelude bindings. The front end calls this once on the
/// single environment it constructs at startup.
pub fn install(env: &mut Environment) {
    for builtin in Builtin::ALL {
        env.define(builtin.name(), Value::function(builtin));
    }
}

/// Dispatch table keyed by stable builtin name. An unrecognized name falls
/// through to an `unknown function` error value.
pub fn dispatch(env: &mut Environment, name: &str, args: Vec<Value>) -> Value {
    let result = match name {
        "+" | "-" | "*" | "/" => arithmetic(name, args),
        "list" => Ok(Value::qexpr(args)),
        "head" => head(args),
        "tail" => tail(args),
        "eval" => eval_quoted(env, args),
        "join" => join(args),
        "len" => len(args),
        _ => Err(Value::error(format!("unknown function: {name}"))),
    };
    result.unwrap_or_else(|error| error)
}

fn ensure_exact(name: &str, args: &[Value], expected: usize) -> Result<(), Value> {
    if args.len() != expected {
        return Err(Value::error(format!("{name}: wrong number of arguments")));
    }
    Ok(())
}

fn expect_qexpr(name: &str, value: Value) -> Result<Vec<Value>, Value> {
    match value {
        Value::Qexpr(elements) => Ok(elements),
        _ => Err(Value::error(format!("{name}: incorrect type"))),
    }
}

fn expect_number(value: &Value) -> Result<i64, Value> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(Value::error("cannot operate on non-number")),
    }
}

/// Left fold starting from the first argument. A lone `-` operand is
/// unary negation.
fn arithmetic(name: &str, args: Vec<Value>) -> Result<Value, Value> {
    if args.is_empty() {
        return Err(Value::error(format!("{name}: wrong number of arguments")));
    }
    let mut accumulator = expect_number(&args[0])?;
    if name == "-" && args.len() == 1 {
        return negated(accumulator);
    }
    for value in &args[1..] {
        let operand = expect_number(value)?;
        let folded = match name {
            "+" => accumulator.checked_add(operand),
            "-" => accumulator.checked_sub(operand),
            "*" => accumulator.checked_mul(operand),
            "/" => {
                if operand == 0 {
                    return Err(Value::error("division by zero"));
                }
                accumulator.checked_div(operand)
            }
            _ => return Err(Value::error(format!("unknown function: {name}"))),
        };
        accumulator = match folded {
            Some(next) => next,
            None => return Err(Value::error(format!("{name}: integer overflow"))),
        };
    }
    Ok(Value::number(accumulator))
}

fn negated(operand: i64) -> Result<Value, Value> {
    match operand.checked_neg() {
        Some(negated) => Ok(Value::number(negated)),
        None => Err(Value::error("-: integer overflow")),
    }
}

fn head(mut args: Vec<Value>) -> Result<Value, Value> {
    ensure_exact("head", &args, 1)?;
    let mut elements = expect_qexpr("head", args.remove(0))?;
    if elements.is_empty() {
        return Err(Value::error("head: empty list"));
    }
    elements.truncate(1);
    Ok(Value::qexpr(elements))
}

fn tail(mut args: Vec<Value>) -> Result<Value, Value> {
    ensure_exact("tail", &args, 1)?;
    let mut elements = expect_qexpr("tail", args.remove(0))?;
    if elements.is_empty() {
        return Err(Value::error("tail: empty list"));
    }
    elements.remove(0);
    Ok(Value::qexpr(elements))
}

/// Retags the quoted list as an S-expression and re-enters the evaluator.
fn eval_quoted(env: &mut Environment, mut args: Vec<Value>) -> Result<Value, Value> {
    ensure_exact("eval", &args, 1)?;
    let elements = expect_qexpr("eval", args.remove(0))?;
    Ok(runtime::eval(env, Value::sexpr(elements)))
}

fn join(args: Vec<Value>) -> Result<Value, Value> {
    let mut joined = Vec::new();
    for value in args {
        joined.extend(expect_qexpr("join", value)?);
    }
    Ok(Value::qexpr(joined))
}

fn len(mut args: Vec<Value>) -> Result<Value, Value> {
    ensure_exact("len", &args, 1)?;
    let elements = expect_qexpr("len", args.remove(0))?;
    Ok(Value::number(elements.len() as i64))
}
