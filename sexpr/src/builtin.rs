use crate::error::Error;
use crate::error::Error::InvalidArgs;
use crate::expr::{SExpr, Value};
use ::lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// Built Ins
///
/// Built ins are the operations a list may name in operator position. Each
/// one receives its arguments already evaluated, in order, and either
/// produces a new expression or fails the whole evaluation.
///
/// The table is built once, on first use, and is read only afterwards.
/// Adding an operation means adding a row to `load_builtins`; the evaluator
/// itself never changes.
pub type BuiltInFn = fn(&[SExpr]) -> Result<SExpr, Error>;

#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    func: BuiltInFn,
}

impl BuiltIn {
    pub fn new(name: &'static str, func: BuiltInFn) -> BuiltIn {
        BuiltIn { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, args: &[SExpr]) -> Result<SExpr, Error> {
        (self.func)(args)
    }
}

impl Debug for BuiltIn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<builtin:{}>", self.name)
    }
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltIn> = load_builtins();
}

fn load_builtins() -> HashMap<&'static str, BuiltIn> {
    let mut builtins = HashMap::new();
    let mut load_builtin = |name: &'static str, func: BuiltInFn| {
        builtins.insert(name, BuiltIn::new(name, func));
    };
    load_builtin("+", plus);
    builtins
}

/// Lookup
///
/// Return the built in registered under `name`, if any.
pub fn lookup(name: &str) -> Option<&'static BuiltIn> {
    BUILTINS.get(name)
}

pub fn names() -> Vec<&'static str> {
    let mut names = BUILTINS.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}

/// Plus
///
/// Sum every argument into an f32 accumulator starting at 0.0. Integer
/// arguments are widened to f32 first. The result is always a float, even
/// when every argument is an integer.
fn plus(args: &[SExpr]) -> Result<SExpr, Error> {
    let mut sum = 0.0_f32;
    for arg in args {
        sum += match arg.value() {
            Value::Integer(n) => n as f32,
            Value::Float(n) => n,
            _ => {
                return Err(InvalidArgs(
                    "+".to_string(),
                    "integer or float".to_string(),
                    arg.to_string(),
                ));
            }
        }
    }
    Ok(SExpr::Float(sum))
}
