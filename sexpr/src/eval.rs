use crate::builtin;
use crate::error::Error;
use crate::error::Error::{EmptyApplication, InvalidOperator, TooDeeplyNested, UnknownOperator};
use crate::expr::SExpr;
use crate::list::List;
use log::{debug, trace};

/// The nesting depth an `Evaluator` accepts unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Evaluator
///
/// Evaluates expressions by walking them recursively. An evaluator holds
/// no state between calls other than its configured nesting limit, so a
/// single instance may be reused for any number of expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl Evaluator {
    /// New
    ///
    /// Return a new Evaluator that accepts lists nested up to
    /// DEFAULT_MAX_DEPTH deep.
    pub const fn new() -> Evaluator {
        Evaluator {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// With Max Depth
    ///
    /// Return an Evaluator that fails with `TooDeeplyNested` instead of
    /// applying a list nested more than `max_depth` lists deep.
    pub const fn with_max_depth(max_depth: usize) -> Evaluator {
        Evaluator { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Eval
    ///
    /// Evaluate `expr` and return the result.
    ///
    /// Atoms evaluate to themselves. A list names a built in with its first
    /// element, which must be a symbol; every remaining element is evaluated
    /// in order and the built in is applied to the results. The first error
    /// encountered aborts the whole evaluation.
    ///
    /// # Arguments
    /// `expr` - An expression to evaluate
    pub fn eval(&self, expr: &SExpr) -> Result<SExpr, Error> {
        self.eval_at(expr, 0)
    }

    fn eval_at(&self, expr: &SExpr, depth: usize) -> Result<SExpr, Error> {
        match expr {
            SExpr::List(list) => self.apply(list, depth + 1),
            SExpr::Integer(_) | SExpr::Float(_) | SExpr::Symbol(_) => {
                trace!("atom: {}", expr);
                Ok(expr.clone())
            }
        }
    }

    fn apply(&self, list: &List, depth: usize) -> Result<SExpr, Error> {
        if depth > self.max_depth {
            return Err(TooDeeplyNested(self.max_depth));
        }

        let operator = match list.first() {
            Some(SExpr::Symbol(sym)) => sym,
            Some(other) => return Err(InvalidOperator(other.summary())),
            None => return Err(EmptyApplication),
        };
        trace!("list: {} with {} argument(s)", operator, list.len() - 1);
        let builtin = builtin::lookup(operator.name())
            .ok_or_else(|| UnknownOperator(operator.name().into()))?;

        let mut args = Vec::with_capacity(list.len() - 1);
        for arg in list.rest() {
            args.push(self.eval_at(arg, depth)?);
        }

        debug!("applying {} to {} argument(s)", builtin.name(), args.len());
        builtin.apply(&args)
    }
}

/// Eval
///
/// Evaluate `expr` with a default Evaluator.
pub fn eval(expr: &SExpr) -> Result<SExpr, Error> {
    Evaluator::new().eval(expr)
}
