pub mod builtin;
pub mod error;
pub mod eval;
pub mod expr;
pub mod list;
pub mod symbol;

pub use crate::error::Error;
pub use crate::eval::{eval, Evaluator};
pub use crate::expr::SExpr;
