use crate::list::List;
use crate::symbol::Symbol;
use std::fmt::{Display, Formatter};

/// S-Expression
///
/// Every value is exactly one of these variants. Integer literals, float
/// literals and symbols are atoms; a list is the only compound form.
#[derive(Debug, PartialEq, Clone)]
pub enum SExpr {
    Integer(i64),
    Float(f32),
    Symbol(Symbol),
    List(List),
}

/// Kind
///
/// The capability set an expression belongs to.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Kind {
    Atom,
    List,
}

/// Value
///
/// The payload underneath an expression, for code that needs to inspect it
/// without caring which variant it came from. A symbol's payload is its
/// bound value, which is absent unless the symbol is a bound variable.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Value<'a> {
    Integer(i64),
    Float(f32),
    Bound(Option<&'a SExpr>),
    List(&'a List),
}

impl SExpr {
    pub fn new_symbol(name: &str) -> SExpr {
        SExpr::Symbol(Symbol::unbound(name))
    }

    pub fn new_variable(name: &str, value: SExpr) -> SExpr {
        SExpr::Symbol(Symbol::variable(name, value))
    }

    pub fn new_procedure(name: &str) -> SExpr {
        SExpr::Symbol(Symbol::procedure(name))
    }

    pub fn new_list<T: IntoIterator<Item = SExpr>>(iter: T) -> SExpr {
        SExpr::List(iter.into_iter().collect())
    }

    pub fn kind(&self) -> Kind {
        match self {
            SExpr::Integer(_) | SExpr::Float(_) | SExpr::Symbol(_) => Kind::Atom,
            SExpr::List(_) => Kind::List,
        }
    }

    pub fn is_atom(&self) -> bool {
        self.kind() == Kind::Atom
    }

    pub fn is_list(&self) -> bool {
        self.kind() == Kind::List
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, SExpr::Symbol(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, SExpr::Integer(_) | SExpr::Float(_))
    }

    pub fn value(&self) -> Value<'_> {
        match self {
            SExpr::Integer(val) => Value::Integer(*val),
            SExpr::Float(val) => Value::Float(*val),
            SExpr::Symbol(sym) => Value::Bound(sym.bound_value()),
            SExpr::List(list) => Value::List(list),
        }
    }

    /// Summary
    ///
    /// Render the expression one level deep. Lists nested inside a list are
    /// shown as `(...)`, so the result is bounded however deep `self` goes.
    pub fn summary(&self) -> String {
        match self {
            SExpr::List(list) => {
                let elements = list
                    .iter()
                    .map(|it| match it {
                        SExpr::List(_) => "(...)".to_string(),
                        atom => atom.to_string(),
                    })
                    .collect::<Vec<_>>();
                format!("({})", elements.join(" "))
            }
            atom => atom.to_string(),
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            SExpr::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            SExpr::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            SExpr::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            SExpr::Float(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SExpr::Integer(val) => Some(*val),
            _ => None,
        }
    }
}

impl From<i64> for SExpr {
    fn from(val: i64) -> Self {
        SExpr::Integer(val)
    }
}

impl From<f32> for SExpr {
    fn from(val: f32) -> Self {
        SExpr::Float(val)
    }
}

impl From<&str> for SExpr {
    fn from(val: &str) -> Self {
        SExpr::new_symbol(val)
    }
}

impl From<Symbol> for SExpr {
    fn from(val: Symbol) -> Self {
        SExpr::Symbol(val)
    }
}

impl From<List> for SExpr {
    fn from(val: List) -> Self {
        SExpr::List(val)
    }
}

impl From<Vec<SExpr>> for SExpr {
    fn from(val: Vec<SExpr>) -> Self {
        SExpr::List(List::from(val))
    }
}

impl Display for SExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SExpr::Integer(val) => write!(f, "{}", val),
            SExpr::Float(val) if val.abs() > 1E10 => write!(f, "{:e}", val),
            SExpr::Float(val) if val.fract() == 0.0 => write!(f, "{:.1}", val),
            SExpr::Float(val) => write!(f, "{}", val),
            SExpr::Symbol(sym) => Display::fmt(sym, f),
            SExpr::List(list) => Display::fmt(list, f),
        }
    }
}

#[macro_export]
macro_rules! sexpr {
    () => {
        $crate::expr::SExpr::List($crate::list::List::new())
    };
    ($elt:expr) => {
        $crate::expr::SExpr::from($elt)
    };
    ($($elt:expr),+) => {{
        let mut v = vec![];
        $(v.push($crate::expr::SExpr::from($elt));)+
        $crate::expr::SExpr::from(v)
    }};
}

#[macro_export]
macro_rules! list {
    () => {
        $crate::expr::SExpr::List($crate::list::List::new())
    };
    ($($elt:expr),+) => {{
        let v = vec![$($crate::expr::SExpr::from($elt),)+];
        $crate::expr::SExpr::from(v)
    }};
}
