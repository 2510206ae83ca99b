use crate::expr::SExpr;
use std::fmt::{Display, Formatter};

/// Binding
///
/// The binding state of a symbol. Evaluation only ever consults a symbol's
/// name; the binding is carried so that later environments have somewhere
/// to put it.
#[derive(Debug, PartialEq, Clone)]
pub enum Binding {
    Unbound,
    Variable(Box<SExpr>),
    Procedure,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Symbol {
    name: String,
    binding: Binding,
}

impl Symbol {
    pub fn unbound(name: &str) -> Symbol {
        Symbol {
            name: name.into(),
            binding: Binding::Unbound,
        }
    }

    pub fn variable(name: &str, value: SExpr) -> Symbol {
        Symbol {
            name: name.into(),
            binding: Binding::Variable(Box::new(value)),
        }
    }

    /// Procedure
    ///
    /// Return a symbol tagged as naming a procedure. No callable is stored
    /// with the symbol.
    pub fn procedure(name: &str) -> Symbol {
        Symbol {
            name: name.into(),
            binding: Binding::Procedure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Bound Value
    ///
    /// Return the value a variable symbol is bound to, or None for unbound
    /// and procedure symbols.
    pub fn bound_value(&self) -> Option<&SExpr> {
        match &self.binding {
            Binding::Variable(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_unbound(&self) -> bool {
        matches!(self.binding, Binding::Unbound)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.binding, Binding::Variable(_))
    }

    pub fn is_procedure(&self) -> bool {
        matches!(self.binding, Binding::Procedure)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::unbound(name)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_kinds() {
        let sym = Symbol::unbound("x");
        assert!(sym.is_unbound());
        assert_eq!(sym.binding(), &Binding::Unbound);
        assert_eq!(sym.bound_value(), None);

        let sym = Symbol::variable("x", SExpr::Integer(42));
        assert!(sym.is_variable());
        assert_eq!(sym.binding(), &Binding::Variable(Box::new(SExpr::Integer(42))));
        assert_eq!(sym.bound_value(), Some(&SExpr::Integer(42)));

        let sym = Symbol::procedure("+");
        assert!(sym.is_procedure());
        assert_eq!(sym.binding(), &Binding::Procedure);
        assert_eq!(sym.bound_value(), None);
        assert_eq!(sym.name(), "+");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Symbol::unbound("foo")), "foo");
        assert_eq!(
            format!("{}", Symbol::variable("bar", SExpr::Float(1.5))),
            "bar"
        );
    }
}
