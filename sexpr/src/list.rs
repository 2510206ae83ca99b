use crate::expr::SExpr;
use std::fmt::{Display, Formatter};

/// List
///
/// An ordered sequence of expressions that owns its elements. A list only
/// grows: elements can be appended with `push`, but are never removed or
/// reordered, and no mutable access to an existing element is handed out.
/// Because every element is owned outright, a list can't contain itself.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct List {
    elements: Vec<SExpr>,
}

impl List {
    pub fn new() -> List {
        List { elements: vec![] }
    }

    /// Push
    ///
    /// Append `expr` to the end of the list.
    pub fn push(&mut self, expr: SExpr) {
        self.elements.push(expr);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn first(&self) -> Option<&SExpr> {
        self.elements.first()
    }

    /// Rest
    ///
    /// Every element after the first, or an empty slice for `()`.
    pub fn rest(&self) -> &[SExpr] {
        match self.elements.split_first() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn get(&self, idx: usize) -> Option<&SExpr> {
        self.elements.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SExpr> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[SExpr] {
        &self.elements
    }
}

impl From<Vec<SExpr>> for List {
    fn from(elements: Vec<SExpr>) -> Self {
        List { elements }
    }
}

impl FromIterator<SExpr> for List {
    fn from_iter<T: IntoIterator<Item = SExpr>>(iter: T) -> Self {
        List {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<SExpr> for List {
    fn extend<T: IntoIterator<Item = SExpr>>(&mut self, iter: T) {
        self.elements.extend(iter)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a SExpr;
    type IntoIter = std::slice::Iter<'a, SExpr>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for List {
    type Item = SExpr;
    type IntoIter = std::vec::IntoIter<SExpr>;

    fn into_iter(mut self) -> Self::IntoIter {
        std::mem::take(&mut self.elements).into_iter()
    }
}

impl Drop for List {
    /// Nested lists are flattened onto a work list before they are freed, so
    /// dropping a deeply nested expression doesn't recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.elements);
        while let Some(expr) = pending.pop() {
            if let SExpr::List(mut list) = expr {
                pending.append(&mut list.elements);
            }
        }
    }
}

impl Display for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (idx, expr) in self.elements.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            if f.alternate() {
                write!(f, "{:#}", expr)?;
            } else {
                write!(f, "{}", expr)?;
            }
        }
        write!(f, ")")
    }
}
