use crate::{atom::Atom, term::Term};

/// The transposition `(x y)` applied to a single atom.
pub fn swap_atom(x: &Atom, y: &Atom, z: &Atom) -> Atom {
    if z == x {
        y.clone()
    } else if z == y {
        x.clone()
    } else {
        z.clone()
    }
}

impl Term {
    /// Exchanges `x` and `y` everywhere in the term, binders included.
    ///
    /// Binding structure is ignored, so the result never needs fresh atoms
    /// and always has the same size as `self`.
    pub fn swap(&self, x: &Atom, y: &Atom) -> Term {
        match self {
            Term::Var(z) => Term::Var(swap_atom(x, y, z)),
            Term::Abs(z, body) => Term::Abs(swap_atom(x, y, z), body.swap(x, y).into()),
            Term::App(lhs, rhs) => Term::App(lhs.swap(x, y).into(), rhs.swap(x, y).into()),
        }
    }
}
