use crate::{
    atom::{Atom, AtomSet},
    term::Term,
};

impl Term {
    /// Atoms occurring in the term outside the scope of a binder of the same
    /// atom.
    pub fn free_variables(&self) -> AtomSet {
        fn collect(term: &Term, bound: &mut Vec<Atom>, acc: &mut AtomSet) {
            match term {
                Term::Var(x) => {
                    if !bound.contains(x) {
                        acc.insert_mut(x.clone());
                    }
                }
                Term::Abs(x, body) => {
                    bound.push(x.clone());
                    collect(body, bound, acc);
                    assert_eq!(Some(x), bound.pop().as_ref());
                }
                Term::App(lhs, rhs) => {
                    collect(lhs, bound, acc);
                    collect(rhs, bound, acc);
                }
            }
        }
        let mut acc = AtomSet::new_sync();
        collect(self, &mut vec![], &mut acc);
        acc
    }

    /// Whether `x` occurs free, without building the free-variable set.
    pub fn is_free(&self, x: &Atom) -> bool {
        match self {
            Term::Var(y) => y == x,
            Term::Abs(y, body) => y != x && body.is_free(x),
            Term::App(lhs, rhs) => lhs.is_free(x) || rhs.is_free(x),
        }
    }

    /// Every atom mentioned by the term, binders included.
    pub fn atoms(&self) -> AtomSet {
        fn collect(term: &Term, acc: &mut AtomSet) {
            match term {
                Term::Var(x) => acc.insert_mut(x.clone()),
                Term::Abs(x, body) => {
                    acc.insert_mut(x.clone());
                    collect(body, acc);
                }
                Term::App(lhs, rhs) => {
                    collect(lhs, acc);
                    collect(rhs, acc);
                }
            }
        }
        let mut acc = AtomSet::new_sync();
        collect(self, &mut acc);
        acc
    }
}
