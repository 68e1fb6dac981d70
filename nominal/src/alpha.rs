use tracing::trace;

use crate::term::Term;

/// Decides whether two terms differ only in the names of bound atoms.
///
/// Abstractions with different binders are compared by swapping the
/// right-hand binder into the left-hand one. This is sound only when the
/// left binder is not free in the right body. Swaps preserve size, so the
/// recursion is bounded by `lhs.size() + rhs.size()`.
pub fn alpha_equivalent(lhs: &Term, rhs: &Term) -> bool {
    match (lhs, rhs) {
        (Term::Var(x), Term::Var(y)) => x == y,
        (Term::App(l1, r1), Term::App(l2, r2)) => {
            alpha_equivalent(l1, l2) && alpha_equivalent(r1, r2)
        }
        (Term::Abs(x, b1), Term::Abs(y, b2)) if x == y => alpha_equivalent(b1, b2),
        (Term::Abs(x, b1), Term::Abs(y, b2)) => {
            if b2.is_free(x) {
                trace!(%x, %rhs, "binder would capture a free atom");
                return false;
            }
            alpha_equivalent(b1, &b2.swap(y, x))
        }
        (Term::Var(_) | Term::Abs(_, _) | Term::App(_, _), _) => false,
    }
}

impl Term {
    pub fn alpha_eq(&self, other: &Term) -> bool {
        alpha_equivalent(self, other)
    }
}
