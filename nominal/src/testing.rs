//! Term builders and exhaustive term enumeration for the property tests.

pub(crate) use crate::{atom::*, term::*};

macro_rules! var {
    ($x:expr) => {
        $crate::term::Term::Var($crate::atom::Atom::from($x))
    };
}
macro_rules! lambda {
    ($x:expr, $body: expr) => {
        $crate::term::Term::Abs($crate::atom::Atom::from($x), $body.into())
    };
}
macro_rules! apply {
    ($lhs:expr, $rhs: expr) => {
        $crate::term::Term::App($lhs.into(), $rhs.into())
    };
}
pub(crate) use {apply, lambda, var};

pub(crate) const POOL: [&str; 3] = ["x", "y", "z"];

/// Every term over `POOL` with at most `max_size` nodes, smallest first.
pub(crate) fn terms_up_to(max_size: usize) -> Vec<Term> {
    let mut by_size: Vec<Vec<Term>> = vec![vec![]];
    for size in 1..=max_size {
        let mut terms = vec![];
        if size == 1 {
            terms.extend(POOL.iter().map(|x| var!(*x)));
        } else {
            for x in POOL {
                terms.extend(by_size[size - 1].iter().map(|body| lambda!(x, body.clone())));
            }
            for lhs_size in 1..size - 1 {
                let rhs_size = size - 1 - lhs_size;
                for lhs in &by_size[lhs_size] {
                    for rhs in &by_size[rhs_size] {
                        terms.push(apply!(lhs.clone(), rhs.clone()));
                    }
                }
            }
        }
        by_size.push(terms);
    }
    by_size.into_iter().flatten().collect()
}

/// Atoms used as swap and substitution parameters: the pool plus one outsider.
pub(crate) fn atoms() -> Vec<Atom> {
    POOL.iter().copied().chain(["w"]).map(Atom::from).collect()
}

#[test]
fn test_enumeration_counts() {
    assert_eq!(terms_up_to(1).len(), 3);
    assert_eq!(terms_up_to(2).len(), 3 + 9);
    assert_eq!(terms_up_to(3).len(), 3 + 9 + 36);
    assert_eq!(terms_up_to(4).len(), 3 + 9 + 36 + 162);
}
