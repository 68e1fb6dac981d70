use tracing::trace;

use crate::{
    atom::{Atom, AtomSet},
    supply::{AtomSupply, Least},
    term::Term,
};

/// Replaces the free occurrences of `target` in `term` with `value`.
///
/// Every binder that `value` passes under is renamed to an atom supplied by
/// `supply`, chosen outside the free variables of `value`, of the abstraction
/// itself, and `target`. Only a failing `supply` can make this return `Err`.
pub fn substitute_with<S: AtomSupply + ?Sized>(
    supply: &mut S,
    term: &Term,
    value: &Term,
    target: &Atom,
) -> Result<Term, S::Error> {
    // The recursive call under a binder is on a renamed body, which is not a
    // subterm of `term`. It has the size of the body though, so each call
    // spends one unit out of `term.size()`.
    fn substitute_rec<S: AtomSupply + ?Sized>(
        fuel: usize,
        supply: &mut S,
        term: &Term,
        value: &Term,
        value_free: &AtomSet,
        target: &Atom,
    ) -> Result<Term, S::Error> {
        debug_assert!(term.size() <= fuel);
        assert_ne!(fuel, 0, "substitution outlived the size of its input");
        let fuel = fuel - 1;
        Ok(match term {
            Term::Var(y) if y == target => value.clone(),
            Term::Var(_) => term.clone(),
            Term::Abs(y, _) if y == target => term.clone(),
            Term::Abs(y, body) => {
                let mut excluded = value_free.clone();
                for x in term.free_variables().iter() {
                    excluded.insert_mut(x.clone());
                }
                excluded.insert_mut(target.clone());
                let z = supply.fresh(&excluded)?;
                trace!(%y, %z, "renaming binder");
                let body = body.swap(y, &z);
                let body = substitute_rec(fuel, supply, &body, value, value_free, target)?;
                Term::Abs(z, body.into())
            }
            Term::App(lhs, rhs) => Term::App(
                substitute_rec(fuel, supply, lhs, value, value_free, target)?.into(),
                substitute_rec(fuel, supply, rhs, value, value_free, target)?.into(),
            ),
        })
    }
    substitute_rec(
        term.size(),
        supply,
        term,
        value,
        &value.free_variables(),
        target,
    )
}

/// [`substitute_with`] drawing fresh atoms from [`Least`].
pub fn substitute(term: &Term, value: &Term, target: &Atom) -> Term {
    match substitute_with(&mut Least::default(), term, value, target) {
        Ok(term) => term,
        Err(e) => match e {},
    }
}

impl Term {
    pub fn substitute(&self, value: &Term, target: &Atom) -> Term {
        substitute(self, value, target)
    }
}
