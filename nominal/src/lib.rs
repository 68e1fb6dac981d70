//! Named terms of the untyped lambda calculus, manipulated through atom
//! swapping.
//!
//! Terms keep their binder names. Renaming is done with [`Term::swap`], which
//! needs no fresh atoms, and fresh atoms are drawn from an [`AtomSupply`] only
//! when [`substitute_with`] has to move a binder out of the way.

mod alpha;
mod atom;
mod free;
mod subst;
mod supply;
mod swap;
mod term;
#[cfg(test)]
mod testing;

pub use alpha::alpha_equivalent;
pub use atom::{atom_set, Atom, AtomSet};
pub use subst::{substitute, substitute_with};
pub use supply::{AtomSupply, Bounded, Counter, FreshError, Least};
pub use swap::swap_atom;
pub use term::{Term, TermRef};
