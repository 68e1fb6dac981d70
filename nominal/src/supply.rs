use std::convert::Infallible;

use thiserror::Error;
use tracing::trace;

use crate::atom::{Atom, AtomSet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FreshError {
    #[error("Every atom of a pool of {pool} is excluded")]
    Exhausted { pool: usize },
}

/// Source of fresh atoms.
///
/// `fresh` must return an atom outside `excluded`. Suppliers over an infinite
/// domain use `Infallible` as their error.
pub trait AtomSupply {
    type Error;
    fn fresh(&mut self, excluded: &AtomSet) -> Result<Atom, Self::Error>;
}

impl<S: AtomSupply + ?Sized> AtomSupply for &mut S {
    type Error = S::Error;
    fn fresh(&mut self, excluded: &AtomSet) -> Result<Atom, Self::Error> {
        (**self).fresh(excluded)
    }
}

fn numbered(prefix: &str, n: u64) -> Atom {
    Atom::from(format!("{prefix}{n}"))
}

/// Stateless supplier: the first of `prefix0, prefix1, ...` not excluded.
///
/// The answer depends on `excluded` alone, so every call is independent.
#[derive(Clone, Copy, Debug)]
pub struct Least {
    prefix: &'static str,
}
impl Least {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }
}
impl Default for Least {
    fn default() -> Self {
        Self::new("v")
    }
}
impl AtomSupply for Least {
    type Error = Infallible;
    fn fresh(&mut self, excluded: &AtomSet) -> Result<Atom, Self::Error> {
        // At most `excluded.size()` candidates can be rejected.
        let mut n = 0;
        loop {
            let atom = numbered(self.prefix, n);
            if !excluded.contains(&atom) {
                trace!(%atom, excluded = excluded.size(), "least fresh atom");
                return Ok(atom);
            }
            n += 1;
        }
    }
}

/// Sequential supplier: never hands out the same atom twice.
#[derive(Clone, Debug)]
pub struct Counter {
    prefix: String,
    next: u64,
}
impl Counter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}
impl Default for Counter {
    fn default() -> Self {
        Self::new("g")
    }
}
impl AtomSupply for Counter {
    type Error = Infallible;
    fn fresh(&mut self, excluded: &AtomSet) -> Result<Atom, Self::Error> {
        loop {
            let atom = numbered(&self.prefix, self.next);
            self.next += 1;
            if !excluded.contains(&atom) {
                trace!(%atom, "counter fresh atom");
                return Ok(atom);
            }
        }
    }
}

/// Supplier over a finite pool of atoms.
///
/// Running out is a configuration error and is reported as
/// [`FreshError::Exhausted`].
#[derive(Clone, Debug)]
pub struct Bounded {
    pool: Vec<Atom>,
}
impl Bounded {
    pub fn new<I>(pool: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Atom>,
    {
        let mut pool = pool.into_iter().map(Into::into).collect::<Vec<_>>();
        pool.sort();
        pool.dedup();
        Self { pool }
    }
}
impl AtomSupply for Bounded {
    type Error = FreshError;
    fn fresh(&mut self, excluded: &AtomSet) -> Result<Atom, Self::Error> {
        self.pool
            .iter()
            .find(|atom| !excluded.contains(*atom))
            .cloned()
            .ok_or(FreshError::Exhausted {
                pool: self.pool.len(),
            })
    }
}
