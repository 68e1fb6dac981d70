use std::sync::Arc;

use rpds::RedBlackTreeSetSync;

/// A variable name.
///
/// Atoms are opaque and only ever compared; the domain is every string, so a
/// finite set of atoms can always be avoided.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, derive_more::Display, Debug)]
pub struct Atom(Arc<str>);

impl Atom {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
impl From<String> for Atom {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}
impl From<&Atom> for Atom {
    fn from(atom: &Atom) -> Self {
        atom.clone()
    }
}

pub type AtomSet = RedBlackTreeSetSync<Atom>;

pub fn atom_set<I>(atoms: I) -> AtomSet
where
    I: IntoIterator,
    I::Item: Into<Atom>,
{
    let mut set = AtomSet::new_sync();
    for atom in atoms {
        set.insert_mut(atom.into());
    }
    set
}
