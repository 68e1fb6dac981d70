use crate::atom::Atom;

pub type TermRef = Box<Term>;

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Term {
    /// `x`
    Var(Atom),
    /// `lambda x. t`
    Abs(Atom, TermRef),
    /// `t t`
    App(TermRef, TermRef),
}

impl Term {
    pub fn var(x: impl Into<Atom>) -> Self {
        Term::Var(x.into())
    }
    pub fn abs(x: impl Into<Atom>, body: Term) -> Self {
        Term::Abs(x.into(), body.into())
    }
    pub fn app(lhs: Term, rhs: Term) -> Self {
        Term::App(lhs.into(), rhs.into())
    }

    /// Number of nodes. Never zero.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::Abs(_, body) => 1 + body.size(),
            Term::App(lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(x) => f.write_str(x.as_str()),
            Term::Abs(x, body) => f.write_fmt(format_args!("lambda {x}. {body}")),
            Term::App(lhs, rhs) => f.write_fmt(format_args!("({lhs} {rhs})")),
        }
    }
}
