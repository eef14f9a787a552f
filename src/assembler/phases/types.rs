use derive_more::Constructor;
use std::fmt::Display;

/// A 1-based source line number. Lines are the unit of error recovery,
/// so this is the only position information diagnostics carry.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Constructor)]
pub struct Loc {
    line: usize,
}

impl Loc {
    pub fn line(self) -> usize {
        self.line
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}", self.line)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Located<T: Sized> {
    loc: Loc,
    val: T,
}

impl<T> Located<T> {
    pub fn with_loc(loc: Loc, val: T) -> Self {
        Located { loc, val }
    }

    pub fn loc(&self) -> Loc {
        self.loc
    }

    pub fn value(self) -> T {
        self.val
    }

    pub fn map<S, F>(self, f: F) -> Located<S>
    where
        F: FnOnce(T) -> S,
    {
        Located::with_loc(self.loc, f(self.val))
    }
}

impl<T: Display> Display for Located<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc, self.val)
    }
}
