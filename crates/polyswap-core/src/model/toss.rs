use core::fmt;

/// A single throw in schedule-relative units. A height of 0 means nothing
/// leaves the hand at that instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Toss {
    pub height: u32,
    pub crossing: bool,
}

impl Toss {
    pub const fn new(height: u32, crossing: bool) -> Self {
        Self { height, crossing }
    }

    /// A zero-height throw cannot change hands; any that claims to is
    /// physically impossible.
    pub const fn is_phantom(self) -> bool {
        self.height == 0 && self.crossing
    }

    /// A throw that keeps its ball in the same hand for one beat pair: a 2
    /// straight or a 1 crossing. Inside a multiplex it is a held ball, not a
    /// real throw.
    pub const fn is_trivial(self) -> bool {
        (self.height == 2 && !self.crossing) || (self.height == 1 && self.crossing)
    }
}

impl fmt::Display for Toss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.height, if self.crossing { "x" } else { "" })
    }
}
