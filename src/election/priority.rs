use std::fmt;

/// Priority is the rank of a participant. It is also its identity and its index in the roster.
/// Higher priority wins an election.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Priority(usize);

impl Priority {
    pub fn new(priority: usize) -> Self {
        Priority(priority)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for Priority {
    fn from(priority: usize) -> Self {
        Priority(priority)
    }
}

impl fmt::Debug for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
