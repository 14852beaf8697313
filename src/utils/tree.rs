use std::cmp::Ordering;

use anyhow::anyhow;

/// Depth budget for tree traversal and output. `All` replaces the `-1`
/// sentinel accepted at the CLI boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeDepth {
    All,
    Depth(usize),
}

impl TreeDepth {
    pub fn from_cli(n: i64) -> anyhow::Result<Self> {
        match n {
            -1 => Ok(Self::All),
            n if n >= 0 => Ok(Self::Depth(n as usize)),
            _ => Err(anyhow!(
                "invalid depth {} (expected -1 or a non-negative integer)",
                n
            )),
        }
    }

    /// The budget left for one level further down.
    pub fn child(self) -> Self {
        match self {
            Self::All => Self::All,
            Self::Depth(n) => Self::Depth(n.saturating_sub(1)),
        }
    }
}

impl PartialEq<usize> for TreeDepth {
    fn eq(&self, other: &usize) -> bool {
        match self {
            Self::All => false,
            Self::Depth(n) => n == other,
        }
    }
}

impl PartialOrd<usize> for TreeDepth {
    fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
        match self {
            Self::All => Some(Ordering::Greater),
            Self::Depth(n) => n.partial_cmp(other),
        }
    }
}

impl PartialEq<TreeDepth> for usize {
    fn eq(&self, other: &TreeDepth) -> bool {
        match other {
            TreeDepth::All => false,
            TreeDepth::Depth(n) => self == n,
        }
    }
}

impl PartialOrd<TreeDepth> for usize {
    fn partial_cmp(&self, other: &TreeDepth) -> Option<Ordering> {
        match other {
            TreeDepth::All => Some(Ordering::Less),
            TreeDepth::Depth(n) => self.partial_cmp(n),
        }
    }
}
