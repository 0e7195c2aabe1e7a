use std::fmt;

/// Score of a maximum-capacity search: the weakest cell on a path.
///
/// `Unbounded` orders above every bounded value, so `min` against it is the
/// identity. A path with no limiting cell (the source alone, or a direct
/// step onto the destination) has unbounded capacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capacity {
    Bounded(u32),
    Unbounded,
}

impl Capacity {
    /// The bounded value, if any.
    #[inline]
    pub const fn bounded(self) -> Option<u32> {
        match self {
            Self::Bounded(v) => Some(v),
            Self::Unbounded => None,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Bounded(0)
    }
}

impl From<u32> for Capacity {
    fn from(v: u32) -> Self {
        Self::Bounded(v)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(v) => write!(f, "{v}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}
