use std::time::SystemTime;

/// How the modification times of two collections relate.
///
/// Produced by [`Files::compare`](crate::Files::compare), read as
/// "`self` is ... `other`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// At least one side is empty, so there is nothing to compare.
    Undefined,

    /// Every record in `self` is strictly older than every record in `other`.
    AllOlder,

    /// The two spans intersect or touch.
    Overlapping,

    /// Every record in `self` is strictly newer than every record in `other`.
    AllNewer,
}

/// The `[earliest, latest]` modification-time interval of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub earliest: SystemTime,
    pub latest:   SystemTime,
}

impl Span {
    /// Compare this span with `other`. Touching endpoints count as overlap.
    pub fn compare(&self, other: &Span) -> Comparison {
        if self.latest < other.earliest {
            Comparison::AllOlder
        } else if other.latest < self.earliest {
            Comparison::AllNewer
        } else {
            Comparison::Overlapping
        }
    }

    /// Widen the span to include `t`.
    pub(crate) fn include(self, t: SystemTime) -> Self {
        Self {
            earliest: self.earliest.min(t),
            latest:   self.latest.max(t),
        }
    }
}
