use std::fmt;

use pursuit_core::Point;

/// The unit of visitation: where the evader and the pursuer both stand.
///
/// Two states are equal only when both positions match, so the same evader
/// cell with the pursuer elsewhere is a different state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointState {
    pub evader: Point,
    pub pursuer: Point,
}

impl JointState {
    #[inline]
    pub const fn new(evader: Point, pursuer: Point) -> Self {
        Self { evader, pursuer }
    }

    /// Whether both agents occupy the same cell.
    #[inline]
    pub fn is_capture(self) -> bool {
        self.evader == self.pursuer
    }
}

impl fmt::Display for JointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evader {} / pursuer {}", self.evader, self.pursuer)
    }
}
