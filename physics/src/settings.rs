/*!
Simulation tunables.

The defaults come from `constants`; keep them together here so a host can override the
numerical trade-offs (gravity, damping, relaxation passes) per world without touching the
step code.

Notes
- Distances are in meters, time in seconds.
- `relaxation_passes` trades CPU for less residual penetration in stacks: each pass is a full
  O(n²) sweep over body pairs.
*/

use crate::constants::{DEFAULT_RELAXATION_PASSES, GRAVITY_MPS2, HORIZONTAL_DAMPING};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSettings {
    /// Downward acceleration applied to gravity-enabled bodies (positive, m/s²).
    pub gravity_mps2: f32,
    /// Per-tick multiplier on planar velocity.
    pub horizontal_damping: f32,
    /// Full pair sweeps per step. Zero disables collision resolution entirely.
    pub relaxation_passes: u32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity_mps2: GRAVITY_MPS2,
            horizontal_damping: HORIZONTAL_DAMPING,
            relaxation_passes: DEFAULT_RELAXATION_PASSES,
        }
    }
}

impl WorldSettings {
    #[inline]
    pub fn with_relaxation_passes(mut self, passes: u32) -> Self {
        self.relaxation_passes = passes;
        self
    }
}
