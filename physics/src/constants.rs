/// Gravity magnitude in meters per second squared (positive value).
/// Integrated as a downward acceleration on bodies with gravity enabled.
pub const GRAVITY_MPS2: f32 = 9.8;

/// Per-tick multiplier applied to the planar (XZ) velocity after integration.
///
/// Convention:
/// - 1.0 = no damping (bodies slide forever)
/// - 0.0 = planar motion stops after every tick
///
/// The vertical component is never damped.
pub const HORIZONTAL_DAMPING: f32 = 0.95;

/// Number of full relaxation sweeps over every body pair per world step.
/// A stability heuristic, not a convergence guarantee.
pub const DEFAULT_RELAXATION_PASSES: u32 = 3;

/// Height of the implicit ground plane (meters).
pub const GROUND_Y: f32 = 0.0;

/// Smallest scale any body axis may be edited down to.
pub const MIN_SCALE: f32 = 0.1;

/// Default body mass in kilograms.
pub const DEFAULT_MASS: f32 = 1.0;

/// Bias added (sign-preserving) to every ray direction component before the slab division.
///
/// Expressed relative to machine epsilon so a unit-length direction with an exactly zero
/// component yields a finite, very large slab distance instead of a division by zero.
pub const RAY_DIRECTION_BIAS: f32 = 8.0 * f32::EPSILON;

/// Below this squared length a vector is treated as having no direction.
pub const NORMALIZE_EPS_SQ: f32 = 1.0e-12;
