//! Time unit helpers.
//!
//! Every duration in the engine (edge weights, travel, wait and total
//! response time) is an `f64` number of **minutes**.  `f64::INFINITY` is a
//! legal value meaning "unreachable" or "hospital overflowing"; it is never
//! an error by itself.

/// Minutes of expected wait at a hospital running at 100 % occupancy.
pub const DEFAULT_WAIT_ALPHA: f64 = 10.0;

/// Round `value` to `decimals` places for presentation.
///
/// Non-finite values pass through unchanged, as do values too large to
/// scale without overflowing (they have no fractional digits left anyway).
/// Halves round away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
