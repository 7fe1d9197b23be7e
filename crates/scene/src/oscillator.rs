//! Triangle-wave oscillator driving the walk cycle.
//!
//! Joint angles are never stored between frames. Every frame samples
//! [`oscillate`] with the elapsed time, so the pose is a pure function of the
//! clock and can be replayed or restarted at any point.

use walker_core::{Error, Result};

/// Sample a triangle wave that rises from `0` to `period` and falls back.
///
/// The wave has amplitude `[0, period]` and wavelength `2 * period`: it
/// rises during even cycles of `t / period` and falls during odd ones, with
/// no jump at any cycle boundary.
///
/// # Errors
/// Returns [`Error::Domain`] if `period` is not a positive finite number or
/// `t` is negative or not finite.
///
/// # Example
/// ```
/// use walker_scene::oscillate;
///
/// assert_eq!(oscillate(90.0, 45.0).unwrap(), 45.0);
/// assert_eq!(oscillate(90.0, 135.0).unwrap(), 45.0);
/// ```
pub fn oscillate(period: f32, t: f32) -> Result<f32> {
    if !period.is_finite() || period <= 0.0 {
        return Err(Error::Domain(format!(
            "oscillator period must be positive, got {period}"
        )));
    }
    if !t.is_finite() || t < 0.0 {
        return Err(Error::Domain(format!(
            "oscillator time must be non-negative, got {t}"
        )));
    }

    let cycles = t / period;
    let floor = cycles.floor();
    let angle = if floor.rem_euclid(2.0) == 0.0 {
        (cycles - floor) * period
    } else {
        (cycles.ceil() - cycles) * period
    };
    Ok(angle)
}
