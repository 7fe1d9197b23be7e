//! Per-frame joint angles for the walk cycle.

use walker_core::{Error, Result};

use crate::oscillator::oscillate;

/// Period of the arm, thigh and head sway, in scaled time units.
pub const STRIDE_PERIOD: f32 = 90.0;
/// Period of the knee bend; twice as fast as the stride.
pub const KNEE_PERIOD: f32 = 45.0;
/// Offset that centers the `[0, period]` wave around zero.
const PHASE_OFFSET: f32 = 45.0;
/// Fixed forearm bend.
pub const ELBOW_BEND: f32 = -45.0;

/// Joint angles in degrees for one instant of the walk cycle.
///
/// Left and right limbs sample the same wave with opposite sign so the gait
/// alternates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAngles {
    pub head_yaw: f32,
    pub right_arm: f32,
    pub left_arm: f32,
    pub right_thigh: f32,
    pub left_thigh: f32,
    pub right_knee: f32,
    pub left_knee: f32,
    pub elbow: f32,
}

impl JointAngles {
    /// Sample every joint at `elapsed_ms`, slowed down by `frame_speed`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `frame_speed` is not positive, the same
    /// error [`SceneConfig::validate`](crate::SceneConfig::validate) reports,
    /// and [`Error::Domain`] if the elapsed time is negative.
    pub fn sample(elapsed_ms: f32, frame_speed: f32) -> Result<Self> {
        if !frame_speed.is_finite() || frame_speed <= 0.0 {
            return Err(Error::Config(format!(
                "frame speed must be positive, got {frame_speed}"
            )));
        }
        let t = elapsed_ms / frame_speed;

        let stride = oscillate(STRIDE_PERIOD, t)?;
        let knee = oscillate(KNEE_PERIOD, t)?;

        let leading = PHASE_OFFSET - stride;
        let trailing = stride - PHASE_OFFSET;
        let bend = PHASE_OFFSET - knee;

        Ok(Self {
            head_yaw: leading,
            right_arm: leading,
            left_arm: trailing,
            right_thigh: leading,
            left_thigh: trailing,
            right_knee: bend,
            left_knee: bend,
            elbow: ELBOW_BEND,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_cycle() {
        let angles = JointAngles::sample(0.0, 10.0).unwrap();
        assert_eq!(angles.head_yaw, 45.0);
        assert_eq!(angles.right_arm, 45.0);
        assert_eq!(angles.left_arm, -45.0);
        assert_eq!(angles.right_thigh, 45.0);
        assert_eq!(angles.left_thigh, -45.0);
        assert_eq!(angles.right_knee, 45.0);
        assert_eq!(angles.left_knee, 45.0);
        assert_eq!(angles.elbow, -45.0);
    }

    #[test]
    fn test_mid_stride_is_neutral() {
        // 450 ms at speed 10 is t = 45, the middle of the rising stride.
        let angles = JointAngles::sample(450.0, 10.0).unwrap();
        assert_eq!(angles.right_arm, 0.0);
        assert_eq!(angles.left_arm, 0.0);
        assert_eq!(angles.right_thigh, 0.0);
        // Knees run twice as fast and are back at the bottom of their wave.
        assert_eq!(angles.right_knee, 45.0);
    }

    #[test]
    fn test_sides_mirror() {
        for step in 0..200 {
            let angles = JointAngles::sample(step as f32 * 37.0, 10.0).unwrap();
            assert_eq!(angles.left_arm, -angles.right_arm);
            assert_eq!(angles.left_thigh, -angles.right_thigh);
            assert_eq!(angles.left_knee, angles.right_knee);
        }
    }

    #[test]
    fn test_larger_frame_speed_is_slower() {
        let fast = JointAngles::sample(200.0, 10.0).unwrap();
        let slow = JointAngles::sample(200.0, 20.0).unwrap();
        // 20 units into the stride versus 10 units.
        assert_eq!(fast.right_arm, 25.0);
        assert_eq!(slow.right_arm, 35.0);
    }

    #[test]
    fn test_rejects_negative_time() {
        assert!(matches!(
            JointAngles::sample(-1.0, 10.0),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn test_rejects_bad_frame_speed() {
        for speed in [0.0, -5.0, f32::NAN] {
            assert!(matches!(
                JointAngles::sample(100.0, speed),
                Err(Error::Config(_))
            ));
        }
    }
}
