//! Per-session state edited between frames.
//!
//! Everything that survives from one frame to the next lives in
//! [`SceneConfig`]. The input handler mutates it through [`ConfigAction`]s
//! between frames; the frame builder only ever reads it.

use glam::Vec3;
use walker_core::{Error, Result};

/// Default divisor applied to elapsed milliseconds.
pub const DEFAULT_FRAME_SPEED: f32 = 10.0;
/// Step used when changing the frame speed.
pub const FRAME_SPEED_STEP: f32 = 5.0;
/// Default light position in eye space.
pub const DEFAULT_LIGHT_POSITION: Vec3 = Vec3::new(-0.5773, 0.5773, 10.0);
/// Step used when editing a color channel.
pub const COLOR_STEP: f32 = 0.02;

/// Placement of the whole figure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Trunk position.
    pub position: Vec3,
    /// Orientation in degrees about the X, Y and Z axes.
    pub orientation: Vec3,
}

/// A color channel of the base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

/// Parameters the user can change while the figure walks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub pose: Pose,
    /// Divisor on elapsed time; larger is slower. Always positive.
    pub frame_speed: f32,
    pub light_position: Vec3,
    /// RGB, each channel in `[0, 1]`.
    pub base_color: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            pose: Pose::default(),
            frame_speed: DEFAULT_FRAME_SPEED,
            light_position: DEFAULT_LIGHT_POSITION,
            base_color: Vec3::ONE,
        }
    }
}

impl SceneConfig {
    /// Check the invariants the frame builder relies on.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the frame speed is not positive, or if
    /// any value is not finite or a color channel is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !self.frame_speed.is_finite() || self.frame_speed <= 0.0 {
            return Err(Error::Config(format!(
                "frame speed must be positive, got {}",
                self.frame_speed
            )));
        }
        if !self.pose.position.is_finite() || !self.pose.orientation.is_finite() {
            return Err(Error::Config(format!("pose is not finite: {:?}", self.pose)));
        }
        if !self.light_position.is_finite() {
            return Err(Error::Config(format!(
                "light position is not finite: {}",
                self.light_position
            )));
        }
        let color = self.base_color;
        if !color.is_finite() || color.min_element() < 0.0 || color.max_element() > 1.0 {
            return Err(Error::Config(format!(
                "base color channels must be in [0, 1], got {color}"
            )));
        }
        Ok(())
    }

    /// Apply one edit.
    pub fn apply(&mut self, action: ConfigAction) {
        match action {
            ConfigAction::Move(delta) => self.pose.position += delta,
            ConfigAction::Rotate(delta) => self.pose.orientation += delta,
            ConfigAction::ResetPose => self.pose = Pose::default(),
            ConfigAction::AdjustColor(channel, delta) => {
                let value = match channel {
                    ColorChannel::Red => &mut self.base_color.x,
                    ColorChannel::Green => &mut self.base_color.y,
                    ColorChannel::Blue => &mut self.base_color.z,
                };
                *value = (*value + delta).clamp(0.0, 1.0);
            }
            ConfigAction::DarkenAndResetLight => {
                self.base_color = Vec3::ZERO;
                self.light_position = DEFAULT_LIGHT_POSITION;
            }
            ConfigAction::Whiten => self.base_color = Vec3::ONE,
            ConfigAction::Slower => self.frame_speed += FRAME_SPEED_STEP,
            ConfigAction::Faster => {
                if self.frame_speed > FRAME_SPEED_STEP {
                    self.frame_speed -= FRAME_SPEED_STEP;
                }
            }
            ConfigAction::MoveLight(delta) => self.light_position += delta,
        }
        tracing::trace!(?action, "Config updated");
    }
}

/// A single edit to [`SceneConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigAction {
    /// Translate the figure.
    Move(Vec3),
    /// Rotate the figure, in degrees per axis.
    Rotate(Vec3),
    /// Put the figure back at the origin, facing forward.
    ResetPose,
    /// Nudge one color channel, clamped to `[0, 1]`.
    AdjustColor(ColorChannel, f32),
    /// Black base color and default light position.
    DarkenAndResetLight,
    /// White base color.
    Whiten,
    /// Increase the frame speed divisor.
    Slower,
    /// Decrease the frame speed divisor, never to zero.
    Faster,
    /// Translate the light.
    MoveLight(Vec3),
}
