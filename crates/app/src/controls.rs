//! Keyboard bindings for editing the scene between frames.
//!
//! Lower-case keys step one way, shifted keys step back:
//!
//! | key     | effect                                  |
//! |---------|-----------------------------------------|
//! | W A S D | move the figure on the ground plane     |
//! | X Y Z   | rotate the view about that axis         |
//! | V       | reset position and orientation          |
//! | R G B   | raise (shift: lower) a color channel    |
//! | C       | black and default light (shift: white)  |
//! | F       | slower walk (shift: faster)             |
//! | L I K   | move the light along X, Y, Z            |

use glam::Vec3;
use walker_platform::KeyCode;
use walker_scene::config::{COLOR_STEP, ColorChannel, ConfigAction};

const MOVE_STEP: f32 = 0.75;
const ROTATE_STEP: f32 = 5.0;
const LIGHT_STEP: f32 = 2.0;

/// Map a key press to a config edit.
pub fn action_for(key: KeyCode, shift: bool) -> Option<ConfigAction> {
    let sign = if shift { -1.0 } else { 1.0 };
    let action = match key {
        KeyCode::KeyW => ConfigAction::Move(Vec3::new(0.0, 0.0, MOVE_STEP)),
        KeyCode::KeyS => ConfigAction::Move(Vec3::new(0.0, 0.0, -MOVE_STEP)),
        KeyCode::KeyA => ConfigAction::Move(Vec3::new(-MOVE_STEP, 0.0, 0.0)),
        KeyCode::KeyD => ConfigAction::Move(Vec3::new(MOVE_STEP, 0.0, 0.0)),

        KeyCode::KeyX => ConfigAction::Rotate(Vec3::X * ROTATE_STEP * sign),
        KeyCode::KeyY => ConfigAction::Rotate(Vec3::Y * ROTATE_STEP * sign),
        KeyCode::KeyZ => ConfigAction::Rotate(Vec3::Z * ROTATE_STEP * sign),
        KeyCode::KeyV => ConfigAction::ResetPose,

        KeyCode::KeyR => ConfigAction::AdjustColor(ColorChannel::Red, COLOR_STEP * sign),
        KeyCode::KeyG => ConfigAction::AdjustColor(ColorChannel::Green, COLOR_STEP * sign),
        KeyCode::KeyB => ConfigAction::AdjustColor(ColorChannel::Blue, COLOR_STEP * sign),
        KeyCode::KeyC if shift => ConfigAction::Whiten,
        KeyCode::KeyC => ConfigAction::DarkenAndResetLight,

        KeyCode::KeyF if shift => ConfigAction::Faster,
        KeyCode::KeyF => ConfigAction::Slower,

        KeyCode::KeyL => ConfigAction::MoveLight(Vec3::X * LIGHT_STEP * sign),
        KeyCode::KeyI => ConfigAction::MoveLight(Vec3::Y * LIGHT_STEP * sign),
        KeyCode::KeyK => ConfigAction::MoveLight(Vec3::Z * LIGHT_STEP * sign),
        _ => return None,
    };
    Some(action)
}
