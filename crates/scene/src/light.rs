//! Shading parameters shared by every body part.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

use crate::config::SceneConfig;

/// Per-frame shading uniforms.
///
/// # Memory Layout
///
/// - Offset 0: light position (16 bytes, w = 0)
/// - Offset 16: base color (16 bytes, a = 1)
/// - Total size: 32 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ShadingUniforms {
    /// Light position in eye space
    pub light_position: Vec4,
    /// Base color of the figure
    pub color: Vec4,
}

impl ShadingUniforms {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Shading for the current config.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            light_position: config.light_position.extend(0.0),
            color: config.base_color.extend(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigAction;

    #[test]
    fn test_shading_size() {
        assert_eq!(ShadingUniforms::SIZE, 32);
    }

    #[test]
    fn test_from_default_config() {
        let shading = ShadingUniforms::from_config(&SceneConfig::default());
        assert_eq!(shading.light_position, Vec4::new(-0.5773, 0.5773, 10.0, 0.0));
        assert_eq!(shading.color, Vec4::ONE);
    }

    #[test]
    fn test_follows_config_edits() {
        let mut config = SceneConfig::default();
        config.apply(ConfigAction::DarkenAndResetLight);
        let shading = ShadingUniforms::from_config(&config);
        assert_eq!(shading.color, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(bytemuck::bytes_of(&shading).len(), ShadingUniforms::SIZE);
    }
}
