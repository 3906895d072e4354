use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::physics::CollisionLayers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStateConfig {
    /// Full size of the ground-check box.
    pub ground_check_size: Vec3,
    /// Box center relative to the character body position.
    pub ground_check_offset: Vec3,
    pub ground_layers: CollisionLayers,

    /// Seconds movement stays locked after an attack finishes.
    pub stunned_after_swing: f32,

    pub coyote_time: f32,
}

impl Default for PlayerStateConfig {
    fn default() -> Self {
        Self {
            ground_check_size: Vec3::new(0.5, 0.1, 0.5),
            ground_check_offset: Vec3::new(0.0, -0.9, 0.0),
            ground_layers: CollisionLayers::GROUND,

            stunned_after_swing: 0.35,

            coyote_time: 0.1,
        }
    }
}

impl PlayerStateConfig {
    pub fn validate(&self) -> Result<(), SetupError> {
        let size = self.ground_check_size;
        if !size.is_finite() || size.min_element() <= 0.0 {
            return Err(SetupError::InvalidGroundCheckSize(size));
        }

        if !self.ground_check_offset.is_finite() {
            return Err(SetupError::InvalidGroundCheckOffset(self.ground_check_offset));
        }

        if self.ground_layers.is_empty() {
            return Err(SetupError::EmptyGroundLayers);
        }

        check_duration("stunned_after_swing", self.stunned_after_swing)?;
        check_duration("coyote_time", self.coyote_time)?;

        Ok(())
    }
}

fn check_duration(name: &'static str, value: f32) -> Result<(), SetupError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidDuration { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PlayerStateConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_flat_ground_check() {
        let config = PlayerStateConfig {
            ground_check_size: Vec3::new(0.5, 0.0, 0.5),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(SetupError::InvalidGroundCheckSize(Vec3::new(0.5, 0.0, 0.5)))
        );
    }

    #[test]
    fn rejects_nan_offset() {
        let config = PlayerStateConfig {
            ground_check_offset: Vec3::new(0.0, f32::NAN, 0.0),
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(SetupError::InvalidGroundCheckOffset(_))
        ));
    }

    #[test]
    fn rejects_empty_layer_mask() {
        let config = PlayerStateConfig {
            ground_layers: CollisionLayers::empty(),
            ..Default::default()
        };

        assert_eq!(config.validate(), Err(SetupError::EmptyGroundLayers));
    }

    #[test]
    fn rejects_negative_recovery() {
        let config = PlayerStateConfig {
            stunned_after_swing: -1.0,
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(SetupError::InvalidDuration {
                name: "stunned_after_swing",
                value: -1.0,
            })
        );
    }
}
