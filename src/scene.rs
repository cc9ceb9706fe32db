use crate::error::{Result, SceneError};
use crate::geometry::Obstacle;
use crate::math::Point3;

/// A point sound source with its sound-power level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundSource {
    /// Source position.
    pub position: Point3,
    /// Sound-power level in dB re 1 pW.
    pub power_level: f64,
}

impl SoundSource {
    /// Creates a new sound source.
    #[must_use]
    pub fn new(position: Point3, power_level: f64) -> Self {
        Self {
            position,
            power_level,
        }
    }

    /// Returns the radiated sound power in watts, `10^(L / 10) * 1e-12`.
    #[must_use]
    pub fn power_watts(&self) -> f64 {
        10f64.powf(self.power_level / 10.0) * 1e-12
    }
}

/// The reflecting environment together with source and receiver positions.
#[derive(Debug, Clone)]
pub struct Scene {
    source: SoundSource,
    receiver: Point3,
    obstacles: Vec<Obstacle>,
}

impl Scene {
    /// Creates a new scene. Obstacles are expected to be validated already.
    #[must_use]
    pub fn new(source: SoundSource, receiver: Point3, obstacles: Vec<Obstacle>) -> Self {
        Self {
            source,
            receiver,
            obstacles,
        }
    }

    /// Returns the true sound source.
    #[must_use]
    pub fn source(&self) -> &SoundSource {
        &self.source
    }

    /// Returns the receiver position.
    #[must_use]
    pub fn receiver(&self) -> &Point3 {
        &self.receiver
    }

    /// Returns the obstacles in scene order.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Checks that source, power level and receiver are finite.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::NonFinitePosition` naming the offending point, or
    /// `SceneError::NonFinitePowerLevel`.
    pub fn validate(&self) -> Result<()> {
        if !self.source.position.iter().all(|v| v.is_finite()) {
            return Err(SceneError::NonFinitePosition { what: "source" }.into());
        }
        if !self.source.power_level.is_finite() {
            return Err(SceneError::NonFinitePowerLevel {
                value: self.source.power_level,
            }
            .into());
        }
        if !self.receiver.iter().all(|v| v.is_finite()) {
            return Err(SceneError::NonFinitePosition { what: "receiver" }.into());
        }
        Ok(())
    }
}
