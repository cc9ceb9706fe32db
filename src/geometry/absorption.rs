use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Fraction of incident energy a surface absorbs on reflection, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Absorption(f64);

impl Absorption {
    /// A perfectly reflecting surface.
    pub const RIGID: Self = Self(0.0);

    /// Creates a validated absorption coefficient.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::InvalidAbsorptionCoefficient` if `alpha` is not
    /// finite or lies outside `[0, 1]`.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(SceneError::InvalidAbsorptionCoefficient { value: alpha }.into());
        }
        Ok(Self(alpha))
    }

    /// Returns the absorption coefficient `alpha`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the reflected energy fraction `1 - alpha`.
    #[must_use]
    pub fn reflection_factor(self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for Absorption {
    type Error = crate::error::EcholisError;

    fn try_from(alpha: f64) -> Result<Self> {
        Self::new(alpha)
    }
}

impl From<Absorption> for f64 {
    fn from(alpha: Absorption) -> Self {
        alpha.0
    }
}
