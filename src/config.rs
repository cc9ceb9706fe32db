use serde::{Deserialize, Serialize};

use crate::error::{AcousticError, EcholisError, Result, SceneError};
use crate::geometry::{Absorption, Obstacle, Surface};
use crate::math::{Point2, Point3};
use crate::scene::{Scene, SoundSource};
use crate::simulation::Simulation;

/// Speed of sound in air (m/s).
pub const DEFAULT_SPEED_OF_SOUND: f64 = 340.3;

/// Standard reference sound pressure (Pa).
pub const DEFAULT_REFERENCE_PRESSURE: f64 = 2e-5;

/// Characteristic acoustic impedance of air, density times sound speed (kg/(m²·s)).
pub const DEFAULT_CHARACTERISTIC_IMPEDANCE: f64 = 429.0;

fn default_speed_of_sound() -> f64 {
    DEFAULT_SPEED_OF_SOUND
}

fn default_reference_pressure() -> f64 {
    DEFAULT_REFERENCE_PRESSURE
}

fn default_characteristic_impedance() -> f64 {
    DEFAULT_CHARACTERISTIC_IMPEDANCE
}

/// Physical constants used to turn image sources into an echogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcousticConfig {
    /// Speed of sound (m/s).
    #[serde(default = "default_speed_of_sound")]
    pub speed_of_sound: f64,
    /// Atmospheric absorption as an exponential decay rate per meter.
    #[serde(default)]
    pub atmospheric_absorption: f64,
    /// Reference sound pressure for SPL (Pa).
    #[serde(default = "default_reference_pressure")]
    pub reference_pressure: f64,
    /// Characteristic acoustic impedance of the medium (kg/(m²·s)).
    #[serde(default = "default_characteristic_impedance")]
    pub characteristic_impedance: f64,
}

impl Default for AcousticConfig {
    fn default() -> Self {
        Self {
            speed_of_sound: DEFAULT_SPEED_OF_SOUND,
            atmospheric_absorption: 0.0,
            reference_pressure: DEFAULT_REFERENCE_PRESSURE,
            characteristic_impedance: DEFAULT_CHARACTERISTIC_IMPEDANCE,
        }
    }
}

impl AcousticConfig {
    /// Sets the atmospheric absorption rate.
    #[must_use]
    pub fn with_atmospheric_absorption(mut self, rate: f64) -> Self {
        self.atmospheric_absorption = rate;
        self
    }

    /// Checks that every constant is finite and physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns `AcousticError::InvalidParameter` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("speed_of_sound", self.speed_of_sound),
            ("reference_pressure", self.reference_pressure),
            ("characteristic_impedance", self.characteristic_impedance),
        ];
        for (parameter, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(AcousticError::InvalidParameter { parameter, value }.into());
            }
        }
        if !self.atmospheric_absorption.is_finite() || self.atmospheric_absorption < 0.0 {
            return Err(AcousticError::InvalidParameter {
                parameter: "atmospheric_absorption",
                value: self.atmospheric_absorption,
            }
            .into());
        }
        Ok(())
    }
}

/// Source entry of a [`SceneConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Position `[x, y, z]` in meters.
    pub position: [f64; 3],
    /// Sound-power level in dB re 1 pW.
    pub power_level: f64,
}

/// Obstacle entry of a [`SceneConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    /// Obstacle height in meters.
    pub height: f64,
    /// Absorption coefficient in `[0, 1]`.
    pub alpha: f64,
    /// Surfaces as endpoint pairs `[[x0, y0], [x1, y1]]`; one for a screen,
    /// four for a box.
    pub surfaces: Vec<[[f64; 2]; 2]>,
}

impl ObstacleConfig {
    fn build(&self, obstacle: usize) -> Result<Obstacle> {
        let surfaces = self
            .surfaces
            .iter()
            .enumerate()
            .map(|(surface, [a, b])| {
                Surface::new(Point2::new(a[0], a[1]), Point2::new(b[0], b[1])).map_err(|err| {
                    EcholisError::from(SceneError::Surface {
                        obstacle,
                        surface,
                        source: Box::new(err),
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Absorption::new(self.alpha)
            .and_then(|alpha| Obstacle::from_surfaces(surfaces, self.height, alpha))
            .map_err(|err| {
                EcholisError::from(SceneError::Obstacle {
                    obstacle,
                    source: Box::new(err),
                })
            })
    }
}

/// A complete simulation request as supplied by a scene provider.
///
/// Plain serde data; [`SceneConfig::build`] validates it into a
/// [`Simulation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Maximum reflection order.
    pub max_order: usize,
    /// The true sound source.
    pub source: SourceConfig,
    /// Receiver position `[x, y, z]` in meters.
    pub receiver: [f64; 3],
    /// Reflecting obstacles, in evaluation order.
    pub obstacles: Vec<ObstacleConfig>,
    /// Physical constants.
    #[serde(default)]
    pub acoustics: AcousticConfig,
}

impl SceneConfig {
    /// Validates the configuration and assembles a [`Simulation`].
    ///
    /// # Errors
    ///
    /// Returns the first invalid obstacle or surface, wrapped with its index,
    /// an `AcousticError::InvalidParameter` for a bad constant, or a
    /// `SceneError` for a non-finite source or receiver.
    pub fn build(&self) -> Result<Simulation> {
        self.acoustics.validate()?;
        let obstacles = self
            .obstacles
            .iter()
            .enumerate()
            .map(|(index, obstacle)| obstacle.build(index))
            .collect::<Result<Vec<_>>>()?;

        let [sx, sy, sz] = self.source.position;
        let [rx, ry, rz] = self.receiver;
        let scene = Scene::new(
            SoundSource::new(Point3::new(sx, sy, sz), self.source.power_level),
            Point3::new(rx, ry, rz),
            obstacles,
        );
        scene.validate()?;
        Ok(Simulation::new(scene, self.max_order, self.acoustics))
    }
}
