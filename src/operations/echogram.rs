use std::f64::consts::PI;

use tracing::debug;

use crate::acoustics::{Arrival, Echogram};
use crate::config::AcousticConfig;
use crate::error::{AcousticError, Result};
use crate::ism::ImageSource;
use crate::math::{Point3, TOLERANCE};
use crate::scene::SoundSource;

/// Converts image sources into arrivals at a receiver.
///
/// Each source radiates the power of the true source, spread over a sphere,
/// damped by air absorption and by the reflections along its path:
/// `I = alpha_factor * exp(-m * d) * W / (4 * pi * d^2)`,
/// `p = sqrt(2 * R * I)`, `SPL = 20 * log10(p / p_ref)`.
pub struct EvaluateEchogram<'a> {
    receiver: Point3,
    power_watts: f64,
    config: &'a AcousticConfig,
}

impl<'a> EvaluateEchogram<'a> {
    /// Creates a new `EvaluateEchogram` operation for the power of `source`.
    #[must_use]
    pub fn new(receiver: Point3, source: &SoundSource, config: &'a AcousticConfig) -> Self {
        Self {
            receiver,
            power_watts: source.power_watts(),
            config,
        }
    }

    /// Executes the evaluation, one arrival per source in input order.
    ///
    /// A path with a fully absorbing reflection has zero intensity and an SPL
    /// of negative infinity.
    ///
    /// # Errors
    ///
    /// Returns `AcousticError::CoincidentSourceReceiver` if a source sits on
    /// the receiver.
    pub fn execute<'s, I>(&self, sources: I) -> Result<Echogram>
    where
        I: IntoIterator<Item = &'s ImageSource>,
    {
        let arrivals = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| self.arrival(index, source))
            .collect::<Result<Vec<_>>>()?;
        debug!(arrivals = arrivals.len(), "evaluated echogram");
        Ok(Echogram::new(arrivals))
    }

    fn arrival(&self, index: usize, source: &ImageSource) -> Result<Arrival> {
        let distance = source.distance_to(&self.receiver);
        if distance < TOLERANCE {
            return Err(AcousticError::CoincidentSourceReceiver {
                index,
                order: source.order(),
            }
            .into());
        }

        let alpha_factor = source.alpha_factor();
        let intensity = alpha_factor
            * (-self.config.atmospheric_absorption * distance).exp()
            * self.power_watts
            / (4.0 * PI * distance.powi(2));
        let pressure = (intensity * 2.0 * self.config.characteristic_impedance).sqrt();

        Ok(Arrival {
            time: distance / self.config.speed_of_sound,
            spl: 20.0 * (pressure / self.config.reference_pressure).log10(),
            order: source.order(),
            distance,
            alpha_factor,
        })
    }
}
