use crate::geometry::Absorption;
use crate::math::distance_2d::spatial_distance;
use crate::math::Point3;

/// A real or virtual sound source produced by the image-source method.
///
/// The order equals the number of reflections along the path and is the
/// length of the absorption history.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    position: Point3,
    alphas: Vec<Absorption>,
}

impl ImageSource {
    /// Creates the order-0 source at the true source position.
    #[must_use]
    pub fn direct(position: Point3) -> Self {
        Self {
            position,
            alphas: Vec::new(),
        }
    }

    /// Creates the next-order image at `position`, reflected off a surface
    /// with absorption `alpha`.
    #[must_use]
    pub fn reflected(&self, position: Point3, alpha: Absorption) -> Self {
        let mut alphas = Vec::with_capacity(self.alphas.len() + 1);
        alphas.extend_from_slice(&self.alphas);
        alphas.push(alpha);
        Self { position, alphas }
    }

    /// Returns the (virtual) source position.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Returns the reflection order.
    #[must_use]
    pub fn order(&self) -> usize {
        self.alphas.len()
    }

    /// Returns the absorption coefficients along the path, in reflection order.
    #[must_use]
    pub fn alphas(&self) -> &[Absorption] {
        &self.alphas
    }

    /// Returns the combined reflection attenuation `prod(1 - alpha_i)`.
    #[must_use]
    pub fn alpha_factor(&self) -> f64 {
        self.alphas
            .iter()
            .map(|alpha| alpha.reflection_factor())
            .product()
    }

    /// Returns the straight-line distance to `receiver`.
    #[must_use]
    pub fn distance_to(&self, receiver: &Point3) -> f64 {
        spatial_distance(&self.position, receiver)
    }
}
