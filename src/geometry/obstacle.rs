use crate::error::{Result, SceneError};

use super::{Absorption, Surface};

/// The reflecting shape of an obstacle.
#[derive(Debug, Clone, PartialEq)]
pub enum ObstacleShape {
    /// A single one-sided wall, always facing the source.
    Screen(Surface),
    /// A closed four-sided footprint; two faces reflect toward any source.
    Box([Surface; 4]),
}

impl ObstacleShape {
    /// Returns the surfaces of this shape in construction order.
    #[must_use]
    pub fn surfaces(&self) -> &[Surface] {
        match self {
            Self::Screen(surface) => std::slice::from_ref(surface),
            Self::Box(surfaces) => surfaces,
        }
    }
}

/// A reflecting structure with a shape, a height and an absorption coefficient.
///
/// The height is carried for the scene description; reflections are computed
/// in the horizontal plane only.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    shape: ObstacleShape,
    height: f64,
    absorption: Absorption,
}

impl Obstacle {
    /// Creates a screen obstacle from a single surface.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::InvalidHeight` if `height` is negative or not finite.
    pub fn screen(surface: Surface, height: f64, absorption: Absorption) -> Result<Self> {
        Self::with_shape(ObstacleShape::Screen(surface), height, absorption)
    }

    /// Creates a box obstacle from four surfaces.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::InvalidHeight` if `height` is negative or not finite.
    pub fn boxed(surfaces: [Surface; 4], height: f64, absorption: Absorption) -> Result<Self> {
        Self::with_shape(ObstacleShape::Box(surfaces), height, absorption)
    }

    /// Creates an obstacle from a list of surfaces, classifying it by count.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::InvalidObstacleConfiguration` unless exactly one
    /// or exactly four surfaces are given, and `SceneError::InvalidHeight` for
    /// a bad height.
    pub fn from_surfaces(mut surfaces: Vec<Surface>, height: f64, absorption: Absorption) -> Result<Self> {
        let count = surfaces.len();
        let shape = match count {
            1 => surfaces.pop().map(ObstacleShape::Screen),
            4 => <[Surface; 4]>::try_from(surfaces).ok().map(ObstacleShape::Box),
            _ => None,
        }
        .ok_or(SceneError::InvalidObstacleConfiguration { surfaces: count })?;
        Self::with_shape(shape, height, absorption)
    }

    fn with_shape(shape: ObstacleShape, height: f64, absorption: Absorption) -> Result<Self> {
        if !height.is_finite() || height < 0.0 {
            return Err(SceneError::InvalidHeight { value: height }.into());
        }
        Ok(Self {
            shape,
            height,
            absorption,
        })
    }

    /// Returns the shape of the obstacle.
    #[must_use]
    pub fn shape(&self) -> &ObstacleShape {
        &self.shape
    }

    /// Returns the surfaces of the obstacle.
    #[must_use]
    pub fn surfaces(&self) -> &[Surface] {
        self.shape.surfaces()
    }

    /// Returns the obstacle height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the absorption coefficient shared by all surfaces.
    #[must_use]
    pub fn absorption(&self) -> Absorption {
        self.absorption
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EcholisError;
    use crate::math::Point2;

    fn surf(ax: f64, ay: f64, bx: f64, by: f64) -> Surface {
        Surface::new(Point2::new(ax, ay), Point2::new(bx, by)).unwrap()
    }

    fn square() -> Vec<Surface> {
        vec![
            surf(0.0, 0.0, 1.0, 0.0),
            surf(1.0, 0.0, 1.0, 1.0),
            surf(1.0, 1.0, 0.0, 1.0),
            surf(0.0, 1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn one_surface_is_screen() {
        let alpha = Absorption::new(0.1).unwrap();
        let obs = Obstacle::from_surfaces(vec![surf(67.5, 5.0, 75.0, 45.0)], 7.0, alpha).unwrap();
        assert!(matches!(obs.shape(), ObstacleShape::Screen(_)));
        assert_eq!(obs.surfaces().len(), 1);
        assert_eq!(obs.height(), 7.0);
        assert_eq!(obs.absorption(), alpha);
    }

    #[test]
    fn four_surfaces_is_box_in_order() {
        let surfaces = square();
        let obs = Obstacle::from_surfaces(surfaces.clone(), 6.0, Absorption::RIGID).unwrap();
        assert!(matches!(obs.shape(), ObstacleShape::Box(_)));
        assert_eq!(obs.surfaces(), surfaces.as_slice());
    }

    #[test]
    fn other_counts_rejected() {
        for n in [0, 2, 3, 5] {
            let surfaces: Vec<Surface> = square().into_iter().cycle().take(n).collect();
            let err = Obstacle::from_surfaces(surfaces, 1.0, Absorption::RIGID).unwrap_err();
            assert!(
                matches!(
                    err,
                    EcholisError::Scene(SceneError::InvalidObstacleConfiguration { surfaces }) if surfaces == n
                ),
                "n={n}"
            );
        }
    }

    #[test]
    fn negative_height_rejected() {
        let err = Obstacle::screen(surf(0.0, 0.0, 1.0, 0.0), -1.0, Absorption::RIGID).unwrap_err();
        assert!(matches!(
            err,
            EcholisError::Scene(SceneError::InvalidHeight { .. })
        ));
    }
}
