use tracing::trace;

use crate::geometry::{Absorption, Obstacle, ObstacleShape, Surface};
use crate::math::distance_2d::projected_distance;
use crate::math::Point3;

/// Number of box faces treated as facing the source.
const BOX_FACES_VISIBLE: usize = 2;

/// A surface that reflects toward the source, with the absorption of its obstacle.
#[derive(Debug, Clone, Copy)]
pub struct Contribution<'a> {
    /// The reflecting surface.
    pub surface: &'a Surface,
    /// Absorption coefficient of the owning obstacle.
    pub absorption: Absorption,
}

/// Selects the surfaces of each obstacle that reflect toward a source.
///
/// Screens always contribute their single surface. Boxes contribute the two
/// faces whose centers lie nearest to the source in the XY plane. This is a
/// proximity heuristic; no occlusion or facing test is made, so a source
/// inside a box still gets its two nearest faces.
pub struct SelectVisibleSurfaces<'a> {
    source: Point3,
    obstacles: &'a [Obstacle],
}

impl<'a> SelectVisibleSurfaces<'a> {
    /// Creates a new `SelectVisibleSurfaces` query.
    #[must_use]
    pub fn new(source: Point3, obstacles: &'a [Obstacle]) -> Self {
        Self { source, obstacles }
    }

    /// Executes the selection, returning contributions in obstacle order.
    ///
    /// Within a box the nearer face comes first; equal distances keep the
    /// construction order of the faces.
    #[must_use]
    pub fn execute(&self) -> Vec<Contribution<'a>> {
        let mut contributions = Vec::new();
        for obstacle in self.obstacles {
            let absorption = obstacle.absorption();
            match obstacle.shape() {
                ObstacleShape::Screen(surface) => {
                    contributions.push(Contribution {
                        surface,
                        absorption,
                    });
                }
                ObstacleShape::Box(faces) => {
                    let mut by_distance: Vec<(f64, &'a Surface)> = faces
                        .iter()
                        .map(|face| (projected_distance(&self.source, face.center()), face))
                        .collect();
                    // Stable: ties keep face order.
                    by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
                    contributions.extend(by_distance.into_iter().take(BOX_FACES_VISIBLE).map(
                        |(_, surface)| Contribution {
                            surface,
                            absorption,
                        },
                    ));
                }
            }
        }
        trace!(
            x = self.source.x,
            y = self.source.y,
            count = contributions.len(),
            "selected visible surfaces"
        );
        contributions
    }
}
