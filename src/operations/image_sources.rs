use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::geometry::Obstacle;
use crate::ism::{ImageSource, ImageSourceTree};
use crate::math::Point3;

use super::reflect::ReflectPoint;
use super::visibility::SelectVisibleSurfaces;

/// Builds the image-source tree of a scene up to a maximum reflection order.
///
/// Generation `n + 1` is produced by mirroring every source of generation `n`
/// across each surface the visibility selector picks for it. Coincident
/// images are kept; nothing is merged.
pub struct BuildImageSources<'a> {
    source: Point3,
    obstacles: &'a [Obstacle],
    max_order: usize,
}

impl<'a> BuildImageSources<'a> {
    /// Creates a new `BuildImageSources` operation.
    #[must_use]
    pub fn new(source: Point3, obstacles: &'a [Obstacle], max_order: usize) -> Self {
        Self {
            source,
            obstacles,
            max_order,
        }
    }

    /// Executes the build, returning `max_order + 1` generations.
    ///
    /// Sources within a generation are expanded in parallel; the output keeps
    /// parent order, then contribution order within each parent.
    ///
    /// # Errors
    ///
    /// Returns an error if a reflection fails on a degenerate surface.
    pub fn execute(&self) -> Result<ImageSourceTree> {
        let mut generations = Vec::with_capacity(self.max_order + 1);
        generations.push(vec![ImageSource::direct(self.source)]);

        for order in 1..=self.max_order {
            let children: Vec<Vec<ImageSource>> = generations[order - 1]
                .par_iter()
                .map(|parent| self.expand(parent))
                .collect::<Result<_>>()?;
            let next: Vec<ImageSource> = children.into_iter().flatten().collect();
            debug!(order, sources = next.len(), "built image-source generation");
            generations.push(next);
        }

        Ok(ImageSourceTree::new(generations))
    }

    fn expand(&self, parent: &ImageSource) -> Result<Vec<ImageSource>> {
        SelectVisibleSurfaces::new(*parent.position(), self.obstacles)
            .execute()
            .into_iter()
            .map(|contribution| -> Result<ImageSource> {
                let position = ReflectPoint::new(*parent.position(), contribution.surface).execute()?;
                Ok(parent.reflected(position, contribution.absorption))
            })
            .collect()
    }
}
