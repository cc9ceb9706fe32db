use tracing::info;

use crate::acoustics::Echogram;
use crate::config::AcousticConfig;
use crate::error::Result;
use crate::ism::ImageSourceTree;
use crate::operations::{BuildImageSources, EvaluateEchogram};
use crate::scene::Scene;

/// The image-source tree and the echogram it produces.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Image sources grouped by order.
    pub tree: ImageSourceTree,
    /// One arrival per image source, in tree order.
    pub echogram: Echogram,
}

/// A complete early-reflection run: scene, maximum order and constants.
#[derive(Debug, Clone)]
pub struct Simulation {
    scene: Scene,
    max_order: usize,
    acoustics: AcousticConfig,
}

impl Simulation {
    /// Creates a new simulation.
    #[must_use]
    pub fn new(scene: Scene, max_order: usize, acoustics: AcousticConfig) -> Self {
        Self {
            scene,
            max_order,
            acoustics,
        }
    }

    /// Returns the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the maximum reflection order.
    #[must_use]
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Returns the physical constants.
    #[must_use]
    pub fn acoustics(&self) -> &AcousticConfig {
        &self.acoustics
    }

    /// Builds the image-source tree and evaluates it at the receiver.
    ///
    /// # Errors
    ///
    /// Returns an error if a constant is invalid, the source or receiver is
    /// not finite, a reflection fails, or an image source coincides with the
    /// receiver.
    pub fn run(&self) -> Result<SimulationResult> {
        self.acoustics.validate()?;
        self.scene.validate()?;

        let source = self.scene.source();
        let tree = BuildImageSources::new(source.position, self.scene.obstacles(), self.max_order)
            .execute()?;
        let echogram = EvaluateEchogram::new(*self.scene.receiver(), source, &self.acoustics)
            .execute(tree.iter())?;

        info!(
            obstacles = self.scene.obstacles().len(),
            max_order = self.max_order,
            sources = tree.len(),
            "image-source simulation complete"
        );
        Ok(SimulationResult { tree, echogram })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{AcousticError, EcholisError, SceneError};
    use crate::geometry::{Absorption, Obstacle, Surface};
    use crate::math::{Point2, Point3};
    use crate::scene::SoundSource;
    use approx::assert_relative_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn surf(ax: f64, ay: f64, bx: f64, by: f64) -> Surface {
        Surface::new(Point2::new(ax, ay), Point2::new(bx, by)).unwrap()
    }

    fn courtyard() -> Vec<Obstacle> {
        vec![
            Obstacle::boxed(
                [
                    surf(27.5, 50.0, 42.5, 50.0),
                    surf(27.5, 57.5, 42.5, 57.5),
                    surf(27.5, 50.0, 27.5, 57.5),
                    surf(42.5, 57.5, 42.5, 50.0),
                ],
                6.0,
                Absorption::new(0.2).unwrap(),
            )
            .unwrap(),
            Obstacle::boxed(
                [
                    surf(5.0, 22.5, 12.5, 15.0),
                    surf(12.5, 15.0, 22.5, 25.0),
                    surf(22.5, 25.0, 15.0, 37.5),
                    surf(15.0, 37.5, 5.0, 22.5),
                ],
                8.0,
                Absorption::new(0.3).unwrap(),
            )
            .unwrap(),
            Obstacle::screen(surf(67.5, 5.0, 75.0, 45.0), 7.0, Absorption::new(0.1).unwrap())
                .unwrap(),
        ]
    }

    fn courtyard_simulation(max_order: usize) -> Simulation {
        let scene = Scene::new(
            SoundSource::new(Point3::new(42.5, 7.5, 4.5), 100.0),
            Point3::new(2.5, 47.5, 4.0),
            courtyard(),
        );
        Simulation::new(scene, max_order, AcousticConfig::default())
    }

    #[test]
    fn courtyard_second_order() {
        init_tracing();
        let result = courtyard_simulation(2).run().unwrap();

        assert_eq!(result.tree.len(), 31);
        assert_eq!(result.echogram.len(), 31);
        let sizes: Vec<usize> = result.tree.generations().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 5, 25]);
        for s in result.tree.iter() {
            assert_eq!(s.alphas().len(), s.order());
        }

        let expected = ((42.5f64 - 2.5).powi(2) + (7.5f64 - 47.5).powi(2) + (4.5f64 - 4.0).powi(2)).sqrt();
        let direct = result.echogram.direct().unwrap();
        assert_relative_eq!(direct.distance, expected, epsilon = 1e-12);
        assert_relative_eq!(direct.time, expected / 340.3, epsilon = 1e-12);
        assert_eq!(result.echogram.arrivals()[0].order, 0);
    }

    #[test]
    fn courtyard_first_order_images() {
        let result = courtyard_simulation(1).run().unwrap();
        let first = result.tree.generation(1).unwrap();
        assert_eq!(first.len(), 5);

        // Square box: bottom face (y = 50) then right face (x = 42.5), which
        // passes through the source and maps it onto itself.
        assert_eq!(*first[0].position(), Point3::new(42.5, 92.5, 4.5));
        assert_eq!(*first[1].position(), Point3::new(42.5, 7.5, 4.5));
        assert_relative_eq!(first[0].alpha_factor(), 0.8);

        // Screen image lies on the far side of the screen line.
        let screen = &result.tree.generation(1).unwrap()[4];
        let line = *courtyard()[2].surfaces()[0].line();
        let side = |p: &Point3| line.residual(&Point2::new(p.x, p.y)).signum();
        assert!(side(screen.position()) != side(&Point3::new(42.5, 7.5, 4.5)));
        assert_relative_eq!(screen.alpha_factor(), 0.9);
        assert!(result.tree.iter().all(|s| s.position().z == 4.5));
    }

    #[test]
    fn order_zero_is_direct_sound_only() {
        let result = courtyard_simulation(0).run().unwrap();
        assert_eq!(result.echogram.len(), 1);
        assert_eq!(result.echogram.direct().map(|a| a.alpha_factor), Some(1.0));
    }

    #[test]
    fn echogram_follows_tree_order() {
        let result = courtyard_simulation(2).run().unwrap();
        for (arrival, source) in result.echogram.iter().zip(result.tree.iter()) {
            assert_eq!(arrival.order, source.order());
            assert_relative_eq!(arrival.alpha_factor, source.alpha_factor());
        }
        let sorted = result.echogram.sorted_by_time();
        assert!(sorted.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn receiver_on_source_is_rejected() {
        let scene = Scene::new(
            SoundSource::new(Point3::new(1.0, 1.0, 1.0), 100.0),
            Point3::new(1.0, 1.0, 1.0),
            courtyard(),
        );
        let err = Simulation::new(scene, 1, AcousticConfig::default())
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            EcholisError::Acoustic(AcousticError::CoincidentSourceReceiver { index: 0, order: 0 })
        ));
    }

    #[test]
    fn invalid_constants_are_rejected() {
        let mut acoustics = AcousticConfig::default();
        acoustics.speed_of_sound = 0.0;
        let sim = Simulation::new(courtyard_simulation(1).scene().clone(), 1, acoustics);
        assert!(matches!(
            sim.run().unwrap_err(),
            EcholisError::Acoustic(AcousticError::InvalidParameter {
                parameter: "speed_of_sound",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_receiver_is_rejected() {
        let scene = Scene::new(
            SoundSource::new(Point3::new(42.5, 7.5, 4.5), f64::NAN),
            Point3::new(f64::NAN, 47.5, 4.0),
            courtyard(),
        );
        let err = Simulation::new(scene, 1, AcousticConfig::default())
            .run()
            .unwrap_err();
        assert!(matches!(err, EcholisError::Scene(SceneError::NonFinitePowerLevel { .. })));

        let scene = Scene::new(
            SoundSource::new(Point3::new(42.5, 7.5, 4.5), 100.0),
            Point3::new(f64::NAN, 47.5, 4.0),
            courtyard(),
        );
        let err = Simulation::new(scene, 1, AcousticConfig::default())
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            EcholisError::Scene(SceneError::NonFinitePosition { what: "receiver" })
        ));
    }
}
