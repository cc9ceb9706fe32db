pub mod acoustics;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ism;
pub mod math;
pub mod operations;
pub mod scene;
pub mod simulation;

pub use error::{EcholisError, Result};
pub use simulation::{Simulation, SimulationResult};
