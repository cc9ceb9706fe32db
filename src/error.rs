use thiserror::Error;

/// Top-level error type for the echolis image-source engine.
#[derive(Debug, Error)]
pub enum EcholisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Acoustic(#[from] AcousticError),
}

/// Errors related to geometric construction and computation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate surface: endpoints coincide or are not finite")]
    DegenerateSurface,
}

/// Errors raised while assembling a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid obstacle configuration: {surfaces} surfaces (expected 1 for a screen or 4 for a box)")]
    InvalidObstacleConfiguration { surfaces: usize },

    #[error("absorption coefficient {value} is outside [0, 1]")]
    InvalidAbsorptionCoefficient { value: f64 },

    #[error("obstacle height {value} must be finite and non-negative")]
    InvalidHeight { value: f64 },

    #[error("{what} position has a non-finite coordinate")]
    NonFinitePosition { what: &'static str },

    #[error("source power level {value} dB must be finite")]
    NonFinitePowerLevel { value: f64 },

    #[error("obstacle {obstacle}, surface {surface}: {source}")]
    Surface {
        obstacle: usize,
        surface: usize,
        source: Box<EcholisError>,
    },

    #[error("obstacle {obstacle}: {source}")]
    Obstacle {
        obstacle: usize,
        source: Box<EcholisError>,
    },
}

/// Errors related to acoustic evaluation.
#[derive(Debug, Error)]
pub enum AcousticError {
    #[error("image source {index} (order {order}) coincides with the receiver")]
    CoincidentSourceReceiver { index: usize, order: usize },

    #[error("invalid acoustic parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`EcholisError`].
pub type Result<T> = std::result::Result<T, EcholisError>;
