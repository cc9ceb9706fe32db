mod absorption;
mod obstacle;
mod surface;

pub use absorption::Absorption;
pub use obstacle::{Obstacle, ObstacleShape};
pub use surface::Surface;
