mod echogram;
mod image_sources;
mod reflect;
mod visibility;

pub use echogram::EvaluateEchogram;
pub use image_sources::BuildImageSources;
pub use reflect::ReflectPoint;
pub use visibility::{Contribution, SelectVisibleSurfaces};
