mod image_source;
mod tree;

pub use image_source::ImageSource;
pub use tree::ImageSourceTree;
