mod document;
mod image;
mod visualization;

pub use document::*;
pub use image::*;
pub use visualization::*;
