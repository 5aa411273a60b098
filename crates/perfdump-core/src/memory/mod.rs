mod image;
pub mod layout;
mod search;

pub use image::BinaryImage;
pub use search::find_ascii;
