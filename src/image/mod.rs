pub mod fixedpoint;
pub mod io;
pub mod rgb8;

pub use self::fixedpoint::{ImageFixed, PixelFixed};
pub use self::rgb8::{ImageRgb8, PixelRgb8};
