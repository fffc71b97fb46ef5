#[cfg(feature = "normal")]
pub mod circle;
#[cfg(feature = "normal")]
pub mod ellipse;
pub mod nested;
pub mod sized_nested;

pub use nested::{Line, Polygon};
pub use sized_nested::SizedLineString;
