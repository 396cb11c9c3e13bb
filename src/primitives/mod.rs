//! Points and polygonal curves.

mod curve;
mod point;
mod point1;
mod point2;

pub use curve::Curve;
pub use point::CurvePoint;
pub use point1::Point1;
pub use point2::Point2;
