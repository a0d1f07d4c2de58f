pub mod basis;
pub mod knots;
pub mod spline;
