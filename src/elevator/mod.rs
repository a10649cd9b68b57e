pub mod distance;
pub mod elevator;
pub mod stops;


pub use distance::DistanceEstimator;
pub use distance::ScanDistance;
pub use elevator::Elevator;
pub use stops::order_stops;
