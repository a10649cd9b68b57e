/***************************************/
/*              Modules                */
/***************************************/
pub mod config;
pub mod coordinator;
pub mod elevator;
pub mod runner;
pub mod shared;

/***************************************/
/*             Public API              */
/***************************************/
pub use coordinator::ElevatorController;
pub use elevator::{DistanceEstimator, Elevator, ScanDistance};
pub use shared::{ControllerError, Direction, Floor, Passenger, SystemStatus};
