pub mod coordinator;


pub use coordinator::ElevatorController;
