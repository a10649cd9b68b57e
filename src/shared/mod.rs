pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::ControllerError;
pub use structs::Direction;
pub use structs::Floor;
pub use structs::Passenger;
pub use structs::SystemStatus;
