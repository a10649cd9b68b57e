/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/// Reasons a request is rejected by the simulation core.
///
/// The rejected part of a request never changes simulation state, so callers may discard these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("floor {floor} is outside [{min}, {max}]")]
    FloorOutOfRange { floor: Floor, min: Floor, max: Floor },
    #[error("elevator {index} does not exist ({count} elevators)")]
    ElevatorOutOfRange { index: usize, count: usize },
    #[error("no elevator can reach floor {start} (best distance {best:?})")]
    Unassignable { start: Floor, best: Option<i32> },
}
