/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{Direction, Passenger};

/// Distance reported by an elevator with nothing to do. Lower than any real estimate.
pub const IDLE_DISTANCE: i32 = -1;

/**
 * Cost estimate used to pick which elevator picks up a passenger.
 *
 * Only the ordering of the returned values matters. The controller treats
 * anything at or below -2 as unusable.
 */
pub trait DistanceEstimator {
    fn estimate(&self, elevator: &Elevator, passenger: &Passenger) -> i32;
}

/**
 * Estimate that follows the scan discipline.
 *
 * If the elevator is already heading toward the passenger the cost is the
 * straight-line distance. Otherwise it has to run out to its furthest stop
 * first and come back.
 */
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanDistance;

impl DistanceEstimator for ScanDistance {
    fn estimate(&self, elevator: &Elevator, passenger: &Passenger) -> i32 {
        if elevator.stops().is_empty() {
            return IDLE_DISTANCE;
        }

        // Passenger floors are unchecked, so work in i64 and clamp back
        let current = i64::from(elevator.current_floor());
        let start = i64::from(passenger.start());
        let furthest = i64::from(elevator.furthest_stop());

        let distance = if current > start {
            match elevator.direction() {
                Direction::Down => current - start,
                // Up to the turnaround, then back down to the passenger
                Direction::Up => 2 * furthest - current - start,
            }
        } else {
            match elevator.direction() {
                Direction::Up => start - current,
                // Down to the turnaround, then back up to the passenger
                Direction::Down => current + start - 2 * furthest,
            }
        };

        distance.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}
