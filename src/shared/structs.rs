/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Floor number. Signed since passenger requests are not range checked when they are made.
pub type Floor = i32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Signed unit step, +1 for up and -1 for down.
    pub fn delta(&self) -> Floor {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn reversed(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/**
 * A request to travel from one floor to another.
 *
 * # Fields
 * - `start`:       Floor the passenger is picked up at.
 * - `dest`:        Floor the passenger wants to go to.
 * - `direction`:   Up if `dest` is above `start`, otherwise down.
 */
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    start: Floor,
    dest: Floor,
    direction: Direction,
}

impl Passenger {
    pub fn new(start: Floor, dest: Floor) -> Passenger {
        let direction = if dest > start {
            Direction::Up
        } else {
            Direction::Down
        };

        Passenger {
            start,
            dest,
            direction,
        }
    }

    pub fn start(&self) -> Floor {
        self.start
    }

    pub fn dest(&self) -> Floor {
        self.dest
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Snapshot of every elevator, as parallel vectors indexed by elevator.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct SystemStatus {
    pub positions: Vec<Floor>,
    #[serde(rename = "passengerCounts")]
    pub passenger_counts: Vec<usize>,
    pub directions: Vec<Direction>,
    pub stops: Vec<Vec<Floor>>,
}

impl SystemStatus {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
