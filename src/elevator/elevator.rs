/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::distance::{DistanceEstimator, ScanDistance};
use crate::elevator::stops::{min_max, order_stops};
use crate::shared::{ControllerError, Direction, Floor, Passenger};

/**
 * A single elevator car.
 *
 * The doors act as a gate on the car: it does not move while they are open,
 * and passengers only leave while they are open.
 *
 * # Fields
 * - `passengers`:      Passengers currently in the car.
 * - `stops`:           Floors to visit, in service order and without duplicates.
 * - `current_floor`:   Current position, always within `[min, max]`.
 * - `direction`:       Direction of travel.
 * - `min`:             Lowest floor served.
 * - `max`:             Highest floor served.
 * - `doors_open`:      Whether the doors are currently open.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    passengers: Vec<Passenger>,
    stops: Vec<Floor>,
    current_floor: Floor,
    direction: Direction,
    min: Floor,
    max: Floor,
    doors_open: bool,
}

impl Elevator {
    /// Elevator serving `[min, max]`. A `max` below `min` is raised to `min`.
    pub fn new(min: Floor, max: Floor) -> Elevator {
        let max = max.max(min);
        Elevator {
            passengers: Vec::new(),
            stops: Vec::new(),
            current_floor: min,
            direction: Direction::Up,
            min,
            max,
            doors_open: false,
        }
    }

    /***************************************/
    /*              Accessors              */
    /***************************************/
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stops(&self) -> &[Floor] {
        &self.stops
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn doors_open(&self) -> bool {
        self.doors_open
    }

    pub fn floor_range(&self) -> (Floor, Floor) {
        (self.min, self.max)
    }

    /// Number of passengers, current floor and door state.
    pub fn get_status(&self) -> (usize, Floor, bool) {
        (self.passengers.len(), self.current_floor, self.doors_open)
    }

    pub fn next_stop(&self) -> Option<Floor> {
        self.stops.first().copied()
    }

    /***************************************/
    /*              Operations             */
    /***************************************/

    /// Adds `floor` to the stop list and reorders it. Floors outside the served range are rejected.
    pub fn new_stop(&mut self, floor: Floor) -> Result<(), ControllerError> {
        if !self.serves(floor) {
            return Err(ControllerError::FloorOutOfRange {
                floor,
                min: self.min,
                max: self.max,
            });
        }

        self.stops.push(floor);
        self.stops = order_stops(&self.stops, self.current_floor, self.direction);
        Ok(())
    }

    /// Removes and returns the stop at the head of the list.
    pub fn pop_next_stop(&mut self) -> Option<Floor> {
        if self.stops.is_empty() {
            return None;
        }
        Some(self.stops.remove(0))
    }

    /// Sets the position directly. Out of range floors are rejected.
    pub fn set_current_floor(&mut self, floor: Floor) -> Result<(), ControllerError> {
        if !self.serves(floor) {
            return Err(ControllerError::FloorOutOfRange {
                floor,
                min: self.min,
                max: self.max,
            });
        }

        self.current_floor = floor;
        Ok(())
    }

    pub fn open_doors(&mut self) {
        self.doors_open = true;
    }

    pub fn close_doors(&mut self) {
        self.doors_open = false;
    }

    /**
     * Moves one floor toward the next stop.
     *
     * Does nothing while the doors are open or when there are no stops. The
     * direction is turned around first if the next stop lies behind the car.
     * A step that would leave the building bounces off the boundary instead.
     */
    pub fn move_one_floor(&mut self) {
        if self.doors_open {
            return;
        }
        let next_stop = match self.next_stop() {
            Some(stop) => stop,
            None => return,
        };

        if next_stop > self.current_floor && self.direction == Direction::Down {
            self.direction = Direction::Up;
        } else if next_stop < self.current_floor && self.direction == Direction::Up {
            self.direction = Direction::Down;
        }

        if let Some(next) = self.step_from_current() {
            self.current_floor = next;
            return;
        }

        self.direction = self.direction.reversed();
        // Single floor buildings have nowhere to bounce to
        if let Some(bounced) = self.step_from_current() {
            self.current_floor = bounced;
        }
    }

    /// Lets out everyone whose destination is the current floor and returns them.
    pub fn passenger_exit(&mut self) -> Vec<Passenger> {
        if !self.doors_open {
            return Vec::new();
        }

        let floor = self.current_floor;
        let (leaving, staying): (Vec<Passenger>, Vec<Passenger>) = self
            .passengers
            .drain(..)
            .partition(|p| p.dest() == floor);
        self.passengers = staying;
        leaving
    }

    /// Boards `new_passengers`, adding each destination as a stop.
    pub fn passenger_enter(&mut self, new_passengers: Vec<Passenger>) {
        for passenger in new_passengers {
            if let Err(e) = self.new_stop(passenger.dest()) {
                debug!("Passenger destination ignored: {}", e);
            }
            self.passengers.push(passenger);
        }
    }

    /// Cost of picking up `passenger`, see [`ScanDistance`]. Returns -1 when idle.
    pub fn distance(&self, passenger: &Passenger) -> i32 {
        ScanDistance.estimate(self, passenger)
    }

    /// The turnaround point: highest stop going up, lowest going down.
    pub fn furthest_stop(&self) -> Floor {
        match min_max(&self.stops) {
            None => self.current_floor,
            Some((smallest, biggest)) => match self.direction {
                Direction::Up => biggest,
                Direction::Down => smallest,
            },
        }
    }

    // Next floor in the current direction, if it is inside the building
    fn step_from_current(&self) -> Option<Floor> {
        self.current_floor
            .checked_add(self.direction.delta())
            .filter(|&floor| self.serves(floor))
    }

    fn serves(&self, floor: Floor) -> bool {
        floor >= self.min && floor <= self.max
    }

    /***************************************/
    /*           Test functions            */
    /***************************************/
    #[cfg(test)]
    pub fn test_set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}
