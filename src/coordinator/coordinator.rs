/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::elevator::{DistanceEstimator, Elevator, ScanDistance};
use crate::shared::{ControllerError, Floor, Passenger, SystemStatus};

/// Distances at or below this are treated as nonsense by the assignment loop.
const REJECTED_DISTANCE: i32 = -2;

/**
 * Dispatches passengers to a fleet of elevators, one tick at a time.
 *
 * # Fields
 * - `elevators`:               The fleet, indexed from 0.
 * - `n_floors`:                Number of floors; elevators serve `[1, n_floors]`.
 * - `waiting_passengers`:      Assigned to an elevator but not yet on board.
 * - `unassigned_passengers`:   Called since the last tick, not yet assigned.
 * - `requeue_unassigned`:      Keep passengers no elevator can reach instead of dropping them.
 * - `estimator`:               Cost estimate used to choose an elevator.
 * - `ticks`:                   Number of time steps taken.
 * - `delivered`:               Passengers that have reached their destination.
 * - `dropped`:                 Passengers discarded as unassignable.
 */
pub struct ElevatorController {
    elevators: Vec<Elevator>,
    n_floors: Floor,
    waiting_passengers: Vec<Passenger>,
    unassigned_passengers: Vec<Passenger>,
    requeue_unassigned: bool,
    estimator: Box<dyn DistanceEstimator>,
    ticks: u64,
    delivered: u64,
    dropped: u64,
}

impl ElevatorController {
    /// Controller for a building of `n_floors` floors. Fewer than one floor is raised to one.
    pub fn new(n_floors: Floor, n_elevators: usize) -> ElevatorController {
        Self::with_estimator(n_floors, n_elevators, Box::new(ScanDistance))
    }

    pub fn with_estimator(
        n_floors: Floor,
        n_elevators: usize,
        estimator: Box<dyn DistanceEstimator>,
    ) -> ElevatorController {
        let n_floors = n_floors.max(1);
        ElevatorController {
            elevators: (0..n_elevators).map(|_| Elevator::new(1, n_floors)).collect(),
            n_floors,
            waiting_passengers: Vec::new(),
            unassigned_passengers: Vec::new(),
            requeue_unassigned: false,
            estimator,
            ticks: 0,
            delivered: 0,
            dropped: 0,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> ElevatorController {
        let mut controller = Self::new(config.n_floors, config.n_elevators);
        controller.requeue_unassigned = config.requeue_unassigned;
        controller
    }

    /***************************************/
    /*             Public API              */
    /***************************************/

    /// Steps one time unit forward: assign new passengers, then move every elevator.
    pub fn time_step(&mut self) {
        self.assign_passengers();
        self.move_elevators();
        self.ticks += 1;
    }

    /// Requests an elevator for `passenger`. The request is handled on the next tick.
    pub fn call_elevator(&mut self, passenger: Passenger) {
        debug!(
            "Call from floor {} to floor {}",
            passenger.start(),
            passenger.dest()
        );
        self.unassigned_passengers.push(passenger);
    }

    /**
     * Overrides the position of an elevator, optionally adding a stop.
     *
     * An unknown elevator or a floor outside `(0, n_floors]` leaves everything
     * untouched. A rejected `new_stop` is reported after the floor has been set.
     */
    pub fn update_elevator(
        &mut self,
        index: usize,
        current_floor: Floor,
        new_stop: Option<Floor>,
    ) -> Result<(), ControllerError> {
        let count = self.elevators.len();
        let elevator = self
            .elevators
            .get_mut(index)
            .ok_or(ControllerError::ElevatorOutOfRange { index, count })?;

        if current_floor <= 0 || current_floor > self.n_floors {
            return Err(ControllerError::FloorOutOfRange {
                floor: current_floor,
                min: 1,
                max: self.n_floors,
            });
        }

        elevator.set_current_floor(current_floor)?;
        if let Some(stop) = new_stop {
            elevator.new_stop(stop)?;
        }
        Ok(())
    }

    pub fn get_system_status(&self) -> SystemStatus {
        let mut status = SystemStatus::default();
        for elevator in self.elevators.iter() {
            status.positions.push(elevator.current_floor());
            status.passenger_counts.push(elevator.passengers().len());
            status.directions.push(elevator.direction());
            status.stops.push(elevator.stops().to_vec());
        }
        status
    }

    /***************************************/
    /*              Accessors              */
    /***************************************/
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn n_floors(&self) -> Floor {
        self.n_floors
    }

    pub fn waiting_passengers(&self) -> &[Passenger] {
        &self.waiting_passengers
    }

    pub fn unassigned_passengers(&self) -> &[Passenger] {
        &self.unassigned_passengers
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /***************************************/
    /*          Private functions          */
    /***************************************/

    // Hands every unassigned passenger to the elevator with the lowest estimate
    fn assign_passengers(&mut self) {
        let unassigned = std::mem::take(&mut self.unassigned_passengers);
        let mut retry = Vec::new();

        for passenger in unassigned {
            match self.choose_elevator(&passenger) {
                Ok(index) => {
                    debug!(
                        "Elevator {} assigned to pick up at floor {}",
                        index,
                        passenger.start()
                    );
                    if let Err(e) = self.elevators[index].new_stop(passenger.start()) {
                        debug!("Pickup stop ignored: {}", e);
                    }
                    self.waiting_passengers.push(passenger);
                }
                Err(e) if self.requeue_unassigned => {
                    debug!("Retrying next tick: {}", e);
                    retry.push(passenger);
                }
                Err(e) => {
                    warn!("Dropping passenger: {}", e);
                    self.dropped += 1;
                }
            }
        }

        self.unassigned_passengers = retry;
    }

    // Index of the first elevator with the lowest estimate within the feasibility bound
    fn choose_elevator(&self, passenger: &Passenger) -> Result<usize, ControllerError> {
        let best = self
            .elevators
            .iter()
            .enumerate()
            .map(|(i, elevator)| (i, self.estimator.estimate(elevator, passenger)))
            .filter(|&(_, distance)| distance > REJECTED_DISTANCE)
            .min_by_key(|&(_, distance)| distance);

        match best {
            Some((index, distance)) if distance < self.n_floors.saturating_mul(2) => Ok(index),
            _ => Err(ControllerError::Unassignable {
                start: passenger.start(),
                best: best.map(|(_, distance)| distance),
            }),
        }
    }

    // Serves arrivals and moves every elevator one step
    fn move_elevators(&mut self) {
        for (index, elevator) in self.elevators.iter_mut().enumerate() {
            let floor = elevator.current_floor();

            if elevator.next_stop() == Some(floor) {
                elevator.pop_next_stop();
                elevator.open_doors();

                let leaving = elevator.passenger_exit();
                self.delivered += leaving.len() as u64;

                let (boarding, still_waiting): (Vec<Passenger>, Vec<Passenger>) = self
                    .waiting_passengers
                    .drain(..)
                    .partition(|p| p.start() == floor);
                self.waiting_passengers = still_waiting;

                debug!(
                    "Elevator {} at floor {}: {} out, {} in",
                    index,
                    floor,
                    leaving.len(),
                    boarding.len()
                );
                if !boarding.is_empty() {
                    elevator.passenger_enter(boarding);
                }

                elevator.close_doors();
            }

            elevator.move_one_floor();
        }
    }
}
