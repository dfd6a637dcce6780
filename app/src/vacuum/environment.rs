use andor::Environment;
use rand::Rng;

use super::{Location, LocationState, VacuumAction, VacuumState};

const CLEANING_REWARD: i64 = 10;
const MOVE_COST: i64 = 1;

/// Vacuum world that picks one of the erratic outcomes at random whenever
/// the agent sucks.
#[derive(Debug)]
pub struct ErraticVacuumEnvironment<R> {
    state: VacuumState,
    rng: R,
    performance: i64,
    actions_executed: usize,
}

impl<R: Rng> ErraticVacuumEnvironment<R> {
    pub fn new(state: VacuumState, rng: R) -> Self {
        Self {
            state,
            rng,
            performance: 0,
            actions_executed: 0,
        }
    }

    pub fn performance(&self) -> i64 {
        self.performance
    }

    pub fn actions_executed(&self) -> usize {
        self.actions_executed
    }

    fn suck(&mut self) {
        let current = self.state.agent;
        let adjacent = current.other();

        match self.state.state_of(current) {
            LocationState::Dirty => {
                self.clean(current);
                if self.rng.gen_bool(0.5) && self.state.state_of(adjacent) == LocationState::Dirty {
                    self.clean(adjacent);
                }
            }
            LocationState::Clean => {
                if self.rng.gen_bool(0.5) {
                    tracing::trace!("Dirt deposited at {}", current);
                    self.state = self.state.with(current, LocationState::Dirty);
                }
            }
        }
    }

    fn clean(&mut self, location: Location) {
        self.state = self.state.with(location, LocationState::Clean);
        self.performance += CLEANING_REWARD;
    }
}

impl<R: Rng> Environment for ErraticVacuumEnvironment<R> {
    type State = VacuumState;
    type Action = VacuumAction;

    fn current_state(&self) -> VacuumState {
        self.state
    }

    fn execute(&mut self, action: &VacuumAction) {
        match action {
            VacuumAction::Suck => self.suck(),
            VacuumAction::Left => {
                self.state = self.state.moved_to(Location::A);
                self.performance -= MOVE_COST;
            }
            VacuumAction::Right => {
                self.state = self.state.moved_to(Location::B);
                self.performance -= MOVE_COST;
            }
        }

        self.actions_executed += 1;
    }
}
