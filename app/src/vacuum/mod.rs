mod environment;

use andor::NondeterministicProblem;
use serde::{Deserialize, Serialize};

pub use environment::ErraticVacuumEnvironment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum LocationState {
    Clean,
    Dirty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum VacuumAction {
    Suck,
    Left,
    Right,
}

/// Dirt in both squares plus the position of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("({a}, {b}, at {agent})")]
pub struct VacuumState {
    pub a: LocationState,
    pub b: LocationState,
    pub agent: Location,
}

impl Location {
    pub fn other(self) -> Self {
        match self {
            Location::A => Location::B,
            Location::B => Location::A,
        }
    }
}

impl VacuumAction {
    pub const ALL: [VacuumAction; 3] = [VacuumAction::Suck, VacuumAction::Left, VacuumAction::Right];
}

impl VacuumState {
    pub fn new(a: LocationState, b: LocationState, agent: Location) -> Self {
        Self { a, b, agent }
    }

    pub fn state_of(&self, location: Location) -> LocationState {
        match location {
            Location::A => self.a,
            Location::B => self.b,
        }
    }

    pub fn with(self, location: Location, state: LocationState) -> Self {
        match location {
            Location::A => Self { a: state, ..self },
            Location::B => Self { b: state, ..self },
        }
    }

    pub fn moved_to(self, agent: Location) -> Self {
        Self { agent, ..self }
    }

    pub fn is_clean(&self) -> bool {
        self.a == LocationState::Clean && self.b == LocationState::Clean
    }
}

/// The erratic vacuum world: sucking a dirty square sometimes cleans the
/// adjacent square as well, sucking a clean square sometimes deposits dirt.
#[derive(Debug, Clone)]
pub struct VacuumWorld {
    initial_state: VacuumState,
}

impl VacuumWorld {
    pub fn new(initial_state: VacuumState) -> Self {
        Self { initial_state }
    }
}

impl NondeterministicProblem for VacuumWorld {
    type State = VacuumState;
    type Action = VacuumAction;

    fn initial_state(&self) -> VacuumState {
        self.initial_state
    }

    fn actions(&self, _: &VacuumState) -> Vec<VacuumAction> {
        VacuumAction::ALL.to_vec()
    }

    fn results(&self, state: &VacuumState, action: &VacuumAction) -> Vec<VacuumState> {
        let current = state.agent;
        let adjacent = current.other();

        match action {
            VacuumAction::Suck => match state.state_of(current) {
                LocationState::Dirty => {
                    let cleaned = state.with(current, LocationState::Clean);
                    vec![cleaned, cleaned.with(adjacent, LocationState::Clean)]
                }
                LocationState::Clean => vec![*state, state.with(current, LocationState::Dirty)],
            },
            VacuumAction::Left => vec![state.moved_to(Location::A)],
            VacuumAction::Right => vec![state.moved_to(Location::B)],
        }
    }

    fn is_goal_state(&self, state: &VacuumState) -> bool {
        state.is_clean()
    }
}
