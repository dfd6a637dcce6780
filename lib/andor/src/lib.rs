mod execute;
mod metrics;
mod path;
mod plan;
mod problem;
mod search;

pub use execute::{execute, Environment, ExecutionError, ExecutionTrace};
pub use metrics::Metrics;
pub use path::Path;
pub use plan::{Conditional, IfThen, Plan, Step};
pub use problem::FnProblem;
pub use search::{AndOrSearch, METRIC_EXPANDED_NODES, METRIC_MAX_PATH_LENGTH};

use std::fmt::Debug;
use std::hash::Hash;

/// A search problem whose actions may have more than one outcome.
pub trait NondeterministicProblem {
    type State: Eq + Hash + Clone + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    /// Actions applicable in `state`. The order is the order in which
    /// OR-search tries them.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Every state that executing `action` in `state` may lead to.
    /// Duplicates are ignored by the search.
    fn results(&self, state: &Self::State, action: &Self::Action) -> Vec<Self::State>;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    fn step_cost(&self, _from: &Self::State, _action: &Self::Action, _to: &Self::State) -> f64 {
        1.0
    }
}
