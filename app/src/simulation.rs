use andor::{Environment, NondeterministicProblem, Plan, execute};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::vacuum::{ErraticVacuumEnvironment, VacuumAction, VacuumState, VacuumWorld};

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_trials")]
    pub trials: usize,
    pub seed: Option<u64>,
}

fn default_trials() -> usize {
    10
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub trials: usize,
    pub goals_reached: usize,
    pub failures: usize,
    pub average_actions: f64,
    pub average_performance: f64,
    pub average_path_cost: f64,
}

/// Sums the problem's step cost over every transition the wrapped
/// environment goes through.
struct CostTracking<'a, P, E> {
    problem: &'a P,
    environment: E,
    path_cost: f64,
}

impl<'a, P, E> CostTracking<'a, P, E> {
    fn new(problem: &'a P, environment: E) -> Self {
        Self {
            problem,
            environment,
            path_cost: 0.0,
        }
    }
}

impl<P, E> Environment for CostTracking<'_, P, E>
where
    P: NondeterministicProblem,
    E: Environment<State = P::State, Action = P::Action>,
{
    type State = E::State;
    type Action = E::Action;

    fn current_state(&self) -> Self::State {
        self.environment.current_state()
    }

    fn execute(&mut self, action: &Self::Action) {
        let from = self.environment.current_state();
        self.environment.execute(action);
        let to = self.environment.current_state();

        self.path_cost += self.problem.step_cost(&from, action, &to);
    }
}

/// Executes `plan` in fresh erratic environments, one per trial.
#[tracing::instrument(skip_all, fields(trials = config.trials))]
pub fn simulate(
    plan: &Plan<VacuumState, VacuumAction>,
    world: &VacuumWorld,
    config: &SimulationConfig,
) -> SimulationSummary {
    let mut goals_reached = 0;
    let mut failures = 0;
    let mut total_actions = 0;
    let mut total_performance = 0;
    let mut total_path_cost = 0.0;

    for trial in 0..config.trials {
        let _span = tracing::debug_span!("trial", trial).entered();

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(trial as u64)),
            None => StdRng::from_entropy(),
        };
        let environment = ErraticVacuumEnvironment::new(world.initial_state(), rng);
        let mut environment = CostTracking::new(world, environment);

        match execute(plan, &mut environment) {
            Ok(trace) => {
                let final_state = environment.current_state();
                tracing::debug!("Executed {:?}, ending in {}", trace.actions, final_state);

                if final_state.is_clean() {
                    goals_reached += 1;
                } else {
                    tracing::warn!("Plan finished without reaching the goal, ending in {}", final_state);
                }
            }
            Err(e) => {
                tracing::warn!("Plan execution failed: {}", e);
                failures += 1;
            }
        }

        total_actions += environment.environment.actions_executed();
        total_performance += environment.environment.performance();
        total_path_cost += environment.path_cost;
    }

    let per_trial = |total: f64| {
        if config.trials == 0 {
            0.0
        } else {
            total / config.trials as f64
        }
    };

    SimulationSummary {
        trials: config.trials,
        goals_reached,
        failures,
        average_actions: per_trial(total_actions as f64),
        average_performance: per_trial(total_performance as f64),
        average_path_cost: per_trial(total_path_cost),
    }
}
