use std::fmt::Debug;

use derive_more::derive::{Display, Error};

use super::{Plan, Step};

/// The world a conditional plan is carried out in.
pub trait Environment {
    type State: PartialEq + Debug;
    type Action: Clone + Debug;

    fn current_state(&self) -> Self::State;

    fn execute(&mut self, action: &Self::Action);
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[display("Observed state {state} is not covered by the plan")]
    UnmatchedOutcome { state: String },

    #[display("Plan contains a branch point without outcomes")]
    EmptyBranch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionTrace<A> {
    pub actions: Vec<A>,
    pub decisions: usize,
}

/// Runs `plan` in `environment`, resolving every branch point against the
/// state observed at that moment.
pub fn execute<E: Environment>(
    plan: &Plan<E::State, E::Action>,
    environment: &mut E,
) -> Result<ExecutionTrace<E::Action>, ExecutionError> {
    let mut trace = ExecutionTrace {
        actions: vec![],
        decisions: 0,
    };

    run(plan, environment, &mut trace)?;

    Ok(trace)
}

fn run<E: Environment>(
    plan: &Plan<E::State, E::Action>,
    environment: &mut E,
    trace: &mut ExecutionTrace<E::Action>,
) -> Result<(), ExecutionError> {
    for step in plan.steps() {
        match step {
            Step::Action(action) => {
                tracing::debug!("Executing {:?}", action);
                environment.execute(action);
                trace.actions.push(action.clone());
            }

            Step::Branch(if_then) => {
                if if_then.is_empty() {
                    return Err(ExecutionError::EmptyBranch);
                }

                let observed = environment.current_state();
                let next = if_then
                    .decide(&observed)
                    .ok_or_else(|| ExecutionError::UnmatchedOutcome {
                        state: format!("{:?}", observed),
                    })?;

                tracing::trace!("Observed {:?}, following its branch", observed);
                trace.decisions += 1;
                run(next, environment, trace)?;
            }
        }
    }

    Ok(())
}
