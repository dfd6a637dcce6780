use std::fmt::Debug;
use std::hash::Hash;

use super::NondeterministicProblem;

type StepCostFn<S, A> = Box<dyn Fn(&S, &A, &S) -> f64>;

/// Problem assembled from plain functions instead of a dedicated type.
pub struct FnProblem<S, A, FA, FR, FG> {
    initial_state: S,
    actions: FA,
    results: FR,
    goal_test: FG,
    step_cost: Option<StepCostFn<S, A>>,
}

impl<S, A, FA, FR, FG> FnProblem<S, A, FA, FR, FG>
where
    FA: Fn(&S) -> Vec<A>,
    FR: Fn(&S, &A) -> Vec<S>,
    FG: Fn(&S) -> bool,
{
    pub fn new(initial_state: S, actions: FA, results: FR, goal_test: FG) -> Self {
        Self {
            initial_state,
            actions,
            results,
            goal_test,
            step_cost: None,
        }
    }

    pub fn with_step_cost(mut self, step_cost: impl Fn(&S, &A, &S) -> f64 + 'static) -> Self {
        self.step_cost = Some(Box::new(step_cost));
        self
    }
}

impl<S, A, FA, FR, FG> NondeterministicProblem for FnProblem<S, A, FA, FR, FG>
where
    S: Eq + Hash + Clone + Debug,
    A: Clone + Debug,
    FA: Fn(&S) -> Vec<A>,
    FR: Fn(&S, &A) -> Vec<S>,
    FG: Fn(&S) -> bool,
{
    type State = S;
    type Action = A;

    fn initial_state(&self) -> S {
        self.initial_state.clone()
    }

    fn actions(&self, state: &S) -> Vec<A> {
        (self.actions)(state)
    }

    fn results(&self, state: &S, action: &A) -> Vec<S> {
        (self.results)(state, action)
    }

    fn is_goal_state(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }

    fn step_cost(&self, from: &S, action: &A, to: &S) -> f64 {
        match &self.step_cost {
            Some(cost) => cost(from, action, to),
            None => 1.0,
        }
    }
}

impl<S: Debug, A, FA, FR, FG> Debug for FnProblem<S, A, FA, FR, FG> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProblem")
            .field("initial_state", &self.initial_state)
            .field("custom_step_cost", &self.step_cost.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_problem(
    ) -> FnProblem<u8, char, impl Fn(&u8) -> Vec<char>, impl Fn(&u8, &char) -> Vec<u8>, impl Fn(&u8) -> bool> {
        FnProblem::new(
            0u8,
            |_: &u8| vec!['+'],
            |s: &u8, _: &char| vec![s + 1],
            |s: &u8| *s == 2,
        )
    }

    #[test]
    fn delegates_to_functions() {
        let problem = counter_problem();

        assert_eq!(problem.initial_state(), 0);
        assert_eq!(problem.actions(&0), vec!['+']);
        assert_eq!(problem.results(&1, &'+'), vec![2]);
        assert!(problem.is_goal_state(&2));
        assert!(!problem.is_goal_state(&1));
    }

    #[test]
    fn step_cost_defaults_to_one() {
        let problem = counter_problem();
        assert_eq!(problem.step_cost(&0, &'+', &1), 1.0);

        let problem = counter_problem().with_step_cost(|from, _, to| f64::from(to - from) * 2.5);
        assert_eq!(problem.step_cost(&0, &'+', &1), 2.5);
    }
}
