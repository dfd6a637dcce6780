use super::{IfThen, Metrics, NondeterministicProblem, Path, Plan, Step};

pub const METRIC_EXPANDED_NODES: &str = "expanded_nodes";
pub const METRIC_MAX_PATH_LENGTH: &str = "max_path_length";

type ProblemPlan<P> = Plan<<P as NondeterministicProblem>::State, <P as NondeterministicProblem>::Action>;

/// AND-OR graph search producing conditional plans.
///
/// OR nodes are the agent's choice of action, AND nodes cover every outcome
/// the environment may pick for that action. A result of `None` means no plan
/// guarantees reaching a goal; `Some` of an empty plan means the state is
/// already a goal.
#[derive(Debug, Default)]
pub struct AndOrSearch {
    metrics: Metrics,
}

impl AndOrSearch {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip_all)]
    pub fn search<P: NondeterministicProblem>(&mut self, problem: &P) -> Option<ProblemPlan<P>> {
        self.metrics.clear();
        self.metrics.set(METRIC_EXPANDED_NODES, 0);
        self.metrics.set(METRIC_MAX_PATH_LENGTH, 0);

        let initial_state = problem.initial_state();
        tracing::debug!("Searching conditional plan from {:?}", initial_state);

        let plan = self.or_search(&initial_state, problem, &mut Path::new());

        match &plan {
            Some(plan) => tracing::debug!(
                "Found conditional plan of depth {} after expanding {} nodes",
                plan.depth(),
                self.expanded_nodes()
            ),
            None => tracing::debug!(
                "No conditional plan exists, expanded {} nodes",
                self.expanded_nodes()
            ),
        }

        plan
    }

    pub fn or_search<P: NondeterministicProblem>(
        &mut self,
        state: &P::State,
        problem: &P,
        path: &mut Path<P::State>,
    ) -> Option<ProblemPlan<P>> {
        self.metrics.increment(METRIC_EXPANDED_NODES);

        if problem.is_goal_state(state) {
            tracing::trace!("Goal reached in {:?}", state);
            return Some(Plan::empty());
        }

        if path.contains(state) {
            tracing::trace!("State {:?} already on path, dropping branch", state);
            return None;
        }

        path.push(state.clone());
        self.metrics.record_max(METRIC_MAX_PATH_LENGTH, path.len());
        let plan = self.first_solving_action(state, problem, path);
        path.pop();

        plan
    }

    pub fn and_search<P: NondeterministicProblem>(
        &mut self,
        states: &[P::State],
        problem: &P,
        path: &mut Path<P::State>,
    ) -> Option<ProblemPlan<P>> {
        self.metrics.increment(METRIC_EXPANDED_NODES);

        if states.is_empty() {
            tracing::trace!("Action has no outcomes");
            return None;
        }

        let mut if_then = IfThen::new();
        for state in states {
            if if_then.outcomes().any(|known| known == state) {
                continue;
            }

            let plan = self.or_search(state, problem, path)?;
            if_then.add(state.clone(), plan);
        }

        Some(Plan::from(if_then))
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn expanded_nodes(&self) -> usize {
        self.metrics.get(METRIC_EXPANDED_NODES)
    }

    //first action whose every outcome is solvable wins
    fn first_solving_action<P: NondeterministicProblem>(
        &mut self,
        state: &P::State,
        problem: &P,
        path: &mut Path<P::State>,
    ) -> Option<ProblemPlan<P>> {
        for action in problem.actions(state) {
            let outcomes = problem.results(state, &action);

            match self.and_search(&outcomes, problem, path) {
                Some(plan) => {
                    tracing::trace!("Action {:?} solves {:?}", action, state);
                    return Some(plan.prepend(Step::Action(action)));
                }
                None => tracing::trace!("Action {:?} fails in {:?}", action, state),
            }
        }

        None
    }
}
