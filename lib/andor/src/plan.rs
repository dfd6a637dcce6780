use std::collections::VecDeque;
use std::fmt::Display;

use serde::Serialize;

/// A conditional plan: actions interleaved with branch points that are
/// resolved against the state observed at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Plan<S, A> {
    steps: VecDeque<Step<S, A>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step<S, A> {
    Action(A),
    Branch(IfThen<S, A>),
}

/// Branch point mapping observed outcome states to the plan to follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IfThen<S, A> {
    conditionals: Vec<Conditional<S, A>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conditional<S, A> {
    pub state: S,
    pub plan: Plan<S, A>,
}

impl<S, A> Plan<S, A> {
    pub fn empty() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step<S, A>> {
        self.steps.iter()
    }

    pub fn first(&self) -> Option<&Step<S, A>> {
        self.steps.front()
    }

    pub fn prepend(mut self, step: Step<S, A>) -> Self {
        self.steps.push_front(step);
        self
    }

    pub fn append(mut self, step: Step<S, A>) -> Self {
        self.steps.push_back(step);
        self
    }

    /// Number of actions on the longest branch.
    pub fn depth(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Action(_) => 1,
                Step::Branch(if_then) => if_then
                    .iter()
                    .map(|c| c.plan.depth())
                    .max()
                    .unwrap_or(0),
            })
            .sum()
    }
}

impl<S, A> Default for Plan<S, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S, A> From<IfThen<S, A>> for Plan<S, A> {
    fn from(if_then: IfThen<S, A>) -> Self {
        Plan::empty().append(Step::Branch(if_then))
    }
}

impl<S, A> IfThen<S, A> {
    pub fn new() -> Self {
        Self {
            conditionals: Vec::new(),
        }
    }

    pub fn add(&mut self, state: S, plan: Plan<S, A>) {
        self.conditionals.push(Conditional { state, plan });
    }

    pub fn len(&self) -> usize {
        self.conditionals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditionals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conditional<S, A>> {
        self.conditionals.iter()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &S> {
        self.conditionals.iter().map(|c| &c.state)
    }
}

impl<S: PartialEq, A> IfThen<S, A> {
    /// Plan for exactly the observed state, if this branch point knows it.
    pub fn decide(&self, observed: &S) -> Option<&Plan<S, A>> {
        self.conditionals
            .iter()
            .find(|c| &c.state == observed)
            .map(|c| &c.plan)
    }

    /// Like [`IfThen::decide`], but an unknown state selects the last entry
    /// as the default branch.
    pub fn decide_or_default(&self, observed: &S) -> Option<&Plan<S, A>> {
        self.decide(observed)
            .or_else(|| self.conditionals.last().map(|c| &c.plan))
    }
}

impl<S, A> Default for IfThen<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Display, A: Display> Display for Plan<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{step}")?;
        }
        write!(f, "]")
    }
}

impl<S: Display, A: Display> Display for Step<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Action(action) => write!(f, "{action}"),
            Step::Branch(if_then) => write!(f, "{if_then}"),
        }
    }
}

impl<S: Display, A: Display> Display for IfThen<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some((last, rest)) = self.conditionals.split_last() else {
            return Ok(());
        };

        for c in rest {
            write!(f, "if {} then {} else ", c.state, c.plan)?;
        }
        write!(f, "{}", last.plan)
    }
}
