/// States on the current OR/AND recursion branch, root first.
///
/// Only membership is ever queried. Every push on entering an OR node is
/// matched by a pop on leaving it, so sibling branches never share entries.
#[derive(Debug, Clone)]
pub struct Path<S> {
    states: Vec<S>,
}

impl<S: PartialEq> Path<S> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn push(&mut self, state: S) {
        self.states.push(state);
    }

    pub fn pop(&mut self) -> Option<S> {
        self.states.pop()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: PartialEq> Default for Path<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_restore_membership() {
        let mut path = Path::new();
        path.push("a");
        path.push("b");
        assert!(path.contains(&"a"));
        assert!(path.contains(&"b"));
        assert_eq!(path.len(), 2);

        assert_eq!(path.pop(), Some("b"));
        assert!(!path.contains(&"b"));
        assert!(path.contains(&"a"));
    }
}
