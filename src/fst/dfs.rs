use super::{Arc, StateId, VectorFst};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    /// not yet discovered
    White,
    /// discovered, on the current path
    Grey,
    /// finished
    Black,
}

/// A step of a depth-first visitation, see `DfsVisit`.
#[derive(Debug, PartialEq)]
pub enum DfsEvent<'a, W> {
    /// `state` is seen for the first time; `parent` is `None` for the root of
    /// a depth-first tree.
    Discover {
        state: StateId,
        parent: Option<StateId>,
    },
    /// `arc` leads to an undiscovered state, which is discovered next.
    TreeArc { state: StateId, arc: &'a Arc<W> },
    /// `arc` leads to a state on the current path, i.e. it closes a cycle.
    BackArc { state: StateId, arc: &'a Arc<W> },
    /// `arc` leads to a state that is already finished.
    ForwardOrCrossArc { state: StateId, arc: &'a Arc<W> },
    /// All arcs of `state` have been explored.
    Finish {
        state: StateId,
        parent: Option<StateId>,
    },
}

/// Depth-first visitation of a `VectorFst` as an `Iterator` over `DfsEvent`s.
///
/// The visitation starts at the start state and explores arcs in their stored
/// order, using an explicit stack. Unless the visit is restricted to
/// accessible states, it continues with a new tree from the lowest-numbered
/// undiscovered state whenever a tree is exhausted. An automaton without a
/// start state yields no events.
pub struct DfsVisit<'a, W> {
    fst: &'a VectorFst<W>,
    color: Vec<Color>,
    // (state, index of the next arc to explore)
    stack: Vec<(StateId, usize)>,
    pending: Option<DfsEvent<'a, W>>,
    next_root: StateId,
    started: bool,
    accessible_only: bool,
}

impl<'a, W> DfsVisit<'a, W> {
    /// Visits every state of `fst`, provided it has a start state.
    pub fn new(fst: &'a VectorFst<W>) -> Self {
        DfsVisit::with_scope(fst, false)
    }

    /// Visits only the states reachable from the start state.
    pub fn accessible(fst: &'a VectorFst<W>) -> Self {
        DfsVisit::with_scope(fst, true)
    }

    fn with_scope(fst: &'a VectorFst<W>, accessible_only: bool) -> Self {
        DfsVisit {
            fst,
            color: vec![Color::White; fst.num_states()],
            stack: Vec::new(),
            pending: None,
            next_root: 0,
            started: false,
            accessible_only,
        }
    }

    fn discover(&mut self, state: StateId, parent: Option<StateId>) -> DfsEvent<'a, W> {
        self.color[state] = Color::Grey;
        self.stack.push((state, 0));
        DfsEvent::Discover { state, parent }
    }

    fn next_root(&mut self) -> Option<StateId> {
        if !self.started {
            self.started = true;
            if self.fst.start().is_none() {
                self.next_root = self.color.len();
            }
            return self.fst.start();
        }
        if self.accessible_only {
            return None;
        }
        while self.next_root < self.color.len() {
            let state = self.next_root;
            self.next_root += 1;
            if self.color[state] == Color::White {
                return Some(state);
            }
        }
        None
    }
}

impl<'a, W> Iterator for DfsVisit<'a, W> {
    type Item = DfsEvent<'a, W>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        let (state, position) = match self.stack.last_mut() {
            Some(top) => {
                let current = *top;
                top.1 += 1;
                current
            }
            None => {
                let root = self.next_root()?;
                return Some(self.discover(root, None));
            }
        };

        let fst = self.fst;
        match fst.arcs(state).get(position) {
            Some(arc) => Some(match self.color[arc.nextstate] {
                Color::White => {
                    let discovery = self.discover(arc.nextstate, Some(state));
                    self.pending = Some(discovery);
                    DfsEvent::TreeArc { state, arc }
                }
                Color::Grey => DfsEvent::BackArc { state, arc },
                Color::Black => DfsEvent::ForwardOrCrossArc { state, arc },
            }),
            None => {
                self.stack.pop();
                self.color[state] = Color::Black;
                let parent = self.stack.last().map(|&(p, _)| p);
                Some(DfsEvent::Finish { state, parent })
            }
        }
    }
}
