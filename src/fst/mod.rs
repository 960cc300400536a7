//! Mutable, vector-backed weighted finite-state transducers together with the
//! primitives (arc sorting, depth-first visitation, state reordering and
//! trimming) the transformations of this crate are built on.

mod dfs;
mod from_str;
mod ops;
mod properties;

pub use self::dfs::{DfsEvent, DfsVisit};
pub use self::ops::{
    accessible_states, arc_sort, coaccessible_states, connect, state_sort, trim_inaccessible,
    ArcSortType,
};
pub use self::properties::{properties, Properties};

use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Range;
use std::rc::Rc;

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{FstError, Result};
use crate::symbol_table::SymbolTable;

pub type StateId = usize;
pub type Label = u64;

/// The label of transitions that do not consume or produce a symbol.
pub const EPSILON: Label = 0;

/// A transition of a `VectorFst`, owned by its source state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arc<W> {
    pub ilabel: Label,
    pub olabel: Label,
    pub weight: W,
    pub nextstate: StateId,
}

impl<W> Arc<W> {
    pub fn new(ilabel: Label, olabel: Label, weight: W, nextstate: StateId) -> Self {
        Arc {
            ilabel,
            olabel,
            weight,
            nextstate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) struct VectorState<W> {
    pub(crate) final_weight: Option<W>,
    pub(crate) arcs: Vec<Arc<W>>,
}

impl<W> VectorState<W> {
    fn new() -> Self {
        VectorState {
            final_weight: None,
            arcs: Vec::new(),
        }
    }
}

/// A weighted finite-state transducer with dense state ids `0..n`.
///
/// Equality and hashing are structural: two automata are equal iff they have
/// the same start state, the same final weights and the same arcs in the same
/// order at every state. Symbol tables are not compared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VectorFst<W> {
    pub(crate) states: Vec<VectorState<W>>,
    pub(crate) start: Option<StateId>,
    pub(crate) input_symbols: Option<Rc<SymbolTable>>,
    pub(crate) output_symbols: Option<Rc<SymbolTable>>,
    // `None` means "not known", see `is_acceptor`
    #[serde(skip)]
    pub(crate) acceptor: Option<bool>,
}

impl<W> Default for VectorFst<W> {
    fn default() -> Self {
        VectorFst {
            states: Vec::new(),
            start: None,
            input_symbols: None,
            output_symbols: None,
            acceptor: Some(true),
        }
    }
}

impl<W> VectorFst<W> {
    /// Creates an automaton without states.
    pub fn new() -> Self {
        VectorFst::default()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The ids of all states, in increasing order.
    pub fn states(&self) -> Range<StateId> {
        0..self.states.len()
    }

    pub fn add_state(&mut self) -> StateId {
        self.states.push(VectorState::new());
        self.states.len() - 1
    }

    pub fn add_states(&mut self, n: usize) {
        let total = self.states.len() + n;
        self.states.resize_with(total, VectorState::new);
    }

    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    pub fn set_start(&mut self, state: StateId) -> Result<()> {
        self.check_state(state)?;
        self.start = Some(state);
        Ok(())
    }

    /// The final weight of `state`, or `None` if it is not accepting.
    pub fn final_weight(&self, state: StateId) -> Option<&W> {
        self.states
            .get(state)
            .and_then(|s| s.final_weight.as_ref())
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_weight(state).is_some()
    }

    /// Sets the final weight of `state`; a zero weight makes it non-accepting.
    pub fn set_final(&mut self, state: StateId, weight: W) -> Result<()>
    where
        W: Zero,
    {
        self.check_state(state)?;
        self.states[state].final_weight = if weight.is_zero() {
            None
        } else {
            Some(weight)
        };
        Ok(())
    }

    pub fn add_arc(&mut self, state: StateId, arc: Arc<W>) -> Result<()> {
        self.check_state(state)?;
        self.check_state(arc.nextstate)?;
        if arc.ilabel != arc.olabel {
            self.acceptor = Some(false);
        }
        self.states[state].arcs.push(arc);
        Ok(())
    }

    /// The outgoing arcs of `state` in their stored order; empty for unknown
    /// states.
    pub fn arcs(&self, state: StateId) -> &[Arc<W>] {
        match self.states.get(state) {
            Some(s) => &s.arcs,
            None => &[],
        }
    }

    pub fn num_arcs(&self, state: StateId) -> usize {
        self.arcs(state).len()
    }

    /// Deletes the given states and all arcs entering or leaving them. The
    /// remaining states keep their relative order and are renumbered densely.
    pub fn delete_states(&mut self, dstates: &[StateId]) -> Result<()> {
        for &state in dstates {
            self.check_state(state)?;
        }
        if dstates.is_empty() {
            return Ok(());
        }

        let mut new_ids: Vec<Option<StateId>> = vec![Some(0); self.states.len()];
        for &state in dstates {
            new_ids[state] = None;
        }
        let mut next = 0;
        for id in new_ids.iter_mut().filter(|id| id.is_some()) {
            *id = Some(next);
            next += 1;
        }

        let old_states = mem::replace(&mut self.states, Vec::with_capacity(next));
        for (state, mut vstate) in old_states.into_iter().enumerate() {
            if new_ids[state].is_none() {
                continue;
            }
            vstate.arcs = vstate
                .arcs
                .into_iter()
                .filter_map(|mut arc| {
                    new_ids[arc.nextstate].map(|target| {
                        arc.nextstate = target;
                        arc
                    })
                })
                .collect();
            self.states.push(vstate);
        }
        self.start = self.start.and_then(|s| new_ids[s]);
        self.acceptor = None;

        trace!(deleted = dstates.len(), remaining = next, "deleted states");
        Ok(())
    }

    /// Removes every state; the result accepts the empty language.
    pub fn delete_all_states(&mut self) {
        self.states.clear();
        self.start = None;
        self.acceptor = Some(true);
    }

    pub fn input_symbols(&self) -> Option<&SymbolTable> {
        self.input_symbols.as_deref()
    }

    pub fn output_symbols(&self) -> Option<&SymbolTable> {
        self.output_symbols.as_deref()
    }

    pub fn set_input_symbols(&mut self, symbols: Option<Rc<SymbolTable>>) {
        self.input_symbols = symbols;
    }

    pub fn set_output_symbols(&mut self, symbols: Option<Rc<SymbolTable>>) {
        self.output_symbols = symbols;
    }

    /// Whether every arc carries the same input and output label.
    pub fn is_acceptor(&self) -> bool {
        self.acceptor.unwrap_or_else(|| {
            self.states
                .iter()
                .flat_map(|s| s.arcs.iter())
                .all(|arc| arc.ilabel == arc.olabel)
        })
    }

    pub(crate) fn set_acceptor(&mut self, acceptor: bool) {
        self.acceptor = Some(acceptor);
    }

    fn check_state(&self, state: StateId) -> Result<()> {
        if state < self.states.len() {
            Ok(())
        } else {
            Err(FstError::NoSuchState(state))
        }
    }
}

impl<W: PartialEq> PartialEq for VectorFst<W> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.states == other.states
    }
}

impl<W: Eq> Eq for VectorFst<W> {}

impl<W: Hash> Hash for VectorFst<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.states.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> VectorFst<u32> {
        let mut fst = VectorFst::new();
        fst.add_states(3);
        fst.set_start(0).unwrap();
        fst.add_arc(0, Arc::new(1, 1, 1, 1)).unwrap();
        fst.add_arc(1, Arc::new(2, 2, 1, 2)).unwrap();
        fst.add_arc(0, Arc::new(3, 3, 1, 2)).unwrap();
        fst.set_final(2, 1).unwrap();
        fst
    }

    #[test]
    fn rejects_unknown_states() {
        let mut fst = chain();
        assert_eq!(Err(FstError::NoSuchState(3)), fst.set_start(3));
        assert_eq!(
            Err(FstError::NoSuchState(7)),
            fst.add_arc(0, Arc::new(1, 1, 1, 7))
        );
        assert_eq!(Err(FstError::NoSuchState(9)), fst.delete_states(&[1, 9]));
        assert_eq!(3, fst.num_states());
    }

    #[test]
    fn zero_final_weight_is_not_final() {
        let mut fst = chain();
        assert!(fst.is_final(2));
        fst.set_final(2, 0).unwrap();
        assert!(!fst.is_final(2));
        assert_eq!(None, fst.final_weight(2));
    }

    #[test]
    fn delete_states_renumbers_densely() {
        let mut fst = chain();
        fst.delete_states(&[1]).unwrap();

        assert_eq!(2, fst.num_states());
        assert_eq!(Some(0), fst.start());
        assert_eq!(&[Arc::new(3, 3, 1, 1)], fst.arcs(0));
        assert!(fst.is_final(1));
    }

    #[test]
    fn deleting_the_start_state_clears_it() {
        let mut fst = chain();
        fst.delete_states(&[0]).unwrap();
        assert_eq!(None, fst.start());
        assert_eq!(2, fst.num_states());
    }

    #[test]
    fn acceptor_property_follows_arcs() {
        let mut fst = chain();
        assert!(fst.is_acceptor());
        fst.add_arc(2, Arc::new(4, 5, 1, 0)).unwrap();
        assert!(!fst.is_acceptor());
        fst.delete_states(&[2]).unwrap();
        assert!(fst.is_acceptor());
    }

    #[test]
    fn equality_ignores_symbol_tables() {
        let mut other = chain();
        other.set_input_symbols(Some(Rc::new(SymbolTable::new())));
        assert_eq!(chain(), other);

        other.states[0].arcs.reverse();
        assert_ne!(chain(), other);
    }
}
