use std::mem;

use tracing::debug;

use super::{DfsEvent, DfsVisit, StateId, VectorFst, VectorState};
use crate::error::{FstError, Result};

/// The label by which `arc_sort` orders the arcs of each state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcSortType {
    ByInput,
    ByOutput,
}

/// Sorts the arcs of every state by one of their labels. The sort is stable,
/// arcs with equal labels keep their relative order.
pub fn arc_sort<W>(fst: &mut VectorFst<W>, sort_type: ArcSortType) {
    for state in &mut fst.states {
        match sort_type {
            ArcSortType::ByInput => state.arcs.sort_by_key(|arc| arc.ilabel),
            ArcSortType::ByOutput => state.arcs.sort_by_key(|arc| arc.olabel),
        }
    }
}

/// Renumbers the states of `fst` such that state `s` becomes `order[s]`.
///
/// `order` has to be a permutation of `0..fst.num_states()`.
pub fn state_sort<W>(fst: &mut VectorFst<W>, order: &[StateId]) -> Result<()> {
    let num_states = fst.num_states();
    let invalid = FstError::InvalidStateOrder {
        len: order.len(),
        num_states,
    };
    if order.len() != num_states {
        return Err(invalid);
    }
    let mut taken = vec![false; num_states];
    for &target in order {
        if target >= num_states || taken[target] {
            return Err(invalid);
        }
        taken[target] = true;
    }

    let mut sorted: Vec<Option<VectorState<W>>> = (0..num_states).map(|_| None).collect();
    for (state, mut vstate) in mem::take(&mut fst.states).into_iter().enumerate() {
        for arc in &mut vstate.arcs {
            arc.nextstate = order[arc.nextstate];
        }
        sorted[order[state]] = Some(vstate);
    }
    fst.states = sorted.into_iter().flatten().collect();
    fst.start = fst.start.map(|s| order[s]);

    Ok(())
}

/// Marks the states that are reachable from the start state.
pub fn accessible_states<W>(fst: &VectorFst<W>) -> Vec<bool> {
    let mut accessible = vec![false; fst.num_states()];
    for event in DfsVisit::accessible(fst) {
        if let DfsEvent::Discover { state, .. } = event {
            accessible[state] = true;
        }
    }
    accessible
}

/// Marks the states from which a final state is reachable.
pub fn coaccessible_states<W>(fst: &VectorFst<W>) -> Vec<bool> {
    let mut predecessors: Vec<Vec<StateId>> = vec![Vec::new(); fst.num_states()];
    for state in fst.states() {
        for arc in fst.arcs(state) {
            predecessors[arc.nextstate].push(state);
        }
    }

    let mut coaccessible = vec![false; fst.num_states()];
    let mut agenda: Vec<StateId> = fst.states().filter(|&s| fst.is_final(s)).collect();
    for &state in &agenda {
        coaccessible[state] = true;
    }
    while let Some(state) = agenda.pop() {
        for &from in &predecessors[state] {
            if !coaccessible[from] {
                coaccessible[from] = true;
                agenda.push(from);
            }
        }
    }
    coaccessible
}

/// Removes all states that are not reachable from the start state or from
/// which no final state can be reached.
pub fn connect<W>(fst: &mut VectorFst<W>) -> Result<()> {
    let accessible = accessible_states(fst);
    let coaccessible = coaccessible_states(fst);
    let useless: Vec<StateId> = fst
        .states()
        .filter(|&s| !(accessible[s] && coaccessible[s]))
        .collect();
    debug!(removed = useless.len(), states = fst.num_states(), "connect");
    fst.delete_states(&useless)
}

/// Removes all states that are not reachable from the start state.
pub fn trim_inaccessible<W>(fst: &mut VectorFst<W>) -> Result<()> {
    let accessible = accessible_states(fst);
    let inaccessible: Vec<StateId> = fst.states().filter(|&s| !accessible[s]).collect();
    fst.delete_states(&inaccessible)
}
