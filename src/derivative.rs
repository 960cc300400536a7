//! Derivatives of an automaton with respect to a single transition.

use tracing::debug;

use crate::fst::{Label, VectorFst};

/// The derivative of `fst` with respect to one transition: a copy of `fst`
/// whose start state is the target of the first arc leaving the start state
/// with labels `(ilabel, olabel)`.
///
/// If there is no such arc, or no start state, the result has no states. No
/// states are removed otherwise, even if they become unreachable.
pub fn derivative<W: Clone>(fst: &VectorFst<W>, ilabel: Label, olabel: Label) -> VectorFst<W> {
    let mut derived = fst.clone();

    let target = fst.start().and_then(|start| {
        fst.arcs(start)
            .iter()
            .find(|arc| arc.ilabel == ilabel && arc.olabel == olabel)
            .map(|arc| arc.nextstate)
    });

    match target {
        Some(state) => derived.start = Some(state),
        None => derived.delete_all_states(),
    }

    debug!(ilabel, olabel, found = target.is_some(), "derivative");
    derived
}
