//! Restriction of an automaton to the states that admit an infinite word.

use tracing::debug;

use crate::error::Result;
use crate::fst::{trim_inaccessible, DfsEvent, DfsVisit, StateId, VectorFst};

/// Removes every state that does not lie on, or lead to, a cycle reachable
/// from the start state. Final weights play no role; an acyclic automaton
/// becomes empty.
///
/// A single depth-first pass suffices: a state is live if it has a back arc,
/// a forward or cross arc to a finished live state, or a live tree child.
pub fn omega_words<W>(fst: &mut VectorFst<W>) -> Result<()> {
    let before = fst.num_states();
    trim_inaccessible(fst)?;

    // `dead[s]` is only meaningful once `s` is discovered
    let mut dead = vec![false; fst.num_states()];
    for event in DfsVisit::accessible(&*fst) {
        match event {
            DfsEvent::Discover { state, .. } => dead[state] = true,
            DfsEvent::BackArc { state, .. } => dead[state] = false,
            DfsEvent::ForwardOrCrossArc { state, arc } => {
                let target = dead[arc.nextstate];
                dead[state] &= target;
            }
            DfsEvent::Finish {
                state,
                parent: Some(parent),
            } => {
                let child = dead[state];
                dead[parent] &= child;
            }
            _ => (),
        }
    }

    let dead: Vec<StateId> = fst.states().filter(|&s| dead[s]).collect();
    fst.delete_states(&dead)?;

    debug!(
        before,
        after = fst.num_states(),
        "restricted to states with infinite words"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::Arc;

    fn fst(num_states: usize, arcs: &[(StateId, StateId)]) -> VectorFst<u32> {
        let mut fst = VectorFst::new();
        fst.add_states(num_states);
        fst.set_start(0).unwrap();
        for &(from, to) in arcs {
            fst.add_arc(from, Arc::new(1, 1, 1, to)).unwrap();
        }
        fst
    }

    #[test]
    fn keeps_paths_into_cycles() {
        // 0 → 1 ⟲, 0 → 2 → 3, 4 → 1 (inaccessible)
        let mut fst = fst(5, &[(0, 2), (2, 3), (0, 1), (1, 1), (4, 1)]);
        omega_words(&mut fst).unwrap();

        assert_eq!(2, fst.num_states());
        assert_eq!(Some(0), fst.start());
        assert_eq!(&[Arc::new(1, 1, 1, 1)], fst.arcs(0));
        assert_eq!(&[Arc::new(1, 1, 1, 1)], fst.arcs(1));
    }

    #[test]
    fn liveness_spreads_over_cross_arcs() {
        // 0 → 1 → 2 ⟲ is explored first, then 0 → 3 → 2
        let mut fst = fst(5, &[(0, 1), (1, 2), (2, 2), (0, 3), (3, 2), (3, 4)]);
        omega_words(&mut fst).unwrap();
        assert_eq!(4, fst.num_states());
        assert_eq!(1, fst.num_arcs(3));
    }

    #[test]
    fn dead_cross_arc_targets_do_not_revive() {
        // 0 → 1, 0 → 2 → 1, 2 → 0 closes a cycle through 0 and 2 only
        let mut fst = fst(3, &[(0, 1), (0, 2), (2, 1), (2, 0)]);
        omega_words(&mut fst).unwrap();
        assert_eq!(2, fst.num_states());
        assert_eq!(&[Arc::new(1, 1, 1, 1)], fst.arcs(0));
        assert_eq!(&[Arc::new(1, 1, 1, 0)], fst.arcs(1));
    }

    #[test]
    fn no_start_means_no_states() {
        let mut fst = fst(2, &[(0, 1), (1, 0)]);
        fst.start = None;
        omega_words(&mut fst).unwrap();
        assert_eq!(0, fst.num_states());
    }
}
