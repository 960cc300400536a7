//! Canonical state numbering.
//!
//! After `canonize`, two automata with the same reachable structure and the
//! same arc labels at every state carry the same state ids, so they can be
//! compared or hashed structurally regardless of how they were built.

use tracing::debug;

use crate::error::Result;
use crate::fst::{arc_sort, state_sort, ArcSortType, DfsEvent, DfsVisit, StateId, VectorFst};

/// Sorts the arcs of every state by input label and renumbers the states in
/// depth-first discovery order, starting with the start state as `0`.
///
/// States that are not reachable from the start state are numbered after the
/// reachable ones, in the order of further depth-first trees that are rooted
/// at the lowest-numbered state not yet discovered. Without a start state the
/// numbering is left unchanged.
pub fn canonize<W>(fst: &mut VectorFst<W>) -> Result<()> {
    arc_sort(fst, ArcSortType::ByInput);

    let visit: Vec<StateId> = DfsVisit::new(&*fst)
        .filter_map(|event| match event {
            DfsEvent::Discover { state, .. } => Some(state),
            _ => None,
        })
        .collect();
    if visit.is_empty() {
        return Ok(());
    }

    let mut order = vec![0; fst.num_states()];
    for (position, &state) in visit.iter().enumerate() {
        order[state] = position;
    }
    state_sort(fst, &order)?;

    debug!(states = visit.len(), "canonized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::Arc;

    #[test]
    fn numbers_states_in_discovery_order() {
        // start 3; 3 -b-> 1, 3 -a-> 2, 2 -c-> 0, 1 -a-> 3
        let mut fst: VectorFst<u32> = VectorFst::new();
        fst.add_states(4);
        fst.set_start(3).unwrap();
        fst.add_arc(3, Arc::new(2, 2, 1, 1)).unwrap();
        fst.add_arc(3, Arc::new(1, 1, 1, 2)).unwrap();
        fst.add_arc(2, Arc::new(3, 3, 1, 0)).unwrap();
        fst.add_arc(1, Arc::new(1, 1, 1, 3)).unwrap();
        fst.set_final(0, 5).unwrap();

        canonize(&mut fst).unwrap();

        let expected: VectorFst<u32> = "
            0 1 1 1 1
            0 3 2 2 1
            1 2 3 3 1
            2 5
            3 0 1 1 1
        "
        .parse()
        .unwrap();
        assert_eq!(expected, fst);
    }

    #[test]
    fn unreachable_states_follow_in_id_order() {
        let mut fst: VectorFst<u32> = VectorFst::new();
        fst.add_states(4);
        fst.set_start(2).unwrap();
        fst.add_arc(3, Arc::new(1, 1, 1, 0)).unwrap();
        fst.add_arc(1, Arc::new(1, 1, 1, 2)).unwrap();

        canonize(&mut fst).unwrap();

        // visit order: 2, then 0, then 1 (with cross arc to 2), then 3
        assert_eq!(Some(0), fst.start());
        assert_eq!(&[Arc::new(1, 1, 1, 0)], fst.arcs(2));
        assert_eq!(&[Arc::new(1, 1, 1, 1)], fst.arcs(3));
    }

    #[test]
    fn without_start_only_sorts_arcs() {
        let mut fst: VectorFst<u32> = VectorFst::new();
        fst.add_states(2);
        fst.add_arc(1, Arc::new(4, 4, 1, 0)).unwrap();
        fst.add_arc(1, Arc::new(2, 2, 1, 0)).unwrap();

        canonize(&mut fst).unwrap();

        assert_eq!(None, fst.start());
        assert_eq!(2, fst.arcs(1)[0].ilabel);
        assert_eq!(0, fst.num_arcs(0));
    }
}
