use std::fmt::{self, Display, Formatter};

use super::{accessible_states, coaccessible_states, DfsEvent, DfsVisit, VectorFst, EPSILON};

/// Structural properties of a `VectorFst`, computed on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    pub acceptor: bool,
    /// some arc has epsilon on both tapes
    pub epsilons: bool,
    pub ilabel_sorted: bool,
    pub olabel_sorted: bool,
    pub cyclic: bool,
    /// some cycle passes through the start state
    pub initial_cyclic: bool,
    pub accessible: bool,
    pub coaccessible: bool,
}

pub fn properties<W>(fst: &VectorFst<W>) -> Properties {
    let mut props = Properties {
        acceptor: fst.is_acceptor(),
        ilabel_sorted: true,
        olabel_sorted: true,
        accessible: accessible_states(fst).into_iter().all(|a| a),
        coaccessible: coaccessible_states(fst).into_iter().all(|c| c),
        ..Properties::default()
    };

    for state in fst.states() {
        let arcs = fst.arcs(state);
        props.epsilons |= arcs
            .iter()
            .any(|arc| arc.ilabel == EPSILON && arc.olabel == EPSILON);
        props.ilabel_sorted &= arcs.windows(2).all(|w| w[0].ilabel <= w[1].ilabel);
        props.olabel_sorted &= arcs.windows(2).all(|w| w[0].olabel <= w[1].olabel);
    }

    for event in DfsVisit::new(fst) {
        if let DfsEvent::BackArc { arc, .. } = event {
            props.cyclic = true;
            props.initial_cyclic |= Some(arc.nextstate) == fst.start();
        }
    }

    props
}

impl Display for Properties {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let rows = [
            ("acceptor", self.acceptor),
            ("epsilons", self.epsilons),
            ("input label sorted", self.ilabel_sorted),
            ("output label sorted", self.olabel_sorted),
            ("cyclic", self.cyclic),
            ("initial cyclic", self.initial_cyclic),
            ("accessible", self.accessible),
            ("coaccessible", self.coaccessible),
        ];
        for &(name, value) in rows.iter() {
            writeln!(f, "{:<24}{}", name, if value { "y" } else { "n" })?;
        }
        Ok(())
    }
}
