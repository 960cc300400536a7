use std::rc::Rc;

use proptest::prelude::*;
use rustomata_fst::{
    acceptor_to_transducer, acceptor_to_transducer_with_symbols, pair, transducer_to_acceptor,
    transducer_to_acceptor_with_symbols, unpair, Arc, Label, StateId, SymbolTable, VectorFst,
};

fn transducer(arcs: &[(StateId, StateId, Label, Label, u32)]) -> VectorFst<u32> {
    let mut fst = VectorFst::new();
    fst.add_states(4);
    fst.set_start(0).unwrap();
    fst.set_final(3, 7).unwrap();
    for &(from, to, ilabel, olabel, weight) in arcs {
        fst.add_arc(from, Arc::new(ilabel, olabel, weight, to))
            .unwrap();
    }
    fst
}

#[test]
fn test_unpair_inverts_pair_on_small_codes() {
    for z in 0..100_000 {
        let (x, y) = unpair(z);
        assert_eq!(Some(z), pair(x, y));
    }
}

#[test]
fn test_unpair_at_the_end_of_the_label_range() {
    let z = Label::max_value();
    let (x, y) = unpair(z);
    assert_eq!(Some(z), pair(x, y));
    assert_eq!(None, pair(x, y + 1));
}

proptest! {
    #[test]
    fn test_pairing_is_a_bijection(x in 0u64..100_000, y in 0u64..100_000) {
        let z = pair(x, y).unwrap();
        prop_assert_eq!((x, y), unpair(z));
    }

    #[test]
    fn test_pairing_is_exact_for_large_labels(x in 0u64..1 << 31, y in 0u64..1 << 31) {
        let z = pair(x, y).unwrap();
        prop_assert_eq!((x, y), unpair(z));
    }

    #[test]
    fn test_acceptor_round_trip(
        arcs in prop::collection::vec(
            (0usize..4, 0usize..4, 0u64..1 << 20, 0u64..1 << 20, 1u32..10),
            0..20,
        )
    ) {
        let original = transducer(&arcs);
        let mut fst = original.clone();

        transducer_to_acceptor(&mut fst).unwrap();
        prop_assert!(fst.is_acceptor());
        for state in fst.states() {
            for arc in fst.arcs(state) {
                prop_assert_eq!(arc.ilabel, arc.olabel);
            }
        }

        acceptor_to_transducer(&mut fst);
        prop_assert_eq!(original.is_acceptor(), fst.is_acceptor());
        prop_assert_eq!(original, fst);
    }
}

#[test]
fn test_overflowing_labels_are_reported() {
    let mut fst = transducer(&[(0, 1, 1, 2, 1), (1, 3, Label::max_value(), 1, 1)]);
    let before = fst.clone();

    assert!(transducer_to_acceptor(&mut fst).is_err());
    assert_eq!(before, fst);
    assert!(!fst.is_acceptor());
}

#[test]
fn test_symbol_tables_round_trip() {
    let input: SymbolTable = vec!["<eps>", "a", "b"].into_iter().collect();
    let output: SymbolTable = vec!["<eps>", "x", "y", "z"].into_iter().collect();

    let mut fst = transducer(&[(0, 1, 1, 3, 1), (1, 3, 2, 0, 1)]);
    fst.set_input_symbols(Some(Rc::new(input.clone())));
    fst.set_output_symbols(Some(Rc::new(output.clone())));

    transducer_to_acceptor_with_symbols(&mut fst).unwrap();

    let combined = fst.input_symbols().unwrap();
    assert_eq!(12, combined.num_symbols());
    assert_eq!(Some("a:z"), combined.find_symbol(fst.arcs(0)[0].ilabel));
    assert_eq!(Some("b:<eps>"), combined.find_symbol(fst.arcs(1)[0].ilabel));
    assert_eq!(fst.input_symbols(), fst.output_symbols());

    acceptor_to_transducer_with_symbols(&mut fst).unwrap();

    assert_eq!(Some(&input), fst.input_symbols());
    assert_eq!(Some(&output), fst.output_symbols());
    assert_eq!(&[Arc::new(1, 3, 1, 1)], fst.arcs(0));
}
