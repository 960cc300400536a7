//! Transformations of weighted finite-state transducers that go beyond the
//! usual toolbox: canonical state numbering, restriction to states with
//! infinite words, re-encoding of transducers as acceptors with the Cantor
//! pairing function, and derivatives with respect to a single transition.

pub mod canonical;
pub mod derivative;
pub mod error;
pub mod fst;
pub mod omega;
pub mod pairing;
pub mod symbol_table;
pub mod weight;

pub use crate::canonical::canonize;
pub use crate::derivative::derivative;
pub use crate::error::{FstError, Result, Tape};
pub use crate::fst::{Arc, Label, StateId, VectorFst};
pub use crate::omega::omega_words;
pub use crate::pairing::{
    acceptor_to_transducer, acceptor_to_transducer_with_symbols, pair, transducer_to_acceptor,
    transducer_to_acceptor_with_symbols, unpair,
};
pub use crate::symbol_table::SymbolTable;
pub use crate::weight::Probability;
