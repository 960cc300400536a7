use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::fst::{Label, StateId};

/// One of the two tapes of a transducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tape {
    Input,
    Output,
}

impl Display for Tape {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Tape::Input => write!(f, "input"),
            Tape::Output => write!(f, "output"),
        }
    }
}

/// Errors reported by the automaton primitives and passed on unchanged by the
/// operations built on top of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FstError {
    #[error("state {0} does not exist")]
    NoSuchState(StateId),

    #[error("state order of length {len} is not a permutation of {num_states} states")]
    InvalidStateOrder { len: usize, num_states: usize },

    #[error("label pair ({0}, {1}) does not fit into a single label")]
    LabelOverflow(Label, Label),

    #[error("automaton has no {0} symbol table")]
    MissingSymbolTable(Tape),

    #[error("symbol `{0}` is not of the form `<input>:<output>`")]
    UnpairableSymbol(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, FstError>;
