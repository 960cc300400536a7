use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use num_traits::{One, Zero};

use super::{Arc, Label, StateId, VectorFst};
use crate::error::FstError;

/// Reads the AT&T text format: one arc `src dst ilabel olabel [weight]` or one
/// final state `state [weight]` per line. The first line names the start
/// state, `#` starts a comment and missing weights are `W::one()`.
impl<W> FromStr for VectorFst<W>
where
    W: FromStr + Zero + One,
{
    type Err = FstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fst = VectorFst::new();

        for (index, raw) in s.lines().enumerate() {
            let line = index + 1;
            let content = match raw.find('#') {
                Some(comment) => &raw[..comment],
                None => raw,
            };
            let fields: Vec<&str> = content.split_whitespace().collect();

            match fields.len() {
                0 => (),
                1 | 2 => {
                    let state = parse_state(fields[0], line)?;
                    ensure_state(&mut fst, state);
                    if fst.start().is_none() {
                        fst.set_start(state)?;
                    }
                    let weight = match fields.get(1) {
                        Some(w) => parse_weight(w, line)?,
                        None => W::one(),
                    };
                    fst.set_final(state, weight)?;
                }
                4 | 5 => {
                    let from = parse_state(fields[0], line)?;
                    let to = parse_state(fields[1], line)?;
                    ensure_state(&mut fst, from.max(to));
                    let ilabel = parse_label(fields[2], line)?;
                    let olabel = parse_label(fields[3], line)?;
                    let weight = match fields.get(4) {
                        Some(w) => parse_weight(w, line)?,
                        None => W::one(),
                    };
                    if fst.start().is_none() {
                        fst.set_start(from)?;
                    }
                    fst.add_arc(from, Arc::new(ilabel, olabel, weight, to))?;
                }
                n => {
                    return Err(FstError::Parse {
                        line,
                        message: format!("expected 1, 2, 4 or 5 fields, found {}", n),
                    })
                }
            }
        }

        Ok(fst)
    }
}

fn ensure_state<W>(fst: &mut VectorFst<W>, state: StateId) {
    if state >= fst.num_states() {
        fst.add_states(state + 1 - fst.num_states());
    }
}

fn parse_state(s: &str, line: usize) -> Result<StateId, FstError> {
    s.parse().map_err(|_| FstError::Parse {
        line,
        message: format!("`{}` is not a state", s),
    })
}

fn parse_label(s: &str, line: usize) -> Result<Label, FstError> {
    s.parse().map_err(|_| FstError::Parse {
        line,
        message: format!("`{}` is not a label", s),
    })
}

fn parse_weight<W: FromStr>(s: &str, line: usize) -> Result<W, FstError> {
    s.parse().map_err(|_| FstError::Parse {
        line,
        message: format!("`{}` is not a weight", s),
    })
}

/// Writes the AT&T text format, start state first. A start state without
/// arcs that is not final cannot be represented and is lost.
impl<W: Display> Display for VectorFst<W> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let rest = self.states().filter(|&s| Some(s) != self.start);
        for state in self.start.into_iter().chain(rest) {
            for arc in self.arcs(state) {
                writeln!(
                    f,
                    "{}\t{}\t{}\t{}\t{}",
                    state, arc.nextstate, arc.ilabel, arc.olabel, arc.weight
                )?;
            }
            if let Some(weight) = self.final_weight(state) {
                writeln!(f, "{}\t{}", state, weight)?;
            }
        }
        Ok(())
    }
}
