//! Re-encoding of transducers as acceptors and back.
//!
//! The two labels of an arc are collapsed into one with the Cantor pairing
//! function `pair(x, y) = (x + y)(x + y + 1)/2 + x`, and split again with its
//! inverse `unpair`. Symbol tables follow along: the combined table names the
//! pair of `a` and `b` as `"a:b"`.

use std::convert::TryFrom;
use std::rc::Rc;

use tracing::debug;

use crate::error::{FstError, Result, Tape};
use crate::fst::{Label, VectorFst};
use crate::symbol_table::SymbolTable;

/// The Cantor pairing of `x` and `y`, or `None` if it exceeds `Label`.
pub fn pair(x: Label, y: Label) -> Option<Label> {
    let sum = u128::from(x) + u128::from(y);
    let z = sum.checked_mul(sum + 1)? / 2 + u128::from(x);
    Label::try_from(z).ok()
}

/// The inverse of `pair`.
///
/// The diagonal `s = x + y` is recovered with an exact integer square root of
/// `8z + 1`, so `unpair(pair(x, y)) == (x, y)` for every pair that `pair`
/// accepts.
pub fn unpair(z: Label) -> (Label, Label) {
    let z = u128::from(z);
    let s = (isqrt(8 * z + 1) - 1) / 2;
    let x = z - s * (s + 1) / 2;
    let y = s * (s + 3) / 2 - z;
    (x as Label, y as Label)
}

fn isqrt(n: u128) -> u128 {
    // the float estimate is off by at most a few units for n < 2^68
    let mut root = (n as f64).sqrt() as u128;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// The cross product of two symbol tables: `"a:b"` is stored under
/// `pair(key(a), key(b))`.
pub fn pair_symbols(input: &SymbolTable, output: &SymbolTable) -> Result<SymbolTable> {
    let mut table = SymbolTable::new();
    for (x, a) in input.iter() {
        for (y, b) in output.iter() {
            let z = pair(x, y).ok_or(FstError::LabelOverflow(x, y))?;
            table.add_symbol_with_key(&format!("{}:{}", a, b), z);
        }
    }
    Ok(table)
}

/// Splits a table produced by `pair_symbols` into an input and an output
/// table. Each symbol is split at its first `:`.
pub fn unpair_symbols(table: &SymbolTable) -> Result<(SymbolTable, SymbolTable)> {
    let mut input = SymbolTable::new();
    let mut output = SymbolTable::new();
    for (z, symbol) in table.iter() {
        let colon = symbol
            .find(':')
            .ok_or_else(|| FstError::UnpairableSymbol(symbol.to_string()))?;
        let (x, y) = unpair(z);
        input.add_symbol_with_key(&symbol[..colon], x);
        output.add_symbol_with_key(&symbol[colon + 1..], y);
    }
    Ok((input, output))
}

/// Replaces the labels `(i, o)` of every arc by `(pair(i, o), pair(i, o))`.
/// Weights and topology are untouched; the result is an acceptor.
///
/// Fails without modifying `fst` if some pair does not fit into a `Label`.
pub fn transducer_to_acceptor<W>(fst: &mut VectorFst<W>) -> Result<()> {
    let mut codes = Vec::new();
    for state in fst.states() {
        for arc in fst.arcs(state) {
            codes.push(
                pair(arc.ilabel, arc.olabel)
                    .ok_or(FstError::LabelOverflow(arc.ilabel, arc.olabel))?,
            );
        }
    }

    let arcs = fst.states.iter_mut().flat_map(|state| state.arcs.iter_mut());
    for (arc, z) in arcs.zip(codes) {
        arc.ilabel = z;
        arc.olabel = z;
    }
    fst.set_acceptor(true);

    debug!(states = fst.num_states(), "encoded transducer as acceptor");
    Ok(())
}

/// Like `transducer_to_acceptor`, and installs the cross product of the input
/// and output symbol tables on both tapes.
pub fn transducer_to_acceptor_with_symbols<W>(fst: &mut VectorFst<W>) -> Result<()> {
    let table = {
        let input = fst
            .input_symbols()
            .ok_or(FstError::MissingSymbolTable(Tape::Input))?;
        let output = fst
            .output_symbols()
            .ok_or(FstError::MissingSymbolTable(Tape::Output))?;
        Rc::new(pair_symbols(input, output)?)
    };

    transducer_to_acceptor(fst)?;
    fst.set_input_symbols(Some(Rc::clone(&table)));
    fst.set_output_symbols(Some(table));
    Ok(())
}

/// Replaces the label `z` of every arc by `unpair(z)` on the input and output
/// tape. The result is an acceptor iff every `z` lies on the diagonal.
pub fn acceptor_to_transducer<W>(fst: &mut VectorFst<W>) {
    let mut acceptor = true;
    for arc in fst.states.iter_mut().flat_map(|state| state.arcs.iter_mut()) {
        let (x, y) = unpair(arc.ilabel);
        acceptor &= x == y;
        arc.ilabel = x;
        arc.olabel = y;
    }
    fst.set_acceptor(acceptor);

    debug!(states = fst.num_states(), acceptor, "decoded acceptor as transducer");
}

/// Like `acceptor_to_transducer`, and splits the input symbol table of `fst`
/// into a new input and output symbol table.
pub fn acceptor_to_transducer_with_symbols<W>(fst: &mut VectorFst<W>) -> Result<()> {
    let (input, output) = {
        let table = fst
            .input_symbols()
            .ok_or(FstError::MissingSymbolTable(Tape::Input))?;
        unpair_symbols(table)?
    };

    acceptor_to_transducer(fst);
    fst.set_input_symbols(Some(Rc::new(input)));
    fst.set_output_symbols(Some(Rc::new(output)));
    Ok(())
}
