use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use rustomata_fst::{Probability, SymbolTable, VectorFst};

/// The optional positional argument naming the automaton file.
pub fn input_arg(index: u64) -> Arg<'static, 'static> {
    Arg::with_name("fst")
        .help("automaton in AT&T text format (default: stdin)")
        .index(index)
}

/// Reads the automaton named by the `fst` argument, or stdin.
pub fn read_fst(matches: &ArgMatches) -> Result<VectorFst<Probability>> {
    let text = match matches.value_of("fst") {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read automaton {}", path))?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read automaton from stdin")?;
            text
        }
    };
    let fst = text
        .parse::<VectorFst<Probability>>()
        .context("malformed automaton")?;
    Ok(fst)
}

pub fn read_symbols(path: &str) -> Result<SymbolTable> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read symbol table {}", path))?;
    let table = text
        .parse::<SymbolTable>()
        .with_context(|| format!("malformed symbol table {}", path))?;
    Ok(table)
}

pub fn write_symbols(path: &str, table: Option<&SymbolTable>) -> Result<()> {
    let text = table.map(|t| t.to_string()).unwrap_or_default();
    fs::write(path, text).with_context(|| format!("cannot write symbol table {}", path))
}
