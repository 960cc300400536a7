use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::SymbolTable;
use crate::error::FstError;
use crate::fst::Label;

/// Reads one `symbol key` pair per line; blank lines are skipped.
impl FromStr for SymbolTable {
    type Err = FstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = SymbolTable::new();

        for (index, raw) in s.lines().enumerate() {
            let fields: Vec<&str> = raw.split_whitespace().collect();
            match fields.as_slice() {
                [] => (),
                [symbol, key] => {
                    let key: Label = key.parse().map_err(|_| FstError::Parse {
                        line: index + 1,
                        message: format!("`{}` is not a key", key),
                    })?;
                    table.add_symbol_with_key(symbol, key);
                }
                _ => {
                    return Err(FstError::Parse {
                        line: index + 1,
                        message: "expected a symbol and a key".to_string(),
                    })
                }
            }
        }

        Ok(table)
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (key, symbol) in self.iter() {
            writeln!(f, "{}\t{}", symbol, key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbol_files() {
        let table: SymbolTable = "<eps>\t0\n\na 1\nb   5\n".parse().unwrap();
        assert_eq!(3, table.num_symbols());
        assert_eq!(Some(5), table.find_key("b"));
        assert_eq!("<eps>\t0\na\t1\nb\t5\n", table.to_string());
    }

    #[test]
    fn rejects_malformed_lines() {
        let result: Result<SymbolTable, _> = "a 1\nb\n".parse();
        assert_eq!(
            Err(FstError::Parse {
                line: 2,
                message: "expected a symbol and a key".to_string()
            }),
            result
        );
        assert!("a one".parse::<SymbolTable>().is_err());
    }
}
