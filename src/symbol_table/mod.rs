mod from_str;

use std::collections::BTreeMap;
use std::iter::FromIterator;

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::fst::Label;

/// A bijection between labels and symbol names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: BTreeMap<Label, String>,
    keys: FnvHashMap<String, Label>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Adds `symbol` under the next available key. Returns the key `symbol`
    /// is stored under, which is its old key if it was already present.
    pub fn add_symbol(&mut self, symbol: &str) -> Label {
        match self.keys.get(symbol) {
            Some(&key) => key,
            None => {
                let key = self.available_key();
                self.add_symbol_with_key(symbol, key)
            }
        }
    }

    /// Adds `symbol` under `key` unless `symbol` is already present, in which
    /// case its existing key is returned. A symbol previously stored under
    /// `key` is replaced.
    pub fn add_symbol_with_key(&mut self, symbol: &str, key: Label) -> Label {
        if let Some(&existing) = self.keys.get(symbol) {
            return existing;
        }
        if let Some(replaced) = self.symbols.insert(key, symbol.to_string()) {
            self.keys.remove(&replaced);
        }
        self.keys.insert(symbol.to_string(), key);
        key
    }

    pub fn find_key(&self, symbol: &str) -> Option<Label> {
        self.keys.get(symbol).cloned()
    }

    pub fn find_symbol(&self, key: Label) -> Option<&str> {
        self.symbols.get(&key).map(String::as_str)
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.keys.contains_key(symbol)
    }

    pub fn contains_key(&self, key: Label) -> bool {
        self.symbols.contains_key(&key)
    }

    pub fn num_symbols(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// One more than the largest key in use, `0` for an empty table. If the
    /// largest key is `Label::max_value()`, the smallest unused key.
    pub fn available_key(&self) -> Label {
        match self.symbols.keys().next_back() {
            None => 0,
            Some(&key) if key < Label::max_value() => key + 1,
            Some(_) => (0..)
                .zip(self.symbols.keys())
                .find(|&(free, &key)| free != key)
                .map_or(self.symbols.len() as Label, |(free, _)| free),
        }
    }

    pub fn remove_symbol(&mut self, key: Label) -> Option<String> {
        let symbol = self.symbols.remove(&key)?;
        self.keys.remove(&symbol);
        Some(symbol)
    }

    /// The `n`-th key in increasing order.
    pub fn nth_key(&self, n: usize) -> Option<Label> {
        self.symbols.keys().nth(n).cloned()
    }

    /// Adds the symbols of `other` that are not yet present under fresh keys.
    pub fn add_table(&mut self, other: &SymbolTable) {
        for (_, symbol) in other.iter() {
            self.add_symbol(symbol);
        }
    }

    /// All entries in increasing key order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &str)> {
        self.symbols.iter().map(|(&key, symbol)| (key, symbol.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for symbol in iter {
            table.add_symbol(symbol.as_ref());
        }
        table
    }
}
