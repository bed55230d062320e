// Copyright contributors to the Tetrafold project

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;

use tetrafold_common::FoldError;
use tetrafold_common::constants::{HP_HH_CONTACT_ENERGY, HP_NON_HH_CONTACT_ENERGY};

use super::Interaction;

/// Hydrophobic/polar lattice model.
///
/// Parsed from a two-column file of `<symbol> <0|1>` lines (`#` starts a
/// comment); flag 1 marks a hydrophobic residue. Only
/// hydrophobic-hydrophobic contacts carry energy.
#[derive(Debug, Clone)]
pub struct HpInteraction {
    hydrophobic: BTreeSet<char>,
    valid_symbols: BTreeSet<char>,
}

impl HpInteraction {
    /// The HP classification shipped with the crate.
    pub fn bundled() -> Self {
        Self::parse(include_str!("../../resources/hp_matrix.txt"))
            .expect("the bundled HP matrix should parse")
    }

    pub fn from_path(path: &Path) -> Result<Self, FoldError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, FoldError> {
        let mut hydrophobic = BTreeSet::new();
        let mut valid_symbols = BTreeSet::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let symbol_token = tokens.next().unwrap_or_default();
            let flag_token = tokens.next().unwrap_or_default();

            let mut symbol_chars = symbol_token.chars();
            let symbol = match (symbol_chars.next(), symbol_chars.next()) {
                (Some(symbol), None) => symbol,
                _ => {
                    return Err(FoldError::InteractionMatrix {
                        detail: format!("'{symbol_token}' is not a one-letter symbol"),
                    });
                }
            };

            match flag_token {
                "1" => {
                    hydrophobic.insert(symbol);
                }
                "0" => {}
                other => {
                    return Err(FoldError::InteractionMatrix {
                        detail: format!("flag '{other}' for symbol '{symbol}' is not 0 or 1"),
                    });
                }
            }
            valid_symbols.insert(symbol);
        }

        debug!(
            "loaded {} hydrophobic and {} polar symbols from the HP matrix",
            hydrophobic.len(),
            valid_symbols.len() - hydrophobic.len()
        );

        Ok(HpInteraction {
            hydrophobic,
            valid_symbols,
        })
    }

    fn is_hydrophobic(&self, symbol: char) -> bool {
        self.hydrophobic.contains(&symbol)
    }
}

impl Interaction for HpInteraction {
    fn name(&self) -> &'static str {
        "HP"
    }

    fn valid_symbols(&self) -> &BTreeSet<char> {
        &self.valid_symbols
    }

    fn get_energy(&self, symbol_i: char, symbol_j: char) -> Result<f64, FoldError> {
        for symbol in [symbol_i, symbol_j] {
            if !self.valid_symbols.contains(&symbol) {
                return Err(FoldError::UnsupportedAminoAcid {
                    symbol,
                    model: self.name(),
                });
            }
        }
        if self.is_hydrophobic(symbol_i) && self.is_hydrophobic(symbol_j) {
            Ok(HP_HH_CONTACT_ENERGY)
        } else {
            Ok(HP_NON_HH_CONTACT_ENERGY)
        }
    }
}
