// Copyright contributors to the Tetrafold project

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use log::info;

use tetrafold_common::FoldError;

use super::Interaction;

/// Miyazawa–Jernigan pairwise contact potentials.
///
/// Parsed from a whitespace-separated table: a header row of residue
/// symbols, then one row per residue holding the upper triangle including
/// the diagonal (row `r` starts at column `r − 1`). Energies are mirrored
/// into a symmetric lookup.
#[derive(Debug, Clone)]
pub struct MjInteraction {
    energy_pairs: HashMap<(char, char), f64>,
    valid_symbols: BTreeSet<char>,
}

impl MjInteraction {
    /// The MJ table shipped with the crate.
    pub fn bundled() -> Self {
        Self::parse(include_str!("../../resources/mj_matrix.txt"))
            .expect("the bundled MJ matrix should parse")
    }

    pub fn from_path(path: &Path) -> Result<Self, FoldError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, FoldError> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header_line = lines.next().ok_or_else(|| FoldError::InteractionMatrix {
            detail: "MJ matrix is empty".to_string(),
        })?;
        let header = parse_header(header_line)?;

        let mut energy_pairs = HashMap::new();
        for (row, line) in lines.enumerate() {
            let row = row + 1;
            let mut tokens = line.split_whitespace();
            let row_symbol = parse_row_symbol(tokens.next(), &header, row)?;

            for (offset, token) in tokens.enumerate() {
                let col = row - 1 + offset;
                let col_symbol = *header.get(col).ok_or_else(|| FoldError::InteractionMatrix {
                    detail: format!("row {row} has more energies than header columns"),
                })?;
                let energy: f64 =
                    token
                        .parse()
                        .map_err(|_| FoldError::InteractionMatrix {
                            detail: format!("'{token}' in row {row} is not an energy"),
                        })?;
                energy_pairs.insert((col_symbol, row_symbol), energy);
                energy_pairs.insert((row_symbol, col_symbol), energy);
            }
        }

        let valid_symbols: BTreeSet<char> = header.into_iter().collect();
        info!(
            "loaded {} MJ energy pairs over {} residue symbols",
            energy_pairs.len(),
            valid_symbols.len()
        );

        Ok(MjInteraction {
            energy_pairs,
            valid_symbols,
        })
    }
}

fn parse_header(line: &str) -> Result<Vec<char>, FoldError> {
    line.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Ok(symbol),
                _ => Err(FoldError::InteractionMatrix {
                    detail: format!("header token '{token}' is not a one-letter symbol"),
                }),
            }
        })
        .collect()
}

fn parse_row_symbol(
    token: Option<&str>,
    header: &[char],
    row: usize,
) -> Result<char, FoldError> {
    let token = token.ok_or_else(|| FoldError::InteractionMatrix {
        detail: format!("row {row} is empty"),
    })?;
    let expected = header.get(row - 1).copied();
    let symbol = token.chars().next().unwrap_or_default();
    if token.chars().count() != 1 || Some(symbol) != expected {
        return Err(FoldError::InteractionMatrix {
            detail: format!(
                "row {row} starts with '{token}' but the header expects '{}'",
                expected.map(String::from).unwrap_or_default()
            ),
        });
    }
    Ok(symbol)
}

impl Interaction for MjInteraction {
    fn name(&self) -> &'static str {
        "MJ"
    }

    fn valid_symbols(&self) -> &BTreeSet<char> {
        &self.valid_symbols
    }

    fn get_energy(&self, symbol_i: char, symbol_j: char) -> Result<f64, FoldError> {
        self.energy_pairs
            .get(&(symbol_i, symbol_j))
            .copied()
            .ok_or_else(|| FoldError::UnsupportedAminoAcid {
                symbol: if self.valid_symbols.contains(&symbol_i) {
                    symbol_j
                } else {
                    symbol_i
                },
                model: self.name(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_matrix_covers_twenty_residues() {
        let mj = MjInteraction::bundled();
        assert_eq!(20, mj.valid_symbols().len());
        assert!(mj.valid_symbols().contains(&'C'));
        assert!(mj.valid_symbols().contains(&'P'));
    }

    #[test]
    fn energies_are_symmetric() {
        let mj = MjInteraction::bundled();
        for (a, b) in [('C', 'M'), ('A', 'R'), ('F', 'P'), ('K', 'K')] {
            assert_eq!(mj.get_energy(a, b).unwrap(), mj.get_energy(b, a).unwrap());
        }
    }

    #[test]
    fn diagonal_entries_match_the_table() {
        let mj = MjInteraction::bundled();
        assert_eq!(-5.44, mj.get_energy('C', 'C').unwrap());
        assert_eq!(-1.75, mj.get_energy('P', 'P').unwrap());
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let mj = MjInteraction::bundled();
        let err = mj.get_energy('A', 'X').unwrap_err();
        assert!(matches!(
            err,
            FoldError::UnsupportedAminoAcid { symbol: 'X', .. }
        ));
    }

    #[test]
    fn small_triangular_matrix_parses() {
        let mj = MjInteraction::parse("A B\nA -1.0 -2.0\nB -3.0\n").unwrap();
        assert_eq!(-1.0, mj.get_energy('A', 'A').unwrap());
        assert_eq!(-2.0, mj.get_energy('A', 'B').unwrap());
        assert_eq!(-2.0, mj.get_energy('B', 'A').unwrap());
        assert_eq!(-3.0, mj.get_energy('B', 'B').unwrap());
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(MjInteraction::parse("").is_err());
        assert!(MjInteraction::parse("A B\nB -1.0\n").is_err());
        assert!(MjInteraction::parse("A B\nA -1.0 oops\n").is_err());
        assert!(MjInteraction::parse("A B\nA -1.0 -2.0 -3.0\n").is_err());
    }
}
