// Copyright contributors to the Tetrafold project

use std::fmt;

use log::{debug, info};
use tetrafold_common::constants::EMPTY_SIDECHAIN_PLACEHOLDER;
use tetrafold_common::{ConformationEncoding, FoldError};

use crate::bead::{Bead, MainBead, SideBead};
use crate::interaction::Interaction;

/// The protein backbone: an ordered sequence of main beads.
#[derive(Debug, Clone)]
pub struct MainChain {
    beads: Vec<MainBead>,
}

impl MainChain {
    pub(crate) fn new(
        sequence: &str,
        interaction: &dyn Interaction,
        encoding: ConformationEncoding,
    ) -> Result<Self, FoldError> {
        debug!("initializing main chain from sequence {sequence}");
        let symbols: Vec<char> = sequence.chars().collect();
        for &symbol in &symbols {
            if !interaction.valid_symbols().contains(&symbol) {
                return Err(FoldError::UnsupportedAminoAcid {
                    symbol,
                    model: interaction.name(),
                });
            }
        }

        let beads = symbols
            .iter()
            .enumerate()
            .map(|(index, &symbol)| MainBead::new(symbol, index, symbols.len(), encoding))
            .collect::<Result<Vec<_>, _>>()?;
        info!("main chain {sequence} initialized with {} beads", beads.len());

        Ok(MainChain { beads })
    }

    pub fn len(&self) -> usize {
        self.beads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    pub fn beads(&self) -> &[MainBead] {
        &self.beads
    }

    pub fn get(&self, index: usize) -> Option<&MainBead> {
        self.beads.get(index)
    }

    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.beads.get(index).map(MainBead::symbol)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MainBead> {
        self.beads.iter()
    }
}

impl fmt::Display for MainChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bead in &self.beads {
            write!(f, "{}", bead.symbol())?;
        }
        Ok(())
    }
}

/// Pendant residues attached to the backbone, one slot per main bead.
///
/// A slot is either a real side bead (reserved, currently rejected) or a
/// placeholder keeping the indexing aligned.
#[derive(Debug, Clone)]
pub struct SideChain {
    beads: Vec<Bead>,
}

impl SideChain {
    pub(crate) fn new(sequence: &str) -> Result<Self, FoldError> {
        debug!("initializing side chain from sequence {sequence}");
        let beads = sequence
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                if symbol == EMPTY_SIDECHAIN_PLACEHOLDER {
                    Ok(Bead::Placeholder { symbol, index })
                } else {
                    SideBead::new(symbol, index).map(Bead::Side)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let placeholders = beads
            .iter()
            .filter(|bead| matches!(bead, Bead::Placeholder { .. }))
            .count();
        info!(
            "side chain initialized with {} side beads and {placeholders} placeholders",
            beads.len() - placeholders
        );

        Ok(SideChain { beads })
    }

    pub fn len(&self) -> usize {
        self.beads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    pub fn get(&self, index: usize) -> Option<&Bead> {
        self.beads.get(index)
    }

    /// Whether a real side bead occupies the slot at `index`.
    pub fn has_side_bead_at(&self, index: usize) -> bool {
        matches!(self.beads.get(index), Some(Bead::Side(_)))
    }
}

impl fmt::Display for SideChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bead in &self.beads {
            write!(f, "{}", bead.symbol())?;
        }
        Ok(())
    }
}
