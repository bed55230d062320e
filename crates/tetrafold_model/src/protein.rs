// Copyright contributors to the Tetrafold project

use log::debug;
use tetrafold_common::constants::{FIFTH_BEAD_INDEX, MIN_CHAIN_LENGTH};
use tetrafold_common::{ConformationEncoding, FoldError};

use crate::chain::{MainChain, SideChain};
use crate::interaction::Interaction;

/// A protein: backbone plus one side-chain slot per residue.
///
/// Immutable after construction; every map and builder reads it without
/// copying the chains.
#[derive(Debug, Clone)]
pub struct Protein {
    main_chain: MainChain,
    side_chain: SideChain,
    encoding: ConformationEncoding,
}

impl Protein {
    /// Validates the sequences against the interaction model and builds
    /// both chains.
    pub fn new(
        main_sequence: &str,
        side_sequence: &str,
        interaction: &dyn Interaction,
        encoding: ConformationEncoding,
    ) -> Result<Self, FoldError> {
        let main_len = main_sequence.chars().count();
        let side_len = side_sequence.chars().count();
        if main_len != side_len || main_len < MIN_CHAIN_LENGTH {
            return Err(FoldError::ChainLength {
                main: main_len,
                side: side_len,
                minimum: MIN_CHAIN_LENGTH,
            });
        }

        let main_chain = MainChain::new(main_sequence, interaction, encoding)?;
        let side_chain = SideChain::new(side_sequence)?;
        debug!("protein {main_sequence}/{side_sequence} constructed ({encoding} encoding)");

        Ok(Protein {
            main_chain,
            side_chain,
            encoding,
        })
    }

    pub fn main_chain(&self) -> &MainChain {
        &self.main_chain
    }

    pub fn side_chain(&self) -> &SideChain {
        &self.side_chain
    }

    pub fn encoding(&self) -> ConformationEncoding {
        self.encoding
    }

    /// Number of residues in the main chain.
    pub fn len(&self) -> usize {
        self.main_chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main_chain.is_empty()
    }

    /// Whether the fifth main bead carries a real side bead. The lattice
    /// symmetry can only fix the third turn when it does not.
    pub fn fifth_bead_has_side_chain(&self) -> bool {
        self.side_chain.has_side_bead_at(FIFTH_BEAD_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::MjInteraction;

    fn mj() -> MjInteraction {
        MjInteraction::bundled()
    }

    #[test]
    fn accepts_matching_sequences() {
        let protein = Protein::new(
            "APRLR",
            "_____",
            &mj(),
            ConformationEncoding::Dense,
        )
        .unwrap();
        assert_eq!(5, protein.len());
        assert!(!protein.fifth_bead_has_side_chain());
        assert_eq!("APRLR", protein.main_chain().to_string());
    }

    #[test]
    fn rejects_mismatched_chain_lengths() {
        let err = Protein::new("APRLR", "____", &mj(), ConformationEncoding::Dense).unwrap_err();
        assert!(matches!(err, FoldError::ChainLength { main: 5, side: 4, .. }));
    }

    #[test]
    fn rejects_short_chains() {
        let err = Protein::new("APRL", "____", &mj(), ConformationEncoding::Dense).unwrap_err();
        assert!(matches!(err, FoldError::ChainLength { .. }));
    }

    #[test]
    fn rejects_unknown_residues() {
        let err = Protein::new("APXLR", "_____", &mj(), ConformationEncoding::Dense).unwrap_err();
        assert!(matches!(
            err,
            FoldError::UnsupportedAminoAcid { symbol: 'X', .. }
        ));
    }

    #[test]
    fn rejects_real_side_beads() {
        let err = Protein::new("APRLR", "__A__", &mj(), ConformationEncoding::Dense).unwrap_err();
        assert!(matches!(err, FoldError::SideChainsUnsupported));
    }
}
