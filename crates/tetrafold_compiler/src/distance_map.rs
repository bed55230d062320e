// Copyright contributors to the Tetrafold project

use std::collections::BTreeMap;

use log::{debug, info};
use tetrafold_common::FoldError;
use tetrafold_common::constants::DIST_VECTOR_AXES;
use tetrafold_model::Protein;
use tetrafold_pauli::{PauliOp, qubit_ops};

/// Squared chain-chain distance operators for every ordered main-chain
/// pair, on the shared turn register.
///
/// For a pair `(i, j)` the four axis accumulators collect the
/// sublattice-signed turn functions of the intermediate beads; each axis
/// is symmetry-fixed, squared, and summed into the entry. The result is
/// diagonal in the turn-register computational basis.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    distances: BTreeMap<(usize, usize), PauliOp>,
    num_turn_qubits: usize,
}

impl DistanceMap {
    pub fn new(protein: &Protein) -> Result<Self, FoldError> {
        let chain_len = protein.len();
        let num_turn_qubits = (chain_len - 1) * protein.encoding().qubits_per_turn();
        let has_side_bead_at_fifth = protein.fifth_bead_has_side_chain();
        let mut distances = BTreeMap::new();

        debug!("initializing distance map on {num_turn_qubits} qubits");
        for lower in 0..chain_len {
            for upper in lower + 1..chain_len {
                let mut axes = vec![PauliOp::zero(num_turn_qubits); DIST_VECTOR_AXES];

                for (offset, bead) in protein.main_chain().beads()[lower..upper]
                    .iter()
                    .enumerate()
                {
                    let intermediate = lower + offset;
                    let Some(turn_funcs) = bead.turn_funcs() else {
                        debug!(
                            "skipping bead {intermediate} in pair ({lower}, {upper}): no turn functions"
                        );
                        continue;
                    };
                    let sign = if intermediate % 2 == 0 { 1.0 } else { -1.0 };
                    for (axis, turn_func) in axes.iter_mut().zip(turn_funcs.iter()) {
                        *axis = axis.add(&turn_func.scaled(sign))?;
                    }
                }

                let mut entry = PauliOp::zero(num_turn_qubits);
                for axis in &axes {
                    let fixed = qubit_ops::fix_qubits(axis, has_side_bead_at_fifth);
                    entry = entry.add(&fixed.compose(&fixed)?)?;
                }
                let entry = qubit_ops::fix_qubits(&entry, has_side_bead_at_fifth);

                debug!("distance operator for pair ({lower}, {upper}) computed");
                distances.insert((lower, upper), entry);
            }
        }

        info!("distance map initialized with {} entries", distances.len());
        Ok(DistanceMap {
            distances,
            num_turn_qubits,
        })
    }

    pub fn get(&self, lower: usize, upper: usize) -> Option<&PauliOp> {
        self.distances.get(&(lower, upper))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn num_turn_qubits(&self) -> usize {
        self.num_turn_qubits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrafold_common::ConformationEncoding;
    use tetrafold_model::MjInteraction;

    fn protein(sequence: &str, encoding: ConformationEncoding) -> Protein {
        let side = "_".repeat(sequence.len());
        Protein::new(sequence, &side, &MjInteraction::bundled(), encoding).unwrap()
    }

    #[test]
    fn covers_every_ordered_pair() {
        let map = DistanceMap::new(&protein("APRLR", ConformationEncoding::Dense)).unwrap();
        assert_eq!(10, map.len());
        assert_eq!(8, map.num_turn_qubits());
        assert!(map.get(2, 1).is_none());
    }

    #[test]
    fn adjacent_beads_sit_at_unit_distance() {
        // The dense turn functions partition the identity, so a single
        // bond always contributes exactly one unit of squared distance.
        let map = DistanceMap::new(&protein("APRLR", ConformationEncoding::Dense)).unwrap();
        let width = map.num_turn_qubits();
        for lower in 0..4 {
            let entry = map.get(lower, lower + 1).unwrap();
            assert_eq!(
                PauliOp::identity(width).simplify(),
                entry.simplify(),
                "pair ({lower}, {})",
                lower + 1
            );
        }
    }

    #[test]
    fn fixed_leading_turns_make_short_distances_constant() {
        // Both turns of the pair (0, 2) are forced by the symmetry, so the
        // squared distance collapses to a constant.
        let map = DistanceMap::new(&protein("APRLR", ConformationEncoding::Dense)).unwrap();
        let entry = map.get(0, 2).unwrap();
        assert_eq!(
            PauliOp::identity(8).scaled(2.0).simplify(),
            entry.simplify()
        );
    }

    #[test]
    fn entries_are_diagonal_with_real_coefficients() {
        let map = DistanceMap::new(&protein("APRLRF", ConformationEncoding::Dense)).unwrap();
        for (&(lower, upper), entry) in map.distances.iter() {
            assert!(
                entry.terms().iter().all(|term| term.x.iter().all(|&x| !x)),
                "pair ({lower}, {upper}) has X support"
            );
            assert!(entry.max_imaginary() < 1e-12);
        }
    }
}
