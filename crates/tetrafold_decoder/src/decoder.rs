// Copyright contributors to the Tetrafold project

use std::collections::BTreeMap;

use log::{debug, info, warn};
use nalgebra::Vector3;
use tetrafold_common::constants::{FCC_BASIS, FCC_EDGE_COMPONENT, FIFTH_BEAD_INDEX};
use tetrafold_common::{ConformationEncoding, FoldError, TurnDirection};
use tetrafold_model::Protein;

use crate::models::{BeadPosition, DecodedResult};

/// The four FCC basis vectors, normalised so every row has unit length.
pub fn fcc_basis() -> [Vector3<f64>; 4] {
    FCC_BASIS.map(|row| Vector3::new(row[0], row[1], row[2]) * FCC_EDGE_COMPONENT)
}

/// Decodes a measurement bitstring into turns, coordinates and contacts.
///
/// The tail of the bitstring holds the optimised turn wires ("shape"
/// bits); everything before it holds the contact-register interaction
/// flags. The two leading turns fixed by the lattice symmetry are
/// reinstated, as is the fixed third-turn bit in dense encoding when the
/// fifth bead has no side bead.
pub fn decode_result(protein: &Protein, bitstring: &str) -> Result<DecodedResult, FoldError> {
    if bitstring.is_empty() {
        return Err(FoldError::InvalidResult {
            detail: "empty measurement bitstring".to_string(),
        });
    }
    if let Some(bad) = bitstring.chars().find(|c| *c != '0' && *c != '1') {
        return Err(FoldError::InvalidResult {
            detail: format!("measurement bitstring holds '{bad}'"),
        });
    }

    let encoding = protein.encoding();
    let third_turn_fixed =
        encoding == ConformationEncoding::Dense && !protein.fifth_bead_has_side_chain();

    let shape_len = shape_length(protein);
    if bitstring.len() < shape_len {
        return Err(FoldError::InvalidResult {
            detail: format!(
                "bitstring of {} bits is shorter than the {shape_len} shape bits",
                bitstring.len()
            ),
        });
    }
    let (interaction_bits, shape_bits) = bitstring.split_at(bitstring.len() - shape_len);
    debug!(
        "decoding {} shape bits and {} interaction bits",
        shape_bits.len(),
        interaction_bits.len()
    );
    if third_turn_fixed {
        info!("fifth bead has no side bead, third turn fixed to '1'");
    }

    let turn_sequence = decode_turn_sequence(protein, shape_bits, third_turn_fixed)?;
    log_turn_sequence(&turn_sequence);

    let coordinates = generate_coordinates(protein, &turn_sequence);
    log_coordinates(&coordinates);

    let main_main_contacts = find_main_main_contacts(interaction_bits, protein.len());

    Ok(DecodedResult {
        turn_sequence,
        coordinates,
        main_main_contacts,
    })
}

/// Number of optimised turn wires left after symmetry reduction.
fn shape_length(protein: &Protein) -> usize {
    let qubits_per_turn = protein.encoding().qubits_per_turn();
    let mut length = qubits_per_turn * (protein.len() - 3);
    if protein.encoding() == ConformationEncoding::Dense && !protein.fifth_bead_has_side_chain() {
        length -= 1;
    }
    length
}

/// Reassembles the full turn bitstring and reads one group per bond.
///
/// The reversed codes of the two symmetry-fixed turns are appended to
/// the shape bits, the fixed third-turn bit is inserted five places from
/// the end, and the whole string is reversed once into the encoder's
/// wire order. Reversing the concatenation reverses the piece order too,
/// so the leading groups decode as DIR_1 followed by DIR_0 — the same
/// pair the symmetry reduction forces on the compiled operator.
fn decode_turn_sequence(
    protein: &Protein,
    shape_bits: &str,
    third_turn_fixed: bool,
) -> Result<Vec<TurnDirection>, FoldError> {
    let encoding = protein.encoding();
    let qubits_per_turn = encoding.qubits_per_turn();

    let mut assembled = String::from(shape_bits);
    assembled.extend(TurnDirection::Dir0.code(encoding).chars().rev());
    assembled.extend(TurnDirection::Dir1.code(encoding).chars().rev());
    if third_turn_fixed {
        assembled.insert(assembled.len() - (FIFTH_BEAD_INDEX + 1), '1');
    }
    let processed: Vec<char> = assembled.chars().rev().collect();

    processed
        .chunks(qubits_per_turn)
        .map(|chunk| {
            let group: String = chunk.iter().collect();
            TurnDirection::from_code(&group, encoding).ok_or_else(|| {
                FoldError::ConformationEncoding {
                    detail: format!("unknown turn group '{group}'"),
                }
            })
        })
        .collect()
}

/// Walks the FCC basis with alternating sublattice sign.
fn generate_coordinates(protein: &Protein, turns: &[TurnDirection]) -> Vec<BeadPosition> {
    let basis = fcc_basis();
    let symbols: Vec<char> = protein
        .main_chain()
        .beads()
        .iter()
        .map(|bead| bead.symbol())
        .collect();

    let mut position = Vector3::zeros();
    let mut coordinates = vec![BeadPosition::new(0, symbols[0], &position)];
    for (bond, turn) in turns.iter().enumerate() {
        let sign = if bond % 2 == 0 { 1.0 } else { -1.0 };
        position += basis[turn.index()] * sign;
        coordinates.push(BeadPosition::new(bond + 1, symbols[bond + 1], &position));
    }
    coordinates
}

/// Reads the interaction flags from the head of the bitstring, one bit
/// per admissible pair in `(i, j)` order with `j` stepping by two.
fn find_main_main_contacts(interaction_bits: &str, num_beads: usize) -> BTreeMap<usize, usize> {
    let bits: Vec<char> = interaction_bits.chars().collect();
    let mut contacts = BTreeMap::new();
    let mut cursor = 0;

    'pairs: for lower in 0..num_beads.saturating_sub(5) {
        for upper in (lower + 5..num_beads).step_by(2) {
            if cursor >= bits.len() {
                warn!("ran out of interaction bits while checking pair ({lower}, {upper})");
                break 'pairs;
            }
            if bits[cursor] == '1' {
                contacts.insert(lower, upper);
            }
            cursor += 1;
        }
    }
    if cursor < bits.len() {
        warn!("{} interaction bits were left over", bits.len() - cursor);
    }
    contacts
}

fn log_turn_sequence(turns: &[TurnDirection]) {
    info!("turn sequence decoded for {} turns", turns.len());
    for (index, turn) in turns.iter().enumerate() {
        info!("turn {:>2} - {} ({})", index + 1, turn.index(), turn);
    }
}

fn log_coordinates(coordinates: &[BeadPosition]) {
    info!("3-D coordinates generated for {} beads", coordinates.len());
    info!("{:>5}  {:>6}{:>12}  {:>12}  {:>12}", "Index", "Symbol", "X", "Y", "Z");
    for bead in coordinates {
        info!(
            "{:>5}  {:>6}{:>12.4}  {:>12.4}  {:>12.4}",
            bead.index, bead.symbol, bead.x, bead.y, bead.z
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrafold_model::MjInteraction;

    fn protein(sequence: &str, encoding: ConformationEncoding) -> Protein {
        let side = "_".repeat(sequence.len());
        Protein::new(sequence, &side, &MjInteraction::bundled(), encoding).unwrap()
    }

    fn assert_close(position: &BeadPosition, expected: [f64; 3]) {
        let scaled: Vec<f64> = expected
            .iter()
            .map(|component| component * FCC_EDGE_COMPONENT)
            .collect();
        assert!((position.x - scaled[0]).abs() < 1e-9, "x of {position:?}");
        assert!((position.y - scaled[1]).abs() < 1e-9, "y of {position:?}");
        assert!((position.z - scaled[2]).abs() < 1e-9, "z of {position:?}");
    }

    #[test]
    fn sparse_minimum_chain_decodes_fixed_and_free_turns() {
        let protein = protein("APRLR", ConformationEncoding::Sparse);
        // The reinstated leading turns decode as DIR_1 then DIR_0; the
        // shape bits select DIR_3 and DIR_2 for the free turns.
        let result = decode_result(&protein, "00100001").unwrap();
        assert_eq!(
            vec![
                TurnDirection::Dir1,
                TurnDirection::Dir0,
                TurnDirection::Dir3,
                TurnDirection::Dir2,
            ],
            result.turn_sequence
        );

        // Origin, then the alternating-sign walk along the FCC basis.
        assert_eq!(5, result.coordinates.len());
        assert_close(&result.coordinates[0], [0.0, 0.0, 0.0]);
        assert_close(&result.coordinates[1], [1.0, 1.0, -1.0]);
        assert_close(&result.coordinates[2], [2.0, 0.0, -2.0]);
        assert_close(&result.coordinates[3], [3.0, -1.0, -1.0]);
        assert_close(&result.coordinates[4], [4.0, 0.0, 0.0]);
    }

    #[test]
    fn dense_chain_without_fifth_side_bead_reinstates_the_third_turn() {
        let protein = protein("APRLRF", ConformationEncoding::Dense);
        let result = decode_result(&protein, "10110").unwrap();
        assert_eq!(
            vec![
                TurnDirection::Dir1,
                TurnDirection::Dir0,
                TurnDirection::Dir1,
                TurnDirection::Dir3,
                TurnDirection::Dir1,
            ],
            result.turn_sequence
        );
    }

    #[test]
    fn consecutive_beads_are_unit_distance_apart() {
        let protein = protein("APRLRF", ConformationEncoding::Dense);
        let result = decode_result(&protein, "10110").unwrap();
        for pair in result.coordinates.windows(2) {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            let dz = pair[1].z - pair[0].z;
            let length = (dx * dx + dy * dy + dz * dz).sqrt();
            assert!((length - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn bond_vectors_match_the_signed_basis() {
        let protein = protein("APRLRF", ConformationEncoding::Dense);
        let result = decode_result(&protein, "10110").unwrap();
        let basis = fcc_basis();
        for (bond, pair) in result.coordinates.windows(2).enumerate() {
            let sign = if bond % 2 == 0 { 1.0 } else { -1.0 };
            let expected = basis[result.turn_sequence[bond].index()] * sign;
            assert!((pair[1].x - pair[0].x - expected.x).abs() < 1e-9);
            assert!((pair[1].y - pair[0].y - expected.y).abs() < 1e-9);
            assert!((pair[1].z - pair[0].z - expected.z).abs() < 1e-9);
        }
    }

    #[test]
    fn interaction_bits_are_read_in_pair_order() {
        // N = 7 visits (0, 5) then (1, 6); both flags set.
        let protein = protein("APRLRFY", ConformationEncoding::Dense);
        let shape = "0000000";
        let result = decode_result(&protein, &format!("11{shape}")).unwrap();
        assert_eq!(
            BTreeMap::from([(0, 5), (1, 6)]),
            result.main_main_contacts
        );

        let result = decode_result(&protein, &format!("01{shape}")).unwrap();
        assert_eq!(BTreeMap::from([(1, 6)]), result.main_main_contacts);
    }

    #[test]
    fn missing_interaction_bits_stop_the_scan() {
        let protein = protein("APRLRFY", ConformationEncoding::Dense);
        // One interaction bit for two admissible pairs: the scan stops
        // after (0, 5) without failing.
        let result = decode_result(&protein, "10000000").unwrap();
        assert_eq!(BTreeMap::from([(0, 5)]), result.main_main_contacts);
    }

    #[test]
    fn unknown_turn_group_is_rejected() {
        let protein = protein("APRLR", ConformationEncoding::Sparse);
        // The last free turn group decodes to 0000.
        let err = decode_result(&protein, "00000001").unwrap_err();
        assert!(matches!(err, FoldError::ConformationEncoding { .. }));
    }

    #[test]
    fn malformed_bitstrings_are_rejected() {
        let protein = protein("APRLR", ConformationEncoding::Sparse);
        assert!(matches!(
            decode_result(&protein, ""),
            Err(FoldError::InvalidResult { .. })
        ));
        assert!(matches!(
            decode_result(&protein, "0101"),
            Err(FoldError::InvalidResult { .. })
        ));
        assert!(matches!(
            decode_result(&protein, "0010a001"),
            Err(FoldError::InvalidResult { .. })
        ));
    }

    #[test]
    fn shape_length_counts_free_wires() {
        assert_eq!(
            8,
            shape_length(&protein("APRLR", ConformationEncoding::Sparse))
        );
        assert_eq!(
            3,
            shape_length(&protein("APRLR", ConformationEncoding::Dense))
        );
        assert_eq!(
            5,
            shape_length(&protein("APRLRF", ConformationEncoding::Dense))
        );
    }
}
