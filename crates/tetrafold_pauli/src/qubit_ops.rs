// Copyright contributors to the Tetrafold project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Folding-specific operator builders and the symmetry-reduction passes.

use std::collections::BTreeSet;

use log::debug;
use num_complex::Complex64;
use tetrafold_common::FoldError;
use tetrafold_common::constants::{
    FIFTH_TURN_WIRE, FIXED_TURN_WIRES, NORM_FACTOR, SIGN_FLIP_SECOND_WIRE,
};

use crate::{PauliOp, PauliTerm};

/// Full identity on `num_qubits` wires.
pub fn full_identity(num_qubits: usize) -> PauliOp {
    PauliOp::identity(num_qubits)
}

/// The turn indicator `½(I − Z_k)`: projects wire `z_index` onto |1⟩.
pub fn turn_indicator(z_index: usize, num_qubits: usize) -> Result<PauliOp, FoldError> {
    if z_index >= num_qubits {
        return Err(FoldError::OperatorShape {
            detail: format!("turn indicator on wire {z_index} of {num_qubits} qubits"),
        });
    }
    let mut z_term = PauliTerm::identity(num_qubits, Complex64::new(-NORM_FACTOR, 0.0));
    z_term.z[z_index] = true;
    Ok(PauliOp::with_terms(
        num_qubits,
        vec![
            PauliTerm::identity(num_qubits, Complex64::new(NORM_FACTOR, 0.0)),
            z_term,
        ],
    ))
}

/// Product of Z on every wire in `indices`; the identity for an empty set.
pub fn z_string(num_qubits: usize, indices: &BTreeSet<usize>) -> Result<PauliOp, FoldError> {
    let mut term = PauliTerm::identity(num_qubits, Complex64::new(1.0, 0.0));
    for &wire in indices {
        if wire >= num_qubits {
            return Err(FoldError::OperatorShape {
                detail: format!("Z string wire {wire} outside {num_qubits} qubits"),
            });
        }
        term.z[wire] = true;
    }
    Ok(PauliOp::with_terms(num_qubits, vec![term]))
}

/// Turns a ±1-valued Pauli flag into a 0/1-valued qubit flag, `½(I − op)`.
pub fn to_qubits(op: &PauliOp) -> PauliOp {
    let mut terms = vec![PauliTerm::identity(
        op.num_qubits(),
        Complex64::new(NORM_FACTOR, 0.0),
    )];
    terms.extend(op.scaled(-NORM_FACTOR).terms().iter().cloned());
    PauliOp::with_terms(op.num_qubits(), terms)
}

/// Forces the turn wires fixed by the lattice symmetry.
///
/// The first two turns of the main chain are fixed, which clears the Z
/// bits on wires 0..4; when the fifth main bead carries no side bead the
/// third turn is partially fixed as well and wire 5 is cleared too.
/// Coefficients pick up a sign for a set Z bit on wire 1 (and on wire 5
/// in the no-side-bead case, for operators wider than six wires).
///
/// A single-term operator only has its bits cleared; the sign rules are
/// deliberately skipped there, and downstream eigenvalues depend on that
/// asymmetry.
pub fn fix_qubits(op: &PauliOp, has_side_bead_at_fifth: bool) -> PauliOp {
    let num_qubits = op.num_qubits();

    if op.terms().len() == 1 {
        let mut term = op.terms()[0].clone();
        clear_fixed_bits(&mut term.z, has_side_bead_at_fifth);
        return PauliOp::with_terms(num_qubits, vec![term]).simplify();
    }

    let mut terms = Vec::with_capacity(op.terms().len());
    for term in op.terms() {
        let mut term = term.clone();
        if num_qubits > SIGN_FLIP_SECOND_WIRE && term.z[SIGN_FLIP_SECOND_WIRE] {
            term.coeff = -term.coeff;
        }
        if !has_side_bead_at_fifth
            && num_qubits > FIFTH_TURN_WIRE + 1
            && term.z[FIFTH_TURN_WIRE]
        {
            term.coeff = -term.coeff;
        }
        clear_fixed_bits(&mut term.z, has_side_bead_at_fifth);
        terms.push(term);
    }
    PauliOp::with_terms(num_qubits, terms).simplify()
}

fn clear_fixed_bits(z: &mut [bool], has_side_bead_at_fifth: bool) {
    for &wire in FIXED_TURN_WIRES.iter() {
        if wire < z.len() {
            z[wire] = false;
        }
    }
    if !has_side_bead_at_fifth && FIFTH_TURN_WIRE < z.len() {
        z[FIFTH_TURN_WIRE] = false;
    }
}

/// See [`PauliOp::pad_to`].
pub fn pad_to_n_qubits(op: &PauliOp, target: usize) -> Result<PauliOp, FoldError> {
    if target != op.num_qubits() {
        debug!("padding operator from {} to {target} qubits", op.num_qubits());
    }
    op.pad_to(target)
}

/// See [`PauliOp::unused_qubits`].
pub fn find_unused_qubits(op: &PauliOp) -> Vec<usize> {
    op.unused_qubits()
}

/// See [`PauliOp::remove_unused_qubits`].
pub fn remove_unused_qubits(op: &PauliOp) -> PauliOp {
    op.remove_unused_qubits()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    fn z_on(wire: usize, num_qubits: usize) -> PauliOp {
        PauliOp::from_sparse("Z", &[wire], c(1.0), num_qubits).unwrap()
    }

    #[test]
    fn turn_indicator_is_half_identity_minus_z() {
        let indicator = turn_indicator(1, 4).unwrap();
        let expected =
            PauliOp::from_list(&[("IIII", c(0.5)), ("IIZI", c(-0.5))]).unwrap();
        assert_eq!(expected.simplify(), indicator.simplify());
    }

    #[test]
    fn turn_indicator_is_a_projector() {
        let indicator = turn_indicator(2, 5).unwrap();
        let squared = indicator.compose(&indicator).unwrap();
        assert_eq!(indicator.simplify(), squared.simplify());
    }

    #[test]
    fn turn_indicator_rejects_out_of_range_wire() {
        assert!(turn_indicator(4, 4).is_err());
    }

    #[test]
    fn z_string_on_empty_set_is_identity() {
        let op = z_string(3, &BTreeSet::new()).unwrap();
        assert_eq!(PauliOp::identity(3).simplify(), op.simplify());
    }

    #[test]
    fn z_string_places_every_index() {
        let op = z_string(4, &BTreeSet::from([0, 2])).unwrap();
        let (label, coeff) = op.labels().remove(0);
        assert_eq!("IZIZ", label);
        assert_eq!(c(1.0), coeff);

        assert!(z_string(4, &BTreeSet::from([4])).is_err());
    }

    #[test]
    fn to_qubits_flags_projector() {
        let flag = to_qubits(&z_on(0, 2));
        let expected = PauliOp::from_list(&[("II", c(0.5)), ("IZ", c(-0.5))]).unwrap();
        assert_eq!(expected.simplify(), flag.simplify());
    }

    #[test]
    fn fix_single_term_only_clears_bits() {
        // The sign rules do not run on a one-term operator.
        let fixed = fix_qubits(&z_on(1, 6), false);
        assert_eq!(PauliOp::identity(6).simplify(), fixed.simplify());
    }

    #[test]
    fn fix_multi_term_flips_sign_on_second_wire() {
        let op = z_on(1, 6)
            .add(&PauliOp::identity_scaled(6, c(0.5)))
            .unwrap();
        let fixed = fix_qubits(&op, false);
        assert_eq!(
            PauliOp::identity_scaled(6, c(-0.5)).simplify(),
            fixed.simplify()
        );
    }

    #[test]
    fn fix_flips_sign_on_fifth_wire_without_side_bead() {
        let op = z_on(5, 7)
            .add(&PauliOp::identity_scaled(7, c(0.25)))
            .unwrap();

        let fixed = fix_qubits(&op, false);
        assert_eq!(
            PauliOp::identity_scaled(7, c(-0.75)).simplify(),
            fixed.simplify()
        );

        // With a side bead at the fifth position, wire 5 stays live.
        let kept = fix_qubits(&op, true);
        let expected = z_on(5, 7)
            .add(&PauliOp::identity_scaled(7, c(0.25)))
            .unwrap();
        assert_eq!(expected.simplify(), kept.simplify());
    }

    #[test]
    fn fix_ignores_fifth_wire_on_narrow_operators() {
        // Rule two requires more than six wires; a six-wire operator only
        // has the bit cleared, without the sign.
        let op = z_on(5, 6)
            .add(&PauliOp::identity_scaled(6, c(0.25)))
            .unwrap();
        let fixed = fix_qubits(&op, false);
        assert_eq!(
            PauliOp::identity_scaled(6, c(1.25)).simplify(),
            fixed.simplify()
        );
    }

    #[test]
    fn fix_leaves_x_mask_untouched() {
        let x_term = PauliOp::from_sparse("X", &[1], c(1.0), 6).unwrap();
        let op = x_term.add(&z_on(4, 6)).unwrap();
        let fixed = fix_qubits(&op, false);
        let expected = PauliOp::from_sparse("X", &[1], c(1.0), 6)
            .unwrap()
            .add(&z_on(4, 6))
            .unwrap();
        assert_eq!(expected.simplify(), fixed.simplify());
    }

    #[test]
    fn fix_is_idempotent() {
        let op = z_on(1, 8)
            .add(&z_on(4, 8))
            .unwrap()
            .add(&z_on(5, 8))
            .unwrap()
            .add(&PauliOp::from_sparse("X", &[6], c(0.5), 8).unwrap())
            .unwrap();
        let once = fix_qubits(&op, false);
        let twice = fix_qubits(&once, false);
        assert_eq!(once.simplify(), twice.simplify());
    }

    #[test]
    fn fix_commutes_with_scaling_and_addition() {
        let left = z_on(1, 7).add(&z_on(6, 7)).unwrap();
        let right = z_on(5, 7).add(&z_on(4, 7)).unwrap();

        let scaled = fix_qubits(&left.scaled(3.0), false);
        assert_eq!(scaled.simplify(), fix_qubits(&left, false).scaled(3.0).simplify());

        let summed = fix_qubits(&left.add(&right).unwrap(), false);
        let fixed_then_summed = fix_qubits(&left, false)
            .add(&fix_qubits(&right, false))
            .unwrap();
        assert_eq!(summed.simplify(), fixed_then_summed.simplify());
    }

    #[test]
    fn fix_passes_short_operators_through() {
        // Positions beyond the operator width are ignored.
        let op = PauliOp::from_list(&[("Z", c(1.0)), ("I", c(1.0))]).unwrap();
        let fixed = fix_qubits(&op, false);
        assert_eq!(
            PauliOp::identity_scaled(1, c(2.0)).simplify(),
            fixed.simplify()
        );
    }
}
