// Copyright contributors to the Tetrafold project

use log::{debug, info};
use tetrafold_common::FoldError;
use tetrafold_common::constants::{
    BACK_PENALTY, BOUNDING_CONSTANT, COEFF_EPSILON, MJ_ENERGY_MULTIPLIER, OVERLAP_PENALTY,
};
use tetrafold_model::{Interaction, Protein};
use tetrafold_pauli::{PauliOp, qubit_ops};

use crate::{ContactMap, DistanceMap};

/// Assembles the total cost operator from contact flags, distance
/// operators, pair energies and the backtracking penalty.
pub struct HamiltonianBuilder<'a> {
    protein: &'a Protein,
    interaction: &'a dyn Interaction,
    distance_map: &'a DistanceMap,
    contact_map: &'a ContactMap,
}

impl<'a> HamiltonianBuilder<'a> {
    pub fn new(
        protein: &'a Protein,
        interaction: &'a dyn Interaction,
        distance_map: &'a DistanceMap,
        contact_map: &'a ContactMap,
    ) -> Self {
        HamiltonianBuilder {
            protein,
            interaction,
            distance_map,
            contact_map,
        }
    }

    /// Builds and sums all hamiltonian parts, padded to a common qubit
    /// count and simplified.
    pub fn sum_hamiltonians(&self) -> Result<PauliOp, FoldError> {
        debug!("building total hamiltonian");
        let h_backbone = self.backbone_contact_term()?;
        let h_backtrack = self.backtracking_penalty()?;

        let target = h_backbone.num_qubits().max(h_backtrack.num_qubits());
        debug!("padding part hamiltonians to {target} qubits");

        let mut total = PauliOp::zero(target);
        for part in [h_backbone, h_backtrack] {
            total = total.add(&qubit_ops::pad_to_n_qubits(&part, target)?)?;
        }
        let total = total.simplify();

        let imaginary = total.max_imaginary();
        if imaginary > COEFF_EPSILON {
            return Err(FoldError::ResidualImaginary { imaginary });
        }
        info!("finished building total hamiltonian on {} qubits", total.num_qubits());
        Ok(total)
    }

    /// Backbone-backbone contact term: for every pair at least four bonds
    /// and an odd separation apart, the contact flag gates the
    /// first-neighbour expression, and the four shifted pairs gate
    /// second-neighbour expressions.
    fn backbone_contact_term(&self) -> Result<PauliOp, FoldError> {
        debug!("creating the backbone-backbone contact term");
        let chain_len = self.protein.len();
        let qubits_per_turn = self.protein.encoding().qubits_per_turn();
        let width = (chain_len - 1) * (chain_len - 1) + (chain_len - 1) * qubits_per_turn;
        let has_side_bead_at_fifth = self.protein.fifth_bead_has_side_chain();

        let mut h_backbone = PauliOp::zero(width);
        for lower in 0..chain_len.saturating_sub(4) {
            for upper in lower + 4..chain_len {
                if (upper - lower) % 2 == 0 {
                    continue;
                }
                let contact = self.contact_flag(lower, upper)?;

                debug!("first-neighbour contact between beads {lower} and {upper}");
                h_backbone = h_backbone.add(
                    &contact.tensor(&self.first_neighbour(lower, upper, OVERLAP_PENALTY)?),
                )?;

                for (lower_shift, upper_shift) in [(-1_i64, 0_i64), (1, 0), (0, -1), (0, 1)] {
                    let shifted_lower = lower as i64 + lower_shift;
                    let shifted_upper = upper as i64 + upper_shift;
                    if shifted_lower < 0
                        || shifted_upper < 0
                        || shifted_lower >= chain_len as i64
                        || shifted_upper >= chain_len as i64
                    {
                        continue;
                    }
                    debug!(
                        "second-neighbour contact between beads {shifted_lower} and {shifted_upper}"
                    );
                    h_backbone = h_backbone.add(&contact.tensor(&self.second_neighbour(
                        shifted_lower as usize,
                        shifted_upper as usize,
                        OVERLAP_PENALTY,
                    )?))?;
                }

                h_backbone = qubit_ops::fix_qubits(&h_backbone, has_side_bead_at_fifth);
            }
        }

        info!(
            "backbone-backbone contact term built on {} qubits",
            h_backbone.num_qubits()
        );
        Ok(h_backbone)
    }

    /// Penalises consecutive identical turns, which would retrace the
    /// previous bond.
    fn backtracking_penalty(&self) -> Result<PauliOp, FoldError> {
        debug!("creating the backtracking penalty term");
        let chain_len = self.protein.len();
        let width = (chain_len - 1) * self.protein.encoding().qubits_per_turn();

        let mut h_backtrack = PauliOp::zero(width);
        for lower in 1..chain_len - 2 {
            debug!("backtracking penalty between beads {lower} and {}", lower + 1);
            h_backtrack = h_backtrack.add(
                &self.turn_product(lower, lower + 1)?.scaled(BACK_PENALTY),
            )?;
        }

        info!(
            "backtracking penalty term built on {} qubits",
            h_backtrack.num_qubits()
        );
        Ok(qubit_ops::fix_qubits(
            &h_backtrack,
            self.protein.fifth_bead_has_side_chain(),
        ))
    }

    /// `Σₐ tₐ(lower)·tₐ(upper)`: one on configurations where the two
    /// beads take the same turn. Falls back to the zero operator when
    /// either bead lacks turn functions.
    fn turn_product(&self, lower: usize, upper: usize) -> Result<PauliOp, FoldError> {
        let chain_len = self.protein.len();
        let width = (chain_len - 1) * self.protein.encoding().qubits_per_turn();
        let beads = self.protein.main_chain().beads();

        let (Some(lower_funcs), Some(upper_funcs)) =
            (beads[lower].turn_funcs(), beads[upper].turn_funcs())
        else {
            info!("bead pair ({lower}, {}) lacks turn functions, using zero", upper);
            return Ok(PauliOp::zero(width));
        };

        let mut product_sum = PauliOp::zero(width);
        for (lower_func, upper_func) in lower_funcs.iter().zip(upper_funcs.iter()) {
            product_sum = product_sum.add(&lower_func.compose(upper_func)?)?;
        }
        Ok(qubit_ops::fix_qubits(
            &product_sum,
            self.protein.fifth_bead_has_side_chain(),
        ))
    }

    /// First-neighbour expression `λ₀(x − I) + εI` with
    /// `λ₀ = BOUNDING_CONSTANT·(j − i + 1)·λ₁` and `ε` the scaled pair
    /// energy.
    pub fn first_neighbour(
        &self,
        lower: usize,
        upper: usize,
        lambda_1: f64,
    ) -> Result<PauliOp, FoldError> {
        let lambda_0 = BOUNDING_CONSTANT * (upper - lower + 1) as f64 * lambda_1;
        let energy = self.pair_energy(lower, upper)?;
        let x = self.distance(lower, upper)?;
        let identity = PauliOp::identity(x.num_qubits());

        let expression = x
            .sub(&identity)?
            .scaled(lambda_0)
            .add(&identity.scaled(MJ_ENERGY_MULTIPLIER * energy))?;
        Ok(qubit_ops::fix_qubits(
            &expression,
            self.protein.fifth_bead_has_side_chain(),
        ))
    }

    /// Second-neighbour expression `λ₁(2I − x) + εI`.
    pub fn second_neighbour(
        &self,
        lower: usize,
        upper: usize,
        lambda_1: f64,
    ) -> Result<PauliOp, FoldError> {
        let energy = self.pair_energy(lower, upper)?;
        let x = self.distance(lower, upper)?;
        let identity = PauliOp::identity(x.num_qubits());

        let expression = identity
            .scaled(2.0)
            .sub(x)?
            .scaled(lambda_1)
            .add(&identity.scaled(MJ_ENERGY_MULTIPLIER * energy))?;
        Ok(qubit_ops::fix_qubits(
            &expression,
            self.protein.fifth_bead_has_side_chain(),
        ))
    }

    fn pair_energy(&self, lower: usize, upper: usize) -> Result<f64, FoldError> {
        let main_chain = self.protein.main_chain();
        let lower_symbol = main_chain.symbol_at(lower).ok_or_else(|| {
            FoldError::OperatorShape {
                detail: format!("bead index {lower} outside the main chain"),
            }
        })?;
        let upper_symbol = main_chain.symbol_at(upper).ok_or_else(|| {
            FoldError::OperatorShape {
                detail: format!("bead index {upper} outside the main chain"),
            }
        })?;
        self.interaction.get_energy(lower_symbol, upper_symbol)
    }

    fn distance(&self, lower: usize, upper: usize) -> Result<&PauliOp, FoldError> {
        self.distance_map.get(lower, upper).ok_or_else(|| {
            FoldError::OperatorShape {
                detail: format!("no distance operator for pair ({lower}, {upper})"),
            }
        })
    }

    fn contact_flag(&self, lower: usize, upper: usize) -> Result<&PauliOp, FoldError> {
        self.contact_map.get(lower, upper).ok_or_else(|| {
            FoldError::OperatorShape {
                detail: format!("no contact flag for pair ({lower}, {upper})"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrafold_common::ConformationEncoding;
    use tetrafold_model::MjInteraction;

    struct Fixture {
        protein: Protein,
        interaction: MjInteraction,
        distance_map: DistanceMap,
        contact_map: ContactMap,
    }

    impl Fixture {
        fn new(sequence: &str, encoding: ConformationEncoding) -> Self {
            let interaction = MjInteraction::bundled();
            let side = "_".repeat(sequence.len());
            let protein = Protein::new(sequence, &side, &interaction, encoding).unwrap();
            let distance_map = DistanceMap::new(&protein).unwrap();
            let contact_map = ContactMap::new(&protein).unwrap();
            Fixture {
                protein,
                interaction,
                distance_map,
                contact_map,
            }
        }

        fn builder(&self) -> HamiltonianBuilder<'_> {
            HamiltonianBuilder::new(
                &self.protein,
                &self.interaction,
                &self.distance_map,
                &self.contact_map,
            )
        }
    }

    #[test]
    fn first_neighbour_on_a_fixed_pair_is_constant() {
        let fixture = Fixture::new("AAAAA", ConformationEncoding::Dense);
        let builder = fixture.builder();

        // Distance (0, 2) is the constant 2I, so the expression collapses
        // to λ₀ + scaled pair energy.
        let expression = builder.first_neighbour(0, 2, 10.0).unwrap();
        assert_eq!(1, expression.terms().len());
        let (label, coeff) = expression.labels().remove(0);
        assert_eq!("IIIIIIII", label);
        let expected = 7.0 * 3.0 * 10.0 + 0.1 * -2.72;
        assert!((coeff.re - expected).abs() < 1e-9);
        assert!(coeff.im.abs() < 1e-12);
    }

    #[test]
    fn second_neighbour_on_a_fixed_pair_is_constant() {
        let fixture = Fixture::new("AAAAA", ConformationEncoding::Dense);
        let builder = fixture.builder();

        let expression = builder.second_neighbour(0, 2, 10.0).unwrap();
        assert_eq!(1, expression.terms().len());
        let (_, coeff) = expression.labels().remove(0);
        // λ₁(2 − 2) leaves only the scaled pair energy.
        assert!((coeff.re - 0.1 * -2.72).abs() < 1e-9);
    }

    #[test]
    fn minimum_chain_has_an_empty_backbone_term() {
        let fixture = Fixture::new("APRLR", ConformationEncoding::Dense);
        let builder = fixture.builder();
        let h_backbone = builder.backbone_contact_term().unwrap();
        assert_eq!(24, h_backbone.num_qubits());
        assert!(h_backbone.simplify().terms().is_empty());
    }

    #[test]
    fn total_hamiltonian_is_real_and_diagonal() {
        let fixture = Fixture::new("APRLRFY", ConformationEncoding::Dense);
        let builder = fixture.builder();
        let total = builder.sum_hamiltonians().unwrap();
        assert!(total.max_imaginary() < 1e-12);
        assert!(
            total
                .terms()
                .iter()
                .all(|term| term.x.iter().all(|&x| !x))
        );
    }
}
