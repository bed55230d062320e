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

//! Numeric constants of the lattice folding model.

/// Prefactor that turns a ±1-valued Pauli flag into a 0/1-valued qubit flag.
pub const NORM_FACTOR: f64 = 0.5;

/// Scales the first-neighbour distance bound with the sequence separation.
pub const BOUNDING_CONSTANT: f64 = 7.0;

/// Scales pair energies taken from the interaction matrix.
pub const MJ_ENERGY_MULTIPLIER: f64 = 0.1;

/// Penalty weight for consecutive turns that retrace the previous bond.
pub const BACK_PENALTY: f64 = 10.0;

/// Penalty weight for overlapping bead placements.
pub const OVERLAP_PENALTY: f64 = 10.0;

/// Pair energy of a hydrophobic-hydrophobic contact in the HP model.
pub const HP_HH_CONTACT_ENERGY: f64 = -1.0;

/// Pair energy of any HP contact involving a polar residue.
pub const HP_NON_HH_CONTACT_ENERGY: f64 = 0.0;

/// Minimum sequence separation between two beads forming a lattice contact.
pub const MIN_DISTANCE_BETWEEN_CONTACTS: usize = 5;

/// Minimum number of residues in an analysable main chain.
pub const MIN_CHAIN_LENGTH: usize = 5;

/// The four tetrahedral axes of the face-centred-cubic basis.
pub const DIST_VECTOR_AXES: usize = 4;

/// Symbol marking an absent side bead in a side-chain sequence.
pub const EMPTY_SIDECHAIN_PLACEHOLDER: char = '_';

/// Turn-register wires forced to zero by the lattice symmetry (the first
/// two turns of the main chain).
pub const FIXED_TURN_WIRES: [usize; 4] = [0, 1, 2, 3];

/// Wire whose Z bit triggers a coefficient sign flip when fixing qubits.
pub const SIGN_FLIP_SECOND_WIRE: usize = 1;

/// Turn-register wire fixed when the fifth main bead carries no side bead.
pub const FIFTH_TURN_WIRE: usize = 5;

/// Zero-based index of the fifth bead in a chain.
pub const FIFTH_BEAD_INDEX: usize = 4;

/// Coefficients below this magnitude are treated as exactly zero.
pub const COEFF_EPSILON: f64 = 1e-12;

/// Edge length normalisation of the FCC basis, `1/sqrt(3)` per axis.
pub const FCC_EDGE_COMPONENT: f64 = 0.577_350_269_189_625_8;

/// The four FCC basis vectors, rows indexed by [`crate::TurnDirection`],
/// before normalisation by [`FCC_EDGE_COMPONENT`].
pub const FCC_BASIS: [[f64; 3]; 4] = [
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
];
