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

//! Compilation of a protein into a compact Pauli cost operator.
//!
//! The pipeline builds a contact map and a distance map over the protein,
//! combines them with pair energies and backtracking penalties into the
//! total hamiltonian, and compresses the result by dropping wires no term
//! acts on.

mod builder;
mod contact_map;
mod distance_map;

use log::info;
use tetrafold_common::FoldError;
use tetrafold_model::{Interaction, Protein};
use tetrafold_pauli::{PauliOp, qubit_ops};

pub use builder::HamiltonianBuilder;
pub use contact_map::ContactMap;
pub use distance_map::DistanceMap;

/// Builds the cost operator for `protein` and compresses it to the wires
/// the solver actually has to optimise.
pub fn build_hamiltonian(
    protein: &Protein,
    interaction: &dyn Interaction,
) -> Result<PauliOp, FoldError> {
    let contact_map = ContactMap::new(protein)?;
    let distance_map = DistanceMap::new(protein)?;
    let builder = HamiltonianBuilder::new(protein, interaction, &distance_map, &contact_map);

    let hamiltonian = builder.sum_hamiltonians()?;
    info!("hamiltonian built on {} qubits", hamiltonian.num_qubits());

    let compressed = qubit_ops::remove_unused_qubits(&hamiltonian);
    info!("compressed hamiltonian to {} qubits", compressed.num_qubits());
    Ok(compressed)
}
