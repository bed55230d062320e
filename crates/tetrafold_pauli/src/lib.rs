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

//! Sparse Pauli operators over a variable number of qubits.
//!
//! An operator is a sum of terms, each a pair of equal-length Z and X
//! bit-vectors with a complex coefficient. The [`qubit_ops`] module builds
//! the folding-specific operators on top of the raw algebra: turn
//! indicators, Z strings and the two symmetry-reduction passes.

mod pauli_op;
pub mod qubit_ops;

pub use pauli_op::{PauliOp, PauliTerm};
