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

use thiserror::Error;

/// Errors raised across the tetrafold crates.
///
/// These are programmer or data errors; the library never recovers from
/// them locally and callers are expected to fail fast.
#[derive(Debug, Error)]
pub enum FoldError {
    /// Main and side sequences differ in length, or the chain is shorter
    /// than the analysable minimum.
    #[error("invalid chain lengths: main chain has {main} residues, side chain has {side} (minimum {minimum})")]
    ChainLength {
        main: usize,
        side: usize,
        minimum: usize,
    },

    /// A residue symbol is not covered by the active interaction model.
    #[error("amino acid symbol '{symbol}' is not supported by the {model} interaction model")]
    UnsupportedAminoAcid { symbol: char, model: &'static str },

    /// A turn group could not be decoded, or an encoding selector is
    /// unknown.
    #[error("invalid conformation encoding: {detail}")]
    ConformationEncoding { detail: String },

    /// Qubit counts disagree where two operators are combined, or an
    /// operator is used at the wrong width.
    #[error("operator shape mismatch: {detail}")]
    OperatorShape { detail: String },

    /// The solver handed back an empty or truncated measurement record.
    #[error("invalid solver result: {detail}")]
    InvalidResult { detail: String },

    /// Unknown interaction selector.
    #[error("unknown interaction type '{selector}'")]
    InvalidInteractionType { selector: String },

    /// Side-chain operator algebra is reserved but not implemented.
    #[error("side chain beads are not implemented")]
    SideChainsUnsupported,

    /// A hamiltonian kept an imaginary coefficient component above the
    /// simplification epsilon; this indicates a bug in operator assembly.
    #[error("hamiltonian retains an imaginary coefficient component of {imaginary:e}")]
    ResidualImaginary { imaginary: f64 },

    /// An interaction matrix file could not be parsed.
    #[error("malformed interaction matrix: {detail}")]
    InteractionMatrix { detail: String },

    /// An interaction matrix file could not be read.
    #[error("failed to read interaction matrix: {0}")]
    Io(#[from] std::io::Error),
}
