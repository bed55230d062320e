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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FoldError;

/// How a turn is written into qubits: one-hot over four wires, or a
/// two-bit binary code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConformationEncoding {
    Sparse,
    Dense,
}

impl ConformationEncoding {
    pub fn qubits_per_turn(self) -> usize {
        match self {
            ConformationEncoding::Sparse => 4,
            ConformationEncoding::Dense => 2,
        }
    }
}

impl FromStr for ConformationEncoding {
    type Err = FoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sparse" => Ok(ConformationEncoding::Sparse),
            "dense" => Ok(ConformationEncoding::Dense),
            other => Err(FoldError::ConformationEncoding {
                detail: format!("unknown encoding selector '{other}'"),
            }),
        }
    }
}

impl fmt::Display for ConformationEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConformationEncoding::Sparse => write!(f, "sparse"),
            ConformationEncoding::Dense => write!(f, "dense"),
        }
    }
}

/// Parity class of a bead index. Beads on opposite sublattices are the
/// only candidate nearest neighbours on the tetrahedral lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubLattice {
    A,
    B,
}

impl SubLattice {
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            SubLattice::A
        } else {
            SubLattice::B
        }
    }
}

/// Selector for the pair-energy model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    MiyazawaJernigan,
    HydrophobicPolar,
}

impl FromStr for InteractionKind {
    type Err = FoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mj" | "miyazawa-jernigan" => Ok(InteractionKind::MiyazawaJernigan),
            "hp" | "hydrophobic-polar" => Ok(InteractionKind::HydrophobicPolar),
            other => Err(FoldError::InvalidInteractionType {
                selector: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionKind::MiyazawaJernigan => write!(f, "mj"),
            InteractionKind::HydrophobicPolar => write!(f, "hp"),
        }
    }
}
