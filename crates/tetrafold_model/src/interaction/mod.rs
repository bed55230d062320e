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

//! Pair-energy models between residues.

use std::collections::BTreeSet;
use std::path::Path;

use tetrafold_common::{FoldError, InteractionKind};

mod hp;
mod mj;

pub use hp::HpInteraction;
pub use mj::MjInteraction;

/// A pure pair-energy lookup over one-letter residue symbols.
///
/// Implementations parse their table once at construction and are
/// read-only afterwards.
pub trait Interaction {
    fn name(&self) -> &'static str;

    /// Residue symbols this model can score; sequences are validated
    /// against this set.
    fn valid_symbols(&self) -> &BTreeSet<char>;

    /// Contact energy of an unordered residue pair.
    fn get_energy(&self, symbol_i: char, symbol_j: char) -> Result<f64, FoldError>;
}

/// Instantiates the interaction selected by `kind`, from `matrix_path`
/// when given and from the bundled tables otherwise.
pub fn load_interaction(
    kind: InteractionKind,
    matrix_path: Option<&Path>,
) -> Result<Box<dyn Interaction>, FoldError> {
    Ok(match (kind, matrix_path) {
        (InteractionKind::MiyazawaJernigan, Some(path)) => Box::new(MjInteraction::from_path(path)?),
        (InteractionKind::MiyazawaJernigan, None) => Box::new(MjInteraction::bundled()),
        (InteractionKind::HydrophobicPolar, Some(path)) => Box::new(HpInteraction::from_path(path)?),
        (InteractionKind::HydrophobicPolar, None) => Box::new(HpInteraction::bundled()),
    })
}
