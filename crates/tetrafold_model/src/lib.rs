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

//! The bead/chain/protein model and the residue pair-energy tables.

mod bead;
mod chain;
pub mod interaction;
mod protein;

pub use bead::{Bead, MainBead, SideBead};
pub use chain::{MainChain, SideChain};
pub use interaction::{HpInteraction, Interaction, MjInteraction, load_interaction};
pub use protein::Protein;
