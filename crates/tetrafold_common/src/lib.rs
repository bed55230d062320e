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

//! Shared definitions for the tetrafold workspace: the conformation
//! encodings, turn directions, lattice constants and the error type used
//! by every other crate.

pub mod constants;
mod direction;
mod encoding;
mod error;

pub use direction::TurnDirection;
pub use encoding::{ConformationEncoding, InteractionKind, SubLattice};
pub use error::FoldError;
