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

//! Reverses the conformation encoding: a measurement bitstring from the
//! solver becomes a turn sequence, 3-D coordinates on the tetrahedral
//! lattice, and the detected main-main contacts.

mod decoder;
mod models;
mod sampler;

pub use decoder::{decode_result, fcc_basis};
pub use models::{BeadPosition, BestMeasurement, DecodedResult};
pub use sampler::MinimumEigenSampler;
