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

use serde::{Deserialize, Serialize};

use crate::ConformationEncoding;

/// One of the four tetrahedral bond directions between consecutive beads.
///
/// The variant index doubles as the row index into the FCC basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    Dir0,
    Dir1,
    Dir2,
    Dir3,
}

impl TurnDirection {
    pub const ALL: [TurnDirection; 4] = [
        TurnDirection::Dir0,
        TurnDirection::Dir1,
        TurnDirection::Dir2,
        TurnDirection::Dir3,
    ];

    pub fn index(self) -> usize {
        match self {
            TurnDirection::Dir0 => 0,
            TurnDirection::Dir1 => 1,
            TurnDirection::Dir2 => 2,
            TurnDirection::Dir3 => 3,
        }
    }

    /// The turn-group bit pattern of this direction, high bit first.
    pub fn code(self, encoding: ConformationEncoding) -> &'static str {
        match encoding {
            ConformationEncoding::Sparse => match self {
                TurnDirection::Dir0 => "0001",
                TurnDirection::Dir1 => "0010",
                TurnDirection::Dir2 => "0100",
                TurnDirection::Dir3 => "1000",
            },
            ConformationEncoding::Dense => match self {
                TurnDirection::Dir0 => "00",
                TurnDirection::Dir1 => "01",
                TurnDirection::Dir2 => "10",
                TurnDirection::Dir3 => "11",
            },
        }
    }

    /// Inverse of [`TurnDirection::code`]; `None` for an unknown group.
    pub fn from_code(code: &str, encoding: ConformationEncoding) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.code(encoding) == code)
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnDirection::Dir0 => write!(f, "DIR_0"),
            TurnDirection::Dir1 => write!(f, "DIR_1"),
            TurnDirection::Dir2 => write!(f, "DIR_2"),
            TurnDirection::Dir3 => write!(f, "DIR_3"),
        }
    }
}
