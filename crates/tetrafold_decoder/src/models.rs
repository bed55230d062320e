// Copyright contributors to the Tetrafold project

use std::collections::BTreeMap;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tetrafold_common::TurnDirection;

/// The record the sampler boundary hands back for the most probable
/// bitstring of the optimised cost operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMeasurement {
    pub bitstring: String,
    pub probability: f64,
    pub state: String,
    pub value: f64,
}

/// A bead placed in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeadPosition {
    pub index: usize,
    pub symbol: char,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BeadPosition {
    pub fn new(index: usize, symbol: char, position: &Vector3<f64>) -> Self {
        BeadPosition {
            index,
            symbol,
            x: position.x,
            y: position.y,
            z: position.z,
        }
    }
}

/// Everything the decoder recovers from one measurement bitstring.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedResult {
    /// One turn per bond, `N − 1` entries.
    pub turn_sequence: Vec<TurnDirection>,
    /// One position per bead, `N` entries, starting at the origin.
    pub coordinates: Vec<BeadPosition>,
    /// Detected main-main contacts, keyed by the lower bead index.
    pub main_main_contacts: BTreeMap<usize, usize>,
}
