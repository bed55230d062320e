// Copyright contributors to the Tetrafold project

use tetrafold_common::FoldError;
use tetrafold_pauli::PauliOp;

use crate::models::BestMeasurement;

/// The boundary to the external variational solver.
///
/// Implementations may sample a statevector, run shots or talk to
/// hardware; the decoder only requires that the returned bitstring is an
/// ASCII 0/1 string as long as the compressed operator is wide.
pub trait MinimumEigenSampler {
    fn sample(&self, hamiltonian: &PauliOp) -> Result<BestMeasurement, FoldError>;
}
