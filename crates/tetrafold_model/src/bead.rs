// Copyright contributors to the Tetrafold project

use log::debug;
use tetrafold_common::{ConformationEncoding, FoldError, SubLattice};
use tetrafold_pauli::{PauliOp, qubit_ops};

const REGISTER_WIDTH_INVARIANT: &str = "turn operators of one bead share the register width";

/// A residue at a fixed position in a chain.
///
/// Only main-chain beads carry turn operators; side beads are a reserved
/// extension point and placeholders merely keep side-chain indexing
/// aligned with the main chain.
#[derive(Debug, Clone)]
pub enum Bead {
    Main(MainBead),
    Side(SideBead),
    Placeholder { symbol: char, index: usize },
}

impl Bead {
    pub fn symbol(&self) -> char {
        match self {
            Bead::Main(bead) => bead.symbol(),
            Bead::Side(bead) => bead.symbol(),
            Bead::Placeholder { symbol, .. } => *symbol,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Bead::Main(bead) => bead.index(),
            Bead::Side(bead) => bead.index(),
            Bead::Placeholder { index, .. } => *index,
        }
    }

    pub fn sublattice(&self) -> SubLattice {
        SubLattice::of(self.index())
    }

    /// Directional turn projectors of this bead.
    ///
    /// `Ok(None)` marks the chain terminus, which has no outgoing bond;
    /// side and placeholder beads have no operator algebra and error out.
    pub fn turn_funcs(&self) -> Result<Option<[PauliOp; 4]>, FoldError> {
        match self {
            Bead::Main(bead) => Ok(bead.turn_funcs()),
            Bead::Side(_) | Bead::Placeholder { .. } => Err(FoldError::SideChainsUnsupported),
        }
    }
}

/// A residue of the protein backbone.
#[derive(Debug, Clone)]
pub struct MainBead {
    symbol: char,
    index: usize,
    encoding: ConformationEncoding,
    num_turn_qubits: usize,
    turn_qubits: Vec<PauliOp>,
}

impl MainBead {
    pub(crate) fn new(
        symbol: char,
        index: usize,
        parent_chain_len: usize,
        encoding: ConformationEncoding,
    ) -> Result<Self, FoldError> {
        let qubits_per_turn = encoding.qubits_per_turn();
        let num_turn_qubits = (parent_chain_len - 1) * qubits_per_turn;

        // The terminal bead has no outgoing bond and owns no indicators.
        let turn_qubits = if index + 1 != parent_chain_len {
            (0..qubits_per_turn)
                .map(|i| qubit_ops::turn_indicator(qubits_per_turn * index + i, num_turn_qubits))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };
        debug!(
            "initialized {} turn qubits for bead {symbol} (index {index})",
            turn_qubits.len()
        );

        Ok(MainBead {
            symbol,
            index,
            encoding,
            num_turn_qubits,
            turn_qubits,
        })
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn sublattice(&self) -> SubLattice {
        SubLattice::of(self.index)
    }

    pub fn has_turn_qubits(&self) -> bool {
        !self.turn_qubits.is_empty()
    }

    /// The raw turn indicators on the shared turn register.
    pub fn turn_qubits(&self) -> &[PauliOp] {
        &self.turn_qubits
    }

    /// The four directional projectors t₀..t₃, or `None` for the terminal
    /// bead.
    ///
    /// Sparse encoding exposes the indicators one-hot; dense encoding
    /// decodes the two-bit direction code into degree-two polynomials
    /// over the pair of indicators.
    pub fn turn_funcs(&self) -> Option<[PauliOp; 4]> {
        if self.turn_qubits.is_empty() {
            return None;
        }
        match self.encoding {
            ConformationEncoding::Sparse => Some([
                self.turn_qubits[0].clone(),
                self.turn_qubits[1].clone(),
                self.turn_qubits[2].clone(),
                self.turn_qubits[3].clone(),
            ]),
            ConformationEncoding::Dense => Some([
                self.dense_turn_0(),
                self.dense_turn_1(),
                self.dense_turn_2(),
                self.dense_turn_3(),
            ]),
        }
    }

    /// `(I − a)(I − b)`, the decoder of the 00 group.
    fn dense_turn_0(&self) -> PauliOp {
        let identity = PauliOp::identity(self.num_turn_qubits);
        identity
            .sub(&self.turn_qubits[0])
            .and_then(|left| {
                left.compose(&identity.sub(&self.turn_qubits[1]).expect(REGISTER_WIDTH_INVARIANT))
            })
            .expect(REGISTER_WIDTH_INVARIANT)
            .simplify()
    }

    /// `b(b − a)`, the decoder of the 01 group.
    fn dense_turn_1(&self) -> PauliOp {
        let (a, b) = (&self.turn_qubits[0], &self.turn_qubits[1]);
        b.compose(&b.sub(a).expect(REGISTER_WIDTH_INVARIANT))
            .expect(REGISTER_WIDTH_INVARIANT)
            .simplify()
    }

    /// `a(a − b)`, the decoder of the 10 group.
    fn dense_turn_2(&self) -> PauliOp {
        let (a, b) = (&self.turn_qubits[0], &self.turn_qubits[1]);
        a.compose(&a.sub(b).expect(REGISTER_WIDTH_INVARIANT))
            .expect(REGISTER_WIDTH_INVARIANT)
            .simplify()
    }

    /// `ab`, the decoder of the 11 group.
    fn dense_turn_3(&self) -> PauliOp {
        self.turn_qubits[0]
            .compose(&self.turn_qubits[1])
            .expect(REGISTER_WIDTH_INVARIANT)
            .simplify()
    }
}

/// A pendant residue attached to the backbone.
///
/// The side-chain operator algebra is reserved; constructing a real side
/// bead fails until it exists, and the accessors mirror that.
#[derive(Debug, Clone)]
pub struct SideBead {
    symbol: char,
    index: usize,
}

impl SideBead {
    pub(crate) fn new(_symbol: char, _index: usize) -> Result<Self, FoldError> {
        Err(FoldError::SideChainsUnsupported)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn turn_funcs(&self) -> Result<Option<[PauliOp; 4]>, FoldError> {
        Err(FoldError::SideChainsUnsupported)
    }
}
