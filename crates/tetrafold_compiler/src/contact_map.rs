// Copyright contributors to the Tetrafold project

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};
use tetrafold_common::FoldError;
use tetrafold_common::constants::MIN_DISTANCE_BETWEEN_CONTACTS;
use tetrafold_model::Protein;
use tetrafold_pauli::{PauliOp, qubit_ops};

/// One 0/1 contact flag per admissible main-chain pair, on a register of
/// `(N − 1)²` dedicated qubits.
///
/// A pair `(i, j)` with `i < j` is admissible when the beads sit on
/// opposite sublattices and are at least
/// [`MIN_DISTANCE_BETWEEN_CONTACTS`] residues apart; its flag lives on
/// wire `i·(N − 1) + j`. Iteration is `(i, j)`-lexicographic.
#[derive(Debug, Clone)]
pub struct ContactMap {
    contacts: BTreeMap<(usize, usize), PauliOp>,
    num_contact_qubits: usize,
}

impl ContactMap {
    pub fn new(protein: &Protein) -> Result<Self, FoldError> {
        let chain_len = protein.len();
        let num_contact_qubits = (chain_len - 1) * (chain_len - 1);
        let mut contacts = BTreeMap::new();

        debug!("initializing contact map on {num_contact_qubits} qubits");
        for lower in 0..chain_len.saturating_sub(2) {
            for upper in lower + 2..chain_len {
                let lower_bead = &protein.main_chain().beads()[lower];
                let upper_bead = &protein.main_chain().beads()[upper];

                if lower_bead.sublattice() == upper_bead.sublattice() {
                    debug!("skipping pair ({lower}, {upper}): same sublattice");
                    continue;
                }
                if upper - lower < MIN_DISTANCE_BETWEEN_CONTACTS {
                    debug!(
                        "skipping pair ({lower}, {upper}): separation below {MIN_DISTANCE_BETWEEN_CONTACTS}"
                    );
                    continue;
                }

                let wire = lower * (chain_len - 1) + upper;
                let flag = qubit_ops::to_qubits(&qubit_ops::z_string(
                    num_contact_qubits,
                    &BTreeSet::from([wire]),
                )?);
                debug!(
                    "contact flag for beads {} ({lower}) and {} ({upper}) on wire {wire}",
                    lower_bead.symbol(),
                    upper_bead.symbol()
                );
                contacts.insert((lower, upper), flag);
            }
        }

        info!("contact map initialized with {} contacts", contacts.len());
        Ok(ContactMap {
            contacts,
            num_contact_qubits,
        })
    }

    pub fn get(&self, lower: usize, upper: usize) -> Option<&PauliOp> {
        self.contacts.get(&(lower, upper))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &PauliOp)> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn num_contact_qubits(&self) -> usize {
        self.num_contact_qubits
    }
}
