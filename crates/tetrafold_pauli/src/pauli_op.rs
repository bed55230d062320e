// Copyright contributors to the Tetrafold project

use std::collections::BTreeMap;
use std::fmt;

use itertools::iproduct;
use num_complex::Complex64;
use tetrafold_common::FoldError;
use tetrafold_common::constants::COEFF_EPSILON;

/// A single Pauli string with a complex weight.
///
/// Bit `k` of `z` set places a Z on wire `k`, bit `k` of `x` an X; both
/// bits set denote `iY`, with the conventional phase folded into the
/// coefficient during composition. Both vectors always have the owning
/// operator's qubit count.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliTerm {
    pub z: Vec<bool>,
    pub x: Vec<bool>,
    pub coeff: Complex64,
}

impl PauliTerm {
    pub fn identity(num_qubits: usize, coeff: Complex64) -> Self {
        PauliTerm {
            z: vec![false; num_qubits],
            x: vec![false; num_qubits],
            coeff,
        }
    }

    /// The term as a big-endian I/X/Y/Z label (wire `n - 1` first) and the
    /// coefficient of that labelled string, i.e. with the `iY` phases of
    /// the mask representation folded out.
    pub fn label(&self) -> (String, Complex64) {
        let mut y_count: u32 = 0;
        let label: String = (0..self.z.len())
            .rev()
            .map(|wire| match (self.z[wire], self.x[wire]) {
                (false, false) => 'I',
                (true, false) => 'Z',
                (false, true) => 'X',
                (true, true) => {
                    y_count += 1;
                    'Y'
                }
            })
            .collect();
        (label, self.coeff * i_power(y_count))
    }
}

/// `i^k` without going through a float power.
fn i_power(k: u32) -> Complex64 {
    match k % 4 {
        0 => Complex64::new(1.0, 0.0),
        1 => Complex64::new(0.0, 1.0),
        2 => Complex64::new(-1.0, 0.0),
        _ => Complex64::new(0.0, -1.0),
    }
}

/// A sparse operator over `num_qubits` wires: a coefficient-weighted sum
/// of Pauli strings.
///
/// Operators are value types; composition and tensoring deep-copy the
/// terms. Structural equality is meaningful after [`PauliOp::simplify`],
/// which coalesces duplicate masks and orders terms canonically.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliOp {
    num_qubits: usize,
    terms: Vec<PauliTerm>,
}

impl PauliOp {
    /// The identity on `num_qubits` wires.
    pub fn identity(num_qubits: usize) -> Self {
        Self::identity_scaled(num_qubits, Complex64::new(1.0, 0.0))
    }

    /// The identity scaled by `coeff`.
    pub fn identity_scaled(num_qubits: usize, coeff: Complex64) -> Self {
        PauliOp {
            num_qubits,
            terms: vec![PauliTerm::identity(num_qubits, coeff)],
        }
    }

    /// The zero operator on `num_qubits` wires.
    pub fn zero(num_qubits: usize) -> Self {
        PauliOp {
            num_qubits,
            terms: Vec::new(),
        }
    }

    /// Builds an operator from explicit terms, validating their widths.
    pub fn from_terms(num_qubits: usize, terms: Vec<PauliTerm>) -> Result<Self, FoldError> {
        for term in &terms {
            if term.z.len() != num_qubits || term.x.len() != num_qubits {
                return Err(FoldError::OperatorShape {
                    detail: format!(
                        "term with {}/{} mask bits in an operator on {} qubits",
                        term.z.len(),
                        term.x.len(),
                        num_qubits
                    ),
                });
            }
        }
        Ok(PauliOp { num_qubits, terms })
    }

    pub(crate) fn with_terms(num_qubits: usize, terms: Vec<PauliTerm>) -> Self {
        debug_assert!(
            terms
                .iter()
                .all(|t| t.z.len() == num_qubits && t.x.len() == num_qubits)
        );
        PauliOp { num_qubits, terms }
    }

    /// A single term placing `labels[k]` on wire `indices[k]`, identity
    /// elsewhere.
    pub fn from_sparse(
        labels: &str,
        indices: &[usize],
        coeff: Complex64,
        num_qubits: usize,
    ) -> Result<Self, FoldError> {
        if labels.chars().count() != indices.len() {
            return Err(FoldError::OperatorShape {
                detail: format!(
                    "{} pauli labels for {} wire indices",
                    labels.chars().count(),
                    indices.len()
                ),
            });
        }
        let mut term = PauliTerm::identity(num_qubits, coeff);
        for (label, &wire) in labels.chars().zip(indices) {
            if wire >= num_qubits {
                return Err(FoldError::OperatorShape {
                    detail: format!("wire {wire} outside an operator on {num_qubits} qubits"),
                });
            }
            if term.z[wire] || term.x[wire] {
                return Err(FoldError::OperatorShape {
                    detail: format!("wire {wire} assigned twice in sparse labels"),
                });
            }
            apply_label(&mut term, label, wire)?;
        }
        Ok(PauliOp {
            num_qubits,
            terms: vec![term],
        })
    }

    /// Builds an operator from full-width big-endian labels, e.g.
    /// `[("IZXI", 1.0.into())]`. All labels must agree on the width.
    pub fn from_list(pairs: &[(&str, Complex64)]) -> Result<Self, FoldError> {
        let num_qubits = pairs.first().map_or(0, |(label, _)| label.chars().count());
        let mut terms = Vec::with_capacity(pairs.len());
        for (label, coeff) in pairs {
            if label.chars().count() != num_qubits {
                return Err(FoldError::OperatorShape {
                    detail: format!(
                        "label '{label}' does not match the operator width of {num_qubits}"
                    ),
                });
            }
            let mut term = PauliTerm::identity(num_qubits, *coeff);
            for (position, pauli) in label.chars().enumerate() {
                apply_label(&mut term, pauli, num_qubits - 1 - position)?;
            }
            terms.push(term);
        }
        Ok(PauliOp { num_qubits, terms })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Scales every coefficient by `factor`.
    pub fn scaled<S: Into<Complex64>>(&self, factor: S) -> Self {
        let factor = factor.into();
        let terms = self
            .terms
            .iter()
            .map(|term| PauliTerm {
                z: term.z.clone(),
                x: term.x.clone(),
                coeff: term.coeff * factor,
            })
            .collect();
        PauliOp {
            num_qubits: self.num_qubits,
            terms,
        }
    }

    /// Sum of two operators on the same wire count. The result is not
    /// simplified; call [`PauliOp::simplify`] before comparing or
    /// serialising.
    pub fn add(&self, other: &PauliOp) -> Result<Self, FoldError> {
        self.check_same_width(other, "add")?;
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Ok(PauliOp {
            num_qubits: self.num_qubits,
            terms,
        })
    }

    pub fn sub(&self, other: &PauliOp) -> Result<Self, FoldError> {
        self.add(&other.scaled(-1.0))
    }

    /// Matrix product `self · other`.
    ///
    /// Masks combine by xor; the sign collected while commuting X factors
    /// of the left term past Z factors of the right is folded into the
    /// product coefficient.
    pub fn compose(&self, other: &PauliOp) -> Result<Self, FoldError> {
        self.check_same_width(other, "compose")?;
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for (left, right) in iproduct!(&self.terms, &other.terms) {
            let mut z = vec![false; self.num_qubits];
            let mut x = vec![false; self.num_qubits];
            let mut anticommutations: u32 = 0;
            for wire in 0..self.num_qubits {
                z[wire] = left.z[wire] ^ right.z[wire];
                x[wire] = left.x[wire] ^ right.x[wire];
                if left.x[wire] && right.z[wire] {
                    anticommutations += 1;
                }
            }
            let sign = if anticommutations % 2 == 0 { 1.0 } else { -1.0 };
            terms.push(PauliTerm {
                z,
                x,
                coeff: left.coeff * right.coeff * sign,
            });
        }
        Ok(PauliOp {
            num_qubits: self.num_qubits,
            terms,
        })
    }

    /// Tensor product `self ⊗ other`; `other` occupies the low wires.
    pub fn tensor(&self, other: &PauliOp) -> Self {
        let num_qubits = self.num_qubits + other.num_qubits;
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for (high, low) in iproduct!(&self.terms, &other.terms) {
            let mut z = low.z.clone();
            z.extend_from_slice(&high.z);
            let mut x = low.x.clone();
            x.extend_from_slice(&high.x);
            terms.push(PauliTerm {
                z,
                x,
                coeff: high.coeff * low.coeff,
            });
        }
        PauliOp { num_qubits, terms }
    }

    /// Coalesces terms with identical masks, drops coefficients below the
    /// epsilon and orders the remainder canonically.
    pub fn simplify(&self) -> Self {
        let mut grouped: BTreeMap<(Vec<bool>, Vec<bool>), Complex64> = BTreeMap::new();
        for term in &self.terms {
            *grouped
                .entry((term.z.clone(), term.x.clone()))
                .or_insert(Complex64::new(0.0, 0.0)) += term.coeff;
        }
        let terms = grouped
            .into_iter()
            .filter(|(_, coeff)| coeff.norm() >= COEFF_EPSILON)
            .map(|((z, x), coeff)| PauliTerm { z, x, coeff })
            .collect();
        PauliOp {
            num_qubits: self.num_qubits,
            terms,
        }
    }

    /// Extends the operator with identity wires on the high side until it
    /// covers `target` qubits.
    pub fn pad_to(&self, target: usize) -> Result<Self, FoldError> {
        if target < self.num_qubits {
            return Err(FoldError::OperatorShape {
                detail: format!(
                    "cannot pad an operator on {} qubits down to {target}",
                    self.num_qubits
                ),
            });
        }
        if target == self.num_qubits {
            return Ok(self.clone());
        }
        Ok(PauliOp::identity(target - self.num_qubits).tensor(self))
    }

    /// Wires on which every term is identity, sorted ascending.
    pub fn unused_qubits(&self) -> Vec<usize> {
        (0..self.num_qubits)
            .filter(|&wire| self.terms.iter().all(|term| !term.z[wire] && !term.x[wire]))
            .collect()
    }

    /// Projects out every wire reported by [`PauliOp::unused_qubits`].
    /// Coefficients are unchanged.
    pub fn remove_unused_qubits(&self) -> Self {
        let unused = self.unused_qubits();
        if unused.is_empty() {
            return self.clone();
        }
        let keep: Vec<usize> = (0..self.num_qubits)
            .filter(|wire| !unused.contains(wire))
            .collect();
        let terms = self
            .terms
            .iter()
            .map(|term| PauliTerm {
                z: keep.iter().map(|&wire| term.z[wire]).collect(),
                x: keep.iter().map(|&wire| term.x[wire]).collect(),
                coeff: term.coeff,
            })
            .collect();
        PauliOp {
            num_qubits: keep.len(),
            terms,
        }
        .simplify()
    }

    /// Largest absolute imaginary coefficient component over all terms.
    pub fn max_imaginary(&self) -> f64 {
        self.terms
            .iter()
            .map(|term| term.coeff.im.abs())
            .fold(0.0, f64::max)
    }

    /// The operator as `(label, coefficient)` pairs, the serialisation the
    /// sampler boundary consumes.
    pub fn labels(&self) -> Vec<(String, Complex64)> {
        self.terms.iter().map(PauliTerm::label).collect()
    }

    fn check_same_width(&self, other: &PauliOp, operation: &str) -> Result<(), FoldError> {
        if self.num_qubits != other.num_qubits {
            return Err(FoldError::OperatorShape {
                detail: format!(
                    "cannot {operation} operators on {} and {} qubits",
                    self.num_qubits, other.num_qubits
                ),
            });
        }
        Ok(())
    }
}

fn apply_label(term: &mut PauliTerm, pauli: char, wire: usize) -> Result<(), FoldError> {
    match pauli {
        'I' => {}
        'Z' => term.z[wire] = true,
        'X' => term.x[wire] = true,
        'Y' => {
            term.z[wire] = true;
            term.x[wire] = true;
            term.coeff *= Complex64::new(0.0, -1.0);
        }
        other => {
            return Err(FoldError::OperatorShape {
                detail: format!("unknown pauli label '{other}'"),
            });
        }
    }
    Ok(())
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0 on {} qubits", self.num_qubits);
        }
        let rendered: Vec<String> = self
            .labels()
            .into_iter()
            .map(|(label, coeff)| format!("({:+.4}{:+.4}i)·{}", coeff.re, coeff.im, label))
            .collect();
        write!(f, "{}", rendered.join(" + "))
    }
}
