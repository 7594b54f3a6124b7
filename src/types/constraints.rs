//! # Constraint Types
//!
//! [`Clause`] is what every encoding produces, [`CardConstraint`] is what
//! the encodings consume when used through
//! [`encode_constr`](crate::encodings::card::encode_constr).

use std::{fmt, ops};

use super::{Assignment, Lit, TernaryVal};

/// A disjunction of literals. The literal order is kept as built and
/// duplicates are not removed automatically.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Default)]
pub struct Clause {
    lits: Vec<Lit>,
}

impl Clause {
    /// Creates a new empty clause
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The literals of the clause
    #[must_use]
    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    /// The number of literals in the clause
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Checks if the clause is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// Appends a literal
    pub fn add(&mut self, lit: Lit) {
        self.lits.push(lit);
    }

    /// Iterates over the literals
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Lit> {
        self.lits.iter()
    }
}

impl<const N: usize> From<[Lit; N]> for Clause {
    fn from(value: [Lit; N]) -> Self {
        Self {
            lits: Vec::from(value),
        }
    }
}

impl From<&[Lit]> for Clause {
    fn from(value: &[Lit]) -> Self {
        Self {
            lits: value.to_vec(),
        }
    }
}

impl From<Vec<Lit>> for Clause {
    fn from(lits: Vec<Lit>) -> Self {
        Self { lits }
    }
}

impl FromIterator<Lit> for Clause {
    fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
        Self {
            lits: iter.into_iter().collect(),
        }
    }
}

impl Extend<Lit> for Clause {
    fn extend<T: IntoIterator<Item = Lit>>(&mut self, iter: T) {
        self.lits.extend(iter);
    }
}

impl ops::Index<usize> for Clause {
    type Output = Lit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lits[index]
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;

    type IntoIter = std::slice::Iter<'a, Lit>;

    fn into_iter(self) -> Self::IntoIter {
        self.lits.iter()
    }
}

impl IntoIterator for Clause {
    type Item = Lit;

    type IntoIter = std::vec::IntoIter<Lit>;

    fn into_iter(self) -> Self::IntoIter {
        self.lits.into_iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, lit) in self.lits.iter().enumerate() {
            if idx > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Builds a [`Clause`] from a list of literals
///
/// ```
/// use cardenc::{clause, lit};
///
/// let cl = clause![lit![0], !lit![1]];
/// assert_eq!(cl.len(), 2);
/// ```
#[macro_export]
macro_rules! clause {
    ( $($l:expr),* $(,)? ) => {
        $crate::types::Clause::from([$($l),*])
    };
}

/// A cardinality constraint over a list of literals
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardConstraint {
    /// `sum of lits <= b`
    Ub {
        /// The input literals
        lits: Vec<Lit>,
        /// The bound
        b: usize,
    },
    /// `sum of lits >= b`
    Lb {
        /// The input literals
        lits: Vec<Lit>,
        /// The bound
        b: usize,
    },
    /// `sum of lits = b`
    Eq {
        /// The input literals
        lits: Vec<Lit>,
        /// The bound
        b: usize,
    },
}

impl CardConstraint {
    /// Constructs an upper bound constraint
    pub fn new_ub<I: IntoIterator<Item = Lit>>(lits: I, b: usize) -> Self {
        CardConstraint::Ub {
            lits: lits.into_iter().collect(),
            b,
        }
    }

    /// Constructs a lower bound constraint
    pub fn new_lb<I: IntoIterator<Item = Lit>>(lits: I, b: usize) -> Self {
        CardConstraint::Lb {
            lits: lits.into_iter().collect(),
            b,
        }
    }

    /// Constructs an equality constraint
    pub fn new_eq<I: IntoIterator<Item = Lit>>(lits: I, b: usize) -> Self {
        CardConstraint::Eq {
            lits: lits.into_iter().collect(),
            b,
        }
    }

    /// The input literals
    #[must_use]
    pub fn lits(&self) -> &[Lit] {
        match self {
            CardConstraint::Ub { lits, .. }
            | CardConstraint::Lb { lits, .. }
            | CardConstraint::Eq { lits, .. } => lits,
        }
    }

    /// The bound
    #[must_use]
    pub fn bound(&self) -> usize {
        match self {
            CardConstraint::Ub { b, .. }
            | CardConstraint::Lb { b, .. }
            | CardConstraint::Eq { b, .. } => *b,
        }
    }

    /// Checks whether a full assignment of the input literals satisfies the
    /// constraint. Unassigned literals count as false.
    #[must_use]
    pub fn is_sat(&self, assign: &Assignment) -> bool {
        let count = self
            .lits()
            .iter()
            .filter(|&&l| assign.lit_value(l) == TernaryVal::True)
            .count();
        match self {
            CardConstraint::Ub { b, .. } => count <= *b,
            CardConstraint::Lb { b, .. } => count >= *b,
            CardConstraint::Eq { b, .. } => count == *b,
        }
    }
}

impl fmt::Display for CardConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            CardConstraint::Ub { .. } => "<=",
            CardConstraint::Lb { .. } => ">=",
            CardConstraint::Eq { .. } => "=",
        };
        write!(f, "[")?;
        for (idx, lit) in self.lits().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, "] {op} {}", self.bound())
    }
}
