//! # Variables, Literals and Assignments
//!
//! Compact types for the objects that cardinality encodings work with.

use core::ffi::c_int;
use std::{fmt, ops};

use thiserror::Error;

pub mod constraints;
pub use constraints::Clause;

/// The hash map used throughout the library
#[cfg(feature = "fxhash")]
pub type RsHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fxhash"))]
pub type RsHashMap<K, V> = std::collections::HashMap<K, V>;

/// A boolean variable. Indexing starts from 0, the largest index is
/// [`Var::MAX_IDX`] since literals share the same `u32` representation.
#[derive(Hash, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug, Default)]
#[repr(transparent)]
pub struct Var {
    idx: u32,
}

impl Var {
    /// The maximum index that can be represented
    pub const MAX_IDX: u32 = (u32::MAX - 1) / 2;

    /// Creates a variable with a given index.
    ///
    /// # Panics
    ///
    /// If `idx > Var::MAX_IDX`.
    #[must_use]
    pub fn new(idx: u32) -> Var {
        assert!(idx <= Var::MAX_IDX, "variable index too high");
        Var { idx }
    }

    /// Creates a variable, returning [`TypeError::IdxTooHigh`] instead of
    /// panicking
    pub fn new_with_error(idx: u32) -> Result<Var, TypeError> {
        if idx > Var::MAX_IDX {
            return Err(TypeError::IdxTooHigh(idx, Var::MAX_IDX));
        }
        Ok(Var { idx })
    }

    /// Gets a literal of this variable with the given polarity
    #[inline]
    #[must_use]
    pub fn lit(self, negated: bool) -> Lit {
        Lit::new_unchecked(self.idx, negated)
    }

    /// The positive literal of the variable
    #[inline]
    #[must_use]
    pub fn pos_lit(self) -> Lit {
        self.lit(false)
    }

    /// The negative literal of the variable
    #[inline]
    #[must_use]
    pub fn neg_lit(self) -> Lit {
        self.lit(true)
    }

    /// The index of the variable as `usize`, handy for indexing vectors
    #[inline]
    #[must_use]
    pub fn idx(self) -> usize {
        self.idx as usize
    }

    /// The index of the variable as `u32`
    #[inline]
    #[must_use]
    pub fn idx32(self) -> u32 {
        self.idx
    }

    /// The IPASIR/DIMACS identifier of the variable, i.e., its index plus one
    pub fn to_ipasir(self) -> Result<c_int, TypeError> {
        c_int::try_from(self.idx + 1)
            .map_err(|_| TypeError::IdxTooHigh(self.idx + 1, c_int::MAX.unsigned_abs()))
    }
}

impl ops::Add<u32> for Var {
    type Output = Var;

    fn add(self, rhs: u32) -> Self::Output {
        Var {
            idx: self.idx + rhs,
        }
    }
}

impl ops::AddAssign<u32> for Var {
    fn add_assign(&mut self, rhs: u32) {
        self.idx += rhs;
    }
}

impl ops::Sub<u32> for Var {
    type Output = Var;

    fn sub(self, rhs: u32) -> Self::Output {
        Var {
            idx: self.idx - rhs,
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.idx)
    }
}

/// Creates a variable from an index. Mainly used in tests.
///
/// ```
/// use cardenc::{types::Var, var};
///
/// assert_eq!(var![7], Var::new(7));
/// ```
#[macro_export]
macro_rules! var {
    ($v:expr) => {
        $crate::types::Var::new($v)
    };
}

/// A possibly negated variable.
///
/// The representation is `idx << 1 | negated`, so the two literals of a
/// variable are adjacent when used as an index.
#[derive(Hash, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Lit {
    lidx: u32,
}

impl Lit {
    #[inline]
    fn represent(idx: u32, negated: bool) -> u32 {
        (idx << 1) | u32::from(negated)
    }

    /// Creates a literal.
    ///
    /// # Panics
    ///
    /// If `idx > Var::MAX_IDX`.
    #[must_use]
    pub fn new(idx: u32, negated: bool) -> Lit {
        assert!(idx <= Var::MAX_IDX, "variable index too high");
        Lit::new_unchecked(idx, negated)
    }

    /// Creates a literal without checking the index
    #[inline]
    #[must_use]
    pub fn new_unchecked(idx: u32, negated: bool) -> Lit {
        Lit {
            lidx: Lit::represent(idx, negated),
        }
    }

    /// Creates a positive literal
    #[inline]
    #[must_use]
    pub fn positive(idx: u32) -> Lit {
        Lit::new(idx, false)
    }

    /// Creates a negative literal
    #[inline]
    #[must_use]
    pub fn negative(idx: u32) -> Lit {
        Lit::new(idx, true)
    }

    /// Parses a non-zero IPASIR/DIMACS integer (`v` or `-v`, variable `v`
    /// having index `v - 1`).
    ///
    /// # Errors
    ///
    /// [`TypeError::IpasirZero`] for `0`, [`TypeError::IdxTooHigh`] if the
    /// variable cannot be represented.
    pub fn from_ipasir(val: c_int) -> Result<Lit, TypeError> {
        if val == 0 {
            return Err(TypeError::IpasirZero);
        }
        let idx = val.unsigned_abs() - 1;
        if idx > Var::MAX_IDX {
            return Err(TypeError::IdxTooHigh(idx, Var::MAX_IDX));
        }
        Ok(Lit::new_unchecked(idx, val < 0))
    }

    /// Converts the literal to its IPASIR/DIMACS integer
    ///
    /// # Errors
    ///
    /// [`TypeError::IdxTooHigh`] if the variable does not fit into a `c_int`
    pub fn to_ipasir(self) -> Result<c_int, TypeError> {
        let v = self.var().to_ipasir()?;
        Ok(if self.is_neg() { -v } else { v })
    }

    /// The variable index of the literal
    #[inline]
    #[must_use]
    pub fn vidx(self) -> usize {
        (self.lidx >> 1) as usize
    }

    /// The literal representation, usable as an index
    #[inline]
    #[must_use]
    pub fn lidx(self) -> usize {
        self.lidx as usize
    }

    /// The variable of the literal
    #[inline]
    #[must_use]
    pub fn var(self) -> Var {
        Var {
            idx: self.lidx >> 1,
        }
    }

    /// Whether the literal is positive
    #[inline]
    #[must_use]
    pub fn is_pos(self) -> bool {
        self.lidx & 1 == 0
    }

    /// Whether the literal is negated
    #[inline]
    #[must_use]
    pub fn is_neg(self) -> bool {
        self.lidx & 1 == 1
    }
}

impl ops::Not for Lit {
    type Output = Lit;

    #[inline]
    fn not(self) -> Lit {
        Lit {
            lidx: self.lidx ^ 1,
        }
    }
}

impl ops::Neg for Lit {
    type Output = Lit;

    #[inline]
    fn neg(self) -> Lit {
        !self
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neg() {
            write!(f, "~x{}", self.vidx())
        } else {
            write!(f, "x{}", self.vidx())
        }
    }
}

/// Creates a positive literal from a variable index. Mainly used in tests.
///
/// ```
/// use cardenc::{lit, types::Lit};
///
/// assert_eq!(lit![3], Lit::positive(3));
/// assert_eq!(!lit![3], Lit::negative(3));
/// ```
#[macro_export]
macro_rules! lit {
    ($l:expr) => {
        $crate::types::Lit::positive($l)
    };
}

/// Creates a literal from an IPASIR integer. Mainly used in tests.
///
/// ```
/// use cardenc::{ipasir_lit, lit};
///
/// assert_eq!(ipasir_lit![4], lit![3]);
/// assert_eq!(ipasir_lit![-4], !lit![3]);
/// ```
#[macro_export]
macro_rules! ipasir_lit {
    ($l:expr) => {
        $crate::types::Lit::from_ipasir($l).unwrap()
    };
}

/// Value of a variable or literal under a partial assignment
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum TernaryVal {
    /// Assigned true
    True,
    /// Assigned false
    False,
    /// Unassigned
    #[default]
    DontCare,
}

impl From<bool> for TernaryVal {
    fn from(value: bool) -> Self {
        if value {
            TernaryVal::True
        } else {
            TernaryVal::False
        }
    }
}

impl ops::Not for TernaryVal {
    type Output = TernaryVal;

    fn not(self) -> TernaryVal {
        match self {
            TernaryVal::True => TernaryVal::False,
            TernaryVal::False => TernaryVal::True,
            TernaryVal::DontCare => TernaryVal::DontCare,
        }
    }
}

impl fmt::Display for TernaryVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TernaryVal::True => write!(f, "1"),
            TernaryVal::False => write!(f, "0"),
            TernaryVal::DontCare => write!(f, "_"),
        }
    }
}

/// A partial assignment of variables
#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[repr(transparent)]
pub struct Assignment {
    assignment: Vec<TernaryVal>,
}

impl Assignment {
    /// The value of a variable, [`TernaryVal::DontCare`] if unassigned
    #[must_use]
    pub fn var_value(&self, var: Var) -> TernaryVal {
        self.assignment.get(var.idx()).copied().unwrap_or_default()
    }

    /// The value of a literal, [`TernaryVal::DontCare`] if unassigned
    #[must_use]
    pub fn lit_value(&self, lit: Lit) -> TernaryVal {
        let val = self.var_value(lit.var());
        if lit.is_neg() {
            !val
        } else {
            val
        }
    }

    /// Assigns a variable
    pub fn assign_var(&mut self, var: Var, val: TernaryVal) {
        if self.assignment.len() <= var.idx() {
            self.assignment.resize(var.idx() + 1, TernaryVal::DontCare);
        }
        self.assignment[var.idx()] = val;
    }

    /// Assigns a literal to true
    pub fn assign_lit(&mut self, lit: Lit) {
        self.assign_var(lit.var(), TernaryVal::from(lit.is_pos()));
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.assignment.iter().try_for_each(|tv| write!(f, "{tv}"))
    }
}

impl FromIterator<Lit> for Assignment {
    fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
        let mut assignment = Assignment::default();
        iter.into_iter().for_each(|l| assignment.assign_lit(l));
        assignment
    }
}

impl From<Vec<TernaryVal>> for Assignment {
    fn from(assignment: Vec<TernaryVal>) -> Self {
        Self { assignment }
    }
}

/// Errors related to the basic types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// The requested index is too high.
    /// Contains the requested and the maximum index.
    #[error("index {0} is too high (maximum {1})")]
    IdxTooHigh(u32, u32),
    /// IPASIR literals cannot be zero
    #[error("zero is an invalid IPASIR literal")]
    IpasirZero,
}
