//! # CNF Encodings for Cardinality Constraints
//!
//! The module contains implementations of CNF encodings for cardinality
//! constraints, the [`Encode`] and [`BoundUpper`] traits they implement and
//! a selector ([`encode_atmost`], [`encode_atleast`], [`encode_equals`])
//! dispatching on an [`EncType`].
//!
//! All families share the same handling of trivial bounds: an upper bound
//! of at least `n` produces nothing, an upper bound of `n - 1` a single
//! clause and an upper bound of `0` one unit clause per literal.
//!
//! ## Example Usage
//!
//! ```
//! use cardenc::{
//!     encodings::card::{BoundUpper, Totalizer},
//!     instances::{BasicVarManager, Cnf},
//!     lit, var,
//! };
//!
//! let mut var_manager = BasicVarManager::from_next_free(var![5]);
//! let mut enc: Totalizer = [lit![0], lit![1], lit![2], lit![3], lit![4]]
//!     .into_iter()
//!     .collect();
//! let mut encoding = Cnf::new();
//! enc.encode_ub(2, &mut encoding, &mut var_manager).unwrap();
//! ```

use std::{fmt, str::FromStr};

use tracing::debug;

use super::{am1, CollectClauses, Error, IterInputs};
use crate::{
    instances::ManageVars,
    types::{constraints::CardConstraint, Lit},
};

mod baseline;

mod seqcounter;
pub use seqcounter::SequentialCounter;

#[cfg_attr(feature = "internals", visibility::make(pub))]
mod sortnet;
pub use sortnet::{CardinalityNetwork, SortingNetwork};

#[cfg_attr(feature = "internals", visibility::make(pub))]
mod totalizer;
pub use totalizer::Totalizer;

mod mtotalizer;
pub use mtotalizer::{KModuloTotalizer, ModuloTotalizer};

pub mod itotalizer;
pub use itotalizer::ITotalizer;

pub mod ipasir;

/// Trait for all cardinality encodings
pub trait Encode: IterInputs + From<Vec<Lit>> + FromIterator<Lit> + Extend<Lit> {
    /// Gets the number of input literals in the encoding
    fn n_lits(&self) -> usize;
}

/// Trait for cardinality encodings that can encode upper bounds
pub trait BoundUpper: Encode {
    /// Encodes and enforces the constraint `sum of inputs <= ub`.
    ///
    /// # Errors
    ///
    /// If the encoding cannot represent the bound, see
    /// [`Error::UnsupportedBound`].
    fn encode_ub<Col>(
        &mut self,
        ub: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses;
}

/// The available encoding families. The discriminants are the classic
/// integer tags of these encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncType {
    /// Pairwise at-most-1, see [`am1::Pairwise`]
    Pairwise = 0,
    /// Sequential counter, see [`SequentialCounter`]
    #[default]
    SeqCounter = 1,
    /// Odd-even sorting network, see [`SortingNetwork`]
    SortNetwork = 2,
    /// Cardinality network, see [`CardinalityNetwork`]
    CardNetwork = 3,
    /// Bitwise at-most-1, see [`am1::Bitwise`]
    Bitwise = 4,
    /// Ladder at-most-1, see [`am1::Ladder`]
    Ladder = 5,
    /// Totalizer, see [`Totalizer`]
    Totalizer = 6,
    /// Modulo totalizer, see [`ModuloTotalizer`]
    ModTotalizer = 7,
    /// k-approximate modulo totalizer, see [`KModuloTotalizer`]
    KModTotalizer = 8,
}

impl EncType {
    /// All encoding families, in tag order
    pub const ALL: [EncType; 9] = [
        EncType::Pairwise,
        EncType::SeqCounter,
        EncType::SortNetwork,
        EncType::CardNetwork,
        EncType::Bitwise,
        EncType::Ladder,
        EncType::Totalizer,
        EncType::ModTotalizer,
        EncType::KModTotalizer,
    ];

    /// Whether the family can only encode the bound `1`
    #[must_use]
    pub fn is_am1_only(self) -> bool {
        matches!(self, EncType::Pairwise | EncType::Bitwise | EncType::Ladder)
    }

    fn name(self) -> &'static str {
        match self {
            EncType::Pairwise => "pairwise",
            EncType::SeqCounter => "seqcounter",
            EncType::SortNetwork => "sortnetwrk",
            EncType::CardNetwork => "cardnetwrk",
            EncType::Bitwise => "bitwise",
            EncType::Ladder => "ladder",
            EncType::Totalizer => "totalizer",
            EncType::ModTotalizer => "mtotalizer",
            EncType::KModTotalizer => "kmtotalizer",
        }
    }
}

impl fmt::Display for EncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i32> for EncType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| EncType::ALL.get(idx).copied())
            .ok_or_else(|| Error::NoSuchEncoding(value.to_string()))
    }
}

impl FromStr for EncType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        EncType::ALL
            .into_iter()
            .find(|enc| enc.name() == lower)
            .ok_or_else(|| Error::NoSuchEncoding(s.to_string()))
    }
}

/// Encodes `sum(lits) <= rhs` with the given encoding family
fn encode_with<E, Col>(
    lits: &[Lit],
    rhs: usize,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Result<(), Error>
where
    E: BoundUpper,
    Col: CollectClauses,
{
    E::from(lits.to_vec()).encode_ub(rhs, collector, var_manager)
}

/// Encodes that at most `rhs` of `lits` are true.
///
/// # Errors
///
/// [`Error::UnsupportedBound`] if `enc` is one of the at-most-1 families
/// and the bound is not trivial and not `1`.
pub fn encode_atmost<Col>(
    lits: &[Lit],
    rhs: usize,
    enc: EncType,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Result<(), Error>
where
    Col: CollectClauses,
{
    if baseline::atmost(lits, rhs, collector) {
        debug!(n_lits = lits.len(), rhs, "trivial at-most bound");
        return Ok(());
    }
    debug!(n_lits = lits.len(), rhs, %enc, "encoding at-most constraint");
    if enc.is_am1_only() {
        if rhs != 1 {
            return Err(Error::UnsupportedBound {
                encoding: enc,
                bound: rhs,
            });
        }
        let lits = lits.to_vec();
        return match enc {
            EncType::Pairwise => {
                am1::Encode::encode(&mut am1::Pairwise::from(lits), collector, var_manager)
            }
            EncType::Bitwise => {
                am1::Encode::encode(&mut am1::Bitwise::from(lits), collector, var_manager)
            }
            _ => am1::Encode::encode(&mut am1::Ladder::from(lits), collector, var_manager),
        };
    }
    match enc {
        EncType::SeqCounter => {
            encode_with::<SequentialCounter, _>(lits, rhs, collector, var_manager)
        }
        EncType::SortNetwork => encode_with::<SortingNetwork, _>(lits, rhs, collector, var_manager),
        EncType::CardNetwork => {
            encode_with::<CardinalityNetwork, _>(lits, rhs, collector, var_manager)
        }
        EncType::ModTotalizer => {
            encode_with::<ModuloTotalizer, _>(lits, rhs, collector, var_manager)
        }
        EncType::KModTotalizer => {
            encode_with::<KModuloTotalizer, _>(lits, rhs, collector, var_manager)
        }
        _ => encode_with::<Totalizer, _>(lits, rhs, collector, var_manager),
    }
}

/// Encodes that at least `rhs` of `lits` are true. Non-trivial bounds are
/// encoded as at most `n - rhs` of the negated literals, the input slice is
/// left untouched.
///
/// # Errors
///
/// [`Error::Unsat`] if `rhs` exceeds the number of literals, otherwise
/// as [`encode_atmost`].
pub fn encode_atleast<Col>(
    lits: &[Lit],
    rhs: usize,
    enc: EncType,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Result<(), Error>
where
    Col: CollectClauses,
{
    if rhs > lits.len() {
        return Err(Error::Unsat);
    }
    if baseline::atleast(lits, rhs, collector) {
        debug!(n_lits = lits.len(), rhs, "trivial at-least bound");
        return Ok(());
    }
    let negated: Vec<Lit> = lits.iter().map(|&l| !l).collect();
    encode_atmost(&negated, lits.len() - rhs, enc, collector, var_manager)
}

/// Encodes that exactly `rhs` of `lits` are true, as an at-least followed by
/// an at-most constraint.
///
/// # Errors
///
/// See [`encode_atleast`] and [`encode_atmost`].
pub fn encode_equals<Col>(
    lits: &[Lit],
    rhs: usize,
    enc: EncType,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Result<(), Error>
where
    Col: CollectClauses,
{
    encode_atleast(lits, rhs, enc, collector, var_manager)?;
    encode_atmost(lits, rhs, enc, collector, var_manager)
}

/// Encodes a [`CardConstraint`] with the given encoding family
///
/// # Errors
///
/// See [`encode_atleast`] and [`encode_atmost`].
pub fn encode_constr<Col>(
    constr: &CardConstraint,
    enc: EncType,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Result<(), Error>
where
    Col: CollectClauses,
{
    match constr {
        CardConstraint::Ub { lits, b } => encode_atmost(lits, *b, enc, collector, var_manager),
        CardConstraint::Lb { lits, b } => encode_atleast(lits, *b, enc, collector, var_manager),
        CardConstraint::Eq { lits, b } => encode_equals(lits, *b, enc, collector, var_manager),
    }
}
