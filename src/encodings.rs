//! # Encodings of Cardinality Constraints to CNF
//!
//! The shared vocabulary of all encodings: where clauses go
//! ([`CollectClauses`]), what can go wrong ([`Error`]) and what an encoding
//! reports about itself ([`EncodeStats`], [`IterInputs`]).

use thiserror::Error;

use crate::types::{Clause, TypeError};

pub mod am1;
pub mod atomics;
pub mod card;

/// Trait for collecting clauses. Implemented by
/// [`Cnf`](crate::instances::Cnf); encodings write all their clauses through
/// it.
pub trait CollectClauses: Extend<Clause> {
    /// Gets the number of clauses in the collection
    fn n_clauses(&self) -> usize;

    /// Adds a single clause
    fn add_clause(&mut self, cl: Clause) {
        self.extend([cl]);
    }
}

/// Errors from encodings
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Encode was not called before using the encoding
    #[error("not encoded to enforce bound")]
    NotEncoded,
    /// The requested constraint is unsatisfiable, e.g., a negative upper bound
    #[error("encoding is unsat")]
    Unsat,
    /// An integer literal of the value zero, or a variable index beyond
    /// [`Var::MAX_IDX`](crate::types::Var::MAX_IDX)
    #[error("invalid integer literal or variable index")]
    InvalidLiteral,
    /// A tree handle that is unknown, destroyed or no longer a root
    #[error("unknown or invalidated totalizer tree handle")]
    InvalidTreeHandle,
    /// The encoding family only supports some bounds
    #[error("the {encoding} encoding does not support the bound {bound}")]
    UnsupportedBound {
        /// The encoding family
        encoding: card::EncType,
        /// The requested bound
        bound: usize,
    },
    /// An unknown encoding identifier
    #[error("no encoding with identifier {0}")]
    NoSuchEncoding(String),
    /// A tree cannot be built without input literals
    #[error("cannot build a totalizer over zero literals")]
    NoInputs,
}

impl From<TypeError> for Error {
    fn from(_: TypeError) -> Self {
        Error::InvalidLiteral
    }
}

/// Trait for encodings that track statistics.
pub trait EncodeStats {
    /// Gets the number of clauses in the encoding
    fn n_clauses(&self) -> usize;

    /// Gets the number of variables in the encoding
    fn n_vars(&self) -> u32;
}

/// Trait for encodings that can iterate over their input literals
pub trait IterInputs {
    /// The iterator type
    type Iter<'a>: Iterator<Item = crate::types::Lit>
    where
        Self: 'a;

    /// Gets an iterator over copies of the input literals
    fn iter(&self) -> Self::Iter<'_>;
}
