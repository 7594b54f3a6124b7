//! # CNF Encodings for At-Most-1 Constraints
//!
//! Encodings that only support the bound `1`: [`Pairwise`], [`Bitwise`] and
//! [`Ladder`]. The sequential counter also has a dedicated at-most-1 form,
//! see [`crate::encodings::card::SequentialCounter`].
//!
//! ## Example Usage
//!
//! ```
//! use cardenc::{
//!     encodings::am1::{Encode, Ladder},
//!     instances::{BasicVarManager, Cnf},
//!     lit, var,
//! };
//!
//! let mut var_manager = BasicVarManager::from_next_free(var![3]);
//!
//! let mut encoder = Ladder::from(vec![lit![0], lit![1], lit![2]]);
//! let mut encoding = Cnf::new();
//! encoder.encode(&mut encoding, &mut var_manager).unwrap();
//! ```

use super::{CollectClauses, Error, IterInputs};
use crate::{instances::ManageVars, types::Lit};

mod pairwise;
pub use pairwise::Pairwise;

mod bitwise;
pub use bitwise::Bitwise;

mod ladder;
pub use ladder::Ladder;

/// Trait for all at-most-1 encodings
pub trait Encode: IterInputs + From<Vec<Lit>> + FromIterator<Lit> + Extend<Lit> {
    /// Gets the number of literals in the encoding
    fn n_lits(&self) -> usize;

    /// Encodes and enforces the at-most-1 constraint
    ///
    /// # Errors
    ///
    /// Currently none of the at-most-1 encodings fail, the result exists for
    /// uniformity with the general cardinality encodings.
    fn encode<Col>(
        &mut self,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses;

    /// Encodes and enforces the exactly-1 constraint. By default this is the
    /// at-least-1 clause followed by [`Encode::encode`].
    ///
    /// # Errors
    ///
    /// See [`Encode::encode`].
    fn encode_eq1<Col>(
        &mut self,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        collector.add_clause(self.iter().collect());
        self.encode(collector, var_manager)
    }
}

/// The default at-most-1 encoding. For now this is a [`Pairwise`] encoding.
pub type DefAm1 = Pairwise;
