//! # cardenc - CNF Encodings of Cardinality Constraints
//!
//! `cardenc` translates cardinality constraints, i.e., statements of the form
//! "at most / at least / exactly `k` of these `n` literals are true", into
//! equisatisfiable sets of clauses over the input literals and freshly
//! introduced auxiliary variables.
//!
//! The provided encoding families are listed in [`encodings::card::EncType`].
//! The entry points for most users are [`encodings::card::encode_atmost`],
//! [`encodings::card::encode_atleast`] and [`encodings::card::encode_equals`],
//! or the integer based interface in [`encodings::card::ipasir`].
//!
//! ## Example
//!
//! ```
//! use cardenc::{
//!     encodings::card::{self, EncType},
//!     instances::{BasicVarManager, Cnf},
//!     lit, var,
//! };
//!
//! let mut var_manager = BasicVarManager::from_next_free(var![4]);
//! let mut cnf = Cnf::new();
//! card::encode_atmost(
//!     &[lit![0], lit![1], lit![2], lit![3]],
//!     2,
//!     EncType::SeqCounter,
//!     &mut cnf,
//!     &mut var_manager,
//! )
//! .unwrap();
//! assert!(!cnf.is_empty());
//! ```
//!
//! ## Features
//!
//! | Feature name | Description |
//! | --- | --- |
//! | `internals` | Make some internal building blocks of the encodings public, e.g., the comparator networks. Note that the internal API might change between releases. |
//! | `fxhash` | Use the faster firefox hash function from `rustc-hash`. |
//! | `prune-padding` | Let sorting and cardinality networks skip comparators on constant padding by default. |
//!
//! ## Logging
//!
//! The library emits `debug` and `trace` events through the `tracing` facade.
//! No subscriber is installed by the library itself.

#![warn(missing_docs)]

pub mod encodings;
pub mod instances;
pub mod types;

#[cfg_attr(feature = "internals", visibility::make(pub))]
mod utils;
