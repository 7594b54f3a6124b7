//! # cardenc-tools - Test Support for the cardenc Library
//!
//! An interface to the BatSat SAT solver and helpers that test encodings
//! against their brute-force semantics. They live in their own crate so that
//! the integration tests of `cardenc` can share them.

pub mod solver;
pub use solver::{Solver, SolverError, SolverResult};

pub mod utils;
