//! # Clause Building Blocks
//!
//! Small implications that the encodings are assembled from.

use std::ops::Not;

use crate::{
    clause,
    types::{Clause, Lit},
};

/// Implication of form `a -> b`
#[must_use]
pub fn lit_impl_lit(a: Lit, b: Lit) -> Clause {
    clause![!a, b]
}

/// Implication of form `(a1 & a2 & ... & an) -> b`
#[must_use]
pub fn cube_impl_lit(a: &[Lit], b: Lit) -> Clause {
    let mut cl: Clause = a.iter().copied().map(Not::not).collect();
    cl.add(b);
    cl
}

/// Negation of a cube, `!(a1 & a2 & ... & an)`
#[must_use]
pub fn not_cube(a: &[Lit]) -> Clause {
    a.iter().copied().map(Not::not).collect()
}

/// Negation of a clause as unit clauses, `!a1 & !a2 & ... & !an`
pub fn not_clause(a: &[Lit]) -> impl Iterator<Item = Clause> + '_ {
    a.iter().map(|&ai| clause![!ai])
}
