//! # Integer Literal Interface
//!
//! Cardinality encodings over IPASIR/DIMACS integer literals. The clauses
//! are returned as integer vectors and the top variable id is threaded
//! through the calls, like the classic integer based encoders do.
//!
//! ## Example
//!
//! ```
//! use cardenc::encodings::card::{ipasir, EncType};
//!
//! let mut top_id = 0;
//! let clauses = ipasir::encode_atmost(&[1, 2, 3], 1, &mut top_id, EncType::Pairwise).unwrap();
//! assert_eq!(clauses, vec![vec![-1, -2], vec![-1, -3], vec![-2, -3]]);
//! assert_eq!(top_id, 3);
//! ```

use std::ffi::c_int;

use super::EncType;
use crate::{
    encodings::Error,
    instances::{BasicVarManager, Cnf, ManageVars},
    types::{Lit, Var},
};

type Encoder =
    fn(&[Lit], usize, EncType, &mut Cnf, &mut dyn ManageVars) -> Result<(), Error>;

/// Converts the inputs, runs an encoder and converts the clauses back
fn run(
    lits: &[c_int],
    rhs: usize,
    top_id: &mut u32,
    enc: EncType,
    encoder: Encoder,
) -> Result<Vec<Vec<c_int>>, Error> {
    let lits = lits
        .iter()
        .map(|&l| Lit::from_ipasir(l))
        .collect::<Result<Vec<_>, _>>()?;
    let max_var = lits.iter().map(|l| l.var().idx32() + 1).max().unwrap_or(0);
    let next_free = Var::new_with_error((*top_id).max(max_var))?;
    let mut var_manager = BasicVarManager::from_next_free(next_free);
    let mut cnf = Cnf::new();
    encoder(&lits, rhs, enc, &mut cnf, &mut var_manager)?;
    let clauses = cnf
        .iter()
        .map(|cl| {
            cl.iter()
                .map(|&lit| lit.to_ipasir().map_err(Error::from))
                .collect()
        })
        .collect::<Result<_, _>>()?;
    // only a successful call moves the caller's top id
    *top_id = var_manager.n_used();
    Ok(clauses)
}

/// Encodes that at most `rhs` of `lits` are true. On success `top_id`
/// holds the largest used variable, which is at least the largest variable
/// in `lits`. On error `top_id` is left unchanged.
///
/// # Errors
///
/// [`Error::Unsat`] for a negative bound, [`Error::InvalidLiteral`] for a
/// zero literal or a `top_id` beyond [`Var::MAX_IDX`], otherwise as
/// [`super::encode_atmost`].
pub fn encode_atmost(
    lits: &[c_int],
    rhs: isize,
    top_id: &mut u32,
    enc: EncType,
) -> Result<Vec<Vec<c_int>>, Error> {
    let rhs = usize::try_from(rhs).map_err(|_| Error::Unsat)?;
    run(lits, rhs, top_id, enc, super::encode_atmost::<Cnf>)
}

/// Encodes that at least `rhs` of `lits` are true. Bounds of at most zero
/// produce no clauses.
///
/// # Errors
///
/// [`Error::Unsat`] if `rhs` exceeds the number of literals,
/// [`Error::InvalidLiteral`] for a zero literal, otherwise as
/// [`super::encode_atleast`].
pub fn encode_atleast(
    lits: &[c_int],
    rhs: isize,
    top_id: &mut u32,
    enc: EncType,
) -> Result<Vec<Vec<c_int>>, Error> {
    let rhs = usize::try_from(rhs).unwrap_or(0);
    run(lits, rhs, top_id, enc, super::encode_atleast::<Cnf>)
}

/// Encodes that exactly `rhs` of `lits` are true
///
/// # Errors
///
/// [`Error::Unsat`] for a negative bound or one that exceeds the number of
/// literals, [`Error::InvalidLiteral`] for a zero literal, otherwise as
/// [`super::encode_equals`].
pub fn encode_equals(
    lits: &[c_int],
    rhs: isize,
    top_id: &mut u32,
    enc: EncType,
) -> Result<Vec<Vec<c_int>>, Error> {
    let rhs = usize::try_from(rhs).map_err(|_| Error::Unsat)?;
    run(lits, rhs, top_id, enc, super::encode_equals::<Cnf>)
}
