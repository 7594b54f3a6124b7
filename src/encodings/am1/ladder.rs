//! # Ladder At-Most-1 Encoding
//!
//! ## References
//!
//! - Ian P. Gent and Peter Nightingale: _A new Encoding of AllDifferent into SAT_, ModRef 2004.

use super::Encode;
use crate::{
    clause,
    encodings::{atomics, CollectClauses, EncodeStats, Error, IterInputs},
    instances::ManageVars,
    types::{Clause, Lit},
};

/// The ladder (regular) encoding. Natively an exactly-1 encoding, the
/// at-most-1 constraint is encoded as exactly-1 over the inputs plus one
/// fresh slack literal.
#[derive(Default, Debug, Clone)]
pub struct Ladder {
    /// Input literals
    in_lits: Vec<Lit>,
    /// The number of clauses in the encoding
    n_clauses: usize,
    /// The number of new variables in the encoding
    n_vars: u32,
}

impl Ladder {
    /// Exactly-1 over an arbitrary literal slice.
    ///
    /// Ladder variable `i` is true iff the true literal is at a position
    /// `> i`, so `lits[i]` holds iff ladder `i - 1` is true and ladder `i` is
    /// false.
    fn ladder_eq1<Col>(lits: &[Lit], collector: &mut Col, var_manager: &mut dyn ManageVars) -> u32
    where
        Col: CollectClauses,
    {
        match lits.len() {
            0 => {
                collector.add_clause(Clause::new());
                return 0;
            }
            1 => {
                collector.add_clause(clause![lits[0]]);
                return 0;
            }
            2 => {
                collector.extend([
                    clause![lits[0], lits[1]],
                    atomics::not_cube(&[lits[0], lits[1]]),
                ]);
                return 0;
            }
            _ => (),
        }
        let n = lits.len();
        let ladder: Vec<Lit> = (0..n - 1).map(|_| var_manager.new_lit()).collect();
        // ladder validity
        collector.extend((0..n - 2).map(|idx| atomics::lit_impl_lit(ladder[idx + 1], ladder[idx])));
        // channelling
        collector.extend([clause![ladder[0], lits[0]], clause![!lits[0], !ladder[0]]]);
        for idx in 1..n - 1 {
            collector.extend([
                clause![!ladder[idx - 1], ladder[idx], lits[idx]],
                atomics::lit_impl_lit(lits[idx], ladder[idx - 1]),
                clause![!lits[idx], !ladder[idx]],
            ]);
        }
        collector.extend([
            atomics::lit_impl_lit(ladder[n - 2], lits[n - 1]),
            atomics::lit_impl_lit(lits[n - 1], ladder[n - 2]),
        ]);
        u32::try_from(ladder.len()).unwrap_or(u32::MAX)
    }
}

impl Encode for Ladder {
    fn n_lits(&self) -> usize {
        self.in_lits.len()
    }

    fn encode<Col>(
        &mut self,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        if self.in_lits.len() <= 1 {
            return Ok(());
        }
        let prev_clauses = collector.n_clauses();

        let mut lits = self.in_lits.clone();
        lits.push(var_manager.new_lit());
        let n_ladder = Self::ladder_eq1(&lits, collector, var_manager);

        self.n_clauses += collector.n_clauses() - prev_clauses;
        self.n_vars += n_ladder + 1;
        Ok(())
    }

    fn encode_eq1<Col>(
        &mut self,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        let prev_clauses = collector.n_clauses();
        self.n_vars += Self::ladder_eq1(&self.in_lits, collector, var_manager);
        self.n_clauses += collector.n_clauses() - prev_clauses;
        Ok(())
    }
}

impl IterInputs for Ladder {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Lit>>;

    fn iter(&self) -> Self::Iter<'_> {
        self.in_lits.iter().copied()
    }
}

impl EncodeStats for Ladder {
    fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    fn n_vars(&self) -> u32 {
        self.n_vars
    }
}

impl From<Vec<Lit>> for Ladder {
    fn from(lits: Vec<Lit>) -> Self {
        Self {
            in_lits: lits,
            n_clauses: 0,
            n_vars: 0,
        }
    }
}

impl FromIterator<Lit> for Ladder {
    fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl Extend<Lit> for Ladder {
    fn extend<T: IntoIterator<Item = Lit>>(&mut self, iter: T) {
        self.in_lits.extend(iter);
    }
}
