//! # Pairwise At-Most-1 Encoding
//!
//! ## References
//!
//! - Steven D. Prestwich: _CNF Encodings_, in Handbook of Satisfiability 2021.

use itertools::Itertools;

use super::Encode;
use crate::{
    encodings::{atomics, CollectClauses, EncodeStats, Error, IterInputs},
    instances::ManageVars,
    types::Lit,
};

/// The pairwise (naive) at-most-1 encoding: one binary clause `!a | !b` for
/// every pair of input literals, no auxiliary variables.
#[derive(Default, Debug, Clone)]
pub struct Pairwise {
    /// Input literals
    in_lits: Vec<Lit>,
    /// The number of clauses in the encoding
    n_clauses: usize,
}

impl Encode for Pairwise {
    fn n_lits(&self) -> usize {
        self.in_lits.len()
    }

    fn encode<Col>(
        &mut self,
        collector: &mut Col,
        _var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        let prev_clauses = collector.n_clauses();
        collector.extend(
            self.in_lits
                .iter()
                .tuple_combinations()
                .map(|(&first, &second)| atomics::not_cube(&[first, second])),
        );
        self.n_clauses += collector.n_clauses() - prev_clauses;
        Ok(())
    }
}

impl IterInputs for Pairwise {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Lit>>;

    fn iter(&self) -> Self::Iter<'_> {
        self.in_lits.iter().copied()
    }
}

impl EncodeStats for Pairwise {
    fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    fn n_vars(&self) -> u32 {
        0
    }
}

impl From<Vec<Lit>> for Pairwise {
    fn from(lits: Vec<Lit>) -> Self {
        Self {
            in_lits: lits,
            n_clauses: 0,
        }
    }
}

impl FromIterator<Lit> for Pairwise {
    fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl Extend<Lit> for Pairwise {
    fn extend<T: IntoIterator<Item = Lit>>(&mut self, iter: T) {
        self.in_lits.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        clause,
        encodings::{am1::Encode, EncodeStats},
        instances::{BasicVarManager, Cnf, ManageVars},
        lit, var,
    };

    #[test]
    fn basic() {
        let mut enc: super::Pairwise = [lit![0], lit![1], lit![2], lit![3]].into_iter().collect();
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![4]);
        enc.encode(&mut cnf, &mut vm).unwrap();
        assert_eq!(vm.n_used(), 4);
        assert_eq!(cnf.len(), 6);
        assert_eq!(enc.n_clauses(), 6);
        assert_eq!(cnf[0], clause![!lit![0], !lit![1]]);
        assert_eq!(cnf[5], clause![!lit![2], !lit![3]]);
    }

    #[test]
    fn exactly_one() {
        let mut enc = super::Pairwise::from(vec![lit![0], !lit![1], lit![2]]);
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![3]);
        enc.encode_eq1(&mut cnf, &mut vm).unwrap();
        assert_eq!(cnf.len(), 4);
        assert_eq!(cnf[0], clause![lit![0], !lit![1], lit![2]]);
        assert_eq!(cnf[1], clause![!lit![0], lit![1]]);
    }
}
