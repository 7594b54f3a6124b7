//! # Sequential Counter Encoding
//!
//! ## References
//!
//! - Carsten Sinz: _Towards an Optimal CNF Encoding of Boolean Cardinality
//!   Constraints_, CP 2005.

use super::{baseline, BoundUpper, Encode};
use crate::{
    clause,
    encodings::{atomics, CollectClauses, EncodeStats, Error, IterInputs},
    instances::ManageVars,
    types::{Lit, RsHashMap},
};

/// The sequential counter encoding. State variable `s(i, j)` is true if at
/// least `j` of the first `i` inputs are true. State variables are only
/// created when a clause refers to them.
#[derive(Default, Debug, Clone)]
pub struct SequentialCounter {
    /// Input literals
    in_lits: Vec<Lit>,
    /// The number of clauses in the encoding
    n_clauses: usize,
    /// The number of new variables in the encoding
    n_vars: u32,
}

/// Lazily created counter state variables, keyed by (position, count)
struct StateVars<'vm> {
    vars: RsHashMap<(usize, usize), Lit>,
    var_manager: &'vm mut dyn ManageVars,
}

impl StateVars<'_> {
    fn get(&mut self, pos: usize, count: usize) -> Lit {
        *self
            .vars
            .entry((pos, count))
            .or_insert_with(|| self.var_manager.new_lit())
    }
}

impl SequentialCounter {
    /// Encodes `sum <= 1` with a single chain of carry variables. Carry `i`
    /// is true if any of the first `i + 1` inputs is true.
    fn encode_am1<Col>(&self, collector: &mut Col, var_manager: &mut dyn ManageVars) -> u32
    where
        Col: CollectClauses,
    {
        let n = self.in_lits.len();
        if n <= 1 {
            return 0;
        }
        let mut carry = var_manager.new_lit();
        let mut n_vars = 1;
        collector.add_clause(atomics::lit_impl_lit(self.in_lits[0], carry));
        for &lit in &self.in_lits[1..n - 1] {
            let next = var_manager.new_lit();
            n_vars += 1;
            collector.extend([
                atomics::not_cube(&[lit, carry]),
                atomics::lit_impl_lit(lit, next),
                atomics::lit_impl_lit(carry, next),
            ]);
            carry = next;
        }
        collector.add_clause(atomics::not_cube(&[self.in_lits[n - 1], carry]));
        n_vars
    }

    /// Encodes `sum <= ub` for `0 < ub < n - 1`
    fn encode_general<Col>(
        &self,
        ub: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> u32
    where
        Col: CollectClauses,
    {
        let lits = &self.in_lits;
        let n = lits.len();
        let mut state = StateVars {
            vars: RsHashMap::default(),
            var_manager,
        };

        let s11 = state.get(1, 1);
        collector.add_clause(clause![s11, !lits[0]]);
        for count in 2..=ub {
            collector.add_clause(clause![!state.get(1, count)]);
        }

        for pos in 2..n {
            let lit = lits[pos - 1];
            let si1 = state.get(pos, 1);
            collector.add_clause(atomics::lit_impl_lit(lit, si1));
            let prev1 = state.get(pos - 1, 1);
            collector.add_clause(atomics::lit_impl_lit(prev1, si1));

            for count in 2..=ub {
                let carry = state.get(pos - 1, count - 1);
                let sij = state.get(pos, count);
                collector.add_clause(atomics::cube_impl_lit(&[lit, carry], sij));
                let prev = state.get(pos - 1, count);
                collector.add_clause(atomics::lit_impl_lit(prev, sij));
            }

            let full = state.get(pos - 1, ub);
            collector.add_clause(atomics::not_cube(&[lit, full]));
        }

        let full = state.get(n - 1, ub);
        collector.add_clause(atomics::not_cube(&[lits[n - 1], full]));

        u32::try_from(state.vars.len()).unwrap_or(u32::MAX)
    }
}

impl Encode for SequentialCounter {
    fn n_lits(&self) -> usize {
        self.in_lits.len()
    }
}

impl BoundUpper for SequentialCounter {
    fn encode_ub<Col>(
        &mut self,
        ub: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        let prev_clauses = collector.n_clauses();
        if !baseline::atmost(&self.in_lits, ub, collector) {
            self.n_vars += if ub == 1 {
                self.encode_am1(collector, var_manager)
            } else {
                self.encode_general(ub, collector, var_manager)
            };
        }
        self.n_clauses += collector.n_clauses() - prev_clauses;
        Ok(())
    }
}

impl IterInputs for SequentialCounter {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Lit>>;

    fn iter(&self) -> Self::Iter<'_> {
        self.in_lits.iter().copied()
    }
}

impl EncodeStats for SequentialCounter {
    fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    fn n_vars(&self) -> u32 {
        self.n_vars
    }
}

impl From<Vec<Lit>> for SequentialCounter {
    fn from(lits: Vec<Lit>) -> Self {
        Self {
            in_lits: lits,
            n_clauses: 0,
            n_vars: 0,
        }
    }
}

impl FromIterator<Lit> for SequentialCounter {
    fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl Extend<Lit> for SequentialCounter {
    fn extend<T: IntoIterator<Item = Lit>>(&mut self, iter: T) {
        self.in_lits.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        clause,
        encodings::{
            card::{BoundUpper, Encode},
            EncodeStats,
        },
        instances::{BasicVarManager, Cnf, ManageVars},
        lit, var,
    };

    #[test]
    fn at_most_two_of_four() {
        let mut enc: super::SequentialCounter =
            [lit![0], lit![1], lit![2], lit![3]].into_iter().collect();
        assert_eq!(enc.n_lits(), 4);
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![4]);
        enc.encode_ub(2, &mut cnf, &mut vm).unwrap();
        // s(1..=3, 1..=2)
        assert_eq!(vm.n_used(), 10);
        assert_eq!(enc.n_vars(), 6);
        // 1 + 1 + 2 * (2 + 2 + 1) + 1
        assert_eq!(cnf.len(), 13);
        assert_eq!(enc.n_clauses(), 13);
        assert_eq!(cnf[0], clause![lit![4], !lit![0]]);
        assert_eq!(cnf[1], clause![!lit![5]]);
        assert_eq!(cnf[12], clause![!lit![3], !lit![9]]);
    }

    #[test]
    fn at_most_one_chain() {
        let mut enc = super::SequentialCounter::from(vec![lit![0], lit![1], lit![2], lit![3]]);
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![4]);
        enc.encode_ub(1, &mut cnf, &mut vm).unwrap();
        assert_eq!(vm.n_used(), 7);
        assert_eq!(cnf.len(), 8);
        assert_eq!(cnf[0], clause![!lit![0], lit![4]]);
        assert_eq!(cnf[1], clause![!lit![1], !lit![4]]);
        assert_eq!(cnf[7], clause![!lit![3], !lit![6]]);
    }

    #[test]
    fn trivial_bounds() {
        let mut enc = super::SequentialCounter::from(vec![lit![0], lit![1], lit![2]]);
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![3]);
        enc.encode_ub(3, &mut cnf, &mut vm).unwrap();
        assert!(cnf.is_empty());
        enc.encode_ub(0, &mut cnf, &mut vm).unwrap();
        assert_eq!(cnf.len(), 3);
        assert_eq!(enc.n_clauses(), 3);
        assert_eq!(vm.n_used(), 3);
    }
}
