//! Trivial bounds shared by all cardinality encodings

use crate::{
    clause,
    encodings::{atomics, CollectClauses},
    types::Lit,
};

/// Encodes `sum(lits) <= ub` directly if the bound is trivial. Returns
/// whether the bound was handled.
pub(super) fn atmost<Col: CollectClauses>(lits: &[Lit], ub: usize, collector: &mut Col) -> bool {
    let n = lits.len();
    if ub >= n {
        return true;
    }
    if ub + 1 == n {
        collector.add_clause(atomics::not_cube(lits));
        return true;
    }
    if ub == 0 {
        collector.extend(atomics::not_clause(lits));
        return true;
    }
    false
}

/// Encodes `sum(lits) >= lb` directly if the bound is trivial, for
/// `lb <= n`. Returns whether the bound was handled.
pub(super) fn atleast<Col: CollectClauses>(lits: &[Lit], lb: usize, collector: &mut Col) -> bool {
    if lb == 0 {
        return true;
    }
    if lb == 1 {
        collector.add_clause(lits.iter().copied().collect());
        return true;
    }
    if lb == lits.len() {
        collector.extend(lits.iter().map(|&l| clause![l]));
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::{clause, instances::Cnf, lit};

    #[test]
    fn atmost() {
        let lits = [lit![0], lit![1], lit![2]];
        let mut cnf = Cnf::new();
        assert!(super::atmost(&lits, 3, &mut cnf));
        assert!(cnf.is_empty());
        assert!(!super::atmost(&lits, 1, &mut cnf));
        assert!(cnf.is_empty());
        assert!(super::atmost(&lits, 2, &mut cnf));
        assert_eq!(cnf[0], clause![!lit![0], !lit![1], !lit![2]]);
        assert!(super::atmost(&lits, 0, &mut cnf));
        assert_eq!(cnf.len(), 4);
    }

    #[test]
    fn atleast() {
        let lits = [lit![0], lit![1], lit![2]];
        let mut cnf = Cnf::new();
        assert!(super::atleast(&lits, 0, &mut cnf));
        assert!(!super::atleast(&lits, 2, &mut cnf));
        assert!(cnf.is_empty());
        assert!(super::atleast(&lits, 1, &mut cnf));
        assert!(super::atleast(&lits, 3, &mut cnf));
        assert_eq!(cnf.len(), 4);
        assert_eq!(cnf[3], clause![lit![2]]);
    }
}
