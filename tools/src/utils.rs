//! # Test Helpers
//!
//! Macros and functions checking an encoding against its intended semantics
//! on small inputs.

use cardenc::{
    instances::Cnf,
    lit,
    types::{Lit, Var},
};
use itertools::Itertools;

use crate::solver::{Solver, SolverResult};

/// Test a solver under two sets of assumptions and assert that the result
/// is as given. This is used in the integration tests.
#[macro_export]
macro_rules! test_assignment {
    ($solver:expr, $base_assumps:expr, $assumps:expr, $result:expr) => {{
        let mut assumps: Vec<cardenc::types::Lit> = $base_assumps.to_vec();
        assumps.extend($assumps);
        let res = $solver.solve_assumps(&assumps).unwrap();
        if res == $crate::SolverResult::Sat && res != $result {
            println!("{}", $solver.full_solution().unwrap());
        }
        assert_eq!(res, $result, "assumptions {assumps:?}");
    }};
}

/// Test a solver under given assumptions while iterating through all
/// possible assignments of the first 3 or 4 variables. This is used in the
/// integration tests.
#[macro_export]
macro_rules! test_all {
    ($solver:expr,
     $assumps:expr,
     $r111:expr,
     $r110:expr,
     $r101:expr,
     $r100:expr,
     $r011:expr,
     $r010:expr,
     $r001:expr,
     $r000:expr ) => {{
        use cardenc::lit;
        println!("testing with assumptions {:?}", $assumps);
        $crate::test_assignment!($solver, $assumps, [lit![0], lit![1], lit![2]], $r111);
        $crate::test_assignment!($solver, $assumps, [lit![0], lit![1], !lit![2]], $r110);
        $crate::test_assignment!($solver, $assumps, [lit![0], !lit![1], lit![2]], $r101);
        $crate::test_assignment!($solver, $assumps, [lit![0], !lit![1], !lit![2]], $r100);
        $crate::test_assignment!($solver, $assumps, [!lit![0], lit![1], lit![2]], $r011);
        $crate::test_assignment!($solver, $assumps, [!lit![0], lit![1], !lit![2]], $r010);
        $crate::test_assignment!($solver, $assumps, [!lit![0], !lit![1], lit![2]], $r001);
        $crate::test_assignment!($solver, $assumps, [!lit![0], !lit![1], !lit![2]], $r000);
    }};
    ($solver:expr,
     $assumps:expr,
     $r1111:expr,
     $r1110:expr,
     $r1101:expr,
     $r1100:expr,
     $r1011:expr,
     $r1010:expr,
     $r1001:expr,
     $r1000:expr,
     $r0111:expr,
     $r0110:expr,
     $r0101:expr,
     $r0100:expr,
     $r0011:expr,
     $r0010:expr,
     $r0001:expr,
     $r0000:expr ) => {{
        use cardenc::lit;
        println!("testing with assumptions {:?}", $assumps);
        $crate::test_assignment!($solver, $assumps, [lit![0], lit![1], lit![2], lit![3]], $r1111);
        $crate::test_assignment!($solver, $assumps, [lit![0], lit![1], lit![2], !lit![3]], $r1110);
        $crate::test_assignment!($solver, $assumps, [lit![0], lit![1], !lit![2], lit![3]], $r1101);
        $crate::test_assignment!($solver, $assumps, [lit![0], lit![1], !lit![2], !lit![3]], $r1100);
        $crate::test_assignment!($solver, $assumps, [lit![0], !lit![1], lit![2], lit![3]], $r1011);
        $crate::test_assignment!($solver, $assumps, [lit![0], !lit![1], lit![2], !lit![3]], $r1010);
        $crate::test_assignment!($solver, $assumps, [lit![0], !lit![1], !lit![2], lit![3]], $r1001);
        $crate::test_assignment!($solver, $assumps, [lit![0], !lit![1], !lit![2], !lit![3]], $r1000);
        $crate::test_assignment!($solver, $assumps, [!lit![0], lit![1], lit![2], lit![3]], $r0111);
        $crate::test_assignment!($solver, $assumps, [!lit![0], lit![1], lit![2], !lit![3]], $r0110);
        $crate::test_assignment!($solver, $assumps, [!lit![0], lit![1], !lit![2], lit![3]], $r0101);
        $crate::test_assignment!($solver, $assumps, [!lit![0], lit![1], !lit![2], !lit![3]], $r0100);
        $crate::test_assignment!($solver, $assumps, [!lit![0], !lit![1], lit![2], lit![3]], $r0011);
        $crate::test_assignment!($solver, $assumps, [!lit![0], !lit![1], lit![2], !lit![3]], $r0010);
        $crate::test_assignment!($solver, $assumps, [!lit![0], !lit![1], !lit![2], lit![3]], $r0001);
        $crate::test_assignment!($solver, $assumps, [!lit![0], !lit![1], !lit![2], !lit![3]], $r0000);
    }};
}

/// The positive literals of the first `n` variables
#[must_use]
pub fn inputs(n: u32) -> Vec<Lit> {
    (0..n).map(|idx| lit![idx]).collect()
}

/// All full assignments of `lits`, as lists of literals that are true
pub fn assignments(lits: &[Lit]) -> impl Iterator<Item = Vec<Lit>> + '_ {
    lits.iter()
        .map(|&lit| [lit, !lit])
        .multi_cartesian_product()
}

/// Number of literals in `assumps` that are in `lits`, i.e., the number of
/// true inputs under a full assignment from [`assignments`]
#[must_use]
pub fn count_true(lits: &[Lit], assumps: &[Lit]) -> usize {
    assumps.iter().filter(|lit| lits.contains(lit)).count()
}

/// Checks a CNF against the brute-force semantics: for every full
/// assignment of `lits`, the CNF must be satisfiable exactly if `holds`
/// returns true for the number of true inputs. Empty inputs are checked
/// under the empty assignment.
///
/// # Panics
///
/// If the CNF does not match the semantics.
pub fn check_semantics<F>(cnf: Cnf, lits: &[Lit], holds: F)
where
    F: Fn(usize) -> bool,
{
    let mut solver = Solver::default();
    solver.add_cnf(cnf);
    let mut checked = false;
    for assumps in assignments(lits) {
        checked = true;
        check_one(&mut solver, lits, &assumps, &holds);
    }
    if !checked {
        check_one(&mut solver, lits, &[], &holds);
    }
}

fn check_one<F>(solver: &mut Solver, lits: &[Lit], assumps: &[Lit], holds: &F)
where
    F: Fn(usize) -> bool,
{
    let expected = if holds(count_true(lits, assumps)) {
        SolverResult::Sat
    } else {
        SolverResult::Unsat
    };
    let res = solver.solve_assumps(assumps).unwrap();
    assert_eq!(res, expected, "assumptions {assumps:?}");
}

/// Whether all literals in a CNF refer to variables below `bound`
#[must_use]
pub fn vars_below(cnf: &Cnf, bound: Var) -> bool {
    cnf.iter().flatten().all(|lit| lit.var() < bound)
}

#[cfg(test)]
mod tests {
    use cardenc::{clause, instances::Cnf, lit};

    #[test]
    fn assignments() {
        let lits = super::inputs(3);
        let all: Vec<_> = super::assignments(&lits).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], vec![lit![0], lit![1], lit![2]]);
        assert_eq!(all[7], vec![!lit![0], !lit![1], !lit![2]]);
        assert_eq!(super::count_true(&lits, &all[3]), 1);
    }

    #[test]
    fn semantics_of_clause() {
        let mut cnf = Cnf::new();
        cnf.add_clause(clause![lit![0], lit![1]]);
        super::check_semantics(cnf, &super::inputs(2), |count| count >= 1);
    }
}
