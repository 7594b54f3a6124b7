use cardenc::{
    encodings::{
        card::{
            itotalizer::{Forest, TreeId},
            ITotalizer,
        },
        EncodeStats, Error, IterInputs,
    },
    instances::{BasicVarManager, Cnf, ManageVars},
    lit,
    types::Lit,
    var,
};

use cardenc_tools::{utils, Solver, SolverResult};

/// Checks that the count literals of a tree over `lits` are implied for
/// every assignment: count literal `i` can only be false if at most `i`
/// inputs are true.
fn check_counts(cnf: &Cnf, lits: &[Lit], counts: &[Lit]) {
    let mut solver = Solver::default();
    solver.add_cnf(cnf.clone());
    for assign in utils::assignments(lits) {
        let true_inputs = utils::count_true(lits, &assign);
        for (idx, &count) in counts.iter().enumerate() {
            let mut assumps = assign.clone();
            assumps.push(!count);
            let res = solver.solve_assumps(&assumps).unwrap();
            assert_eq!(
                res == SolverResult::Sat,
                true_inputs <= idx,
                "count literal {idx} under {assign:?}"
            );
        }
    }
}

#[test]
fn build_and_increase() {
    let lits = utils::inputs(6);
    let mut var_manager = BasicVarManager::from_next_free(var![6]);
    let mut cnf = Cnf::new();
    let mut tot = ITotalizer::new(lits.clone(), 1, &mut cnf, &mut var_manager).unwrap();
    assert_eq!(tot.rhs().unwrap().len(), 2);
    check_counts(&cnf, &lits, tot.rhs().unwrap());

    let n_used = var_manager.n_used();
    tot.increase(3, &mut cnf, &mut var_manager).unwrap();
    assert_eq!(tot.rhs().unwrap().len(), 4);
    assert_eq!(tot.ub(), 3);
    assert!(var_manager.n_used() > n_used);
    check_counts(&cnf, &lits, tot.rhs().unwrap());

    // no-op increases
    let n_clauses = cnf.len();
    tot.increase(2, &mut cnf, &mut var_manager).unwrap();
    tot.increase(3, &mut cnf, &mut var_manager).unwrap();
    assert_eq!(cnf.len(), n_clauses);
    assert_eq!(tot.n_clauses(), cnf.len());
    assert_eq!(tot.n_vars(), var_manager.n_used() - 6);
}

#[test]
fn extend_skips_known_lits() {
    let mut var_manager = BasicVarManager::from_next_free(var![5]);
    let mut cnf = Cnf::new();
    let mut tot =
        ITotalizer::new(vec![lit![0], lit![1], lit![2]], 1, &mut cnf, &mut var_manager).unwrap();
    tot.extend(
        &[lit![4], lit![1], lit![3], lit![4]],
        Some(2),
        &mut cnf,
        &mut var_manager,
    )
    .unwrap();
    let inputs: Vec<_> = tot.iter().collect();
    assert_eq!(inputs, vec![lit![0], lit![1], lit![2], lit![3], lit![4]]);
    assert_eq!(tot.rhs().unwrap().len(), 3);
    check_counts(&cnf, &inputs, tot.rhs().unwrap());
}

#[test]
fn merge_matches_direct_build() {
    let lits = utils::inputs(6);
    let mut var_manager = BasicVarManager::from_next_free(var![6]);
    let mut cnf = Cnf::new();
    let mut first = ITotalizer::new(lits[..3].to_vec(), 1, &mut cnf, &mut var_manager).unwrap();
    let second = ITotalizer::new(lits[3..].to_vec(), 2, &mut cnf, &mut var_manager).unwrap();
    first
        .merge_with(second, None, &mut cnf, &mut var_manager)
        .unwrap();
    assert_eq!(first.ub(), 2);
    assert_eq!(first.rhs().unwrap().len(), 3);
    check_counts(&cnf, &lits, first.rhs().unwrap());

    let mut direct_vm = BasicVarManager::from_next_free(var![6]);
    let mut direct_cnf = Cnf::new();
    let direct = ITotalizer::new(lits.clone(), 2, &mut direct_cnf, &mut direct_vm).unwrap();
    check_counts(&direct_cnf, &lits, direct.rhs().unwrap());

    for ub in 0..=2 {
        for (cnf, tot) in [(&cnf, &first), (&direct_cnf, &direct)] {
            let mut solver = Solver::default();
            solver.add_cnf(cnf.clone());
            let bound = tot.enforce_ub(ub).unwrap();
            for assign in utils::assignments(&lits) {
                let mut assumps = bound.clone();
                let count = utils::count_true(&lits, &assign);
                assumps.extend(assign);
                let res = solver.solve_assumps(&assumps).unwrap();
                assert_eq!(res == SolverResult::Sat, count <= ub);
            }
        }
    }
    assert_eq!(first.enforce_ub(3), Err(Error::NotEncoded));
}

#[test]
fn forest_lifecycle() {
    let mut var_manager = BasicVarManager::from_next_free(var![8]);
    let mut cnf = Cnf::new();
    let mut forest = Forest::new();

    let left = forest
        .build(&[lit![0], lit![1], lit![2], lit![3]], 1, &mut cnf, &mut var_manager)
        .unwrap();
    let right = forest
        .build(&[lit![4], lit![5]], 1, &mut cnf, &mut var_manager)
        .unwrap();
    let root = forest
        .merge(left, right, 2, &mut cnf, &mut var_manager)
        .unwrap();
    let root = forest
        .extend(&[lit![6], lit![7]], root, 3, &mut cnf, &mut var_manager)
        .unwrap();
    assert_eq!(forest.n_inputs(root), Ok(8));
    let counts = forest.lits(root).unwrap().to_vec();
    assert_eq!(counts.len(), 4);
    check_counts(&cnf, &utils::inputs(8), &counts);

    forest.increase(root, 5, &mut cnf, &mut var_manager).unwrap();
    let counts = forest.lits(root).unwrap().to_vec();
    assert_eq!(counts.len(), 6);
    check_counts(&cnf, &utils::inputs(8), &counts);
    assert_eq!(forest.n_clauses(), cnf.len());

    for stale in [left, right] {
        assert_eq!(forest.lits(stale), Err(Error::InvalidTreeHandle));
    }
    forest.destroy(root).unwrap();
    assert_eq!(forest.n_inputs(root), Err(Error::InvalidTreeHandle));
    assert_eq!(
        forest.increase(root, 6, &mut cnf, &mut var_manager),
        Err(Error::InvalidTreeHandle)
    );
}

#[test]
fn absorbed_handles() {
    let mut var_manager = BasicVarManager::from_next_free(var![4]);
    let mut cnf = Cnf::new();
    let mut forest = Forest::new();
    let mut other = Forest::new();
    let here = forest
        .build(&[lit![0], lit![1]], 1, &mut cnf, &mut var_manager)
        .unwrap();
    let there = other
        .build(&[lit![2], lit![3]], 1, &mut cnf, &mut var_manager)
        .unwrap();
    let moved: TreeId = forest.absorb(other, there).unwrap();
    assert_ne!(moved, here);
    let root = forest
        .merge(here, moved, 3, &mut cnf, &mut var_manager)
        .unwrap();
    assert_eq!(forest.n_clauses(), cnf.len());
    check_counts(&cnf, &utils::inputs(4), forest.lits(root).unwrap());
}
