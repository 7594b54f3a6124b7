use cardenc::{
    encodings::card::{ipasir, EncType},
    instances::Cnf,
    types::{Clause, Lit},
};

use cardenc_tools::utils;

fn to_cnf(clauses: Vec<Vec<i32>>) -> Cnf {
    clauses
        .into_iter()
        .map(|cl| {
            cl.into_iter()
                .map(|l| Lit::from_ipasir(l).unwrap())
                .collect::<Clause>()
        })
        .collect()
}

#[test]
fn all_families_atmost() {
    for enc in EncType::ALL {
        for n in 1..=6_i32 {
            let bounds = if enc.is_am1_only() { 1..=1 } else { 0..=n };
            for rhs in bounds {
                let ints: Vec<i32> = (1..=n).collect();
                let mut top_id = 0;
                let clauses =
                    ipasir::encode_atmost(&ints, rhs as isize, &mut top_id, enc).unwrap();
                assert!(top_id >= n.unsigned_abs());
                assert!(clauses
                    .iter()
                    .flatten()
                    .all(|&l| l != 0 && l.unsigned_abs() <= top_id));
                let lits = utils::inputs(n.unsigned_abs());
                let rhs = rhs.unsigned_abs() as usize;
                utils::check_semantics(to_cnf(clauses), &lits, |count| count <= rhs);
            }
        }
    }
}

#[test]
fn negative_literals() {
    let mut top_id = 7;
    let clauses = ipasir::encode_atleast(&[-1, -2, 3], 2, &mut top_id, EncType::Totalizer).unwrap();
    assert!(top_id > 7);
    let lits: Vec<Lit> = [-1, -2, 3]
        .into_iter()
        .map(|l| Lit::from_ipasir(l).unwrap())
        .collect();
    utils::check_semantics(to_cnf(clauses), &lits, |count| count >= 2);
}

#[test]
fn top_id_advances() {
    let mut top_id = 0;
    let first = ipasir::encode_equals(&[1, 2, 3, 4], 2, &mut top_id, EncType::SeqCounter).unwrap();
    let after_first = top_id;
    let second = ipasir::encode_atmost(&[1, 2, 3, 4], 1, &mut top_id, EncType::Ladder).unwrap();
    assert!(top_id > after_first);
    let fresh_in_second = second
        .iter()
        .flatten()
        .filter(|l| l.unsigned_abs() > 4)
        .all(|l| l.unsigned_abs() > after_first);
    assert!(fresh_in_second);
    assert!(!first.is_empty());
}
