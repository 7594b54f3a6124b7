//! # Modulo Totalizer Encodings
//!
//! The modulo totalizer represents the count of true inputs below each node
//! as two unary digits for a base `p`: the number of full groups of `p`
//! (upper) and the remainder (lower). This reduces the number of auxiliary
//! variables compared to the [`super::Totalizer`].
//!
//! The k-approximate variant chooses the base from the bound rather than
//! from the number of inputs and caps the upper digits at `k / p`.
//!
//! ## References
//!
//! - Toru Ogawa, Yangyang Liu, Ryuzo Hasegawa, Miyuki Koshimura and Hiroshi
//!   Fujita: _Modulo Based CNF Encoding of Cardinality Constraints and Its
//!   Application to MaxSAT Solvers_, ICTAI 2013.
//! - António Morgado, Alexey Ignatiev and Joao Marques-Silva: _MSCG: Robust
//!   Core-Guided MaxSAT Solving_, JSAT 2015.

use std::ops::Range;

use super::{baseline, totalizer, BoundUpper, Encode};
use crate::{
    clause,
    encodings::{CollectClauses, EncodeStats, Error, IterInputs},
    instances::ManageVars,
    types::{Clause, Lit},
    utils,
};

/// Upper and lower unary digits of a node
#[derive(Debug, Clone, Default)]
struct Digits {
    upper: Vec<Lit>,
    lower: Vec<Lit>,
}

/// Modulo unary adder from the digits of two children into the digits of a
/// parent. Uses one fresh carry variable.
fn modulo_adder<Col>(
    parent: &Digits,
    first: &Digits,
    second: &Digits,
    p: usize,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) where
    Col: CollectClauses,
{
    let (hs, rs) = (&parent.upper, &parent.lower);
    let (fs, a) = (&first.upper, &first.lower);
    let (gs, b) = (&second.upper, &second.lower);
    let sigma = hs.len();
    let carry = var_manager.new_lit();

    // lower digits, the carry absorbs sums reaching the base
    collector.extend(b.iter().zip(rs).map(|(&bj, &rj)| clause![!bj, rj, carry]));
    collector.extend(a.iter().zip(rs).map(|(&ai, &ri)| clause![!ai, ri, carry]));
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cl = match (i + j).cmp(&p) {
                std::cmp::Ordering::Less => clause![!a[i - 1], !b[j - 1], rs[i + j - 1], carry],
                std::cmp::Ordering::Greater => {
                    clause![!a[i - 1], !b[j - 1], rs[(i + j) % p - 1]]
                }
                std::cmp::Ordering::Equal => clause![!a[i - 1], !b[j - 1], carry],
            };
            collector.add_clause(cl);
        }
    }

    // upper digits, plus one if there is a carry
    collector.add_clause(match hs.first() {
        Some(&h1) => clause![!carry, h1],
        None => clause![!carry],
    });
    for child in [gs, fs] {
        for j in 1..=child.len() {
            let gj = child[j - 1];
            collector.add_clause(if j <= sigma {
                clause![!gj, hs[j - 1]]
            } else {
                clause![!gj]
            });
            collector.add_clause(if j < sigma {
                clause![!carry, !gj, hs[j]]
            } else {
                clause![!carry, !gj]
            });
        }
    }
    for i in 1..=fs.len() {
        for j in 1..=gs.len() {
            let (fi, gj) = (fs[i - 1], gs[j - 1]);
            collector.add_clause(if i + j <= sigma {
                clause![!fi, !gj, hs[i + j - 1]]
            } else {
                clause![!fi, !gj]
            });
            let mut cl: Clause = clause![!carry, !fi, !gj];
            if i + j < sigma {
                cl.add(hs[i + j]);
            }
            collector.add_clause(cl);
        }
    }
}

/// Allocates the digits of a part of the inputs. Parts smaller than the base
/// are directly encoded as a totalizer, all others still need to be split,
/// which is signalled by the returned flag.
fn node_digits<Col>(
    part: &[Lit],
    p: usize,
    k: Option<usize>,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> (Digits, bool)
where
    Col: CollectClauses,
{
    if part.len() < p {
        let lower = totalizer::totalize(part, None, collector, var_manager);
        return (
            Digits {
                upper: vec![],
                lower,
            },
            false,
        );
    }
    let n_upper = k.map_or(part.len() / p, |k| (part.len() / p).min(k / p));
    let upper = (0..n_upper).map(|_| var_manager.new_lit()).collect();
    let lower = (0..p - 1).map(|_| var_manager.new_lit()).collect();
    (Digits { upper, lower }, true)
}

/// Builds the modulo totalizer over `lits` with base `p` and returns the
/// digits of the root. With a bound `k`, upper digits are capped at `k / p`.
fn modulo_totalize<Col>(
    lits: &[Lit],
    p: usize,
    k: Option<usize>,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Digits
where
    Col: CollectClauses,
{
    let (root, split) = node_digits(lits, p, k, collector, var_manager);
    if !split {
        return root;
    }
    let mut stack: Vec<(Range<usize>, Digits)> = vec![(0..lits.len(), root.clone())];
    while let Some((inputs, parent)) = stack.pop() {
        let mid = inputs.start + inputs.len() - inputs.len() / 2;
        let [first, second] = [inputs.start..mid, mid..inputs.end].map(|half| {
            let (digits, split) = node_digits(&lits[half.clone()], p, k, collector, var_manager);
            if split {
                stack.push((half, digits.clone()));
            }
            digits
        });
        modulo_adder(&parent, &first, &second, p, collector, var_manager);
    }
    root
}

/// Enforces `count <= k` on the root digits
fn comparator<Col>(root: &Digits, p: usize, k: usize, collector: &mut Col)
where
    Col: CollectClauses,
{
    let (ro, nu) = (k / p, k % p);
    collector.extend(root.upper.iter().skip(ro).map(|&u| clause![!u]));
    for i in nu + 1..p {
        let Some(&li) = root.lower.get(i - 1) else {
            break;
        };
        if ro == 0 {
            collector.add_clause(clause![!li]);
        } else if let Some(&u) = root.upper.get(ro - 1) {
            collector.add_clause(clause![!u, !li]);
        }
    }
}

macro_rules! modulo_encoding {
    ($(#[$doc:meta])* $name:ident, $approx:literal) => {
        $(#[$doc])*
        #[derive(Default, Debug, Clone)]
        pub struct $name {
            /// Input literals
            in_lits: Vec<Lit>,
            /// The number of clauses in the encoding
            n_clauses: usize,
            /// The number of new variables in the encoding
            n_vars: u32,
        }

        impl Encode for $name {
            fn n_lits(&self) -> usize {
                self.in_lits.len()
            }
        }

        impl BoundUpper for $name {
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
                let prev_vars = var_manager.n_used();
                if !baseline::atmost(&self.in_lits, ub, collector) {
                    let (p, cap) = if $approx {
                        (utils::modulo_base(ub), Some(ub))
                    } else {
                        (utils::modulo_base(self.in_lits.len()), None)
                    };
                    let root = modulo_totalize(&self.in_lits, p, cap, collector, var_manager);
                    comparator(&root, p, ub, collector);
                }
                self.n_clauses += collector.n_clauses() - prev_clauses;
                self.n_vars += var_manager.n_used() - prev_vars;
                Ok(())
            }
        }

        impl IterInputs for $name {
            type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Lit>>;

            fn iter(&self) -> Self::Iter<'_> {
                self.in_lits.iter().copied()
            }
        }

        impl EncodeStats for $name {
            fn n_clauses(&self) -> usize {
                self.n_clauses
            }

            fn n_vars(&self) -> u32 {
                self.n_vars
            }
        }

        impl From<Vec<Lit>> for $name {
            fn from(lits: Vec<Lit>) -> Self {
                Self {
                    in_lits: lits,
                    n_clauses: 0,
                    n_vars: 0,
                }
            }
        }

        impl FromIterator<Lit> for $name {
            fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
                Self::from(Vec::from_iter(iter))
            }
        }

        impl Extend<Lit> for $name {
            fn extend<T: IntoIterator<Item = Lit>>(&mut self, iter: T) {
                self.in_lits.extend(iter);
            }
        }
    };
}

modulo_encoding!(
    /// The modulo totalizer with base `max(2, floor(sqrt(n)))`
    ModuloTotalizer,
    false
);

modulo_encoding!(
    /// The k-approximate modulo totalizer with base `max(2, floor(sqrt(k)))`
    /// for the bound `k`
    KModuloTotalizer,
    true
);

#[cfg(test)]
mod tests {
    use super::Digits;
    use crate::{
        clause,
        encodings::{card::BoundUpper, EncodeStats},
        instances::{BasicVarManager, Cnf, ManageVars},
        lit, var,
    };

    #[test]
    fn comparator() {
        let root = Digits {
            upper: vec![lit![0], lit![1], lit![2]],
            lower: vec![lit![3], lit![4]],
        };
        let mut cnf = Cnf::new();
        // 7 = 2 * 3 + 1
        super::comparator(&root, 3, 7, &mut cnf);
        assert_eq!(cnf.len(), 2);
        assert_eq!(cnf[0], clause![!lit![2]]);
        assert_eq!(cnf[1], clause![!lit![1], !lit![4]]);

        let mut cnf = Cnf::new();
        super::comparator(&root, 3, 1, &mut cnf);
        assert_eq!(cnf.len(), 4);
        assert_eq!(cnf[3], clause![!lit![4]]);
    }

    #[test]
    fn small_parts_use_totalizer() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![3]);
        let root = super::modulo_totalize(&[lit![0], lit![1], lit![2]], 4, None, &mut cnf, &mut vm);
        assert!(root.upper.is_empty());
        assert_eq!(root.lower.len(), 3);
    }

    #[test]
    fn adder_digits() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![4]);
        let root = super::modulo_totalize(
            &[lit![0], lit![1], lit![2], lit![3]],
            2,
            None,
            &mut cnf,
            &mut vm,
        );
        // two full groups of two, one remainder digit
        assert_eq!(root.upper, vec![lit![4], lit![5]]);
        assert_eq!(root.lower, vec![lit![6]]);
        // root digits, digits of both halves and three carries
        assert_eq!(vm.n_used(), 4 + 3 + 2 * 2 + 3);
    }

    #[test]
    fn stats() {
        let mut enc: super::ModuloTotalizer = (0..9).map(|idx| lit![idx]).collect();
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![9]);
        enc.encode_ub(4, &mut cnf, &mut vm).unwrap();
        assert_eq!(enc.n_clauses(), cnf.len());
        assert_eq!(enc.n_vars(), vm.n_used() - 9);

        let mut enc: super::KModuloTotalizer = (0..9).map(|idx| lit![idx]).collect();
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![9]);
        enc.encode_ub(2, &mut cnf, &mut vm).unwrap();
        assert_eq!(enc.n_clauses(), cnf.len());
    }
}
