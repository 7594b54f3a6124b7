//! # Sorting Networks and Cardinality Networks
//!
//! Both encodings are built from odd-even merges of 2-comparators. Output
//! `i` of a network is true if at least `i + 1` of its inputs are true.
//! Inputs are padded with a single auxiliary literal that is forced false.
//!
//! With padding pruning enabled, merges over parts that consist only of the
//! padding literal are replaced by copying. The `prune-padding` cargo
//! feature sets the default for this, each encoder can override it.
//!
//! ## References
//!
//! - Kenneth E. Batcher: _Sorting Networks and their Applications_, AFIPS 1968.
//! - Roberto Asín, Robert Nieuwenhuis, Albert Oliveras and Enric
//!   Rodríguez-Carbonell: _Cardinality Networks: a theoretical and empirical
//!   study_, Constraints 2011.

use super::{baseline, BoundUpper, Encode};
use crate::{
    clause,
    encodings::{atomics, CollectClauses, EncodeStats, Error, IterInputs},
    instances::ManageVars,
    types::Lit,
    utils,
};

/// A 2-comparator over fresh outputs, `[a | b, a & b]`
fn comparator<Col>(a: Lit, b: Lit, collector: &mut Col, var_manager: &mut dyn ManageVars) -> Vec<Lit>
where
    Col: CollectClauses,
{
    let out = vec![var_manager.new_lit(), var_manager.new_lit()];
    collector.extend([
        atomics::lit_impl_lit(a, out[0]),
        atomics::lit_impl_lit(b, out[0]),
        atomics::cube_impl_lit(&[a, b], out[1]),
    ]);
    out
}

/// Checks whether `part` only contains the padding literal, judged by its
/// first and last element as the part is sorted
fn all_padding(part: &[Lit], zero: Option<Lit>) -> bool {
    zero.is_some_and(|z| part.first() == Some(&z) && part.last() == Some(&z))
}

fn odds(lits: &[Lit]) -> Vec<Lit> {
    lits.iter().step_by(2).copied().collect()
}

fn evens(lits: &[Lit]) -> Vec<Lit> {
    lits.iter().skip(1).step_by(2).copied().collect()
}

/// Result of a merge over two parts of which at least one is all padding
fn copy_merge(a: &[Lit], b: &[Lit], zero: Option<Lit>) -> Vec<Lit> {
    if all_padding(a, zero) {
        b.iter().chain(a).copied().collect()
    } else {
        a.iter().chain(b).copied().collect()
    }
}

/// Odd-even merge of two sorted sequences of the same power-of-two length
/// into one sorted sequence of twice the length. `zero` is the padding
/// literal if padding pruning is enabled.
#[cfg_attr(feature = "internals", visibility::make(pub))]
pub(crate) fn half_merge<Col>(
    a: &[Lit],
    b: &[Lit],
    zero: Option<Lit>,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Vec<Lit>
where
    Col: CollectClauses,
{
    debug_assert_eq!(a.len(), b.len());
    if all_padding(a, zero) || all_padding(b, zero) {
        return copy_merge(a, b, zero);
    }
    if a.len() == 1 {
        return comparator(a[0], b[0], collector, var_manager);
    }
    let m = a.len();
    let d = half_merge(&odds(a), &odds(b), zero, collector, var_manager);
    let e = half_merge(&evens(a), &evens(b), zero, collector, var_manager);

    let mut out = Vec::with_capacity(2 * m);
    out.push(d[0]);
    out.extend((0..2 * m - 2).map(|_| var_manager.new_lit()));
    out.push(e[m - 1]);
    for i in 0..m - 1 {
        collector.extend([
            atomics::lit_impl_lit(d[i + 1], out[2 * i + 1]),
            atomics::lit_impl_lit(e[i], out[2 * i + 1]),
            atomics::cube_impl_lit(&[d[i + 1], e[i]], out[2 * i + 2]),
        ]);
    }
    out
}

/// Odd-even merge sort of a sequence with a power-of-two length of at least 2
#[cfg_attr(feature = "internals", visibility::make(pub))]
pub(crate) fn half_sorter<Col>(
    lits: &[Lit],
    zero: Option<Lit>,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Vec<Lit>
where
    Col: CollectClauses,
{
    debug_assert!(lits.len() >= 2 && lits.len().is_power_of_two());
    if lits.len() == 2 {
        return half_merge(&lits[..1], &lits[1..], zero, collector, var_manager);
    }
    let (lower, upper) = lits.split_at(lits.len() / 2);
    let lower = half_sorter(lower, zero, collector, var_manager);
    let upper = half_sorter(upper, zero, collector, var_manager);
    half_merge(&lower, &upper, zero, collector, var_manager)
}

/// Simplified merge of two sorted sequences of length `m` that only
/// produces the first `m + 1` outputs
#[cfg_attr(feature = "internals", visibility::make(pub))]
pub(crate) fn simple_merge<Col>(
    a: &[Lit],
    b: &[Lit],
    zero: Option<Lit>,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Vec<Lit>
where
    Col: CollectClauses,
{
    debug_assert_eq!(a.len(), b.len());
    let m = a.len();
    if all_padding(a, zero) || all_padding(b, zero) {
        let mut out = copy_merge(a, b, zero);
        out.truncate(m + 1);
        return out;
    }
    if m == 1 {
        return comparator(a[0], b[0], collector, var_manager);
    }
    let d = simple_merge(&odds(a), &odds(b), zero, collector, var_manager);
    let e = simple_merge(&evens(a), &evens(b), zero, collector, var_manager);

    let mut out = Vec::with_capacity(m + 1);
    out.push(d[0]);
    out.extend((0..m).map(|_| var_manager.new_lit()));
    for i in 0..m / 2 {
        collector.extend([
            atomics::lit_impl_lit(d[i + 1], out[2 * i + 1]),
            atomics::lit_impl_lit(e[i], out[2 * i + 1]),
            atomics::cube_impl_lit(&[d[i + 1], e[i]], out[2 * i + 2]),
        ]);
    }
    out
}

/// Pads `lits` to length `len` with a fresh literal that is forced false
fn pad<Col>(
    lits: &[Lit],
    len: usize,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> (Vec<Lit>, Option<Lit>)
where
    Col: CollectClauses,
{
    let mut padded = lits.to_vec();
    if len == lits.len() {
        return (padded, None);
    }
    let zero = var_manager.new_lit();
    collector.add_clause(clause![!zero]);
    padded.resize(len, zero);
    (padded, Some(zero))
}

/// Odd-even sorting network over all inputs
#[derive(Debug, Clone)]
pub struct SortingNetwork {
    /// Input literals
    in_lits: Vec<Lit>,
    /// Whether merges over padding are replaced by copies
    prune_padding: bool,
    /// The number of clauses in the encoding
    n_clauses: usize,
    /// The number of new variables in the encoding
    n_vars: u32,
}

impl SortingNetwork {
    /// Sets whether merges over padding only are skipped
    pub fn set_prune_padding(&mut self, prune: bool) {
        self.prune_padding = prune;
    }
}

impl Default for SortingNetwork {
    fn default() -> Self {
        Self::from(vec![])
    }
}

impl Encode for SortingNetwork {
    fn n_lits(&self) -> usize {
        self.in_lits.len()
    }
}

impl BoundUpper for SortingNetwork {
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
            let len = utils::pow2_at_least(self.in_lits.len());
            let (padded, zero) = pad(&self.in_lits, len, collector, var_manager);
            let zero = zero.filter(|_| self.prune_padding);
            let out = half_sorter(&padded, zero, collector, var_manager);
            collector.add_clause(clause![!out[ub]]);
        }
        self.n_clauses += collector.n_clauses() - prev_clauses;
        self.n_vars += var_manager.n_used() - prev_vars;
        Ok(())
    }
}

/// Cardinality network: blocks of the smallest power of two above the bound
/// are sorted, then merged keeping only as many outputs as the bound needs
#[derive(Debug, Clone)]
pub struct CardinalityNetwork {
    /// Input literals
    in_lits: Vec<Lit>,
    /// Whether merges over padding are replaced by copies
    prune_padding: bool,
    /// The number of clauses in the encoding
    n_clauses: usize,
    /// The number of new variables in the encoding
    n_vars: u32,
}

impl CardinalityNetwork {
    /// Sets whether merges over padding only are skipped
    pub fn set_prune_padding(&mut self, prune: bool) {
        self.prune_padding = prune;
    }
}

impl Default for CardinalityNetwork {
    fn default() -> Self {
        Self::from(vec![])
    }
}

impl Encode for CardinalityNetwork {
    fn n_lits(&self) -> usize {
        self.in_lits.len()
    }
}

impl BoundUpper for CardinalityNetwork {
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
            let block = utils::pow2_above(ub);
            let len = self.in_lits.len().div_ceil(block) * block;
            let (padded, zero) = pad(&self.in_lits, len, collector, var_manager);
            let zero = zero.filter(|_| self.prune_padding);

            let sorted: Vec<Vec<Lit>> = padded
                .chunks(block)
                .map(|chunk| half_sorter(chunk, zero, collector, var_manager))
                .collect();
            let out = sorted
                .into_iter()
                .rev()
                .reduce(|merged, next| {
                    let mut out = simple_merge(&next, &merged, zero, collector, var_manager);
                    out.pop();
                    out
                })
                .unwrap_or_default();
            collector.add_clause(clause![!out[ub]]);
        }
        self.n_clauses += collector.n_clauses() - prev_clauses;
        self.n_vars += var_manager.n_used() - prev_vars;
        Ok(())
    }
}

macro_rules! network_boilerplate {
    ($net:ty) => {
        impl IterInputs for $net {
            type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Lit>>;

            fn iter(&self) -> Self::Iter<'_> {
                self.in_lits.iter().copied()
            }
        }

        impl EncodeStats for $net {
            fn n_clauses(&self) -> usize {
                self.n_clauses
            }

            fn n_vars(&self) -> u32 {
                self.n_vars
            }
        }

        impl From<Vec<Lit>> for $net {
            fn from(lits: Vec<Lit>) -> Self {
                Self {
                    in_lits: lits,
                    prune_padding: cfg!(feature = "prune-padding"),
                    n_clauses: 0,
                    n_vars: 0,
                }
            }
        }

        impl FromIterator<Lit> for $net {
            fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
                Self::from(Vec::from_iter(iter))
            }
        }

        impl Extend<Lit> for $net {
            fn extend<T: IntoIterator<Item = Lit>>(&mut self, iter: T) {
                self.in_lits.extend(iter);
            }
        }
    };
}

network_boilerplate!(SortingNetwork);
network_boilerplate!(CardinalityNetwork);

#[cfg(test)]
mod tests {
    use crate::{
        clause,
        encodings::{card::BoundUpper, EncodeStats},
        instances::{BasicVarManager, Cnf, ManageVars},
        lit, var,
    };

    #[test]
    fn comparator() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![2]);
        let out = super::half_merge(&[lit![0]], &[lit![1]], None, &mut cnf, &mut vm);
        assert_eq!(out, vec![lit![2], lit![3]]);
        assert_eq!(cnf.len(), 3);
        assert_eq!(cnf[0], clause![!lit![0], lit![2]]);
        assert_eq!(cnf[1], clause![!lit![1], lit![2]]);
        assert_eq!(cnf[2], clause![!lit![0], !lit![1], lit![3]]);
    }

    #[test]
    fn sorter_four() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![4]);
        let out = super::half_sorter(
            &[lit![0], lit![1], lit![2], lit![3]],
            None,
            &mut cnf,
            &mut vm,
        );
        // two comparators for the halves, two for the odd and even merges
        // and one final comparator with two fresh outputs
        assert_eq!(out.len(), 4);
        assert_eq!(vm.n_used(), 14);
        assert_eq!(cnf.len(), 15);
    }

    #[test]
    fn padded_sorting_network() {
        let mut enc: super::SortingNetwork =
            [lit![0], lit![1], lit![2], lit![3], lit![4]].into_iter().collect();
        enc.set_prune_padding(false);
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![5]);
        enc.encode_ub(2, &mut cnf, &mut vm).unwrap();
        assert_eq!(cnf[0], clause![!lit![5]]);
        assert_eq!(enc.n_vars(), vm.n_used() - 5);
        assert_eq!(enc.n_clauses(), cnf.len());
    }

    #[test]
    fn pruning_saves_comparators() {
        let lits = [lit![0], lit![1], lit![2], lit![3], lit![4]];
        let mut full = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![5]);
        let mut enc = super::SortingNetwork::from(lits.to_vec());
        enc.set_prune_padding(false);
        enc.encode_ub(2, &mut full, &mut vm).unwrap();

        let mut pruned = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![5]);
        let mut enc = super::SortingNetwork::from(lits.to_vec());
        enc.set_prune_padding(true);
        enc.encode_ub(2, &mut pruned, &mut vm).unwrap();

        assert!(pruned.len() < full.len());
    }

    #[test]
    fn cardinality_network_blocks() {
        let mut enc: super::CardinalityNetwork = (0..6).map(|idx| lit![idx]).collect();
        enc.set_prune_padding(false);
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![6]);
        enc.encode_ub(1, &mut cnf, &mut vm).unwrap();
        // three blocks of two and no padding, the first block is sorted first
        assert_eq!(cnf[0], clause![!lit![0], lit![6]]);
        assert_eq!(cnf[3], clause![!lit![2], lit![8]]);
        assert_eq!(cnf[cnf.len() - 1].len(), 1);
        assert_eq!(enc.n_clauses(), cnf.len());
    }
}
