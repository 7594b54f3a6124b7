//! # Totalizer Encoding
//!
//! Implementation of the binary adder tree totalizer encoding \[1\]. The tree
//! is built top-down with an explicit work stack, each internal node counts
//! the true inputs below it in unary.
//!
//! ## References
//!
//! - \[1\] Olivier Bailleux and Yacine Boufkhad: _Efficient CNF Encoding of
//!   Boolean Cardinality Constraints_, CP 2003.

use std::ops::Range;

use super::{baseline, BoundUpper, Encode};
use crate::{
    clause,
    encodings::{atomics, CollectClauses, EncodeStats, Error, IterInputs},
    instances::ManageVars,
    types::Lit,
};

/// Unary adder clauses `a_i & b_j -> out_(i+j)` for the outputs in `out`.
/// Clauses that only concern outputs below index `from` are skipped, they
/// are expected to exist already.
#[cfg_attr(feature = "internals", visibility::make(pub))]
pub(crate) fn unary_adder<Col>(out: &[Lit], a: &[Lit], b: &[Lit], from: usize, collector: &mut Col)
where
    Col: CollectClauses,
{
    let cap = out.len();
    let max_b = cap.min(b.len());
    let max_a = cap.min(a.len());
    collector.extend((from..max_b).map(|j| atomics::lit_impl_lit(b[j], out[j])));
    collector.extend((from..max_a).map(|i| atomics::lit_impl_lit(a[i], out[i])));
    for i in 1..=max_a {
        let min_j = (from + 1).saturating_sub(i).max(1);
        let max_j = (cap - i).min(b.len());
        collector.extend(
            (min_j..=max_j).map(|j| atomics::cube_impl_lit(&[a[i - 1], b[j - 1]], out[i + j - 1])),
        );
    }
}

/// Builds a totalizer over `lits` and returns its output literals. With a
/// `cap`, no node has more than `cap` outputs. Fewer than two inputs are
/// returned as they are.
#[cfg_attr(feature = "internals", visibility::make(pub))]
pub(crate) fn totalize<Col>(
    lits: &[Lit],
    cap: Option<usize>,
    collector: &mut Col,
    var_manager: &mut dyn ManageVars,
) -> Vec<Lit>
where
    Col: CollectClauses,
{
    if lits.len() < 2 {
        return lits.to_vec();
    }
    let width = |n: usize| cap.map_or(n, |cap| n.min(cap));
    let root: Vec<Lit> = (0..width(lits.len()))
        .map(|_| var_manager.new_lit())
        .collect();

    let mut stack: Vec<(Range<usize>, Vec<Lit>)> = vec![(0..lits.len(), root.clone())];
    while let Some((inputs, out)) = stack.pop() {
        let split = inputs.start + inputs.len() - inputs.len() / 2;
        let [first, second] = [inputs.start..split, split..inputs.end].map(|half| {
            if half.len() < 2 {
                return lits[half].to_vec();
            }
            let half_out: Vec<Lit> = (0..width(half.len()))
                .map(|_| var_manager.new_lit())
                .collect();
            stack.push((half, half_out.clone()));
            half_out
        });
        unary_adder(&out, &first, &second, 0, collector);
    }
    root
}

/// Non-incremental totalizer, only the outputs up to the bound are built.
/// For adding literals or raising the bound later, see
/// [`super::itotalizer::Forest`].
#[derive(Default, Debug, Clone)]
pub struct Totalizer {
    /// Input literals
    in_lits: Vec<Lit>,
    /// The output literals of the root after encoding
    out_lits: Vec<Lit>,
    /// The number of clauses in the encoding
    n_clauses: usize,
    /// The number of new variables in the encoding
    n_vars: u32,
}

impl Totalizer {
    /// Gets assumptions enforcing `sum <= ub` over a totalizer built with
    /// [`Totalizer::build`].
    ///
    /// # Errors
    ///
    /// [`Error::NotEncoded`] if the outputs for `ub` were not built.
    pub fn enforce_ub(&self, ub: usize) -> Result<Vec<Lit>, Error> {
        if ub >= self.in_lits.len() {
            return Ok(vec![]);
        }
        self.out_lits
            .get(ub)
            .map(|&out| vec![!out])
            .ok_or(Error::NotEncoded)
    }

    /// Builds the totalizer for bounds up to `max_ub` without enforcing a
    /// bound. Use [`Totalizer::enforce_ub`] for assumptions.
    pub fn build<Col>(&mut self, max_ub: usize, collector: &mut Col, var_manager: &mut dyn ManageVars)
    where
        Col: CollectClauses,
    {
        let prev_clauses = collector.n_clauses();
        self.build_outputs(max_ub, collector, var_manager);
        self.n_clauses += collector.n_clauses() - prev_clauses;
    }

    fn build_outputs<Col>(
        &mut self,
        max_ub: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) where
        Col: CollectClauses,
    {
        let prev_vars = var_manager.n_used();
        self.out_lits = totalize(&self.in_lits, Some(max_ub + 1), collector, var_manager);
        self.n_vars += var_manager.n_used() - prev_vars;
    }

    /// Gets the output literals of the root, output `i` is true if at least
    /// `i + 1` inputs are true
    #[must_use]
    pub fn outputs(&self) -> &[Lit] {
        &self.out_lits
    }
}

impl Encode for Totalizer {
    fn n_lits(&self) -> usize {
        self.in_lits.len()
    }
}

impl BoundUpper for Totalizer {
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
            self.build_outputs(ub, collector, var_manager);
            collector.add_clause(clause![!self.out_lits[ub]]);
        }
        self.n_clauses += collector.n_clauses() - prev_clauses;
        Ok(())
    }
}

impl IterInputs for Totalizer {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Lit>>;

    fn iter(&self) -> Self::Iter<'_> {
        self.in_lits.iter().copied()
    }
}

impl EncodeStats for Totalizer {
    fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    fn n_vars(&self) -> u32 {
        self.n_vars
    }
}

impl From<Vec<Lit>> for Totalizer {
    fn from(lits: Vec<Lit>) -> Self {
        Self {
            in_lits: lits,
            ..Default::default()
        }
    }
}

impl FromIterator<Lit> for Totalizer {
    fn from_iter<T: IntoIterator<Item = Lit>>(iter: T) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl Extend<Lit> for Totalizer {
    fn extend<T: IntoIterator<Item = Lit>>(&mut self, iter: T) {
        self.in_lits.extend(iter);
    }
}
