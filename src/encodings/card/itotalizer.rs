//! # Incremental Totalizer
//!
//! Totalizer trees that can be extended after they were encoded \[1\]: the
//! bound can be increased, trees can be merged and new input literals can
//! be added. All trees live in a [`Forest`] and are referred to by
//! [`TreeId`] handles. [`ITotalizer`] wraps a single tree with its own
//! forest.
//!
//! Count literal `i` of a tree is true if at least `i + 1` of the tree's
//! inputs are true. A tree built or increased for the bound `rhs` has
//! `min(rhs + 1, n)` count literals.
//!
//! ## References
//!
//! - \[1\] Ruben Martins, Saurabh Joshi, Vasco Manquinho and Inês Lynce:
//!   _Incremental Cardinality Constraints for MaxSAT_, CP 2014.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::totalizer::unary_adder;
use crate::{
    encodings::{CollectClauses, EncodeStats, Error, IterInputs},
    instances::ManageVars,
    types::Lit,
};

/// Handle of a tree in a [`Forest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

#[derive(Debug, Clone)]
struct Node {
    /// The count literals of the node
    lits: Vec<Lit>,
    /// The number of input literals below the node
    n_inputs: usize,
    /// Left and right child, `None` for leaves
    children: Option<(usize, usize)>,
    /// Whether the node is the root of a tree that can be handed out
    root: bool,
}

impl Node {
    fn leaf(lit: Lit) -> Self {
        Node {
            lits: vec![lit],
            n_inputs: 1,
            children: None,
            root: false,
        }
    }
}

/// Arena of incremental totalizer trees
#[derive(Debug, Clone, Default)]
pub struct Forest {
    /// Slots of the nodes. Destroyed nodes leave an empty slot so that
    /// handles are never reused, the arena therefore never shrinks.
    nodes: Vec<Option<Node>>,
    /// The number of clauses in the encoding
    n_clauses: usize,
    /// The number of new variables in the encoding
    n_vars: u32,
}

impl Forest {
    /// Creates an empty forest
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, idx: usize) -> Result<&Node, Error> {
        self.nodes
            .get(idx)
            .and_then(Option::as_ref)
            .ok_or(Error::InvalidTreeHandle)
    }

    fn node_mut(&mut self, idx: usize) -> Result<&mut Node, Error> {
        self.nodes
            .get_mut(idx)
            .and_then(Option::as_mut)
            .ok_or(Error::InvalidTreeHandle)
    }

    /// Gets the root node of a live tree
    fn root(&self, tree: TreeId) -> Result<&Node, Error> {
        let node = self.node(tree.0)?;
        if node.root {
            Ok(node)
        } else {
            Err(Error::InvalidTreeHandle)
        }
    }

    fn insert(&mut self, node: Node) -> usize {
        self.nodes.push(Some(node));
        self.nodes.len() - 1
    }

    /// Adds a parent of two nodes with the count literals needed for `rhs`
    fn add_parent<Col>(
        &mut self,
        left: usize,
        right: usize,
        rhs: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<usize, Error>
    where
        Col: CollectClauses,
    {
        let (left_node, right_node) = (self.node(left)?, self.node(right)?);
        let n_inputs = left_node.n_inputs + right_node.n_inputs;
        let lits: Vec<Lit> = (0..(rhs + 1).min(n_inputs))
            .map(|_| var_manager.new_lit())
            .collect();
        unary_adder(&lits, &left_node.lits, &right_node.lits, 0, collector);
        for child in [left, right] {
            self.node_mut(child)?.root = false;
        }
        Ok(self.insert(Node {
            lits,
            n_inputs,
            children: Some((left, right)),
            root: true,
        }))
    }

    /// Builds a new tree over `lits` for the bound `rhs`. Nodes are formed
    /// by repeatedly joining the two oldest nodes.
    ///
    /// # Errors
    ///
    /// [`Error::NoInputs`] if `lits` is empty.
    pub fn build<Col>(
        &mut self,
        lits: &[Lit],
        rhs: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<TreeId, Error>
    where
        Col: CollectClauses,
    {
        if lits.is_empty() {
            return Err(Error::NoInputs);
        }
        let prev_clauses = collector.n_clauses();
        let prev_vars = var_manager.n_used();

        let mut queue: VecDeque<usize> = lits
            .iter()
            .map(|&lit| self.insert(Node::leaf(lit)))
            .collect();
        while queue.len() > 1 {
            let left = queue.pop_front().ok_or(Error::NoInputs)?;
            let right = queue.pop_front().ok_or(Error::NoInputs)?;
            queue.push_back(self.add_parent(left, right, rhs, collector, var_manager)?);
        }
        let root = queue.pop_front().ok_or(Error::NoInputs)?;
        self.node_mut(root)?.root = true;

        self.n_clauses += collector.n_clauses() - prev_clauses;
        self.n_vars += var_manager.n_used() - prev_vars;
        debug!(n_lits = lits.len(), rhs, root, "built totalizer tree");
        Ok(TreeId(root))
    }

    /// Increases the bound a tree is encoded for. Only count literals that
    /// were not needed before and their clauses are added, children are
    /// increased before their parents. Does nothing if the tree already
    /// supports `rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] if `tree` is not a live tree.
    pub fn increase<Col>(
        &mut self,
        tree: TreeId,
        rhs: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        self.root(tree)?;
        let prev_clauses = collector.n_clauses();
        let prev_vars = var_manager.n_used();

        // (node, children done)
        let mut stack = vec![(tree.0, false)];
        while let Some((idx, children_done)) = stack.pop() {
            let node = self.node(idx)?;
            let needed = (rhs + 1).min(node.n_inputs);
            if needed <= node.lits.len() {
                continue;
            }
            let Some((left, right)) = node.children else {
                continue;
            };
            if !children_done {
                stack.extend([(idx, true), (right, false), (left, false)]);
                continue;
            }
            let from = node.lits.len();
            let mut lits = node.lits.clone();
            lits.extend((from..needed).map(|_| var_manager.new_lit()));
            unary_adder(
                &lits,
                &self.node(left)?.lits,
                &self.node(right)?.lits,
                from,
                collector,
            );
            self.node_mut(idx)?.lits = lits;
        }

        let n_new = collector.n_clauses() - prev_clauses;
        self.n_clauses += n_new;
        self.n_vars += var_manager.n_used() - prev_vars;
        trace!(tree = tree.0, rhs, n_new, "increased totalizer tree");
        Ok(())
    }

    /// Merges two trees under a new root, after increasing both to `rhs`.
    /// Both handles become invalid, the returned one refers to the merged
    /// tree.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] if either handle is not a live tree or
    /// both are the same.
    pub fn merge<Col>(
        &mut self,
        first: TreeId,
        second: TreeId,
        rhs: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<TreeId, Error>
    where
        Col: CollectClauses,
    {
        self.root(first)?;
        self.root(second)?;
        if first == second {
            return Err(Error::InvalidTreeHandle);
        }
        self.increase(first, rhs, collector, var_manager)?;
        self.increase(second, rhs, collector, var_manager)?;

        let prev_clauses = collector.n_clauses();
        let prev_vars = var_manager.n_used();
        let root = self.add_parent(first.0, second.0, rhs, collector, var_manager)?;
        self.n_clauses += collector.n_clauses() - prev_clauses;
        self.n_vars += var_manager.n_used() - prev_vars;
        debug!(first = first.0, second = second.0, rhs, root, "merged totalizer trees");
        Ok(TreeId(root))
    }

    /// Adds new input literals to a tree by building a tree over them and
    /// merging it into the existing one. The old handle becomes invalid.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] if `tree` is not a live tree,
    /// [`Error::NoInputs`] if `lits` is empty.
    pub fn extend<Col>(
        &mut self,
        lits: &[Lit],
        tree: TreeId,
        rhs: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<TreeId, Error>
    where
        Col: CollectClauses,
    {
        self.root(tree)?;
        let new = self.build(lits, rhs, collector, var_manager)?;
        self.merge(tree, new, rhs, collector, var_manager)
    }

    /// Releases a tree, children before their parents. Clauses that were
    /// already produced are not affected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] if `tree` is not a live tree.
    pub fn destroy(&mut self, tree: TreeId) -> Result<(), Error> {
        self.root(tree)?;
        let mut order = vec![];
        let mut stack = vec![tree.0];
        while let Some(idx) = stack.pop() {
            order.push(idx);
            if let Some((left, right)) = self.node(idx)?.children {
                stack.extend([left, right]);
            }
        }
        for &idx in order.iter().rev() {
            self.nodes[idx] = None;
        }
        debug!(tree = tree.0, n_nodes = order.len(), "destroyed totalizer tree");
        Ok(())
    }

    /// Gets the count literals of a tree
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] if `tree` is not a live tree.
    pub fn lits(&self, tree: TreeId) -> Result<&[Lit], Error> {
        Ok(&self.root(tree)?.lits)
    }

    /// Gets the number of input literals of a tree
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] if `tree` is not a live tree.
    pub fn n_inputs(&self, tree: TreeId) -> Result<usize, Error> {
        Ok(self.root(tree)?.n_inputs)
    }

    /// Moves all trees of `other` into this forest and returns the new
    /// handle of `tree`. Handles of other trees in `other` are not
    /// translated.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] if `tree` is not a live tree in `other`.
    pub fn absorb(&mut self, other: Forest, tree: TreeId) -> Result<TreeId, Error> {
        other.root(tree)?;
        let offset = self.nodes.len();
        self.nodes.extend(other.nodes.into_iter().map(|slot| {
            slot.map(|mut node| {
                node.children = node
                    .children
                    .map(|(left, right)| (left + offset, right + offset));
                node
            })
        }));
        self.n_clauses += other.n_clauses;
        self.n_vars += other.n_vars;
        Ok(TreeId(tree.0 + offset))
    }
}

impl EncodeStats for Forest {
    fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    fn n_vars(&self) -> u32 {
        self.n_vars
    }
}

/// A single incremental totalizer over a growing set of input literals,
/// encoded for an upper bound that can be increased.
///
/// All calls on one totalizer, and on totalizers that are merged into it,
/// must use the same variable manager.
///
/// # Example
///
/// ```
/// use cardenc::{
///     encodings::card::ITotalizer,
///     instances::{BasicVarManager, Cnf},
///     ipasir_lit,
/// };
///
/// let mut cnf = Cnf::new();
/// let mut var_manager = BasicVarManager::default();
/// let lits = vec![ipasir_lit![1], ipasir_lit![2], ipasir_lit![3]];
/// let mut tot = ITotalizer::new(lits, 1, &mut cnf, &mut var_manager).unwrap();
/// assert_eq!(tot.rhs().unwrap(), &[ipasir_lit![6], ipasir_lit![7]]);
/// tot.increase(2, &mut cnf, &mut var_manager).unwrap();
/// assert_eq!(tot.rhs().unwrap().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ITotalizer {
    /// The trees of the totalizer, including those merged in
    forest: Forest,
    /// The current root
    tree: TreeId,
    /// The input literals
    lits: Vec<Lit>,
    /// The upper bound the tree is encoded for
    ub: usize,
}

impl ITotalizer {
    /// Builds a totalizer over `lits` for the upper bound `ub`. The
    /// variables of the input literals are marked as used in
    /// `var_manager`.
    ///
    /// # Errors
    ///
    /// [`Error::NoInputs`] if `lits` is empty.
    pub fn new<Col>(
        lits: Vec<Lit>,
        ub: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<Self, Error>
    where
        Col: CollectClauses,
    {
        if let Some(max) = lits.iter().map(|lit| lit.var()).max() {
            var_manager.mark_used(max);
        }
        let mut forest = Forest::new();
        let tree = forest.build(&lits, ub, collector, var_manager)?;
        Ok(Self {
            forest,
            tree,
            lits,
            ub,
        })
    }

    /// Gets the count literals of the totalizer
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTreeHandle`] only if the totalizer is inconsistent
    pub fn rhs(&self) -> Result<&[Lit], Error> {
        self.forest.lits(self.tree)
    }

    /// Gets the upper bound the totalizer is encoded for
    #[must_use]
    pub fn ub(&self) -> usize {
        self.ub
    }

    /// Increases the upper bound. Nothing is added if `ub` is not larger
    /// than the current bound or the current bound already covers all
    /// inputs.
    ///
    /// # Errors
    ///
    /// Only if the totalizer is inconsistent, see [`Forest::increase`].
    pub fn increase<Col>(
        &mut self,
        ub: usize,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        if ub <= self.ub || self.ub >= self.lits.len() {
            return Ok(());
        }
        self.ub = ub;
        self.forest.increase(self.tree, ub, collector, var_manager)
    }

    /// Adds the literals in `lits` that are not yet inputs of the totalizer,
    /// in sorted order. The bound becomes the larger of `ub` and the
    /// current bound. If no literal is new, the bound is only increased.
    ///
    /// # Errors
    ///
    /// Only if the totalizer is inconsistent, see [`Forest::extend`].
    pub fn extend<Col>(
        &mut self,
        lits: &[Lit],
        ub: Option<usize>,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        let mut new: Vec<Lit> = lits
            .iter()
            .copied()
            .filter(|lit| !self.lits.contains(lit))
            .collect();
        new.sort_unstable();
        new.dedup();
        if new.is_empty() {
            return match ub {
                Some(ub) => self.increase(ub, collector, var_manager),
                None => Ok(()),
            };
        }
        let ub = ub.map_or(self.ub, |ub| ub.max(self.ub));
        if let Some(max) = new.iter().map(|lit| lit.var()).max() {
            var_manager.mark_used(max);
        }
        self.tree = self
            .forest
            .extend(&new, self.tree, ub, collector, var_manager)?;
        self.lits.extend(new);
        self.ub = ub;
        Ok(())
    }

    /// Merges another totalizer into this one. The bound becomes the
    /// largest of `ub` and both current bounds.
    ///
    /// # Errors
    ///
    /// Only if a totalizer is inconsistent, see [`Forest::merge`].
    pub fn merge_with<Col>(
        &mut self,
        other: ITotalizer,
        ub: Option<usize>,
        collector: &mut Col,
        var_manager: &mut dyn ManageVars,
    ) -> Result<(), Error>
    where
        Col: CollectClauses,
    {
        let ub = ub.unwrap_or(0).max(self.ub).max(other.ub);
        let other_tree = self.forest.absorb(other.forest, other.tree)?;
        self.tree = self
            .forest
            .merge(self.tree, other_tree, ub, collector, var_manager)?;
        self.lits.extend(other.lits);
        self.ub = ub;
        Ok(())
    }

    /// Gets assumptions enforcing `sum <= ub`
    ///
    /// # Errors
    ///
    /// [`Error::NotEncoded`] if the totalizer is not encoded for `ub`.
    pub fn enforce_ub(&self, ub: usize) -> Result<Vec<Lit>, Error> {
        if ub >= self.lits.len() {
            return Ok(vec![]);
        }
        self.rhs()?
            .get(ub)
            .map(|&out| vec![!out])
            .ok_or(Error::NotEncoded)
    }
}

impl IterInputs for ITotalizer {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Lit>>;

    fn iter(&self) -> Self::Iter<'_> {
        self.lits.iter().copied()
    }
}

impl EncodeStats for ITotalizer {
    fn n_clauses(&self) -> usize {
        self.forest.n_clauses()
    }

    fn n_vars(&self) -> u32 {
        self.forest.n_vars()
    }
}

#[cfg(test)]
mod tests {
    use super::{Forest, ITotalizer, TreeId};
    use crate::{
        clause,
        encodings::{EncodeStats, Error},
        instances::{BasicVarManager, Cnf},
        ipasir_lit, lit, var,
        types::Clause,
    };

    fn ipasir_clauses(cls: &[&[i32]]) -> Vec<Clause> {
        cls.iter()
            .map(|cl| cl.iter().map(|&l| ipasir_lit![l]).collect())
            .collect()
    }

    #[test]
    fn build_three() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::default();
        let lits = vec![ipasir_lit![1], ipasir_lit![2], ipasir_lit![3]];
        let tot = ITotalizer::new(lits, 1, &mut cnf, &mut vm).unwrap();
        let expected = ipasir_clauses(&[
            &[-2, 4],
            &[-1, 4],
            &[-1, -2, 5],
            &[-4, 6],
            &[-5, 7],
            &[-3, 6],
            &[-3, -4, 7],
        ]);
        assert_eq!(cnf.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(tot.rhs().unwrap(), &[ipasir_lit![6], ipasir_lit![7]]);
        assert_eq!(tot.n_clauses(), 7);
        assert_eq!(tot.n_vars(), 4);
    }

    #[test]
    fn increase() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::default();
        let lits = vec![ipasir_lit![1], ipasir_lit![2], ipasir_lit![3]];
        let mut tot = ITotalizer::new(lits, 1, &mut cnf, &mut vm).unwrap();
        tot.increase(2, &mut cnf, &mut vm).unwrap();
        assert_eq!(cnf.len(), 8);
        assert_eq!(cnf[7], clause![ipasir_lit![-3], ipasir_lit![-5], ipasir_lit![8]]);
        assert_eq!(
            tot.rhs().unwrap(),
            &[ipasir_lit![6], ipasir_lit![7], ipasir_lit![8]]
        );
        // the counts cover all inputs, only the bound moves
        tot.increase(5, &mut cnf, &mut vm).unwrap();
        assert_eq!(cnf.len(), 8);
        assert_eq!(tot.ub(), 5);
        assert_eq!(tot.rhs().unwrap().len(), 3);
        tot.increase(7, &mut cnf, &mut vm).unwrap();
        assert_eq!(cnf.len(), 8);
        assert_eq!(tot.ub(), 5);
    }

    #[test]
    fn increase_noop() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![4]);
        let mut forest = Forest::new();
        let tree = forest
            .build(&[lit![0], lit![1], lit![2], lit![3]], 2, &mut cnf, &mut vm)
            .unwrap();
        let before = forest.lits(tree).unwrap().to_vec();
        let n_clauses = cnf.len();
        forest.increase(tree, 1, &mut cnf, &mut vm).unwrap();
        forest.increase(tree, 2, &mut cnf, &mut vm).unwrap();
        assert_eq!(cnf.len(), n_clauses);
        assert_eq!(forest.lits(tree).unwrap(), &before[..]);
    }

    #[test]
    fn extend() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::default();
        let lits = vec![ipasir_lit![1], ipasir_lit![2]];
        let mut tot = ITotalizer::new(lits, 1, &mut cnf, &mut vm).unwrap();
        assert_eq!(tot.rhs().unwrap(), &[ipasir_lit![3], ipasir_lit![4]]);
        tot.extend(&[ipasir_lit![5]], Some(2), &mut cnf, &mut vm)
            .unwrap();
        let expected = ipasir_clauses(&[
            &[-2, 3],
            &[-1, 3],
            &[-1, -2, 4],
            &[-5, 6],
            &[-3, 6],
            &[-4, 7],
            &[-3, -5, 7],
            &[-4, -5, 8],
        ]);
        assert_eq!(cnf.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(
            tot.rhs().unwrap(),
            &[ipasir_lit![6], ipasir_lit![7], ipasir_lit![8]]
        );
        // nothing new, only an increase
        tot.extend(&[ipasir_lit![1], ipasir_lit![5]], None, &mut cnf, &mut vm)
            .unwrap();
        assert_eq!(cnf.len(), 8);
    }

    #[test]
    fn merge_with() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::default();
        let mut tot1 =
            ITotalizer::new(vec![ipasir_lit![1], ipasir_lit![2]], 1, &mut cnf, &mut vm).unwrap();
        let tot2 =
            ITotalizer::new(vec![ipasir_lit![5], ipasir_lit![6]], 1, &mut cnf, &mut vm).unwrap();
        assert_eq!(tot2.rhs().unwrap(), &[ipasir_lit![7], ipasir_lit![8]]);
        tot1.merge_with(tot2, None, &mut cnf, &mut vm).unwrap();
        let expected = ipasir_clauses(&[
            &[-2, 3],
            &[-1, 3],
            &[-1, -2, 4],
            &[-6, 7],
            &[-5, 7],
            &[-5, -6, 8],
            &[-7, 9],
            &[-8, 10],
            &[-3, 9],
            &[-4, 10],
            &[-3, -7, 10],
        ]);
        assert_eq!(cnf.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(tot1.rhs().unwrap(), &[ipasir_lit![9], ipasir_lit![10]]);
        assert_eq!(tot1.n_clauses(), 11);
        assert_eq!(tot1.enforce_ub(1).unwrap(), vec![ipasir_lit![-10]]);
        assert_eq!(tot1.enforce_ub(4).unwrap(), vec![]);
        assert_eq!(tot1.enforce_ub(2), Err(Error::NotEncoded));
    }

    #[test]
    fn handles() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![4]);
        let mut forest = Forest::new();
        assert_eq!(
            forest.build(&[], 1, &mut cnf, &mut vm),
            Err(Error::NoInputs)
        );
        let first = forest
            .build(&[lit![0], lit![1]], 1, &mut cnf, &mut vm)
            .unwrap();
        let second = forest
            .build(&[lit![2], lit![3]], 1, &mut cnf, &mut vm)
            .unwrap();
        assert_eq!(
            forest.merge(first, first, 1, &mut cnf, &mut vm),
            Err(Error::InvalidTreeHandle)
        );
        let merged = forest.merge(first, second, 1, &mut cnf, &mut vm).unwrap();
        assert_eq!(forest.n_inputs(merged), Ok(4));
        assert_eq!(forest.lits(first), Err(Error::InvalidTreeHandle));
        assert_eq!(
            forest.increase(second, 2, &mut cnf, &mut vm),
            Err(Error::InvalidTreeHandle)
        );
        forest.destroy(merged).unwrap();
        assert_eq!(forest.destroy(merged), Err(Error::InvalidTreeHandle));
        assert_eq!(forest.lits(TreeId(42)), Err(Error::InvalidTreeHandle));
    }

    #[test]
    fn extend_forest() {
        let mut cnf = Cnf::new();
        let mut vm = BasicVarManager::from_next_free(var![5]);
        let mut forest = Forest::new();
        let tree = forest
            .build(&[lit![0], lit![1], lit![2]], 1, &mut cnf, &mut vm)
            .unwrap();
        let tree = forest
            .extend(&[lit![3], lit![4]], tree, 3, &mut cnf, &mut vm)
            .unwrap();
        assert_eq!(forest.n_inputs(tree), Ok(5));
        assert_eq!(forest.lits(tree).unwrap().len(), 4);
        assert_eq!(forest.n_clauses(), cnf.len());
    }
}
