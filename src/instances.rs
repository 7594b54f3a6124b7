//! # Clause Collections and Variable Management
//!
//! [`Cnf`] is the default clause store that encodings write into and
//! [`BasicVarManager`] the default source of fresh auxiliary variables.

use crate::{
    types::{Lit, Var},
    var,
};

mod sat;
pub use sat::Cnf;

/// Trait for variable managers keeping track of used variables
pub trait ManageVars {
    /// Uses up the next free variable
    fn new_var(&mut self) -> Var;
    /// Uses up the next free variable and returns its positive literal
    fn new_lit(&mut self) -> Lit {
        self.new_var().pos_lit()
    }
    /// Gets the used variable with the highest index
    fn max_var(&self) -> Option<Var>;
    /// Increases the next free variable index if the provided variable has a
    /// higher index than the next variable in the manager.
    /// Returns true if the next free index has been increased and false otherwise.
    fn increase_next_free(&mut self, v: Var) -> bool;
    /// Marks variables up to the given one as used. Returns true if the next
    /// free index has been increased and false otherwise.
    fn mark_used(&mut self, v: Var) -> bool {
        self.increase_next_free(v + 1)
    }
    /// Gets the number of used variables, i.e., the index of the next free
    /// variable
    fn n_used(&self) -> u32;
}

/// Counting variable manager.
///
/// In IPASIR terms the index of the next free variable equals the current
/// top id: after [`BasicVarManager::from_next_free`] with `var![t]`, the next
/// fresh variable is printed as `t + 1`.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BasicVarManager {
    next_var: Var,
}

impl BasicVarManager {
    /// Creates a new variable manager from a next free variable
    #[must_use]
    pub fn from_next_free(next_var: Var) -> BasicVarManager {
        BasicVarManager { next_var }
    }

    /// The next variable that [`ManageVars::new_var`] will return
    #[must_use]
    pub fn next_free(&self) -> Var {
        self.next_var
    }
}

impl ManageVars for BasicVarManager {
    fn new_var(&mut self) -> Var {
        let v = self.next_var;
        self.next_var += 1;
        v
    }

    fn max_var(&self) -> Option<Var> {
        if self.next_var == var![0] {
            None
        } else {
            Some(self.next_var - 1)
        }
    }

    fn increase_next_free(&mut self, v: Var) -> bool {
        if v > self.next_var {
            self.next_var = v;
            return true;
        }
        false
    }

    fn n_used(&self) -> u32 {
        self.next_var.idx32()
    }
}

#[cfg(test)]
mod tests {
    use super::{BasicVarManager, ManageVars};
    use crate::{lit, var};

    #[test]
    fn fresh_vars_are_monotone() {
        let mut vm = BasicVarManager::from_next_free(var![3]);
        assert_eq!(vm.max_var(), Some(var![2]));
        assert_eq!(vm.new_var(), var![3]);
        assert_eq!(vm.new_lit(), lit![4]);
        assert_eq!(vm.n_used(), 5);
    }

    #[test]
    fn increase_and_mark() {
        let mut vm = BasicVarManager::default();
        assert_eq!(vm.max_var(), None);
        assert!(vm.increase_next_free(var![4]));
        assert!(!vm.increase_next_free(var![2]));
        assert!(vm.mark_used(var![4]));
        assert_eq!(vm.next_free(), var![5]);
    }
}
