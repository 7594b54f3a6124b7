//! # BatSat Interface
//!
//! Feeds `cardenc` clauses to the [BatSat](https://github.com/c-cube/batsat)
//! SAT solver, which is fully implemented in Rust. The integration tests use
//! it as the oracle that encodings are checked against.

use batsat::{intmap::AsIndex, lbool, BasicSolver, SolverInterface};
use cardenc::{
    instances::Cnf,
    types::{Assignment, Clause, Lit, TernaryVal, Var},
};
use thiserror::Error;

/// Result of a solver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverResult {
    /// The query was found satisfiable
    Sat,
    /// The query was found unsatisfiable
    Unsat,
    /// The solver stopped before reaching a result
    Interrupted,
}

/// Errors of the solver interface
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// A solution was requested without a previous satisfiable call
    #[error("no solution available, the last call was not satisfiable")]
    NoSolution,
}

/// A BatSat instance that takes `cardenc` literals
#[derive(Default)]
pub struct Solver {
    internal: BasicSolver,
    n_clauses: usize,
    n_vars: u32,
    last: Option<SolverResult>,
}

impl Solver {
    fn convert(&mut self, lit: Lit) -> batsat::Lit {
        self.n_vars = self.n_vars.max(lit.var().idx32() + 1);
        batsat::Lit::new(self.internal.var_of_int(lit.var().idx32() + 1), lit.is_pos())
    }

    /// Adds a single clause
    pub fn add_clause(&mut self, clause: Clause) {
        let mut cl: Vec<_> = clause.into_iter().map(|lit| self.convert(lit)).collect();
        self.internal.add_clause_reuse(&mut cl);
        self.n_clauses += 1;
    }

    /// Adds all clauses of a CNF
    pub fn add_cnf(&mut self, cnf: Cnf) {
        cnf.into_iter().for_each(|cl| self.add_clause(cl));
    }

    /// The number of clauses added to the solver
    #[must_use]
    pub fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    /// Solves with all `assumps` forced true
    ///
    /// # Errors
    ///
    /// Never, the signature follows the solver traits of the encodings' users.
    pub fn solve_assumps(&mut self, assumps: &[Lit]) -> Result<SolverResult, SolverError> {
        let assumps: Vec<_> = assumps.iter().map(|&lit| self.convert(lit)).collect();
        let res = match self.internal.solve_limited(&assumps) {
            x if x == lbool::TRUE => SolverResult::Sat,
            x if x == lbool::FALSE => SolverResult::Unsat,
            x if x == lbool::UNDEF => SolverResult::Interrupted,
            _ => unreachable!(),
        };
        self.last = Some(res);
        Ok(res)
    }

    /// Solves without assumptions
    ///
    /// # Errors
    ///
    /// Never, see [`Solver::solve_assumps`].
    pub fn solve(&mut self) -> Result<SolverResult, SolverError> {
        self.solve_assumps(&[])
    }

    /// The value of a literal in the model of the last satisfiable call
    ///
    /// # Errors
    ///
    /// [`SolverError::NoSolution`] if the last call was not satisfiable
    pub fn lit_val(&self, lit: Lit) -> Result<TernaryVal, SolverError> {
        if self.last != Some(SolverResult::Sat) {
            return Err(SolverError::NoSolution);
        }
        let l = batsat::Lit::new(
            batsat::Var::from_index(lit.var().idx() + 1),
            lit.is_pos(),
        );
        Ok(match self.internal.value_lit(l) {
            x if x == lbool::TRUE => TernaryVal::True,
            x if x == lbool::FALSE => TernaryVal::False,
            _ => TernaryVal::DontCare,
        })
    }

    /// The full model of the last satisfiable call
    ///
    /// # Errors
    ///
    /// [`SolverError::NoSolution`] if the last call was not satisfiable
    pub fn full_solution(&self) -> Result<Assignment, SolverError> {
        (0..self.n_vars)
            .map(|idx| self.lit_val(Var::new(idx).pos_lit()))
            .collect::<Result<Vec<_>, _>>()
            .map(Assignment::from)
    }
}
