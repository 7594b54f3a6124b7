//! # The Default Clause Store

use std::{io, ops::Index};

use crate::{
    encodings::CollectClauses,
    types::{Clause, TypeError},
};

/// An ordered collection of clauses. Encodings only ever append to it, the
/// erase operations exist for composing and undoing encodings.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

impl Cnf {
    /// Creates a new empty [`Cnf`]
    #[must_use]
    pub fn new() -> Cnf {
        Cnf::default()
    }

    /// Creates a new [`Cnf`] with a given capacity of clauses
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Cnf {
        Cnf {
            clauses: Vec::with_capacity(capacity),
        }
    }

    /// Checks if the CNF is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The number of clauses
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Adds a clause
    #[inline]
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Removes the first clause equal to `clause`. Returns whether a clause
    /// was removed.
    pub fn remove_clause(&mut self, clause: &Clause) -> bool {
        match self.clauses.iter().position(|cl| cl == clause) {
            Some(idx) => {
                self.clauses.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes the first contiguous run of clauses equal to `other`, starting
    /// the search at clause index `from`. Returns whether the run was found.
    pub fn remove_subset(&mut self, from: usize, other: &Cnf) -> bool {
        if other.is_empty() {
            return true;
        }
        if from >= self.len() || self.len() - from < other.len() {
            return false;
        }
        let start = self.clauses[from..]
            .windows(other.len())
            .position(|run| run == other.clauses.as_slice());
        match start {
            Some(offset) => {
                let start = from + offset;
                self.clauses.drain(start..start + other.len());
                true
            }
            None => false,
        }
    }

    /// Iterates over the clauses
    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Writes the clauses in DIMACS clause syntax, one per line, each
    /// terminated by ` 0`. No header is written.
    ///
    /// # Errors
    ///
    /// I/O errors of the writer, or [`TypeError::IdxTooHigh`] (as
    /// [`io::ErrorKind::InvalidData`]) for literals without a DIMACS form.
    pub fn write_dimacs_clauses<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for cl in &self.clauses {
            for &lit in cl {
                let val = lit
                    .to_ipasir()
                    .map_err(|err: TypeError| io::Error::new(io::ErrorKind::InvalidData, err))?;
                write!(writer, "{val} ")?;
            }
            writeln!(writer, "0")?;
        }
        Ok(())
    }
}

impl CollectClauses for Cnf {
    fn n_clauses(&self) -> usize {
        self.clauses.len()
    }
}

impl IntoIterator for Cnf {
    type Item = Clause;

    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cnf {
    type Item = &'a Clause;

    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl FromIterator<Clause> for Cnf {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl Extend<Clause> for Cnf {
    fn extend<Iter: IntoIterator<Item = Clause>>(&mut self, iter: Iter) {
        self.clauses.extend(iter);
    }
}

impl Index<usize> for Cnf {
    type Output = Clause;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clauses[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Cnf;
    use crate::{clause, lit};

    fn sample() -> Cnf {
        let mut cnf = Cnf::new();
        cnf.add_clause(clause![lit![0], lit![1]]);
        cnf.add_clause(clause![!lit![2]]);
        cnf.add_clause(clause![lit![0], !lit![1], lit![2]]);
        cnf.add_clause(clause![!lit![2]]);
        cnf
    }

    #[test]
    fn remove_clause_first_occurrence() {
        let mut cnf = sample();
        assert!(cnf.remove_clause(&clause![!lit![2]]));
        assert_eq!(cnf.len(), 3);
        assert_eq!(cnf[1], clause![lit![0], !lit![1], lit![2]]);
        assert_eq!(cnf[2], clause![!lit![2]]);
        assert!(!cnf.remove_clause(&clause![lit![5]]));
    }

    #[test]
    fn remove_subset_from_offset() {
        let mut cnf = sample();
        let run: Cnf = [clause![lit![0], !lit![1], lit![2]], clause![!lit![2]]]
            .into_iter()
            .collect();
        assert!(!cnf.remove_subset(3, &run));
        assert!(cnf.remove_subset(1, &run));
        assert_eq!(cnf.len(), 2);
        assert_eq!(cnf[1], clause![!lit![2]]);
        assert!(cnf.remove_subset(0, &Cnf::new()));
    }

    #[test]
    fn dimacs_dump() {
        let cnf = sample();
        let mut out = Vec::new();
        cnf.write_dimacs_clauses(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 2 0\n-3 0\n1 -2 3 0\n-3 0\n"
        );
    }
}
