//! Fitness strategies.
//!
//! A fitness strategy maps an ordered gene sequence to an integer score.
//! Strategies are pure: the score depends on nothing but the genes.
//! Higher is better; the percentage-based strategies reach `100` for a
//! perfect solution.
//!
//! # Built-in strategies
//!
//! - [`Accumulate`]: sum of gene values
//! - [`NBits`]: percentage of the maximum possible sum of a bit string
//! - [`NQueens`]: percentage of queen pairs that do not threaten each other
//!
//! Any `Fn(&[Gene]) -> i64` closure is a fitness strategy too.

use super::gene::Gene;

/// Scores a gene sequence.
pub trait FitnessStrategy: Send + Sync {
    /// Returns the fitness of `genes`.
    fn evaluate(&self, genes: &[Gene]) -> i64;
}

impl<F> FitnessStrategy for F
where
    F: Fn(&[Gene]) -> i64 + Send + Sync,
{
    fn evaluate(&self, genes: &[Gene]) -> i64 {
        self(genes)
    }
}

fn gene_sum(genes: &[Gene]) -> i64 {
    genes.iter().map(|g| i64::from(g.value())).sum()
}

/// Sum of all gene values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulate;

impl FitnessStrategy for Accumulate {
    fn evaluate(&self, genes: &[Gene]) -> i64 {
        gene_sum(genes)
    }
}

/// `100 * sum / len`, truncated toward zero. Empty sequences score `0`.
///
/// With genes in `{0, 1}` this is the percentage of ones, so only the
/// all-ones genome scores `100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NBits;

impl FitnessStrategy for NBits {
    fn evaluate(&self, genes: &[Gene]) -> i64 {
        if genes.is_empty() {
            return 0;
        }
        100 * gene_sum(genes) / genes.len() as i64
    }
}

/// N-queens placement quality.
///
/// Gene `i` is the row of the queen standing in column `i`. A pair of queens
/// threatens each other when they share a row or a diagonal. The score is
/// `100 * (max_pairs - threats) / max_pairs` with `max_pairs = n(n-1)/2`, so
/// a non-attacking placement scores `100`.
///
/// Empty sequences score `0`. A lone queen has no pairs and scores `100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NQueens;

impl NQueens {
    /// Counts threatening pairs (row and diagonal).
    pub fn threats(genes: &[Gene]) -> i64 {
        let n = genes.len();
        let mut threats = 0;
        for j in 0..n {
            for i in (j + 1)..n {
                let dy = (i64::from(genes[j].value()) - i64::from(genes[i].value())).abs();
                let dx = (i - j) as i64;
                if dy == 0 {
                    threats += 1;
                }
                if dy == dx {
                    threats += 1;
                }
            }
        }
        threats
    }
}

impl FitnessStrategy for NQueens {
    fn evaluate(&self, genes: &[Gene]) -> i64 {
        let n = genes.len() as i64;
        if n == 0 {
            return 0;
        }
        let max_pairs = n * (n - 1) / 2;
        if max_pairs == 0 {
            return 100;
        }
        100 * (max_pairs - Self::threats(genes)) / max_pairs
    }
}
