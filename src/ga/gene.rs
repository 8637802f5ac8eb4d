//! Genes and seeding strategies.
//!
//! A [`Gene`] is the smallest evolvable unit: one integer value. Its initial
//! value comes from a [`Seeder`], a strategy object injected at runtime
//! through a [`Blueprint`](super::Blueprint).
//!
//! # Built-in seeders
//!
//! - [`Identity`]: passes the caller's parameter through (`0` when absent)
//! - [`Constant`]: always the same value
//! - [`RandomBelow`]: uniform draw from `[0, max)`
//!
//! Any `Fn(Option<i32>, &mut dyn RngCore) -> i32` closure is a seeder too.

use crate::error::{GaError, Result};
use crate::random::draw_below;
use rand::RngCore;
use std::fmt;

/// One evolvable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    value: i32,
}

impl Gene {
    /// Creates a gene holding `value`.
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Creates a gene whose value is produced by `seeder`.
    pub fn seeded(seeder: &dyn Seeder, param: Option<i32>, rng: &mut dyn RngCore) -> Self {
        Self::new(seeder.seed(param, rng))
    }

    /// Returns the gene value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Overwrites the gene value.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl From<i32> for Gene {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Builds a gene vector from raw values.
pub fn genes_from(values: &[i32]) -> Vec<Gene> {
    values.iter().copied().map(Gene::new).collect()
}

/// Produces the initial value of a gene.
///
/// `param` is an optional caller-supplied hint; the engine seeds with
/// `None`. Implementations may ignore either argument.
pub trait Seeder: Send + Sync {
    /// Returns a value for a new gene.
    fn seed(&self, param: Option<i32>, rng: &mut dyn RngCore) -> i32;
}

impl<F> Seeder for F
where
    F: Fn(Option<i32>, &mut dyn RngCore) -> i32 + Send + Sync,
{
    fn seed(&self, param: Option<i32>, rng: &mut dyn RngCore) -> i32 {
        self(param, rng)
    }
}

/// Returns the supplied parameter, or `0` without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Seeder for Identity {
    fn seed(&self, param: Option<i32>, _rng: &mut dyn RngCore) -> i32 {
        param.unwrap_or(0)
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constant(pub i32);

impl Seeder for Constant {
    fn seed(&self, _param: Option<i32>, _rng: &mut dyn RngCore) -> i32 {
        self.0
    }
}

/// Uniform random value in `[0, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomBelow {
    max: i32,
}

impl RandomBelow {
    /// Creates a random seeder over `[0, max)`.
    ///
    /// Fails if `max` is not positive.
    pub fn new(max: i32) -> Result<Self> {
        if max <= 0 {
            return Err(GaError::InvalidSeedBound(max));
        }
        Ok(Self { max })
    }

    /// Upper bound (exclusive).
    pub fn max(&self) -> i32 {
        self.max
    }
}

impl Seeder for RandomBelow {
    fn seed(&self, _param: Option<i32>, rng: &mut dyn RngCore) -> i32 {
        draw_below(rng, i64::from(self.max)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_identity_passthrough() {
        let mut rng = create_rng(42);
        assert_eq!(Identity.seed(Some(7), &mut rng), 7);
        assert_eq!(Identity.seed(None, &mut rng), 0);
    }

    #[test]
    fn test_constant_ignores_param() {
        let mut rng = create_rng(42);
        assert_eq!(Constant(3).seed(Some(9), &mut rng), 3);
        assert_eq!(Constant(3).seed(None, &mut rng), 3);
    }

    #[test]
    fn test_random_below_domain() {
        let mut rng = create_rng(42);
        let seeder = RandomBelow::new(2).unwrap();
        let mut seen = [false; 2];
        for _ in 0..200 {
            let v = seeder.seed(None, &mut rng);
            assert!((0..2).contains(&v), "value {v} outside [0, 2)");
            seen[v as usize] = true;
        }
        assert!(seen[0] && seen[1], "both values should appear");
    }

    #[test]
    fn test_random_below_rejects_non_positive() {
        assert_eq!(RandomBelow::new(0), Err(GaError::InvalidSeedBound(0)));
        assert_eq!(RandomBelow::new(-3), Err(GaError::InvalidSeedBound(-3)));
    }

    #[test]
    fn test_closure_seeder() {
        let mut rng = create_rng(42);
        let doubled = |p: Option<i32>, _rng: &mut dyn RngCore| p.unwrap_or(1) * 2;
        let gene = Gene::seeded(&doubled, Some(4), &mut rng);
        assert_eq!(gene.value(), 8);
    }

    #[test]
    fn test_gene_display() {
        assert_eq!(Gene::new(5).to_string(), "5");
        assert_eq!(genes_from(&[1, 0]), vec![Gene::new(1), Gene::new(0)]);
    }
}
