//! A two-resistor combination finder for circuit design.
//!
//! Given an inventory of resistor values and a target resistance, it tries every ordered pair
//! (R1, R2) from the inventory, wired in series or parallel and arranged as a star or a delta,
//! and picks the smallest resulting value that is not below the target.
//!
//! The four topologies evaluated for each pair, in order:
//!
//! | Connection | Arrangement | Value               |
//! |------------|-------------|---------------------|
//! | Series     | Star        | R1 + R2             |
//! | Series     | Delta       | (R1 + R2) / 3       |
//! | Parallel   | Star        | R1·R2 / (R1 + R2)   |
//! | Parallel   | Delta       | R1·R2 / (R1 + R2) / 3 |
//!
//! Pairs are visited with R1 as the outer index and R2 as the inner one, and a resistor may be
//! paired with itself. When two candidates give the same value the one visited first is kept.
//!
//! # Example
//! ```rust
//! use resistor_pair::*;
//!
//! let inventory = [10.0, 20.0];
//! let best = select_best(15.0, &inventory).expect("no combination reaches 15");
//!
//! assert_eq!(best.value(), 20.0);
//! assert_eq!((best.r1(), best.r2()), (10.0, 10.0));
//! assert_eq!(best.connection(), Connection::Series);
//! assert_eq!(best.arrangement(), Arrangement::Star);
//! ```

use itertools::Itertools;
use tracing::trace;

use std::fmt;

pub mod error;
pub mod loader;
pub mod report;
pub mod series;

pub use error::{Error, Result};
pub use loader::{load_values, read_values};
pub use report::{Notation, Report};
pub use series::{RSeries, Standard, E12, E24, E3, E6};

/// How the two resistors are wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connection {
    Series,
    Parallel,
}

impl Connection {
    /// The combined resistance of `r1` and `r2` under this connection.
    pub fn combine(self, r1: f64, r2: f64) -> f64 {
        match self {
            Connection::Series => r1 + r2,
            Connection::Parallel => (r1 * r2) / (r1 + r2),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Connection::Series => "Series",
            Connection::Parallel => "Parallel",
        })
    }
}

/// Network arrangement, applied as a scale factor to the combined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrangement {
    Star,
    Delta,
}

impl Arrangement {
    pub fn scale(self, r: f64) -> f64 {
        match self {
            Arrangement::Star => r,
            Arrangement::Delta => r / 3.0,
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Arrangement::Star => "Star",
            Arrangement::Delta => "Delta",
        })
    }
}

/// A connection paired with an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Topology {
    pub connection: Connection,
    pub arrangement: Arrangement,
}

impl Topology {
    /// Every topology, in the order they are tried for each pair.
    pub const ALL: [Topology; 4] = [
        Topology::new(Connection::Series, Arrangement::Star),
        Topology::new(Connection::Series, Arrangement::Delta),
        Topology::new(Connection::Parallel, Arrangement::Star),
        Topology::new(Connection::Parallel, Arrangement::Delta),
    ];

    pub const fn new(connection: Connection, arrangement: Arrangement) -> Self {
        Topology {
            connection,
            arrangement,
        }
    }

    /// The resulting resistance of `r1` and `r2` in this topology.
    pub fn apply(self, r1: f64, r2: f64) -> f64 {
        self.arrangement.scale(self.connection.combine(r1, r2))
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.connection, self.arrangement)
    }
}

/// The selected pair for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    value: f64,
    r1: f64,
    r2: f64,
    topology: Topology,
}

impl Combination {
    /// The resulting resistance, always at or above the target it was selected for.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn r1(&self) -> f64 {
        self.r1
    }

    pub fn r2(&self) -> f64 {
        self.r2
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn connection(&self) -> Connection {
        self.topology.connection
    }

    pub fn arrangement(&self) -> Arrangement {
        self.topology.arrangement
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}, R1: {}, R2: {}",
            report::shorthand(self.value),
            self.topology,
            report::shorthand(self.r1),
            report::shorthand(self.r2)
        )
    }
}

/// Finds the best combination for `target` using every ordered pair of `inventory`, including
/// each resistor paired with itself. Returns `None` when no combination reaches the target.
pub fn select_best(target: f64, inventory: &[f64]) -> Option<Combination> {
    scan(target, inventory, false)
}

fn scan(target: f64, inventory: &[f64], distinct: bool) -> Option<Combination> {
    let mut best: Option<Combination> = None;
    let pairs = (0..inventory.len())
        .cartesian_product(0..inventory.len())
        .filter(|(i, j)| !distinct || i != j);
    for (i, j) in pairs {
        let (r1, r2) = (inventory[i], inventory[j]);
        for topology in Topology::ALL {
            let value = topology.apply(r1, r2);
            if !value.is_finite() || value < target {
                continue;
            }
            if best.map_or(true, |b| value < b.value) {
                trace!(wanted = target, value, r1, r2, %topology, "new best");
                best = Some(Combination {
                    value,
                    r1,
                    r2,
                    topology,
                });
            }
        }
    }
    best
}

/// Main search struct, holding an inventory to answer targets against.
#[derive(Debug, Clone)]
pub struct PairFinder {
    inventory: Vec<f64>,
    distinct: bool,
}

impl PairFinder {
    /// Creates a finder over `inventory`. Pairs of a resistor with itself are allowed.
    pub fn new(inventory: Vec<f64>) -> Self {
        PairFinder {
            inventory,
            distinct: false,
        }
    }

    /// Creates a finder using a standard series as the inventory.
    /// # Examples
    /// ```
    ///     # use resistor_pair::*;
    ///     let finder = PairFinder::from_series(&E3);
    ///     let best = finder.best_for(330.0).unwrap();
    ///     assert!(best.value() >= 330.0);
    /// ```
    pub fn from_series(series: &RSeries) -> Self {
        Self::new(series.values().to_vec())
    }

    /// When set, a resistor position is never paired with itself.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    pub fn inventory(&self) -> &[f64] {
        &self.inventory
    }

    /// Returns the number of ordered pairs examined per target, each tried in four topologies.
    pub fn pair_count(&self) -> usize {
        let n = self.inventory.len();
        if self.distinct {
            n * n.saturating_sub(1)
        } else {
            n * n
        }
    }

    /// Finds the best combination for a single target.
    pub fn best_for(&self, target: f64) -> Option<Combination> {
        scan(target, &self.inventory, self.distinct)
    }

    /// Finds the best combination for each target, keeping target order.
    pub fn best_for_all(&self, targets: &[f64]) -> Vec<(f64, Option<Combination>)> {
        targets.iter().map(|&t| (t, self.best_for(t))).collect()
    }
}
