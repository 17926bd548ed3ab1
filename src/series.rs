//! Standard E-series resistor values, usable as a ready-made inventory.

use itertools::Itertools;
use lazy_static::lazy_static;

const DECADES: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new("E3", &[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend("E6", &E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend("E12", &E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        "E24",
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1]
    );
}

/// A named series of resistor values spanning 1R to 9M1.
#[derive(Debug)]
pub struct RSeries {
    name: &'static str,
    values: Box<[f64]>,
}

/// Mantissas carry two significant digits, so scaling whole tenths keeps every value exact.
fn scale(mantissas: &[f64]) -> impl Iterator<Item = f64> + '_ {
    mantissas
        .iter()
        .cartesian_product(DECADES.iter())
        .map(|(val, pow)| (val * 10.0).round() * pow / 10.0)
}

/// Names of the built-in series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Standard {
    E3,
    E6,
    E12,
    E24,
}

impl Standard {
    /// The series this name refers to.
    /// # Examples
    /// ```
    ///     # use resistor_pair::series::Standard;
    ///     assert_eq!(Standard::E12.series().name(), "E12");
    /// ```
    pub fn series(self) -> &'static RSeries {
        match self {
            Standard::E3 => &*E3,
            Standard::E6 => &*E6,
            Standard::E12 => &*E12,
            Standard::E24 => &*E24,
        }
    }
}

impl RSeries {
    fn new(name: &'static str, mantissas: &[f64]) -> Self {
        RSeries {
            name,
            values: scale(mantissas).collect(),
        }
    }

    fn extend(name: &'static str, base: &RSeries, add: &[f64]) -> Self {
        RSeries {
            name,
            values: base.values.iter().cloned().chain(scale(add)).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn series_sizes() {
        assert_eq!(E3.len(), 3 * DECADES.len());
        assert_eq!(E6.len(), 6 * DECADES.len());
        assert_eq!(E12.len(), 12 * DECADES.len());
        assert_eq!(E24.len(), 24 * DECADES.len());
    }

    #[test]
    fn extended_series_keep_base_values_first() {
        assert_eq!(&E6.values()[..E3.len()], E3.values());
        assert_eq!(&E24.values()[..E12.len()], E12.values());
    }

    #[test]
    fn values_span_decades() {
        let vals = E3.values();
        assert_relative_eq!(vals[0], 1.0);
        assert_relative_eq!(vals[6], 1e6);
        assert_relative_eq!(vals[7], 2.2);
        assert_relative_eq!(vals[9], 220.0);
    }

    #[test]
    fn values_are_exact_decimals() {
        assert!(E24.values().contains(&220.0));
        assert!(E24.values().contains(&820.0));
        assert!(E24.values().contains(&110.0));
        assert!(E24.values().contains(&9_100_000.0));
        assert_eq!(E24.values()[E12.len()], 1.1);
    }

    #[test]
    fn standard_names_map_to_statics() {
        assert_eq!(Standard::E3.series().name(), "E3");
        assert_eq!(Standard::E6.series().len(), E6.len());
        assert_eq!(Standard::E12.series().values(), E12.values());
        assert_eq!(Standard::E24.series().name(), "E24");
    }
}
