//! Fixed-width result table.

use std::io::Write;

use crate::error::Result;
use crate::Combination;

const HEADER: &str =
    "Target Value |    R1   |    R2   |  Config   |   Mode     | Resulting Value";
const RULE_WIDTH: usize = 77;

/// How R1 and R2 are written in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Notation {
    /// Plain fixed-point with two decimals.
    #[default]
    Fixed,
    /// Resistor shorthand, e.g. 4K7, 10R, 1M5.
    Engineering,
}

fn format_rval(r: f64, unit: &str) -> String {
    let fixed = format!("{:.3}", r);
    let mut val = fixed.trim_end_matches('0').trim_end_matches('.').to_string();
    if val.contains('.') {
        val.replace('.', unit)
    } else {
        val.push_str(unit);
        val
    }
}

/// Writes a resistance in shorthand notation, placing the multiplier where the decimal point
/// would be.
pub fn shorthand(r: f64) -> String {
    if r < 1000.0 {
        format_rval(r, "R")
    } else if r < 1_000_000.0 {
        format_rval(r / 1000.0, "K")
    } else {
        format_rval(r / 1_000_000.0, "M")
    }
}

/// Table writer over any output stream.
pub struct Report<W> {
    out: W,
    notation: Notation,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, notation: Notation) -> Self {
        Report { out, notation }
    }

    pub fn header(&mut self) -> Result<()> {
        writeln!(self.out, "{}", HEADER)?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn resistor(&self, r: f64) -> String {
        match self.notation {
            Notation::Fixed => format!("{:7.2}", r),
            Notation::Engineering => format!("{:>7}", shorthand(r)),
        }
    }

    /// Writes one row for `target`, or a placeholder row when there is no combination.
    pub fn row(&mut self, target: f64, best: Option<&Combination>) -> Result<()> {
        match best {
            Some(c) => {
                let (r1, r2) = (self.resistor(c.r1()), self.resistor(c.r2()));
                writeln!(
                    self.out,
                    "{:12.3} | {} | {} | {:>9} | {:>10} | {:14.3}",
                    target,
                    r1,
                    r2,
                    c.connection(),
                    c.arrangement(),
                    c.value()
                )?;
            }
            None => writeln!(
                self.out,
                "{:12.3} |   ---   |   ---   |    ---    |     ---    | No match found",
                target
            )?,
        }
        Ok(())
    }

    /// Writes the header followed by one row per result, in the order given.
    pub fn table(&mut self, results: &[(f64, Option<Combination>)]) -> Result<()> {
        self.header()?;
        for (target, best) in results {
            self.row(*target, best.as_ref())?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
