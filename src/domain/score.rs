//! Score snapshot and the strategy used to compute it.
//!
//! The score is never stored incrementally: every frame walks the whole grid
//! once. For large playfields the walk can be spread across threads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Territory;

/// Cell counts per territory for a single frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub day: usize,
    pub night: usize,
}

impl Score {
    pub const fn new(day: usize, night: usize) -> Self {
        Self { day, night }
    }

    /// Count held by one territory
    pub const fn get(&self, territory: Territory) -> usize {
        match territory {
            Territory::Day => self.day,
            Territory::Night => self.night,
        }
    }

    /// Record one more cell for a territory
    pub fn add(&mut self, territory: Territory) {
        match territory {
            Territory::Day => self.day += 1,
            Territory::Night => self.night += 1,
        }
    }

    /// Combine partial counts (used by the parallel reduction)
    pub const fn merge(self, other: Self) -> Self {
        Self {
            day: self.day + other.day,
            night: self.night + other.night,
        }
    }

    /// Always equals the number of cells in the grid that produced it
    pub const fn total(&self) -> usize {
        self.day + self.night
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} {}",
            Territory::Day.name(),
            self.day,
            Territory::Night.name(),
            self.night
        )
    }
}

/// How the per-frame score walk is executed.
/// Both modes produce identical counts; they differ only in cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// One thread, row-major walk
    #[default]
    Serial,
    /// Rayon parallel iterator over the cell buffer
    Parallel,
}

impl ScanMode {
    pub fn all() -> Vec<ScanMode> {
        vec![ScanMode::Serial, ScanMode::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScanMode::Serial => "serial",
            ScanMode::Parallel => "parallel",
        }
    }
}

impl FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" => Ok(ScanMode::Serial),
            "parallel" | "par" => Ok(ScanMode::Parallel),
            other => Err(format!("unknown scan mode '{other}' (expected serial or parallel)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(Score::new(200, 376).to_string(), "day 200 | night 376");
    }

    #[test]
    fn test_add_and_total() {
        let mut score = Score::default();
        score.add(Territory::Day);
        score.add(Territory::Night);
        score.add(Territory::Night);
        assert_eq!(score.get(Territory::Day), 1);
        assert_eq!(score.get(Territory::Night), 2);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn test_merge() {
        let merged = Score::new(3, 4).merge(Score::new(1, 2));
        assert_eq!(merged, Score::new(4, 6));
    }

    #[test]
    fn test_scan_mode_parse() {
        assert_eq!("serial".parse::<ScanMode>(), Ok(ScanMode::Serial));
        assert_eq!("Parallel".parse::<ScanMode>(), Ok(ScanMode::Parallel));
        assert!("simd".parse::<ScanMode>().is_err());
    }

    #[test]
    fn test_scan_mode_names_are_unique() {
        let names: Vec<_> = ScanMode::all().iter().map(|m| m.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
