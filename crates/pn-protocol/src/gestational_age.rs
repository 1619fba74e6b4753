//! Gestational age: whole weeks plus extra days since FUR.

use pn_core::{Days, Weeks};

/// An offset from the last menstrual period, written `11w2d` in clinical
/// notes and "week 11+2" when spoken.
///
/// `days` is always in `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GestationalAge {
    weeks: Weeks,
    days: u8,
}

impl GestationalAge {
    /// Create an age of `weeks` weeks and `days` extra days.
    ///
    /// # Panics
    /// Panics if `days > 6`; in a `const` context this is a compile error.
    pub const fn new(weeks: Weeks, days: u8) -> Self {
        assert!(days <= 6, "extra days must be in 0..=6");
        Self { weeks, days }
    }

    /// Create an age of whole weeks.
    pub const fn weeks(weeks: Weeks) -> Self {
        Self::new(weeks, 0)
    }

    /// Whole weeks.
    pub fn whole_weeks(&self) -> Weeks {
        self.weeks
    }

    /// Extra days beyond the whole weeks.
    pub fn extra_days(&self) -> u8 {
        self.days
    }

    /// Total offset in days: `7·weeks + days`.
    pub fn total_days(&self) -> Days {
        self.weeks as Days * 7 + Days::from(self.days)
    }

    /// "Week 11+2", or "Week 19" when there are no extra days.
    pub fn week_label(&self) -> String {
        if self.days > 0 {
            format!("Week {}+{}", self.weeks, self.days)
        } else {
            format!("Week {}", self.weeks)
        }
    }
}

impl std::fmt::Display for GestationalAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}w{}d", self.weeks, self.days)
    }
}
