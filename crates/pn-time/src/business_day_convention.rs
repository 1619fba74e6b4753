//! Business-day convention.

/// How to adjust a date that falls on a non-working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// Choose the first working day on or after the given date.
    #[default]
    Following,
    /// Do not adjust (keep the original date).
    ///
    /// Used for clinical tolerance windows, which bound a span of days and
    /// are not appointments.
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}
