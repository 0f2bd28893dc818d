//! Shared bond configuration enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use deltamark_core::calendars::{Calendar, TargetCalendar, WeekendCalendar};

/// Identifies a business day calendar in configuration structs.
///
/// Spec structs are plain serializable data; this enum stands in for the
/// trait object and resolves to the concrete calendar on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalendarId {
    /// Saturdays and Sundays only.
    Weekend,
    /// Eurozone TARGET calendar.
    #[default]
    Target,
}

impl CalendarId {
    /// Resolves to the concrete calendar.
    #[must_use]
    pub fn resolve(&self) -> &'static dyn Calendar {
        match self {
            CalendarId::Weekend => &WeekendCalendar,
            CalendarId::Target => &TargetCalendar,
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve().name())
    }
}

/// Direction in which coupon schedule anchors are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DateGeneration {
    /// Anchors stepped backward from the termination date; any stub lands
    /// at the front.
    #[default]
    Backward,
    /// Anchors stepped forward from the effective date; any stub lands at
    /// the back.
    Forward,
}
