use chrono::{Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidDuration {
    #[error("Interval magnitude must be a positive number of units, got: {0}")]
    NonPositive(i64),
    #[error("Interval unit: {0} is not recognized")]
    UnrecognizedUnit(String),
    #[error("Interval arithmetic starting from timestamp: {0} is not representable")]
    Unrepresentable(i64),
}

/// The repeat unit of a `Rotation` interval. Seconds through weeks are
/// exact millisecond multiples, months and years are calendar-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl IntervalUnit {
    /// Millis per unit for the fixed units, `None` for the calendar units.
    fn fixed_millis(&self) -> Option<i64> {
        match self {
            IntervalUnit::Seconds => Some(1000),
            IntervalUnit::Minutes => Some(1000 * 60),
            IntervalUnit::Hours => Some(1000 * 60 * 60),
            IntervalUnit::Days => Some(1000 * 60 * 60 * 24),
            IntervalUnit::Weeks => Some(1000 * 60 * 60 * 24 * 7),
            IntervalUnit::Months | IntervalUnit::Years => None,
        }
    }
}

impl Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = match self {
            IntervalUnit::Seconds => "seconds",
            IntervalUnit::Minutes => "minutes",
            IntervalUnit::Hours => "hours",
            IntervalUnit::Days => "days",
            IntervalUnit::Weeks => "weeks",
            IntervalUnit::Months => "months",
            IntervalUnit::Years => "years",
        };
        write!(f, "{}", unit)
    }
}

impl FromStr for IntervalUnit {
    type Err = InvalidDuration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seconds" => Ok(IntervalUnit::Seconds),
            "minutes" => Ok(IntervalUnit::Minutes),
            "hours" => Ok(IntervalUnit::Hours),
            "days" => Ok(IntervalUnit::Days),
            "weeks" => Ok(IntervalUnit::Weeks),
            "months" => Ok(IntervalUnit::Months),
            "years" => Ok(IntervalUnit::Years),
            _ => Err(InvalidDuration::UnrecognizedUnit(s.to_string())),
        }
    }
}

/// How often a `Rotation` repeats, e.g. every 2 weeks.
///
/// The fields are private so that an `Interval` with a non-positive
/// magnitude cannot exist, which is what guarantees that walking the
/// occurrence lattice always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    magnitude: i64,
    unit: IntervalUnit,
}

impl Interval {
    pub fn new(magnitude: i64, unit: IntervalUnit) -> Result<Self, InvalidDuration> {
        if magnitude <= 0 {
            return Err(InvalidDuration::NonPositive(magnitude));
        }
        Ok(Self { magnitude, unit })
    }

    pub fn is_calendar(&self) -> bool {
        self.unit.fixed_millis().is_none()
    }

    /// The exact step size in millis. For the calendar units the step
    /// depends on which instant it is applied to, so it is evaluated
    /// relative to `anchor`.
    pub fn to_exact_millis(&self, anchor: i64) -> Result<i64, InvalidDuration> {
        match self.unit.fixed_millis() {
            Some(unit_millis) => self
                .magnitude
                .checked_mul(unit_millis)
                .ok_or(InvalidDuration::Unrepresentable(anchor)),
            None => Ok(self.add_to(anchor, 1)? - anchor),
        }
    }

    /// The lattice point `ts + steps * interval`.
    ///
    /// Calendar units use calendar-correct month addition: the day of
    /// month is clamped to the last valid day of the target month, so
    /// Jan 31 + 1 month is Feb 28 (or 29), never an invalid date.
    pub fn add_to(&self, ts: i64, steps: i64) -> Result<i64, InvalidDuration> {
        let overflow = InvalidDuration::Unrepresentable(ts);
        match self.unit.fixed_millis() {
            Some(unit_millis) => self
                .magnitude
                .checked_mul(unit_millis)
                .and_then(|step| step.checked_mul(steps))
                .and_then(|offset| ts.checked_add(offset))
                .ok_or(overflow),
            None => {
                let months_per_step = match self.unit {
                    IntervalUnit::Years => self.magnitude.checked_mul(12),
                    _ => Some(self.magnitude),
                };
                let months = months_per_step
                    .and_then(|m| m.checked_mul(steps))
                    .and_then(|m| u32::try_from(m).ok())
                    .ok_or_else(|| overflow.clone())?;
                let date = Utc
                    .timestamp_millis_opt(ts)
                    .single()
                    .ok_or_else(|| overflow.clone())?;
                date.checked_add_months(Months::new(months))
                    .map(|d| d.timestamp_millis())
                    .ok_or(overflow)
            }
        }
    }
}

// Stored unit strings go through `FromStr`, so an unrecognized unit
// surfaces as `InvalidDuration::UnrecognizedUnit`.
impl<'de> Deserialize<'de> for IntervalUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

// Validate through the constructor so that a persisted non-positive
// magnitude cannot re-enter the domain.
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct IntervalRepr {
            magnitude: i64,
            unit: IntervalUnit,
        }

        let repr = IntervalRepr::deserialize(deserializer)?;
        Interval::new(repr.magnitude, repr.unit).map_err(serde::de::Error::custom)
    }
}
