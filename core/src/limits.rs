//! NDL / ANDL status and maximum dive time.
//!
//! NDL and ANDL share one algorithm and differ only in their base table. The
//! planned bottom time is first halved for a first, single-level dive of the
//! day, then divided again according to the surface interval band. Each step
//! uses its own truncating integer division, so a first dive with a 2-3 hour
//! interval is divided by two twice rather than by four once.

use std::fmt;

use crate::models::DiveInputs;
use crate::tables::DepthTable;

/// Surface interval below which no adjustment applies (min).
const SHORT_INTERVAL_MAX_MIN: i64 = 120;

/// Surface interval at which the divisor grows from 2 to 3 (min).
const LONG_INTERVAL_MIN_MIN: i64 = 180;

/// Which limit a status refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    Ndl,
    Andl,
}

impl LimitKind {
    pub fn table(&self) -> DepthTable {
        match self {
            LimitKind::Ndl => DepthTable::Ndl,
            LimitKind::Andl => DepthTable::Andl,
        }
    }

    pub fn label(&self) -> &'static str {
        self.table().name()
    }
}

/// Classification of the surface interval for bottom time adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceIntervalBand {
    /// Under 2 hours
    Short,
    /// 2 hours up to 3 hours
    Medium,
    /// 3 hours or more
    Long,
}

impl SurfaceIntervalBand {
    pub fn from_minutes(surface_interval_min: i64) -> Self {
        if surface_interval_min < SHORT_INTERVAL_MAX_MIN {
            SurfaceIntervalBand::Short
        } else if surface_interval_min < LONG_INTERVAL_MIN_MIN {
            SurfaceIntervalBand::Medium
        } else {
            SurfaceIntervalBand::Long
        }
    }

    pub fn divisor(&self) -> i64 {
        match self {
            SurfaceIntervalBand::Short => 1,
            SurfaceIntervalBand::Medium => 2,
            SurfaceIntervalBand::Long => 3,
        }
    }
}

/// Bottom time after the dive-history and surface interval adjustments.
pub fn adjusted_bottom_time(
    bottom_time_min: i64,
    surface_interval_min: i64,
    is_multilevel_diving: bool,
    is_first_dive_of_the_day: bool,
) -> i64 {
    let mut adjusted = bottom_time_min;
    if !is_multilevel_diving && is_first_dive_of_the_day {
        adjusted = bottom_time_min / 2;
    }

    let band = SurfaceIntervalBand::from_minutes(surface_interval_min);
    adjusted /= band.divisor();

    tracing::trace!(
        bottom_time_min,
        surface_interval_min,
        ?band,
        adjusted,
        "adjusted bottom time"
    );
    adjusted
}

/// Outcome of comparing an adjusted bottom time against a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStatus {
    Within(LimitKind),
    Exceeds(LimitKind),
    DepthNotInTable(LimitKind),
}

impl LimitStatus {
    pub fn is_safe(&self) -> bool {
        matches!(self, LimitStatus::Within(_))
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitStatus::Within(kind) => write!(f, "Safe: Within {}", kind.label()),
            LimitStatus::Exceeds(kind) => write!(f, "Warning: Exceeds {}", kind.label()),
            LimitStatus::DepthNotInTable(kind) => f.write_str(&kind.table().not_found_message()),
        }
    }
}

/// Evaluate the planned dive against the NDL or ANDL table.
pub fn evaluate(kind: LimitKind, inputs: &DiveInputs) -> LimitStatus {
    let Some(limit) = kind.table().lookup(inputs.depth_m) else {
        return LimitStatus::DepthNotInTable(kind);
    };

    let adjusted = adjusted_bottom_time(
        inputs.bottom_time_min,
        inputs.surface_interval_total_min(),
        inputs.is_multilevel_diving,
        inputs.is_first_dive_of_the_day,
    );

    if adjusted <= limit {
        LimitStatus::Within(kind)
    } else {
        LimitStatus::Exceeds(kind)
    }
}

/// Maximum dive time for a depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxTime {
    Minutes(i64),
    DepthNotInTable,
}

impl fmt::Display for MaxTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxTime::Minutes(minutes) => write!(f, "{minutes} minutes"),
            MaxTime::DepthNotInTable => f.write_str(&DepthTable::MaxTime.not_found_message()),
        }
    }
}

pub fn max_time(depth_m: i64) -> MaxTime {
    DepthTable::MaxTime
        .lookup(depth_m)
        .map_or(MaxTime::DepthNotInTable, MaxTime::Minutes)
}
