//! Fixed recreational dive tables.
//!
//! Three tables map a depth in metres to a time in minutes: the maximum dive
//! time, the No-Decompression Limit (NDL) and the Adjusted NDL (ANDL). All
//! three are keyed by the same nine depths; lookups are by exact depth and
//! anything else is reported as "not in table" rather than interpolated.

// ============================================================================
// Table Data
// ============================================================================

/// Number of depth rows shared by every table.
pub const NUM_DEPTHS: usize = 9;

/// Depth keys (m) shared by all tables.
pub const SUPPORTED_DEPTHS_M: [i64; NUM_DEPTHS] = [10, 12, 15, 18, 20, 25, 30, 35, 40];

/// Maximum dive time (min) per depth.
const MAX_TIME_MIN: [i64; NUM_DEPTHS] = [170, 100, 60, 45, 35, 25, 20, 15, 10];

/// No-Decompression Limit (min) per depth.
const NDL_MIN: [i64; NUM_DEPTHS] = [219, 147, 80, 56, 45, 25, 20, 8, 5];

/// Adjusted No-Decompression Limit (min) per depth.
const ANDL_MIN: [i64; NUM_DEPTHS] = [109, 77, 48, 33, 25, 15, 12, 5, 3];

// ============================================================================
// Lookup
// ============================================================================

/// One of the three depth tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthTable {
    MaxTime,
    Ndl,
    Andl,
}

impl DepthTable {
    pub const ALL: [DepthTable; 3] = [DepthTable::MaxTime, DepthTable::Ndl, DepthTable::Andl];

    /// Name used in user-facing messages.
    pub fn name(&self) -> &'static str {
        match self {
            DepthTable::MaxTime => "Max Time",
            DepthTable::Ndl => "NDL",
            DepthTable::Andl => "ANDL",
        }
    }

    fn values(&self) -> &'static [i64; NUM_DEPTHS] {
        match self {
            DepthTable::MaxTime => &MAX_TIME_MIN,
            DepthTable::Ndl => &NDL_MIN,
            DepthTable::Andl => &ANDL_MIN,
        }
    }

    /// Minutes listed for `depth_m`, or `None` if the depth is not a row.
    pub fn lookup(&self, depth_m: i64) -> Option<i64> {
        row_index(depth_m).map(|i| self.values()[i])
    }

    /// `(depth_m, minutes)` rows in ascending depth order.
    pub fn entries(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        SUPPORTED_DEPTHS_M
            .iter()
            .copied()
            .zip(self.values().iter().copied())
    }

    pub fn not_found_message(&self) -> String {
        format!("Depth not in {} table", self.name())
    }
}

fn row_index(depth_m: i64) -> Option<usize> {
    SUPPORTED_DEPTHS_M.iter().position(|&d| d == depth_m)
}

pub fn is_supported_depth(depth_m: i64) -> bool {
    row_index(depth_m).is_some()
}
