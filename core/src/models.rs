#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiveMode {
    #[default]
    DivePlanning,
    SurfaceInterval,
    MaxDepth,
}

impl DiveMode {
    pub fn label(&self) -> &'static str {
        match self {
            DiveMode::DivePlanning => "Dive Planning",
            DiveMode::SurfaceInterval => "Surface Interval",
            DiveMode::MaxDepth => "Max Depth",
        }
    }

    /// Only dive planning offers the calculate action.
    pub fn computes_results(&self) -> bool {
        matches!(self, DiveMode::DivePlanning)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorSettings {
    pub mode: DiveMode,
}

/// Raw text as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiveForm {
    pub depth: String,
    pub bottom_time: String,
    pub surface_interval_hours: String,
    pub surface_interval_minutes: String,
    pub is_multilevel_diving: bool,
    pub is_first_dive_of_the_day: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiveInputs {
    pub depth_m: i64,
    pub bottom_time_min: i64,
    pub surface_interval_hours: i64,
    pub surface_interval_minutes: i64,
    pub is_multilevel_diving: bool,
    pub is_first_dive_of_the_day: bool,
}

impl DiveInputs {
    /// Surface interval in minutes, saturating at the `i64` bounds.
    pub fn surface_interval_total_min(&self) -> i64 {
        self.surface_interval_hours
            .saturating_mul(60)
            .saturating_add(self.surface_interval_minutes)
    }
}

pub const INVALID_INPUT: &str = "Invalid Input";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiveResults {
    pub ndl: String,
    pub andl: String,
    pub max_time: String,
}

impl DiveResults {
    /// Placeholders shown before the first calculation.
    pub fn not_calculated() -> Self {
        Self {
            ndl: "NDL not calculated".to_string(),
            andl: "ANDL not calculated".to_string(),
            max_time: "Max Time not calculated".to_string(),
        }
    }

    pub fn invalid_input() -> Self {
        Self {
            ndl: INVALID_INPUT.to_string(),
            andl: INVALID_INPUT.to_string(),
            max_time: INVALID_INPUT.to_string(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.ndl == INVALID_INPUT && self.andl == INVALID_INPUT && self.max_time == INVALID_INPUT
    }

    /// Labelled result lines in screen order.
    pub fn display_lines(&self) -> [String; 3] {
        [
            format!("NDL: {}", self.ndl),
            format!("ANDL: {}", self.andl),
            format!("Max Time: {}", self.max_time),
        ]
    }
}
