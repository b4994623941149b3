//! Parsing of the raw dive form into integer inputs.
//!
//! Every numeric field must be a plain signed decimal integer (an optional
//! `+` or `-` followed by digits, no whitespace) that fits in an `i64`. The
//! gate is all-or-nothing: the first field that fails rejects the whole form.

use nom::{
    character::complete::{digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    IResult, Parser,
};

use crate::error::{FormField, InputError};
use crate::models::{DiveForm, DiveInputs};

fn signed_integer(input: &str) -> IResult<&str, &str> {
    recognize((opt(one_of("+-")), digit1)).parse(input)
}

/// Parse a single form field as an integer.
pub fn parse_field(field: FormField, raw: &str) -> Result<i64, InputError> {
    if raw.is_empty() {
        return Err(InputError::Empty { field });
    }

    let invalid = || InputError::InvalidNumber {
        field,
        value: raw.to_string(),
    };

    let (_, text) = all_consuming(signed_integer)
        .parse(raw)
        .map_err(|_| invalid())?;
    // Lexically valid but out of range for i64
    text.parse::<i64>().map_err(|_| invalid())
}

impl DiveForm {
    /// Parse all numeric fields, failing on the first invalid one.
    pub fn parse(&self) -> Result<DiveInputs, InputError> {
        let result = self.parse_fields();
        if let Err(err) = &result {
            tracing::debug!(field = %err.field(), error = %err, "dive form rejected");
        }
        result
    }

    fn parse_fields(&self) -> Result<DiveInputs, InputError> {
        Ok(DiveInputs {
            depth_m: parse_field(FormField::Depth, &self.depth)?,
            bottom_time_min: parse_field(FormField::BottomTime, &self.bottom_time)?,
            surface_interval_hours: parse_field(
                FormField::SurfaceIntervalHours,
                &self.surface_interval_hours,
            )?,
            surface_interval_minutes: parse_field(
                FormField::SurfaceIntervalMinutes,
                &self.surface_interval_minutes,
            )?,
            is_multilevel_diving: self.is_multilevel_diving,
            is_first_dive_of_the_day: self.is_first_dive_of_the_day,
        })
    }
}
