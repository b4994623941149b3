pub mod error;
pub mod form;
pub mod limits;
pub mod models;
pub mod tables;

uniffi::include_scaffolding!("divecalc");

pub use error::{FormField, InputError};
pub use limits::{LimitKind, LimitStatus, MaxTime, SurfaceIntervalBand};
pub use models::{CalculatorSettings, DiveForm, DiveInputs, DiveMode, DiveResults};
pub use tables::{DepthTable, SUPPORTED_DEPTHS_M};

/// Compute NDL status, ANDL status and maximum dive time for parsed inputs.
pub fn compute_dive_results(inputs: DiveInputs) -> DiveResults {
    let ndl = limits::evaluate(LimitKind::Ndl, &inputs);
    let andl = limits::evaluate(LimitKind::Andl, &inputs);
    let max_time = limits::max_time(inputs.depth_m);

    tracing::debug!(
        depth_m = inputs.depth_m,
        bottom_time_min = inputs.bottom_time_min,
        surface_interval_min = inputs.surface_interval_total_min(),
        %ndl,
        %andl,
        %max_time,
        "computed dive results"
    );

    DiveResults {
        ndl: ndl.to_string(),
        andl: andl.to_string(),
        max_time: max_time.to_string(),
    }
}

/// Parse the raw form and compute. Any unparseable field yields
/// "Invalid Input" for all three results.
pub fn compute_dive_form(form: DiveForm) -> DiveResults {
    match form.parse() {
        Ok(inputs) => compute_dive_results(inputs),
        Err(_) => DiveResults::invalid_input(),
    }
}

/// Compute according to the selected screen mode.
pub fn compute_for_mode(settings: CalculatorSettings, form: DiveForm) -> DiveResults {
    if settings.mode.computes_results() {
        compute_dive_form(form)
    } else {
        DiveResults::not_calculated()
    }
}

pub fn parse_dive_form(form: DiveForm) -> Result<DiveInputs, InputError> {
    form.parse()
}

pub fn max_time_result(depth_m: i64) -> String {
    limits::max_time(depth_m).to_string()
}

pub fn ndl_result(inputs: DiveInputs) -> String {
    limits::evaluate(LimitKind::Ndl, &inputs).to_string()
}

pub fn andl_result(inputs: DiveInputs) -> String {
    limits::evaluate(LimitKind::Andl, &inputs).to_string()
}

pub fn supported_depths() -> Vec<i64> {
    SUPPORTED_DEPTHS_M.to_vec()
}

pub fn not_calculated_results() -> DiveResults {
    DiveResults::not_calculated()
}

pub fn mode_label(mode: DiveMode) -> String {
    mode.label().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        depth_m: i64,
        bottom_time_min: i64,
        hours: i64,
        minutes: i64,
        is_multilevel_diving: bool,
        is_first_dive_of_the_day: bool,
    ) -> DiveInputs {
        DiveInputs {
            depth_m,
            bottom_time_min,
            surface_interval_hours: hours,
            surface_interval_minutes: minutes,
            is_multilevel_diving,
            is_first_dive_of_the_day,
        }
    }

    fn form(depth: &str, bottom_time: &str, hours: &str, minutes: &str) -> DiveForm {
        DiveForm {
            depth: depth.to_string(),
            bottom_time: bottom_time.to_string(),
            surface_interval_hours: hours.to_string(),
            surface_interval_minutes: minutes.to_string(),
            ..DiveForm::default()
        }
    }

    #[test]
    fn test_double_adjustment_example() {
        let results = compute_dive_results(inputs(10, 200, 2, 30, false, true));
        assert_eq!(results.ndl, "Safe: Within NDL");
        assert_eq!(results.andl, "Safe: Within ANDL");
        assert_eq!(results.max_time, "170 minutes");
    }

    #[test]
    fn test_no_adjustment_example() {
        let results = compute_dive_results(inputs(18, 60, 0, 30, true, false));
        assert_eq!(results.ndl, "Warning: Exceeds NDL");
        assert_eq!(results.andl, "Warning: Exceeds ANDL");
        assert_eq!(results.max_time, "45 minutes");
    }

    #[test]
    fn test_long_interval_example() {
        let results = compute_dive_results(inputs(40, 30, 3, 20, false, false));
        assert_eq!(results.ndl, "Warning: Exceeds NDL");
        assert_eq!(results.andl, "Warning: Exceeds ANDL");
        assert_eq!(results.max_time, "10 minutes");
    }

    #[test]
    fn test_max_time_for_every_depth() {
        let expected = [170, 100, 60, 45, 35, 25, 20, 15, 10];
        for (depth, minutes) in supported_depths().into_iter().zip(expected) {
            assert_eq!(max_time_result(depth), format!("{minutes} minutes"));
        }
    }

    #[test]
    fn test_unsupported_depth() {
        let results = compute_dive_results(inputs(22, 10, 1, 0, false, false));
        assert_eq!(
            results,
            DiveResults {
                ndl: "Depth not in NDL table".to_string(),
                andl: "Depth not in ANDL table".to_string(),
                max_time: "Depth not in Max Time table".to_string(),
            }
        );
    }

    #[test]
    fn test_single_results_match_combined() {
        let dive = inputs(15, 70, 1, 45, false, true);
        let results = compute_dive_results(dive.clone());
        assert_eq!(ndl_result(dive.clone()), results.ndl);
        assert_eq!(andl_result(dive.clone()), results.andl);
        assert_eq!(max_time_result(dive.depth_m), results.max_time);
    }

    #[test]
    fn test_form_example() {
        let mut dive = form("10", "200", "2", "30");
        dive.is_first_dive_of_the_day = true;
        let results = compute_dive_form(dive);
        assert_eq!(results.ndl, "Safe: Within NDL");
        assert_eq!(results.andl, "Safe: Within ANDL");
        assert_eq!(results.max_time, "170 minutes");
    }

    #[test]
    fn test_invalid_input_is_uniform() {
        for dive in [
            form("abc", "200", "2", "30"),
            form("10", "", "2", "30"),
            form("10", "200", "two", "30"),
            form("10", "200", "2", "3.5"),
        ] {
            assert_eq!(compute_dive_form(dive), DiveResults::invalid_input());
        }
    }

    #[test]
    fn test_invalid_input_with_unsupported_depth() {
        // The gate runs before any lookup
        let results = compute_dive_form(form("22", "x", "0", "0"));
        assert!(results.is_invalid_input());
    }

    #[test]
    fn test_parse_dive_form_error() {
        let err = parse_dive_form(form("10", "200", "", "30")).unwrap_err();
        assert_eq!(
            err,
            InputError::Empty {
                field: FormField::SurfaceIntervalHours
            }
        );
    }

    #[test]
    fn test_compute_for_mode() {
        let dive = form("18", "60", "0", "30");
        let planning = compute_for_mode(CalculatorSettings::default(), dive.clone());
        assert_eq!(planning.max_time, "45 minutes");

        for mode in [DiveMode::SurfaceInterval, DiveMode::MaxDepth] {
            let results = compute_for_mode(CalculatorSettings { mode }, dive.clone());
            assert_eq!(results, not_calculated_results());
        }
    }

    #[test]
    fn test_mode_label() {
        assert_eq!(mode_label(DiveMode::SurfaceInterval), "Surface Interval");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_inputs() -> impl Strategy<Value = DiveInputs> {
            (
                prop_oneof![
                    prop::sample::select(SUPPORTED_DEPTHS_M.to_vec()),
                    -100i64..200,
                ],
                -500i64..1000,
                -5i64..48,
                -120i64..120,
                any::<bool>(),
                any::<bool>(),
            )
                .prop_map(|(depth, bottom, hours, minutes, multilevel, first)| {
                    inputs(depth, bottom, hours, minutes, multilevel, first)
                })
        }

        proptest! {
            #[test]
            fn computation_is_idempotent(dive in arb_inputs()) {
                let first = compute_dive_results(dive.clone());
                let second = compute_dive_results(dive);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn unknown_depth_is_not_found_everywhere(
                depth in any::<i64>().prop_filter("unsupported depth", |d| !tables::is_supported_depth(*d)),
                bottom in any::<i64>(),
                hours in any::<i64>(),
                minutes in any::<i64>(),
            ) {
                let results = compute_dive_results(inputs(depth, bottom, hours, minutes, false, true));
                prop_assert_eq!(results.ndl, "Depth not in NDL table");
                prop_assert_eq!(results.andl, "Depth not in ANDL table");
                prop_assert_eq!(results.max_time, "Depth not in Max Time table");
            }

            #[test]
            fn non_numeric_field_invalidates_everything(
                field in 0usize..4,
                garbage in "[a-zA-Z .]{1,8}",
            ) {
                let mut values = ["10".to_string(), "200".to_string(), "2".to_string(), "30".to_string()];
                values[field] = garbage;
                let [depth, bottom_time, hours, minutes] = values;
                let results = compute_dive_form(DiveForm {
                    depth,
                    bottom_time,
                    surface_interval_hours: hours,
                    surface_interval_minutes: minutes,
                    is_multilevel_diving: false,
                    is_first_dive_of_the_day: true,
                });
                prop_assert!(results.is_invalid_input());
            }

            #[test]
            fn andl_safe_implies_ndl_safe(dive in arb_inputs()) {
                let ndl = limits::evaluate(LimitKind::Ndl, &dive);
                let andl = limits::evaluate(LimitKind::Andl, &dive);
                if andl.is_safe() {
                    prop_assert!(ndl.is_safe());
                }
            }
        }
    }
}
