use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::debug;

use crate::api::models::{
    AutotuneProfile, BasalEntry, BasalProfileEntry, IsfProfile, IsfSensitivity, ProfileDefinition,
    ProfileSet,
};
use crate::error::{AppError, AppResult};

const MIN_5M_CARBIMPACT: u32 = 3;
const INSULIN_CURVE: &str = "ultra-rapid";
const AUTOSENS_MAX: f64 = 2.0;
const AUTOSENS_MIN: f64 = 0.1;
const MINUTES_PER_DAY: u32 = 1440;

// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn convert_profile(profile_set: &ProfileSet) -> AppResult<AutotuneProfile> {
    convert_named_profile(profile_set, &profile_set.default_profile)
}

pub fn convert_named_profile(profile_set: &ProfileSet, name: &str) -> AppResult<AutotuneProfile> {
    let profile = select_profile(profile_set, name)?;
    debug!(
        profile = name,
        basal_entries = profile.basal.len(),
        "converting profile"
    );

    // Only the first sensitivity and carb ratio entries are carried over.
    let sens = profile
        .sens
        .first()
        .ok_or_else(|| AppError::MissingField(format!("sens[0] in profile `{name}`")))?;
    let carb_ratio = profile
        .carbratio
        .first()
        .ok_or_else(|| AppError::MissingField(format!("carbratio[0] in profile `{name}`")))?;

    let basalprofile = profile
        .basal
        .iter()
        .map(convert_basal)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(AutotuneProfile {
        min_5m_carbimpact: MIN_5M_CARBIMPACT,
        dia: coerce_number("dia", &profile.dia)?,
        basalprofile,
        isf_profile: IsfProfile {
            sensitivities: vec![IsfSensitivity {
                i: 0,
                start: format!("{}:00", sens.time),
                sensitivity: coerce_number("sens[0].value", &sens.value)?,
                offset: 0,
                x: 0,
                end_offset: MINUTES_PER_DAY,
            }],
        },
        carb_ratio: coerce_number("carbratio[0].value", &carb_ratio.value)?,
        curve: INSULIN_CURVE.to_string(),
        autosens_max: AUTOSENS_MAX,
        autosens_min: AUTOSENS_MIN,
    })
}

pub fn select_profile(profile_set: &ProfileSet, name: &str) -> AppResult<ProfileDefinition> {
    let Some(raw) = profile_set.store.get(name) else {
        let available = profile_set
            .store
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        let available = if available.is_empty() {
            "none".to_string()
        } else {
            available.join(", ")
        };
        return Err(AppError::ProfileNotFound(format!(
            "`{name}` is not in the profile store (available: {available})"
        )));
    };

    ProfileDefinition::deserialize(raw).map_err(|err| AppError::InvalidProfile {
        name: name.to_string(),
        message: err.to_string(),
    })
}

pub fn convert_basal(entry: &BasalEntry) -> AppResult<BasalProfileEntry> {
    let seconds = coerce_f64("timeAsSeconds", &entry.time_as_seconds)?;

    Ok(BasalProfileEntry {
        start: format!("{}:00", entry.time),
        minutes: round_half_up(seconds / 60.0) as i64,
        rate: entry.value.clone(),
    })
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn coerce_number(field: &str, value: &Value) -> AppResult<Number> {
    let number = coerce_f64(field, value)?;
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        return Ok(Number::from(number as i64));
    }

    Number::from_f64(number).ok_or_else(|| invalid_number(field, value))
}

fn coerce_f64(field: &str, value: &Value) -> AppResult<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|number| number.is_finite())
        .ok_or_else(|| invalid_number(field, value))
}

fn invalid_number(field: &str, value: &Value) -> AppError {
    AppError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn basal(time: &str, seconds: Value, value: Value) -> BasalEntry {
        BasalEntry {
            time: time.to_string(),
            time_as_seconds: seconds,
            value,
        }
    }

    #[test]
    fn rounds_basal_minutes_half_up() {
        let minutes = |seconds: i64| {
            convert_basal(&basal("00:00", json!(seconds), json!(1)))
                .expect("basal converts")
                .minutes
        };

        assert_eq!(minutes(5400), 90);
        assert_eq!(minutes(1), 0);
        assert_eq!(minutes(30), 1);
        assert_eq!(minutes(29), 0);
    }

    #[test]
    fn basal_start_and_rate_pass_through() {
        let converted =
            convert_basal(&basal("06:30", json!(23400), json!("0.75"))).expect("basal converts");
        assert_eq!(converted.start, "06:30:00");
        assert_eq!(converted.minutes, 390);
        assert_eq!(converted.rate, json!("0.75"));
    }

    #[test]
    fn accepts_numeric_string_seconds() {
        let converted =
            convert_basal(&basal("01:00", json!("3600"), json!(0.4))).expect("basal converts");
        assert_eq!(converted.minutes, 60);
    }

    #[test]
    fn coerces_integral_strings_to_integers() {
        assert_eq!(coerce_number("dia", &json!("6")).unwrap(), Number::from(6));
        assert_eq!(coerce_number("dia", &json!(" 4 ")).unwrap(), Number::from(4));
        assert_eq!(coerce_number("dia", &json!(5.0)).unwrap(), Number::from(5));
    }

    #[test]
    fn keeps_fractional_values_as_floats() {
        let number = coerce_number("dia", &json!("2.5")).unwrap();
        assert_eq!(number.as_f64(), Some(2.5));
        assert!(!number.is_i64());
    }

    #[test]
    fn rejects_values_that_are_not_numbers() {
        for value in [json!(null), json!(true), json!(""), json!("abc"), json!("NaN"), json!([])] {
            match coerce_number("dia", &value) {
                Err(AppError::InvalidNumber { field, .. }) => assert_eq!(field, "dia"),
                other => panic!("expected invalid number for {value}, got {other:?}"),
            }
        }
    }
}
