use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSet {
    #[serde(rename = "defaultProfile")]
    pub default_profile: String,
    #[serde(default)]
    pub store: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDefinition {
    pub dia: Value,
    pub basal: Vec<BasalEntry>,
    pub sens: Vec<SensitivityEntry>,
    pub carbratio: Vec<CarbRatioEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BasalEntry {
    pub time: String,
    #[serde(rename = "timeAsSeconds")]
    pub time_as_seconds: Value,
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SensitivityEntry {
    pub time: String,
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarbRatioEntry {
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutotuneProfile {
    pub min_5m_carbimpact: u32,
    pub dia: Number,
    pub basalprofile: Vec<BasalProfileEntry>,
    #[serde(rename = "isfProfile")]
    pub isf_profile: IsfProfile,
    pub carb_ratio: Number,
    pub curve: String,
    pub autosens_max: f64,
    pub autosens_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasalProfileEntry {
    pub start: String,
    pub minutes: i64,
    pub rate: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsfProfile {
    pub sensitivities: Vec<IsfSensitivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsfSensitivity {
    pub i: u32,
    pub start: String,
    pub sensitivity: Number,
    pub offset: u32,
    pub x: u32,
    #[serde(rename = "endOffset")]
    pub end_offset: u32,
}
