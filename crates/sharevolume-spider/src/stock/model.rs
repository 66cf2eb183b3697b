use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Entity name shown whenever a source doesn't carry one.
pub const UNKNOWN_ENTITY: &str = "Unknown Entity";

// ======
// Output
// ======

// {
//     "entityName": "BIOGEN INC.",
//     "max": { "val": 146532901, "fy": "2021" },
//     "min": { "val": 144588523, "fy": "2023" }
// }

/// The source-agnostic shape the viewer renders; also the shape of the bundled snapshot.
///
/// Built fresh by every successful load, never patched afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    #[serde(default = "unknown_entity", deserialize_with = "de_entity_name")]
    pub entity_name: String,
    #[serde(default)]
    pub max: Extremum,
    #[serde(default)]
    pub min: Extremum,
}

/// One end of the reported range: a share count and the fiscal year it was reported for.
///
/// `val` is NaN and `fy` is empty when there was nothing to report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    #[serde(default = "nan", deserialize_with = "de_val")]
    pub val: f64,
    #[serde(default, deserialize_with = "de_fy")]
    pub fy: String,
}

impl Default for Extremum {
    fn default() -> Self {
        Self::empty()
    }
}

impl Extremum {
    /// The `{ val: NaN, fy: "" }` placeholder.
    pub fn empty() -> Self {
        Self {
            val: f64::NAN,
            fy: String::new(),
        }
    }

    pub fn has_val(&self) -> bool {
        !self.val.is_nan()
    }

    pub fn has_fy(&self) -> bool {
        !self.fy.is_empty()
    }
}

impl ViewModel {
    /// A model that reports nothing but the entity's name.
    pub fn empty(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            max: Extremum::empty(),
            min: Extremum::empty(),
        }
    }
}

/// Render a year-like JSON value as the string it's compared and displayed as.
///
/// Numbers print without a trailing `.0`, booleans as words, null as the empty string.
/// Arrays and objects have no sensible year form and also become empty.
pub fn year_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

// de
// -------------------------------------------------------------------------------------------------

fn unknown_entity() -> String {
    UNKNOWN_ENTITY.to_string()
}

fn nan() -> f64 {
    f64::NAN
}

// same rule as the live normalizer: anything but a non-empty string is unknown
fn de_entity_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(name) if !name.is_empty() => Ok(name),
        _ => Ok(unknown_entity()),
    }
}

// `NaN` serializes to `null`, so a written snapshot must read back the same way
fn de_val<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let val: Option<f64> = Option::deserialize(deserializer)?;
    Ok(val.unwrap_or(f64::NAN))
}

// the snapshot may carry the fiscal year as `2021` or `"2021"`
fn de_fy<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let fy = Value::deserialize(deserializer)?;
    Ok(year_string(&fy))
}
