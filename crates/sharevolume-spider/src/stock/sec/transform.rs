use crate::stock::model::{year_string, Extremum, ViewModel, UNKNOWN_ENTITY};
use serde_json::Value;

/// Fiscal years must compare greater than this, as strings.
///
/// NOTE: the comparison is lexicographic, which only orders 4-digit years 2021..=2099 correctly;
/// `"3"` or `"FY"` also pass. Kept as-is until the intended cutoff semantics are settled.
pub const FY_CUTOFF: &str = "2020";

/// A reported share count, with its fiscal year in string form.
#[derive(Clone, Debug, PartialEq)]
pub struct DisclosureRecord {
    pub val: f64,
    pub fy: String,
}

/// The lowest and highest records of a filtered set.
#[derive(Clone, Debug, PartialEq)]
pub struct Extrema {
    pub min: Extremum,
    pub max: Extremum,
}

/// Keep the rows with a numeric `val` whose fiscal year sorts after [`FY_CUTOFF`].
///
/// Rows of any other shape are skipped, never an error.
pub fn filter_records(rows: &[Value]) -> Vec<DisclosureRecord> {
    rows.iter()
        .filter_map(|row| {
            let val = row.get("val").and_then(Value::as_f64)?;
            let fy = row.get("fy").map(year_string).unwrap_or_default();
            (!val.is_nan() && fy.as_str() > FY_CUTOFF).then_some(DisclosureRecord { val, fy })
        })
        .collect()
}

/// Find the minimum and maximum records in one pass; on ties the earliest record wins.
///
/// Returns `None` for an empty list.
pub fn select_extrema(records: &[DisclosureRecord]) -> Option<Extrema> {
    let first = records.first()?;
    let (mut min, mut max) = (first, first);
    for record in records {
        if record.val < min.val {
            min = record;
        }
        if record.val > max.val {
            max = record;
        }
    }

    Some(Extrema {
        min: Extremum {
            val: min.val,
            fy: min.fy.clone(),
        },
        max: Extremum {
            val: max.val,
            fy: max.fy.clone(),
        },
    })
}

/// Turn an SEC `companyconcept` payload into a [`ViewModel`].
///
/// Anything unexpected degrades: a missing name becomes [`UNKNOWN_ENTITY`], and a missing or
/// fully filtered `units.shares` list leaves both ends empty.
pub fn normalize(payload: &Value) -> ViewModel {
    let entity_name = payload
        .get("entityName")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_ENTITY);

    let rows = payload
        .get("units")
        .and_then(|units| units.get("shares"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    match select_extrema(&filter_records(rows)) {
        Some(Extrema { min, max }) => ViewModel {
            entity_name: entity_name.to_string(),
            max,
            min,
        },
        None => ViewModel::empty(entity_name),
    }
}
