use sharevolume_spider::format::{format_shares, Locale};
use sharevolume_spider::stock::model::ViewModel;

/// Window title before anything has been rendered.
pub const BASE_TITLE: &str = "ShareVolume";

/// What the viewer currently shows. `None` fields haven't been rendered yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    pub title: String,
    pub entity_name: Option<String>,
    pub max_val: Option<String>,
    pub max_fy: Option<String>,
    pub min_val: Option<String>,
    pub min_fy: Option<String>,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            title: BASE_TITLE.to_string(),
            entity_name: None,
            max_val: None,
            max_fy: None,
            min_val: None,
            min_fy: None,
        }
    }
}

/// Render `model` over `prev`.
///
/// The name and title always change. Every other field is replaced only when the model has a
/// value for it (non-NaN share count, non-empty year), otherwise the previous content stays.
pub fn render(prev: &Display, model: &ViewModel, locale: Locale) -> Display {
    let val = |val: f64, prev: &Option<String>| {
        if val.is_nan() {
            prev.clone()
        } else {
            Some(format_shares(val, locale))
        }
    };
    let fy = |fy: &str, prev: &Option<String>| {
        if fy.is_empty() {
            prev.clone()
        } else {
            Some(fy.to_string())
        }
    };

    Display {
        title: format!("{BASE_TITLE} — {}", model.entity_name),
        entity_name: Some(model.entity_name.clone()),
        max_val: val(model.max.val, &prev.max_val),
        max_fy: fy(&model.max.fy, &prev.max_fy),
        min_val: val(model.min.val, &prev.min_val),
        min_fy: fy(&model.min.fy, &prev.min_fy),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Info,
    Warn,
    Error,
}

/// The one message in the status line. Setting a status replaces it entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Warn,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}
