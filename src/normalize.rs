use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::DesignRequest;

pub const DEFAULT_STAGE: &str = "From Scratch (New Build)";
pub const DEFAULT_AUDIENCE: &str = "Users who need a memorable and usable website experience";
pub const DEFAULT_VISUAL_STYLE: &str = "Minimalist & Clean";
pub const DEFAULT_COLOR_PALETTE: &str = "Monochrome";
pub const DEFAULT_TYPOGRAPHY_STYLE: &str = "Modern Sans-Serif (Inter, Roboto)";
pub const DEFAULT_TECH_STACK: &str = "Next.js + Tailwind CSS";
pub const DEFAULT_COMPONENTS: [&str; 4] = ["Hero", "Sticky Navigation", "Feature Grid", "Footer CTA"];
pub const DEFAULT_CONSTRAINTS: [&str; 3] = ["WCAG AA Contrast", "Semantic HTML", "Visible Focus States"];
pub const DEFAULT_MOTION: u8 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),
}

/// Coerce an arbitrary JSON body into a [`DesignRequest`]. Never fails; required fields
/// come back empty and are checked separately by [`validate`].
pub fn normalize_payload(payload: &Value) -> DesignRequest {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);
    let get = |key: &str| fields.get(key);

    DesignRequest {
        project_name: as_string(get("projectName"), ""),
        website_brief: as_string(get("websiteBrief"), ""),
        stage: as_string(get("stage"), DEFAULT_STAGE),
        audience: as_string(get("audience"), DEFAULT_AUDIENCE),
        visual_style: as_string(get("visualStyle"), DEFAULT_VISUAL_STYLE),
        color_palette: as_string(get("colorPalette"), DEFAULT_COLOR_PALETTE),
        typography_style: as_string(get("typographyStyle"), DEFAULT_TYPOGRAPHY_STYLE),
        tech_stack: as_string(get("techStack"), DEFAULT_TECH_STACK),
        components: as_list(get("components"), &DEFAULT_COMPONENTS),
        constraints: as_list(get("constraints"), &DEFAULT_CONSTRAINTS),
        motion: as_motion(get("motion"), DEFAULT_MOTION),
    }
}

pub fn validate(request: &DesignRequest) -> Result<(), ValidationError> {
    if request.project_name.is_empty() {
        return Err(ValidationError::MissingField("projectName"));
    }
    if request.website_brief.is_empty() {
        return Err(ValidationError::MissingField("websiteBrief"));
    }
    Ok(())
}

pub fn as_string(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => fallback.to_string(),
    }
}

pub fn as_list(value: Option<&Value>, fallback: &[&str]) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return fallback.iter().map(|s| s.to_string()).collect();
    };
    let cleaned: Vec<String> = items
        .iter()
        .map(|item| stringify(item).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if cleaned.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        cleaned
    }
}

pub fn as_motion(value: Option<&Value>, fallback: u8) -> u8 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => n.clamp(0.0, 100.0).round() as u8,
        _ => fallback,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
