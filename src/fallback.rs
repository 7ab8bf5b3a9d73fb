use crate::models::BuilderPayload;

pub const FALLBACK_DISCLAIMER: &str = "Gemini was unavailable, so this fallback prompt was generated locally:";

pub fn motion_profile(motion: u8) -> &'static str {
    match motion {
        0..=20 => "very subtle motion with calm transitions",
        21..=45 => "gentle motion with light transforms",
        46..=70 => "moderate motion with layered reveals",
        _ => "high-energy motion with strong choreography",
    }
}

/// Offline stand-in for a Gemini prompt. Pure; never touches the network.
pub fn build_fallback_prompt(payload: &BuilderPayload) -> String {
    let components = payload.components.iter().map(|c| format!("- {c}")).collect::<Vec<_>>().join("\n");
    let constraints = payload.constraints.iter().map(|c| format!("- {c}")).collect::<Vec<_>>().join("\n");

    [
        FALLBACK_DISCLAIMER.to_string(),
        String::new(),
        "You are a senior UI-building agent focused on distinctive, production-grade interfaces.".to_string(),
        format!("Project: {}", payload.project_name),
        format!("Website brief: {}", payload.website_brief),
        format!("Project stage: {}", payload.stage),
        format!("Audience: {}", payload.audience),
        format!("Visual style: {}", payload.visual_style),
        format!("Color palette: {}", payload.color_palette),
        format!("Typography style: {}", payload.typography_style),
        format!("Tech stack: {}", payload.tech_stack),
        String::new(),
        "Color strategy:".to_string(),
        "- Build from the selected color palette while preserving strong readability and hierarchy.".to_string(),
        format!("Motion intensity: {}/100 ({})", payload.motion, motion_profile(payload.motion)),
        String::new(),
        "Required components:".to_string(),
        components,
        String::new(),
        "Accessibility and engineering guardrails:".to_string(),
        constraints,
        String::new(),
        "Return a complete implementation-ready prompt with sections for objective, visual direction, color strategy, motion, and accessibility/engineering guardrails.".to_string(),
    ]
    .join("\n")
}
