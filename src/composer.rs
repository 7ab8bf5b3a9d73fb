use crate::models::DesignRequest;

const FRONTEND_DESIGN_DIRECTIVES: &str = r#"
You tend to converge toward generic, "on distribution" outputs. In frontend design, this creates what users call the "AI slop" aesthetic. Avoid this: make creative, distinctive frontends that surprise and delight. Focus on:

Visual Style: Commit to the selected visual style in a clear and cohesive way. Avoid mixed or conflicting visual languages.

Color & Theme: Commit to the selected palette direction. Use CSS variables for consistency, and build a clear hierarchy with dominant colors plus accent contrast.

Motion: Use animations for effects and micro-interactions. Prioritize CSS-only solutions for HTML. Use Motion library for React when available. Focus on high-impact moments: one well-orchestrated page load with staggered reveals (animation-delay) creates more delight than scattered micro-interactions.

Typography: Apply the selected typography style consistently across headers, body copy, and UI controls.

Backgrounds: Create atmosphere and depth rather than defaulting to solid colors. Layer CSS gradients, use geometric patterns, or add contextual effects that match the overall aesthetic.

Avoid generic AI-generated aesthetics:
- Ignoring selected directive values in favor of generic defaults
- Predictable layouts and component patterns
- Cookie-cutter design that lacks context-specific character

Interpret creatively and make unexpected choices that feel genuinely designed for the context. Vary between light and dark themes, different fonts, different aesthetics. You still tend to converge on common choices (Space Grotesk, for example) across generations. Avoid this: it is critical that you think outside the box!
"#;

fn bullets(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("- {item}"))
}

/// Directive template followed by the user's selections as labeled lines and bulleted sections.
pub fn build_design_directives(req: &DesignRequest) -> String {
    let mut lines = vec![
        FRONTEND_DESIGN_DIRECTIVES.to_string(),
        String::new(),
        "Apply these selected user inputs exactly as design directives:".to_string(),
        format!("- Project Stage: {}", req.stage),
        format!("- Audience: {}", req.audience),
        format!("- Visual Style: {}", req.visual_style),
        format!("- Color Palette: {}", req.color_palette),
        format!("- Typography Style: {}", req.typography_style),
        format!("- Preferred Tech Stack: {}", req.tech_stack),
        format!("- Motion Intensity (0-100): {}", req.motion),
        "Required Components:".to_string(),
    ];
    lines.extend(bullets(&req.components));
    lines.push("Accessibility & Engineering Guardrails:".to_string());
    lines.extend(bullets(&req.constraints));
    lines.join("\n")
}

/// Full instruction sent to Gemini. Pure: the same request always yields the same text.
pub fn build_instruction(req: &DesignRequest) -> String {
    [
        "You are an expert prompt engineer for UI-building coding agents.".to_string(),
        "Generate exactly one polished prompt that can be pasted directly into a UI-building agent.".to_string(),
        "Return only that prompt text. No markdown fences. No analysis.".to_string(),
        String::new(),
        "Follow these Frontend Design Directives:".to_string(),
        build_design_directives(req),
        String::new(),
        "Instructions for the output prompt :".to_string(),
        "1. It must be directive and authoritative.".to_string(),
        "2. It must explicitly detail the color hex codes, typography rules, spacing , and animation guidelines.".to_string(),
        "3. It must specify the layout structure and responsiveness.".to_string(),
        "4. It must mention accessibility standards.".to_string(),
        "5. It should be structured for maximum clarity for an AI model.".to_string(),
        String::new(),
        "Integrate typography guidance directly within Visual Direction and Color Strategy.".to_string(),
        String::new(),
        "INPUT".to_string(),
        format!("Project Name: {}", req.project_name),
        format!("Website Brief: {}", req.website_brief),
        format!("Project Stage: {}", req.stage),
        "Color Strategy Input: Base palette decisions on the selected Color Palette and audience context.".to_string(),
    ]
    .join("\n")
}
