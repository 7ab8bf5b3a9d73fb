//! Option catalogs, defaults and preset scenes used by the form controller.

/// `(value, label)` pair shown in a select or chip group.
pub type SelectOption = (&'static str, &'static str);

pub const VISUAL_STYLE_OPTIONS: &[SelectOption] = &[
    ("minimalist", "Minimalist & Clean"),
    ("brutalist", "Neo-Brutalist"),
    ("glassmorphism", "Glassmorphism"),
    ("cyberpunk", "Cyberpunk / High Tech"),
    ("corporate", "Corporate & Professional"),
    ("playful", "Playful & Bouncy"),
    ("material", "Material Design"),
    ("apple", "Apple/Human Interface Guidelines"),
    ("editorial", "Editorial / Magazine"),
    ("retro_futurist", "Retro Futurist"),
    ("art_deco", "Art Deco / Geometric"),
    ("scandinavian", "Scandinavian / Soft Minimal"),
    ("industrial", "Industrial / Utility-First"),
    ("luxury_minimal", "Luxury Minimal"),
    ("y2k", "Y2K / Digital Nostalgia"),
];

pub const COLOR_PALETTE_OPTIONS: &[SelectOption] = &[
    ("monochrome", "Monochrome"),
    ("pastel", "Pastel"),
    ("dark_neon", "Dark Mode + Neon Accents"),
    ("earth_tones", "Earth Tones / Organic"),
    ("vibrant", "High Contrast & Vibrant"),
    ("corporate_blue", "Trustworthy Blue & Grey"),
    ("luxury", "Black & Gold / Luxury"),
    ("warm_sunset", "Warm Sunset (Coral/Amber/Rose)"),
    ("oceanic", "Oceanic (Teal/Blue/Cyan)"),
    ("forest", "Forest & Moss Greens"),
    ("noir", "Noir (Charcoal/Silver/White)"),
    ("candy_pop", "Candy Pop (Bubblegum + Lime + Sky)"),
    ("desert", "Desert Clay & Sand"),
    ("duotone", "Duotone + Accent Color"),
];

pub const TYPOGRAPHY_STYLE_OPTIONS: &[SelectOption] = &[
    ("sans_serif", "Modern Sans-Serif (Inter, Roboto)"),
    ("serif", "Elegant Serif (Merriweather, Playfair)"),
    ("mono", "Technical Monospace (JetBrains Mono, Fira Code)"),
    ("mixed", "Bold Serif Headers + Clean Sans Body"),
];

pub const AUDIENCE_OPTIONS: &[SelectOption] = &[
    ("startup_teams", "Startup Teams"),
    ("agency_clients", "Agency Clients"),
    ("enterprise_buyers", "Enterprise Buyers"),
    ("independent_creators", "Independent Creators"),
    ("operations_leads", "Operations Leaders"),
    ("product_marketers", "Product Marketers"),
    ("founders", "Founders"),
    ("fintech_teams", "Fintech Teams"),
    ("ecommerce_brands", "E-commerce Brands"),
    ("developer_tool_users", "Developer Tool Users"),
    ("saas_growth_teams", "SaaS Growth Teams"),
    ("healthcare_ops", "Healthcare Operations Teams"),
    ("education_platforms", "Education Platform Teams"),
    ("nonprofit_orgs", "Nonprofit Organizations"),
    ("hospitality_brands", "Hospitality & Travel Brands"),
    ("real_estate_teams", "Real Estate Teams"),
    ("government_services", "Government Service Teams"),
    ("gaming_communities", "Gaming Communities"),
];

pub const STAGE_OPTIONS: &[SelectOption] = &[
    ("from_scratch", "From Scratch (New Build)"),
    ("redesign", "Redesign Existing Site"),
    ("refresh", "Visual Refresh"),
    ("migration", "Platform/Stack Migration"),
    ("expansion", "Expand Existing Product/Pages"),
];

pub const TECH_STACK_OPTIONS: &[SelectOption] = &[
    ("nextjs_tailwind", "Next.js + Tailwind CSS"),
    ("nextjs_css_modules", "Next.js + CSS Modules"),
    ("react_vite_typescript", "React + Vite + TypeScript"),
    ("react_vite_javascript", "React + Vite + JavaScript"),
    ("vue_nuxt", "Vue + Nuxt"),
    ("svelte_sveltekit", "Svelte + SvelteKit"),
    ("html_css_js", "Vanilla HTML/CSS/JS"),
    ("astro", "Astro"),
    ("remix", "Remix"),
];

pub const COMPONENT_OPTIONS: &[SelectOption] = &[
    ("hero", "Hero"),
    ("sticky_navigation", "Sticky Navigation"),
    ("feature_grid", "Feature Grid"),
    ("social_proof", "Social Proof"),
    ("pricing", "Pricing"),
    ("faq", "FAQ"),
    ("testimonial_rail", "Testimonial Rail"),
    ("footer_cta", "Footer CTA"),
];

pub const GUARDRAIL_OPTIONS: &[SelectOption] = &[
    ("wcag_aa", "WCAG AA Contrast"),
    ("semantic_html", "Semantic HTML"),
    ("visible_focus", "Visible Focus States"),
    ("keyboard_navigation", "Keyboard Navigation"),
    ("reduced_motion", "Respects Reduced Motion"),
    ("fast_render", "Performance-Oriented Rendering"),
];

pub const DEFAULT_COMPONENTS: &[&str] = &["hero", "sticky_navigation", "feature_grid", "footer_cta"];
pub const DEFAULT_GUARDRAILS: &[&str] = &["wcag_aa", "semantic_html", "visible_focus", "reduced_motion"];
pub const DEFAULT_MOTION: u8 = 64;

/// Label for `value`, or the value itself when the catalog has no entry.
pub fn option_label(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct PresetScene {
    pub project_name: &'static str,
    pub website_brief: &'static str,
    pub stage: &'static str,
    pub audience: &'static str,
    pub visual_style: &'static str,
    pub color_palette: &'static str,
    pub typography_style: &'static str,
    pub tech_stack: &'static str,
    pub motion: u8,
    pub components: &'static [&'static str],
    pub guardrails: &'static [&'static str],
}

pub const PRESET_SCENES: &[PresetScene] = &[
    PresetScene {
        project_name: "Pulse Vertex",
        website_brief: "Create a premium AI workflow automation website with trust-building proof, strong call-to-action hierarchy, and polished motion that still feels practical.",
        stage: "from_scratch",
        audience: "enterprise_buyers",
        visual_style: "corporate",
        color_palette: "corporate_blue",
        typography_style: "sans_serif",
        tech_stack: "nextjs_tailwind",
        motion: 62,
        components: &["hero", "sticky_navigation", "feature_grid", "social_proof", "pricing", "footer_cta"],
        guardrails: &["wcag_aa", "semantic_html", "visible_focus", "reduced_motion", "fast_render"],
    },
    PresetScene {
        project_name: "Arc Bloom",
        website_brief: "Build a boutique studio website with immersive storytelling, layered layouts, tactile interactions, and mobile-first readability.",
        stage: "redesign",
        audience: "agency_clients",
        visual_style: "glassmorphism",
        color_palette: "pastel",
        typography_style: "mixed",
        tech_stack: "nextjs_css_modules",
        motion: 48,
        components: &["hero", "feature_grid", "testimonial_rail", "faq", "footer_cta"],
        guardrails: &["wcag_aa", "semantic_html", "visible_focus", "keyboard_navigation", "reduced_motion"],
    },
    PresetScene {
        project_name: "Signal Forge",
        website_brief: "Design a high-conversion platform website for developer tooling with sharp information architecture, benchmark-driven proof sections, and frictionless signup flows.",
        stage: "from_scratch",
        audience: "developer_tool_users",
        visual_style: "cyberpunk",
        color_palette: "dark_neon",
        typography_style: "mono",
        tech_stack: "react_vite_typescript",
        motion: 54,
        components: &["hero", "sticky_navigation", "feature_grid", "pricing", "faq", "footer_cta"],
        guardrails: &["wcag_aa", "semantic_html", "visible_focus", "keyboard_navigation", "fast_render"],
    },
    PresetScene {
        project_name: "Harbor Metrics",
        website_brief: "Build an analytics-focused landing site for operations leaders with KPI storytelling, persuasive use-cases, and a strong enterprise demo conversion path.",
        stage: "expansion",
        audience: "operations_leads",
        visual_style: "corporate",
        color_palette: "corporate_blue",
        typography_style: "sans_serif",
        tech_stack: "vue_nuxt",
        motion: 58,
        components: &["hero", "sticky_navigation", "feature_grid", "social_proof", "pricing", "footer_cta"],
        guardrails: &["wcag_aa", "semantic_html", "visible_focus", "reduced_motion", "fast_render"],
    },
    PresetScene {
        project_name: "Nimbus Cart",
        website_brief: "Create a conversion-heavy commerce website for a direct-to-consumer brand with elevated product storytelling, social proof loops, and urgency-based CTAs.",
        stage: "from_scratch",
        audience: "ecommerce_brands",
        visual_style: "playful",
        color_palette: "vibrant",
        typography_style: "mixed",
        tech_stack: "svelte_sveltekit",
        motion: 72,
        components: &["hero", "feature_grid", "social_proof", "pricing", "faq", "footer_cta"],
        guardrails: &["wcag_aa", "semantic_html", "visible_focus", "keyboard_navigation", "reduced_motion"],
    },
    PresetScene {
        project_name: "Foundry Ledger",
        website_brief: "Build a fintech product website for startup teams with clear trust architecture, compliance-friendly messaging, and a polished onboarding CTA system.",
        stage: "migration",
        audience: "fintech_teams",
        visual_style: "corporate",
        color_palette: "luxury",
        typography_style: "serif",
        tech_stack: "nextjs_tailwind",
        motion: 46,
        components: &["hero", "sticky_navigation", "feature_grid", "social_proof", "faq", "footer_cta"],
        guardrails: &["wcag_aa", "semantic_html", "visible_focus", "keyboard_navigation", "reduced_motion"],
    },
];
