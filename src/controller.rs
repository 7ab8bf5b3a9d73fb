//! Client-side form state machine.
//!
//! The controller owns every field the form shows, builds the outbound payload and
//! decides what to display when a submission resolves. A submission is identified by
//! a token drawn from a monotonically increasing sequence; only the newest token may
//! change state, so a late reply to an older submission is dropped.

use parking_lot::Mutex;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{
    option_label, PresetScene, AUDIENCE_OPTIONS, COLOR_PALETTE_OPTIONS, COMPONENT_OPTIONS, DEFAULT_COMPONENTS,
    DEFAULT_GUARDRAILS, DEFAULT_MOTION, GUARDRAIL_OPTIONS, PRESET_SCENES, STAGE_OPTIONS, TECH_STACK_OPTIONS,
    TYPOGRAPHY_STYLE_OPTIONS, VISUAL_STYLE_OPTIONS,
};
use crate::fallback::build_fallback_prompt;
use crate::models::{BuilderPayload, GenerateReply};
use crate::transport::{GenerateTransport, SubmitError};

pub const INITIAL_OUTPUT: &str =
    "Enter Project Name and Website Brief, tune the selectable controls, and click Generate with Gemini.";
pub const INITIAL_STATUS: &str = "Ready to generate with Gemini";
const MAX_STATUS_DETAIL: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    Settled(Outcome),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required.")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied(Outcome),
    Stale,
}

/// Token and payload captured when a submission starts.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub token: u64,
    pub payload: BuilderPayload,
}

/// Field values as option keys (not labels).
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub project_name: String,
    pub website_brief: String,
    pub stage: String,
    pub audience: String,
    pub visual_style: String,
    pub color_palette: String,
    pub typography_style: String,
    pub tech_stack: String,
    pub motion: u8,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            website_brief: String::new(),
            stage: STAGE_OPTIONS[0].0.to_string(),
            audience: AUDIENCE_OPTIONS[0].0.to_string(),
            visual_style: VISUAL_STYLE_OPTIONS[0].0.to_string(),
            color_palette: COLOR_PALETTE_OPTIONS[0].0.to_string(),
            typography_style: TYPOGRAPHY_STYLE_OPTIONS[0].0.to_string(),
            tech_stack: TECH_STACK_OPTIONS[0].0.to_string(),
            motion: DEFAULT_MOTION,
        }
    }
}

/// Destination for the copy action.
pub trait OutputSink {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub struct FormController {
    pub form: FormState,
    selected_components: Vec<String>,
    selected_guardrails: Vec<String>,
    status: String,
    output: String,
    phase: Phase,
    request_seq: u64,
    pulses: u64,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            selected_components: to_owned(DEFAULT_COMPONENTS),
            selected_guardrails: to_owned(DEFAULT_GUARDRAILS),
            status: INITIAL_STATUS.to_string(),
            output: INITIAL_OUTPUT.to_string(),
            phase: Phase::Idle,
            request_seq: 0,
            pulses: 0,
        }
    }

    pub fn status(&self) -> &str { &self.status }
    pub fn output(&self) -> &str { &self.output }
    pub fn phase(&self) -> Phase { self.phase }
    pub fn is_generating(&self) -> bool { self.phase == Phase::Generating }
    pub fn selected_components(&self) -> &[String] { &self.selected_components }
    pub fn selected_guardrails(&self) -> &[String] { &self.selected_guardrails }
    /// Number of cosmetic output pulses triggered so far.
    pub fn pulses(&self) -> u64 { self.pulses }

    pub fn set_motion(&mut self, motion: i64) {
        self.form.motion = motion.clamp(0, 100) as u8;
    }

    /// Returns false when the toggle was ignored because a submission is in flight.
    pub fn toggle_component(&mut self, value: &str) -> bool {
        if self.is_generating() {
            return false;
        }
        self.selected_components = toggle_selection(&self.selected_components, value, DEFAULT_COMPONENTS);
        true
    }

    pub fn toggle_guardrail(&mut self, value: &str) -> bool {
        if self.is_generating() {
            return false;
        }
        self.selected_guardrails = toggle_selection(&self.selected_guardrails, value, DEFAULT_GUARDRAILS);
        true
    }

    pub fn apply_random_preset(&mut self) -> bool {
        let index = rand::thread_rng().gen_range(0..PRESET_SCENES.len());
        self.apply_preset(index)
    }

    /// Replace every field and both selections with a preset scene. Ignored while generating
    /// or when `index` is out of range.
    pub fn apply_preset(&mut self, index: usize) -> bool {
        if self.is_generating() {
            return false;
        }
        let Some(scene) = PRESET_SCENES.get(index) else {
            return false;
        };
        self.load_scene(scene);
        self.status = "Preset applied. Generate with Gemini when ready.".to_string();
        self.pulse();
        info!(preset = scene.project_name, "preset applied");
        true
    }

    fn load_scene(&mut self, scene: &PresetScene) {
        self.form = FormState {
            project_name: scene.project_name.to_string(),
            website_brief: scene.website_brief.to_string(),
            stage: scene.stage.to_string(),
            audience: scene.audience.to_string(),
            visual_style: scene.visual_style.to_string(),
            color_palette: scene.color_palette.to_string(),
            typography_style: scene.typography_style.to_string(),
            tech_stack: scene.tech_stack.to_string(),
            motion: scene.motion,
        };
        self.selected_components = to_owned(scene.components);
        self.selected_guardrails = to_owned(scene.guardrails);
    }

    pub fn payload(&self) -> BuilderPayload {
        let form = &self.form;
        BuilderPayload {
            project_name: form.project_name.trim().to_string(),
            website_brief: form.website_brief.trim().to_string(),
            stage: option_label(STAGE_OPTIONS, &form.stage),
            audience: option_label(AUDIENCE_OPTIONS, &form.audience),
            visual_style: option_label(VISUAL_STYLE_OPTIONS, &form.visual_style),
            color_palette: option_label(COLOR_PALETTE_OPTIONS, &form.color_palette),
            typography_style: option_label(TYPOGRAPHY_STYLE_OPTIONS, &form.typography_style),
            tech_stack: option_label(TECH_STACK_OPTIONS, &form.tech_stack),
            components: self.selected_components.iter().map(|v| option_label(COMPONENT_OPTIONS, v)).collect(),
            constraints: self.selected_guardrails.iter().map(|v| option_label(GUARDRAIL_OPTIONS, v)).collect(),
            motion: form.motion,
        }
    }

    /// Idle/Settled/Generating → Generating. A blank required field leaves the phase untouched.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, FormError> {
        if self.form.project_name.trim().is_empty() {
            self.status = "Project Name is required.".to_string();
            return Err(FormError::MissingField("Project Name"));
        }
        if self.form.website_brief.trim().is_empty() {
            self.status = "Website Brief is required.".to_string();
            return Err(FormError::MissingField("Website Brief"));
        }

        let payload = self.payload();
        self.request_seq += 1;
        self.phase = Phase::Generating;
        self.status = "Generating with Gemini...".to_string();
        self.output = "Gemini is drafting your UI-agent prompt...".to_string();
        self.pulse();
        debug!(token = self.request_seq, "submission started");
        Ok(PendingSubmission { token: self.request_seq, payload })
    }

    /// Apply the result of submission `token`, or drop it if a newer one has been issued.
    pub fn settle(&mut self, pending: &PendingSubmission, result: Result<GenerateReply, SubmitError>) -> Settlement {
        if pending.token != self.request_seq {
            debug!(token = pending.token, latest = self.request_seq, "discarding stale reply");
            return Settlement::Stale;
        }

        let outcome = match result.and_then(usable_prompt) {
            Ok((prompt, model)) => {
                self.output = prompt;
                self.status = format!("Generated with {}", model.unwrap_or_else(|| "Gemini".to_string()));
                Outcome::Success
            }
            Err(e) => {
                self.output = build_fallback_prompt(&pending.payload);
                self.status = format!(
                    "Gemini request failed. {} Using local fallback prompt.",
                    short_error_message(&e.to_string())
                );
                Outcome::Fallback
            }
        };
        self.phase = Phase::Settled(outcome);
        self.pulse();
        Settlement::Applied(outcome)
    }

    pub fn copy_output(&mut self, sink: &mut impl OutputSink) {
        if self.output.is_empty() {
            return;
        }
        self.status = match sink.write_text(&self.output) {
            Ok(()) => "Copied to clipboard".to_string(),
            Err(_) => "Clipboard blocked: copy manually from output panel".to_string(),
        };
    }

    fn pulse(&mut self) {
        self.pulses += 1;
    }
}

/// Run one full submission. The lock is released while the request is in flight, so
/// other submissions may start meanwhile.
pub async fn submit<T>(controller: &Mutex<FormController>, transport: &T) -> Result<Settlement, FormError>
where
    T: GenerateTransport + ?Sized,
{
    let pending = controller.lock().begin_submit()?;
    let result = transport.send(&pending.payload).await;
    Ok(controller.lock().settle(&pending, result))
}

fn usable_prompt(reply: GenerateReply) -> Result<(String, Option<String>), SubmitError> {
    let prompt = reply.prompt.as_deref().map(str::trim).unwrap_or_default();
    if prompt.is_empty() {
        return Err(SubmitError::Rejected("Gemini response did not include prompt text.".to_string()));
    }
    let model = reply.model.filter(|m| !m.is_empty());
    Ok((prompt.to_string(), model))
}

/// Adding appends; removing the last entry reverts to `defaults`.
pub fn toggle_selection(values: &[String], selected: &str, defaults: &[&str]) -> Vec<String> {
    if !values.iter().any(|v| v == selected) {
        let mut next = values.to_vec();
        next.push(selected.to_string());
        return next;
    }
    let next: Vec<String> = values.iter().filter(|v| *v != selected).cloned().collect();
    if next.is_empty() { to_owned(defaults) } else { next }
}

/// Collapse whitespace and cap at 160 characters.
pub fn short_error_message(message: &str) -> String {
    let compact = message.split_whitespace().collect::<Vec<_>>().join(" ");
    let compact = if compact.is_empty() { "Unable to generate right now.".to_string() } else { compact };
    if compact.chars().count() <= MAX_STATUS_DETAIL {
        return compact;
    }
    let head: String = compact.chars().take(MAX_STATUS_DETAIL - 3).collect();
    format!("{head}...")
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::sync::oneshot;

    fn filled() -> FormController {
        let mut c = FormController::new();
        c.form.project_name = "  Orbit Canvas ".into();
        c.form.website_brief = "AI workflow product site.".into();
        c
    }

    fn ok_reply(prompt: &str) -> Result<GenerateReply, SubmitError> {
        Ok(GenerateReply { prompt: Some(prompt.into()), model: Some("gemini-test".into()), error: None })
    }

    #[test]
    fn starts_idle_with_defaults() {
        let c = FormController::new();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.status(), INITIAL_STATUS);
        assert_eq!(c.output(), INITIAL_OUTPUT);
        assert_eq!(c.form.motion, 64);
        assert_eq!(c.selected_components(), to_owned(DEFAULT_COMPONENTS).as_slice());
    }

    #[test]
    fn missing_required_fields_keep_phase_and_report() {
        let mut c = FormController::new();
        assert_eq!(c.begin_submit().unwrap_err(), FormError::MissingField("Project Name"));
        assert_eq!(c.status(), "Project Name is required.");
        c.form.project_name = "X".into();
        c.form.website_brief = "   ".into();
        assert_eq!(c.begin_submit().unwrap_err(), FormError::MissingField("Website Brief"));
        assert_eq!(c.status(), "Website Brief is required.");
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.pulses(), 0);
    }

    #[test]
    fn payload_resolves_labels_and_trims() {
        let mut c = filled();
        c.form.stage = "migration".into();
        c.toggle_component("pricing");
        let p = c.payload();
        assert_eq!(p.project_name, "Orbit Canvas");
        assert_eq!(p.stage, "Platform/Stack Migration");
        assert_eq!(p.visual_style, "Minimalist & Clean");
        assert_eq!(p.components, vec!["Hero", "Sticky Navigation", "Feature Grid", "Footer CTA", "Pricing"]);
        assert_eq!(p.constraints, vec!["WCAG AA Contrast", "Semantic HTML", "Visible Focus States", "Respects Reduced Motion"]);
        assert_eq!(p.motion, 64);
    }

    #[test]
    fn success_settles_with_trimmed_prompt_and_model() {
        let mut c = filled();
        let pending = c.begin_submit().unwrap();
        assert!(c.is_generating());
        assert_eq!(c.output(), "Gemini is drafting your UI-agent prompt...");
        assert_eq!(c.settle(&pending, ok_reply("  Final prompt \n")), Settlement::Applied(Outcome::Success));
        assert_eq!(c.output(), "Final prompt");
        assert_eq!(c.status(), "Generated with gemini-test");
        assert_eq!(c.phase(), Phase::Settled(Outcome::Success));
        assert_eq!(c.pulses(), 2);
    }

    #[test]
    fn missing_model_names_gemini() {
        let mut c = filled();
        let pending = c.begin_submit().unwrap();
        c.settle(&pending, Ok(GenerateReply { prompt: Some("p".into()), ..Default::default() }));
        assert_eq!(c.status(), "Generated with Gemini");
    }

    #[test]
    fn failures_render_fallback() {
        let mut c = filled();
        let pending = c.begin_submit().unwrap();
        let outcome = c.settle(&pending, Err(SubmitError::Rejected("Quota   exceeded.\n".into())));
        assert_eq!(outcome, Settlement::Applied(Outcome::Fallback));
        assert_eq!(c.output(), build_fallback_prompt(&pending.payload));
        assert_eq!(c.pulses(), 2);
        assert_eq!(c.status(), "Gemini request failed. Quota exceeded. Using local fallback prompt.");

        let pending = c.begin_submit().unwrap();
        c.settle(&pending, ok_reply("   "));
        assert_eq!(c.phase(), Phase::Settled(Outcome::Fallback));
        assert_eq!(
            c.status(),
            "Gemini request failed. Gemini response did not include prompt text. Using local fallback prompt."
        );
    }

    #[test]
    fn stale_reply_is_discarded() {
        let mut c = filled();
        let a = c.begin_submit().unwrap();
        c.form.project_name = "Second".into();
        let b = c.begin_submit().unwrap();

        assert_eq!(c.settle(&b, ok_reply("B prompt")), Settlement::Applied(Outcome::Success));
        let pulses = c.pulses();
        assert_eq!(c.settle(&a, ok_reply("A prompt")), Settlement::Stale);
        assert_eq!(c.settle(&a, Err(SubmitError::Transport("late".into()))), Settlement::Stale);
        assert_eq!(c.output(), "B prompt");
        assert_eq!(c.status(), "Generated with gemini-test");
        assert_eq!(c.pulses(), pulses);
    }

    #[test]
    fn removing_last_selection_restores_defaults() {
        let mut c = FormController::new();
        for v in DEFAULT_GUARDRAILS {
            c.toggle_guardrail(v);
        }
        assert_eq!(c.selected_guardrails(), to_owned(DEFAULT_GUARDRAILS).as_slice());

        let single = toggle_selection(&["faq".to_string()], "faq", DEFAULT_COMPONENTS);
        assert_eq!(single, to_owned(DEFAULT_COMPONENTS));
        let added = toggle_selection(&["faq".to_string()], "hero", DEFAULT_COMPONENTS);
        assert_eq!(added, vec!["faq", "hero"]);
    }

    #[test]
    fn toggles_and_presets_are_ignored_while_generating() {
        let mut c = filled();
        c.begin_submit().unwrap();
        let before = c.clone();
        assert!(!c.toggle_component("faq"));
        assert!(!c.apply_preset(0));
        assert_eq!(c.selected_components(), before.selected_components());
        assert_eq!(c.form, before.form);
    }

    #[test]
    fn preset_replaces_fields_and_selections() {
        let mut c = FormController::new();
        assert!(c.apply_preset(2));
        assert_eq!(c.form.project_name, "Signal Forge");
        assert_eq!(c.form.visual_style, "cyberpunk");
        assert_eq!(c.form.motion, 54);
        assert_eq!(c.selected_components(), to_owned(PRESET_SCENES[2].components).as_slice());
        assert_eq!(c.selected_guardrails(), to_owned(PRESET_SCENES[2].guardrails).as_slice());
        assert_eq!(c.status(), "Preset applied. Generate with Gemini when ready.");
        assert_eq!(c.pulses(), 1);
        assert!(!c.apply_preset(PRESET_SCENES.len()));
        assert!(c.apply_random_preset());
    }

    #[test]
    fn motion_is_clamped() {
        let mut c = FormController::new();
        c.set_motion(140);
        assert_eq!(c.form.motion, 100);
        c.set_motion(-3);
        assert_eq!(c.form.motion, 0);
    }

    #[test]
    fn short_error_messages() {
        assert_eq!(short_error_message("  \n "), "Unable to generate right now.");
        assert_eq!(short_error_message("a \t b\nc"), "a b c");
        let long = "x".repeat(200);
        let short = short_error_message(&long);
        assert_eq!(short.chars().count(), 160);
        assert!(short.ends_with("..."));
        assert_eq!(short_error_message(&"y".repeat(160)), "y".repeat(160));
    }

    struct Clipboard(Option<String>, bool);

    impl OutputSink for Clipboard {
        fn write_text(&mut self, text: &str) -> Result<(), String> {
            if self.1 {
                return Err("denied".into());
            }
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn copy_reports_outcome() {
        let mut c = FormController::new();
        let mut ok = Clipboard(None, false);
        c.copy_output(&mut ok);
        assert_eq!(ok.0.as_deref(), Some(INITIAL_OUTPUT));
        assert_eq!(c.status(), "Copied to clipboard");

        c.copy_output(&mut Clipboard(None, true));
        assert_eq!(c.status(), "Clipboard blocked: copy manually from output panel");
    }

    /// Each call waits on the next channel handed out, so the test decides resolution order.
    struct GatedTransport {
        gates: Mutex<Vec<oneshot::Receiver<Result<GenerateReply, SubmitError>>>>,
    }

    #[async_trait]
    impl GenerateTransport for GatedTransport {
        async fn send(&self, _payload: &BuilderPayload) -> Result<GenerateReply, SubmitError> {
            let gate = self.gates.lock().remove(0);
            gate.await.unwrap_or_else(|_| Err(SubmitError::Transport("gate dropped".into())))
        }
    }

    #[tokio::test]
    async fn older_submission_resolving_last_does_not_overwrite_newer() {
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        let transport = Arc::new(GatedTransport { gates: Mutex::new(vec![rx_a, rx_b]) });
        let controller = Arc::new(Mutex::new(filled()));

        let task_a = tokio::spawn({
            let (c, t) = (controller.clone(), transport.clone());
            async move { submit(&c, t.as_ref()).await }
        });
        while controller.lock().request_seq < 1 {
            tokio::task::yield_now().await;
        }
        let task_b = tokio::spawn({
            let (c, t) = (controller.clone(), transport.clone());
            async move { submit(&c, t.as_ref()).await }
        });
        while controller.lock().request_seq < 2 {
            tokio::task::yield_now().await;
        }

        tx_b.send(ok_reply("B prompt")).unwrap();
        assert_eq!(task_b.await.unwrap(), Ok(Settlement::Applied(Outcome::Success)));
        tx_a.send(Err(SubmitError::Transport("A failed late".into()))).unwrap();
        assert_eq!(task_a.await.unwrap(), Ok(Settlement::Stale));

        let c = controller.lock();
        assert_eq!(c.output(), "B prompt");
        assert_eq!(c.status(), "Generated with gemini-test");
        assert_eq!(c.phase(), Phase::Settled(Outcome::Success));
    }

    #[tokio::test]
    async fn submit_rejects_blank_form_without_sending() {
        let transport = GatedTransport { gates: Mutex::new(Vec::new()) };
        let controller = Mutex::new(FormController::new());
        assert_eq!(submit(&controller, &transport).await, Err(FormError::MissingField("Project Name")));
    }
}
