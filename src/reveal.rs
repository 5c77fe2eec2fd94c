//! One-shot reveal-on-scroll: each registered card animates in the first time
//! enough of it is visible, then stops being observed.

use std::collections::HashSet;

use crate::models::settings::Settings;

/// Reveal parameters, read once per gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub duration_ms: u64,
    pub offset_px: i64,
    pub easing: String,
}

impl RevealConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let threshold = settings.get_f64("reveal_threshold");
        RevealConfig {
            threshold: if threshold > 0.0 && threshold <= 1.0 {
                threshold
            } else {
                0.1
            },
            duration_ms: settings.get_i64("reveal_duration_ms").max(0) as u64,
            offset_px: settings.get_i64("reveal_offset_px"),
            easing: settings.get_or("reveal_easing", "cubic-bezier(.2,.7,.2,1)"),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::defaults())
    }
}

/// Transition from hidden/offset to resting position, held at the end state.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimation {
    pub card_id: String,
    pub from_opacity: f64,
    pub to_opacity: f64,
    pub from_offset_px: i64,
    pub duration_ms: u64,
    pub easing: String,
    pub fill_forwards: bool,
}

impl RevealAnimation {
    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes reveal-{id} {{ from {{ opacity: {from}; transform: translateY({offset}px); }} to {{ opacity: {to}; transform: translateY(0); }} }}\n\
             [data-card=\"{id}\"] {{ animation: reveal-{id} {dur}ms {easing}{fill}; }}",
            id = self.card_id,
            from = self.from_opacity,
            offset = self.from_offset_px,
            to = self.to_opacity,
            dur = self.duration_ms,
            easing = self.easing,
            fill = if self.fill_forwards { " forwards" } else { "" },
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealObserver {
    config: RevealConfig,
    registered: HashSet<String>,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        RevealObserver {
            config,
            registered: HashSet::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn observe(&mut self, card_id: &str) {
        self.registered.insert(card_id.to_string());
    }

    pub fn is_observing(&self, card_id: &str) -> bool {
        self.registered.contains(card_id)
    }

    pub fn observed_count(&self) -> usize {
        self.registered.len()
    }

    /// Drop every registration; cards from an earlier pass become inert.
    pub fn reset(&mut self) {
        self.registered.clear();
    }

    /// Visibility callback. Fires at most once per registration.
    pub fn notify(&mut self, card_id: &str, ratio: f64) -> Option<RevealAnimation> {
        if !(ratio > 0.0 && ratio >= self.config.threshold) {
            return None;
        }
        if !self.registered.remove(card_id) {
            return None;
        }
        Some(RevealAnimation {
            card_id: card_id.to_string(),
            from_opacity: 0.0,
            to_opacity: 1.0,
            from_offset_px: self.config.offset_px,
            duration_ms: self.config.duration_ms,
            easing: self.config.easing.clone(),
            fill_forwards: true,
        })
    }
}
