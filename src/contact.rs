//! Contact form relay. Independent of the gallery.

use std::time::Duration;

use crate::models::settings::Settings;

/// Marker left in the form action until a real relay endpoint is set.
const PLACEHOLDER_MARKER: &str = "yourformid";

/// Posts form-encoded fields and reports the HTTP status.
pub trait FormRelay {
    fn post(&self, action: &str, fields: &[(String, String)]) -> Result<u16, String>;
}

pub struct ReqwestRelay {
    client: reqwest::blocking::Client,
}

impl ReqwestRelay {
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;
        Ok(ReqwestRelay { client })
    }
}

impl FormRelay for ReqwestRelay {
    fn post(&self, action: &str, fields: &[(String, String)]) -> Result<u16, String> {
        let resp = self
            .client
            .post(action)
            .header("Accept", "application/json")
            .form(fields)
            .send()
            .map_err(|e| format!("Form relay request failed: {}", e))?;
        Ok(resp.status().as_u16())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    Rejected(u16),
    NetworkError(String),
    NotConfigured,
}

impl ContactOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ContactOutcome::Sent => "Thanks! Your message has been sent.",
            ContactOutcome::Rejected(_) => "Something went wrong. Please email me directly.",
            ContactOutcome::NetworkError(_) => "Network error. Please try again later.",
            ContactOutcome::NotConfigured => {
                "Tip: Add your real Formspree endpoint in the form action."
            }
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ContactOutcome::Sent => Tone::Ok,
            _ => Tone::Warn,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl ContactForm {
    pub fn new(action: &str) -> Self {
        ContactForm {
            action: action.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.get_or("contact_form_action", ""))
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_configured(&self) -> bool {
        let action = self.action.trim();
        !action.is_empty() && !action.contains(PLACEHOLDER_MARKER)
    }

    /// Submit through `relay`. A successful send clears the fields.
    pub fn submit(&mut self, relay: &dyn FormRelay) -> ContactOutcome {
        if !self.is_configured() {
            return ContactOutcome::NotConfigured;
        }

        match relay.post(self.action.trim(), &self.fields) {
            Ok(status) if (200..300).contains(&status) => {
                self.fields.clear();
                ContactOutcome::Sent
            }
            Ok(status) => {
                log::warn!("Form relay {} rejected submission: {}", self.action, status);
                ContactOutcome::Rejected(status)
            }
            Err(e) => {
                log::warn!("Form relay {} unreachable: {}", self.action, e);
                ContactOutcome::NetworkError(e)
            }
        }
    }
}
