use std::collections::HashMap;
use std::path::Path;

/// Default value for every known key.
const DEFAULTS: &[(&str, &str)] = &[
    ("site_url", ""),
    ("site_root", "."),
    ("projects_source", "projects.json"),
    ("fetch_timeout_secs", "10"),
    ("stack_separator", " • "),
    ("reveal_threshold", "0.1"),
    ("reveal_duration_ms", "420"),
    ("reveal_offset_px", "12"),
    ("reveal_easing", "cubic-bezier(.2,.7,.2,1)"),
    ("contact_form_action", ""),
    ("back_to_top_offset", "300"),
    ("theme_default", "dark"),
];

/// Flat key/value site settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Settings {
    /// Settings with every known key seeded.
    pub fn defaults() -> Self {
        Settings {
            values: DEFAULTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Load a TOML settings file on top of the defaults.
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            log::info!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::defaults());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML text on top of the defaults.
    /// Nested tables flatten to `table_key`; arrays are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| format!("Invalid settings TOML: {}", e))?;
        let mut settings = Self::defaults();
        settings.merge_table("", &table);
        Ok(settings)
    }

    fn merge_table(&mut self, prefix: &str, table: &toml::Table) {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}_{}", prefix, key)
            };
            let scalar = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Table(t) => {
                    self.merge_table(&full_key, t);
                    continue;
                }
                toml::Value::Array(_) => {
                    log::debug!("Ignoring array setting {}", full_key);
                    continue;
                }
            };
            self.values.insert(full_key, scalar);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false)
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn get_f64(&self, key: &str) -> f64 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }
}
