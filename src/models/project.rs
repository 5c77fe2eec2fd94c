use serde_json::Value;

/// One portfolio entry as published in `projects.json`.
/// Every field is optional at the display layer; absent values stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub stack: Vec<String>,
    pub image: String,
    pub code: String,
    pub demo: String,
    pub highlights: Vec<String>,
}

impl Project {
    /// Read a record without validating it.
    /// Fields of the wrong type degrade to empty instead of failing the document.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| -> String {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let list = |key: &str| -> Vec<String> {
            value
                .get(key)
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|i| i.as_str())
                        .map(|s| s.to_string())
                        .collect()
                })
                .unwrap_or_default()
        };

        Project {
            title: text("title"),
            description: text("description"),
            stack: list("stack"),
            image: text("image"),
            code: text("code"),
            demo: text("demo"),
            highlights: list("highlights"),
        }
    }

    /// Parse a whole project document. Anything but a top-level array is rejected.
    pub fn list_from_json(body: &str) -> Result<Vec<Self>, String> {
        let doc: Value =
            serde_json::from_str(body).map_err(|e| format!("JSON parse error: {}", e))?;
        match doc {
            Value::Array(records) => Ok(records.iter().map(Self::from_value).collect()),
            other => Err(format!(
                "expected a JSON array of projects, got {}",
                json_kind(&other)
            )),
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn project(
    title: &str,
    description: &str,
    stack: &[&str],
    image: &str,
    code: &str,
    highlights: &[&str],
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
        image: image.to_string(),
        code: code.to_string(),
        demo: String::new(),
        highlights: highlights.iter().map(|s| s.to_string()).collect(),
    }
}

/// Embedded list shown whenever the project document can't be used.
pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "Deepfake Video Detector",
            "Video-only deepfake detection pipeline with Streamlit UI and Grad-CAM.",
            &["PyTorch", "OpenCV", "Streamlit"],
            "assets/proj1.png",
            "https://github.com/pgk11",
            &["Frame extraction pipeline", "Explainability via Grad-CAM"],
        ),
        project(
            "Malware Classification from API Calls",
            "Classifies files as benign/malicious using CNN, BiLSTM, and hybrid models.",
            &["TensorFlow", "Keras", "Pandas"],
            "assets/proj2.png",
            "https://github.com/pgk11",
            &["F1 ~0.95 (example placeholder)", "ROC curves & confusion matrix"],
        ),
        project(
            "Post-Quantum MQTT Handshake (Kyber)",
            "ML-KEM-512 key exchange over MQTT between ESP32 (sim) and Python client.",
            &["Python", "paho-mqtt", "pqcrypto"],
            "assets/proj3.png",
            "https://github.com/pgk11",
            &["Shared secret exchange", "Perf stats (RAM & latency)"],
        ),
    ]
}
