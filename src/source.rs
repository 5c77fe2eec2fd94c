//! Project document loading with a silent fallback to the embedded list.

use std::path::Path;
use std::time::Duration;

use crate::models::project::{default_projects, Project};
use crate::models::settings::Settings;

/// Raw result of reading the project document.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Anything that can retrieve the project document from a location.
pub trait Transport {
    fn get(&self, location: &str) -> Result<FetchedDocument, String>;
}

/// Blocking HTTP transport. Every request asks caches to stay out of the way.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, location: &str) -> Result<FetchedDocument, String> {
        let resp = self
            .client
            .get(location)
            .header("Cache-Control", "no-store")
            .header("Pragma", "no-cache")
            .header("Accept", "application/json")
            .send()
            .map_err(|e| format!("Request to {} failed: {}", location, e))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = resp
            .text()
            .map_err(|e| format!("Failed to read body from {}: {}", location, e))?;

        Ok(FetchedDocument {
            status,
            content_type,
            body,
        })
    }
}

/// Reads the document from disk, for sites built without a base URL.
pub struct FileTransport;

impl Transport for FileTransport {
    fn get(&self, location: &str) -> Result<FetchedDocument, String> {
        let path = Path::new(location);
        let body = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let content_type = if is_json {
            "application/json"
        } else {
            "text/plain"
        };
        Ok(FetchedDocument {
            status: 200,
            content_type: Some(content_type.to_string()),
            body,
        })
    }
}

/// Why the embedded list was used instead of the live document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Unreachable(String),
    Status(u16),
    ContentType(Option<String>),
    Malformed(String),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Unreachable(e) => write!(f, "unreachable: {}", e),
            FallbackReason::Status(code) => write!(f, "status {}", code),
            FallbackReason::ContentType(Some(ct)) => write!(f, "content type {}", ct),
            FallbackReason::ContentType(None) => write!(f, "no content type"),
            FallbackReason::Malformed(e) => write!(f, "malformed document: {}", e),
        }
    }
}

/// The project list plus which path produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Live(Vec<Project>),
    Fallback {
        projects: Vec<Project>,
        reason: FallbackReason,
    },
}

impl Resolved {
    pub fn projects(&self) -> &[Project] {
        match self {
            Resolved::Live(p) => p,
            Resolved::Fallback { projects, .. } => projects,
        }
    }

    pub fn into_projects(self) -> Vec<Project> {
        match self {
            Resolved::Live(p) => p,
            Resolved::Fallback { projects, .. } => projects,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Resolved::Live(_))
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Resolved::Live(_) => SourceKind::Live,
            Resolved::Fallback { .. } => SourceKind::Fallback,
        }
    }

    pub(crate) fn fallback(reason: FallbackReason) -> Self {
        Resolved::Fallback {
            projects: default_projects(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Live,
    Fallback,
}

/// Where the project document lives: `site_url` joined with `projects_source`,
/// or `site_root/projects_source` when no base URL is configured.
pub fn source_location(settings: &Settings) -> Result<String, String> {
    let relative = settings.get_or("projects_source", "projects.json");
    let site_url = settings.get_or("site_url", "");
    if site_url.is_empty() {
        let root = settings.get_or("site_root", ".");
        return Ok(Path::new(&root).join(relative).to_string_lossy().into_owned());
    }
    let base = url::Url::parse(&site_url).map_err(|e| format!("Invalid site_url: {}", e))?;
    let joined = base
        .join(&relative)
        .map_err(|e| format!("Invalid projects_source: {}", e))?;
    Ok(joined.to_string())
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Resolve the project list for the configured location.
pub fn resolve(settings: &Settings) -> Resolved {
    let location = match source_location(settings) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("Using fallback projects: {}", e);
            return Resolved::fallback(FallbackReason::Unreachable(e));
        }
    };

    if is_remote(&location) {
        let secs = settings.get_i64("fetch_timeout_secs").max(1) as u64;
        match HttpTransport::new(Duration::from_secs(secs)) {
            Ok(transport) => resolve_with(&transport, &location),
            Err(e) => {
                log::warn!("Using fallback projects: {}", e);
                Resolved::fallback(FallbackReason::Unreachable(e))
            }
        }
    } else {
        resolve_with(&FileTransport, &location)
    }
}

/// Fetch and check the document. Any failure yields the embedded list.
pub fn resolve_with(transport: &dyn Transport, location: &str) -> Resolved {
    match fetch_projects(transport, location) {
        Ok(projects) => {
            log::info!("Loaded {} projects from {}", projects.len(), location);
            Resolved::Live(projects)
        }
        Err(reason) => {
            log::warn!("Using fallback projects for {}: {}", location, reason);
            Resolved::fallback(reason)
        }
    }
}

fn fetch_projects(
    transport: &dyn Transport,
    location: &str,
) -> Result<Vec<Project>, FallbackReason> {
    let doc = transport
        .get(location)
        .map_err(FallbackReason::Unreachable)?;

    if !(200..300).contains(&doc.status) {
        return Err(FallbackReason::Status(doc.status));
    }

    let is_json = doc
        .content_type
        .as_deref()
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Err(FallbackReason::ContentType(doc.content_type));
    }

    Project::list_from_json(&doc.body).map_err(FallbackReason::Malformed)
}
