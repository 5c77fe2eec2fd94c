//! Gallery controller: owns the session state and re-renders after every input.

use crate::designs::gallery::{render_grid, RenderedGrid};
use crate::models::project::Project;
use crate::models::settings::Settings;
use crate::reveal::{RevealAnimation, RevealConfig, RevealObserver};
use crate::search;
use crate::source::{self, FallbackReason, Resolved, SourceKind, Transport};
use crate::tags::{ChipTarget, TagFilter};

/// Session state. The project list is fixed once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    projects: Vec<Project>,
    pub query: String,
    pub tags: TagFilter,
}

impl GalleryState {
    pub fn new(projects: Vec<Project>) -> Self {
        let tags = TagFilter::from_projects(&projects);
        GalleryState {
            projects,
            query: String::new(),
            tags,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn visible(&self) -> Vec<&Project> {
        search::filter(&self.projects, &self.query, self.tags.active())
    }
}

pub struct Gallery {
    state: GalleryState,
    settings: Settings,
    source: SourceKind,
    observer: RevealObserver,
    pass: u64,
    grid: RenderedGrid,
}

impl Gallery {
    /// Resolve the configured source once, then render.
    pub fn load(settings: Settings) -> Self {
        let resolved = source::resolve(&settings);
        Self::from_resolved(resolved, settings)
    }

    pub fn load_with(settings: Settings, transport: &dyn Transport) -> Self {
        let resolved = match source::source_location(&settings) {
            Ok(location) => source::resolve_with(transport, &location),
            Err(e) => {
                log::warn!("Using fallback projects: {}", e);
                Resolved::fallback(FallbackReason::Unreachable(e))
            }
        };
        Self::from_resolved(resolved, settings)
    }

    pub fn from_resolved(resolved: Resolved, settings: Settings) -> Self {
        let source = resolved.kind();
        let observer = RevealObserver::new(RevealConfig::from_settings(&settings));
        let mut gallery = Gallery {
            state: GalleryState::new(resolved.into_projects()),
            settings,
            source,
            observer,
            pass: 0,
            grid: RenderedGrid::default(),
        };
        gallery.render();
        gallery
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn grid(&self) -> &RenderedGrid {
        &self.grid
    }

    pub fn observer(&self) -> &RevealObserver {
        &self.observer
    }

    pub fn visible(&self) -> Vec<&Project> {
        self.state.visible()
    }

    pub fn chips_html(&self) -> String {
        self.state.tags.render_chips()
    }

    pub fn set_query(&mut self, query: &str) -> &RenderedGrid {
        self.state.query = query.to_string();
        self.render()
    }

    pub fn click_chip(&mut self, target: &ChipTarget) -> &RenderedGrid {
        self.state.tags.click(target);
        self.render()
    }

    pub fn toggle_tag(&mut self, tag: &str) -> &RenderedGrid {
        self.click_chip(&ChipTarget::Tag(tag.to_string()))
    }

    pub fn select_all(&mut self) -> &RenderedGrid {
        self.click_chip(&ChipTarget::All)
    }

    /// Replace every card and register the new ones for reveal.
    pub fn render(&mut self) -> &RenderedGrid {
        self.pass += 1;
        self.observer.reset();
        let visible = search::filter(
            &self.state.projects,
            &self.state.query,
            self.state.tags.active(),
        );
        self.grid = render_grid(&visible, &self.settings, self.pass);
        for card in &self.grid.cards {
            self.observer.observe(&card.id);
        }
        log::debug!(
            "Render pass {}: {} of {} projects",
            self.pass,
            self.grid.cards.len(),
            self.state.projects.len()
        );
        &self.grid
    }

    /// Visibility callback for a card of the current pass.
    pub fn on_visibility(&mut self, card_id: &str, ratio: f64) -> Option<RevealAnimation> {
        let animation = self.observer.notify(card_id, ratio)?;
        if let Some(card) = self.grid.card_mut(card_id) {
            card.revealed = true;
        }
        Some(animation)
    }
}
