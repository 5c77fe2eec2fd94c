//! Project card grid.
//! Full-replace rendering: every pass builds fresh cards with fresh ids.

use crate::models::project::Project;
use crate::models::settings::Settings;
use crate::render::{html_escape, url_attr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Live,
    Code,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Live => "Live",
            ActionKind::Code => "Code",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ActionKind::Live => "btn",
            ActionKind::Code => "btn ghost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub kind: ActionKind,
    pub href: String,
}

/// Display model for one card. Absent fields stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image: Option<String>,
    pub title: String,
    pub description: String,
    pub stack_line: String,
    pub badges: Vec<String>,
    pub actions: Vec<CardAction>,
}

impl CardView {
    pub fn from_project(project: &Project, separator: &str) -> Self {
        let mut actions = Vec::new();
        if !project.demo.is_empty() {
            actions.push(CardAction {
                kind: ActionKind::Live,
                href: project.demo.clone(),
            });
        }
        if !project.code.is_empty() {
            actions.push(CardAction {
                kind: ActionKind::Code,
                href: project.code.clone(),
            });
        }

        CardView {
            image: Some(project.image.clone()).filter(|s| !s.trim().is_empty()),
            title: project.title.clone(),
            description: project.description.clone(),
            stack_line: project.stack.join(separator),
            badges: project.highlights.clone(),
            actions,
        }
    }

    pub fn render(&self, card_id: &str) -> String {
        let mut html = format!(
            r#"<article class="card will-animate" data-card="{}">"#,
            html_escape(card_id)
        );

        if let Some(image) = &self.image {
            let alt = if self.title.is_empty() {
                "Project"
            } else {
                self.title.as_str()
            };
            html.push_str(&format!(
                r#"<img src="{}" alt="{} preview" loading="lazy">"#,
                url_attr(image),
                html_escape(alt)
            ));
        }

        html.push_str(&format!("<h3>{}</h3>", html_escape(&self.title)));
        html.push_str(&format!("<p>{}</p>", html_escape(&self.description)));
        html.push_str(&format!(
            r#"<p class="stack">{}</p>"#,
            html_escape(&self.stack_line)
        ));

        html.push_str(r#"<div class="badges">"#);
        for badge in &self.badges {
            html.push_str(&format!("<span>{}</span>", html_escape(badge)));
        }
        html.push_str("</div>");

        html.push_str(r#"<div class="card-actions">"#);
        for action in &self.actions {
            html.push_str(&format!(
                r#"<a class="{}" href="{}" target="_blank" rel="noopener">{}</a>"#,
                action.kind.class(),
                url_attr(&action.href),
                action.kind.label()
            ));
        }
        html.push_str("</div>");

        html.push_str("</article>");
        html
    }
}

/// A rendered card and its reveal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub view: CardView,
    pub revealed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedGrid {
    pub html: String,
    pub cards: Vec<Card>,
}

impl RenderedGrid {
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_mut(&mut self, id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.view.title.as_str()).collect()
    }
}

pub fn card_id(pass: u64, index: usize) -> String {
    format!("card-{}-{}", pass, index)
}

/// Render one card per project, in list order. An empty list is an empty grid.
pub fn render_grid(projects: &[&Project], settings: &Settings, pass: u64) -> RenderedGrid {
    let separator = settings.get_or("stack_separator", " • ");
    let mut grid = RenderedGrid::default();

    for (index, project) in projects.iter().enumerate() {
        let id = card_id(pass, index);
        let view = CardView::from_project(project, &separator);
        grid.html.push_str(&view.render(&id));
        grid.html.push('\n');
        grid.cards.push(Card {
            id,
            view,
            revealed: false,
        });
    }

    grid
}
