//! Tag chips: vocabulary derived from the project stacks plus the active-tag set.

use std::collections::BTreeSet;

use crate::models::project::Project;
use crate::render::html_escape;

pub const ALL_LABEL: &str = "All";

/// What a chip click refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipTarget {
    All,
    Tag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    /// `None` for the "All" chip.
    pub tag: Option<String>,
    pub active: bool,
}

/// Every distinct stack tag, in natural sort order.
pub fn derive_tags(projects: &[Project]) -> BTreeSet<String> {
    projects
        .iter()
        .flat_map(|p| p.stack.iter().cloned())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    vocabulary: BTreeSet<String>,
    active: BTreeSet<String>,
}

impl TagFilter {
    pub fn from_projects(projects: &[Project]) -> Self {
        TagFilter {
            vocabulary: derive_tags(projects),
            active: BTreeSet::new(),
        }
    }

    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    /// Empty means "show all".
    pub fn active(&self) -> &BTreeSet<String> {
        &self.active
    }

    pub fn all_selected(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Flip one tag's membership. Returns whether it is now active.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.active.remove(tag) {
            false
        } else {
            self.active.insert(tag.to_string());
            true
        }
    }

    pub fn click(&mut self, target: &ChipTarget) {
        match target {
            ChipTarget::All => self.clear(),
            ChipTarget::Tag(tag) => {
                self.toggle(tag);
            }
        }
    }

    /// "All" first, then each tag in vocabulary order.
    pub fn chips(&self) -> Vec<Chip> {
        let mut chips = Vec::with_capacity(self.vocabulary.len() + 1);
        chips.push(Chip {
            label: ALL_LABEL.to_string(),
            tag: None,
            active: self.all_selected(),
        });
        for tag in &self.vocabulary {
            chips.push(Chip {
                label: tag.clone(),
                tag: Some(tag.clone()),
                active: self.active.contains(tag),
            });
        }
        chips
    }

    pub fn render_chips(&self) -> String {
        let mut html = String::from(r#"<div class="tag-filter" role="toolbar">"#);
        // Position keeps ids unique when slugs collide ("C", "C#", "C++").
        for (position, chip) in self.chips().into_iter().enumerate() {
            let (id, data_tag) = match &chip.tag {
                Some(tag) => (
                    format!("tag-{}-{}", position, slug::slugify(tag)),
                    html_escape(tag),
                ),
                None => ("tag-all".to_string(), String::new()),
            };
            html.push_str(&format!(
                r#"<button type="button" id="{id}" class="chip{active}" data-tag="{data_tag}" aria-pressed="{pressed}">{label}</button>"#,
                id = id,
                active = if chip.active { " active" } else { "" },
                data_tag = data_tag,
                pressed = chip.active,
                label = html_escape(&chip.label),
            ));
        }
        html.push_str("</div>");
        html
    }
}
