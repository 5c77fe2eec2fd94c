use std::collections::BTreeSet;

use crate::models::project::Project;

/// Case-insensitive substring match on title, description or any stack tag.
/// An empty query matches everything.
pub fn matches_query(project: &Project, query: &str) -> bool {
    let q = query.to_lowercase();
    if q.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(&q)
        || project.description.to_lowercase().contains(&q)
        || project.stack.iter().any(|t| t.to_lowercase().contains(&q))
}

/// True when no tag is active, or the project carries at least one active tag.
pub fn matches_tags(project: &Project, active: &BTreeSet<String>) -> bool {
    active.is_empty() || project.stack.iter().any(|t| active.contains(t))
}

/// Visible subset of `projects`, in input order.
pub fn filter<'a>(
    projects: &'a [Project],
    query: &str,
    active: &BTreeSet<String>,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| matches_query(p, query) && matches_tags(p, active))
        .collect()
}
