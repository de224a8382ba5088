use crate::models::{AcademicResource, ResourceCategory};

use super::contains_folded;

/// Resources in `category` (all when `None`) whose title, description or any
/// tag contains `query`, ignoring case. An empty query matches everything.
pub fn filter_resources<'a>(
    resources: &'a [AcademicResource],
    category: Option<ResourceCategory>,
    query: &str,
) -> Vec<&'a AcademicResource> {
    let needle = query.trim().to_lowercase();

    resources
        .iter()
        .filter(|r| category.is_none() || category == Some(r.category))
        .filter(|r| {
            contains_folded(&r.title, &needle)
                || contains_folded(&r.description, &needle)
                || r.tags.iter().any(|tag| contains_folded(tag, &needle))
        })
        .collect()
}
