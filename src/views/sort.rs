use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Key used to order the task list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Chronological by due date.
    #[default]
    DueDate,
    /// High priority first.
    Priority,
    /// Alphabetical by title.
    Title,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dueDate" | "due-date" | "due" => Some(Self::DueDate),
            "priority" => Some(Self::Priority),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::DueDate => a.due_date.cmp(&b.due_date),
            Self::Priority => a.priority.rank().cmp(&b.priority.rank()),
            Self::Title => compare_titles(&a.title, &b.title),
        }
    }
}

/// Stable in-place sort. Tasks with equal keys keep their relative order.
pub fn sort_tasks(tasks: &mut [&Task], key: SortKey) {
    tasks.sort_by(|a, b| key.compare(a, b));
}

/// Collect and sort tasks by `key`.
pub fn sorted<'a, I>(tasks: I, key: SortKey) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut out: Vec<&Task> = tasks.into_iter().collect();
    sort_tasks(&mut out, key);
    out
}

thread_local! {
    static TITLE_COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("en").into(), CollatorOptions::new()).ok();
}

/// Dictionary-style title comparison using Unicode collation, so accented
/// letters sort next to their base letter. Titles differing only in case put
/// the lowercase form first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_titles_ignores_case() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_compare_titles_lowercase_first_on_tie() {
        assert_eq!(compare_titles("essay", "Essay"), Ordering::Less);
        assert_eq!(compare_titles("Essay", "Essay"), Ordering::Equal);
    }

    #[test]
    fn test_compare_titles_places_accents_with_base_letter() {
        assert_eq!(compare_titles("éclair", "fable"), Ordering::Less);
        assert_eq!(compare_titles("Émile", "zebra"), Ordering::Less);
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(SortKey::from_str("dueDate"), Some(SortKey::DueDate));
        assert_eq!(SortKey::from_str("priority"), Some(SortKey::Priority));
        assert_eq!(SortKey::from_str("random"), None);
    }
}
