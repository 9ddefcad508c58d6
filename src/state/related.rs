//! Previous/next neighbours shown under a work detail page.

use crate::data::WorkItem;

/// The items before and after the current one in the displayed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelatedWork<'a> {
    pub prev: Option<&'a WorkItem>,
    pub next: Option<&'a WorkItem>,
}

/// Looks up `slug` in `list` and returns its neighbours. Both are `None` when
/// the slug is not in the list.
pub fn related_work<'a>(list: &[&'a WorkItem], slug: &str) -> RelatedWork<'a> {
    let Some(pos) = list.iter().position(|w| w.id == slug) else {
        return RelatedWork::default();
    };
    RelatedWork {
        prev: pos.checked_sub(1).and_then(|i| list.get(i)).copied(),
        next: list.get(pos + 1).copied(),
    }
}
