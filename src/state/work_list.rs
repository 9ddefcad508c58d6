//! Work list page state.
//!
//! Owns the category filter, the filtered and ordered view of the catalog, and
//! the horizontal slide offset of the card carousel.

use std::cmp::Ordering;

use crate::data::{Catalog, Category, WorkItem};

/// Minimum horizontal travel, in pixels, before a drag counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Cards shown side by side on a wide viewport.
pub const DEFAULT_VISIBLE_CARDS: usize = 3;

/// Direction a swipe gesture resolves to.
///
/// A right-to-left drag moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
    None,
}

/// Interprets a horizontal drag using [`SWIPE_THRESHOLD`].
pub fn interpret_swipe(start_x: f64, end_x: f64) -> Swipe {
    interpret_swipe_with(start_x, end_x, SWIPE_THRESHOLD)
}

/// Interprets a horizontal drag against a custom threshold.
pub fn interpret_swipe_with(start_x: f64, end_x: f64, threshold: f64) -> Swipe {
    let distance = start_x - end_x;
    if distance > threshold {
        Swipe::Next
    } else if distance < -threshold {
        Swipe::Prev
    } else {
        Swipe::None
    }
}

fn fold_char(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Collation-style title comparison: case and common Latin accents are
/// ignored on the first pass, the raw strings break ties.
///
/// Only the accented Latin-1 letters fold. Ligatures and other letters such
/// as `ß`, `œ` and `ł` compare by code point.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let key = |s: &str| {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(fold_char)
            .collect::<String>()
    };
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

fn compare_works(a: &WorkItem, b: &WorkItem) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_titles(&a.title, &b.title),
    }
}

/// Catalog positions of the items matching `selected`, in display order.
///
/// `slice::sort_by` is stable, so equal `order` values keep catalog order.
pub fn derive_indices(works: &[WorkItem], selected: Option<&str>) -> Vec<usize> {
    let mut indices: Vec<usize> = works
        .iter()
        .enumerate()
        .filter(|(_, w)| selected.map_or(true, |slug| w.in_category(slug)))
        .map(|(i, _)| i)
        .collect();
    indices.sort_by(|&a, &b| compare_works(&works[a], &works[b]));
    indices
}

/// Filters the catalog by category slug (`None` keeps everything) and orders
/// the result: items with `order` first ascending, then the rest by title.
pub fn derive_list<'a>(works: &'a [WorkItem], selected: Option<&str>) -> Vec<&'a WorkItem> {
    derive_indices(works, selected)
        .into_iter()
        .map(|i| &works[i])
        .collect()
}

/// Controller behind the work carousel.
#[derive(Debug, Clone)]
pub struct WorkListController {
    works: Vec<WorkItem>,
    categories: Vec<Category>,
    selected_category: Option<String>,
    derived: Vec<usize>,
    current_slide: usize,
    visible_count: usize,
    revision: u64,
}

impl WorkListController {
    /// Creates a controller showing every item from the first slide.
    pub fn new(works: Vec<WorkItem>, categories: Vec<Category>, visible_count: usize) -> Self {
        let derived = derive_indices(&works, None);
        Self {
            works,
            categories,
            selected_category: None,
            derived,
            current_slide: 0,
            visible_count: visible_count.max(1),
            revision: 0,
        }
    }

    pub fn from_catalog(catalog: &Catalog, visible_count: usize) -> Self {
        Self::new(
            catalog.works.clone(),
            catalog.categories.clone(),
            visible_count,
        )
    }

    /// Looks up any item by slug, ignoring the filter.
    pub fn work(&self, slug: &str) -> Option<&WorkItem> {
        self.works.iter().find(|w| w.id == slug)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Changes the slide width, keeping the filter and clamping the slide.
    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count.max(1);
        self.go_to_slide(self.current_slide as i64);
    }

    /// Incremented every time the derived list is replaced by a different
    /// filter, so renderers can replay their entrance transition.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects a category (`None` = all) and rewinds to the first slide.
    ///
    /// An unknown slug simply yields an empty list.
    pub fn set_category(&mut self, slug: Option<&str>) {
        if self.selected_category.as_deref() != slug {
            self.selected_category = slug.map(str::to_owned);
            self.derived = derive_indices(&self.works, slug);
            self.revision += 1;
            tracing::debug!(
                category = slug.unwrap_or("all"),
                items = self.derived.len(),
                "work filter changed"
            );
        }
        self.current_slide = 0;
    }

    /// Cycles All → first category → … → last category → All.
    pub fn select_next_category(&mut self) {
        let next = match self.selected_position() {
            None => self.categories.first(),
            Some(i) => self.categories.get(i + 1),
        }
        .map(|c| c.slug.clone());
        self.set_category(next.as_deref());
    }

    /// Reverse of [`select_next_category`](Self::select_next_category).
    pub fn select_prev_category(&mut self) {
        let prev = match self.selected_position() {
            None => self.categories.last(),
            Some(0) => None,
            Some(i) => self.categories.get(i - 1),
        }
        .map(|c| c.slug.clone());
        self.set_category(prev.as_deref());
    }

    fn selected_position(&self) -> Option<usize> {
        let slug = self.selected_category.as_deref()?;
        self.categories.iter().position(|c| c.slug == slug)
    }

    /// The filtered, ordered items.
    pub fn derived_list(&self) -> Vec<&WorkItem> {
        self.derived.iter().map(|&i| &self.works[i]).collect()
    }

    pub fn len(&self) -> usize {
        self.derived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.derived.is_empty()
    }

    /// Items on the current slide.
    pub fn visible(&self) -> Vec<&WorkItem> {
        self.derived
            .iter()
            .skip(self.current_slide)
            .take(self.visible_count)
            .map(|&i| &self.works[i])
            .collect()
    }

    pub fn max_slide(&self) -> usize {
        self.derived.len().saturating_sub(self.visible_count)
    }

    /// Moves to `index`, clamped into `[0, max_slide]`.
    pub fn go_to_slide(&mut self, index: i64) {
        let max = self.max_slide();
        self.current_slide = if index <= 0 {
            0
        } else {
            usize::try_from(index).map_or(max, |i| i.min(max))
        };
    }

    pub fn next_slide(&mut self) {
        self.go_to_slide(self.current_slide as i64 + 1);
    }

    pub fn prev_slide(&mut self) {
        self.go_to_slide(self.current_slide as i64 - 1);
    }

    /// Applies a resolved swipe. Returns `true` if the slide moved.
    pub fn apply_swipe(&mut self, swipe: Swipe) -> bool {
        let before = self.current_slide;
        match swipe {
            Swipe::Next => self.next_slide(),
            Swipe::Prev => self.prev_slide(),
            Swipe::None => {}
        }
        before != self.current_slide
    }
}

/// Tracks a press/release pair and turns it into a [`Swipe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn press(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Resolves the gesture started by the last [`press`](Self::press).
    /// A release without a press is ignored.
    pub fn release(&mut self, x: f64, threshold: f64) -> Swipe {
        match self.start_x.take() {
            Some(start) => interpret_swipe_with(start, x, threshold),
            None => Swipe::None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cat(slug: &str) -> Category {
        Category {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
        }
    }

    fn work(id: &str, order: Option<i64>, cats: &[&str]) -> WorkItem {
        WorkItem {
            id: id.to_string(),
            title: id.to_string(),
            order,
            categories: cats.iter().map(|c| cat(c)).collect(),
            ..Default::default()
        }
    }

    fn scenario_catalog() -> Vec<WorkItem> {
        vec![
            work("a", Some(2), &["x"]),
            work("b", Some(1), &["x", "y"]),
            work("c", None, &["y"]),
        ]
    }

    fn ids(list: &[&WorkItem]) -> Vec<String> {
        list.iter().map(|w| w.id.clone()).collect()
    }

    fn controller_with(n: usize, visible: usize) -> WorkListController {
        let works = (0..n)
            .map(|i| work(&format!("w{i:02}"), Some(i as i64), &["x"]))
            .collect();
        WorkListController::new(works, vec![cat("x")], visible)
    }

    #[test]
    fn test_filter_by_category_orders_by_order_then_title() {
        let catalog = scenario_catalog();
        assert_eq!(ids(&derive_list(&catalog, Some("y"))), ["b", "c"]);
    }

    #[test]
    fn test_all_items_order_bearing_first() {
        let catalog = scenario_catalog();
        assert_eq!(ids(&derive_list(&catalog, None)), ["b", "a", "c"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = scenario_catalog();
        assert!(derive_list(&catalog, Some("nope")).is_empty());
    }

    #[test]
    fn test_orderless_items_sort_by_title_ignoring_case() {
        let mut catalog = vec![
            work("3", None, &[]),
            work("1", None, &[]),
            work("2", None, &[]),
        ];
        catalog[0].title = "Zebra".into();
        catalog[1].title = "apple".into();
        catalog[2].title = "Éclair".into();
        let titles: Vec<_> = derive_list(&catalog, None)
            .iter()
            .map(|w| w.title.as_str())
            .collect();
        assert_eq!(titles, ["apple", "Éclair", "Zebra"]);
    }

    #[test]
    fn test_equal_order_keeps_catalog_position() {
        let catalog = vec![
            work("z", Some(1), &[]),
            work("a", Some(1), &[]),
            work("m", Some(0), &[]),
        ];
        assert_eq!(ids(&derive_list(&catalog, None)), ["m", "z", "a"]);
    }

    #[test]
    fn test_go_to_slide_clamps_high_and_low() {
        let mut c = controller_with(10, 3);
        c.go_to_slide(999);
        assert_eq!(c.current_slide(), 7);
        c.go_to_slide(-5);
        assert_eq!(c.current_slide(), 0);
        c.go_to_slide(i64::MAX);
        assert_eq!(c.current_slide(), 7);
    }

    #[test]
    fn test_next_and_prev_slide_stop_at_edges() {
        let mut c = controller_with(4, 3);
        c.prev_slide();
        assert_eq!(c.current_slide(), 0);
        c.next_slide();
        assert_eq!(c.current_slide(), 1);
        c.next_slide();
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn test_fewer_items_than_visible_never_slides() {
        let mut c = controller_with(2, 3);
        assert_eq!(c.max_slide(), 0);
        c.next_slide();
        assert_eq!(c.current_slide(), 0);
        assert_eq!(c.visible().len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let mut c = WorkListController::new(Vec::new(), Vec::new(), 3);
        assert!(c.is_empty());
        assert_eq!(c.max_slide(), 0);
        c.go_to_slide(3);
        assert_eq!(c.current_slide(), 0);
        assert!(c.visible().is_empty());
    }

    #[test]
    fn test_set_category_resets_slide() {
        let mut c = controller_with(10, 3);
        c.go_to_slide(5);
        c.set_category(Some("x"));
        assert_eq!(c.current_slide(), 0);

        c.go_to_slide(4);
        c.set_category(Some("x"));
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn test_revision_only_moves_on_real_change() {
        let mut c = controller_with(5, 3);
        assert_eq!(c.revision(), 0);
        c.set_category(None);
        assert_eq!(c.revision(), 0);
        c.set_category(Some("x"));
        assert_eq!(c.revision(), 1);
        c.set_category(Some("x"));
        assert_eq!(c.revision(), 1);
        c.set_category(Some("missing"));
        assert_eq!(c.revision(), 2);
        assert!(c.is_empty());
    }

    #[test]
    fn test_visible_window_follows_slide() {
        let mut c = controller_with(5, 3);
        c.go_to_slide(2);
        let visible: Vec<_> = c.visible().iter().map(|w| w.id.clone()).collect();
        assert_eq!(visible, ["w02", "w03", "w04"]);
    }

    #[test]
    fn test_category_cycle_wraps_through_all() {
        let works = scenario_catalog();
        let mut c = WorkListController::new(works, vec![cat("x"), cat("y")], 3);

        c.select_next_category();
        assert_eq!(c.selected_category(), Some("x"));
        c.select_next_category();
        assert_eq!(c.selected_category(), Some("y"));
        c.select_next_category();
        assert_eq!(c.selected_category(), None);

        c.select_prev_category();
        assert_eq!(c.selected_category(), Some("y"));
        c.select_prev_category();
        c.select_prev_category();
        assert_eq!(c.selected_category(), None);
    }

    #[test]
    fn test_swipe_thresholds() {
        assert_eq!(interpret_swipe(100.0, 0.0), Swipe::Next);
        assert_eq!(interpret_swipe(0.0, 100.0), Swipe::Prev);
        assert_eq!(interpret_swipe(10.0, 0.0), Swipe::None);
        assert_eq!(interpret_swipe(50.0, 0.0), Swipe::None);
        assert_eq!(interpret_swipe_with(0.0, 11.0, 10.0), Swipe::Prev);
    }

    #[test]
    fn test_apply_swipe_moves_slide() {
        let mut c = controller_with(6, 3);
        assert!(c.apply_swipe(Swipe::Next));
        assert_eq!(c.current_slide(), 1);
        assert!(!c.apply_swipe(Swipe::None));
        assert!(c.apply_swipe(Swipe::Prev));
        assert!(!c.apply_swipe(Swipe::Prev));
    }

    #[test]
    fn test_swipe_tracker_needs_press() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.release(0.0, SWIPE_THRESHOLD), Swipe::None);

        tracker.press(200.0);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.release(100.0, SWIPE_THRESHOLD), Swipe::Next);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_set_visible_count_keeps_filter_and_clamps_slide() {
        let mut c = controller_with(6, 2);
        c.set_category(Some("x"));
        c.go_to_slide(4);
        c.set_visible_count(4);
        assert_eq!(c.selected_category(), Some("x"));
        assert_eq!(c.current_slide(), 2);
        c.set_visible_count(0);
        assert_eq!(c.visible_count(), 1);
    }

    #[test]
    fn test_work_lookup_ignores_filter() {
        let mut c = WorkListController::new(scenario_catalog(), vec![cat("x"), cat("y")], 3);
        c.set_category(Some("y"));
        assert_eq!(c.work("a").map(|w| w.id.as_str()), Some("a"));
        assert!(c.work("missing").is_none());
    }

    #[test]
    fn test_unfolded_letters_compare_by_code_point() {
        assert_eq!(compare_titles("Éclair", "eclair"), Ordering::Greater);
        assert_eq!(compare_titles("ß", "z"), Ordering::Greater);
        assert_eq!(compare_titles("Œuvre", "Zebra"), Ordering::Greater);
        assert_eq!(compare_titles("ß", "ß"), Ordering::Equal);
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<WorkItem>> {
        let item = (
            proptest::option::of(0i64..5),
            "[a-dA-D]{1,3}",
            proptest::collection::vec(prop_oneof![Just("x"), Just("y"), Just("z")], 0..3),
        );
        proptest::collection::vec(item, 0..20).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (order, title, cats))| WorkItem {
                    id: format!("item-{i}"),
                    title,
                    order,
                    categories: cats.into_iter().map(cat).collect(),
                    ..Default::default()
                })
                .collect()
        })
    }

    fn arb_selection() -> impl Strategy<Value = Option<&'static str>> {
        proptest::option::of(prop_oneof![Just("x"), Just("y"), Just("z"), Just("w")])
    }

    proptest! {
        #[test]
        fn prop_filter_keeps_exactly_matching_items(catalog in arb_catalog(), sel in arb_selection()) {
            let derived = derive_list(&catalog, sel);
            let mut got: Vec<_> = derived.iter().map(|w| w.id.clone()).collect();
            let mut want: Vec<_> = catalog
                .iter()
                .filter(|w| sel.map_or(true, |s| w.in_category(s)))
                .map(|w| w.id.clone())
                .collect();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
        }

        #[test]
        fn prop_derive_is_deterministic(catalog in arb_catalog(), sel in arb_selection()) {
            prop_assert_eq!(derive_indices(&catalog, sel), derive_indices(&catalog, sel));
        }

        #[test]
        fn prop_sort_contract(catalog in arb_catalog(), sel in arb_selection()) {
            let derived = derive_list(&catalog, sel);
            for pair in derived.windows(2) {
                match (pair[0].order, pair[1].order) {
                    (Some(a), Some(b)) => prop_assert!(a <= b),
                    (None, Some(_)) => prop_assert!(false, "orderless item before ordered item"),
                    (Some(_), None) => {}
                    (None, None) => prop_assert_ne!(
                        compare_titles(&pair[0].title, &pair[1].title),
                        Ordering::Greater
                    ),
                }
            }
        }

        #[test]
        fn prop_slide_always_clamped(n in 0usize..30, v in 1usize..6, k in any::<i64>()) {
            let mut c = controller_with(n, v);
            c.go_to_slide(k);
            prop_assert!(c.current_slide() <= n.saturating_sub(v));
        }

        #[test]
        fn prop_set_category_resets_slide(k in 0i64..30, sel in arb_selection()) {
            let mut c = controller_with(20, 3);
            c.go_to_slide(k);
            c.set_category(sel);
            prop_assert_eq!(c.current_slide(), 0);
        }
    }
}
