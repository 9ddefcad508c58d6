//! Blog listing page state.

use chrono::{DateTime, Utc};

use crate::data::BlogPost;

/// Orders posts newest first; undated posts go last in their original order.
pub fn sort_posts(posts: &[BlogPost]) -> Vec<BlogPost> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted
}

/// Long US date, e.g. "April 12, 2024".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// State for the blog view: a date-ordered post list with a cursor.
#[derive(Debug, Clone, Default)]
pub struct BlogState {
    posts: Vec<BlogPost>,
    pub selected_index: usize,
    pub scroll: usize,
}

impl BlogState {
    pub fn new(posts: &[BlogPost]) -> Self {
        Self {
            posts: sort_posts(posts),
            selected_index: 0,
            scroll: 0,
        }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn selected(&self) -> Option<&BlogPost> {
        self.posts.get(self.selected_index)
    }

    /// Returns `true` if the selection changed.
    pub fn navigate_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the selection changed.
    pub fn navigate_down(&mut self) -> bool {
        if self.selected_index < self.posts.len().saturating_sub(1) {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }
}
