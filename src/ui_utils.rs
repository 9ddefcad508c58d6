use ratatui::{
    style::{Style, Stylize},
    widgets::{Block, ListState},
};

/// Creates a ListState with proper bounds checking and scrolling
pub fn create_list_state(selected: usize, scroll: usize, item_count: usize) -> ListState {
    ListState::default()
        .with_selected(Some(selected.min(item_count.saturating_sub(1))))
        .with_offset(scroll)
}

/// Creates a block with conditional focus styling (yellow border when focused)
pub fn focused_block(title: &str, is_focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if is_focused {
        block.border_style(Style::new().yellow())
    } else {
        block
    }
}

/// Auto-scrolls a view to keep the selected item visible
/// Call this after changing selected index to adjust scroll position
pub fn auto_scroll(selected: usize, scroll: &mut usize, window_size: usize) {
    if window_size == 0 {
        return;
    }
    if selected < *scroll {
        *scroll = selected;
    } else if selected >= *scroll + window_size {
        *scroll = selected.saturating_sub(window_size - 1);
    }
}

/// Greedy word wrap. Words longer than `width` are split. Always returns at
/// least one line so empty text still occupies a row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_scroll_follows_selection_down() {
        let mut scroll = 0;
        auto_scroll(12, &mut scroll, 10);
        assert_eq!(scroll, 3);
        auto_scroll(1, &mut scroll, 10);
        assert_eq!(scroll, 1);
    }

    #[test]
    fn test_create_list_state_clamps_selection() {
        let state = create_list_state(9, 0, 3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            ["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty_is_one_line() {
        assert_eq!(wrap_text("", 10), [""]);
    }
}
