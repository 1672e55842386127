use ratatui::{prelude::*, widgets::*};

use crate::messages::ui_events::InputMode;
use crate::models::{format_amount, Standing};

/// Border style for a focusable widget
pub fn focus_style(is_focused: bool, input_mode: InputMode) -> Style {
    if is_focused && input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Renders a labelled single-line input field
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    input_mode: InputMode,
) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(is_focused, input_mode))
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders a read-only field, greyed out like a disabled input
pub fn render_readonly<'a>(content: String, title: &'a str) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    Paragraph::new(content)
        .style(Style::default().fg(Color::Gray))
        .block(block)
}

/// Balance color: red when the user owes, green when owed
pub fn standing_color(standing: Standing) -> Color {
    match standing {
        Standing::Owes => Color::Red,
        Standing::Owed => Color::Green,
        Standing::Even => Color::Gray,
    }
}

/// Text for an optional amount field; unset renders empty
pub fn amount_text(amount: Option<f64>) -> String {
    amount.map(format_amount).unwrap_or_default()
}

/// Button label shown on a friend row
pub fn select_label(is_selected: bool) -> &'static str {
    if is_selected {
        "Close"
    } else {
        "Select"
    }
}

/// Button label for the Add Friend toggle
pub fn add_friend_label(show_add_friend: bool) -> &'static str {
    if show_add_friend {
        "Close"
    } else {
        "Add Friend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(None), "");
        assert_eq!(amount_text(Some(70.0)), "70");
        assert_eq!(amount_text(Some(-2.5)), "-2.50");
    }

    #[test]
    fn test_labels() {
        assert_eq!(select_label(true), "Close");
        assert_eq!(add_friend_label(false), "Add Friend");
    }
}
