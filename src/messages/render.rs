//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::models::{Friend, FriendId, Payer};
use crate::registry::Settlement;

/// One-line feedback shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage { text: text.into(), is_error: true }
    }
}

/// Split form contents for the selected friend
#[derive(Debug, Clone, PartialEq)]
pub struct SplitView {
    pub friend_name: String,
    pub bill_input: String,
    pub expense_input: String,
    pub counterpart_expense: Option<f64>,
    pub payer: Payer,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Friend list
    pub friends: Vec<Friend>,
    pub selected_id: Option<FriendId>,
    pub friend_cursor: usize,

    // Add Friend form
    pub show_add_friend: bool,
    pub intake_name: String,
    pub intake_image: String,

    // Split Bill form, present while a friend is selected
    pub split: Option<SplitView>,
    pub last_settlement: Option<Settlement>,

    // UI state
    pub active_panel: Panel,
    pub active_field: Option<FormField>,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Popups and feedback
    pub show_help: bool,
    pub status: Option<StatusMessage>,
}

impl RenderState {
    pub fn is_selected(&self, friend: &Friend) -> bool {
        self.selected_id.as_ref() == Some(&friend.id)
    }
}
