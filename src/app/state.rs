//! App state - pure data structure with no I/O logic

use crate::config::{Config, SettlementMode};
use crate::forms::{IntakeDraft, SplitDraft};
use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::messages::{RenderState, SplitView, StatusMessage};
use crate::models::seed_friends;
use crate::registry::FriendRegistry;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Session data
    pub registry: FriendRegistry,
    pub settlement_mode: SettlementMode,

    // Friend list
    pub friend_cursor: usize,

    // Add Friend form
    pub show_add_friend: bool,
    pub intake: IntakeDraft,

    // Split Bill form. Field text is kept alongside the parsed draft so
    // partially typed numbers such as "12." stay on screen.
    pub split: SplitDraft,
    pub bill_input: String,
    pub expense_input: String,

    // UI state
    pub active_panel: Panel,
    pub active_field: Option<FormField>,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Popups and feedback
    pub show_help: bool,
    pub status: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let friends = if config.seed_friends { seed_friends() } else { Vec::new() };
        AppState {
            registry: FriendRegistry::new(friends),
            settlement_mode: config.settlement,
            friend_cursor: 0,
            show_add_friend: false,
            intake: IntakeDraft::new(config.avatar_base_url.clone()),
            split: SplitDraft::new(),
            bill_input: String::new(),
            expense_input: String::new(),
            active_panel: Panel::Friends,
            active_field: None,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            show_help: false,
            status: None,
        }
    }

    pub fn has_selection(&self) -> bool {
        self.registry.selected().is_some()
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_field {
            Some(FormField::Name) => &self.intake.name,
            Some(FormField::Image) => &self.intake.image,
            Some(FormField::BillValue) => &self.bill_input,
            Some(FormField::YourExpense) => &self.expense_input,
            Some(FormField::WhoPaying) | None => "",
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let split = self.registry.selected().map(|friend| SplitView {
            friend_name: friend.name.clone(),
            bill_input: self.bill_input.clone(),
            expense_input: self.expense_input.clone(),
            counterpart_expense: self.split.counterpart_expense(),
            payer: self.split.payer(),
        });

        RenderState {
            friends: self.registry.friends().to_vec(),
            selected_id: self.registry.selected_id().cloned(),
            friend_cursor: self.friend_cursor,
            show_add_friend: self.show_add_friend,
            intake_name: self.intake.name.clone(),
            intake_image: self.intake.image.clone(),
            split,
            last_settlement: self.registry.last_settlement().cloned(),
            active_panel: self.active_panel,
            active_field: self.active_field,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            show_help: self.show_help,
            status: self.status.clone(),
        }
    }
}
