//! Command handlers - business logic for processing UI events

use tracing::{debug, info, warn};

use crate::app::AppState;
use crate::config::SettlementMode;
use crate::error::{FormError, SplitError};
use crate::forms::{is_amount_char, parse_amount};
use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::messages::StatusMessage;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        let panel = self.active_panel.next(self.show_add_friend, self.has_selection());
        self.focus_panel(panel);
    }

    pub fn prev_panel(&mut self) {
        let panel = self.active_panel.prev(self.show_add_friend, self.has_selection());
        self.focus_panel(panel);
    }

    fn focus_panel(&mut self, panel: Panel) {
        self.input_mode = InputMode::Normal;
        self.active_panel = panel;
        self.active_field = panel.fields().first().copied();
    }

    pub fn next_field(&mut self) {
        self.step_field(1);
    }

    pub fn prev_field(&mut self) {
        let len = self.active_panel.fields().len();
        self.step_field(len.saturating_sub(1));
    }

    fn step_field(&mut self, step: usize) {
        let fields = self.active_panel.fields();
        if fields.is_empty() {
            return;
        }
        let pos = self
            .active_field
            .and_then(|f| fields.iter().position(|x| *x == f))
            .unwrap_or(0);
        let field = fields[(pos + step) % fields.len()];
        self.active_field = Some(field);

        if self.input_mode == InputMode::Editing {
            if field.is_text() {
                self.cursor_position = self.current_input().len();
            } else {
                self.input_mode = InputMode::Normal;
            }
        }
    }

    // ========================
    // Friend list
    // ========================

    pub fn next_friend(&mut self) {
        let len = self.registry.len();
        if len > 0 {
            self.friend_cursor = (self.friend_cursor + 1) % len;
        }
    }

    pub fn prev_friend(&mut self) {
        let len = self.registry.len();
        if len > 0 {
            self.friend_cursor = self.friend_cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Select the friend under the cursor. Re-selecting keeps the selection.
    pub fn select_friend(&mut self) {
        let Some(friend) = self.registry.friends().get(self.friend_cursor) else {
            return;
        };
        let id = friend.id.clone();
        let name = friend.name.clone();
        let changed = !self.registry.is_selected(&id);

        if let Err(e) = self.registry.select(&id) {
            warn!(error = %e, "friend under cursor not found");
            return;
        }
        if changed {
            self.reset_split();
            info!(friend = %id, name = %name, "selected friend");
        }
    }

    pub fn clear_selection(&mut self) {
        if !self.has_selection() {
            return;
        }
        self.registry.clear_selection();
        self.reset_split();
        if self.active_panel == Panel::SplitBill {
            self.focus_panel(Panel::Friends);
        }
        debug!("selection cleared");
    }

    fn reset_split(&mut self) {
        self.split.reset();
        self.bill_input.clear();
        self.expense_input.clear();
    }

    // ========================
    // Add Friend form
    // ========================

    /// Show or hide the Add Friend form. Hiding discards the draft.
    pub fn toggle_add_friend(&mut self) {
        self.show_add_friend = !self.show_add_friend;
        if self.show_add_friend {
            self.focus_panel(Panel::AddFriend);
        } else {
            self.intake.reset();
            if self.active_panel == Panel::AddFriend {
                self.focus_panel(Panel::Friends);
            }
        }
    }

    pub fn submit_intake(&mut self) {
        let name = self.intake.name.clone();
        match self.intake.submit(&mut self.registry) {
            Ok(id) => {
                info!(friend = %id, name = %name, "added friend");
                self.show_add_friend = false;
                self.focus_panel(Panel::Friends);
                self.friend_cursor = self.registry.len().saturating_sub(1);
                self.status = Some(StatusMessage::info(format!("Added {}", name)));
            }
            Err(e) => {
                debug!(error = %e, "friend intake rejected");
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    // ========================
    // Split Bill form
    // ========================

    pub fn toggle_payer(&mut self) {
        if self.has_selection() {
            self.split.toggle_payer();
        }
    }

    pub fn submit_split(&mut self) {
        self.input_mode = InputMode::Normal;
        match self.settlement_mode {
            SettlementMode::Inert => {
                info!("split submitted with settlement disabled");
                self.status = Some(StatusMessage::info("Split submitted, balances unchanged"));
            }
            SettlementMode::Settle => match self.settle_selected() {
                Ok(summary) => self.status = Some(StatusMessage::info(summary)),
                Err(e) => {
                    debug!(error = %e, "split rejected");
                    self.status = Some(StatusMessage::error(e.to_string()));
                }
            },
        }
    }

    /// Apply the split to the selected friend, then close the form
    fn settle_selected(&mut self) -> Result<String, SplitError> {
        let id = self
            .registry
            .selected_id()
            .cloned()
            .ok_or(FormError::NoSelection)?;
        let delta = self.split.settlement_delta()?;
        let balance = self.registry.settle_balance(&id, delta, self.split.payer())?;
        info!(friend = %id, delta, balance, "settled bill split");

        let summary = self
            .registry
            .get(&id)
            .map(|f| f.standing_text())
            .unwrap_or_default();

        self.registry.clear_selection();
        self.reset_split();
        self.focus_panel(Panel::Friends);
        Ok(summary)
    }

    pub fn submit_form(&mut self) {
        match self.active_panel {
            Panel::AddFriend => {
                self.input_mode = InputMode::Normal;
                self.submit_intake();
            }
            Panel::SplitBill => self.submit_split(),
            Panel::Friends => self.select_friend(),
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_field.is_some_and(|f| f.is_text()) {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let Some(field) = self.active_field else {
            return;
        };
        if field.is_numeric() && !is_amount_char(c) {
            return;
        }
        let mut candidate = self.current_input().to_string();
        let cursor_pos = self.cursor_position.min(candidate.len());
        candidate.insert(cursor_pos, c);
        if self.apply_field_text(field, candidate) {
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        let Some(field) = self.active_field else {
            return;
        };
        if self.cursor_position == 0 {
            return;
        }
        let mut candidate = self.current_input().to_string();
        let cursor_pos = self.cursor_position.min(candidate.len());
        let prev_pos = candidate[..cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        candidate.remove(prev_pos);
        if self.apply_field_text(field, candidate) {
            self.cursor_position = prev_pos;
        }
    }

    /// Route edited text to its draft. Returns false if the edit was rejected.
    fn apply_field_text(&mut self, field: FormField, text: String) -> bool {
        match field {
            FormField::Name => self.intake.update_name(text),
            FormField::Image => self.intake.update_image(text),
            FormField::BillValue => {
                self.split.set_bill_total(parse_amount(&text));
                self.bill_input = text;
            }
            FormField::YourExpense => {
                if let Err(e) = self.split.set_user_expense(parse_amount(&text)) {
                    debug!(error = %e, input = %text, "expense edit rejected");
                    self.status = Some(StatusMessage::error(e.to_string()));
                    return false;
                }
                self.expense_input = text;
            }
            FormField::WhoPaying => return false,
        }
        true
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
