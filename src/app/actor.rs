//! App actor - message loop processing UI events

use tokio::sync::mpsc;
use tracing::info;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that applies UI events to the session state
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor { state, render_tx }
    }

    /// Run the actor message loop. Each event runs to completion before the next.
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                info!("quit requested");
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        // Feedback only lives until the next key press
        self.state.status = None;

        match event {
            // Panel navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),

            // Friend list
            UiEvent::NextFriend => self.state.next_friend(),
            UiEvent::PrevFriend => self.state.prev_friend(),
            UiEvent::SelectFriend => self.state.select_friend(),
            UiEvent::ClearSelection => self.state.clear_selection(),
            UiEvent::ToggleAddFriend => self.state.toggle_add_friend(),

            // Forms
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::TogglePayer => self.state.toggle_payer(),
            UiEvent::SubmitForm => self.state.submit_form(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_events_produce_render_states() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(AppState::default(), render_tx);
        let handle = tokio::spawn(actor.run(ui_rx));

        for event in [
            UiEvent::ToggleAddFriend,
            UiEvent::StartEditing,
            UiEvent::CharInput('D'),
            UiEvent::CharInput('a'),
            UiEvent::SubmitForm,
            UiEvent::Quit,
        ] {
            ui_tx.send(event).unwrap();
        }
        handle.await.unwrap();

        let mut last = None;
        while let Ok(state) = render_rx.try_recv() {
            last = Some(state);
        }
        let last = last.unwrap();
        assert_eq!(last.friends.len(), 4);
        assert_eq!(last.friends[3].name, "Da");
        assert!(!last.show_add_friend);
    }

    #[tokio::test]
    async fn test_status_clears_on_next_event() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(AppState::default(), render_tx);
        let handle = tokio::spawn(actor.run(ui_rx));

        // Empty name is rejected, then any key clears the message
        ui_tx.send(UiEvent::ToggleAddFriend).unwrap();
        ui_tx.send(UiEvent::SubmitForm).unwrap();
        ui_tx.send(UiEvent::NextField).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();

        let states: Vec<RenderState> = std::iter::from_fn(|| render_rx.try_recv().ok()).collect();
        // initial + three handled events
        assert_eq!(states.len(), 4);
        assert!(states[2].status.as_ref().is_some_and(|s| s.is_error));
        assert!(states[3].status.is_none());
    }
}
