//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,

    // Friend list
    NextFriend,
    PrevFriend,
    SelectFriend,
    ClearSelection,
    ToggleAddFriend,

    // Form fields
    NextField,
    PrevField,
    TogglePayer,
    SubmitForm,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable area of the screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Friends,
    AddFriend,
    SplitBill,
}

impl Panel {
    /// Panels currently on screen, in focus order
    pub fn visible(show_add_friend: bool, has_selection: bool) -> Vec<Panel> {
        let mut panels = vec![Panel::Friends];
        if show_add_friend {
            panels.push(Panel::AddFriend);
        }
        if has_selection {
            panels.push(Panel::SplitBill);
        }
        panels
    }

    pub fn next(&self, show_add_friend: bool, has_selection: bool) -> Panel {
        let panels = Panel::visible(show_add_friend, has_selection);
        let pos = panels.iter().position(|p| p == self).unwrap_or(0);
        panels[(pos + 1) % panels.len()]
    }

    pub fn prev(&self, show_add_friend: bool, has_selection: bool) -> Panel {
        let panels = Panel::visible(show_add_friend, has_selection);
        let pos = panels.iter().position(|p| p == self).unwrap_or(0);
        panels[(pos + panels.len() - 1) % panels.len()]
    }

    /// Editable fields of this panel, top to bottom
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Panel::Friends => &[],
            Panel::AddFriend => &[FormField::Name, FormField::Image],
            Panel::SplitBill => &[FormField::BillValue, FormField::YourExpense, FormField::WhoPaying],
        }
    }
}

/// Form field with focus
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Image,
    BillValue,
    YourExpense,
    WhoPaying,
}

impl FormField {
    /// Whether the field is edited as text
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::WhoPaying)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FormField::BillValue | FormField::YourExpense)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    active_field: Option<FormField>,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Editing => handle_editing_keys(key),
        InputMode::Normal => match active_panel {
            Panel::Friends => handle_friend_list_keys(key),
            Panel::AddFriend | Panel::SplitBill => {
                handle_form_keys(key, active_panel, active_field)
            }
        },
    }
}

/// Keys shared by every panel in normal mode
fn handle_global_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('a') => Some(UiEvent::ToggleAddFriend),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::BackTab => Some(UiEvent::PrevPanel),
        _ => None,
    }
}

fn handle_friend_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevFriend),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextFriend),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::SelectFriend),
        KeyCode::Esc => Some(UiEvent::ClearSelection),
        _ => handle_global_keys(key),
    }
}

fn handle_form_keys(
    key: KeyEvent,
    active_panel: Panel,
    active_field: Option<FormField>,
) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::Char('e') | KeyCode::Enter => match active_field {
            Some(FormField::WhoPaying) => Some(UiEvent::TogglePayer),
            Some(_) => Some(UiEvent::StartEditing),
            None => None,
        },
        KeyCode::Char('p') if active_panel == Panel::SplitBill => Some(UiEvent::TogglePayer),
        KeyCode::Char('s') => Some(UiEvent::SubmitForm),
        KeyCode::Esc => match active_panel {
            Panel::AddFriend => Some(UiEvent::ToggleAddFriend),
            _ => Some(UiEvent::ClearSelection),
        },
        _ => handle_global_keys(key),
    }
}

fn handle_editing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Enter => Some(UiEvent::SubmitForm),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_panel_cycle_skips_hidden_panels() {
        assert_eq!(Panel::Friends.next(false, false), Panel::Friends);
        assert_eq!(Panel::Friends.next(false, true), Panel::SplitBill);
        assert_eq!(Panel::Friends.next(true, true), Panel::AddFriend);
        assert_eq!(Panel::SplitBill.next(true, true), Panel::Friends);
        assert_eq!(Panel::Friends.prev(true, true), Panel::SplitBill);
    }

    #[test]
    fn test_friend_list_keys() {
        let ev = |code| key_to_ui_event(press(code), Panel::Friends, None, InputMode::Normal, false);
        assert_eq!(ev(KeyCode::Enter), Some(UiEvent::SelectFriend));
        assert_eq!(ev(KeyCode::Down), Some(UiEvent::NextFriend));
        assert_eq!(ev(KeyCode::Esc), Some(UiEvent::ClearSelection));
        assert_eq!(ev(KeyCode::Char('a')), Some(UiEvent::ToggleAddFriend));
        assert_eq!(ev(KeyCode::Char('q')), Some(UiEvent::Quit));
    }

    #[test]
    fn test_enter_on_payer_toggles() {
        let ev = key_to_ui_event(
            press(KeyCode::Enter),
            Panel::SplitBill,
            Some(FormField::WhoPaying),
            InputMode::Normal,
            false,
        );
        assert_eq!(ev, Some(UiEvent::TogglePayer));
    }

    #[test]
    fn test_enter_while_editing_submits() {
        let ev = key_to_ui_event(
            press(KeyCode::Enter),
            Panel::AddFriend,
            Some(FormField::Name),
            InputMode::Editing,
            false,
        );
        assert_eq!(ev, Some(UiEvent::SubmitForm));
    }

    #[test]
    fn test_editing_captures_command_letters() {
        let ev = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::AddFriend,
            Some(FormField::Name),
            InputMode::Editing,
            false,
        );
        assert_eq!(ev, Some(UiEvent::CharInput('q')));
    }

    #[test]
    fn test_help_swallows_keys() {
        let ev = key_to_ui_event(press(KeyCode::Char('s')), Panel::SplitBill, None, InputMode::Normal, true);
        assert_eq!(ev, Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ev = key_to_ui_event(key, Panel::AddFriend, Some(FormField::Name), InputMode::Editing, false);
        assert_eq!(ev, Some(UiEvent::Quit));
    }
}
