//! Eat-'n-Split - terminal bill splitter
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use eat_n_split::config::Config;
use eat_n_split::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use eat_n_split::messages::ui_events::{key_to_ui_event, FormField, InputMode, Panel};
use eat_n_split::messages::{RenderState, SplitView, UiEvent};
use eat_n_split::models::{format_amount, Payer};
use eat_n_split::ui::{
    add_friend_label, amount_text, focus_style, render_input, render_readonly, select_label,
    standing_color,
};
use eat_n_split::{AppActor, AppState};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = Config::default_path();
    let (config, config_error) = match Config::load_from(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(config.tracing_level())
        .init();

    if let Some(e) = config_error {
        warn!(path = %config_path.display(), error = %format!("{:#}", e), "ignoring config file");
    }
    info!(settlement = ?config.settlement, seed = config.seed_friends, "starting session");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(AppState::new(&config), render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.active_field,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(title, main_chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    draw_sidebar(f, state, columns[0]);

    match &state.split {
        Some(split) => draw_split_form(f, state, split, columns[1]),
        None => draw_split_placeholder(f, columns[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_sidebar(f: &mut Frame, state: &RenderState, area: Rect) {
    let form_height = if state.show_add_friend { 9 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),              // Friend list
            Constraint::Length(form_height), // Add Friend form
            Constraint::Length(1),           // Toggle button
        ])
        .split(area);

    draw_friend_list(f, state, chunks[0]);
    if state.show_add_friend {
        draw_add_friend_form(f, state, chunks[1]);
    }

    let button = Paragraph::new(format!(" [a] {} ", add_friend_label(state.show_add_friend)))
        .style(Style::default().fg(Color::Black).bg(Color::Yellow));
    f.render_widget(button, chunks[2]);
}

fn draw_friend_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Friends;

    let items: Vec<ListItem> = state.friends.iter()
        .map(|friend| {
            let is_selected = state.is_selected(friend);
            let name_style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().bold()
            };
            let header = Line::from(vec![
                Span::styled(friend.name.clone(), name_style),
                Span::styled(
                    format!("  [{}]", select_label(is_selected)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let standing = Line::from(Span::styled(
                friend.standing_text(),
                Style::default().fg(standing_color(friend.standing())),
            ));
            let avatar = Line::from(Span::styled(
                friend.image.clone(),
                Style::default().fg(Color::DarkGray).italic(),
            ));
            ListItem::new(vec![header, standing, avatar])
        })
        .collect();

    let highlight_style = if is_focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(is_focused, InputMode::Normal))
            .title(" Friends (Enter:select Esc:clear) "))
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.friends.is_empty() {
        list_state.select(Some(state.friend_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_add_friend_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::AddFriend;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(is_focused, InputMode::Normal))
        .title(" Add Friend (s:add) ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let fields = [
        (FormField::Name, state.intake_name.as_str(), " Friend name "),
        (FormField::Image, state.intake_image.as_str(), " Image URL "),
    ];
    for ((field, content, title), row) in fields.into_iter().zip(rows.iter()) {
        let field_focused = is_focused && state.active_field == Some(field);
        f.render_widget(render_input(content, title, field_focused, state.input_mode), *row);
        if field_focused {
            draw_cursor(f, state, *row);
        }
    }
}

fn draw_split_form(f: &mut Frame, state: &RenderState, split: &SplitView, area: Rect) {
    let is_focused = state.active_panel == Panel::SplitBill;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(is_focused, InputMode::Normal))
        .title(format!(" Split a bill with {} ", split.friend_name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Bill value
            Constraint::Length(3),  // Your expense
            Constraint::Length(3),  // Friend's expense
            Constraint::Length(3),  // Who is paying
            Constraint::Length(1),  // Submit hint
            Constraint::Min(0),
        ])
        .split(inner);

    let focused = |field| is_focused && state.active_field == Some(field);

    f.render_widget(
        render_input(&split.bill_input, " Bill value ", focused(FormField::BillValue), state.input_mode),
        rows[0],
    );
    if focused(FormField::BillValue) {
        draw_cursor(f, state, rows[0]);
    }

    f.render_widget(
        render_input(&split.expense_input, " Your expense ", focused(FormField::YourExpense), state.input_mode),
        rows[1],
    );
    if focused(FormField::YourExpense) {
        draw_cursor(f, state, rows[1]);
    }

    let friend_title = format!(" {}'s expense ", split.friend_name);
    f.render_widget(
        render_readonly(amount_text(split.counterpart_expense), &friend_title),
        rows[2],
    );

    let payer_spans: Vec<Span> = [Payer::User, Payer::Friend]
        .into_iter()
        .map(|payer| {
            let label = format!(" {} ", payer.label(&split.friend_name));
            if payer == split.payer {
                Span::styled(label, Style::default().fg(Color::Black).bg(Color::Yellow).bold())
            } else {
                Span::styled(label, Style::default().fg(Color::Gray))
            }
        })
        .collect();
    let payer = Paragraph::new(Line::from(payer_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused(FormField::WhoPaying), InputMode::Normal))
            .title(" Who is paying the bill? (p:switch) "),
    );
    f.render_widget(payer, rows[3]);

    let hint = Paragraph::new(" [s] Split bill ").style(Style::default().fg(Color::Black).bg(Color::Yellow));
    f.render_widget(hint, rows[4]);

    if let Some(last) = &state.last_settlement {
        let sign = if last.delta < 0.0 { "-" } else { "+" };
        let text = format!(
            "Last split: {} {}${} at {}",
            last.friend_name,
            sign,
            format_amount(last.delta.abs()),
            last.at.with_timezone(&chrono::Local).format("%H:%M"),
        );
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            rows[5],
        );
    }
}

fn draw_split_placeholder(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Select a friend to split a bill.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_cursor(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.input_mode == InputMode::Editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.cursor_position as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    if let Some(status) = &state.status {
        let color = if status.is_error { Color::Red } else { Color::Green };
        let bar = Paragraph::new(format!(" {} ", status.text))
            .style(Style::default().fg(color));
        f.render_widget(bar, area);
        return;
    }

    let hint = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Enter:submit | Tab:next field "
    } else {
        match state.active_panel {
            Panel::Friends => " Tab:panel | ↑/↓:move | Enter:select | a:add friend | ?:help | q:quit ",
            Panel::AddFriend | Panel::SplitBill => " Tab:panel | ↑/↓:field | e:edit | s:submit | ?:help | q:quit ",
        }
    };

    let bar = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 EAT-'N-SPLIT - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   ↑ / ↓              Move through friends or form fields

 FRIENDS
   Enter / Space      Select friend
   Esc                Clear selection
   a                  Open / close the Add Friend form

 FORMS
   e / Enter          Edit field
   p                  Switch who is paying
   s                  Submit form
   Enter (editing)    Submit form
   Esc (editing)      Stop editing

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
