use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
INNERBLOOM - Journal & Goals
============================

TABS
----
1-4         Home, Ponders, Progress, Resources
Tab         Next tab
Shift+Tab   Previous tab

HOME: CALENDAR
--------------
h/l  ←/→    Previous / next day
Click       Select a day in the strip

HOME: GOALS & JOURNALS
----------------------
j/k  ↓/↑    Move through goals, then journals
Space       Toggle goal completion
g           Add goal
a           Add journal for the selected day
e  Enter    Edit selected entry
d           Delete selected entry (with confirmation)

HOME: COMPLETED ITEMS SHEET
---------------------------
Drag        Pull the sheet up to expand, push down to collapse
K           Flick the sheet up (expand)
J           Flick the sheet down (collapse)

EDITORS
-------
Tab         Next field (Shift+Tab previous)
←/→         Change color or mood when the picker is focused
Enter       Save
Esc         Cancel

PONDERS
-------
n           Next question
m           Next motivational quote
←/→         Pick a religion

PROGRESS
--------
w           Switch Today / Weekly
p           Reveal the ponder of the day
o           Show quote collections

GENERAL
-------
?           Toggle help
G           Show logs
i           Change icon theme
q  Ctrl+C   Quit

HELP PANEL SCROLLING
--------------------
j/k  ↑/↓    Scroll
PageUp/Down Page through help content
Home/End    Jump to top / bottom

Entries live in memory only and are gone when the app exits.

Press 'Esc' or '?' to close this help panel
";

fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar_state);
}

/// Bordered panel of scrollable text filling most of the screen
fn render_text_panel(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = panel_area.height.saturating_sub(2) as usize;
    let first = scroll.clamp(total_lines, visible_height);

    let visible_text = lines.iter().skip(first).take(visible_height).copied().collect::<Vec<_>>().join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, panel_area);

    if total_lines > visible_height {
        render_scrollbar(f, panel_area, scroll);
    }
}

/// Small centered message box with an instruction line
fn render_message_box(
    f: &mut Frame,
    area: Rect,
    (title, color): (String, Color),
    message: &str,
    instructions: &str,
    scroll: &mut DialogScroll,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .style(Style::default().fg(color));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = chunks[0].height as usize;
    let first = scroll.clamp(total_lines, visible_height);
    let visible_text = lines.iter().skip(first).take(visible_height).copied().collect::<Vec<_>>().join("\n");

    let message_paragraph = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions_paragraph = Paragraph::new(instructions.to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);

    if total_lines > visible_height {
        render_scrollbar(f, chunks[0], scroll);
    }
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, item_type: &str, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!("{} Confirm Delete", icons.warning()))
        .style(Style::default().fg(Color::Red));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(format!("Delete this {}?", item_type))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    let name = Paragraph::new(format!("\"{}\"", title))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = Paragraph::new("Press Enter or y to confirm, Esc or n to cancel")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(message, chunks[0]);
    f.render_widget(name, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut DialogScroll) {
    render_message_box(
        f,
        area,
        (format!("{} Error", icons.error()), Color::Red),
        message,
        "Press any key to continue • j/k to scroll if needed",
        scroll,
    );
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_text_panel(f, area, "📖 Help - Press 'Esc' or '?' to close", HELP_CONTENT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll) {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();
    let content = if logs.is_empty() {
        "No logs recorded yet".to_string()
    } else {
        logs.join("\n")
    };
    render_text_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}
