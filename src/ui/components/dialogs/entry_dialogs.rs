use super::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, shortcuts,
    InstructionShortcut,
};
use crate::constants::JOURNAL_EMOJIS;
use crate::ui::forms::{FormMode, JournalField, JournalForm, TaskField, TaskForm};
use crate::ui::layout::LayoutManager;
use crate::utils::color::tint_color;
use crate::utils::datetime;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const FORM_INSTRUCTIONS: [InstructionShortcut; 7] = [
    shortcuts::ENTER_SAVE,
    shortcuts::SEPARATOR,
    shortcuts::TAB_NEXT,
    shortcuts::SEPARATOR,
    shortcuts::ARROWS_PICK,
    shortcuts::SEPARATOR,
    shortcuts::ESC_CANCEL,
];

fn form_chunks(inner: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Caption
            Constraint::Length(3), // Picker
            Constraint::Length(1), // Preview
            Constraint::Length(1), // Instructions
        ])
        .split(inner)
}

fn title_date(date: &DateTime<Local>, format: &str) -> String {
    datetime::format_timestamp(date, format).unwrap_or_else(|| datetime::format_ymd(date.date_naive()))
}

pub fn render_task_dialog(f: &mut Frame, area: Rect, form: &TaskForm, date_format: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 15, area);
    f.render_widget(Clear, dialog_area);

    let title = match form.mode() {
        FormMode::Create => " Add Goal ".to_string(),
        FormMode::Edit => format!(" Edit Goal · {} ", title_date(&form.bound().date, date_format)),
    };
    let block = create_dialog_block(title, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = form_chunks(inner);
    f.render_widget(
        create_input_paragraph(&form.title, "Title", form.focus == TaskField::Title),
        chunks[0],
    );
    f.render_widget(
        create_input_paragraph(&form.caption, "Caption", form.focus == TaskField::Caption),
        chunks[1],
    );

    let tint = Line::from(vec![
        Span::styled("■ ", Style::default().fg(tint_color(form.tint))),
        Span::styled(form.tint.name(), Style::default().fg(Color::White)),
    ]);
    f.render_widget(
        create_selection_paragraph(tint, "Color", form.focus == TaskField::Tint),
        chunks[2],
    );
    f.render_widget(create_instructions_paragraph(&FORM_INSTRUCTIONS), chunks[4]);
}

pub fn render_journal_dialog(f: &mut Frame, area: Rect, form: &JournalForm, date_format: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 15, area);
    f.render_widget(Clear, dialog_area);

    let verb = match form.mode() {
        FormMode::Create => "Add",
        FormMode::Edit => "Edit",
    };
    let title = format!(" {} Journal · {} ", verb, title_date(&form.bound().date, date_format));
    let block = create_dialog_block(title, Color::Magenta);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = form_chunks(inner);
    f.render_widget(
        create_input_paragraph(&form.title, "Title", form.focus == JournalField::Title),
        chunks[0],
    );
    f.render_widget(
        create_input_paragraph(&form.caption, "Caption", form.focus == JournalField::Caption),
        chunks[1],
    );

    let emojis: Vec<Span> = JOURNAL_EMOJIS
        .iter()
        .enumerate()
        .map(|(index, emoji)| {
            let style = if index == form.emoji_index {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Span::styled(format!(" {} ", emoji), style)
        })
        .collect();
    f.render_widget(
        create_selection_paragraph(Line::from(emojis), "Mood", form.focus == JournalField::Emoji),
        chunks[2],
    );
    f.render_widget(journal_caption_preview(form), chunks[3]);
    f.render_widget(create_instructions_paragraph(&FORM_INSTRUCTIONS), chunks[4]);
}

/// Caption a save would store, emoji prefix included
fn journal_caption_preview(form: &JournalForm) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("Saves as: ", Style::default().fg(Color::DarkGray)),
        Span::styled(form.save().caption, Style::default().fg(Color::Gray)),
    ]))
}
