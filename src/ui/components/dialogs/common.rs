use crate::ui::forms::TextInput;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: String, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block<'a>(field_title: &str, focused: bool) -> Block<'a> {
    let border_color = if focused { Color::Yellow } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Creates an input field block; the focused field shows a block cursor at
/// the input's cursor position
pub fn create_input_paragraph<'a>(input: &TextInput, field_title: &str, focused: bool) -> Paragraph<'a> {
    let text_style = Style::default().fg(Color::White);
    let line = if focused {
        let (before, after) = split_at_char(input.value(), input.cursor());
        let mut chars = after.chars();
        let under_cursor = chars.next().map_or(" ".to_string(), |c| c.to_string());
        Line::from(vec![
            Span::styled(before.to_string(), text_style),
            Span::styled(under_cursor, Style::default().fg(Color::Black).bg(Color::White)),
            Span::styled(chars.as_str().to_string(), text_style),
        ])
    } else {
        Line::from(Span::styled(input.value().to_string(), text_style))
    };

    Paragraph::new(line).block(field_block(field_title, focused))
}

/// Creates a selection field block (read-only value with picker arrows when focused)
pub fn create_selection_paragraph<'a>(value: Line<'a>, field_title: &str, focused: bool) -> Paragraph<'a> {
    let mut spans = Vec::new();
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Yellow)));
    }
    spans.extend(value.spans);
    if focused {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Yellow)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(field_block(field_title, focused))
}

fn split_at_char(value: &str, char_index: usize) -> (&str, &str) {
    let byte_pos = value
        .char_indices()
        .nth(char_index)
        .map_or(value.len(), |(pos, _)| pos);
    value.split_at(byte_pos)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_PICK: InstructionShortcut = ("←/→", Color::Yellow, " Pick");
}
