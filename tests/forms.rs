use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use innerbloom::constants::JOURNAL_EMOJIS;
use innerbloom::ui::forms::journal_form::split_emoji_prefix;
use innerbloom::ui::forms::{FormEvent, FormMode, JournalField, JournalForm, TaskField, TaskForm, TextInput};
use innerbloom::utils::datetime::{start_of_day, today};
use innerbloom::{Journal, Task, Tint};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text<F: FnMut(KeyEvent) -> FormEvent>(mut handle: F, text: &str) {
    for c in text.chars() {
        assert_eq!(handle(key(KeyCode::Char(c))), FormEvent::None);
    }
}

#[test]
fn test_text_input_editing() {
    let mut input = TextInput::new("journal");
    assert_eq!(input.cursor(), 7);

    input.move_home();
    input.insert('a');
    assert_eq!(input.value(), "ajournal");

    input.move_end();
    input.backspace();
    assert_eq!(input.value(), "ajourna");

    assert!(!input.handle_key(key(KeyCode::Enter)));
    assert!(input.handle_key(key(KeyCode::Char('l'))));
    assert_eq!(input.value(), "ajournal");
}

#[test]
fn test_text_input_multibyte_cursor() {
    let mut input = TextInput::new("🙂ok");
    input.move_home();
    input.move_right();
    input.delete();
    assert_eq!(input.value(), "🙂k");
}

#[test]
fn test_new_task_form_saves_typed_fields() {
    let mut form = TaskForm::create();
    assert_eq!(form.mode(), FormMode::Create);
    let bound_id = form.bound().id;

    type_text(|k| form.handle_key(k), "Drink water");
    form.handle_key(key(KeyCode::Tab));
    assert_eq!(form.focus, TaskField::Caption);
    type_text(|k| form.handle_key(k), "8 glasses");
    form.handle_key(key(KeyCode::Tab));
    assert_eq!(form.focus, TaskField::Tint);
    form.handle_key(key(KeyCode::Right));

    assert_eq!(form.handle_key(key(KeyCode::Enter)), FormEvent::Submit);
    let saved = form.save();
    assert_eq!(saved.id, bound_id);
    assert_eq!(saved.title, "Drink water");
    assert_eq!(saved.caption, "8 glasses");
    assert_eq!(saved.tint, Tint::Red);
    assert!(!saved.is_completed);
}

#[test]
fn test_edit_task_keeps_identity_and_completion() {
    let mut task = Task::new("Run", "5k", Tint::Orange);
    task.is_completed = true;

    let mut form = TaskForm::edit(&task);
    assert_eq!(form.mode(), FormMode::Edit);
    assert_eq!(form.title.value(), "Run");
    assert_eq!(form.tint, Tint::Orange);

    form.handle_key(key(KeyCode::End));
    type_text(|k| form.handle_key(k), " fast");
    let saved = form.save();
    assert_eq!(saved.id, task.id);
    assert_eq!(saved.date, task.date);
    assert!(saved.is_completed);
    assert_eq!(saved.title, "Run fast");
}

#[test]
fn test_cancel_leaves_bound_task_untouched() {
    let task = Task::new("Sleep early", "", Tint::Blue);
    let mut form = TaskForm::edit(&task);
    type_text(|k| form.handle_key(k), "!!!");
    assert_eq!(form.handle_key(key(KeyCode::Esc)), FormEvent::Cancel);
    assert_eq!(form.bound(), &task);
}

#[test]
fn test_tint_picker_wraps() {
    let mut form = TaskForm::create();
    form.focus = TaskField::Tint;
    form.handle_key(key(KeyCode::Left));
    assert_eq!(form.tint, Tint::Gray);
    form.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(form.tint, Tint::Blue);
}

#[test]
fn test_journal_caption_gets_emoji_prefix() {
    let mut form = JournalForm::create(start_of_day(today()));
    type_text(|k| form.handle_key(k), "Sunday");
    form.handle_key(key(KeyCode::Tab));
    assert_eq!(form.focus, JournalField::Caption);
    type_text(|k| form.handle_key(k), "slept well");
    form.handle_key(key(KeyCode::Tab));
    assert_eq!(form.focus, JournalField::Emoji);
    form.handle_key(key(KeyCode::Right));

    let saved = form.save();
    assert_eq!(saved.title, "Sunday");
    assert_eq!(saved.caption, format!("{} slept well", JOURNAL_EMOJIS[1]));
}

#[test]
fn test_reedit_does_not_double_prefix() {
    let journal = Journal::new("Tuesday", "😎 went hiking", start_of_day(today()));
    let form = JournalForm::edit(&journal);
    assert_eq!(form.caption.value(), "went hiking");
    assert_eq!(form.selected_emoji(), "😎");

    let saved = form.save();
    assert_eq!(saved.caption, "😎 went hiking");
    assert_eq!(saved.id, journal.id);
    assert_eq!(saved.date, journal.date);
}

#[test]
fn test_caption_without_known_prefix_kept_whole() {
    let (index, body) = split_emoji_prefix("🌧 rainy");
    assert_eq!(index, None);
    assert_eq!(body, "🌧 rainy");

    let (index, body) = split_emoji_prefix("🙂 fine");
    assert_eq!(index, Some(0));
    assert_eq!(body, "fine");
}

#[test]
fn test_emoji_picker_wraps() {
    let mut form = JournalForm::create(start_of_day(today()));
    form.focus = JournalField::Emoji;
    form.handle_key(key(KeyCode::Left));
    assert_eq!(form.selected_emoji(), JOURNAL_EMOJIS[JOURNAL_EMOJIS.len() - 1]);
}
