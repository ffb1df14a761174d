use innerbloom::icons::*;
use innerbloom::ui::core::Tab;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Unicode);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.goal_pending(), "🔳");
    assert_eq!(service.goal_completed(), "✅");
    assert_eq!(service.journal(), "📓");
    assert_eq!(service.tab(Tab::Home), "🏡");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.goal_pending(), "○");
    assert_eq!(service.goal_completed(), "●");
    assert_eq!(service.streak(), "✦");
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.goal_pending(), "[ ]");
    assert_eq!(service.goal_completed(), "[X]");
    assert_eq!(service.sheet_handle(), "====");
}

#[test]
fn test_goal_status_follows_completion() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.goal_status(false), service.goal_pending());
    assert_eq!(service.goal_status(true), service.goal_completed());
}

#[test]
fn test_cycle_icon_theme() {
    let mut service = IconService::new(IconTheme::Ascii);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_every_tab_has_an_icon() {
    for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
        let service = IconService::new(theme);
        for tab in Tab::ALL {
            assert!(!service.tab(tab).is_empty());
        }
    }
}
