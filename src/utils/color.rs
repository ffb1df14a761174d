use crate::entities::Tint;
use ratatui::style::Color;

/// Convert a goal tint to a terminal color
#[must_use]
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Blue => Color::Rgb(65, 128, 255),
        Tint::Red => Color::Rgb(220, 76, 62),
        Tint::Orange => Color::Rgb(199, 113, 0),
        Tint::Yellow => Color::Rgb(178, 145, 4),
        Tint::Green => Color::Rgb(54, 147, 7),
        Tint::Teal => Color::Rgb(20, 143, 173),
        Tint::Purple => Color::Rgb(105, 46, 194),
        Tint::Pink => Color::Rgb(224, 80, 149),
        Tint::Gray => Color::Rgb(153, 153, 153),
    }
}
