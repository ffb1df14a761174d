use serde::{Deserialize, Serialize};

/// Accent color of a goal, picked in the task form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    #[default]
    Blue,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Purple,
    Pink,
    Gray,
}

impl Tint {
    /// Picker order.
    pub const ALL: [Tint; 9] = [
        Tint::Blue,
        Tint::Red,
        Tint::Orange,
        Tint::Yellow,
        Tint::Green,
        Tint::Teal,
        Tint::Purple,
        Tint::Pink,
        Tint::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tint::Blue => "Blue",
            Tint::Red => "Red",
            Tint::Orange => "Orange",
            Tint::Yellow => "Yellow",
            Tint::Green => "Green",
            Tint::Teal => "Teal",
            Tint::Purple => "Purple",
            Tint::Pink => "Pink",
            Tint::Gray => "Gray",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
