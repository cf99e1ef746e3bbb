use bevy::prelude::*;

/// Color bucket picked from the first letter of a spectral class
#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StarTint {
    /// O and B
    BlueWhite,
    /// A and F, plus anything unrecognized
    #[default]
    White,
    /// G
    Yellow,
    /// K
    Orange,
    /// M
    Red,
}

impl StarTint {
    pub const ALL: [Self; 5] = [
        Self::BlueWhite,
        Self::White,
        Self::Yellow,
        Self::Orange,
        Self::Red,
    ];

    pub fn from_spectral_class(spectral_class: Option<&str>) -> Self {
        let Some(letter) = spectral_class.and_then(|class| class.chars().next()) else {
            return Self::default();
        };

        match letter.to_ascii_uppercase() {
            'O' | 'B' => Self::BlueWhite,
            'G' => Self::Yellow,
            'K' => Self::Orange,
            'M' => Self::Red,
            _ => Self::White,
        }
    }

    pub const fn rgb(self) -> [f32; 3] {
        match self {
            Self::BlueWhite => [0.6, 0.8, 1.0],
            Self::White => [1.0, 1.0, 1.0],
            Self::Yellow => [1.0, 1.0, 0.7],
            Self::Orange => [1.0, 0.7, 0.4],
            Self::Red => [1.0, 0.5, 0.3],
        }
    }

    pub fn color(self) -> Color {
        let [r, g, b] = self.rgb();
        Color::srgb(r, g, b)
    }

    /// Legend text shown in the overlay
    pub const fn description(self) -> &'static str {
        match self {
            Self::BlueWhite => "O/B - Hot Blue Stars",
            Self::White => "A/F - White Stars",
            Self::Yellow => "G - Yellow Stars (Sun-like)",
            Self::Orange => "K - Orange Stars",
            Self::Red => "M - Red Stars",
        }
    }
}
