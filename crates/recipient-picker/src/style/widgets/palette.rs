//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,
    pub background_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_green: Color,
    pub accent_red: Color,

    // State colors
    pub selected: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    ///
    /// Indigo accents on cool grey surfaces. Select actions use the green
    /// accent and remove actions use the red one.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            // Primary - indigo for links and the search focus ring
            primary: Color::from_rgb(0.31, 0.36, 0.90), // #4F5BE6
            primary_light: Color::from_rgb(0.52, 0.57, 0.96),
            primary_dark: Color::from_rgb(0.22, 0.26, 0.72),

            // Surfaces - panels sit on a slightly darker page
            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(0.995, 0.995, 1.0),
            background: Color::from_rgb(0.95, 0.96, 0.97),
            background_secondary: Color::from_rgb(0.93, 0.94, 0.96), // Header strip

            // Text
            text_primary: Color::from_rgb(0.11, 0.12, 0.16),
            text_secondary: Color::from_rgb(0.38, 0.41, 0.48),
            text_muted: Color::from_rgb(0.56, 0.59, 0.65), // Counts and hints
            text_on_primary: Color::WHITE,

            // Accents - select and remove
            accent_green: Color::from_rgb(0.13, 0.62, 0.38),
            accent_red: Color::from_rgb(0.86, 0.22, 0.27),

            // Section header states
            selected: Color::from_rgb(0.91, 0.93, 0.99),
            hover: Color::from_rgb(0.94, 0.95, 0.97),

            // Borders
            border_subtle: Color::from_rgb(0.89, 0.90, 0.93),
            border_medium: Color::from_rgb(0.80, 0.82, 0.87),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            // Primary - lighter indigo so links stay readable
            primary: Color::from_rgb(0.55, 0.60, 1.0), // #8C99FF
            primary_light: Color::from_rgb(0.70, 0.74, 1.0),
            primary_dark: Color::from_rgb(0.40, 0.45, 0.88),

            // Surfaces
            surface: Color::from_rgb(0.13, 0.14, 0.17),
            surface_elevated: Color::from_rgb(0.16, 0.17, 0.21),
            background: Color::from_rgb(0.09, 0.10, 0.12),
            background_secondary: Color::from_rgb(0.11, 0.12, 0.15),

            // Text
            text_primary: Color::from_rgb(0.90, 0.91, 0.94),
            text_secondary: Color::from_rgb(0.66, 0.69, 0.75),
            text_muted: Color::from_rgb(0.48, 0.51, 0.57),
            text_on_primary: Color::from_rgb(0.07, 0.08, 0.12), // Dark on indigo

            // Accents - select and remove
            accent_green: Color::from_rgb(0.30, 0.82, 0.55),
            accent_red: Color::from_rgb(0.96, 0.42, 0.45),

            // Section header states
            selected: Color::from_rgb(0.17, 0.19, 0.28),
            hover: Color::from_rgb(0.17, 0.18, 0.22),

            // Borders
            border_subtle: Color::from_rgb(0.21, 0.22, 0.26),
            border_medium: Color::from_rgb(0.29, 0.30, 0.35),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

/// Drop shadow color shared by both themes.
pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.06);
