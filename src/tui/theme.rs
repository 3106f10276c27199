//! Theme tokens and accessibility profile hooks for board rendering.

#![allow(missing_docs)]

use std::env;

use ratatui::style::{Color, Modifier, Style};

/// Motion profile hook consumed by the transition machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionMode {
    Full,
    Reduced,
}

/// Color output mode for compatibility with `NO_COLOR` and terminal policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// Accessibility knobs consumed by theme and motion primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityProfile {
    pub motion: MotionMode,
    pub color: ColorMode,
}

impl Default for AccessibilityProfile {
    fn default() -> Self {
        Self {
            motion: MotionMode::Full,
            color: ColorMode::Enabled,
        }
    }
}

impl AccessibilityProfile {
    #[must_use]
    pub const fn new(reduced_motion: bool, no_color: bool) -> Self {
        Self {
            motion: if reduced_motion {
                MotionMode::Reduced
            } else {
                MotionMode::Full
            },
            color: if no_color {
                ColorMode::Disabled
            } else {
                ColorMode::Enabled
            },
        }
    }

    /// Honors `NO_COLOR` on top of the configured flags.
    #[must_use]
    pub fn from_environment(reduced_motion: bool) -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        Self::new(reduced_motion, no_color)
    }

    #[must_use]
    pub const fn no_color(self) -> bool {
        matches!(self.color, ColorMode::Disabled)
    }

    #[must_use]
    pub const fn reduced_motion(self) -> bool {
        matches!(self.motion, MotionMode::Reduced)
    }
}

/// Render-facing styles for the kitchen board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KitchenPalette {
    /// Corkboard background fill.
    pub board_bg: Style,
    /// Banner title text.
    pub banner: Style,
    /// Banner subtitle / hint captions.
    pub caption: Style,
    /// Placard frame and label.
    pub placard: Style,
    /// Placard under the mouse cursor.
    pub placard_hover: Style,
    /// Pin glyph at the top of each placard.
    pub pin: Style,
    /// The cover panel in the covered scene.
    pub cover: Style,
    /// Dish art and label once revealed.
    pub dish: Style,
    /// The description text.
    pub description: Style,
    /// Clickable controls (back, choose another).
    pub control: Style,
    /// Help overlay body.
    pub overlay: Style,
}

impl KitchenPalette {
    /// Warm corkboard palette for color-capable terminals.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            board_bg: Style::new().bg(Color::Rgb(92, 64, 38)),
            banner: Style::new()
                .fg(Color::Rgb(255, 228, 181))
                .add_modifier(Modifier::BOLD),
            caption: Style::new().fg(Color::Rgb(222, 184, 135)),
            placard: Style::new().fg(Color::Rgb(60, 40, 20)).bg(Color::Rgb(250, 240, 220)),
            placard_hover: Style::new()
                .fg(Color::Rgb(60, 40, 20))
                .bg(Color::Rgb(255, 250, 205))
                .add_modifier(Modifier::BOLD),
            pin: Style::new().fg(Color::Rgb(200, 40, 40)),
            cover: Style::new()
                .fg(Color::Rgb(192, 192, 200))
                .add_modifier(Modifier::BOLD),
            dish: Style::new().fg(Color::Rgb(255, 200, 120)),
            description: Style::new().fg(Color::Rgb(245, 235, 220)),
            control: Style::new()
                .fg(Color::Rgb(173, 216, 230))
                .add_modifier(Modifier::UNDERLINED),
            overlay: Style::new().fg(Color::White).bg(Color::Rgb(40, 30, 20)),
        }
    }

    /// Attribute-only palette for `NO_COLOR` terminals.
    #[must_use]
    pub const fn monochrome() -> Self {
        Self {
            board_bg: Style::new(),
            banner: Style::new().add_modifier(Modifier::BOLD),
            caption: Style::new().add_modifier(Modifier::DIM),
            placard: Style::new(),
            placard_hover: Style::new().add_modifier(Modifier::REVERSED),
            pin: Style::new().add_modifier(Modifier::BOLD),
            cover: Style::new().add_modifier(Modifier::BOLD),
            dish: Style::new().add_modifier(Modifier::BOLD),
            description: Style::new(),
            control: Style::new().add_modifier(Modifier::UNDERLINED),
            overlay: Style::new().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Resolved theme handed to the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub profile: AccessibilityProfile,
    pub palette: KitchenPalette,
}

impl Theme {
    #[must_use]
    pub const fn from_profile(profile: AccessibilityProfile) -> Self {
        let palette = if profile.no_color() {
            KitchenPalette::monochrome()
        } else {
            KitchenPalette::standard()
        };
        Self { profile, palette }
    }

    /// Dim a style while a transition is still easing in. Progress at `1.0`
    /// returns the style unchanged.
    #[must_use]
    pub fn fade(&self, style: Style, progress: f32) -> Style {
        if progress >= 1.0 || self.profile.reduced_motion() {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_profile(AccessibilityProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_selects_the_monochrome_palette() {
        let theme = Theme::from_profile(AccessibilityProfile::new(false, true));
        assert_eq!(theme.palette, KitchenPalette::monochrome());
        assert!(theme.profile.no_color());
    }

    #[test]
    fn default_profile_is_full_color_full_motion() {
        let profile = AccessibilityProfile::default();
        assert!(!profile.no_color());
        assert!(!profile.reduced_motion());
    }

    #[test]
    fn fade_is_identity_once_settled() {
        let theme = Theme::default();
        let style = Style::new().fg(Color::White);
        assert_eq!(theme.fade(style, 1.0), style);
        assert_ne!(theme.fade(style, 0.2), style);
    }

    #[test]
    fn reduced_motion_disables_fading() {
        let theme = Theme::from_profile(AccessibilityProfile::new(true, false));
        let style = Style::new().fg(Color::White);
        assert_eq!(theme.fade(style, 0.1), style);
    }
}
