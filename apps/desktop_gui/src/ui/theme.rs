//! Theme presets, persisted UI preferences, and egui style mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreset {
    MaterialLight,
    MaterialDark,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::MaterialLight => "Material (Light)",
            ThemePreset::MaterialDark => "Material (Dark)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: egui::Color32,
    pub card_rounding: u8,
    pub text_scale: f32,
}

impl ThemeSettings {
    pub fn material_default() -> Self {
        Self {
            preset: ThemePreset::MaterialLight,
            accent_color: egui::Color32::from_rgb(98, 0, 238),
            card_rounding: 10,
            text_scale: 1.0,
        }
    }

    pub fn card_fill(&self) -> egui::Color32 {
        match self.preset {
            ThemePreset::MaterialLight => egui::Color32::from_rgb(0xee, 0xee, 0xee),
            ThemePreset::MaterialDark => egui::Color32::from_rgb(45, 45, 48),
        }
    }
}

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.4;
const MAX_CARD_ROUNDING: u8 = 16;

/// Serialized form of the UI preferences, stored as JSON through
/// `eframe::Storage`. Only presentation preferences are persisted; the
/// city list itself is session-scoped by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSettings {
    pub theme_preset: ThemePreset,
    pub accent_color: [u8; 4],
    pub card_rounding: u8,
    pub text_scale: f32,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::from_runtime(ThemeSettings::material_default())
    }
}

impl PersistedSettings {
    /// Restores runtime settings, clamping anything a stale or hand-edited
    /// blob may carry out of range.
    pub fn into_runtime(self) -> ThemeSettings {
        ThemeSettings {
            preset: self.theme_preset,
            accent_color: egui::Color32::from_rgba_unmultiplied(
                self.accent_color[0],
                self.accent_color[1],
                self.accent_color[2],
                self.accent_color[3],
            ),
            card_rounding: self.card_rounding.min(MAX_CARD_ROUNDING),
            text_scale: self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }

    pub fn from_runtime(theme: ThemeSettings) -> Self {
        Self {
            theme_preset: theme.preset,
            accent_color: [
                theme.accent_color.r(),
                theme.accent_color.g(),
                theme.accent_color.b(),
                theme.accent_color.a(),
            ],
            card_rounding: theme.card_rounding.min(MAX_CARD_ROUNDING),
            text_scale: theme.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::MaterialLight => {
            let mut v = egui::Visuals::light();
            v.window_fill = egui::Color32::WHITE;
            v.panel_fill = egui::Color32::from_rgb(0xfa, 0xfa, 0xfa);
            v.faint_bg_color = egui::Color32::from_rgb(0xee, 0xee, 0xee);
            v
        }
        ThemePreset::MaterialDark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(230, 230, 230));
            v.window_fill = egui::Color32::from_rgb(30, 30, 32);
            v.panel_fill = egui::Color32::from_rgb(24, 24, 26);
            v.faint_bg_color = egui::Color32::from_rgb(45, 45, 48);
            v
        }
    };

    visuals.hyperlink_color = theme.accent_color;
    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.active.bg_fill = theme.accent_color;
    visuals.widgets.hovered.bg_fill = theme.accent_color.gamma_multiply(0.85);

    let radius = egui::CornerRadius::same(theme.card_rounding);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;
    visuals.window_corner_radius = radius;
    visuals.menu_corner_radius = radius;

    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_settings_round_trip_preserves_theme() {
        let theme = ThemeSettings {
            preset: ThemePreset::MaterialDark,
            accent_color: egui::Color32::from_rgb(12, 140, 233),
            card_rounding: 6,
            text_scale: 1.2,
        };

        let restored = PersistedSettings::from_runtime(theme).into_runtime();

        assert_eq!(restored, theme);
    }

    #[test]
    fn restore_clamps_out_of_range_values() {
        let blob = PersistedSettings {
            theme_preset: ThemePreset::MaterialLight,
            accent_color: [255, 255, 255, 255],
            card_rounding: 200,
            text_scale: 9.0,
        };

        let restored = blob.into_runtime();

        assert_eq!(restored.card_rounding, MAX_CARD_ROUNDING);
        assert_eq!(restored.text_scale, MAX_TEXT_SCALE);
    }

    #[test]
    fn persisted_settings_survive_json_round_trip() {
        let settings = PersistedSettings::from_runtime(ThemeSettings::material_default());

        let serialized = serde_json::to_string(&settings).expect("serialize settings");
        let deserialized: PersistedSettings =
            serde_json::from_str(&serialized).expect("deserialize settings");

        assert_eq!(deserialized, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let deserialized: PersistedSettings =
            serde_json::from_str("{}").expect("defaults for empty blob");

        assert_eq!(deserialized, PersistedSettings::default());
    }
}
