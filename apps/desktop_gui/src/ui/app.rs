//! App shell for the visited-cities screen.

use eframe::egui;

use cities_core::City;

use crate::controller::events::UiAction;
use crate::controller::reducer::{reduce, ScreenState};
use crate::ui::theme::{
    scaled_text_styles, visuals_for_theme, PersistedSettings, ThemePreset, ThemeSettings,
};

pub const SETTINGS_STORAGE_KEY: &str = "desktop_gui.settings";

/// Draft contents of the add-city form. Reset whenever the form closes.
#[derive(Debug, Default)]
struct AddCityForm {
    name_input: String,
    country_input: String,
    focus_name: bool,
}

impl AddCityForm {
    fn opened() -> Self {
        Self {
            focus_name: true,
            ..Self::default()
        }
    }
}

pub struct CitiesApp {
    state: ScreenState,
    form: AddCityForm,

    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
    settings_open: bool,
}

impl CitiesApp {
    pub fn new(persisted: Option<PersistedSettings>) -> Self {
        Self {
            state: ScreenState::new(),
            form: AddCityForm::default(),
            theme: persisted.unwrap_or_default().into_runtime(),
            applied_theme: None,
            settings_open: false,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = scaled_text_styles(self.theme.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::NONE
                    .fill(self.theme.accent_color)
                    .inner_margin(egui::Margin::symmetric(12, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Visited cities")
                            .color(egui::Color32::WHITE)
                            .strong()
                            .size(18.0 * self.theme.text_scale),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let sort_hint = if self.state.session.sort_enabled() {
                            "Show insertion order"
                        } else {
                            "Sort by first letter"
                        };
                        let sort_button = egui::Button::new(
                            egui::RichText::new("⇅").color(egui::Color32::WHITE).size(16.0),
                        )
                        .fill(egui::Color32::TRANSPARENT);
                        if ui.add(sort_button).on_hover_text(sort_hint).clicked() {
                            reduce(&mut self.state, UiAction::ToggleSort);
                        }

                        let settings_button = egui::Button::new(
                            egui::RichText::new("⚙").color(egui::Color32::WHITE).size(16.0),
                        )
                        .fill(egui::Color32::TRANSPARENT);
                        if ui.add(settings_button).on_hover_text("Settings").clicked() {
                            self.settings_open = true;
                        }
                    });
                });
            });
    }

    fn show_city_cards(&mut self, ctx: &egui::Context) {
        let cities = self.state.session.displayed();

        egui::CentralPanel::default().show(ctx, |ui| {
            if cities.is_empty() {
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        ui.label(egui::RichText::new("No cities available").weak());
                    },
                );
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(6.0);
                for city in &cities {
                    self.city_card(ui, city);
                    ui.add_space(4.0);
                }
                // Keep the last card clear of the floating add button.
                ui.add_space(64.0);
            });
        });
    }

    fn city_card(&self, ui: &mut egui::Ui, city: &City) {
        egui::Frame::NONE
            .fill(self.theme.card_fill())
            .corner_radius(egui::CornerRadius::same(self.theme.card_rounding))
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(&city.name)
                        .strong()
                        .size(20.0 * self.theme.text_scale),
                );
                ui.label(egui::RichText::new(&city.country));
            });
    }

    fn show_add_city_fab(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("add_city_fab"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
            .show(ctx, |ui| {
                ui.style_mut().visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(24);
                ui.style_mut().visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(24);
                ui.style_mut().visuals.widgets.active.corner_radius = egui::CornerRadius::same(24);

                let fab = egui::Button::new(
                    egui::RichText::new("＋").color(egui::Color32::WHITE).size(22.0),
                )
                .fill(self.theme.accent_color)
                .min_size(egui::vec2(48.0, 48.0));
                if ui.add(fab).on_hover_text("Add a city").clicked() {
                    reduce(&mut self.state, UiAction::OpenAddCity);
                    self.form = AddCityForm::opened();
                }
            });
    }

    fn show_add_city_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.add_city_open {
            return;
        }

        let mut submit = None;
        let mut cancel = false;

        egui::Window::new("Add a city")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(260.0);

                ui.label(egui::RichText::new("City name").strong());
                let name_resp = ui.add_sized(
                    [ui.available_width(), 34.0],
                    egui::TextEdit::singleline(&mut self.form.name_input)
                        .id_salt("add_city_name")
                        .hint_text("Rome"),
                );
                if self.form.focus_name {
                    name_resp.request_focus();
                    self.form.focus_name = false;
                }

                ui.add_space(4.0);
                ui.label(egui::RichText::new("Country").strong());
                let country_resp = ui.add_sized(
                    [ui.available_width(), 34.0],
                    egui::TextEdit::singleline(&mut self.form.country_input)
                        .id_salt("add_city_country")
                        .hint_text("Italy"),
                );

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        submit = Some(UiAction::SubmitCity {
                            name: self.form.name_input.clone(),
                            country: self.form.country_input.clone(),
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });

                // Enter submits while either field has focus.
                let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                if enter_pressed && (name_resp.has_focus() || country_resp.has_focus()) {
                    submit = Some(UiAction::SubmitCity {
                        name: self.form.name_input.clone(),
                        country: self.form.country_input.clone(),
                    });
                }
            });

        if let Some(action) = submit {
            reduce(&mut self.state, action);
            if !self.state.add_city_open {
                self.form = AddCityForm::default();
            }
        } else if cancel {
            reduce(&mut self.state, UiAction::CancelAddCity);
            self.form = AddCityForm::default();
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut open = self.settings_open;
        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Theme preset");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::MaterialLight,
                            ThemePreset::MaterialLight.label(),
                        );
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::MaterialDark,
                            ThemePreset::MaterialDark.label(),
                        );
                    });

                ui.separator();
                ui.label("Accent color");
                ui.color_edit_button_srgba(&mut self.theme.accent_color);
                ui.add(
                    egui::Slider::new(&mut self.theme.card_rounding, 0..=16)
                        .text("Card rounding"),
                );
                ui.add(
                    egui::Slider::new(&mut self.theme.text_scale, 0.8..=1.4)
                        .text("Text scale")
                        .step_by(0.05),
                );

                if ui.button("Reset to defaults").clicked() {
                    self.theme = ThemeSettings::material_default();
                }
            });
        self.settings_open = open;
    }
}

impl eframe::App for CitiesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        self.show_top_bar(ctx);
        self.show_city_cards(ctx);
        self.show_add_city_fab(ctx);
        self.show_add_city_dialog(ctx);
        self.show_settings_window(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings::from_runtime(self.theme);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
