use eframe::egui::{
    self,
    RichText,
};
use url::Url;

use crate::gui::{
    app::AnalysisState,
    theme::Theme,
    ActionQueue,
    UiAction,
};

const SECTION_SPACING: f32 = 12.0;

pub struct ControlPanel;

impl ControlPanel {
    pub fn show(
        ui: &mut egui::Ui,
        url: &mut String,
        state: &AnalysisState,
        samples: &[String],
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        let ctx = ui.ctx().clone();

        ui.label(RichText::new("Article URL").size(13.0));
        let response = ui.add(
            egui::TextEdit::singleline(url)
                .hint_text("Enter article URL")
                .desired_width(f32::INFINITY),
        );
        if response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter))
            && state.can_submit(url)
        {
            actions.push(UiAction::Analyze);
        }

        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Samples:").size(12.0).color(theme.comment(&ctx)));
            for sample in samples {
                let button = egui::Button::new(
                    RichText::new(sample_label(sample)).size(12.0).color(egui::Color32::WHITE),
                )
                .fill(theme.accent(&ctx));
                if ui.add(button).on_hover_text(sample).clicked() {
                    actions.push(UiAction::UseSample(sample.clone()));
                }
            }
        });

        ui.add_space(SECTION_SPACING);
        ui.horizontal(|ui| {
            let loading = state.is_loading();
            let (text, fill) = if loading {
                ("Analyzing...", theme.busy(&ctx))
            } else {
                ("Analyze", theme.success(&ctx))
            };

            let button = egui::Button::new(
                RichText::new(text).strong().color(egui::Color32::from_rgb(0x11, 0x18, 0x27)),
            )
            .fill(fill)
            .corner_radius(12.0);

            if ui.add_enabled(state.can_submit(url), button).clicked() {
                actions.push(UiAction::Analyze);
            }
            if loading {
                ui.add(egui::Spinner::new());
            }
        });

        if let Some(error) = state.error() {
            ui.add_space(SECTION_SPACING);
            ui.label(RichText::new(error).size(13.0).color(theme.error(&ctx)));
        }

        if let Some(words) = state.words() {
            ui.add_space(SECTION_SPACING);
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(format!(
                        "Extracted {} keywords. Drag to rotate, scroll to zoom.",
                        words.len()
                    ))
                    .size(13.0),
                );
                if ui.small_button("Reset view").clicked() {
                    actions.push(UiAction::ResetCamera);
                }
            });
        }
    }
}

/// Button caption for a sample URL: its host without a leading `www.`.
pub fn sample_label(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed.host_str().map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
        })
        .unwrap_or_else(|| url.to_string())
}
