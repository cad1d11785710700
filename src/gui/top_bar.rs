use eframe::egui::{
    self,
    containers,
};

use crate::{
    core::tasks::BackendStatus,
    gui::{
        theme::Theme,
        ActionQueue,
        UiAction,
    },
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        backend_status: BackendStatus,
        backend_url: &str,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        actions.push(UiAction::Quit);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Reset Camera").clicked() {
                        actions.push(UiAction::ResetCamera);
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, backend_status, backend_url);
                });
            });

            ui.add_space(4.0);
            ui.heading(theme.heading(ctx, "3D Word Cloud"));
            ui.label(
                egui::RichText::new(
                    "Visualize topics from a news article as an interactive 3D word cloud.",
                )
                .size(13.0)
                .color(theme.comment(ctx)),
            );
            ui.add_space(6.0);
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, status: BackendStatus, backend_url: &str) {
        let (color, tooltip) = match status {
            BackendStatus::Online => {
                (egui::Color32::from_rgb(0, 200, 0), format!("Analysis service reachable at {backend_url}"))
            }
            BackendStatus::Offline => (
                egui::Color32::from_rgb(200, 80, 80),
                format!("Analysis service not reachable at {backend_url}"),
            ),
            BackendStatus::Unknown => {
                (egui::Color32::GRAY, format!("Checking analysis service at {backend_url}"))
            }
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Backend").on_hover_text(&tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(&tooltip);
        });
    }
}
