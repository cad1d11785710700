mod view;

use std::{
    sync::Arc,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;
use tracing::{
    debug,
    info,
};
pub use view::{
    AnalysisState,
    AnalysisView,
};

use super::{
    cloud_view::CloudView,
    control_panel::ControlPanel,
    keyword_table::keyword_table,
    theme::{
        set_theme,
        Theme,
        CLOUD_BACKGROUND,
    },
    top_bar::TopBar,
    ActionQueue,
    UiAction,
};
use crate::{
    cloud::CloudScene,
    core::{
        tasks::{
            manager::Waker,
            BackendStatus,
            TaskManager,
            TaskResult,
        },
        AnalysisClient,
        AppConfig,
        CloudError,
    },
};

const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);
const SIDE_PANEL_WIDTH: f32 = 320.0;

pub struct WordCloudApp {
    // Configuration
    pub config: AppConfig,

    // Analysis
    pub url_input: String,
    pub analysis: AnalysisState,
    pub scene: Option<CloudScene>,

    // UI State
    pub theme: Theme,
    pub cloud_view: CloudView,

    // External Services
    pub backend_status: BackendStatus,
    pub last_health_check: Option<Instant>,
    task_manager: TaskManager,
}

impl WordCloudApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, CloudError> {
        let client = AnalysisClient::new(&config)?;

        let repaint_ctx = cc.egui_ctx.clone();
        let waker: Waker = Arc::new(move || repaint_ctx.request_repaint());
        let task_manager = TaskManager::new(client, waker)?;

        let theme = Theme::midnight();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        Ok(Self {
            url_input: config.default_url(),
            config,
            analysis: AnalysisState::default(),
            scene: None,
            theme,
            cloud_view: CloudView::default(),
            backend_status: BackendStatus::Unknown,
            last_health_check: None,
            task_manager,
        })
    }
}

impl eframe::App for WordCloudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_backend_status(ctx);

        let mut actions = ActionQueue::new();

        TopBar::show(
            ctx,
            &self.theme,
            self.backend_status,
            self.config.backend_url.as_str(),
            &mut actions,
        );

        egui::SidePanel::left("control_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ControlPanel::show(
                    ui,
                    &mut self.url_input,
                    &self.analysis,
                    &self.config.sample_urls,
                    &self.theme,
                    &mut actions,
                );

                if let Some(words) = self.analysis.words() {
                    ui.add_space(12.0);
                    ui.separator();
                    keyword_table(ui, words, &self.theme);
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(CLOUD_BACKGROUND))
            .show(ctx, |ui| match (self.analysis.view(), self.scene.as_ref()) {
                (AnalysisView::Success { .. }, Some(scene)) => self.cloud_view.show(ui, scene),
                (view, _) => show_placeholder(ui, view, &self.theme),
            });

        for action in actions.drain() {
            self.apply_action(ctx, action);
        }
    }
}

impl WordCloudApp {
    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task = result.task_type(), "task finished");

        match result {
            TaskResult::Analysis { request_id, outcome } => {
                if !self.analysis.complete(request_id, outcome) {
                    return;
                }

                self.scene = self
                    .analysis
                    .words()
                    .map(|words| CloudScene::new(words.to_vec(), &mut rand::rng()));
                self.cloud_view.reset_camera();
            }
            TaskResult::BackendHealth(status) => {
                if status != self.backend_status {
                    info!(?status, "backend status changed");
                }
                self.backend_status = status;
            }
        }
    }

    fn apply_action(&mut self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::Analyze => self.submit_analysis(),
            UiAction::UseSample(url) => self.url_input = url,
            UiAction::ResetCamera => self.cloud_view.reset_camera(),
            UiAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn submit_analysis(&mut self) {
        if let Some(request_id) = self.analysis.submit(&self.url_input) {
            self.scene = None;
            let url = self.url_input.trim().to_string();
            info!(request_id, %url, "analysis requested");
            self.task_manager.analyze(request_id, url);
        }
    }

    fn update_backend_status(&mut self, ctx: &egui::Context) {
        let now = Instant::now();

        if next_health_check_in(now, self.last_health_check).is_zero() {
            self.task_manager.check_backend();
            self.last_health_check = Some(now);
        }

        // Idle windows get no input events, so wake up for the next check.
        ctx.request_repaint_after(next_health_check_in(now, self.last_health_check));
    }
}

/// Time left until the backend should be checked again. Zero means now.
pub fn next_health_check_in(now: Instant, last_check: Option<Instant>) -> Duration {
    match last_check {
        None => Duration::ZERO,
        Some(last_check) => HEALTH_CHECK_INTERVAL.saturating_sub(now.duration_since(last_check)),
    }
}

fn show_placeholder(ui: &mut egui::Ui, view: &AnalysisView, theme: &Theme) {
    let color = theme.comment(ui.ctx());
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        if matches!(view, AnalysisView::Loading { .. }) {
            ui.add(egui::Spinner::new().size(28.0));
            ui.add_space(8.0);
        }
        ui.label(egui::RichText::new(placeholder_text(view)).size(15.0).color(color));
    });
}

pub fn placeholder_text(view: &AnalysisView) -> &'static str {
    match view {
        AnalysisView::Loading { .. } => "Building topics and word cloud...",
        AnalysisView::Failure { .. } => "Something went wrong. Try another URL.",
        AnalysisView::Idle | AnalysisView::Success { .. } => {
            "Enter a URL and click Analyze to generate a 3D word cloud."
        }
    }
}
