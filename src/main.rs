use eframe::egui;
use tracing::info;
use wordcloud3d::{
    core::AppConfig,
    gui::WordCloudApp,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordcloud3d=info")),
        )
        .init();

    let config = AppConfig::load()?;
    info!(backend = %config.backend_url, "starting 3D word cloud");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("3D Word Cloud")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "wordcloud3d",
        options,
        Box::new(move |cc| {
            let app: Box<dyn eframe::App> = Box::new(WordCloudApp::new(cc, config)?);
            Ok(app)
        }),
    )?;

    Ok(())
}
