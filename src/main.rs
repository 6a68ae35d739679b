use std::path::PathBuf;

use clap::Parser;
use system_map::app::{AppOptions, SystemMapApp, theme::Theme};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Start with this theme instead of the stored or system one.
    #[arg(long, value_enum)]
    theme: Option<Theme>,
    /// Skip decorative motion: no exploding close icon, no card wiggle.
    #[arg(long)]
    reduced_motion: bool,
    /// Catalog JSON to show instead of the built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        persist_window: true,
        ..Default::default()
    };
    let app_options = AppOptions {
        theme: args.theme,
        reduced_motion: args.reduced_motion,
        catalog_path: args.catalog,
    };

    eframe::run_native(
        "system map",
        options,
        Box::new(move |cc| Ok(Box::new(SystemMapApp::new(cc, app_options)))),
    )
}
