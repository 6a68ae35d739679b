use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui::{self, Context};
use rand::rngs::StdRng;

use crate::catalog::{self, CardDescriptor, Catalog, SystemMap};
use crate::layout::{ResizeDebounce, RingRadii};

pub mod close_button;
pub mod feedback;
pub mod gallery;
pub mod graph;
pub mod highlight;
mod render_utils;
pub mod scramble;
pub mod slideshow;
pub mod surface;
pub mod theme;
mod ui;

use self::close_button::CloseButton;
use self::feedback::FeedbackBox;
use self::gallery::DetailPanel;
use self::graph::interaction::DragTracker;
use self::scramble::ScrambleText;
use self::slideshow::Slideshow;
use self::theme::{Theme, load_theme, resolve_theme, store_theme, theme_preference};

const DEFAULT_CAPTION: &str = "hover a node to trace its connections";

#[derive(Clone, Debug, Default)]
pub struct AppOptions {
    pub theme: Option<Theme>,
    pub reduced_motion: bool,
    pub catalog_path: Option<PathBuf>,
}

pub struct SystemMapApp {
    state: AppState,
}

enum AppState {
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    map: SystemMap,
    galleries: HashMap<String, Vec<CardDescriptor>>,
    // `None` follows the system color scheme
    theme: Option<Theme>,
    reduced_motion: bool,
    rng: StdRng,
    caption: ScrambleText,
    panel_title: ScrambleText,
    resize: ResizeDebounce,
    radii: Option<RingRadii>,
    hovered: Option<usize>,
    node_drag: DragTracker<usize>,
    panel: DetailPanel,
    close_button: CloseButton,
    slideshow: Slideshow,
    show_slideshow: bool,
    feedback: FeedbackBox,
    show_feedback: bool,
    last_frame_time: Option<f64>,
}

impl SystemMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: AppOptions) -> Self {
        let theme = resolve_theme(options.theme, load_theme(cc.storage));
        cc.egui_ctx.set_theme(theme_preference(theme));

        let state = match Self::load_catalog(options.catalog_path.as_deref()) {
            Ok(catalog) => AppState::Ready(Box::new(ViewModel::new(
                catalog,
                theme,
                options.reduced_motion,
            ))),
            Err(error) => {
                log::error!("{error:#}");
                AppState::Error(format!("{error:#}"))
            }
        };

        Self { state }
    }

    fn load_catalog(path: Option<&std::path::Path>) -> anyhow::Result<Catalog> {
        if let Some(path) = path {
            match catalog::load_catalog(path) {
                Ok(catalog) => {
                    log::info!("loaded catalog from {}", path.display());
                    return Ok(catalog);
                }
                Err(error) => {
                    log::warn!("{error:#}; falling back to the built-in catalog");
                }
            }
        }

        catalog::embedded_catalog()
    }
}

impl eframe::App for SystemMapApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        match &mut self.state {
            AppState::Ready(model) => model.show(ctx, frame),
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the portfolio catalog");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                });
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let AppState::Ready(model) = &self.state
            && let Some(theme) = model.theme
        {
            store_theme(storage, theme);
        }
    }
}
