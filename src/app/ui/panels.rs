use std::time::Duration;

use eframe::egui::{self, Context, Key};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::layout::ResizeDebounce;

use super::super::close_button::{CloseButton, CloseButtonEvent};
use super::super::feedback::FeedbackBox;
use super::super::gallery::DetailPanel;
use super::super::graph::interaction::DragTracker;
use super::super::scramble::ScrambleText;
use super::super::slideshow::Slideshow;
use super::super::theme::Theme;
use super::super::{DEFAULT_CAPTION, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(catalog: Catalog, theme: Option<Theme>, reduced_motion: bool) -> Self {
        let Catalog {
            map,
            galleries,
            slides,
        } = catalog;
        let mut rng = StdRng::from_os_rng();
        let mut caption = ScrambleText::new("");
        caption.set_text(DEFAULT_CAPTION, &mut rng);

        log::info!(
            "catalog ready: {} nodes, {} links, {} galleries, {} slides",
            map.node_count(),
            map.links().len(),
            galleries.len(),
            slides.len()
        );

        Self {
            map,
            galleries,
            theme,
            reduced_motion,
            rng,
            caption,
            panel_title: ScrambleText::new(""),
            resize: ResizeDebounce::default(),
            radii: None,
            hovered: None,
            node_drag: DragTracker::default(),
            panel: DetailPanel::default(),
            close_button: CloseButton::new(reduced_motion),
            slideshow: Slideshow::new(slides),
            show_slideshow: false,
            feedback: FeedbackBox::default(),
            show_feedback: false,
            last_frame_time: None,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let now = ctx.input(|input| input.time);
        let dt = self
            .last_frame_time
            .map_or(0.0, |last| (now - last) as f32)
            .clamp(0.0, 0.1);
        self.last_frame_time = Some(now);

        // read before any widget runs, a text field drops its focus on this same Escape
        let escape = !ctx.wants_keyboard_input() && ctx.input(|input| input.key_pressed(Key::Escape));

        self.tick_animations(now, dt);
        self.apply_dropped_files(ctx);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_top_bar(ui, frame));

        self.draw_details(ctx, now);
        self.draw_slideshow_window(ctx);
        self.draw_feedback_window(ctx, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_map(ui, now));

        self.handle_escape(escape);

        self.schedule_repaint(ctx, now);
    }

    fn tick_animations(&mut self, now: f64, dt: f32) {
        self.caption.tick(&mut self.rng);
        self.panel_title.tick(&mut self.rng);
        self.feedback.tick(now);

        if let Some(CloseButtonEvent::CloseRequested) = self.close_button.tick(now, dt) {
            self.panel.close();
        }
    }

    pub(in crate::app) fn open_panel(&mut self, index: usize, now: f64) {
        let Some(node) = self.map.nodes().get(index) else {
            return;
        };
        let (id, label) = (node.id.clone(), node.label.clone());

        self.panel.open(&id, &self.galleries, now, &mut self.rng);
        self.close_button.open();
        self.panel_title.set_text(label, &mut self.rng);
    }

    fn handle_escape(&mut self, pressed: bool) {
        if pressed && self.panel.is_open() {
            self.dismiss_panel("escape");
        }
    }

    // skips the close button's heal delay
    pub(in crate::app) fn dismiss_panel(&mut self, reason: &str) {
        log::debug!("dismissing detail panel: {reason}");
        self.panel.close();
        self.close_button.dismiss();
    }

    fn schedule_repaint(&self, ctx: &Context, now: f64) {
        let wiggling = self.panel.is_open() && !self.panel.cards().is_empty() && !self.reduced_motion;
        let animating = self.caption.is_running()
            || self.panel_title.is_running()
            || self.close_button.is_animating()
            || self.node_drag.active_target().is_some()
            || wiggling;

        if animating {
            ctx.request_repaint();
            return;
        }

        let deadline = [self.resize.pending_deadline(), self.feedback.next_deadline()]
            .into_iter()
            .flatten()
            .reduce(f64::min);
        if let Some(deadline) = deadline {
            ctx.request_repaint_after(Duration::from_secs_f64((deadline - now).max(0.0)));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::embedded_catalog;

    use super::super::super::close_button::CloseButtonPhase;
    use super::*;

    #[test]
    fn escape_dismisses_an_open_panel() {
        let mut model = ViewModel::new(embedded_catalog().unwrap(), None, false);
        let index = model.map.index_of("proj1").unwrap();
        model.open_panel(index, 0.0);

        model.handle_escape(false);
        assert!(model.panel.is_open());

        model.handle_escape(true);
        assert!(!model.panel.is_open());
        assert_eq!(model.close_button.phase(), CloseButtonPhase::Closed);
    }
}
