use eframe::egui::{self, Align, Context, Layout, RichText, Ui};

use crate::catalog::Slide;
use crate::util::short_source;

use super::super::ViewModel;
use super::super::feedback::FeedbackPhase;
use super::super::theme::{Theme, store_theme};

impl ViewModel {
    pub(in crate::app) fn active_theme(&self, ctx: &Context) -> Theme {
        self.theme
            .unwrap_or_else(|| Theme::from_system(ctx.theme()))
    }

    fn set_theme(&mut self, ctx: &Context, frame: &mut eframe::Frame, theme: Theme) {
        log::info!("switching to {} theme", theme.as_str());
        self.theme = Some(theme);
        ctx.set_theme(theme.egui_theme());
        if let Some(storage) = frame.storage_mut() {
            store_theme(storage, theme);
        }
    }

    pub(in crate::app) fn draw_top_bar(&mut self, ui: &mut Ui, frame: &mut eframe::Frame) {
        ui.horizontal(|ui| {
            ui.heading("System Map");
            ui.separator();
            ui.label(format!(
                "{} nodes / {} links",
                self.map.node_count(),
                self.map.links().len()
            ));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let theme = self.active_theme(ui.ctx());
                if ui.button(theme.toggle_label()).clicked() {
                    let ctx = ui.ctx().clone();
                    self.set_theme(&ctx, frame, theme.toggled());
                }

                if ui
                    .checkbox(&mut self.reduced_motion, "Reduced motion")
                    .changed()
                {
                    log::info!("reduced motion set to {}", self.reduced_motion);
                    self.close_button.set_reduced_motion(self.reduced_motion);
                }

                ui.toggle_value(&mut self.show_feedback, "Feedback");
                ui.toggle_value(&mut self.show_slideshow, "Slides");
            });
        });
    }

    pub(in crate::app) fn draw_slideshow_window(&mut self, ctx: &Context) {
        let slideshow = &mut self.slideshow;
        let rng = &mut self.rng;

        egui::Window::new("Slides")
            .open(&mut self.show_slideshow)
            .default_width(320.0)
            .resizable(false)
            .show(ctx, |ui| {
                if slideshow.slides().is_empty() {
                    ui.label("No slides in this catalog.");
                    return;
                }

                ui.horizontal(|ui| {
                    if ui.button("Prev").clicked() {
                        slideshow.prev();
                    }
                    ui.label(format!(
                        "{} / {}",
                        slideshow.selected() + 1,
                        slideshow.slides().len()
                    ));
                    if ui.button("Next").clicked() {
                        slideshow.next();
                    }
                    if ui.button("Shuffle").clicked() {
                        slideshow.shuffle(rng);
                    }
                });
                ui.separator();

                match slideshow.current() {
                    Some(Slide::Text { text }) => {
                        ui.label(RichText::new(text.as_str()).size(16.0));
                    }
                    Some(Slide::Image { src }) => {
                        ui.label(RichText::new(short_source(src)).strong());
                        ui.small(src.as_str());
                    }
                    None => {}
                }

                ui.add_space(8.0);
                ui.weak("Drop an image file on the window to replace this slide.");
            });
    }

    pub(in crate::app) fn draw_feedback_window(&mut self, ctx: &Context, now: f64) {
        let feedback = &mut self.feedback;

        egui::Window::new("Feedback")
            .open(&mut self.show_feedback)
            .default_width(300.0)
            .resizable(false)
            .show(ctx, |ui| {
                let idle = feedback.phase() == FeedbackPhase::Idle;
                ui.add_enabled(
                    idle,
                    egui::TextEdit::multiline(&mut feedback.draft)
                        .hint_text("What would you like to see here?")
                        .desired_rows(4),
                );

                let can_send = idle && !feedback.draft.trim().is_empty();
                if ui
                    .add_enabled(can_send, egui::Button::new(feedback.status_label()))
                    .clicked()
                {
                    feedback.submit(now);
                }

                if !feedback.submitted().is_empty() {
                    ui.weak(format!("{} sent this session", feedback.submitted().len()));
                }
            });
    }

    pub(in crate::app) fn apply_dropped_files(&mut self, ctx: &Context) {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        let Some(file) = dropped.first() else {
            return;
        };

        let src = file
            .path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| file.name.clone());
        if src.is_empty() {
            log::warn!("ignoring dropped file without a path or name");
            return;
        }

        if self.slideshow.replace_selected(Slide::Image { src: src.clone() }) {
            log::info!("replaced slide {} with {src}", self.slideshow.selected() + 1);
            self.show_slideshow = true;
        } else {
            log::warn!("dropped {src} but there is no slide to replace");
        }
    }
}
