use std::f32::consts::FRAC_1_SQRT_2;

use eframe::egui::epaint::TextShape;
use eframe::egui::{
    self, Align2, Context, CursorIcon, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui,
    Vec2, vec2,
};

use crate::catalog::CardContent;
use crate::util::short_source;

use super::super::gallery::{CardPlacement, GalleryCard};
use super::super::graph::interaction::Interaction;
use super::super::render_utils::{Palette, rotated_rect, rotated_rect_contains, with_opacity};
use super::super::ViewModel;

const PANEL_SIZE: Vec2 = vec2(420.0, 520.0);
const GALLERY_HEIGHT: f32 = 400.0;
const CARD_SIZE: Vec2 = vec2(132.0, 92.0);
const CLOSE_BUTTON_SIZE: f32 = 44.0;
const CLOSE_PIECE_LENGTH: f32 = 12.0;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ctx: &Context, now: f64) {
        if !self.panel.is_open() {
            return;
        }

        let palette = Palette::for_theme(self.active_theme(ctx));
        let mut close_clicked = false;

        egui::Window::new("details")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::RIGHT_TOP, vec2(-16.0, 56.0))
            .fixed_size(PANEL_SIZE)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.panel_title.text()).monospace().size(18.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        close_clicked = self.draw_close_button(ui, &palette).clicked();
                    });
                });
                ui.separator();

                match self.panel.placeholder_text() {
                    Some(text) => {
                        ui.add_space(12.0);
                        ui.label(text);
                    }
                    None => self.draw_gallery(ui, ctx, &palette, now),
                }
            });

        if close_clicked {
            self.close_button.click(now);
        }
    }

    fn draw_close_button(&self, ui: &mut Ui, palette: &Palette) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(CLOSE_BUTTON_SIZE), Sense::click());
        let response = response
            .on_hover_text("Close")
            .on_hover_cursor(CursorIcon::PointingHand);

        let painter = ui.painter();
        if response.hovered() {
            painter.circle_filled(
                rect.center(),
                CLOSE_BUTTON_SIZE * 0.5,
                with_opacity(palette.highlight, 0.18),
            );
        }

        let stroke = Stroke::new(2.2, palette.label);
        let directions = [
            vec2(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            vec2(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            vec2(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            vec2(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        ];
        for (offset, direction) in self.close_button.piece_offsets().into_iter().zip(directions) {
            let start = rect.center() + offset;
            painter.line_segment([start, start + direction * CLOSE_PIECE_LENGTH], stroke);
        }

        response
    }

    fn draw_gallery(&mut self, ui: &mut Ui, ctx: &Context, palette: &Palette, now: f64) {
        let (area, response) = ui.allocate_exact_size(
            vec2(ui.available_width(), GALLERY_HEIGHT),
            Sense::click_and_drag(),
        );
        let reduced_motion = self.reduced_motion;
        let placements = self
            .panel
            .cards()
            .iter()
            .map(|card| card.placement(area, CARD_SIZE, now, reduced_motion))
            .collect::<Vec<_>>();

        let (pointer, pressed, down) = ui.input(|input| {
            (
                input.pointer.interact_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
            )
        });

        if pressed
            && response.hovered()
            && let Some(pointer) = pointer
            && let Some(index) = card_at(&placements, pointer)
            && let Some(card) = self.panel.cards().get(index)
        {
            let origin = card.drag_offset.to_pos2();
            self.panel.card_drag.press(index, pointer, origin);
        }

        if down
            && let Some(pointer) = pointer
            && let Some((index, offset)) = self.panel.card_drag.drag_to(pointer)
            && let Some(card) = self.panel.cards_mut().get_mut(index)
        {
            card.drag_offset = offset.to_vec2();
        }

        if !down
            && let Some(Interaction::Click(index)) = self.panel.card_drag.release()
            && let Some(card) = self.panel.cards().get(index)
            && let CardContent::Preview { url, .. } = &card.descriptor.content
        {
            log::info!("opening preview {url}");
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }

        if self.panel.card_drag.is_dragging() {
            ctx.set_cursor_icon(CursorIcon::Grabbing);
        } else if response.hovered()
            && pointer.is_some_and(|pointer| card_at(&placements, pointer).is_some())
        {
            ctx.set_cursor_icon(CursorIcon::Grab);
        }

        let painter = ui.painter_at(area);
        painter.rect_filled(area, 6.0, with_opacity(palette.background, 0.6));
        for (card, placement) in self.panel.cards().iter().zip(&placements) {
            draw_card(&painter, card, *placement, palette);
        }
    }
}

fn card_at(placements: &[CardPlacement], pointer: Pos2) -> Option<usize> {
    placements
        .iter()
        .enumerate()
        .rev()
        .find(|(_, placement)| {
            placement.opacity > 0.0
                && rotated_rect_contains(
                    placement.center,
                    CARD_SIZE * placement.scale,
                    placement.rotation,
                    pointer,
                )
        })
        .map(|(index, _)| index)
}

fn card_caption(content: &CardContent) -> String {
    match content {
        CardContent::Text { text } => text.clone(),
        CardContent::Image { src, label } | CardContent::Video { src, label } => format!(
            "{}\n{}",
            content.kind_label(),
            label.as_deref().unwrap_or_else(|| short_source(src))
        ),
        CardContent::Preview { url, label } => format!("{label}\n{}", short_source(url)),
    }
}

fn draw_card(painter: &egui::Painter, card: &GalleryCard, placement: CardPlacement, palette: &Palette) {
    if placement.opacity <= 0.0 {
        return;
    }

    let size = CARD_SIZE * placement.scale;
    let shadow = rotated_rect(placement.center + vec2(3.0, 4.0), size, placement.rotation);
    painter.add(Shape::convex_polygon(
        shadow.to_vec(),
        with_opacity(egui::Color32::BLACK, 0.25 * placement.opacity),
        Stroke::NONE,
    ));

    let corners = rotated_rect(placement.center, size, placement.rotation);
    let outline = match card.descriptor.content {
        CardContent::Preview { .. } => palette.highlight,
        _ => palette.node_outline,
    };
    painter.add(Shape::convex_polygon(
        corners.to_vec(),
        with_opacity(palette.card_fill, placement.opacity),
        Stroke::new(1.0, with_opacity(outline, placement.opacity)),
    ));

    let galley = painter.layout(
        card_caption(&card.descriptor.content),
        FontId::proportional(12.0 * placement.scale),
        with_opacity(palette.card_text, placement.opacity),
        size.x - 16.0,
    );
    let half = galley.size() * 0.5;
    let (sin, cos) = placement.rotation.sin_cos();
    let rotated_half = vec2(half.x * cos - half.y * sin, half.x * sin + half.y * cos);
    let text_pos = placement.center - rotated_half;
    let color = with_opacity(palette.card_text, placement.opacity);
    painter.add(TextShape::new(text_pos, galley, color).with_angle(placement.rotation));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(center: Pos2, opacity: f32) -> CardPlacement {
        CardPlacement {
            center,
            rotation: 0.0,
            scale: 1.0,
            opacity,
        }
    }

    #[test]
    fn overlapping_cards_pick_the_last_drawn() {
        let placements = [
            placement(Pos2::new(100.0, 100.0), 1.0),
            placement(Pos2::new(120.0, 100.0), 1.0),
        ];
        assert_eq!(card_at(&placements, Pos2::new(110.0, 100.0)), Some(1));
        assert_eq!(card_at(&placements, Pos2::new(40.0, 100.0)), Some(0));
        assert_eq!(card_at(&placements, Pos2::new(400.0, 400.0)), None);
    }

    #[test]
    fn hidden_cards_are_not_hit() {
        let placements = [placement(Pos2::new(100.0, 100.0), 0.0)];
        assert_eq!(card_at(&placements, Pos2::new(100.0, 100.0)), None);
    }

    #[test]
    fn media_captions_fall_back_to_file_name() {
        let caption = card_caption(&CardContent::Video {
            src: "media/clips/demo.mp4".to_owned(),
            label: None,
        });
        assert_eq!(caption, "video\ndemo.mp4");
    }
}
