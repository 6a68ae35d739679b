use eframe::egui::{Align2, CursorIcon, FontId, Pos2, Sense, Stroke, Ui, vec2};

use crate::layout::layout_map;

use super::super::highlight::HighlightState;
use super::super::render_utils::{Palette, draw_background, with_opacity};
use super::super::surface::{PainterSurface, render_map};
use super::super::{DEFAULT_CAPTION, ViewModel};
use super::interaction::{Interaction, hovered_node, node_at};

impl ViewModel {
    pub(in crate::app) fn draw_map(&mut self, ui: &mut Ui, now: f64) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        if self.resize.observe(rect.size(), now).is_some() {
            self.radii = Some(layout_map(&mut self.map, rect));
        }

        let palette = Palette::for_theme(self.active_theme(ui.ctx()));
        let painter = ui.painter_at(rect);
        draw_background(&painter, rect, &palette);
        if let Some(radii) = self.radii {
            let guide = Stroke::new(1.0, with_opacity(palette.line, 0.25));
            painter.circle_stroke(rect.center(), radii.inner, guide);
            painter.circle_stroke(rect.center(), radii.outer, guide);
        }

        let (pointer, pressed, down) = ui.input(|input| {
            (
                input.pointer.interact_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
            )
        });

        self.handle_map_pointer(pointer, pressed && response.hovered(), down, now);

        let hovered = if response.hovered() {
            hovered_node(ui, &self.map)
        } else {
            None
        };
        let active = self.node_drag.active_target().or(hovered);
        if active != self.hovered {
            self.hovered = active;
            let caption = active
                .and_then(|index| self.map.nodes().get(index))
                .map_or(DEFAULT_CAPTION.to_owned(), |node| {
                    format!("{} / {}", node.category.label(), node.label)
                });
            self.caption.set_text(caption, &mut self.rng);
        }

        if self.node_drag.is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if hovered.is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        let highlight = active
            .and_then(|index| self.map.nodes().get(index))
            .map_or_else(HighlightState::cleared, |node| {
                HighlightState::for_active(&self.map, &node.id)
            });
        let node_id = |index: Option<usize>| {
            index
                .and_then(|index| self.map.nodes().get(index))
                .map(|node| node.id.as_str())
        };
        let dragged = if self.node_drag.is_dragging() {
            self.node_drag.active_target()
        } else {
            None
        };

        let mut surface = PainterSurface {
            painter: &painter,
            palette,
            hovered: node_id(hovered),
            dragged: node_id(dragged),
        };
        render_map(&self.map, &highlight, &mut surface);

        painter.text(
            rect.left_top() + vec2(18.0, 16.0),
            Align2::LEFT_TOP,
            self.caption.text(),
            FontId::monospace(15.0),
            palette.label,
        );
    }

    pub(in crate::app) fn handle_map_pointer(
        &mut self,
        pointer: Option<Pos2>,
        pressed: bool,
        down: bool,
        now: f64,
    ) {
        if pressed && let Some(pointer) = pointer {
            match node_at(&self.map, pointer) {
                Some(index) => {
                    let position = self.map.nodes()[index].position;
                    self.node_drag.press(index, pointer, position);
                }
                None if self.panel.is_open() => self.dismiss_panel("outside click"),
                None => {}
            }
        }

        if down
            && let Some(pointer) = pointer
            && let Some((index, position)) = self.node_drag.drag_to(pointer)
        {
            self.map.set_position(index, position);
        }

        if !down {
            match self.node_drag.release() {
                Some(Interaction::Click(index)) => self.open_panel(index, now),
                Some(Interaction::Drag(index)) => {
                    if let Some(node) = self.map.nodes().get(index) {
                        log::debug!(
                            "moved `{}` to ({:.1}, {:.1})",
                            node.id,
                            node.position.x,
                            node.position.y
                        );
                    }
                }
                None => {}
            }
        }
    }
}
