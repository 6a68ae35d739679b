use eframe::egui::{Align2, FontId, Painter, Pos2, Stroke, vec2};

use crate::catalog::{Link, MapNode, SystemMap};

use super::highlight::{HighlightState, Mark};
use super::render_utils::{Palette, blend_color, node_radius, with_opacity};

pub trait MapSurface {
    fn render_line(&mut self, link: &Link, from: Pos2, to: Pos2, mark: Mark);
    fn render_node(&mut self, node: &MapNode, mark: Mark);
}

// lines first so nodes sit on top of them
pub fn render_map<S: MapSurface + ?Sized>(
    map: &SystemMap,
    highlight: &HighlightState,
    surface: &mut S,
) {
    for link in map.links() {
        if let Some((from, to)) = map.link_endpoints(link) {
            surface.render_line(link, from, to, highlight.link_mark(link));
        }
    }

    for node in map.nodes() {
        surface.render_node(node, highlight.node_mark(&node.id));
    }
}

pub(super) struct PainterSurface<'a> {
    pub painter: &'a Painter,
    pub palette: Palette,
    pub hovered: Option<&'a str>,
    pub dragged: Option<&'a str>,
}

impl MapSurface for PainterSurface<'_> {
    fn render_line(&mut self, _link: &Link, from: Pos2, to: Pos2, mark: Mark) {
        let stroke = match mark {
            Mark::Highlighted => Stroke::new(2.4, self.palette.line_highlighted),
            Mark::Dimmed => Stroke::new(1.0, with_opacity(self.palette.line, 0.35)),
            Mark::None => Stroke::new(1.2, self.palette.line),
        };
        self.painter.line_segment([from, to], stroke);
    }

    fn render_node(&mut self, node: &MapNode, mark: Mark) {
        let base = self.palette.node_color(node.category);
        let is_hovered = self.hovered == Some(node.id.as_str());
        let is_dragged = self.dragged == Some(node.id.as_str());
        let radius = node_radius(node.category) + if is_dragged { 3.0 } else { 0.0 };

        let (fill, label_opacity) = match mark {
            Mark::Highlighted if is_hovered => (blend_color(base, self.palette.highlight, 0.55), 1.0),
            Mark::Highlighted => (blend_color(base, self.palette.highlight, 0.25), 1.0),
            Mark::Dimmed => (with_opacity(base, 0.3), 0.4),
            Mark::None => (base, 1.0),
        };

        self.painter.circle_filled(node.position, radius, fill);
        self.painter.circle_stroke(
            node.position,
            radius,
            Stroke::new(
                if mark == Mark::Highlighted { 2.0 } else { 1.0 },
                self.palette.node_outline,
            ),
        );
        self.painter.text(
            node.position + vec2(0.0, radius + 6.0),
            Align2::CENTER_TOP,
            &node.label,
            FontId::proportional(13.0),
            with_opacity(self.palette.label, label_opacity),
        );
    }
}
