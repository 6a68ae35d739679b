use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::catalog::NodeCategory;

use super::theme::Theme;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, (a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

pub(super) fn node_radius(category: NodeCategory) -> f32 {
    match category {
        NodeCategory::Center => 34.0,
        NodeCategory::Capability => 24.0,
        NodeCategory::Project => 19.0,
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Palette {
    pub background: Color32,
    pub grid: Color32,
    pub line: Color32,
    pub line_highlighted: Color32,
    pub label: Color32,
    pub node_outline: Color32,
    pub center: Color32,
    pub capability: Color32,
    pub project: Color32,
    pub highlight: Color32,
    pub card_fill: Color32,
    pub card_text: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color32::from_rgb(19, 23, 29),
                grid: Color32::from_rgba_unmultiplied(60, 70, 80, 70),
                line: Color32::from_rgba_unmultiplied(120, 130, 145, 150),
                line_highlighted: Color32::from_rgb(241, 146, 94),
                label: Color32::from_gray(238),
                node_outline: Color32::from_rgba_unmultiplied(15, 15, 15, 190),
                center: Color32::from_rgb(245, 206, 93),
                capability: Color32::from_rgb(103, 196, 255),
                project: Color32::from_rgb(160, 130, 230),
                highlight: Color32::from_rgb(255, 164, 101),
                card_fill: Color32::from_rgb(36, 42, 52),
                card_text: Color32::from_gray(230),
            },
            Theme::Light => Self {
                background: Color32::from_rgb(244, 241, 234),
                grid: Color32::from_rgba_unmultiplied(170, 160, 150, 60),
                line: Color32::from_rgba_unmultiplied(110, 110, 120, 140),
                line_highlighted: Color32::from_rgb(214, 98, 48),
                label: Color32::from_gray(30),
                node_outline: Color32::from_rgba_unmultiplied(40, 40, 40, 160),
                center: Color32::from_rgb(230, 170, 40),
                capability: Color32::from_rgb(40, 140, 210),
                project: Color32::from_rgb(120, 90, 200),
                highlight: Color32::from_rgb(230, 110, 50),
                card_fill: Color32::from_rgb(255, 253, 248),
                card_text: Color32::from_gray(35),
            },
        }
    }

    pub fn node_color(&self, category: NodeCategory) -> Color32 {
        match category {
            NodeCategory::Center => self.center,
            NodeCategory::Capability => self.capability,
            NodeCategory::Project => self.project,
        }
    }
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, palette: &Palette) {
    const GRID_STEP: f32 = 56.0;

    painter.rect_filled(rect, 0.0, palette.background);

    let stroke = Stroke::new(1.0, palette.grid);
    let origin = rect.center();

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(GRID_STEP);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += GRID_STEP;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(GRID_STEP);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += GRID_STEP;
    }
}

pub(super) fn rotated_rect(center: Pos2, size: Vec2, angle: f32) -> [Pos2; 4] {
    let (sin, cos) = angle.sin_cos();
    let half = size * 0.5;
    [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|corner| {
        center + Vec2::new(corner.x * cos - corner.y * sin, corner.x * sin + corner.y * cos)
    })
}

pub(super) fn rotated_rect_contains(center: Pos2, size: Vec2, angle: f32, point: Pos2) -> bool {
    let (sin, cos) = (-angle).sin_cos();
    let local = point - center;
    let unrotated = Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos);
    unrotated.x.abs() <= size.x * 0.5 && unrotated.y.abs() <= size.y * 0.5
}
