use eframe::egui::{Pos2, Rect, Vec2, vec2};

use crate::catalog::{NodeCategory, SystemMap};

pub const MOBILE_WIDTH_THRESHOLD: f32 = 640.0;
pub const RESIZE_DEBOUNCE_SECS: f64 = 0.15;

const MOBILE_RADII: RingRadii = RingRadii {
    inner: 110.0,
    outer: 180.0,
};
const INNER_MAX_PX: f32 = 210.0;
const INNER_FRACTION: f32 = 0.26;
const OUTER_MAX_PX: f32 = 360.0;
const OUTER_FRACTION: f32 = 0.44;
const SIZE_EPSILON: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingRadii {
    pub inner: f32,
    pub outer: f32,
}

impl RingRadii {
    pub fn for_viewport(size: Vec2) -> Self {
        if size.x < MOBILE_WIDTH_THRESHOLD {
            return MOBILE_RADII;
        }

        let min_dimension = size.x.min(size.y).max(0.0);
        Self {
            inner: (min_dimension * INNER_FRACTION).min(INNER_MAX_PX),
            outer: (min_dimension * OUTER_FRACTION).min(OUTER_MAX_PX),
        }
    }

    pub fn for_category(self, category: NodeCategory) -> f32 {
        match category {
            NodeCategory::Center => 0.0,
            NodeCategory::Capability => self.inner,
            NodeCategory::Project => self.outer,
        }
    }
}

pub fn ring_position(center: Pos2, radius: f32, angle_deg: f32) -> Pos2 {
    let theta = angle_deg.to_radians();
    center + vec2(theta.cos(), theta.sin()) * radius
}

/// Places every node on its ring around the container center. Overwrites all
/// positions, including ones moved by a drag.
pub fn layout_map(map: &mut SystemMap, container: Rect) -> RingRadii {
    let radii = RingRadii::for_viewport(container.size());
    let center = container.center();

    for node in map.nodes_mut() {
        node.position = match node.category {
            NodeCategory::Center => center,
            category => ring_position(center, radii.for_category(category), node.angle_deg),
        };
    }

    log::debug!(
        "layout pass: container {:.0}x{:.0}, radii {:.1}/{:.1}",
        container.width(),
        container.height(),
        radii.inner,
        radii.outer
    );
    radii
}

#[derive(Clone, Debug, Default)]
pub struct ResizeDebounce {
    applied: Option<Vec2>,
    pending: Option<(Vec2, f64)>,
}

impl ResizeDebounce {
    pub fn observe(&mut self, size: Vec2, now: f64) -> Option<Vec2> {
        let Some(applied) = self.applied else {
            self.applied = Some(size);
            return Some(size);
        };

        if same_size(applied, size) {
            self.pending = None;
            return None;
        }

        match self.pending {
            Some((pending, since)) if same_size(pending, size) => {
                if now - since >= RESIZE_DEBOUNCE_SECS {
                    self.applied = Some(size);
                    self.pending = None;
                    Some(size)
                } else {
                    None
                }
            }
            _ => {
                self.pending = Some((size, now));
                None
            }
        }
    }

    pub fn pending_deadline(&self) -> Option<f64> {
        self.pending
            .map(|(_, since)| since + RESIZE_DEBOUNCE_SECS)
    }
}

fn same_size(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < SIZE_EPSILON && (a.y - b.y).abs() < SIZE_EPSILON
}
