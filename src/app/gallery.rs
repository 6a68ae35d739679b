use std::collections::HashMap;
use std::f32::consts::TAU;

use eframe::egui::{Pos2, Rect, Vec2, vec2};
use rand::Rng;

use crate::catalog::CardDescriptor;

use super::graph::interaction::DragTracker;

pub const ENTRANCE_SECS: f64 = 0.45;
pub const STAGGER_SECS: f64 = 0.08;
pub const ENTRANCE_START_SCALE: f32 = 0.6;

const WIGGLE_PERIOD_SECS: f64 = 3.2;
const WIGGLE_ANGLE_DEG: f32 = 1.4;
const WIGGLE_OFFSET_PX: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    pub center: Pos2,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct GalleryCard {
    pub descriptor: CardDescriptor,
    pub drag_offset: Vec2,
    appear_at: f64,
    wiggle_phase: f32,
}

impl GalleryCard {
    fn new(descriptor: CardDescriptor, appear_at: f64, wiggle_phase: f32) -> Self {
        Self {
            descriptor,
            drag_offset: Vec2::ZERO,
            appear_at,
            wiggle_phase,
        }
    }

    pub fn appear_at(&self) -> f64 {
        self.appear_at
    }

    pub fn entrance_progress(&self, now: f64) -> f32 {
        let linear = ((now - self.appear_at) / ENTRANCE_SECS).clamp(0.0, 1.0) as f32;
        // ease-out cubic
        1.0 - (1.0 - linear).powi(3)
    }

    pub fn entrance_done(&self, now: f64) -> bool {
        now >= self.appear_at + ENTRANCE_SECS
    }

    pub fn wiggle(&self, now: f64) -> (f32, Vec2) {
        if !self.entrance_done(now) {
            return (0.0, Vec2::ZERO);
        }

        let elapsed = now - self.appear_at - ENTRANCE_SECS;
        let phase = (elapsed / WIGGLE_PERIOD_SECS) as f32 * TAU + self.wiggle_phase;
        let angle = WIGGLE_ANGLE_DEG.to_radians() * phase.sin();
        let offset = vec2((phase * 0.5).cos(), phase.sin()) * WIGGLE_OFFSET_PX;
        (angle, offset)
    }

    pub fn anchor(&self, area: Rect) -> Pos2 {
        area.min
            + vec2(
                area.width() * self.descriptor.x_pct / 100.0,
                area.height() * self.descriptor.y_pct / 100.0,
            )
    }

    pub fn placement(&self, area: Rect, card_size: Vec2, now: f64, reduced_motion: bool) -> CardPlacement {
        let progress = if reduced_motion {
            1.0
        } else {
            self.entrance_progress(now)
        };
        let (wiggle_angle, wiggle_offset) = if reduced_motion {
            (0.0, Vec2::ZERO)
        } else {
            self.wiggle(now)
        };

        CardPlacement {
            center: self.anchor(area) + card_size * 0.5 + self.drag_offset + wiggle_offset,
            rotation: self.descriptor.rotation_deg.to_radians() + wiggle_angle,
            scale: ENTRANCE_START_SCALE + (1.0 - ENTRANCE_START_SCALE) * progress,
            opacity: progress,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelContent {
    Empty,
    Placeholder { node_id: String },
    Gallery,
}

#[derive(Clone, Debug)]
pub struct DetailPanel {
    open: bool,
    node_id: Option<String>,
    content: PanelContent,
    cards: Vec<GalleryCard>,
    pub(in crate::app) card_drag: DragTracker<usize>,
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self {
            open: false,
            node_id: None,
            content: PanelContent::Empty,
            cards: Vec::new(),
            card_drag: DragTracker::default(),
        }
    }
}

impl DetailPanel {
    pub fn open<R: Rng + ?Sized>(
        &mut self,
        node_id: &str,
        galleries: &HashMap<String, Vec<CardDescriptor>>,
        now: f64,
        rng: &mut R,
    ) {
        self.card_drag.cancel();
        self.cards.clear();
        self.node_id = Some(node_id.to_owned());

        match galleries.get(node_id) {
            Some(descriptors) => {
                self.cards.extend(descriptors.iter().enumerate().map(|(index, descriptor)| {
                    GalleryCard::new(
                        descriptor.clone(),
                        now + STAGGER_SECS * index as f64,
                        rng.random_range(0.0..TAU),
                    )
                }));
                self.content = PanelContent::Gallery;
            }
            None => {
                log::warn!("no gallery for node `{node_id}`, showing placeholder");
                self.content = PanelContent::Placeholder {
                    node_id: node_id.to_owned(),
                };
            }
        }

        self.open = true;
        log::info!("detail panel opened for `{node_id}`");
    }

    pub fn close(&mut self) {
        if self.open {
            log::info!(
                "detail panel closed for `{}`",
                self.node_id.as_deref().unwrap_or_default()
            );
        }
        self.open = false;
        self.card_drag.cancel();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn cards(&self) -> &[GalleryCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [GalleryCard] {
        &mut self.cards
    }

    pub fn placeholder_text(&self) -> Option<String> {
        match &self.content {
            PanelContent::Placeholder { node_id } => {
                Some(format!("Nothing to show for `{node_id}` yet."))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::CardContent;

    fn text_card(x_pct: f32, y_pct: f32, rotation_deg: f32) -> CardDescriptor {
        CardDescriptor {
            x_pct,
            y_pct,
            rotation_deg,
            content: CardContent::Text {
                text: "hello".to_owned(),
            },
        }
    }

    fn galleries() -> HashMap<String, Vec<CardDescriptor>> {
        HashMap::from([(
            "proj1".to_owned(),
            vec![text_card(10.0, 20.0, 0.0), text_card(50.0, 50.0, 4.0), text_card(0.0, 0.0, -3.0)],
        )])
    }

    #[test]
    fn missing_gallery_shows_placeholder_and_opens() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut panel = DetailPanel::default();
        panel.open("cap9", &galleries(), 0.0, &mut rng);

        assert!(panel.is_open());
        assert!(panel.cards().is_empty());
        assert!(panel.placeholder_text().unwrap().contains("cap9"));
    }

    #[test]
    fn cards_enter_in_descriptor_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut panel = DetailPanel::default();
        panel.open("proj1", &galleries(), 10.0, &mut rng);

        assert_eq!(panel.content(), &PanelContent::Gallery);
        let appear = panel.cards().iter().map(GalleryCard::appear_at).collect::<Vec<_>>();
        assert_eq!(appear.len(), 3);
        assert!(appear.windows(2).all(|pair| pair[1] - pair[0] >= STAGGER_SECS - 1e-9));
        assert_eq!(appear[0], 10.0);
    }

    #[test]
    fn entrance_goes_from_small_and_hidden_to_full() {
        let card = GalleryCard::new(text_card(0.0, 0.0, 0.0), 1.0, 0.0);
        let area = Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0));
        let size = vec2(100.0, 60.0);

        let before = card.placement(area, size, 0.5, false);
        assert_eq!(before.opacity, 0.0);
        assert!((before.scale - ENTRANCE_START_SCALE).abs() < 1e-6);

        let after = card.placement(area, size, 1.0 + ENTRANCE_SECS, false);
        assert!((after.opacity - 1.0).abs() < 1e-6);
        assert!((after.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn wiggle_phases_differ_between_cards() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut panel = DetailPanel::default();
        panel.open("proj1", &galleries(), 0.0, &mut rng);

        let now = 5.0;
        let angles = panel
            .cards()
            .iter()
            .map(|card| card.wiggle(now).0)
            .collect::<Vec<_>>();
        assert!(angles[0] != angles[1] || angles[1] != angles[2]);
    }

    #[test]
    fn drag_offset_layers_onto_percentage_anchor() {
        let mut card = GalleryCard::new(text_card(50.0, 25.0, 0.0), 0.0, 0.0);
        let area = Rect::from_min_size(Pos2::new(10.0, 20.0), vec2(200.0, 100.0));
        card.drag_offset = vec2(7.0, -3.0);

        let placement = card.placement(area, vec2(40.0, 20.0), 0.2, true);
        assert_eq!(placement.center, Pos2::new(10.0 + 100.0 + 20.0 + 7.0, 20.0 + 25.0 + 10.0 - 3.0));
    }

    #[test]
    fn close_keeps_content_until_next_open() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut panel = DetailPanel::default();
        panel.open("proj1", &galleries(), 0.0, &mut rng);
        panel.close();

        assert!(!panel.is_open());
        assert_eq!(panel.cards().len(), 3);
        assert_eq!(panel.node_id(), Some("proj1"));

        panel.open("cap2", &galleries(), 1.0, &mut rng);
        assert!(panel.cards().is_empty());
    }
}
