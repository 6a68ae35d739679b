use eframe::egui::{Pos2, Ui};

use crate::catalog::SystemMap;

use super::super::render_utils::node_radius;

pub const DRAG_THRESHOLD_PX: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction<T> {
    Click(T),
    Drag(T),
}

impl<T> Interaction<T> {
    pub fn clicked(self) -> Option<T> {
        match self {
            Self::Click(target) => Some(target),
            Self::Drag(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Gesture<T> {
    target: T,
    pointer_anchor: Pos2,
    position_anchor: Pos2,
    dragging: bool,
}

#[derive(Clone, Debug)]
pub struct DragTracker<T> {
    gesture: Option<Gesture<T>>,
}

impl<T> Default for DragTracker<T> {
    fn default() -> Self {
        Self { gesture: None }
    }
}

impl<T: Copy> DragTracker<T> {
    pub fn press(&mut self, target: T, pointer: Pos2, position: Pos2) {
        self.gesture = Some(Gesture {
            target,
            pointer_anchor: pointer,
            position_anchor: position,
            dragging: false,
        });
    }

    pub fn active_target(&self) -> Option<T> {
        self.gesture.map(|gesture| gesture.target)
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some_and(|gesture| gesture.dragging)
    }

    pub fn drag_to(&mut self, pointer: Pos2) -> Option<(T, Pos2)> {
        let gesture = self.gesture.as_mut()?;
        let delta = pointer - gesture.pointer_anchor;
        if delta.length() > DRAG_THRESHOLD_PX {
            gesture.dragging = true;
        }
        Some((gesture.target, gesture.position_anchor + delta))
    }

    pub fn release(&mut self) -> Option<Interaction<T>> {
        let gesture = self.gesture.take()?;
        Some(if gesture.dragging {
            Interaction::Drag(gesture.target)
        } else {
            Interaction::Click(gesture.target)
        })
    }

    pub fn cancel(&mut self) {
        self.gesture = None;
    }
}

pub(in crate::app) fn node_at(map: &SystemMap, pointer: Pos2) -> Option<usize> {
    map.nodes()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, node)| node.position.distance(pointer) <= node_radius(node.category))
        .map(|(index, _)| index)
}

pub(in crate::app) fn hovered_node(ui: &Ui, map: &SystemMap) -> Option<usize> {
    let pointer = ui.input(|input| input.pointer.hover_pos())?;
    node_at(map, pointer)
}
