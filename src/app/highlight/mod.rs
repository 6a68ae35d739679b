use std::collections::HashSet;

use crate::catalog::{Link, SystemMap};

mod collect;

use self::collect::collect_direct_neighbours;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    None,
    Highlighted,
    Dimmed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightState {
    active: Option<String>,
    related: HashSet<String>,
}

impl HighlightState {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn for_active(map: &SystemMap, active_id: &str) -> Self {
        if !map.contains(active_id) {
            return Self::cleared();
        }

        Self {
            active: Some(active_id.to_owned()),
            related: collect_direct_neighbours(map.links(), active_id),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn related(&self) -> &HashSet<String> {
        &self.related
    }

    pub fn node_mark(&self, id: &str) -> Mark {
        if self.active.is_none() {
            Mark::None
        } else if self.related.contains(id) {
            Mark::Highlighted
        } else {
            Mark::Dimmed
        }
    }

    pub fn link_mark(&self, link: &Link) -> Mark {
        match &self.active {
            Some(active) if link.touches(active) => Mark::Highlighted,
            _ => Mark::None,
        }
    }
}
