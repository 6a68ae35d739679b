use std::collections::HashMap;

use eframe::egui::Pos2;
use serde::Deserialize;

use super::error::CatalogError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Center,
    Capability,
    Project,
}

impl NodeCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Capability => "capability",
            Self::Project => "project",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapNode {
    pub id: String,
    pub category: NodeCategory,
    pub label: String,
    pub angle_deg: f32,
    pub position: Pos2,
}

impl MapNode {
    pub fn new(
        id: impl Into<String>,
        category: NodeCategory,
        label: impl Into<String>,
        angle_deg: f32,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            label: label.into(),
            angle_deg,
            position: Pos2::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub target: String,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(self.target.as_str())
        } else if self.target == id {
            Some(self.source.as_str())
        } else {
            None
        }
    }
}

/// Owned node/link store. Node order is the catalog order and is stable for
/// the whole session, so indices double as handles.
#[derive(Clone, Debug)]
pub struct SystemMap {
    nodes: Vec<MapNode>,
    index_by_id: HashMap<String, usize>,
    links: Vec<Link>,
}

impl SystemMap {
    pub fn new(nodes: Vec<MapNode>, links: Vec<Link>) -> Result<Self, CatalogError> {
        let mut index_by_id = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if index_by_id.insert(node.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateNode(node.id.clone()));
            }
        }

        for link in &links {
            for endpoint in [&link.source, &link.target] {
                if !index_by_id.contains_key(endpoint) {
                    return Err(CatalogError::UnknownLinkEndpoint {
                        from: link.source.clone(),
                        to: link.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            index_by_id,
            links,
        })
    }

    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [MapNode] {
        &mut self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&MapNode> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    pub fn position(&self, id: &str) -> Option<Pos2> {
        self.node(id).map(|node| node.position)
    }

    pub fn set_position(&mut self, index: usize, position: Pos2) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    pub fn link_endpoints(&self, link: &Link) -> Option<(Pos2, Pos2)> {
        Some((self.position(&link.source)?, self.position(&link.target)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nodes() -> Vec<MapNode> {
        vec![
            MapNode::new("center", NodeCategory::Center, "Center", 0.0),
            MapNode::new("cap1", NodeCategory::Capability, "Cap", -90.0),
        ]
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut nodes = sample_nodes();
        nodes.push(MapNode::new("cap1", NodeCategory::Project, "Again", 10.0));
        let error = SystemMap::new(nodes, Vec::new()).unwrap_err();
        assert_eq!(error, CatalogError::DuplicateNode("cap1".to_owned()));
    }

    #[test]
    fn rejects_links_to_unknown_nodes() {
        let error =
            SystemMap::new(sample_nodes(), vec![Link::new("cap1", "proj9")]).unwrap_err();
        assert!(matches!(
            error,
            CatalogError::UnknownLinkEndpoint { ref missing, .. } if missing == "proj9"
        ));
    }

    #[test]
    fn link_other_endpoint() {
        let link = Link::new("center", "cap1");
        assert_eq!(link.other("center"), Some("cap1"));
        assert_eq!(link.other("cap1"), Some("center"));
        assert_eq!(link.other("proj1"), None);
    }

    #[test]
    fn set_position_ignores_out_of_range_index() {
        let mut map = SystemMap::new(sample_nodes(), Vec::new()).unwrap();
        assert!(!map.set_position(7, Pos2::new(1.0, 1.0)));
        assert!(map.set_position(1, Pos2::new(4.0, 5.0)));
        assert_eq!(map.position("cap1"), Some(Pos2::new(4.0, 5.0)));
    }
}
