use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::error::CatalogError;
use super::gallery::{CardDescriptor, Slide};
use super::graph::{Link, MapNode, NodeCategory, SystemMap};
use super::Catalog;

#[derive(Clone, Debug, Deserialize)]
struct RawNode {
    id: String,
    category: NodeCategory,
    label: String,
    #[serde(default)]
    angle: f32,
}

#[derive(Clone, Debug, Deserialize)]
struct RawCatalog {
    nodes: Vec<RawNode>,
    #[serde(default)]
    links: Vec<[String; 2]>,
    #[serde(default)]
    galleries: HashMap<String, Vec<CardDescriptor>>,
    #[serde(default)]
    slides: Vec<Slide>,
}

pub(super) fn parse_catalog(raw: &str) -> Result<Catalog> {
    let parsed: RawCatalog = serde_json::from_str(raw).context("invalid catalog JSON")?;

    let nodes = parsed
        .nodes
        .into_iter()
        .map(|node| {
            MapNode::new(
                node.id.trim(),
                node.category,
                node.label,
                node.angle,
            )
        })
        .collect::<Vec<_>>();
    let links = parsed
        .links
        .into_iter()
        .map(|[source, target]| Link::new(source, target))
        .collect::<Vec<_>>();

    let map = SystemMap::new(nodes, links).context("catalog graph failed validation")?;
    match map
        .nodes()
        .iter()
        .filter(|node| node.category == NodeCategory::Center)
        .count()
    {
        0 => return Err(CatalogError::MissingCenter.into()),
        1 => {}
        centers => return Err(CatalogError::MultipleCenters(centers).into()),
    }

    if let Some(unknown) = parsed.galleries.keys().find(|id| !map.contains(id)) {
        return Err(CatalogError::UnknownGalleryNode(unknown.clone()).into());
    }

    Ok(Catalog {
        map,
        galleries: parsed.galleries,
        slides: parsed.slides,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::gallery::CardContent;

    const MINIMAL: &str = r#"{
        "nodes": [
            { "id": "center", "category": "center", "label": "Me" },
            { "id": "cap1", "category": "capability", "label": "Systems", "angle": -90 }
        ],
        "links": [["center", "cap1"]],
        "galleries": {
            "cap1": [
                { "kind": "video", "x_pct": 10, "y_pct": 20, "src": "a.mp4" },
                { "kind": "preview", "x_pct": 50, "y_pct": 5, "rotation_deg": 3,
                  "url": "https://example.com", "label": "Demo" }
            ]
        }
    }"#;

    #[test]
    fn parses_nodes_links_and_galleries() {
        let catalog = parse_catalog(MINIMAL).unwrap();
        assert_eq!(catalog.map.node_count(), 2);
        assert_eq!(catalog.map.links().len(), 1);
        assert!(catalog.slides.is_empty());

        let cards = &catalog.galleries["cap1"];
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].rotation_deg, 0.0);
        assert_eq!(
            cards[0].content,
            CardContent::Video {
                src: "a.mp4".to_owned(),
                label: None,
            }
        );
        assert_eq!(cards[1].content.kind_label(), "preview");
    }

    #[test]
    fn rejects_gallery_for_unknown_node() {
        let raw = MINIMAL.replace("\"cap1\": [", "\"proj7\": [");
        let error = parse_catalog(&raw).unwrap_err();
        assert_eq!(
            error.downcast_ref::<CatalogError>(),
            Some(&CatalogError::UnknownGalleryNode("proj7".to_owned()))
        );
    }

    #[test]
    fn requires_a_center_node() {
        let raw = r#"{ "nodes": [ { "id": "cap1", "category": "capability", "label": "x" } ] }"#;
        let error = parse_catalog(raw).unwrap_err();
        assert_eq!(
            error.downcast_ref::<CatalogError>(),
            Some(&CatalogError::MissingCenter)
        );
    }

    #[test]
    fn rejects_a_second_center_node() {
        let raw = MINIMAL.replace(
            r#""id": "cap1", "category": "capability""#,
            r#""id": "cap1", "category": "center""#,
        );
        let error = parse_catalog(&raw).unwrap_err();
        assert_eq!(
            error.downcast_ref::<CatalogError>(),
            Some(&CatalogError::MultipleCenters(2))
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_catalog("{ nodes: ").is_err());
    }
}
