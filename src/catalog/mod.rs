mod error;
mod gallery;
mod graph;
mod parse;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use error::CatalogError;
pub use gallery::{CardContent, CardDescriptor, Slide};
pub use graph::{Link, MapNode, NodeCategory, SystemMap};

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Clone, Debug)]
pub struct Catalog {
    pub map: SystemMap,
    pub galleries: HashMap<String, Vec<CardDescriptor>>,
    pub slides: Vec<Slide>,
}

pub fn embedded_catalog() -> Result<Catalog> {
    parse::parse_catalog(EMBEDDED_CATALOG).context("embedded catalog is invalid")
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    parse::parse_catalog(&raw).with_context(|| format!("failed to parse catalog {}", path.display()))
}
