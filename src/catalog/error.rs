use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("node id `{0}` is defined more than once")]
    DuplicateNode(String),
    #[error("link {from} <-> {to} references unknown node `{missing}`")]
    UnknownLinkEndpoint {
        from: String,
        to: String,
        missing: String,
    },
    #[error("gallery defined for unknown node `{0}`")]
    UnknownGalleryNode(String),
    #[error("catalog has no center node")]
    MissingCenter,
    #[error("catalog has {0} center nodes, expected one")]
    MultipleCenters(usize),
}
