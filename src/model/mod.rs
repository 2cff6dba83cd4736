use thiserror::Error;

pub mod coordinate;
pub mod graph;
pub mod policy;

pub use coordinate::{Coordinate, Pattern};
pub use graph::DependencyNode;
pub use policy::{DiagnosticScope, Policy};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading file: {0}")]
    IO(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Missing TOML key `{0}` while parsing")]
    MissingKey(String),
    #[error("Invalid coordinate `{0}`, expected `group:artifact:version`")]
    InvalidCoordinate(String),
    #[error("Unsupported graph file version {0}")]
    UnsupportedGraphVersion(toml::Value),
    #[error("Coordinate {0} is listed more than once in the graph file")]
    DuplicateEntry(Coordinate),
    #[error("Dependency cycle detected at {0}")]
    Cycle(Coordinate),
}
