use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation kernel.
///
/// The math and integration layers are total apart from indexed component
/// access; the remaining variants come from loading scenario files.
#[derive(Debug, Error)]
pub enum Error {
    /// Vector component index outside {0, 1, 2}.
    #[error("vector index {index} is out of range")]
    OutOfRange { index: usize },

    /// Reading a scenario file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for `ScenarioConfig`.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
