use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the simulation core.
///
/// `Simulator::evolve` never returns one of these: a particle at the origin
/// silently turns into NaN there. The strict path (`evolve_checked`), the
/// scenario loader and the benchmark setup report through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// A particle sits exactly on the origin, where the direction of rotation is undefined.
    #[error("particle {index} is at the origin; its direction of rotation is undefined")]
    DegenerateOrigin { index: usize },

    /// A particle carries NaN or infinite state.
    #[error("particle {index} has non-finite state (x = {x}, y = {y}, ang_vel = {ang_vel})")]
    NonFinite {
        index: usize,
        x: f64,
        y: f64,
        ang_vel: f64,
    },

    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Malformed scenario file.
    #[error("malformed scenario: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Index of the offending particle, for the particle-level variants.
    pub fn particle_index(&self) -> Option<usize> {
        match self {
            Self::DegenerateOrigin { index } | Self::NonFinite { index, .. } => Some(*index),
            _ => None,
        }
    }
}
