//! Error taxonomy

/// Convenience result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the renderer and texture APIs
///
/// Out-of-bounds geometry and out-of-range texture coordinates are not
/// errors: the former is silently dropped, the latter yields the
/// sentinel color.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// Mip generation was asked to start at a level that does not exist
    #[error("invalid mip start level {level}, texture has {levels} levels")]
    InvalidMipLevel { level: usize, levels: usize },

    /// A render was requested before a target buffer was bound
    #[error("no render target is bound")]
    NoTarget,
}
