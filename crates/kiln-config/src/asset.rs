//! Size thresholds for static assets and output chunks.

use serde::Serialize;

/// Assets strictly smaller than this many bytes are inlined as data URIs.
pub const INLINE_ASSET_LIMIT: u64 = 10_000;

/// Chunks strictly smaller than this many bytes are merged into a parent.
pub const MIN_CHUNK_SIZE: u64 = 51_200;

/// Where an asset ends up after its loader runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetRoute {
    /// Embedded into the referencing module as a data URI.
    Inline,
    /// Written next to the bundle and referenced by public path.
    Emit,
}

impl AssetRoute {
    /// Route an asset of `size` bytes against an inline `limit`.
    ///
    /// The comparison is exclusive: an asset of exactly `limit` bytes is emitted.
    ///
    /// ```
    /// use kiln_config::AssetRoute;
    ///
    /// assert_eq!(AssetRoute::for_size(9_999, 10_000), AssetRoute::Inline);
    /// assert_eq!(AssetRoute::for_size(10_000, 10_000), AssetRoute::Emit);
    /// ```
    pub fn for_size(size: u64, limit: u64) -> Self {
        if size < limit {
            AssetRoute::Inline
        } else {
            AssetRoute::Emit
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetRoute::Inline => "inline",
            AssetRoute::Emit => "emit",
        }
    }
}

/// Whether a chunk of `size` bytes survives a minimum-size filter of `min`.
pub fn keeps_chunk(size: u64, min: u64) -> bool {
    size >= min
}
