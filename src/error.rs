use alloc::string::String;
use enough::StopReason;

/// Errors from ISB decoding and channel normalization.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IsbError {
    #[error("buffer too small for ISB header: {len} bytes, need at least 16")]
    TooSmall { len: usize },

    #[error("bad ISB signature: {found:02x?}")]
    BadSignature { found: [u8; 3] },

    #[error("unsupported ISB version {found} (only version {supported} is supported)")]
    UnsupportedVersion { found: u8, supported: u8 },

    #[error("zero image dimension: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("bits per channel {bits} is not a multiple of 8")]
    BadBitDepth { bits: u8 },

    /// Lengths are whole-container lengths (header included) when raised by
    /// decoding, and payload lengths when raised by
    /// [`ImageDescriptor::new`](crate::ImageDescriptor::new) or
    /// [`ImageDescriptor::from_canonical`](crate::ImageDescriptor::from_canonical).
    /// A decoded header whose size does not fit in `usize` reports
    /// `expected == usize::MAX`.
    #[error("size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("unsupported primitive type tag {tag} (only unsigned integer samples are supported)")]
    UnsupportedPrimitive { tag: u8 },

    #[error("unsupported bit depth {bits} (supported: 8, 16)")]
    UnsupportedBitDepth { bits: u8 },

    #[error("unsupported channel count {channels} (supported: 1, 3, 4)")]
    UnsupportedChannelCount { channels: u8 },

    /// Payload size overflows `usize` while constructing a descriptor.
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for IsbError {
    fn from(r: StopReason) -> Self {
        IsbError::Cancelled(r)
    }
}
