/// Channel count as understood by the downstream raster capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Single channel grayscale.
    Gray = 1,
    /// Three channels, canonical R, G, B order.
    Rgb = 3,
    /// Four channels, canonical R, G, B, A order.
    Rgba = 4,
}

impl Channels {
    /// Map a container channel count. Only 1, 3 and 4 are representable.
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::Gray),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }

    /// Number of interleaved samples per pixel.
    pub fn count(self) -> usize {
        self as usize
    }
}

/// Canonical pixel memory layout after normalization.
///
/// 16-bit samples keep the byte order they had in the container.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// Single channel, 16-bit grayscale.
    Gray16,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 3 channels, 16-bit RGB.
    Rgb16,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
    /// 4 channels, 16-bit RGBA.
    Rgba16,
}

impl PixelLayout {
    /// Layout for a channel set at 8 or 16 bits per channel.
    pub fn new(channels: Channels, bits_per_channel: u8) -> Option<Self> {
        match (channels, bits_per_channel) {
            (Channels::Gray, 8) => Some(Self::Gray8),
            (Channels::Gray, 16) => Some(Self::Gray16),
            (Channels::Rgb, 8) => Some(Self::Rgb8),
            (Channels::Rgb, 16) => Some(Self::Rgb16),
            (Channels::Rgba, 8) => Some(Self::Rgba8),
            (Channels::Rgba, 16) => Some(Self::Rgba16),
            _ => None,
        }
    }

    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        self.channels().count() * self.bytes_per_channel()
    }

    /// Bytes per single channel sample.
    pub fn bytes_per_channel(&self) -> usize {
        match self {
            Self::Gray8 | Self::Rgb8 | Self::Rgba8 => 1,
            Self::Gray16 | Self::Rgb16 | Self::Rgba16 => 2,
        }
    }

    /// Channel set.
    pub fn channels(&self) -> Channels {
        match self {
            Self::Gray8 | Self::Gray16 => Channels::Gray,
            Self::Rgb8 | Self::Rgb16 => Channels::Rgb,
            Self::Rgba8 | Self::Rgba16 => Channels::Rgba,
        }
    }
}

/// Typed pixels that a normalized buffer can be viewed as.
#[cfg(feature = "rgb")]
pub trait CanonicalPixel: Copy + 'static {
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl CanonicalPixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl CanonicalPixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
