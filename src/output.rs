use alloc::borrow::Cow;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::pixel::{Channels, PixelLayout};
use crate::sink::RasterSink;

/// Canonical pixels ready for a raster library. Borrowed when no reordering was needed.
#[derive(Clone, Debug)]
pub struct Normalized<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub layout: PixelLayout,
}

impl<'a> Normalized<'a> {
    pub(crate) fn new(pixels: Cow<'a, [u8]>, width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels,
            width,
            height,
            channels: layout.channels(),
            layout,
        }
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> Normalized<'static> {
        Normalized {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            channels: self.channels,
            layout: self.layout,
        }
    }

    /// Pixel buffer as an owned `Vec` (copies if borrowed).
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels.into_owned()
    }

    /// Whether the pixel data is borrowed (zero-copy from the container).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Transfer the canonical triple to an external raster capability.
    pub fn hand_off<S: RasterSink>(self, sink: &mut S) -> Result<S::Handle, S::Error> {
        let (width, height, channels) = (self.width, self.height, self.channels);
        sink.accept(self.into_vec(), width, height, channels)
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`crate::IsbError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::CanonicalPixel>(&self) -> Result<&[P], crate::IsbError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(crate::IsbError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::CanonicalPixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, crate::IsbError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::CanonicalPixel>(
        &self,
    ) -> Result<imgref::ImgVec<P>, crate::IsbError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}
