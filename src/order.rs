/// Sample arrangement declared by the `channel_order` header byte.
///
/// Every tag round-trips: unknown values are kept in [`ChannelOrder::Other`]
/// and are treated as already canonical by normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// R, G, B (canonical 3-channel order).
    Rgb,
    /// B, G, R.
    Bgr,
    /// R, G, B, A (canonical 4-channel order).
    Rgba,
    /// B, G, R, A.
    Bgra,
    /// A, R, G, B.
    Argb,
    /// A, B, G, R.
    Abgr,
    /// Any other tag. Passed through unchanged.
    Other(u8),
}

impl ChannelOrder {
    pub const RGB_TAG: u8 = 0x02;
    pub const BGR_TAG: u8 = 0x03;
    pub const RGBA_TAG: u8 = 0x04;
    pub const BGRA_TAG: u8 = 0x05;
    pub const ARGB_TAG: u8 = 0x06;
    pub const ABGR_TAG: u8 = 0x07;

    pub fn from_tag(tag: u8) -> Self {
        match tag {
            Self::RGB_TAG => Self::Rgb,
            Self::BGR_TAG => Self::Bgr,
            Self::RGBA_TAG => Self::Rgba,
            Self::BGRA_TAG => Self::Bgra,
            Self::ARGB_TAG => Self::Argb,
            Self::ABGR_TAG => Self::Abgr,
            other => Self::Other(other),
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Self::Rgb => Self::RGB_TAG,
            Self::Bgr => Self::BGR_TAG,
            Self::Rgba => Self::RGBA_TAG,
            Self::Bgra => Self::BGRA_TAG,
            Self::Argb => Self::ARGB_TAG,
            Self::Abgr => Self::ABGR_TAG,
            Self::Other(tag) => tag,
        }
    }

    /// Whether normalizing `channels`-channel data in this order moves bytes.
    ///
    /// Reordering only applies when the channel count matches the order:
    /// 3 for [`Bgr`](Self::Bgr), 4 for [`Bgra`](Self::Bgra),
    /// [`Argb`](Self::Argb) and [`Abgr`](Self::Abgr).
    pub fn needs_reorder(self, channels: u8) -> bool {
        matches!(
            (self, channels),
            (Self::Bgr, 3) | (Self::Bgra, 4) | (Self::Argb, 4) | (Self::Abgr, 4)
        )
    }
}

impl From<u8> for ChannelOrder {
    fn from(tag: u8) -> Self {
        Self::from_tag(tag)
    }
}

impl From<ChannelOrder> for u8 {
    fn from(order: ChannelOrder) -> Self {
        order.tag()
    }
}
