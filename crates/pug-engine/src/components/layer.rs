/// Render layer: controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, Hud last.
/// Default layer is `Objects`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Objects = 1,
    Debug = 2,
    Hud = 3,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 4;

    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Objects),
            2 => Some(Self::Debug),
            3 => Some(Self::Hud),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
