//! Anchor points governing transition geometry.

/// An edge, corner or center reference point on an actor.
///
/// The numeric codes are part of the public contract: orchestrators often
/// store transition anchors as plain integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Anchor {
    #[default]
    Center = 0,
    Top = 1,
    Bottom = 2,
    Left = 3,
    Right = 4,
    TopLeft = 5,
    TopRight = 6,
    BottomLeft = 7,
    BottomRight = 8,
}

impl Anchor {
    /// Numeric code of this anchor.
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Anchor::TopLeft | Anchor::TopRight | Anchor::BottomLeft | Anchor::BottomRight
        )
    }

    /// Whether this is the top or bottom edge.
    pub fn is_vertical_edge(self) -> bool {
        matches!(self, Anchor::Top | Anchor::Bottom)
    }

    /// Whether this is the left or right edge.
    pub fn is_horizontal_edge(self) -> bool {
        matches!(self, Anchor::Left | Anchor::Right)
    }
}

impl TryFrom<i32> for Anchor {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Anchor::Center,
            1 => Anchor::Top,
            2 => Anchor::Bottom,
            3 => Anchor::Left,
            4 => Anchor::Right,
            5 => Anchor::TopLeft,
            6 => Anchor::TopRight,
            7 => Anchor::BottomLeft,
            8 => Anchor::BottomRight,
            other => return Err(other),
        })
    }
}

/// A raw anchor value as supplied by a caller.
///
/// May hold codes outside the known [`Anchor`] set; each transition family
/// decides whether to clamp or reject them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorCode(pub i32);

impl AnchorCode {
    /// Resolve to a known anchor, if the code is recognized.
    pub fn resolve(self) -> Option<Anchor> {
        Anchor::try_from(self.0).ok()
    }

    /// Clamp into the edge range `[Top, Right]`.
    ///
    /// Center and corner codes are not rejected: anything below `Top` maps
    /// to `Top`, anything above `Right` maps to `Right`.
    pub fn clamp_to_edge(self) -> Anchor {
        match self.0.clamp(Anchor::Top.code(), Anchor::Right.code()) {
            1 => Anchor::Top,
            2 => Anchor::Bottom,
            3 => Anchor::Left,
            _ => Anchor::Right,
        }
    }
}

impl From<Anchor> for AnchorCode {
    fn from(anchor: Anchor) -> Self {
        Self(anchor.code())
    }
}

impl From<i32> for AnchorCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}
