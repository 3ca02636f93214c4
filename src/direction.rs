use {
    glam::IVec2,
    static_assertions::const_assert,
    std::mem::transmute,
    strum::{EnumCount, EnumIter},
};

/// The four headings the guard can face, in clockwise order.
#[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

const VECS: [IVec2; Direction::COUNT] = [IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X];

// This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2 bits,
// which is the same as masking by `MASK`
const_assert!(Direction::COUNT == 4_usize);

impl Direction {
    pub const COUNT_U8: u8 = Self::COUNT as u8;
    pub const MASK: u8 = Self::COUNT_U8 - 1_u8;

    /// The unit step vector for this heading, with `x` as the column axis and `y` as the row axis
    /// growing downward: `North` is `(0, -1)`.
    #[inline]
    pub const fn vec(self) -> IVec2 {
        VECS[self as usize]
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        // SAFETY: See `const_assert` above
        unsafe { transmute(value & Self::MASK) }
    }

    /// The heading after a single 90° clockwise turn. Four turns are the identity.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }

    /// The heading denoted by a guard marker byte in map text.
    pub const fn try_from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'^' => Some(Self::North),
            b'>' => Some(Self::East),
            b'v' => Some(Self::South),
            b'<' => Some(Self::West),
            _ => None,
        }
    }

    pub const fn marker(self) -> u8 {
        match self {
            Self::North => b'^',
            Self::East => b'>',
            Self::South => b'v',
            Self::West => b'<',
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(value: Direction) -> Self {
        value.vec()
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}
