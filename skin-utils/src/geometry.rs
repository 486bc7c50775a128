use std::fmt;

/// Multiples the client requires for each skin dimension.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Alignment {
    pub width_multiple: u32,
    pub height_multiple: u32,
}

impl Alignment {
    /// Panics if either multiple is zero. `round_up` checks the same for
    /// values built with the public fields.
    pub const fn new(width_multiple: u32, height_multiple: u32) -> Self {
        assert!(width_multiple != 0 && height_multiple != 0,
            "alignment multiples must be non-zero");
        Alignment { width_multiple, height_multiple }
    }
}

/// Canvas size anchored at the origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn new(width: u32, height: u32) -> Self {
        Geometry { width, height }
    }

    /// Round both dimensions up to the next multiple required by `alignment`.
    pub fn normalize(self, alignment: Alignment) -> Geometry {
        Geometry {
            width: round_up(self.width, alignment.width_multiple),
            height: round_up(self.height, alignment.height_multiple),
        }
    }

    pub fn is_aligned(self, alignment: Alignment) -> bool {
        self.normalize(alignment) == self
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Smallest multiple of `multiple` that is not less than `value`.
pub fn round_up(value: u32, multiple: u32) -> u32 {
    assert!(multiple != 0, "alignment multiple must be non-zero");
    match value % multiple {
        0 => value,
        rem => value + (multiple - rem),
    }
}
