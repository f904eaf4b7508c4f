//! Cell, Species and Color types for the simulation grid.

use std::fmt;

/// Discriminant values are the ids the host passes across the WASM boundary. Do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Species {
    Empty = 0,
    Sand = 1,
    Water = 2,
}

impl Species {
    /// Unknown ids map to `None`; callers drop them.
    #[must_use]
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Empty),
            1 => Some(Self::Sand),
            2 => Some(Self::Water),
            _ => None,
        }
    }

    /// Color a freshly spawned particle of this species gets.
    /// Empty has none: its color is the configured background.
    #[must_use]
    pub fn default_color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Sand => Some(Color::ORANGE),
            Self::Water => Some(Color::SKY_BLUE),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
        }
    }
}

/// RGBA8 color, laid out the way the presentation buffer expects it.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BACKGROUND: Self = Self::rgb(0, 82, 172);
    pub const ORANGE: Self = Self::rgb(255, 161, 0);
    pub const SKY_BLUE: Self = Self::rgb(102, 191, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Per-particle velocity. Only `y` is integrated; it never affects how far a particle moves.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub species: Species,
    pub color: Color,
    pub velocity: Velocity,
    /// Ticks this particle has been dispatched, saturating.
    pub lifetime: u16,
    /// Generation in which this cell last moved.
    pub clock: u8,
    /// Whether that move was upward. A particle that rose may still fall back
    /// within the same generation, but not rise again.
    pub rising: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty(Color::BACKGROUND)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.species)
    }
}

impl Cell {
    #[must_use]
    pub fn new(species: Species, color: Color) -> Self {
        Self {
            species,
            color,
            velocity: Velocity::default(),
            lifetime: 0,
            clock: 0,
            rising: false,
        }
    }

    #[must_use]
    pub fn empty(background: Color) -> Self {
        Self::new(Species::Empty, background)
    }

    /// A particle carrying its species' default color.
    #[must_use]
    pub fn particle(species: Species) -> Self {
        Self::new(species, species.default_color().unwrap_or(Color::BACKGROUND))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species == Species::Empty
    }
}
