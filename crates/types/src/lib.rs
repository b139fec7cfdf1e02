//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input adapters, journal).
//!
//! # Board Dimensions
//!
//! The playfield is fixed at compile time:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (4, 0) for every shape
//!
//! # Turn Timing
//!
//! Timing values are in milliseconds and only matter to the driver:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TURN_MS` | 500 | Time a player gets per turn before gravity applies |
//! | `DEFAULT_BOT_DELAY_MS` | 250 | Think time of the random player |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, Point, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let shape = ShapeKind::from_str("t").unwrap();
//! assert_eq!(shape, ShapeKind::T);
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(Point::new(4, 0).offset(dir.offset()), Point::new(3, 0));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Anchor every new block starts from
pub const SPAWN_ANCHOR: Point = Point::new(4, 0);

/// Default per-turn input budget in milliseconds
pub const DEFAULT_TURN_MS: u64 = 500;

/// Default think time of the random player in milliseconds
pub const DEFAULT_BOT_DELAY_MS: u64 = 250;

/// Board cell: `None` is empty, `Some(kind)` is occupied by that shape.
///
/// The shape tag only matters for rendering; legality checks look at occupancy.
pub type Cell = Option<ShapeKind>;

/// The seven tetromino shapes
///
/// Shapes never rotate; each one is a fixed set of four offsets from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    Z,
    S,
    L,
    J,
    O,
    I,
}

impl ShapeKind {
    /// All shapes, in table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::I,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "o" => Some(ShapeKind::O),
            "i" => Some(ShapeKind::I),
            _ => None,
        }
    }

    /// Parse the single-character cell symbol used by the text grid format
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'T' => Some(ShapeKind::T),
            'Z' => Some(ShapeKind::Z),
            'S' => Some(ShapeKind::S),
            'L' => Some(ShapeKind::L),
            'J' => Some(ShapeKind::J),
            'O' => Some(ShapeKind::O),
            'I' => Some(ShapeKind::I),
            _ => None,
        }
    }

    /// Uppercase letter, as written into text grids
    pub fn symbol(&self) -> char {
        match self {
            ShapeKind::T => 'T',
            ShapeKind::Z => 'Z',
            ShapeKind::S => 'S',
            ShapeKind::L => 'L',
            ShapeKind::J => 'J',
            ShapeKind::O => 'O',
            ShapeKind::I => 'I',
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::O => "o",
            ShapeKind::I => "i",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Move requests a player can make
///
/// `None` is an explicit no-op turn; gravity still applies afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    Right,
    Down,
    #[default]
    None,
}

impl Direction {
    /// All directions
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::None,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("no move"), Some(Direction::None));
    /// assert_eq!(Direction::from_str("up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "none" | "no move" | "-" => Some(Direction::None),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::None => "none",
        }
    }

    /// One-cell displacement for this direction as (dx, dy)
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::None => (0, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board coordinate: `x` is the column, `y` the row (0 = top).
///
/// Signed so candidate positions left of or below the board stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy)
    pub const fn offset(self, delta: (i16, i16)) -> Self {
        Self {
            x: self.x + delta.0,
            y: self.y + delta.1,
        }
    }

    /// Whether the point lies on the board
    pub const fn in_bounds(self) -> bool {
        self.x >= 0
            && (self.x as usize) < BOARD_WIDTH
            && self.y >= 0
            && (self.y as usize) < BOARD_HEIGHT
    }

    /// Flat row-major index, or `None` when off the board
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some((self.y as usize) * BOARD_WIDTH + (self.x as usize))
        } else {
            None
        }
    }
}

impl From<(i16, i16)> for Point {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
