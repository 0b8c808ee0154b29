//! Pixel-art sprite table.
//!
//! Sprites are `'static` string grids: `#` is a filled cell, `X` a highlight
//! cell (the dead dino's eye), anything else is empty. They are shared
//! read-only by every engine instance.

/// Virtual pixels per sprite cell.
pub const PIXEL_SCALE: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled,
    Highlight,
}

impl Cell {
    fn from_byte(b: u8) -> Cell {
        match b {
            b'#' => Cell::Filled,
            b'X' => Cell::Highlight,
            _ => Cell::Empty,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Sprite {
    pub rows: &'static [&'static str],
}

impl Sprite {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// Width in virtual pixels (first row decides).
    pub fn width(&self) -> f64 {
        self.rows.first().map_or(0, |r| r.len()) as f64 * PIXEL_SCALE
    }

    pub fn height(&self) -> f64 {
        self.rows.len() as f64 * PIXEL_SCALE
    }

    /// Non-empty cells as `(col, row, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.bytes()
                .enumerate()
                .map(move |(c, b)| (c, r, Cell::from_byte(b)))
                .filter(|(_, _, cell)| *cell != Cell::Empty)
        })
    }
}

pub static DINO_RUN_1: Sprite = Sprite::new(&[
    "......####..",
    ".....#.####.",
    ".....######.",
    ".....###....",
    ".#..########",
    "##.########.",
    "###.#######.",
    ".##########.",
    "..#########.",
    "...#######..",
    "....#####...",
    ".....###....",
    ".....#.#....",
    "....#...#...",
]);

pub static DINO_RUN_2: Sprite = Sprite::new(&[
    "......####..",
    ".....#.####.",
    ".....######.",
    ".....###....",
    ".#..########",
    "##.########.",
    "###.#######.",
    ".##########.",
    "..#########.",
    "...#######..",
    "....#####...",
    ".....###....",
    ".....#..#...",
    ".....#..#...",
]);

pub static DINO_JUMP: Sprite = Sprite::new(&[
    "......####..",
    ".....#.####.",
    ".....######.",
    ".....###....",
    ".#..########",
    "##.########.",
    "###.#######.",
    ".##########.",
    "..#########.",
    "...#######..",
    "....#####...",
    ".....###....",
    ".....#.#....",
    ".....#..#...",
]);

pub static DINO_DUCK_1: Sprite = Sprite::new(&[
    "..........####..",
    ".........#.####.",
    ".........######.",
    "#####....###....",
    "########.######.",
    ".##############.",
    "..############..",
    "...###.###......",
    "...#.....#......",
]);

pub static DINO_DUCK_2: Sprite = Sprite::new(&[
    "..........####..",
    ".........#.####.",
    ".........######.",
    "#####....###....",
    "########.######.",
    ".##############.",
    "..############..",
    "...###.###......",
    "....#.....#.....",
]);

pub static DINO_DEAD: Sprite = Sprite::new(&[
    "......####..",
    ".....#X####.",
    ".....######.",
    ".....###....",
    ".#..########",
    "##.########.",
    "###.#######.",
    ".##########.",
    "..#########.",
    "...#######..",
    "....#####...",
    ".....###....",
    ".....#.#....",
    "....#...#...",
]);

pub static CACTUS_SMALL: Sprite = Sprite::new(&[
    "..##..",
    "..##..",
    "..##..",
    "..##..",
    "#.##..",
    "#.##.#",
    "#.##.#",
    "####.#",
    ".###.#",
    "..####",
    "..##..",
    "..##..",
    "..##..",
    "..##..",
    "..##..",
]);

pub static CACTUS_LARGE: Sprite = Sprite::new(&[
    "...##...",
    "...##...",
    "...##...",
    "...##...",
    "...##...",
    "#..##..#",
    "#..##..#",
    "#..##..#",
    "#.###..#",
    "#.####.#",
    "######.#",
    ".#####.#",
    "..#####.",
    "...##...",
    "...##...",
    "...##...",
    "...##...",
    "...##...",
    "...##...",
    "...##...",
]);

pub static CACTUS_GROUP: Sprite = Sprite::new(&[
    "..##..##..",
    "..##..##..",
    "..##..##..",
    "#.##..##.#",
    "#.##.###.#",
    "####.###.#",
    ".########.",
    "..######..",
    "..##..##..",
    "..##..##..",
    "..##..##..",
    "..##..##..",
]);

pub static BIRD_UP: Sprite = Sprite::new(&[
    "....#.......",
    "...##.......",
    "..###.......",
    ".####.......",
    "#.######### ",
    "..##########",
    "............",
]);

pub static BIRD_DOWN: Sprite = Sprite::new(&[
    "............",
    "..##########",
    "#.######### ",
    ".####.......",
    "..###.......",
    "...##.......",
    "....#.......",
]);

pub static CLOUD: Sprite = Sprite::new(&[
    "...######...",
    ".##########.",
    "############",
    "############",
    ".##########.",
]);
