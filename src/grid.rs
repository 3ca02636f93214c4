use {
    crate::{Direction, GuardState},
    glam::IVec2,
};

/// A single map cell. The guard marker isn't a cell: parsing records it as the
/// start state and stores the cell underneath it as `Open`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Cell {
    Open = b'.',
    Obstruction = b'#',
}

#[derive(Debug, Eq, PartialEq)]
pub enum MapError {
    EmptyMap,
    NotAscii {
        line_number: usize,
    },
    UnevenRow {
        line_number: usize,
        len: usize,
        expected: usize,
    },
    UnknownCharacter {
        pos: IVec2,
        character: char,
    },
    MissingGuard,
    DuplicateGuard {
        first: IVec2,
        second: IVec2,
    },
}

/// A rectangular patrol map: a dense row-major cell array plus the guard's
/// start state parsed out of the map text.
///
/// The map is never mutated after parsing. Hypothetical obstructions are an
/// overlay on the simulator, not a cell write, so concurrent simulations can
/// share one map by reference.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Debug)]
pub struct PatrolMap {
    cells: Vec<Cell>,
    dimensions: IVec2,
    start: GuardState,
}

impl PatrolMap {
    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn area(&self) -> usize {
        (self.dimensions.x * self.dimensions.y) as usize
    }

    #[inline]
    pub fn start(&self) -> GuardState {
        self.start
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        (pos.cmpge(IVec2::ZERO) & pos.cmplt(self.dimensions)).all()
    }

    /// Row-major linear index of a contained position. Panics with the
    /// offending position if it lies outside the map.
    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        self.try_index_from_pos(pos)
            .unwrap_or_else(|| panic!("position {pos} is outside map of {}", self.dimensions))
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.dimensions.x as usize + pos.x as usize)
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        let width: usize = self.dimensions.x as usize;

        IVec2::new((index % width) as i32, (index / width) as i32)
    }

    /// The cell at `pos`, or `None` outside the map.
    pub fn cell(&self, pos: IVec2) -> Option<Cell> {
        self.try_index_from_pos(pos)
            .map(|index: usize| self.cells[index])
    }

    /// All `Open` positions except the guard's start cell, in row-major order.
    /// These are the candidate placements for a hypothetical obstruction.
    pub fn open_positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        let start_pos: IVec2 = self.start.pos;

        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| {
                (*cell == Cell::Open).then(|| self.pos_from_index(index))
            })
            .filter(move |pos| *pos != start_pos)
    }
}

impl<'s> TryFrom<&'s str> for PatrolMap {
    type Error = MapError;

    fn try_from(map_str: &'s str) -> Result<Self, Self::Error> {
        use MapError as Error;

        let mut cells: Vec<Cell> = Vec::new();
        let mut width: Option<usize> = None;
        let mut height: usize = 0_usize;
        let mut start: Option<GuardState> = None;

        for (line_number, line) in map_str.lines().enumerate() {
            if !line.is_ascii() {
                return Err(Error::NotAscii { line_number });
            }

            let expected: usize = *width.get_or_insert(line.len());

            if line.len() != expected {
                return Err(Error::UnevenRow {
                    line_number,
                    len: line.len(),
                    expected,
                });
            }

            for (column, byte) in line.bytes().enumerate() {
                let pos: IVec2 = IVec2::new(column as i32, line_number as i32);

                cells.push(match byte {
                    b'.' => Cell::Open,
                    b'#' => Cell::Obstruction,
                    _ => {
                        let dir: Direction =
                            Direction::try_from_marker(byte).ok_or(Error::UnknownCharacter {
                                pos,
                                character: byte as char,
                            })?;

                        if let Some(first) = start {
                            return Err(Error::DuplicateGuard {
                                first: first.pos,
                                second: pos,
                            });
                        }

                        start = Some(GuardState { pos, dir });

                        Cell::Open
                    }
                });
            }

            height += 1_usize;
        }

        let width: usize = width.unwrap_or_default();

        if width == 0_usize || height == 0_usize {
            return Err(Error::EmptyMap);
        }

        let start: GuardState = start.ok_or(Error::MissingGuard)?;

        Ok(Self {
            cells,
            dimensions: IVec2::new(width as i32, height as i32),
            start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP_STR: &str = "\
        ....#.....\n\
        .........#\n\
        ..........\n\
        ..#.......\n\
        .......#..\n\
        ..........\n\
        .#..^.....\n\
        ........#.\n\
        #.........\n\
        ......#...\n";

    fn map() -> PatrolMap {
        MAP_STR.try_into().unwrap()
    }

    #[test]
    fn test_try_from_str() {
        let map: PatrolMap = map();

        assert_eq!(map.dimensions(), IVec2::new(10_i32, 10_i32));
        assert_eq!(
            map.start(),
            GuardState {
                pos: IVec2::new(4_i32, 6_i32),
                dir: Direction::North,
            }
        );
        assert_eq!(
            map.cells()
                .iter()
                .filter(|cell| **cell == Cell::Obstruction)
                .count(),
            8_usize
        );

        // The guard marker cell is stored as open.
        assert_eq!(map.cell(IVec2::new(4_i32, 6_i32)), Some(Cell::Open));
    }

    #[test]
    fn test_try_from_str_errors() {
        use MapError as Error;

        assert_eq!(PatrolMap::try_from(""), Err(Error::EmptyMap));
        assert_eq!(PatrolMap::try_from("\n\n"), Err(Error::EmptyMap));
        assert_eq!(
            PatrolMap::try_from("..^\n....\n"),
            Err(Error::UnevenRow {
                line_number: 1_usize,
                len: 4_usize,
                expected: 3_usize,
            })
        );
        assert_eq!(
            PatrolMap::try_from("..é\n...\n"),
            Err(Error::NotAscii {
                line_number: 0_usize,
            })
        );
        assert_eq!(
            PatrolMap::try_from(".x.\n.^.\n"),
            Err(Error::UnknownCharacter {
                pos: IVec2::new(1_i32, 0_i32),
                character: 'x',
            })
        );
        assert_eq!(PatrolMap::try_from("...\n.#.\n"), Err(Error::MissingGuard));
        assert_eq!(
            PatrolMap::try_from(".^.\n..v\n"),
            Err(Error::DuplicateGuard {
                first: IVec2::new(1_i32, 0_i32),
                second: IVec2::new(2_i32, 1_i32),
            })
        );
    }

    #[test]
    fn test_contains_and_indexing() {
        let map: PatrolMap = map();

        assert!(map.contains(IVec2::ZERO));
        assert!(map.contains(IVec2::new(9_i32, 9_i32)));
        assert!(!map.contains(IVec2::new(10_i32, 0_i32)));
        assert!(!map.contains(IVec2::new(0_i32, -1_i32)));
        assert_eq!(map.try_index_from_pos(IVec2::new(-1_i32, 0_i32)), None);

        for index in [0_usize, 9_usize, 10_usize, 99_usize] {
            assert_eq!(map.index_from_pos(map.pos_from_index(index)), index);
        }
    }

    #[test]
    fn test_open_positions_exclude_start_and_obstructions() {
        let map: PatrolMap = map();
        let open_positions: Vec<IVec2> = map.open_positions().collect();

        // 100 cells, 8 obstructions, 1 start cell.
        assert_eq!(open_positions.len(), 91_usize);
        assert!(!open_positions.contains(&map.start().pos));
        assert!(open_positions
            .iter()
            .all(|pos| map.cell(*pos) == Some(Cell::Open)));

        // Row-major order.
        let mut sorted: Vec<IVec2> = open_positions.clone();

        sorted.sort_by_key(|pos| (pos.y, pos.x));
        assert_eq!(open_positions, sorted);
    }
}
