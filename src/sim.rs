use {
    crate::{Cell, Direction, PatrolMap},
    bitvec::prelude::*,
    glam::IVec2,
    strum::EnumCount,
};

/// The guard's full state. Motion is a pure function of this pair and the map,
/// so a revisited `GuardState` proves the walk repeats forever.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GuardState {
    pub pos: IVec2,
    pub dir: Direction,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatrolOutcome {
    Exited { distinct_positions: usize },
    Looped,
}

/// A single walk of the guard over a map, with an optional hypothetical
/// obstruction overlaid on one cell.
///
/// Cycle detection is exact: the state space has `area × 4` elements and the
/// transition function is deterministic and total on it, so the walk either
/// revisits a state (`Looped`) or exits the map within `area × 4 + 1`
/// transitions. No step budget or clock is involved.
pub struct Patrol<'m> {
    map: &'m PatrolMap,
    hypothesis: Option<IVec2>,
    state: GuardState,
    visited: BitVec,
    seen: BitVec,
    steps: usize,
}

impl<'m> Patrol<'m> {
    pub fn new(map: &'m PatrolMap) -> Self {
        Self::with_hypothesis(map, None)
    }

    /// A walk over `map` with `obstruction` treated as blocked. The base map
    /// is untouched; the overlay cell is checked before it on every lookup.
    pub fn with_obstruction(map: &'m PatrolMap, obstruction: IVec2) -> Self {
        debug_assert_ne!(
            obstruction,
            map.start().pos,
            "hypothetical obstruction placed on the guard's start cell"
        );

        Self::with_hypothesis(map, Some(obstruction))
    }

    fn with_hypothesis(map: &'m PatrolMap, hypothesis: Option<IVec2>) -> Self {
        let state: GuardState = map.start();
        let mut visited: BitVec = bitvec![0; map.area()];
        let mut seen: BitVec = bitvec![0; map.area() * Direction::COUNT];

        visited.set(map.index_from_pos(state.pos), true);
        seen.set(Self::state_index(map, state), true);

        Self {
            map,
            hypothesis,
            state,
            visited,
            seen,
            steps: 0_usize,
        }
    }

    fn state_index(map: &PatrolMap, state: GuardState) -> usize {
        map.index_from_pos(state.pos) * Direction::COUNT + state.dir as usize
    }

    fn is_obstructed(&self, pos: IVec2) -> bool {
        self.hypothesis == Some(pos) || self.map.cell(pos) == Some(Cell::Obstruction)
    }

    #[inline]
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Transitions performed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn distinct_positions(&self) -> usize {
        self.visited.count_ones()
    }

    pub fn visited_positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.visited
            .iter_ones()
            .map(|index: usize| self.map.pos_from_index(index))
    }

    /// Performs one transition: turn clockwise in place if the cell ahead is
    /// obstructed, otherwise advance. Returns the terminal outcome once the
    /// guard steps off the map or revisits a state, `None` while she walks on.
    pub fn step(&mut self) -> Option<PatrolOutcome> {
        let ahead: IVec2 = self.state.pos + self.state.dir.vec();

        self.steps += 1_usize;

        if self.is_obstructed(ahead) {
            self.state.dir = self.state.dir.next();
        } else if self.map.contains(ahead) {
            self.state.pos = ahead;
            self.visited.set(self.map.index_from_pos(ahead), true);
        } else {
            return Some(PatrolOutcome::Exited {
                distinct_positions: self.distinct_positions(),
            });
        }

        self.seen
            .replace(Self::state_index(self.map, self.state), true)
            .then_some(PatrolOutcome::Looped)
    }

    pub fn run(&mut self) -> PatrolOutcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// The map with every visited cell painted `X` and the start cell shown as
    /// the guard's initial heading marker.
    pub fn route_string(&self) -> String {
        let width: usize = self.map.dimensions().x as usize;
        let start: GuardState = self.map.start();
        let start_index: usize = self.map.index_from_pos(start.pos);
        let mut string: String = String::with_capacity(self.map.area() + self.map.area() / width);

        for (index, cell) in self.map.cells().iter().enumerate() {
            if index != 0_usize && index % width == 0_usize {
                string.push('\n');
            }

            string.push(if index == start_index {
                start.dir.marker() as char
            } else if self.visited[index] {
                'X'
            } else {
                *cell as u8 as char
            });
        }

        string.push('\n');

        string
    }
}
