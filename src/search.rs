use {
    crate::{Patrol, PatrolMap, PatrolOutcome},
    glam::IVec2,
    rayon::prelude::*,
};

/// Counts the open cells whose obstruction would trap the guard in a loop.
///
/// Every open cell except the guard's start cell is tested by a full
/// re-simulation with that one cell overlaid as blocked. The runs are mutually
/// independent and share the base map read-only, so they're distributed over
/// rayon's pool; the count is order-independent.
pub fn count_loop_inducing_obstructions(map: &PatrolMap) -> usize {
    let candidates: Vec<IVec2> = map.open_positions().collect();

    candidates
        .into_par_iter()
        .filter(|candidate: &IVec2| {
            Patrol::with_obstruction(map, *candidate).run() == PatrolOutcome::Looped
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_STR: &str = "\
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

    #[test]
    fn test_count_loop_inducing_obstructions() {
        let map: PatrolMap = EXAMPLE_STR.try_into().unwrap();

        assert_eq!(count_loop_inducing_obstructions(&map), 6_usize);
    }

    #[test]
    fn test_search_matches_sequential_recheck() {
        let map: PatrolMap = EXAMPLE_STR.try_into().unwrap();
        let sequential: usize = map
            .open_positions()
            .filter(|candidate: &IVec2| {
                Patrol::with_obstruction(&map, *candidate).run() == PatrolOutcome::Looped
            })
            .count();

        assert_eq!(count_loop_inducing_obstructions(&map), sequential);
    }

    #[test]
    fn test_search_leaves_map_untouched() {
        let map: PatrolMap = EXAMPLE_STR.try_into().unwrap();
        let before: PatrolMap = map.clone();

        count_loop_inducing_obstructions(&map);

        assert_eq!(map, before);
    }

    #[test]
    fn test_no_candidates_loop_on_open_map() {
        let map: PatrolMap = "...\n.^.\n...\n".try_into().unwrap();

        assert_eq!(count_loop_inducing_obstructions(&map), 0_usize);
    }
}
