//! Successor generation over joint states.

use crate::moves::{Move, MoveSet};
use crate::pursuer::PursuerPolicy;
use crate::state::JointState;
use crate::traits::Walkable;

/// Enumerate the joint states reachable from `state` in one unit-cost turn.
///
/// Candidates follow [`MoveSet::candidates`] order. Moves into walls are
/// dropped, the pursuer replies via `policy`, and any resulting capture
/// state is discarded, so no capture is ever produced. The iterator borrows
/// nothing mutable; calling again restarts the enumeration.
pub fn successors<W: Walkable + ?Sized>(
    grid: &W,
    state: JointState,
    move_set: MoveSet,
    policy: PursuerPolicy,
) -> impl Iterator<Item = (Move, JointState)> + '_ {
    move_set.candidates().iter().filter_map(move |&m| {
        let evader = m.apply(state.evader);
        if !grid.is_open(evader) {
            return None;
        }
        let pursuer = policy.next_position(grid, state.pursuer, evader);
        let next = JointState::new(evader, pursuer);
        if next.is_capture() {
            return None;
        }
        Some((m, next))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::AsciiMaze;
    use pursuit_core::Point;

    fn collect(g: &AsciiMaze, s: JointState, ms: MoveSet) -> Vec<(Move, JointState)> {
        successors(g, s, ms, PursuerPolicy::default()).collect()
    }

    #[test]
    fn walls_and_bounds_filter_candidates() {
        let g = AsciiMaze::new(
            "\
.#...
.....
....#",
        );
        // Evader in the top-left corner: left/up are off-grid, right is a wall.
        let s = JointState::new(Point::new(0, 0), Point::new(4, 1));
        let moves: Vec<Move> = collect(&g, s, MoveSet::FourDirectional)
            .into_iter()
            .map(|(m, _)| m)
            .collect();
        assert_eq!(moves, vec![Move::Down]);
    }

    #[test]
    fn order_follows_candidates() {
        let g = AsciiMaze::new(
            "\
.......
.......
.......
.......
.......",
        );
        let s = JointState::new(Point::new(3, 2), Point::new(3, 0));
        let out = collect(&g, s, MoveSet::FourDirectionalPlusStay);
        let moves: Vec<Move> = out.iter().map(|(m, _)| *m).collect();
        // Up and stay both walk into the pursuer's reply.
        assert_eq!(moves, vec![Move::Left, Move::Right, Move::Down]);
        assert_eq!(out[0].1, JointState::new(Point::new(2, 2), Point::new(2, 1)));
        assert_eq!(out[2].1, JointState::new(Point::new(3, 3), Point::new(3, 2)));
    }

    #[test]
    fn captures_are_never_emitted() {
        let g = AsciiMaze::new("......");
        let s = JointState::new(Point::new(2, 0), Point::new(0, 0));
        let out = collect(&g, s, MoveSet::FourDirectionalPlusStay);
        // Left and stay both end on the pursuer's reply; right escapes.
        assert_eq!(
            out,
            vec![(Move::Right, JointState::new(Point::new(3, 0), Point::new(2, 0)))]
        );
        assert!(out.iter().all(|(_, st)| !st.is_capture()));
    }

    #[test]
    fn restartable() {
        let g = AsciiMaze::new(".....\n.....");
        let s = JointState::new(Point::new(2, 1), Point::new(0, 0));
        let a = collect(&g, s, MoveSet::FourDirectional);
        let b = collect(&g, s, MoveSet::FourDirectional);
        assert_eq!(a, b);
    }
}
