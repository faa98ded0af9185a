//! Lockstep dual A* search over sliding tile boards.
//!
//! Two searches race each other: one seeded from the initial board, one from
//! its twin. Exactly one of the two can ever reach the goal, because a board
//! and its twin sit in disjoint halves of the puzzle's state space, so the
//! first search to dequeue its goal settles solvability and the race always
//! terminates. The winning search's node tree then yields the optimal path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::board::Board;

/// One state in a search tree.
///
/// Nodes live in the owning search's arena; `parent` indexes into that arena
/// and is `None` only for the seed. The priority is moves so far plus the
/// Manhattan distance, computed once here so the frontier never recomputes
/// it.
struct SearchNode {
    board: Board,
    moves: u32,
    parent: Option<usize>,
    priority: u32,
}

/// Frontier entry, ordered as a min-heap on (priority, insertion order).
///
/// `BinaryHeap` pops its maximum, so both comparisons are reversed. `seq`
/// keeps the tie-break stable: of two equal-priority entries, the one
/// inserted first pops first.
#[derive(PartialEq, Eq)]
struct FrontierEntry {
    priority: u32,
    seq: u64,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of driving a search by one iteration.
enum Step {
    FoundGoal(usize),
    InProgress,
    Exhausted,
}

/// A single A* search: node arena, priority frontier, and the history of
/// boards already expanded.
struct Search {
    arena: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
    expanded: FxHashSet<Board>,
    next_seq: u64,
}

impl Search {
    fn seeded(initial: Board) -> Self {
        let mut search = Self {
            arena: Vec::new(),
            frontier: BinaryHeap::new(),
            expanded: FxHashSet::default(),
            next_seq: 0,
        };
        search.enqueue(initial, 0, None);
        search
    }

    fn enqueue(&mut self, board: Board, moves: u32, parent: Option<usize>) {
        let node = SearchNode {
            priority: moves + board.manhattan(),
            board,
            moves,
            parent,
        };
        self.frontier.push(FrontierEntry {
            priority: node.priority,
            seq: self.next_seq,
            node: self.arena.len(),
        });
        self.arena.push(node);
        self.next_seq += 1;
    }

    /// Dequeues the minimum-priority node, goal-checks it, and expands it.
    ///
    /// Expansion skips the neighbor equal to the parent board (the move that
    /// would undo the previous one) and any board this search has already
    /// expanded.
    fn advance(&mut self) -> Step {
        let Some(entry) = self.frontier.pop() else {
            return Step::Exhausted;
        };
        let node = entry.node;
        let (board, moves, parent) = {
            let n = &self.arena[node];
            (n.board.clone(), n.moves, n.parent)
        };
        if board.is_goal() {
            return Step::FoundGoal(node);
        }
        if !self.expanded.insert(board.clone()) {
            // a route at least as cheap already expanded this board
            return Step::InProgress;
        }
        let undo = parent.map(|p| self.arena[p].board.clone());
        for neighbor in board.neighbors() {
            if undo.as_ref() == Some(&neighbor) {
                continue;
            }
            if self.expanded.contains(&neighbor) {
                continue;
            }
            self.enqueue(neighbor, moves + 1, Some(node));
        }
        Step::InProgress
    }

    /// Boards from the seed to `node`, following parent links.
    fn path_to(&self, node: usize) -> Vec<Board> {
        let mut path = Vec::new();
        let mut cursor = Some(node);
        while let Some(idx) = cursor {
            let n = &self.arena[idx];
            path.push(n.board.clone());
            cursor = n.parent;
        }
        path.reverse();
        path
    }

    #[cfg(test)]
    fn frontier_priority(&self) -> Option<u32> {
        self.frontier.peek().map(|entry| entry.priority)
    }
}

/// Final verdict of the race.
enum Outcome {
    Solved { path: Vec<Board> },
    Unsolvable,
}

/// Minimum-move solver for one initial board.
///
/// Construction runs the full search; the query methods only read the
/// outcome.
pub struct Solver {
    outcome: Outcome,
}

impl Solver {
    /// Races a search from `initial` against one from its twin, alternating
    /// strictly between them, until either dequeues its goal.
    pub fn new(initial: Board) -> Self {
        let mut twin = Search::seeded(initial.twin());
        let mut primary = Search::seeded(initial);

        let outcome = loop {
            match primary.advance() {
                Step::FoundGoal(node) => {
                    break Outcome::Solved {
                        path: primary.path_to(node),
                    }
                }
                Step::Exhausted => break Outcome::Unsolvable,
                Step::InProgress => {}
            }
            match twin.advance() {
                Step::FoundGoal(_) => break Outcome::Unsolvable,
                // an exhausted twin can never win; keep driving the primary
                Step::Exhausted | Step::InProgress => {}
            }
        };

        Self { outcome }
    }

    /// Can the initial board reach the goal?
    pub fn is_solvable(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }

    /// Minimum number of moves to the goal, `None` when unsolvable.
    pub fn moves(&self) -> Option<u32> {
        match &self.outcome {
            Outcome::Solved { path } => Some((path.len() - 1) as u32),
            Outcome::Unsolvable => None,
        }
    }

    /// The boards of an optimal solution, from the initial board to the
    /// goal inclusive; `None` when unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        match &self.outcome {
            Outcome::Solved { path } => Some(path),
            Outcome::Unsolvable => None,
        }
    }
}
