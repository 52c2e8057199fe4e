use mir::{BlockId, Function};
use util::Set;

use std::collections::VecDeque;

/// Blocks reachable from `start` along successor edges, `start` included.
pub fn reachable_set(func: &Function, start: BlockId) -> Set<BlockId> {
    let mut visited = Set::default();
    let mut worklist = VecDeque::new();

    visited.insert(start);
    worklist.push_back(start);

    while let Some(bid) = worklist.pop_front() {
        for succ in func.successors(bid) {
            if visited.insert(*succ) {
                worklist.push_back(*succ);
            }
        }
    }

    visited
}

/// Blocks not reachable from `start`, in layout order.
pub fn unreachable_set(func: &Function, start: BlockId) -> Vec<BlockId> {
    let reachable = reachable_set(func, start);
    func.block_ids()
        .filter(|bid| !reachable.contains(bid))
        .collect()
}

/// Blocks `b` such that neither `start` reaches `b` nor `b` reaches `start`.
///
/// A block missed by the forward search from `start` may still flow into
/// `start` through a back edge; such a block is not disconnected.
pub fn disconnected_set(func: &Function, start: BlockId) -> Vec<BlockId> {
    unreachable_set(func, start)
        .into_iter()
        .filter(|bid| !reachable_set(func, *bid).contains(&start))
        .collect()
}
