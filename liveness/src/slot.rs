use mir::{BlockId, Function, InstId};
use util::Map;

use crate::error::{LivenessError, Result};

use std::fmt;

/// A coordinate in the total program order of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub u32);

impl SlotIndex {
    #[inline]
    pub fn next(self) -> Self {
        SlotIndex(self.0 + 1)
    }

    #[inline]
    pub fn prev(self) -> Self {
        SlotIndex(self.0.saturating_sub(1))
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot numbering of a function, taken as a snapshot.
///
/// Every block owns one boundary slot followed by one slot per instruction,
/// so the end of a block coincides with the start of the next one in layout
/// order. Instructions appended after `compute` have no index.
#[derive(Debug, Clone, Default)]
pub struct SlotIndexes {
    insts: Map<InstId, SlotIndex>,
    blocks: Map<BlockId, (SlotIndex, SlotIndex)>,
}

impl SlotIndexes {
    pub fn compute(func: &Function) -> Self {
        let mut insts = Map::default();
        let mut blocks = Map::default();
        let mut next: u32 = 0;
        for bid in func.block_ids() {
            let start = SlotIndex(next);
            next += 1;
            for id in &func.blocks[bid].insts {
                insts.insert(*id, SlotIndex(next));
                next += 1;
            }
            blocks.insert(bid, (start, SlotIndex(next)));
        }

        Self { insts, blocks }
    }

    #[inline]
    pub fn has_index(&self, inst: InstId) -> bool {
        self.insts.contains_key(&inst)
    }

    pub fn index(&self, inst: InstId) -> Result<SlotIndex> {
        self.insts
            .get(&inst)
            .copied()
            .ok_or_else(|| LivenessError::MissingSlotIndex(format!("instruction #{}", inst.index())))
    }

    fn block_range(&self, bid: BlockId) -> Result<(SlotIndex, SlotIndex)> {
        self.blocks
            .get(&bid)
            .copied()
            .ok_or_else(|| LivenessError::MissingSlotIndex(format!("block #{}", bid.index())))
    }

    pub fn block_start(&self, bid: BlockId) -> Result<SlotIndex> {
        self.block_range(bid).map(|r| r.0)
    }

    pub fn block_end(&self, bid: BlockId) -> Result<SlotIndex> {
        self.block_range(bid).map(|r| r.1)
    }

    /// Fails on the first block or instruction of `func` without an index.
    pub fn verify(&self, func: &Function) -> Result<()> {
        for bid in func.block_ids() {
            let block = &func.blocks[bid];
            if !self.blocks.contains_key(&bid) {
                return Err(LivenessError::MissingSlotIndex(format!("block {}", block.name)));
            }
            for (id, inst) in func.block_insts(bid) {
                if !self.has_index(id) {
                    return Err(LivenessError::MissingSlotIndex(format!(
                        "`{}` in block {}",
                        inst, block.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Logs every instruction of `func` prefixed by its slot index.
    pub fn dump(&self, func: &Function) {
        for bid in func.block_ids() {
            let block = &func.blocks[bid];
            match self.blocks.get(&bid) {
                Some((start, end)) => log::debug!("block {} [{}, {}):", block.name, start, end),
                None => log::debug!("block {} [???]:", block.name),
            }
            for (id, inst) in func.block_insts(bid) {
                match self.insts.get(&id) {
                    Some(idx) => log::debug!("  [{}] {}", idx, inst),
                    None => log::debug!("  [???] {}", inst),
                }
            }
        }
    }
}
