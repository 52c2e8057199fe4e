use crate::reg::Reg;
use id_arena::Arena;

use std::fmt;

pub type BlockId = id_arena::Id<Block>;
pub type InstId = id_arena::Id<Inst>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Def(Reg),
    Use(Reg),
    // references that carry no semantics (debug info)
    DebugUse(Reg),
    Imm(i64),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Operand::*;
        match self {
            Def(r) | Use(r) => write!(f, "{r}"),
            DebugUse(r) => write!(f, "dbg {r}"),
            Imm(i) => write!(f, "{i}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inst {
    pub block: BlockId,
    pub opcode: String,
    pub operands: Vec<Operand>,
    pub persistent: bool,
}

impl Inst {
    /// The leading def operand, if any.
    pub fn def(&self) -> Option<Reg> {
        match self.operands.first() {
            Some(Operand::Def(r)) => Some(*r),
            _ => None,
        }
    }

    pub fn uses(&self) -> impl Iterator<Item = Reg> + '_ {
        self.operands.iter().filter_map(|op| match op {
            Operand::Use(r) => Some(*r),
            _ => None,
        })
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.persistent {
            write!(f, "persistent ")?;
        }
        let rest = match self.operands.split_first() {
            Some((Operand::Def(r), rest)) => {
                write!(f, "{r} = ")?;
                rest
            }
            _ => &self.operands[..],
        };
        write!(f, "{}", self.opcode)?;
        if !rest.is_empty() {
            util::format_vec(f, rest, " ", ", ", "")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub insts: Vec<InstId>,
    pub succs: Vec<BlockId>,
    pub preds: Vec<BlockId>,
}

impl Block {
    pub fn with_name(name: String) -> Self {
        Self {
            name,
            insts: vec![],
            succs: vec![],
            preds: vec![],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }
}

/// A function body: blocks and instructions live in arenas and refer to each
/// other through stable handles. Layout order is block allocation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub blocks: Arena<Block>,
    pub insts: Arena<Inst>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Arena::new(),
            insts: Arena::new(),
        }
    }

    pub fn add_block(&mut self, name: impl Into<String>) -> BlockId {
        self.blocks.alloc(Block::with_name(name.into()))
    }

    pub fn add_edge(&mut self, from: BlockId, to: BlockId) {
        if self.blocks[from].succs.contains(&to) {
            return;
        }
        self.blocks[from].succs.push(to);
        self.blocks[to].preds.push(from);
    }

    pub fn push_inst(
        &mut self,
        block: BlockId,
        opcode: impl Into<String>,
        operands: Vec<Operand>,
        persistent: bool,
    ) -> InstId {
        let id = self.insts.alloc(Inst {
            block,
            opcode: opcode.into(),
            operands,
            persistent,
        });
        self.blocks[block].insts.push(id);
        id
    }

    /// Blocks in layout order.
    pub fn block_ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks.iter().map(|(id, _)| id)
    }

    pub fn successors(&self, bid: BlockId) -> &[BlockId] {
        &self.blocks[bid].succs
    }

    pub fn predecessors(&self, bid: BlockId) -> &[BlockId] {
        &self.blocks[bid].preds
    }

    pub fn find_block(&self, name: &str) -> Option<BlockId> {
        self.blocks
            .iter()
            .find(|(_, b)| b.name == name)
            .map(|(id, _)| id)
    }

    /// Instructions of `bid` in order.
    pub fn block_insts(&self, bid: BlockId) -> impl Iterator<Item = (InstId, &Inst)> + '_ {
        self.blocks[bid]
            .insts
            .iter()
            .map(move |id| (*id, &self.insts[*id]))
    }

    /// All instructions, block by block in layout order.
    pub fn all_insts(&self) -> impl Iterator<Item = (InstId, &Inst)> + '_ {
        self.block_ids().flat_map(move |bid| self.block_insts(bid))
    }

    pub fn persistent_insts(&self) -> impl Iterator<Item = (InstId, &Inst)> + '_ {
        self.all_insts().filter(|(_, inst)| inst.persistent)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let indent = |level: usize| "    ".repeat(level);
        write!(f, "function {}\n", self.name)?;
        for (_, block) in self.blocks.iter() {
            write!(f, "block {}", block.name)?;
            if !block.succs.is_empty() {
                let names: Vec<_> = block
                    .succs
                    .iter()
                    .map(|s| self.blocks[*s].name.as_str())
                    .collect();
                util::format_vec(f, &names, " -> ", ", ", "")?;
            }
            write!(f, "\n")?;
            for id in &block.insts {
                write!(f, "{}{}\n", indent(1), self.insts[*id])?;
            }
        }
        Ok(())
    }
}
