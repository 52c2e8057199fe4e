//! Parse tree produced by the grammar. Names are still unresolved here;
//! `lower` checks them and builds the `mir` function.

use util::Spanned;

#[derive(Debug, Clone, PartialEq)]
pub enum RegName {
    Virt(u32),
    Phys(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperandSyntax {
    Use(Spanned<RegName>),
    DebugUse(Spanned<RegName>),
    Imm(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstSyntax {
    pub persistent: bool,
    pub def: Option<Spanned<RegName>>,
    pub opcode: String,
    pub operands: Vec<OperandSyntax>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockSyntax {
    pub name: Spanned<String>,
    pub succs: Vec<Spanned<String>>,
    pub insts: Vec<InstSyntax>,
}

/// `[start, end) @value`, slots kept signed until checked
pub type SegmentSyntax = (Spanned<i64>, Spanned<i64>, u32);

#[derive(Debug, Clone, PartialEq)]
pub struct LiveSyntax {
    pub reg: Spanned<RegName>,
    pub segments: Vec<SegmentSyntax>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSyntax {
    pub name: String,
    pub blocks: Vec<BlockSyntax>,
    pub live: Vec<Spanned<LiveSyntax>>,
}
