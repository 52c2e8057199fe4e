use mir::{Function, Operand, PhysReg, Reg};
use util::Spanned;

use crate::error::{ParseError, ParseErrorKind};
use crate::syntax::*;

/// Precomputed liveness of one register: `(start, end, value)` triples.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveDecl {
    pub reg: Reg,
    pub segments: Vec<(u32, u32, u32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFunction {
    pub func: Function,
    pub live: Vec<Spanned<LiveDecl>>,
}

type Result<T> = std::result::Result<T, ParseError>;

fn reg(name: Spanned<RegName>) -> Result<Reg> {
    match name.item {
        RegName::Virt(n) => Ok(Reg::Virt(n)),
        RegName::Phys(x) => match PhysReg::from_name(&x) {
            Some(r) => Ok(Reg::Phys(r)),
            None => Err(Spanned::new(ParseErrorKind::UnknownRegister(x), name.loc)),
        },
    }
}

fn operand(op: OperandSyntax) -> Result<Operand> {
    Ok(match op {
        OperandSyntax::Use(r) => Operand::Use(reg(r)?),
        OperandSyntax::DebugUse(r) => Operand::DebugUse(reg(r)?),
        OperandSyntax::Imm(i) => Operand::Imm(i),
    })
}

fn slot(i: Spanned<i64>) -> Result<u32> {
    u32::try_from(i.item).map_err(|_| Spanned::new(ParseErrorKind::InvalidSlot(i.item), i.loc))
}

fn live(decl: Spanned<LiveSyntax>) -> Result<Spanned<LiveDecl>> {
    let Spanned { item, loc } = decl;
    let segments = item
        .segments
        .into_iter()
        .map(|(start, end, value)| Ok((slot(start)?, slot(end)?, value)))
        .collect::<Result<_>>()?;

    Ok(Spanned::new(
        LiveDecl {
            reg: reg(item.reg)?,
            segments,
        },
        loc,
    ))
}

fn function(syn: FunctionSyntax) -> Result<ParsedFunction> {
    let mut func = Function::new(syn.name);
    let mut edges = vec![];

    for block in syn.blocks {
        let Spanned { item: name, loc } = block.name;
        if func.find_block(&name).is_some() {
            return Err(Spanned::new(ParseErrorKind::DuplicateBlock(name), loc));
        }
        let bid = func.add_block(name);

        for inst in block.insts {
            let mut operands = vec![];
            if let Some(def) = inst.def {
                operands.push(Operand::Def(reg(def)?));
            }
            for op in inst.operands {
                operands.push(operand(op)?);
            }
            func.push_inst(bid, inst.opcode, operands, inst.persistent);
        }

        edges.extend(block.succs.into_iter().map(|succ| (bid, succ)));
    }

    // successors may refer forward
    for (from, succ) in edges {
        match func.find_block(&succ.item) {
            Some(to) => func.add_edge(from, to),
            None => return Err(succ.map(ParseErrorKind::UnknownBlock)),
        }
    }

    let live = syn.live.into_iter().map(live).collect::<Result<_>>()?;

    Ok(ParsedFunction { func, live })
}

/// Resolves block and register names of every parsed function.
pub fn lower_file(file: Vec<FunctionSyntax>) -> Result<Vec<ParsedFunction>> {
    file.into_iter().map(function).collect()
}
