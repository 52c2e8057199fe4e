use mir::{Function, InstId, Reg};
use util::Map;

use crate::error::{LivenessError, Result};
use crate::slot::{SlotIndex, SlotIndexes};

/// Def and use lookup for the registers of one function.
///
/// Only virtual registers get a definer: physical registers may be written
/// any number of times and are never resolved here. Debug-only references
/// are not uses.
#[derive(Debug, Clone, Default)]
pub struct UseDef {
    defs: Map<Reg, InstId>,
    uses: Map<Reg, Vec<(InstId, SlotIndex)>>,
}

impl UseDef {
    pub fn new(func: &Function, slots: &SlotIndexes) -> Result<Self> {
        let mut defs = Map::default();
        let mut uses: Map<Reg, Vec<(InstId, SlotIndex)>> = Map::default();

        for (id, inst) in func.all_insts() {
            let idx = slots.index(id)?;

            if let Some(reg @ Reg::Virt(_)) = inst.def() {
                if defs.insert(reg, id).is_some() {
                    return Err(LivenessError::RedefinedRegister(reg));
                }
            }

            for reg in inst.uses() {
                uses.entry(reg).or_default().push((id, idx));
            }
        }

        Ok(Self { defs, uses })
    }

    pub fn definer(&self, reg: Reg) -> Option<InstId> {
        self.defs.get(&reg).copied()
    }

    pub fn uses(&self, reg: Reg) -> impl Iterator<Item = (InstId, SlotIndex)> + '_ {
        self.uses.get(&reg).into_iter().flatten().copied()
    }

    pub fn used_after(&self, reg: Reg, point: SlotIndex) -> bool {
        self.uses(reg).any(|(_, idx)| idx > point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mir::{Operand, PhysReg};

    #[test]
    fn defs_and_uses() {
        let mut f = Function::new("f");
        let a = f.add_block("A");
        let b = f.add_block("B");
        let d = f.push_inst(a, "li", vec![Operand::Def(Reg::Virt(0)), Operand::Imm(1)], false);
        let u1 = f.push_inst(
            a,
            "add",
            vec![Operand::Def(Reg::Virt(1)), Operand::Use(Reg::Virt(0)), Operand::Use(Reg::Virt(0))],
            false,
        );
        f.push_inst(b, "dbg_value", vec![Operand::DebugUse(Reg::Virt(0))], false);
        let u2 = f.push_inst(b, "out", vec![Operand::Use(Reg::Virt(0))], false);

        let slots = SlotIndexes::compute(&f);
        let ud = UseDef::new(&f, &slots).unwrap();

        assert_eq!(ud.definer(Reg::Virt(0)), Some(d));
        assert_eq!(ud.definer(Reg::Virt(5)), None);

        let uses: Vec<_> = ud.uses(Reg::Virt(0)).map(|(id, _)| id).collect();
        assert_eq!(uses, vec![u1, u1, u2]);
        // restartable
        assert_eq!(ud.uses(Reg::Virt(0)).count(), 3);
        assert_eq!(ud.uses(Reg::Virt(1)).count(), 0);

        let last = slots.index(u2).unwrap();
        assert!(ud.used_after(Reg::Virt(0), last.prev()));
        assert!(!ud.used_after(Reg::Virt(0), last));
    }

    #[test]
    fn physical_has_no_definer() {
        let r1 = Reg::Phys(PhysReg::from_name("r1").unwrap());
        let mut f = Function::new("f");
        let a = f.add_block("A");
        f.push_inst(a, "li", vec![Operand::Def(r1), Operand::Imm(1)], false);
        f.push_inst(a, "li", vec![Operand::Def(r1), Operand::Imm(2)], false);
        f.push_inst(a, "out", vec![Operand::Use(r1)], false);

        let slots = SlotIndexes::compute(&f);
        let ud = UseDef::new(&f, &slots).unwrap();
        assert_eq!(ud.definer(r1), None);
        assert!(ud.used_after(r1, SlotIndex(0)));
    }

    #[test]
    fn redefined_virtual() {
        let mut f = Function::new("f");
        let a = f.add_block("A");
        f.push_inst(a, "li", vec![Operand::Def(Reg::Virt(0)), Operand::Imm(1)], false);
        f.push_inst(a, "li", vec![Operand::Def(Reg::Virt(0)), Operand::Imm(2)], false);

        let slots = SlotIndexes::compute(&f);
        assert_eq!(
            UseDef::new(&f, &slots).unwrap_err(),
            LivenessError::RedefinedRegister(Reg::Virt(0))
        );
    }

    #[test]
    fn unindexed_use() {
        let mut f = Function::new("f");
        let a = f.add_block("A");
        f.push_inst(a, "li", vec![Operand::Def(Reg::Virt(0)), Operand::Imm(1)], false);
        let slots = SlotIndexes::compute(&f);
        f.push_inst(a, "out", vec![Operand::Use(Reg::Virt(0))], false);

        assert!(matches!(
            UseDef::new(&f, &slots),
            Err(LivenessError::MissingSlotIndex(_))
        ));
    }
}
