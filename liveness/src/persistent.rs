use mir::{BlockId, Function, Inst, InstId, Reg};
use util::Map;

use crate::error::{LivenessError, Result};
use crate::interval::{LiveIntervals, Segment};
use crate::reach;
use crate::slot::{SlotIndex, SlotIndexes};
use crate::usedef::UseDef;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtenderConfig {
    /// When false, cases are still classified and checked but no segment is
    /// inserted.
    pub add_segments: bool,
    pub dump_slots: bool,
}

impl Default for ExtenderConfig {
    fn default() -> Self {
        Self {
            add_segments: true,
            dump_slots: false,
        }
    }
}

/// A persistent value that is still used after the end of a disconnected
/// block following it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundnessWarning {
    pub inst: InstId,
    pub reg: Reg,
    pub block: BlockId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionReport {
    pub pairs_visited: usize,
    pub segments_inserted: usize,
    pub warnings: Vec<SoundnessWarning>,
}

pub struct Context<'a> {
    pub func: &'a Function,
    pub slots: &'a SlotIndexes,
    pub usedef: &'a UseDef,
    pub intervals: &'a mut LiveIntervals,
}

pub struct PersistentExtender<'a> {
    cx: Context<'a>,
    config: &'a ExtenderConfig,
    // identical for every persistent instruction of a block
    disconnected: Map<BlockId, Vec<BlockId>>,
    report: ExtensionReport,
}

impl<'a> PersistentExtender<'a> {
    pub fn new(cx: Context<'a>, config: &'a ExtenderConfig) -> Self {
        Self {
            cx,
            config,
            disconnected: Map::default(),
            report: ExtensionReport::default(),
        }
    }

    fn disconnected(&mut self, bid: BlockId) -> Vec<BlockId> {
        let func = self.cx.func;
        self.disconnected
            .entry(bid)
            .or_insert_with(|| reach::disconnected_set(func, bid))
            .clone()
    }

    pub fn run(mut self) -> Result<ExtensionReport> {
        let (func, slots) = (self.cx.func, self.cx.slots);

        for (pid, pmi) in func.persistent_insts() {
            let bb = pmi.block;
            let bb_start = slots.block_start(bb)?;

            for bb2 in self.disconnected(bb) {
                self.report.pairs_visited += 1;

                let bb2_start = slots.block_start(bb2)?;
                if bb2_start > bb_start {
                    self.extend_following(pid, pmi, bb2)?;
                } else if bb2_start < bb_start {
                    self.extend_preceding(pid, pmi, bb, bb2)?;
                }
            }
        }

        Ok(self.report)
    }

    // `bb2` comes after the persistent instruction in program order.
    fn extend_following(&mut self, pid: InstId, pmi: &Inst, bb2: BlockId) -> Result<()> {
        let (func, slots, usedef) = (self.cx.func, self.cx.slots, self.cx.usedef);
        let p_idx = slots.index(pid)?;

        let def = pmi.def().ok_or_else(|| {
            LivenessError::UndefinedRegisterDef(format!("persistent instruction `{}`", pmi))
        })?;
        let bb2_end = slots.block_end(bb2)?;
        if usedef.used_after(def, bb2_end) {
            log::warn!(
                "persistent value {} (p:{}) is used after the end of disconnected block {} ({})",
                def,
                p_idx,
                func.blocks[bb2].name,
                bb2_end
            );
            self.report.warnings.push(SoundnessWarning {
                inst: pid,
                reg: def,
                block: bb2,
            });
        }

        for (uid, inst) in func.block_insts(bb2) {
            for reg in inst.uses() {
                if reg.is_physical() {
                    log::debug!("skipping physical register {} in `{}`", reg, inst);
                    continue;
                }
                let def_inst = match usedef.definer(reg) {
                    Some(d) => d,
                    None => {
                        log::debug!("{} has no definer, skipping", reg);
                        continue;
                    }
                };

                let def_idx = slots.index(def_inst)?;
                if def_idx < p_idx {
                    log::debug!(
                        "following: def:{} --> p:{} --> use:{}",
                        def_idx,
                        p_idx,
                        slots.index(uid)?
                    );
                    self.add_segment(reg, p_idx, p_idx.next())?;
                }
            }
        }

        Ok(())
    }

    // `bb2` comes before the block of the persistent instruction.
    fn extend_preceding(
        &mut self,
        pid: InstId,
        pmi: &Inst,
        bb: BlockId,
        bb2: BlockId,
    ) -> Result<()> {
        let (func, slots, usedef) = (self.cx.func, self.cx.slots, self.cx.usedef);
        let p_idx = slots.index(pid)?;
        let bb_end = slots.block_end(bb)?;

        for (id, inst) in func.block_insts(bb2) {
            let reg = match inst.def() {
                Some(reg) if reg.is_virtual() => reg,
                _ => continue,
            };
            if usedef.used_after(reg, bb_end) {
                log::debug!(
                    "preceding: def:{} --> p:{}",
                    slots.index(id)?,
                    p_idx
                );
                if !self.cx.intervals.get(reg)?.live_at(bb_end) {
                    return Err(LivenessError::UnsoundLiveness { reg, point: bb_end });
                }
            }
        }

        if func.blocks[bb2].is_empty() {
            return Ok(());
        }

        let bb2_start = slots.block_start(bb2)?;
        let bb2_end = slots.block_end(bb2)?;
        for reg in pmi.uses() {
            if reg.is_physical() {
                continue;
            }
            let def_inst = match usedef.definer(reg) {
                Some(d) => d,
                None => {
                    log::debug!("{} has no definer, skipping", reg);
                    continue;
                }
            };

            let def_idx = slots.index(def_inst)?;
            if def_idx < bb2_start {
                log::debug!(
                    "preceding: def:{} --> bb:{} --> use:{}",
                    def_idx,
                    func.blocks[bb2].name,
                    p_idx
                );
                self.add_segment(reg, bb2_start, bb2_end)?;
            }
        }

        Ok(())
    }

    fn add_segment(&mut self, reg: Reg, start: SlotIndex, end: SlotIndex) -> Result<()> {
        if !self.config.add_segments {
            return Ok(());
        }

        let interval = self.cx.intervals.get(reg)?;
        let value = interval
            .begin()
            .and_then(|begin| interval.value_at(begin))
            .ok_or(LivenessError::DeadRegister(reg))?;

        log::debug!("adding segment to {}", reg);
        log::debug!(" BEFORE: {}", interval);
        self.cx
            .intervals
            .add_segment(reg, Segment::new(start, end, value))?;
        log::debug!(" AFTER: {}", self.cx.intervals.get(reg)?);

        self.report.segments_inserted += 1;
        Ok(())
    }
}

/// Extends `intervals` so that values feeding into or flowing out of
/// persistent instructions stay reserved across disconnected blocks.
///
/// Every instruction must carry a slot index; this is checked before any
/// interval is touched.
pub fn extend(
    func: &Function,
    slots: &SlotIndexes,
    intervals: &mut LiveIntervals,
    config: &ExtenderConfig,
) -> Result<ExtensionReport> {
    log::info!("extending persistent liveness of function: {}", func.name);

    if config.dump_slots {
        slots.dump(func);
    }
    slots.verify(func)?;
    let usedef = UseDef::new(func, slots)?;

    let cx = Context {
        func,
        slots,
        usedef: &usedef,
        intervals,
    };
    let report = PersistentExtender::new(cx, config).run()?;

    log::info!(
        "{}: {} pairs visited, {} segments inserted, {} warnings",
        func.name,
        report.pairs_visited,
        report.segments_inserted,
        report.warnings.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::ValueNumber;
    use mir::{Operand, PhysReg};

    fn v(n: u32) -> Reg {
        Reg::Virt(n)
    }

    fn seg(start: u32, end: u32, value: u32) -> Segment {
        Segment::new(SlotIndex(start), SlotIndex(end), ValueNumber(value))
    }

    fn seed(lis: &mut LiveIntervals, reg: Reg, segs: &[(u32, u32)]) {
        let li = lis.define(reg);
        for (s, e) in segs {
            li.add_segment(seg(*s, *e, 0)).unwrap();
        }
    }

    fn li(dst: u32, imm: i64) -> Vec<Operand> {
        vec![Operand::Def(v(dst)), Operand::Imm(imm)]
    }

    // A -> B, A -> C; B and C never rejoin.
    //
    //   A [0, 2):  1: %2 = li 7
    //   B [2, 4):  3: persistent %1 = li 1
    //   C [4, 6):  5: out %2
    #[test]
    fn non_rejoining_arms() {
        let mut f = Function::new("diamond");
        let a = f.add_block("A");
        let b = f.add_block("B");
        let c = f.add_block("C");
        f.add_edge(a, b);
        f.add_edge(a, c);
        f.push_inst(a, "li", li(2, 7), false);
        let p = f.push_inst(b, "li", li(1, 1), true);
        f.push_inst(c, "out", vec![Operand::Use(v(2))], false);

        let slots = SlotIndexes::compute(&f);
        assert_eq!(slots.index(p).unwrap(), SlotIndex(3));
        assert!(reach::disconnected_set(&f, a).is_empty());
        assert_eq!(reach::disconnected_set(&f, b), vec![c]);

        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(2), &[(1, 2), (4, 6)]);
        seed(&mut lis, v(1), &[(3, 4)]);

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.pairs_visited, 1);
        assert_eq!(report.segments_inserted, 1);
        assert!(report.warnings.is_empty());

        // [3, 4) joins the live-in range of C
        assert_eq!(lis.get(v(2)).unwrap().segments(), &[seg(1, 2, 0), seg(3, 6, 0)]);
        assert_eq!(lis.value_live_at(v(2), SlotIndex(3)), Some(ValueNumber(0)));
        assert_eq!(lis.get(v(1)).unwrap().segments(), &[seg(3, 4, 0)]);
    }

    #[test]
    fn empty_function() {
        let f = Function::new("empty");
        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        assert_eq!(crate::run(&f, &slots, &mut lis), Ok(false));
        assert!(lis.is_empty());

        let mut g = Function::new("blocks_only");
        let a = g.add_block("A");
        let b = g.add_block("B");
        g.add_edge(a, b);
        let slots = SlotIndexes::compute(&g);
        assert_eq!(crate::run(&g, &slots, &mut lis), Ok(false));
        assert!(lis.is_empty());
    }

    // E -> B, E -> A with B laid out before A.
    //
    //   E [0, 2):  1: %3 = li 5
    //   B [2, 4):  3: %4 = li 0
    //   A [4, 6):  5: persistent %5 = add %3
    #[test]
    fn preceding_block_reserved() {
        let mut f = Function::new("preceding");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.push_inst(e, "li", li(3, 5), false);
        f.push_inst(b, "li", li(4, 0), false);
        f.push_inst(
            a,
            "add",
            vec![Operand::Def(v(5)), Operand::Use(v(3))],
            true,
        );

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(3), &[(1, 2), (4, 5)]);
        seed(&mut lis, v(4), &[(3, 4)]);
        seed(&mut lis, v(5), &[(5, 6)]);

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.segments_inserted, 1);

        let end_b = slots.block_end(b).unwrap();
        assert_eq!(lis.get(v(3)).unwrap().segments(), &[seg(1, 5, 0)]);
        assert_eq!(lis.value_live_at(v(3), end_b.prev()), Some(ValueNumber(0)));
        assert_eq!(lis.get(v(4)).unwrap().segments(), &[seg(3, 4, 0)]);
    }

    #[test]
    fn missing_slot_index_aborts() {
        let mut f = Function::new("late");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.push_inst(e, "li", li(3, 5), false);
        f.push_inst(b, "li", li(4, 0), false);
        f.push_inst(a, "add", vec![Operand::Def(v(5)), Operand::Use(v(3))], true);

        let slots = SlotIndexes::compute(&f);
        f.push_inst(a, "add", vec![Operand::Def(v(6)), Operand::Use(v(3))], true);

        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(3), &[(1, 2), (4, 5)]);
        let before = lis.clone();

        let err = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap_err();
        assert!(matches!(err, LivenessError::MissingSlotIndex(_)));
        assert_eq!(lis, before);
    }

    #[test]
    fn disabled_insertion() {
        let mut f = Function::new("preceding");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.push_inst(e, "li", li(3, 5), false);
        f.push_inst(b, "li", li(4, 0), false);
        f.push_inst(a, "add", vec![Operand::Def(v(5)), Operand::Use(v(3))], true);

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(3), &[(1, 2), (4, 5)]);
        let before = lis.clone();

        let config = ExtenderConfig {
            add_segments: false,
            ..ExtenderConfig::default()
        };
        let report = extend(&f, &slots, &mut lis, &config).unwrap();
        assert_eq!(report.pairs_visited, 1);
        assert_eq!(report.segments_inserted, 0);
        assert_eq!(lis, before);
    }

    // A -> B -> J, A -> C -> J, with %1 defined persistently in B and read in J.
    //
    //   A [0, 2):  1: %0 = li 1
    //   B [2, 4):  3: persistent %1 = add %0
    //   C [4, 6):  5: out %0
    //   J [6, 8):  7: out %1
    #[test]
    fn warns_on_value_past_join() {
        let mut f = Function::new("join");
        let a = f.add_block("A");
        let b = f.add_block("B");
        let c = f.add_block("C");
        let j = f.add_block("J");
        f.add_edge(a, b);
        f.add_edge(a, c);
        f.add_edge(b, j);
        f.add_edge(c, j);
        f.push_inst(a, "li", li(0, 1), false);
        let p = f.push_inst(b, "add", vec![Operand::Def(v(1)), Operand::Use(v(0))], true);
        f.push_inst(c, "out", vec![Operand::Use(v(0))], false);
        f.push_inst(j, "out", vec![Operand::Use(v(1))], false);

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(0), &[(1, 4), (4, 6)]);
        seed(&mut lis, v(1), &[(3, 4), (6, 8)]);

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(
            report.warnings,
            vec![SoundnessWarning {
                inst: p,
                reg: v(1),
                block: c,
            }]
        );
        // %0 was already live at p: the insertion coalesces
        assert_eq!(report.segments_inserted, 1);
        assert_eq!(lis.get(v(0)).unwrap().segments(), &[seg(1, 6, 0)]);
    }

    // E -> B -> J, E -> A -> J, with B laid out before A.
    //
    //   E [0, 1)
    //   B [1, 3):  2: %4 = li 0
    //   A [3, 5):  4: persistent %5 = li 1
    //   J [5, 7):  6: out %4
    #[test]
    fn unsound_preceding_def() {
        let mut f = Function::new("unsound");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        let j = f.add_block("J");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.add_edge(b, j);
        f.add_edge(a, j);
        f.push_inst(b, "li", li(4, 0), false);
        f.push_inst(a, "li", li(5, 1), true);
        f.push_inst(j, "out", vec![Operand::Use(v(4))], false);

        let slots = SlotIndexes::compute(&f);
        let end_a = slots.block_end(a).unwrap();
        assert_eq!(end_a, SlotIndex(5));

        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(4), &[(2, 3), (6, 7)]);
        seed(&mut lis, v(5), &[(4, 5)]);
        assert_eq!(
            extend(&f, &slots, &mut lis, &ExtenderConfig::default()),
            Err(LivenessError::UnsoundLiveness {
                reg: v(4),
                point: end_a
            })
        );

        // live at the end of A: accepted as is
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(4), &[(2, 3), (4, 6)]);
        seed(&mut lis, v(5), &[(4, 5)]);
        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.segments_inserted, 0);
    }

    // E -> B, E -> A with B laid out before A; the value read by the
    // persistent instruction is defined inside B itself.
    //
    //   E [0, 1)
    //   B [1, 3):  2: %4 = li 0
    //   A [3, 5):  4: persistent %5 = add %4
    #[test]
    fn preceding_block_defining_the_use() {
        let mut f = Function::new("inside");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.push_inst(b, "li", li(4, 0), false);
        f.push_inst(a, "add", vec![Operand::Def(v(5)), Operand::Use(v(4))], true);

        let slots = SlotIndexes::compute(&f);
        assert_eq!(slots.block_start(b).unwrap(), SlotIndex(1));
        assert_eq!(reach::disconnected_set(&f, a), vec![b]);

        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(4), &[(2, 3), (3, 4)]);
        seed(&mut lis, v(5), &[(4, 5)]);
        let before = lis.clone();

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.pairs_visited, 1);
        assert_eq!(report.segments_inserted, 0);
        assert_eq!(lis, before);
    }

    // A -> B, A -> C; C reads only what it defines itself.
    //
    //   A [0, 1)
    //   B [1, 3):  2: persistent %1 = li 1
    //   C [3, 6):  4: %6 = li 2
    //              5: out %6
    #[test]
    fn following_block_defining_the_use() {
        let mut f = Function::new("local");
        let a = f.add_block("A");
        let b = f.add_block("B");
        let c = f.add_block("C");
        f.add_edge(a, b);
        f.add_edge(a, c);
        f.push_inst(b, "li", li(1, 1), true);
        f.push_inst(c, "li", li(6, 2), false);
        f.push_inst(c, "out", vec![Operand::Use(v(6))], false);

        let slots = SlotIndexes::compute(&f);
        assert_eq!(reach::disconnected_set(&f, b), vec![c]);

        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(1), &[(2, 3)]);
        seed(&mut lis, v(6), &[(4, 5)]);
        let before = lis.clone();

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.pairs_visited, 1);
        assert_eq!(report.segments_inserted, 0);
        assert!(report.warnings.is_empty());
        assert_eq!(lis, before);
    }

    #[test]
    fn persistent_without_def() {
        let mut f = Function::new("nodef");
        let a = f.add_block("A");
        let b = f.add_block("B");
        let c = f.add_block("C");
        f.add_edge(a, b);
        f.add_edge(a, c);
        f.push_inst(b, "st", vec![Operand::Imm(0)], true);
        f.push_inst(c, "nop", vec![], false);

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        assert!(matches!(
            extend(&f, &slots, &mut lis, &ExtenderConfig::default()),
            Err(LivenessError::UndefinedRegisterDef(_))
        ));
    }

    #[test]
    fn physical_and_undefined_uses_skipped() {
        let r1 = Reg::Phys(PhysReg::from_name("r1").unwrap());
        let mut f = Function::new("phys");
        let a = f.add_block("A");
        let b = f.add_block("B");
        let c = f.add_block("C");
        f.add_edge(a, b);
        f.add_edge(a, c);
        f.push_inst(a, "li", vec![Operand::Def(r1), Operand::Imm(3)], false);
        f.push_inst(b, "li", li(1, 1), true);
        f.push_inst(c, "out", vec![Operand::Use(r1), Operand::Use(v(9))], false);

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(1), &[(3, 4)]);
        let before = lis.clone();

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.pairs_visited, 1);
        assert_eq!(report.segments_inserted, 0);
        assert_eq!(lis, before);
    }

    // Two persistent instructions in B share the disconnected set {C}.
    #[test]
    fn shared_block_visited_per_instruction() {
        let mut f = Function::new("twice");
        let a = f.add_block("A");
        let b = f.add_block("B");
        let c = f.add_block("C");
        f.add_edge(a, b);
        f.add_edge(a, c);
        f.push_inst(a, "li", li(2, 7), false);
        f.push_inst(b, "li", li(1, 1), true);
        f.push_inst(b, "li", li(3, 1), true);
        f.push_inst(c, "out", vec![Operand::Use(v(2))], false);

        //   A [0, 2):  1
        //   B [2, 5):  3, 4
        //   C [5, 7):  6
        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(2), &[(1, 2), (5, 7)]);
        seed(&mut lis, v(1), &[(3, 4)]);
        seed(&mut lis, v(3), &[(4, 5)]);

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.pairs_visited, 2);
        assert_eq!(report.segments_inserted, 2);
        assert_eq!(lis.get(v(2)).unwrap().segments(), &[seg(1, 2, 0), seg(3, 7, 0)]);

        // second run changes nothing
        let after = lis.clone();
        extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(lis, after);
    }

    #[test]
    fn dead_register() {
        let mut f = Function::new("dead");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.push_inst(e, "li", li(3, 5), false);
        f.push_inst(b, "nop", vec![], false);
        f.push_inst(a, "add", vec![Operand::Def(v(5)), Operand::Use(v(3))], true);

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        lis.define(v(3));
        assert_eq!(
            extend(&f, &slots, &mut lis, &ExtenderConfig::default()),
            Err(LivenessError::DeadRegister(v(3)))
        );
    }

    #[test]
    fn conflicting_value_is_fatal() {
        let mut f = Function::new("conflict");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.push_inst(e, "li", li(3, 5), false);
        f.push_inst(b, "nop", vec![], false);
        f.push_inst(a, "add", vec![Operand::Def(v(5)), Operand::Use(v(3))], true);

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(3), &[(1, 2)]);
        lis.add_segment(v(3), seg(2, 3, 1)).unwrap();

        assert!(matches!(
            extend(&f, &slots, &mut lis, &ExtenderConfig::default()),
            Err(LivenessError::ConflictingSegment { .. })
        ));
    }

    #[test]
    fn empty_preceding_block_not_reserved() {
        let mut f = Function::new("hollow");
        let e = f.add_block("E");
        let b = f.add_block("B");
        let a = f.add_block("A");
        f.add_edge(e, b);
        f.add_edge(e, a);
        f.push_inst(e, "li", li(3, 5), false);
        f.push_inst(a, "add", vec![Operand::Def(v(5)), Operand::Use(v(3))], true);

        let slots = SlotIndexes::compute(&f);
        let mut lis = LiveIntervals::new();
        seed(&mut lis, v(3), &[(1, 2), (3, 4)]);

        let report = extend(&f, &slots, &mut lis, &ExtenderConfig::default()).unwrap();
        assert_eq!(report.pairs_visited, 1);
        assert_eq!(report.segments_inserted, 0);
    }
}
