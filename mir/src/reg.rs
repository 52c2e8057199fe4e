use std::fmt;

// depending heavily on ISA
pub static PHYS_REGS: &'static [&'static str] = &[
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13", "r14",
    "r15", "r16", "r17", "r18", "r19", "r20", "r21", "r22", "r23", "r24", "r25", "r26", "r27",
    "r28", "r29", "r30", "r31", "sp", "lr", "pred",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhysReg(u16);

impl PhysReg {
    pub fn from_name(name: &str) -> Option<Self> {
        PHYS_REGS
            .iter()
            .position(|r| *r == name)
            .map(|i| PhysReg(i as u16))
    }

    pub fn name(self) -> &'static str {
        PHYS_REGS[self.0 as usize]
    }
}

/// A register operand.
///
/// Virtual registers are defined exactly once. Physical registers may be
/// written by any number of instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reg {
    Virt(u32),
    Phys(PhysReg),
}

impl Reg {
    #[inline]
    pub fn is_virtual(self) -> bool {
        matches!(self, Reg::Virt(_))
    }

    #[inline]
    pub fn is_physical(self) -> bool {
        matches!(self, Reg::Phys(_))
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reg::Virt(n) => write!(f, "%{n}"),
            Reg::Phys(r) => write!(f, "${}", r.name()),
        }
    }
}
