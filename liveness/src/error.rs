use mir::Reg;
use thiserror::Error;

use crate::interval::Segment;
use crate::slot::SlotIndex;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LivenessError {
    #[error("no slot index assigned to {0}")]
    MissingSlotIndex(String),
    #[error("no register definition for {0}")]
    UndefinedRegisterDef(String),
    #[error("segment {segment} of {reg} conflicts with existing segment {existing}")]
    ConflictingSegment {
        reg: Reg,
        segment: Segment,
        existing: Segment,
    },
    #[error("{reg} is used after {point} but is not live there")]
    UnsoundLiveness { reg: Reg, point: SlotIndex },
    #[error("virtual register {0} is defined more than once")]
    RedefinedRegister(Reg),
    #[error("{0} has no live value")]
    DeadRegister(Reg),
}

pub type Result<T> = std::result::Result<T, LivenessError>;
