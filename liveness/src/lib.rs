mod error;
mod interval;
mod persistent;
pub mod reach;
mod slot;
mod usedef;

pub use error::{LivenessError, Result};
pub use interval::{LiveInterval, LiveIntervals, Segment, ValueNumber};
pub use persistent::{
    extend, Context, ExtenderConfig, ExtensionReport, PersistentExtender, SoundnessWarning,
};
pub use slot::{SlotIndex, SlotIndexes};
pub use usedef::UseDef;

use mir::Function;

/// Runs the persistent liveness extension with the default configuration.
///
/// Only `intervals` is updated; the instructions are left alone, so the
/// result is always `false`.
pub fn run(func: &Function, slots: &SlotIndexes, intervals: &mut LiveIntervals) -> Result<bool> {
    extend(func, slots, intervals, &ExtenderConfig::default())?;
    Ok(false)
}
