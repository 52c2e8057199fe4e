use mir::Reg;
use util::Map;

use crate::error::{LivenessError, Result};
use crate::slot::SlotIndex;

use std::fmt;

/// Identifies which definition's result a segment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueNumber(pub u32);

impl fmt::Display for ValueNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open range `[start, end)` in which a register holds `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: SlotIndex,
    pub end: SlotIndex,
    pub value: ValueNumber,
}

impl Segment {
    pub fn new(start: SlotIndex, end: SlotIndex, value: ValueNumber) -> Self {
        Self { start, end, value }
    }

    #[inline]
    pub fn contains(&self, point: SlotIndex) -> bool {
        self.start <= point && point < self.end
    }

    #[inline]
    fn overlaps(&self, other: &Segment) -> bool {
        self.start < other.end && other.start < self.end
    }

    #[inline]
    fn touches(&self, other: &Segment) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}) @{}", self.start, self.end, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiveInterval {
    pub reg: Reg,
    // sorted by start, pairwise disjoint
    segments: Vec<Segment>,
}

impl LiveInterval {
    pub fn new(reg: Reg) -> Self {
        Self {
            reg,
            segments: vec![],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn begin(&self) -> Option<SlotIndex> {
        self.segments.first().map(|s| s.start)
    }

    pub fn segment_at(&self, point: SlotIndex) -> Option<&Segment> {
        let i = self.segments.partition_point(|s| s.end <= point);
        self.segments.get(i).filter(|s| s.contains(point))
    }

    pub fn value_at(&self, point: SlotIndex) -> Option<ValueNumber> {
        self.segment_at(point).map(|s| s.value)
    }

    #[inline]
    pub fn live_at(&self, point: SlotIndex) -> bool {
        self.segment_at(point).is_some()
    }

    /// Inserts `seg`, merging it with overlapping or adjacent segments of the
    /// same value. On overlap with another value the interval is left
    /// untouched and the conflicting segment is returned.
    pub fn add_segment(&mut self, seg: Segment) -> std::result::Result<(), Segment> {
        if seg.start >= seg.end {
            return Ok(());
        }

        if let Some(existing) = self
            .segments
            .iter()
            .find(|s| s.value != seg.value && s.overlaps(&seg))
        {
            return Err(*existing);
        }

        let mut merged = seg;
        self.segments.retain(|s| {
            if s.value == merged.value && s.touches(&merged) {
                merged.start = merged.start.min(s.start);
                merged.end = merged.end.max(s.end);
                false
            } else {
                true
            }
        });

        let pos = self.segments.partition_point(|s| s.start < merged.start);
        self.segments.insert(pos, merged);
        Ok(())
    }
}

impl fmt::Display for LiveInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.reg)?;
        if self.segments.is_empty() {
            write!(f, "EMPTY")
        } else {
            util::format_vec(f, &self.segments, "", ", ", "")
        }
    }
}

/// Per-register live intervals. An interval exists only for registers whose
/// definition the store has been told about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveIntervals {
    intervals: Map<Reg, LiveInterval>,
}

impl LiveIntervals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `reg` as defined, returning its (possibly fresh) interval.
    pub fn define(&mut self, reg: Reg) -> &mut LiveInterval {
        self.intervals
            .entry(reg)
            .or_insert_with(|| LiveInterval::new(reg))
    }

    pub fn get(&self, reg: Reg) -> Result<&LiveInterval> {
        self.intervals
            .get(&reg)
            .ok_or_else(|| LivenessError::UndefinedRegisterDef(reg.to_string()))
    }

    pub fn add_segment(&mut self, reg: Reg, seg: Segment) -> Result<()> {
        let interval = self
            .intervals
            .get_mut(&reg)
            .ok_or_else(|| LivenessError::UndefinedRegisterDef(reg.to_string()))?;

        interval
            .add_segment(seg)
            .map_err(|existing| LivenessError::ConflictingSegment {
                reg,
                segment: seg,
                existing,
            })
    }

    pub fn value_live_at(&self, reg: Reg, point: SlotIndex) -> Option<ValueNumber> {
        self.intervals.get(&reg).and_then(|li| li.value_at(point))
    }

    /// Intervals ordered by register.
    pub fn iter(&self) -> impl Iterator<Item = &LiveInterval> {
        let mut v: Vec<_> = self.intervals.values().collect();
        v.sort_by_key(|li| li.reg);
        v.into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl fmt::Display for LiveIntervals {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for li in self.iter() {
            write!(f, "live {}\n", li)?;
        }
        Ok(())
    }
}
