use serde::Serialize;
use std::fmt;

/// An optional start/end hour pair, each in 0..=23.
/// Both bounds absent means "off". A single bound is allowed ("after 13:00"
/// is start-only). When both are present, `start <= end` holds for every
/// value produced by validation; ranges loaded from a hand-edited table are
/// taken as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HourRange {
    pub start: Option<u8>,
    pub end: Option<u8>,
}

impl HourRange {
    pub const OFF: HourRange = HourRange {
        start: None,
        end: None,
    };

    pub fn new(start: Option<u8>, end: Option<u8>) -> Self {
        Self { start, end }
    }

    pub fn is_off(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => f.write_str("off"),
            (Some(s), Some(e)) => write!(f, "{}-{}", s, e),
            (Some(s), None) => write!(f, "{}-", s),
            (None, Some(e)) => write!(f, "-{}", e),
        }
    }
}
