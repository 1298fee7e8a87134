//! The five schedule fields and their inclusive bounds.

/// One schedule position: a display name, the key it renders under, and its
/// inclusive `[min, max]` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub key: &'static str,
    pub min: u32,
    pub max: u32,
}

pub const MINUTE: FieldSpec = FieldSpec::new("minute", "minute", 0, 59);
pub const HOUR: FieldSpec = FieldSpec::new("hour", "hour", 0, 23);
pub const DAY_OF_MONTH: FieldSpec = FieldSpec::new("day of month", "dayM", 1, 31);
pub const MONTH: FieldSpec = FieldSpec::new("month", "month", 1, 12);
pub const DAY_OF_WEEK: FieldSpec = FieldSpec::new("day of week", "dayW", 0, 6);

/// Canonical parse order.
pub const FIELDS: [FieldSpec; 5] = [MINUTE, HOUR, DAY_OF_MONTH, MONTH, DAY_OF_WEEK];

impl FieldSpec {
    pub const fn new(name: &'static str, key: &'static str, min: u32, max: u32) -> Self {
        Self { name, key, min, max }
    }
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
    /// Every value of the field, ascending.
    pub fn all(&self) -> Vec<u32> {
        (self.min..=self.max).collect()
    }
}

pub fn by_key(key: &str) -> Option<FieldSpec> {
    FIELDS.iter().copied().find(|f| f.key == key)
}
