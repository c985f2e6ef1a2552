use crate::host::Indexed;

/// One resource record from a dig answer section.
///
/// Records are not sequenced; they are grouped by `record_type` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigRecord {
    pub name: String,
    pub ttl: String,
    pub class: String,
    pub record_type: String,
    /// Record data with any trailing root dot removed.
    pub value: String,
}

impl Indexed for DigRecord {
    fn index(&self) -> Option<u64> {
        None
    }

    fn bucket(&self) -> Option<&str> {
        Some(&self.record_type)
    }
}
