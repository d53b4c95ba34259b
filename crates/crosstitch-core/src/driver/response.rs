use crate::stmt::ValueRecord;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

/// Result rows of a read.
///
/// Backends may answer with a single record rather than a sequence; callers
/// normalize via [`Rows::into_vec`] before any per-record logic runs.
#[derive(Debug)]
pub enum Rows {
    /// A single record
    One(ValueRecord),

    /// Zero or more records
    Many(Vec<ValueRecord>),
}

impl Response {
    pub fn record(record: ValueRecord) -> Self {
        Self {
            rows: Rows::One(record),
        }
    }

    pub fn records(records: Vec<ValueRecord>) -> Self {
        Self {
            rows: Rows::Many(records),
        }
    }
}

impl Rows {
    pub fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(_) => false,
            Self::Many(records) => records.is_empty(),
        }
    }

    /// Normalizes one-or-many to a sequence.
    pub fn into_vec(self) -> Vec<ValueRecord> {
        match self {
            Self::One(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}
