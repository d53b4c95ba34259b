use super::Column;

/// The projection part of a [`Select`](super::Select).
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// All fields; the caller gave no explicit column list.
    Star,

    /// An explicit, ordered column list.
    Columns(Vec<Column>),
}

impl Returning {
    pub fn columns(columns: impl IntoIterator<Item = Column>) -> Self {
        Self::Columns(columns.into_iter().collect())
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star)
    }

    pub fn as_columns(&self) -> Option<&[Column]> {
        match self {
            Self::Columns(columns) => Some(columns),
            _ => None,
        }
    }

    pub fn as_columns_mut(&mut self) -> Option<&mut Vec<Column>> {
        match self {
            Self::Columns(columns) => Some(columns),
            _ => None,
        }
    }
}

impl FromIterator<Column> for Returning {
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self {
        Self::Columns(iter.into_iter().collect())
    }
}
