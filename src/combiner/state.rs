use crate::table::Table;

/// What the combiner currently holds as its result
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CombinedState {
    /// Nothing combined yet
    #[default]
    Unset,
    /// Result of the last successful combine
    Table(Table),
    /// A value was stored that is not a table
    Invalid,
}

impl CombinedState {
    /// Borrow the table, if there is one
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            CombinedState::Table(table) => Some(table),
            CombinedState::Unset | CombinedState::Invalid => None,
        }
    }
}
