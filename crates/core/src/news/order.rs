use std::cmp::Ordering;

use super::NewsRecord;

/// Columns a news query can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsColumn {
    Sort,
    Id,
}

impl NewsColumn {
    /// Column name in the `news` table.
    pub fn as_sql(&self) -> &'static str {
        match self {
            NewsColumn::Sort => "sort",
            NewsColumn::Id => "id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// An ordered list of `(column, direction)` pairs.
///
/// The default is the paging order: sort field ascending, then id
/// ascending. Missing sort values compare lowest, matching SQLite's
/// handling of `NULL` in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsOrder(Vec<(NewsColumn, Direction)>);

impl Default for NewsOrder {
    fn default() -> Self {
        Self(vec![
            (NewsColumn::Sort, Direction::Asc),
            (NewsColumn::Id, Direction::Asc),
        ])
    }
}

impl NewsOrder {
    pub fn new(keys: Vec<(NewsColumn, Direction)>) -> Self {
        Self(keys)
    }

    pub fn keys(&self) -> &[(NewsColumn, Direction)] {
        &self.0
    }

    /// Compares two records under this ordering.
    pub fn compare(&self, a: &NewsRecord, b: &NewsRecord) -> Ordering {
        for (column, direction) in &self.0 {
            let ordering = match column {
                NewsColumn::Sort => a.sort.cmp(&b.sort),
                NewsColumn::Id => a.id.cmp(&b.id),
            };
            let ordering = match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Renders the `ORDER BY` body, e.g. `sort ASC, id ASC`.
    pub fn to_sql(&self) -> String {
        self.0
            .iter()
            .map(|(column, direction)| format!("{} {}", column.as_sql(), direction.as_sql()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Sorts records in place under the given ordering.
pub fn sort_records(records: &mut [NewsRecord], order: &NewsOrder) {
    records.sort_by(|a, b| order.compare(a, b));
}
