//! Sorting and pagination for the name table.
//!
//! Pages are 1-based. The stored page may point past the end after the
//! filtered list shrinks; readers clamp it through `current_page`.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use serde_json::Number;

use crate::net::types::{NameId, NameRecord};

pub const PAGE_SIZES: [usize; 3] = [25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    NameId,
    Name,
    Category,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub sort: Option<(SortColumn, SortDirection)>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self { sort: None, page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl TableState {
    /// Sort by `column`; clicking the active column flips the direction.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some((active, direction)) if active == column => (active, direction.flip()),
            _ => (column, SortDirection::Ascending),
        });
    }

    /// Indicator for a header cell; `↕` when the column is not sorted.
    pub fn sort_indicator(&self, column: SortColumn) -> &'static str {
        match self.sort {
            Some((active, direction)) if active == column => direction.indicator(),
            _ => "↕",
        }
    }

    /// Change page size and return to the first page. Sizes outside
    /// [`PAGE_SIZES`] are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self, total: usize) -> usize {
        self.page.clamp(1, self.page_count(total))
    }

    /// Sort `rows` and return the slice for the current page.
    pub fn page_rows(&self, rows: &[NameRecord]) -> Vec<NameRecord> {
        let mut rows = rows.to_vec();
        if let Some((column, direction)) = self.sort {
            sort_names(&mut rows, column, direction);
        }
        let start = (self.current_page(rows.len()) - 1) * self.page_size;
        rows.into_iter().skip(start).take(self.page_size).collect()
    }

    /// Footer text such as `51-100 of 230`.
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0 of 0".to_owned();
        }
        let start = (self.current_page(total) - 1) * self.page_size;
        let end = (start + self.page_size).min(total);
        format!("{}-{end} of {total}", start + 1)
    }
}

/// Stable sort of `rows` by `column`.
pub fn sort_names(rows: &mut [NameRecord], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::NameId => compare_ids(a.identifier(), b.identifier()),
            SortColumn::Name => compare_text(&a.name, &b.name),
            SortColumn::Category => compare_text(&a.category, &b.category),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_ids(a: Option<&NameId>, b: Option<&NameId>) -> Ordering {
    match (a, b) {
        (Some(NameId::Number(x)), Some(NameId::Number(y))) => compare_numbers(x, y),
        (Some(x), Some(y)) => compare_text(&x.to_string(), &y.to_string()),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    a.as_f64().unwrap_or_default().total_cmp(&b.as_f64().unwrap_or_default())
}
