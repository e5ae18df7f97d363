// Column sort verification against a rendered table
//
// The verifier is generic over a `TableAccessor` so it can run against a
// live page or an in-memory fake. Two sequential readouts per check:
// header scan to resolve the column, then the column's cell extraction.
// Each invocation is a pure function of the snapshot those readouts see.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::sort::{self, SortOrder};

/// Read access to a rendered table, keyed by its DOM id.
///
/// Implemented by the live [`Page`](crate::browser::Page) wrapper (feature
/// "browser") and by in-memory fakes in tests.
#[async_trait]
pub trait TableAccessor {
    /// Header cell texts in column order, trimmed by the implementation
    /// or not; the verifier trims before matching.
    async fn header_texts(&self, table_id: &str) -> Result<Vec<String>>;

    /// Body cell texts at a 1-based column position, in row order.
    async fn column_cells(&self, table_id: &str, column: usize) -> Result<Vec<String>>;
}

/// Resolves a column label to its 1-based position.
///
/// Scans headers left to right and takes the first whose trimmed text
/// contains `label` (case-sensitive substring). Returns `None` when no
/// header matches.
pub fn resolve_column(headers: &[String], label: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().contains(label))
        .map(|idx| idx + 1)
}

/// Checks whether a table column is currently sorted in `order`.
///
/// The column is located by `label` via substring containment against the
/// header row; no match is an [`Error::ColumnNotFound`], not a `false`
/// result. Cell values are trimmed and compared pairwise with
/// numeric-aware comparison and lexical fallback (see [`sort::is_sorted`]).
pub async fn is_column_sorted<A>(
    accessor: &A,
    table_id: &str,
    label: &str,
    order: SortOrder,
) -> Result<bool>
where
    A: TableAccessor + ?Sized,
{
    let headers = accessor.header_texts(table_id).await?;
    let column = resolve_column(&headers, label).ok_or_else(|| Error::ColumnNotFound {
        table: table_id.to_string(),
        label: label.to_string(),
    })?;

    let cells: Vec<String> = accessor
        .column_cells(table_id, column)
        .await?
        .into_iter()
        .map(|c| c.trim().to_string())
        .collect();

    debug!(
        table = table_id,
        label,
        column,
        rows = cells.len(),
        %order,
        "checking column sort order"
    );

    Ok(sort::is_sorted(&cells, order))
}
