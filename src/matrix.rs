use crate::error::SelectError;
use crate::heap::OrderedHeap;

/// The frontier of one row during the k-way merge.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    value: i64,
    row: usize,
    col: usize,
}

/// Returns the k-th smallest element of a matrix whose rows and columns are
/// each sorted ascending.
///
/// The matrix is treated as a merge of its rows: a min-heap holds one
/// cursor per unexhausted row frontier, and k-1 extractions advance the
/// merge to the answer. Only the first min(k, rows) rows are seeded — with
/// columns sorted ascending, row i starts no earlier than position i+1 in
/// the merged order, so rows at or past k cannot reach the k-th position.
///
/// Complexity: O(k log n) for n rows, independent of the column count
/// beyond indexing.
pub fn kth_smallest_in_sorted_matrix(matrix: &[Vec<i64>], k: usize) -> Result<i64, SelectError> {
    let rows = matrix.len();
    if rows == 0 || matrix[0].is_empty() {
        return Err(SelectError::InvalidArgument(
            "matrix must be non-empty".to_string(),
        ));
    }
    let cols = matrix[0].len();
    if matrix.iter().any(|row| row.len() != cols) {
        return Err(SelectError::InvalidArgument(
            "matrix rows must have uniform width".to_string(),
        ));
    }
    let total = rows * cols;
    if k == 0 || k > total {
        return Err(SelectError::InvalidArgument(format!(
            "k ({}) outside [1, {}]",
            k, total
        )));
    }

    let seeded = rows.min(k);
    let mut heap = OrderedHeap::with_capacity(seeded, |a: &Cursor, b: &Cursor| {
        a.value.cmp(&b.value)
    });
    for row in 0..seeded {
        heap.push(Cursor {
            value: matrix[row][0],
            row,
            col: 0,
        });
    }

    for _ in 1..k {
        let cursor = heap.pop()?;
        let next_col = cursor.col + 1;
        if next_col < cols {
            heap.push(Cursor {
                value: matrix[cursor.row][next_col],
                row: cursor.row,
                col: next_col,
            });
        }
    }

    Ok(heap.peek()?.value)
}
