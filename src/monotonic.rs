use crate::error::SelectError;

/// For each value, the distance to the next strictly greater value later in
/// the sequence, or 0 when no later value is greater.
///
/// A stack of indices still waiting for a dominating value makes the scan
/// O(n): each index is pushed once and settled at most once.
pub fn daily_temperatures(values: &[i64]) -> Vec<usize> {
    let mut result = vec![0; values.len()];
    let mut waiting: Vec<usize> = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        while let Some(&pending) = waiting.last() {
            if values[pending] >= value {
                break;
            }
            result[pending] = i - pending;
            waiting.pop();
        }
        waiting.push(i);
    }

    result
}

/// Largest rectangle area under a histogram of bar heights.
///
/// A virtual zero-height bar past the end flushes the stack, so every bar's
/// maximal extent is settled exactly once.
pub fn largest_rectangle_area(heights: &[u64]) -> u64 {
    let mut stack: Vec<usize> = Vec::new();
    let mut max_area = 0;

    for i in 0..=heights.len() {
        let current = heights.get(i).copied().unwrap_or(0);
        while let Some(&top) = stack.last() {
            if heights[top] <= current {
                break;
            }
            stack.pop();
            let width = match stack.last() {
                Some(&left) => i - left - 1,
                None => i,
            };
            max_area = max_area.max(heights[top] * width as u64);
        }
        stack.push(i);
    }

    max_area
}

/// Largest all-ones rectangle in a rectangular 0/1 grid, computed row by
/// row as a histogram of consecutive-ones column heights.
pub fn maximal_rectangle(grid: &[Vec<u8>]) -> Result<u64, SelectError> {
    if grid.is_empty() {
        return Ok(0);
    }
    let cols = grid[0].len();
    if grid.iter().any(|row| row.len() != cols) {
        return Err(SelectError::InvalidArgument(
            "grid rows must have uniform width".to_string(),
        ));
    }

    let mut heights = vec![0u64; cols];
    let mut max_area = 0;

    for row in grid {
        for (height, &cell) in heights.iter_mut().zip(row) {
            if cell != 0 {
                *height += 1;
            } else {
                *height = 0;
            }
        }
        max_area = max_area.max(largest_rectangle_area(&heights));
    }

    Ok(max_area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_temperatures_basic() {
        assert_eq!(
            daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]),
            vec![1, 1, 4, 2, 1, 1, 0, 0]
        );
        assert_eq!(daily_temperatures(&[30, 40, 50, 60]), vec![1, 1, 1, 0]);
        assert_eq!(daily_temperatures(&[30, 60, 90]), vec![1, 1, 0]);
    }

    #[test]
    fn test_daily_temperatures_never_warmer() {
        assert_eq!(daily_temperatures(&[9, 8, 7]), vec![0, 0, 0]);
        assert_eq!(daily_temperatures(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_daily_temperatures_equal_values_wait() {
        // Equal is not greater: the middle value waits for the last one
        assert_eq!(daily_temperatures(&[5, 5, 6]), vec![2, 1, 0]);
    }

    #[test]
    fn test_largest_rectangle_area_basic() {
        assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
        assert_eq!(largest_rectangle_area(&[2, 4]), 4);
        assert_eq!(largest_rectangle_area(&[1]), 1);
        assert_eq!(largest_rectangle_area(&[]), 0);
    }

    #[test]
    fn test_largest_rectangle_area_uniform_bars() {
        assert_eq!(largest_rectangle_area(&[3, 3, 3, 3]), 12);
    }

    #[test]
    fn test_maximal_rectangle_basic() {
        let grid = vec![
            vec![1, 0, 1, 0, 0],
            vec![1, 0, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 0, 1, 0],
        ];
        assert_eq!(maximal_rectangle(&grid).unwrap(), 6);
    }

    #[test]
    fn test_maximal_rectangle_degenerate() {
        assert_eq!(maximal_rectangle(&[]).unwrap(), 0);
        assert_eq!(maximal_rectangle(&[vec![0]]).unwrap(), 0);
        assert_eq!(maximal_rectangle(&[vec![1]]).unwrap(), 1);
    }

    #[test]
    fn test_maximal_rectangle_ragged_rejected() {
        let ragged = vec![vec![1, 0], vec![1]];
        assert!(matches!(
            maximal_rectangle(&ragged),
            Err(SelectError::InvalidArgument(_))
        ));
    }
}
