//! Page-number window for pagination controls.

const LEFT_EDGE: u64 = 2;
const LEFT_CURRENT: u64 = 2;
const RIGHT_CURRENT: u64 = 4;
const RIGHT_EDGE: u64 = 2;

/// Number of pages needed for `total_items` at `page_size`. Never less than 1.
pub fn page_count(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_items.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page numbers to render around `current_page`; `None` marks an ellipsis gap.
///
/// Bounds are computed in `u64` so windows at the top of the `u32` range
/// cannot overflow.
pub fn page_window(total_pages: u32, current_page: u32) -> Vec<Option<u32>> {
    if total_pages == 0 {
        return Vec::new();
    }
    let last_page = u64::from(total_pages);
    let current_page = u64::from(current_page.clamp(1, total_pages));

    let mut spans: Vec<Option<u64>> = Vec::new();

    let left_end = (1 + LEFT_EDGE).min(last_page + 1);
    spans.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(LEFT_CURRENT));
    let mid_end = (current_page + RIGHT_CURRENT + 1).min(last_page + 1);

    if mid_start > left_end {
        spans.push(None);
    }
    spans.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(RIGHT_EDGE) + 1);
    if right_start > mid_end {
        spans.push(None);
    }
    spans.extend((right_start..=last_page).map(Some));

    // Every page is within 1..=total_pages, so the narrowing never fails.
    spans
        .into_iter()
        .map(|page| page.and_then(|p| u32::try_from(p).ok()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_small_window_has_no_gaps() {
        assert_eq!(page_window(3, 2), vec![Some(1), Some(2), Some(3)]);
        assert!(page_window(0, 1).is_empty());
    }

    #[test]
    fn test_window_at_top_of_range() {
        let max = u32::MAX;
        assert_eq!(
            page_window(max, max),
            vec![Some(1), Some(2), None, Some(max - 2), Some(max - 1), Some(max)]
        );
        assert_eq!(
            page_window(max, 1),
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                None,
                Some(max - 1),
                Some(max),
            ]
        );
        assert_eq!(page_count(u64::MAX, 1), max);
    }

    #[test]
    fn test_window_with_gaps() {
        assert_eq!(
            page_window(20, 10),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }
}
