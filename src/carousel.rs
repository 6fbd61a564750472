//! Index arithmetic shared by the testimonial rotation and the services pager.
//! Every function treats an empty sequence as having the single index 0.

pub fn wrap_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index % len
    }
}

pub fn next_index(index: usize, len: usize) -> usize {
    wrap_index(wrap_index(index, len) + 1, len)
}

pub fn prev_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (wrap_index(index, len) + len - 1) % len
}

pub fn page_count(items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    items.div_ceil(per_page)
}

/// Pulls a page index back into range after the item count shrank.
pub fn clamp_page(page: usize, pages: usize) -> usize {
    if pages == 0 {
        0
    } else {
        page.min(pages - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_after_n_steps() {
        let len = 5;
        for start in 0..len {
            let mut index = start;
            for n in 1..=12 {
                index = next_index(index, len);
                assert_eq!(index, (start + n) % len);
            }
        }
    }

    #[test]
    fn prev_wraps_after_n_steps() {
        let len = 5;
        for start in 0..len {
            let mut index = start;
            for n in 1..=12 {
                index = prev_index(index, len);
                assert_eq!(index, (start + 3 * len - n) % len);
            }
        }
    }

    #[test]
    fn empty_sequence_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(3, 0), 0);
        assert_eq!(wrap_index(7, 0), 0);
    }

    #[test]
    fn pages_round_up() {
        assert_eq!(page_count(0, 2), 0);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(6, 2), 3);
        assert_eq!(page_count(1, 2), 1);
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(2, 1), 0);
        assert_eq!(clamp_page(4, 0), 0);
    }
}
