use std::ops::Range;

/// Splits `range` into at most `workers` contiguous chunks. Every chunk gets
/// `len / workers` indices and the last one also takes the remainder.
pub fn partition(range: Range<u64>, workers: usize) -> Vec<Range<u64>> {
    let len = range.end.saturating_sub(range.start);
    if len == 0 || workers == 0 {
        return Vec::new();
    }

    let num_workers = (workers as u64).min(len);
    let per_worker = len / num_workers;
    let remainder = len % num_workers;

    let mut chunks = Vec::with_capacity(num_workers as usize);
    for worker_id in 0..num_workers {
        let start = range.start + worker_id * per_worker;
        let end = if worker_id == num_workers - 1 {
            start + per_worker + remainder
        } else {
            start + per_worker
        };
        chunks.push(start..end);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(chunks: &[Range<u64>]) -> u64 {
        chunks.iter().map(|c| c.end - c.start).sum()
    }

    #[test]
    fn splits_evenly() {
        let chunks = partition(0..100, 4);
        assert_eq!(chunks, vec![0..25, 25..50, 50..75, 75..100]);
    }

    #[test]
    fn last_chunk_takes_remainder() {
        let chunks = partition(1..11, 3);
        assert_eq!(chunks, vec![1..4, 4..7, 7..11]);
        assert_eq!(covered(&chunks), 10);
    }

    #[test]
    fn fewer_indices_than_workers() {
        let chunks = partition(5..8, 16);
        assert_eq!(chunks, vec![5..6, 6..7, 7..8]);
    }

    #[test]
    fn empty_range_has_no_chunks() {
        assert!(partition(1..1, 4).is_empty());
        assert!(partition(0..10, 0).is_empty());
    }

    #[test]
    fn chunks_are_contiguous() {
        let chunks = partition(1..1_000_003, 7);
        assert_eq!(chunks.first().map(|c| c.start), Some(1));
        assert_eq!(chunks.last().map(|c| c.end), Some(1_000_003));
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
