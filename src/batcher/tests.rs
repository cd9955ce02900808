use super::*;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("name{}", i)).collect()
}

#[test]
fn test_batching_small() {
    let batcher = Batcher::new(3);
    let items = names(5);

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[1].len(), 2);
}

#[test]
fn test_batching_exact_size() {
    let batcher = Batcher::new(5);
    let items = vec!["a".to_string(); 10];

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 5);
    assert_eq!(batches[1].len(), 5);
}

#[test]
fn test_batching_empty() {
    let batcher = Batcher::new(100);
    let items: Vec<String> = vec![];

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 0);
    assert_eq!(batcher.batch_count(0), 0);
}

#[test]
fn test_batch_count_matches_split() {
    for size in 1..=12 {
        let batcher = Batcher::new(size);
        for n in 0..=40 {
            let items = names(n);
            let batches = batcher.split(&items);
            assert_eq!(batches.len(), batcher.batch_count(n), "n={} size={}", n, size);
            assert_eq!(batches.len(), (n + size - 1) / size);
            assert!(batches.iter().all(|b| !b.is_empty() && b.len() <= size));
        }
    }
}

#[test]
fn test_concatenation_preserves_order() {
    let batcher = Batcher::new(4);
    let items = names(11);

    let rejoined: Vec<String> = batcher
        .split(&items)
        .into_iter()
        .flat_map(|b| b.iter().cloned())
        .collect();

    assert_eq!(rejoined, items);
}

#[test]
fn test_twenty_five_into_tens() {
    let batcher = Batcher::default();
    let items = names(25);

    let lens: Vec<usize> = batcher.split(&items).iter().map(|b| b.len()).collect();
    assert_eq!(lens, vec![10, 10, 5]);
}

#[test]
#[should_panic(expected = "batch size must be positive")]
fn test_zero_batch_size_panics() {
    let _ = Batcher::new(0);
}
