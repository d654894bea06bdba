//! End-to-end queue behavior against randomized and fixed scenarios.

use ordq::OwnedSortedQueue;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn make_rng() -> SmallRng {
    SmallRng::seed_from_u64(12345)
}

/// Pushes `size` random values and returns them sorted ascending.
fn fill_random(queue: &mut OwnedSortedQueue<i32>, rng: &mut SmallRng, size: usize) -> Vec<i32> {
    let mut values = Vec::with_capacity(size);
    for _ in 0..size {
        let value = rng.gen_range(0..1000);
        values.push(value);
        queue.push(value);
    }
    values.sort_unstable();
    values
}

#[test]
fn push_random_matches_sorted() {
    let mut rng = make_rng();

    for size in [0usize, 10, 100] {
        let mut queue = OwnedSortedQueue::new();
        let expected = fill_random(&mut queue, &mut rng, size);

        assert_eq!(queue.to_vec(), expected);
        assert_eq!(queue.len(), size);
    }
}

#[test]
fn pop_empty_returns_none() {
    let mut queue: OwnedSortedQueue<i32> = OwnedSortedQueue::new();

    assert_eq!(queue.pop(), None);
    assert_eq!(queue.len(), 0);
}

#[test]
fn pop_random_returns_minimum() {
    let mut rng = make_rng();

    for size in [10usize, 100] {
        let mut queue = OwnedSortedQueue::new();
        let expected = fill_random(&mut queue, &mut rng, size);

        assert_eq!(queue.pop(), Some(expected[0]));
    }
}

#[test]
fn drain_matches_full_sort() {
    let mut rng = make_rng();
    let mut queue = OwnedSortedQueue::new();
    let expected = fill_random(&mut queue, &mut rng, 100);

    let mut drained = Vec::new();
    while let Some(value) = queue.pop() {
        drained.push(value);
    }

    assert_eq!(drained, expected);
    assert_eq!(queue.len(), 0);
}

#[test]
fn copy_matches_source() {
    let mut rng = make_rng();
    let mut q1 = OwnedSortedQueue::new();
    fill_random(&mut q1, &mut rng, 10);

    let q2 = q1.clone();

    assert_eq!(q1.to_vec(), q2.to_vec());
    assert_eq!(q1.len(), q2.len());
}

#[test]
fn copy_is_independent_both_ways() {
    let mut rng = make_rng();
    let mut q1 = OwnedSortedQueue::new();
    fill_random(&mut q1, &mut rng, 10);

    let before = q1.to_vec();
    let mut q2 = q1.clone();

    // Mutating the copy leaves the source untouched
    q2.push(-1);
    q2.pop();
    q2.pop();
    assert_eq!(q1.to_vec(), before);

    // And the other way around
    let snapshot = q2.to_vec();
    q1.clear();
    assert_eq!(q2.to_vec(), snapshot);
}

#[test]
fn move_leaves_source_empty() {
    let mut rng = make_rng();
    let mut q1 = OwnedSortedQueue::new();
    let expected = fill_random(&mut q1, &mut rng, 10);

    let q2 = q1.take();

    assert_eq!(q2.to_vec(), expected);
    assert_eq!(q1.len(), 0);
}

#[test]
fn move_into_binding_transfers_contents() {
    let mut rng = make_rng();
    let mut q1 = OwnedSortedQueue::new();
    let expected = fill_random(&mut q1, &mut rng, 10);

    let q2 = q1;

    assert_eq!(q2.to_vec(), expected);
    assert_eq!(q2.len(), 10);
}

#[test]
fn fixed_scenario() {
    let mut q1: OwnedSortedQueue<i32> = OwnedSortedQueue::new();
    let mut q2: OwnedSortedQueue<i32> = OwnedSortedQueue::new();

    q1.push(8);
    q1.push(4);
    q1.push(3);

    q2.push(1);
    q2.push(2);
    q2.push(7);
    q2.push(0);

    assert_eq!(q1.to_vec(), vec![3, 4, 8]);
    assert_eq!(q2.to_vec(), vec![0, 1, 2, 7]);

    let q3 = q1.take();
    q2.clear();

    assert_eq!(q1.len(), 0);
    assert_eq!(q1.to_vec(), Vec::<i32>::new());
    assert_eq!(q2.len(), 0);
    assert_eq!(q2.to_vec(), Vec::<i32>::new());
    assert_eq!(q3.to_vec(), vec![3, 4, 8]);
}

#[test]
fn len_always_matches_drain_count() {
    let mut rng = make_rng();
    let mut queue: OwnedSortedQueue<i32> = OwnedSortedQueue::new();

    for _ in 0..50 {
        queue.push(rng.gen_range(0..100));
    }
    for _ in 0..20 {
        queue.pop();
    }
    queue.extend([5, 5, 5]);

    let reported = queue.len();
    let mut count = 0;
    while queue.pop().is_some() {
        count += 1;
    }

    assert_eq!(reported, count);
}
