use johnson_apsp::data_structures::BinaryHeapWrapper;
use johnson_apsp::{BinaryHeap, Error, HeapOrder, PriorityQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn drain<Q: PriorityQueue<f64, usize>>(queue: &mut Q) -> Vec<f64> {
    let mut keys = Vec::new();
    while !queue.is_empty() {
        keys.push(queue.extract_min().unwrap().0);
    }
    keys
}

fn is_heap(items: &[(i32, char)], order: HeapOrder) -> bool {
    (1..items.len()).all(|i| {
        let parent = items[(i - 1) / 2].0;
        match order {
            HeapOrder::Min => parent <= items[i].0,
            HeapOrder::Max => parent >= items[i].0,
        }
    })
}

#[test]
fn test_extracts_in_key_order() {
    let mut heap = BinaryHeap::min();
    for (i, key) in [5.0, 3.0, 8.0, 1.0].into_iter().enumerate() {
        heap.insert(key, i);
    }
    assert_eq!(heap.len(), 4);
    assert_eq!(drain(&mut heap), vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_max_heap_inverts_order() {
    let mut heap = BinaryHeap::max();
    for (i, key) in [5, 3, 8, 1].into_iter().enumerate() {
        heap.insert(key, i);
    }
    let mut keys = Vec::new();
    while let Ok((key, _)) = heap.extract_min() {
        keys.push(key);
    }
    assert_eq!(keys, vec![8, 5, 3, 1]);
}

#[test]
fn test_empty_heap_errors() {
    let mut heap: BinaryHeap<f64, usize> = BinaryHeap::min();
    assert_eq!(heap.peek(), Err(Error::EmptyHeap));
    assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));

    heap.insert(2.0, 7);
    assert_eq!(heap.peek(), Ok((&2.0, &7)));
    assert_eq!(heap.len(), 1, "peek must not remove the entry");
    heap.extract_min().unwrap();
    assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
}

#[test]
fn test_duplicate_keys_and_items() {
    let mut heap = BinaryHeap::min();
    heap.insert(4.0, 1);
    heap.insert(4.0, 1);
    heap.insert(2.0, 1);
    heap.insert(4.0, 2);
    assert_eq!(drain(&mut heap), vec![2.0, 4.0, 4.0, 4.0]);
}

#[test]
fn test_from_vec_builds_valid_heap() {
    let items = vec![(9, 'a'), (4, 'b'), (7, 'c'), (1, 'd'), (8, 'e'), (2, 'f'), (2, 'g')];

    let min = BinaryHeap::from_vec(items.clone(), HeapOrder::Min);
    assert_eq!(min.peek().unwrap().0, &1);
    assert!(is_heap(&min.into_vec(), HeapOrder::Min));

    let max = BinaryHeap::from_vec(items, HeapOrder::Max);
    assert_eq!(max.order(), HeapOrder::Max);
    assert_eq!(max.peek().unwrap().0, &9);
    assert!(is_heap(&max.into_vec(), HeapOrder::Max));
}

#[test]
fn test_heap_shape_kept_under_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap = BinaryHeap::min();
    for i in 0..300 {
        if rng.gen_bool(0.3) {
            let _ = heap.extract_min();
        } else {
            heap.insert(rng.gen_range(-50..50), char::from(b'a' + (i % 26) as u8));
        }
    }
    assert!(is_heap(&heap.into_vec(), HeapOrder::Min));
}

#[test]
fn test_matches_reference_sort() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap = BinaryHeap::min();
    let mut reference: Vec<f64> = Vec::new();

    for i in 0..500 {
        if !reference.is_empty() && rng.gen_bool(0.4) {
            reference.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let expected = reference.remove(0);
            let (key, _) = heap.extract_min().unwrap();
            assert_eq!(key, expected);
        } else {
            let key = rng.gen_range(0..100) as f64;
            heap.insert(key, i);
            reference.push(key);
        }
    }

    reference.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(drain(&mut heap), reference);
}

#[test]
fn test_std_wrapper_agrees_with_binary_heap() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut ours = BinaryHeap::min();
    let mut wrapper = BinaryHeapWrapper::new();

    for i in 0..200usize {
        let key = rng.gen_range(0.0..10.0);
        ours.insert(key, i);
        wrapper.insert(key, i);
    }

    assert_eq!(wrapper.peek().unwrap().0, ours.peek().unwrap().0);
    assert_eq!(drain(&mut ours), drain(&mut wrapper));
    assert_eq!(wrapper.extract_min(), Err(Error::EmptyHeap));
}

#[test]
fn test_clear_empties_queue() {
    let mut heap = BinaryHeap::min();
    heap.insert(1.0, 0usize);
    heap.insert(2.0, 1usize);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), Err(Error::EmptyHeap));
}
