use super::*;
use crate::test_helpers::test_rng;
use crate::{MaxFirst, MinFirst};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn less(a: &i32, b: &i32) -> bool {
    a < b
}

fn check_heap<T, O: Before<T>>(heap: &Heap<T, O>) {
    let data = heap.as_slice();
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert!(
            !heap.order().before(&data[i], &data[parent]),
            "element at {i} comes before its parent at {parent}"
        );
    }
}

#[test]
fn test_pop_in_order() {
    let mut heap = Heap::new(less);
    heap.push(5);
    heap.push(3);
    heap.push(8);
    heap.push(1);

    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.pop(), Ok(8));
    assert!(heap.is_empty());
}

#[test]
fn test_empty_pop_and_peek() {
    let mut heap = Heap::new(less);

    assert_eq!(heap.pop(), Err(EmptyHeap::of::<i32>()));
    assert_eq!(heap.peek(), Err(EmptyHeap::of::<i32>()));
    assert_eq!(heap.peek_or(-1), -1);
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_empty_heap_error() {
    let mut heap: Heap<u64, MinFirst<u64>> = Heap::default();
    let err = heap.pop().unwrap_err();

    assert_eq!(err.type_name(), "u64");
    assert_eq!(err.to_string(), "no more entries of type u64");
}

#[test]
fn test_clone_independence() {
    let mut heap = Heap::new(less);
    heap.push(10);
    heap.push(20);

    let mut copy = heap.clone();
    copy.push(5);

    assert_eq!(heap.len(), 2);
    assert_eq!(copy.len(), 3);
    assert_eq!(heap.peek(), Ok(&10));
    assert_eq!(copy.peek(), Ok(&5));

    assert_eq!(heap.pop(), Ok(10));
    assert_eq!(copy.as_slice().len(), 3);
    assert_eq!(copy.into_sorted_vec(), [5, 10, 20]);
    assert_eq!(heap.into_sorted_vec(), [20]);
}

#[test]
fn test_clone_from() {
    let mut a = Heap::from_vec(less, vec![3, 1, 2]);
    let b = Heap::from_vec(less, vec![9, 7, 8, 6]);

    a.clone_from(&b);
    assert_eq!(a.as_slice(), b.as_slice());
    assert_eq!(a.into_sorted_vec(), [6, 7, 8, 9]);
}

#[test]
fn test_clone_from_takes_source_order() {
    fn greater(a: &i32, b: &i32) -> bool {
        a > b
    }

    let smallest_first: fn(&i32, &i32) -> bool = less;
    let largest_first: fn(&i32, &i32) -> bool = greater;

    let mut dst = Heap::from_vec(largest_first, vec![9, 3, 6]);
    let src = Heap::from_vec(smallest_first, vec![5, 4, 3, 2, 1]);

    dst.clone_from(&src);
    check_heap(&dst);
    assert_eq!(dst.as_slice(), src.as_slice());
    assert_eq!(dst.peek(), Ok(&1));

    dst.push(0);
    dst.push(7);
    check_heap(&dst);
    assert_eq!(dst.into_sorted_vec(), [0, 1, 2, 3, 4, 5, 7]);
    assert_eq!(src.clone().into_sorted_vec(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_shared_comparator() {
    let calls = Cell::new(0);
    let cmp = |a: &i32, b: &i32| {
        calls.set(calls.get() + 1);
        a < b
    };

    let mut first = Heap::new(&cmp);
    first.push(2);
    first.push(1);
    let mut second = first.clone();
    second.push(0);

    assert_eq!(calls.get(), 2);
    assert_eq!(first.peek(), Ok(&1));
    assert_eq!(second.peek(), Ok(&0));
}

#[test]
fn test_drain_sorted() {
    let mut heap = Heap::new(less);
    for x in [4, 2, 6, 1, 3] {
        heap.push(x);
    }
    let len = heap.len();

    let drained: Vec<_> = heap.drain_sorted().collect();
    assert_eq!(drained, [1, 2, 3, 4, 6]);
    assert_eq!(drained.len(), len);
    assert!(heap.is_empty());
}

#[test]
fn test_drain_sorted_stops_early() {
    let mut heap = Heap::from_vec(less, (0..10).rev().collect());

    let mut drain = heap.drain_sorted();
    assert_eq!(drain.size_hint(), (10, Some(10)));
    assert_eq!(drain.next(), Some(0));
    assert_eq!(drain.next(), Some(1));
    assert_eq!(drain.len(), 8);
    drop(drain);

    assert_eq!(heap.len(), 8);
    check_heap(&heap);
    assert_eq!(heap.peek(), Ok(&2));

    for (i, x) in heap.drain_sorted().enumerate() {
        if i == 3 {
            assert_eq!(x, 5);
            break;
        }
    }
    assert_eq!(heap.len(), 4);
    check_heap(&heap);
    assert_eq!(heap.into_sorted_vec(), [6, 7, 8, 9]);
}

#[test]
fn test_drain_sorted_empty() {
    let mut heap = Heap::new(less);
    let mut drain = heap.drain_sorted();
    assert_eq!(drain.next(), None);
    assert_eq!(drain.next(), None);
}

#[test]
fn test_duplicates() {
    let mut heap = Heap::new(less);
    heap.push(7);
    heap.push(7);

    assert_eq!(heap.pop(), Ok(7));
    assert_eq!(heap.pop(), Ok(7));
    assert!(heap.pop().is_err());
}

#[test]
fn test_peek_matches_pop() {
    let mut rng = test_rng();
    let mut heap = Heap::new(less);
    for _ in 0..100 {
        heap.push(rng.gen_range(-50..50));
    }

    while let Ok(&top) = heap.peek() {
        let len = heap.len();
        assert_eq!(heap.peek_or(i32::MAX), top);
        assert_eq!(heap.len(), len);
        assert_eq!(heap.pop(), Ok(top));
        assert_eq!(heap.len(), len - 1);
    }
    assert!(heap.is_empty());
}

#[test]
fn test_sibling_order() {
    // Ordered by key only; the tag tells equivalent elements apart.
    let by_key = |a: &(u8, char), b: &(u8, char)| a.0 < b.0;

    // A left child strictly before the right is promoted.
    let mut heap = Heap::new(by_key);
    for x in [(0, 'a'), (1, 'b'), (2, 'c'), (5, 'd')] {
        heap.push(x);
    }
    assert_eq!(heap.pop(), Ok((0, 'a')));
    assert_eq!(heap.as_slice(), [(1, 'b'), (5, 'd'), (2, 'c')]);

    // A right child strictly before the left is promoted.
    let mut heap = Heap::new(by_key);
    for x in [(0, 'a'), (2, 'b'), (1, 'c'), (5, 'd')] {
        heap.push(x);
    }
    assert_eq!(heap.pop(), Ok((0, 'a')));
    assert_eq!(heap.as_slice(), [(1, 'c'), (2, 'b'), (5, 'd')]);

    // Between equivalent children, the right one is checked first and the
    // left one cannot displace it.
    let mut heap = Heap::new(by_key);
    for x in [(0, 'a'), (1, 'b'), (1, 'c'), (5, 'd')] {
        heap.push(x);
    }
    assert_eq!(heap.pop(), Ok((0, 'a')));
    assert_eq!(heap.as_slice(), [(1, 'c'), (1, 'b'), (5, 'd')]);
    assert_eq!(heap.into_sorted_vec(), [(1, 'c'), (1, 'b'), (5, 'd')]);
}

#[test]
fn test_sift_up_stops_at_equivalent_parent() {
    let by_key = |a: &(u8, char), b: &(u8, char)| a.0 < b.0;
    let mut heap = Heap::new(by_key);
    heap.push((3, 'a'));
    heap.push((3, 'b'));

    assert_eq!(heap.as_slice(), [(3, 'a'), (3, 'b')]);
    assert_eq!(heap.pop(), Ok((3, 'a')));
}

#[test]
fn test_random_push_pop() {
    let mut rng = test_rng();
    let mut heap = Heap::new(less);
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..2000 {
        if model.is_empty() || rng.gen_bool(0.6) {
            let x = rng.gen_range(-100..100);
            heap.push(x);
            model.push(x);
        } else {
            model.sort_unstable();
            let expected = model.remove(0);
            assert_eq!(heap.pop(), Ok(expected));
        }
        check_heap(&heap);
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.is_empty(), model.is_empty());
    }

    model.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), model);
}

#[test]
fn test_max_first() {
    let mut rng = test_rng();
    let mut data: Vec<u32> = (0..200).collect();
    data.shuffle(&mut rng);

    let mut heap: Heap<u32, _> = Heap::new(MaxFirst::new());
    heap.extend(&data);
    check_heap(&heap);

    data.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), data);
}

#[test]
fn test_from_vec() {
    let mut rng = test_rng();
    for len in 0..40 {
        let data: Vec<i32> = (0..len).map(|_| rng.gen_range(0..20)).collect();

        let built = Heap::from_vec(less, data.clone());
        check_heap(&built);

        let mut pushed = Heap::new(less);
        pushed.extend(data.iter().copied());

        let mut sorted = data;
        sorted.sort_unstable();
        assert_eq!(built.into_sorted_vec(), sorted);
        assert_eq!(pushed.into_sorted_vec(), sorted);
    }
}

#[test]
fn test_from_and_collect() {
    let heap: Heap<_, MinFirst<_>> = [3, 1, 4, 1, 5, 9, 2, 6].into();
    check_heap(&heap);
    assert_eq!(heap.peek(), Ok(&1));

    let heap: Heap<_, MaxFirst<_>> = (0..10).collect();
    check_heap(&heap);
    assert_eq!(heap.into_iter_sorted().take(3).collect::<Vec<_>>(), [9, 8, 7]);
}

#[test]
fn test_into_iter_sorted_size_hint() {
    let heap = Heap::from_vec(less, vec![2, 1, 3]);
    let mut it = heap.into_iter_sorted();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.size_hint(), (2, Some(2)));
}

#[test]
fn test_iter_and_into_vec() {
    let heap = Heap::from_vec(less, vec![5, 4, 3, 2, 1]);
    let storage = heap.as_slice().to_vec();

    assert_eq!(heap.iter().copied().collect::<Vec<_>>(), storage);
    assert_eq!((&heap).into_iter().count(), 5);
    assert_eq!(heap.clone().into_iter().collect::<Vec<_>>(), storage);
    assert_eq!(heap.into_vec(), storage);
}

#[test]
fn test_capacity_and_clear() {
    let mut heap = Heap::with_capacity(less, 16);
    assert!(heap.capacity() >= 16);
    assert!(heap.is_empty());

    heap.extend([1, 2, 3]);
    heap.reserve(100);
    assert!(heap.capacity() >= 103);

    heap.clear();
    assert!(heap.is_empty());
    heap.shrink_to_fit();
    assert_eq!(heap.pop().ok(), None);

    let heap: Heap<i32, _> = Heap::with_capacity(less, 0);
    assert_eq!(heap.capacity(), 0);
}

#[test]
fn test_debug() {
    let mut heap = Heap::new(less);
    heap.push(1);
    heap.push(3);
    heap.push(2);

    assert_eq!(format!("{heap:?}"), "[1, 3, 2]");
    assert_eq!(format!("{:?}", heap.iter()), "Iter([1, 3, 2])");
    assert_eq!(format!("{:?}", MinFirst::<i32>::new()), "MinFirst");
}

#[test]
fn test_comparator_panic_keeps_elements() {
    let cmp = |a: &i32, b: &i32| {
        if *a == 13 || *b == 13 {
            panic!("unlucky");
        }
        a < b
    };
    let mut heap = Heap::new(cmp);
    heap.extend([4, 8, 2, 6]);

    let result = catch_unwind(AssertUnwindSafe(|| heap.push(13)));
    assert!(result.is_err());

    let mut remaining = heap.into_vec();
    remaining.sort_unstable();
    assert_eq!(remaining, [2, 4, 6, 8, 13]);
}
