//! Random operation sequences checked against `VecDeque`.

use std::cmp;
use std::collections::VecDeque;

use proptest::prelude::*;

use super::RingQueue;

#[derive(Clone, Debug)]
enum Op {
    Push(i64),
    Emplace(i64),
    FailedEmplace,
    PushFront(i64),
    Pop,
    PopFront,
    PopBack,
    Shrink,
    Reserve(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i64>().prop_map(Op::Push),
        2 => any::<i64>().prop_map(Op::Emplace),
        1 => Just(Op::FailedEmplace),
        1 => any::<i64>().prop_map(Op::PushFront),
        3 => Just(Op::Pop),
        1 => Just(Op::PopFront),
        1 => Just(Op::PopBack),
        1 => Just(Op::Shrink),
        1 => (1usize..1025).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

fn apply(queue: &mut RingQueue<i64>, golden: &mut VecDeque<i64>, op: &Op) {
    match *op {
        Op::Push(v) => {
            queue.push(v);
            golden.push_back(v);
        }
        Op::Emplace(v) => {
            assert_eq!(*queue.emplace(|| v), v);
            golden.push_back(v);
        }
        Op::FailedEmplace => {
            assert_eq!(queue.try_emplace(|| Err::<i64, ()>(())), Err(()));
        }
        Op::PushFront(v) => {
            queue.push_front(v);
            golden.push_front(v);
        }
        Op::Pop => {
            if !golden.is_empty() {
                queue.pop();
                golden.pop_front();
            }
        }
        Op::PopFront => assert_eq!(queue.pop_front(), golden.pop_front()),
        Op::PopBack => assert_eq!(queue.pop_back(), golden.pop_back()),
        Op::Shrink => {
            let before = queue.capacity();
            queue.shrink_to_fit();
            if golden.is_empty() {
                assert_eq!(queue.capacity(), 0);
            } else {
                assert!(queue.capacity() <= before);
            }
        }
        Op::Reserve(n) => {
            let before = queue.capacity();
            queue.reserve(n);
            assert!(queue.capacity() >= n);
            assert!(queue.capacity() >= before);
        }
        Op::Clear => {
            queue.clear();
            golden.clear();
        }
    }
}

fn check(queue: &RingQueue<i64>, golden: &VecDeque<i64>) {
    assert_eq!(queue.len(), golden.len());
    assert_eq!(queue.is_empty(), golden.is_empty());
    assert!(queue.len() <= queue.capacity());
    assert!(queue.capacity() == 0 || queue.capacity().is_power_of_two());
    assert_eq!(queue.capacity() == 0, queue.is_empty() && queue.is_full());
    assert_eq!(queue.tail, (queue.head + queue.len) & queue.mask);
    if let Some(front) = golden.front() {
        assert_eq!(queue.front(), front);
        assert_eq!(queue.back(), golden.back().unwrap());
    }
    assert!(queue.iter().eq(golden.iter()));
    assert!(queue.iter().rev().eq(golden.iter().rev()));
}

proptest! {
    #[test]
    fn matches_vecdeque(hint in 0usize..40, ops in proptest::collection::vec(op(), 0..400)) {
        let mut queue = RingQueue::with_capacity(hint);
        let mut golden = VecDeque::new();
        check(&queue, &golden);
        for op in &ops {
            apply(&mut queue, &mut golden, op);
            check(&queue, &golden);
        }
        let rest: Vec<i64> = queue.into_iter().collect();
        let expected: Vec<i64> = golden.into_iter().collect();
        prop_assert_eq!(rest, expected);
    }

    #[test]
    fn fifo_under_growth(k in 0u32..10, rotate in 0usize..64) {
        let n = (1usize << k) + 1;
        let mut queue = RingQueue::with_capacity(1usize << k);
        for i in 0..rotate {
            queue.push(i as i64);
            queue.pop();
        }
        for i in 0..n {
            queue.push(i as i64);
        }
        prop_assert!(queue.capacity() >= n);
        for i in 0..n {
            prop_assert_eq!(queue.pop_front(), Some(i as i64));
        }
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn shrink_target_is_tight(c in 5u32..12, keep_frac in 1usize..100) {
        let cap = 1usize << c;
        let mut queue = RingQueue::with_capacity(cap);
        queue.extend(0..cap as i64);
        let keep = cmp::max(1, cap * keep_frac / 400);
        while queue.len() > keep {
            queue.pop();
        }
        let kept: Vec<i64> = queue.iter().cloned().collect();
        queue.shrink_to_fit();
        if keep < cap / 4 {
            let expected = cmp::max(2 * keep, 16).next_power_of_two();
            prop_assert_eq!(queue.capacity(), expected);
        } else {
            prop_assert_eq!(queue.capacity(), cap);
        }
        prop_assert!(queue.iter().cloned().eq(kept.into_iter()));
    }
}
