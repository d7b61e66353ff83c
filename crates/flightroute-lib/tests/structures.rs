use flightroute_lib::{
    ArrayQueue, AvlTree, BinaryTree, CircularDoublyLinkedList, Error, HeaderLinkedQueue,
    LinkedQueue, LinkedStack, List, PriorityLinkedQueue, Queue, Traversal, Tree,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn stack_pops_in_reverse() {
    let mut stack = LinkedStack::new();
    for value in [1, 2, 3] {
        stack.push(value);
    }
    let popped: Vec<i32> = (0..3).map(|_| stack.pop().unwrap()).collect();
    assert_eq!(popped, vec![3, 2, 1]);
}

#[test]
fn priority_queue_serves_highest_first_and_keeps_ties_in_order() {
    let mut queue = PriorityLinkedQueue::new();
    for (flight, priority) in [("BA117", 3), ("AF006", 1), ("EK001", 5), ("LH400", 1)] {
        queue.enqueue(flight, priority);
    }
    let served: Vec<&str> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(served, vec!["EK001", "BA117", "AF006", "LH400"]);
}

#[test]
fn fresh_structures_report_empty() {
    assert!(matches!(
        LinkedStack::<u8>::new().pop(),
        Err(Error::Empty { .. })
    ));
    assert!(LinkedQueue::<u8>::new().dequeue().unwrap_err().is_empty_structure());
    assert!(HeaderLinkedQueue::<u8>::new().dequeue().unwrap_err().is_empty_structure());
    assert!(PriorityLinkedQueue::<u8>::new().dequeue().unwrap_err().is_empty_structure());

    let tree = AvlTree::<u8>::new();
    assert!(tree.min().unwrap_err().is_empty_structure());
    assert!(tree.max().unwrap_err().is_empty_structure());
    assert!(tree.height().unwrap_err().is_empty_structure());
}

#[test]
fn bounded_queue_rejects_one_past_capacity() {
    let mut queue = ArrayQueue::with_capacity(3).unwrap();
    for value in 0..3 {
        queue.enqueue(value).unwrap();
    }
    assert_eq!(
        queue.enqueue(3).unwrap_err().to_string(),
        "array queue is full (capacity 3)"
    );
    assert!(ArrayQueue::<u8>::with_capacity(0).is_err());
}

#[test]
fn plain_tree_answers_the_same_queries_as_avl() {
    let values = [40, 20, 60, 10, 30, 50, 70];
    let mut avl = AvlTree::new();
    let mut plain = BinaryTree::with_rng(SmallRng::seed_from_u64(9));
    for value in values {
        avl.add(value);
        plain.add(value);
    }
    let mut plain_sorted: Vec<i32> = plain
        .traverse(Traversal::PreOrder)
        .unwrap()
        .into_iter()
        .copied()
        .collect();
    plain_sorted.sort_unstable();
    let avl_sorted: Vec<i32> = avl.in_order().unwrap().into_iter().copied().collect();
    assert_eq!(plain_sorted, avl_sorted);
    assert_eq!(plain.min().unwrap(), avl.min().unwrap());
    assert_eq!(plain.max().unwrap(), avl.max().unwrap());
    assert!(avl.height().unwrap() <= plain.height().unwrap());
}

proptest! {
    #[test]
    fn queues_preserve_arrival_order(values in proptest::collection::vec(any::<u16>(), 1..64)) {
        let mut linked = LinkedQueue::new();
        let mut header = HeaderLinkedQueue::new();
        let mut array = ArrayQueue::with_capacity(values.len()).unwrap();
        for value in &values {
            linked.enqueue(*value).unwrap();
            header.enqueue(*value).unwrap();
            array.enqueue(*value).unwrap();
        }
        prop_assert_eq!(header.index_of(&values[0]).unwrap(), Some(1));
        for value in &values {
            prop_assert_eq!(linked.dequeue().unwrap(), *value);
            prop_assert_eq!(header.dequeue().unwrap(), *value);
            prop_assert_eq!(array.dequeue().unwrap(), *value);
        }
        prop_assert!(linked.is_empty() && header.is_empty() && array.is_empty());
    }

    #[test]
    fn avl_round_trip_leaves_an_empty_tree(
        values in proptest::collection::btree_set(any::<i32>(), 0..128),
        seed in any::<u64>(),
    ) {
        let mut tree = AvlTree::new();
        for value in &values {
            prop_assert!(tree.add(*value));
            prop_assert!(tree.is_balanced());
        }
        let in_order: Vec<i32> = tree.in_order().unwrap_or_default().into_iter().copied().collect();
        prop_assert_eq!(&in_order, &values.iter().copied().collect::<Vec<_>>());

        let mut removal: Vec<i32> = values.into_iter().collect();
        removal.shuffle(&mut SmallRng::seed_from_u64(seed));
        for value in &removal {
            prop_assert_eq!(tree.remove(value).unwrap(), *value);
            prop_assert!(tree.is_balanced());
        }
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn circular_list_ring_survives_mixed_edits(
        inserts in proptest::collection::vec(any::<u8>(), 1..32),
        removals in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut list: CircularDoublyLinkedList<u8> = inserts.iter().copied().collect();
        for value in removals {
            let before = list.size();
            let removed = list.remove(&value).is_ok();
            prop_assert_eq!(list.size(), before - usize::from(removed));
            if !list.is_empty() {
                prop_assert!(list.is_ring_closed());
            }
        }
    }
}
