extern crate std;

use std::collections::VecDeque;
use std::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::reusable::{NodeHandle, ReusableLinkedList};

const PREWARMED: usize = 8;

/// Runs an insertion and checks it only constructed a node when the free
/// list was empty.
fn add_checked(
    list: &mut ReusableLinkedList<u32>,
    add: impl FnOnce(&mut ReusableLinkedList<u32>) -> NodeHandle,
) {
    let cached = list.cached_node_count();
    let constructed = list.nodes_constructed();
    add(list);
    if cached > 0 {
        assert_eq!(list.nodes_constructed(), constructed);
        assert_eq!(list.cached_node_count(), cached - 1);
    } else {
        assert_eq!(list.nodes_constructed(), constructed + 1);
    }
}

#[test]
fn test_random_operations_match_vecdeque() {
    let mut rng = StdRng::seed_from_u64(0x5eed_1157);
    let mut list = ReusableLinkedList::with_capacity(PREWARMED);
    let mut model: VecDeque<u32> = VecDeque::new();
    let mut detached: Vec<(NodeHandle, u32)> = Vec::new();
    let mut dropped = 0;

    for step in 0..20_000u32 {
        match rng.random_range(0..14) {
            0 => {
                add_checked(&mut list, |list| list.add_first(step));
                model.push_front(step);
            }
            1 => {
                add_checked(&mut list, |list| list.add_last(step));
                model.push_back(step);
            }
            2 => assert_eq!(list.remove_first().ok(), model.pop_front()),
            3 => assert_eq!(list.remove_last().ok(), model.pop_back()),
            4 if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                assert!(list.remove(&model[at]));
                model.remove(at);
            }
            5 if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                let node = list.find(&model[at]).unwrap();
                add_checked(&mut list, |list| list.add_after(node, step).unwrap());
                model.insert(at + 1, step);
            }
            6 if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                let node = list.find(&model[at]).unwrap();
                add_checked(&mut list, |list| list.add_before(node, step).unwrap());
                model.insert(at, step);
            }
            7 if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                let node = list.find_last(&model[at]).unwrap();
                assert_eq!(list.remove_node(node), Ok(model[at]));
                model.remove(at);
            }
            8 if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                let node = list.find(&model[at]).unwrap();
                assert_eq!(list.detach(node), Ok(node));
                detached.push((node, model.remove(at).unwrap()));
            }
            9 if !detached.is_empty() => {
                let (node, value) = detached.swap_remove(rng.random_range(0..detached.len()));
                let anchor_at = (!model.is_empty()).then(|| rng.random_range(0..model.len()));
                match (rng.random_range(0..4), anchor_at) {
                    (2, Some(at)) => {
                        let anchor = list.find(&model[at]).unwrap();
                        list.add_before_node(anchor, node).unwrap();
                        model.insert(at, value);
                    }
                    (3, Some(at)) => {
                        let anchor = list.find(&model[at]).unwrap();
                        list.add_after_node(anchor, node).unwrap();
                        model.insert(at + 1, value);
                    }
                    (0 | 2, _) => {
                        list.add_first_node(node).unwrap();
                        model.push_front(value);
                    }
                    _ => {
                        list.add_last_node(node).unwrap();
                        model.push_back(value);
                    }
                }
                assert_eq!(list.get(node), Some(&value));
            }
            10 if !detached.is_empty() => {
                let (node, value) = detached.swap_remove(rng.random_range(0..detached.len()));
                assert_eq!(list.remove_node(node), Ok(value));
                assert_eq!(list.get(node), None);
            }
            11 if rng.random_bool(0.05) => {
                dropped += list.cached_node_count();
                list.clear_cached_nodes();
                assert_eq!(list.cached_node_count(), 0);
            }
            12 if rng.random_bool(0.05) => {
                list.clear();
                model.clear();
            }
            _ => {}
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().eq(model.iter()));
        assert!(list.iter().rev().eq(model.iter().rev()));
        assert_eq!(
            list.len() + list.cached_node_count() + detached.len(),
            list.nodes_constructed() - dropped
        );
        for (node, value) in &detached {
            assert_eq!(list.get(*node), Some(value));
            assert!(!list.contains_node(*node));
        }
    }
}
