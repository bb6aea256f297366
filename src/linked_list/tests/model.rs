extern crate std;

use std::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::list::LinkedList;

const ROUNDS: usize = 2_000;

fn assert_matches(list: &LinkedList, model: &[i32]) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert!(list.iter().eq(model.iter().copied()));
}

#[test]
fn test_random_ops_against_vec() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = LinkedList::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..ROUNDS {
        let value = rng.random_range(-50..50);
        match rng.random_range(0..8) {
            0 => {
                let index = rng.random_range(0..=model.len() + 1);
                let result = list.insert_at(index, value);
                if index <= model.len() {
                    assert!(result.is_ok());
                    model.insert(index, value);
                } else {
                    assert!(result.is_err());
                }
            }
            1 => {
                let index = rng.random_range(0..=model.len());
                let result = list.delete_at(index);
                if index < model.len() {
                    assert_eq!(result, Ok(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            2 => {
                list.append(value);
                model.push(value);
            }
            3 => {
                list.prepend(value);
                model.insert(0, value);
            }
            4 => {
                list.reverse();
                model.reverse();
            }
            5 => {
                let k = rng.random_range(0..40);
                list.rotate_right(k);
                if !model.is_empty() {
                    let len = model.len();
                    model.rotate_right(k % len);
                }
            }
            6 => {
                assert_eq!(list.index_of(value), model.iter().position(|&v| v == value));
                if model.is_empty() {
                    assert!(list.checked_middle().is_err());
                } else {
                    assert_eq!(list.middle(), model[model.len() / 2]);
                }
            }
            _ => {
                if !model.is_empty() {
                    let index = rng.random_range(0..model.len());
                    let tail = list.split_at(index).unwrap();
                    let model_tail = model.split_off(index + 1);
                    assert_matches(&tail, &model_tail);
                    assert_matches(&list, &model);

                    list.merge(tail);
                    model.extend(model_tail);
                }
            }
        }
        assert_matches(&list, &model);
    }
}

#[test]
fn test_random_interleave_against_vec() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let left: Vec<i32> = (0..rng.random_range(0..8)).map(|i| i * 2).collect();
        let right: Vec<i32> = (0..rng.random_range(0..8)).map(|i| i * 2 + 1).collect();

        let mut expected = Vec::new();
        let mut l = left.iter();
        let mut r = right.iter();
        loop {
            match (l.next(), r.next()) {
                (Some(&a), Some(&b)) => expected.extend([a, b]),
                (Some(&a), None) => {
                    expected.push(a);
                    expected.extend(l.by_ref());
                    break;
                }
                (None, Some(&b)) => {
                    expected.push(b);
                    expected.extend(r.by_ref());
                    break;
                }
                (None, None) => break,
            }
        }

        let mut list: LinkedList = left.iter().copied().collect();
        list.interleave(right.iter().copied().collect());
        assert_matches(&list, &expected);
    }
}
