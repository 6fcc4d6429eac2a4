//! Positional operations over `LinkedList`.
//!
//! `std::collections::LinkedList` exposes no stable arbitrary-index API,
//! so the middle/end batches splice through `split_off`: O(distance to
//! the nearer end) to reach the split point, O(1) to relink.

use std::collections::LinkedList;

/// Inserts `value` so it ends up at `index`.
///
/// Panics if `index > len`, matching the slice indexing contract.
pub fn insert_at<T>(list: &mut LinkedList<T>, index: usize, value: T) {
    let mut tail = list.split_off(index);
    list.push_back(value);
    list.append(&mut tail);
}

/// Removes and returns the element at `index`.
///
/// Panics if `index >= len`.
pub fn remove_at<T>(list: &mut LinkedList<T>, index: usize) -> T {
    let mut tail = list.split_off(index);
    let value = match tail.pop_front() {
        Some(value) => value,
        None => panic!("removal index (is {index}) should be < len (is {})", list.len()),
    };
    list.append(&mut tail);
    value
}

/// Reads the element at `index` by traversal from the front.
///
/// Panics if `index >= len`.
pub fn get<T: Copy>(list: &LinkedList<T>, index: usize) -> T {
    match list.iter().nth(index) {
        Some(&value) => value,
        None => panic!(
            "index out of bounds: the len is {} but the index is {index}",
            list.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i64]) -> LinkedList<i64> {
        values.iter().copied().collect()
    }

    #[test]
    fn insert_at_head_middle_and_end() {
        let mut list = list_of(&[1, 2, 3, 4]);
        insert_at(&mut list, 0, 10);
        let middle = list.len() / 2;
        insert_at(&mut list, middle, 20);
        let before_end = list.len() - 1;
        insert_at(&mut list, before_end, 30);
        let collected: Vec<i64> = list.into_iter().collect();
        assert_eq!(collected, [10, 1, 20, 2, 3, 30, 4]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut list = list_of(&[1, 2]);
        insert_at(&mut list, 2, 3);
        let collected: Vec<i64> = list.into_iter().collect();
        assert_eq!(collected, [1, 2, 3]);
    }

    #[test]
    fn remove_at_returns_the_displaced_element() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);
        assert_eq!(remove_at(&mut list, 2), 3);
        assert_eq!(remove_at(&mut list, 0), 1);
        let last = list.len() - 1;
        assert_eq!(remove_at(&mut list, last), 5);
        let collected: Vec<i64> = list.into_iter().collect();
        assert_eq!(collected, [2, 4]);
    }

    #[test]
    fn get_traverses_to_the_index() {
        let list = list_of(&[7, 8, 9]);
        assert_eq!(get(&list, 0), 7);
        assert_eq!(get(&list, list.len() / 2), 8);
        assert_eq!(get(&list, list.len() - 1), 9);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn remove_at_past_the_end_panics() {
        let mut list = list_of(&[1]);
        remove_at(&mut list, 1);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn get_from_an_empty_list_panics() {
        // "middle" of an empty list is index 0, which is out of bounds.
        let list = list_of(&[]);
        get(&list, 0);
    }
}
