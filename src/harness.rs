//! Timed-batch measurement and table rendering.

use std::collections::LinkedList;
use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use crate::linked;

/// Elapsed nanoseconds for `invokes_count` consecutive calls to `op`.
///
/// One monotonic clock read before the batch, one after. Nothing is
/// reset between batches; whatever `op` did to its collection stays
/// done when the next batch starts.
pub fn time_batch<F: FnMut()>(invokes_count: u32, mut op: F) -> u128 {
    let start = Instant::now();
    for _ in 0..invokes_count {
        op();
    }
    start.elapsed().as_nanos()
}

/// One (operation, position) pair with both measured durations.
pub struct Row {
    pub label: &'static str,
    pub array_ns: u128,
    pub linked_ns: u128,
}

/// The nine rows measured for a single invocation count.
pub struct RoundReport {
    pub invokes_count: u32,
    pub rows: Vec<Row>,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invokes Count: {}", self.invokes_count)?;
        writeln!(f, "Operation       | Array List | Linked List")?;
        for row in &self.rows {
            writeln!(f, "{:<16}| {:>10} | {:>11}", row.label, row.array_ns, row.linked_ns)?;
        }
        Ok(())
    }
}

/// Runs the full operation battery against both collections at one
/// invocation count: the three insert batches, then the three remove
/// batches, then the three read batches.
///
/// Middle and end indices use truncating division against the *live*
/// length, re-read on every call, since each call changes the size.
pub fn run_round(
    array_list: &mut Vec<i64>,
    linked_list: &mut LinkedList<i64>,
    invokes_count: u32,
) -> RoundReport {
    let array_add_head = time_batch(invokes_count, || array_list.insert(0, 0));
    let linked_add_head = time_batch(invokes_count, || linked_list.push_front(0));

    let array_add_middle = time_batch(invokes_count, || {
        let mid = array_list.len() / 2;
        array_list.insert(mid, 0);
    });
    let linked_add_middle = time_batch(invokes_count, || {
        let mid = linked_list.len() / 2;
        linked::insert_at(linked_list, mid, 0);
    });

    let array_add_end = time_batch(invokes_count, || {
        let end = array_list.len() - 1;
        array_list.insert(end, 0);
    });
    let linked_add_end = time_batch(invokes_count, || {
        let end = linked_list.len() - 1;
        linked::insert_at(linked_list, end, 0);
    });

    let array_remove_head = time_batch(invokes_count, || {
        array_list.remove(0);
    });
    let linked_remove_head = time_batch(invokes_count, || {
        linked_list.pop_front();
    });

    let array_remove_middle = time_batch(invokes_count, || {
        let mid = array_list.len() / 2;
        array_list.remove(mid);
    });
    let linked_remove_middle = time_batch(invokes_count, || {
        let mid = linked_list.len() / 2;
        linked::remove_at(linked_list, mid);
    });

    let array_remove_end = time_batch(invokes_count, || {
        let end = array_list.len() - 1;
        array_list.remove(end);
    });
    let linked_remove_end = time_batch(invokes_count, || {
        linked_list.pop_back();
    });

    let array_get_head = time_batch(invokes_count, || {
        black_box(array_list[0]);
    });
    let linked_get_head = time_batch(invokes_count, || {
        black_box(linked::get(linked_list, 0));
    });

    let array_get_middle = time_batch(invokes_count, || {
        black_box(array_list[array_list.len() / 2]);
    });
    let linked_get_middle = time_batch(invokes_count, || {
        black_box(linked::get(linked_list, linked_list.len() / 2));
    });

    let array_get_end = time_batch(invokes_count, || {
        black_box(array_list[array_list.len() - 1]);
    });
    let linked_get_end = time_batch(invokes_count, || {
        black_box(linked::get(linked_list, linked_list.len() - 1));
    });

    RoundReport {
        invokes_count,
        rows: vec![
            Row { label: "Add to head", array_ns: array_add_head, linked_ns: linked_add_head },
            Row { label: "Add to middle", array_ns: array_add_middle, linked_ns: linked_add_middle },
            Row { label: "Add to end", array_ns: array_add_end, linked_ns: linked_add_end },
            Row { label: "Remove from head", array_ns: array_remove_head, linked_ns: linked_remove_head },
            Row { label: "Remove from mid", array_ns: array_remove_middle, linked_ns: linked_remove_middle },
            Row { label: "Remove from end", array_ns: array_remove_end, linked_ns: linked_remove_end },
            Row { label: "Get from head", array_ns: array_get_head, linked_ns: linked_get_head },
            Row { label: "Get from middle", array_ns: array_get_middle, linked_ns: linked_get_middle },
            Row { label: "Get from end", array_ns: array_get_end, linked_ns: linked_get_end },
        ],
    }
}
