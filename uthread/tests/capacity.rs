//! 表满即拒绝登记，且不波及既有线程

use uthread::{init, spawn, task_info, Error, Priority, TaskStatus, MAX_UTHREADS};

fn noop() {}

fn main() {
    init();

    for expected in 0..MAX_UTHREADS {
        assert_eq!(spawn(noop, Priority::Medium), Ok(expected));
    }
    assert_eq!(spawn(noop, Priority::High), Err(Error::NoFreeSlot));

    for tid in 0..MAX_UTHREADS {
        let info = task_info(tid).unwrap();
        assert_eq!(info.state, TaskStatus::Ready);
        assert_eq!(info.priority, Priority::Medium);
        assert_eq!(info.entry, Some(noop as fn()));
    }
    assert!(task_info(MAX_UTHREADS).is_none());

    println!("capacity: table rejects the {}th spawn", MAX_UTHREADS + 1);
}
