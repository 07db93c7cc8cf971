//! 空表不能启动；线程启动后再次 start_all 必须失败，
//! 且不改动任何槽位

use uthread::{
    exit, init, spawn, start_all, task_info, Error, Priority, TaskStatus, MAX_UTHREADS,
};

fn snapshot() -> Vec<(TaskStatus, Priority, Option<fn()>)> {
    (0..MAX_UTHREADS)
        .map(|tid| {
            let info = task_info(tid).unwrap();
            (info.state, info.priority, info.entry)
        })
        .collect()
}

fn restart_attempt() {
    let before = snapshot();
    assert_eq!(start_all().unwrap_err(), Error::AlreadyStarted);
    assert_eq!(snapshot(), before);
    exit()
}

fn bystander() {
    exit()
}

fn main() {
    init();
    assert_eq!(start_all().unwrap_err(), Error::NoReadyTask);

    spawn(restart_attempt, Priority::High).unwrap();
    spawn(bystander, Priority::Low).unwrap();
    start_all().unwrap();
}
