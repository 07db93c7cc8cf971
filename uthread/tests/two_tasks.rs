//! 两个线程交替让出；先退者的槽位归于空闲，末退者结束进程

use spin::Mutex;
use uthread::{current, exit, init, spawn, start_all, task_info, yield_, Priority, TaskStatus};

static ORDER: Mutex<Vec<char>> = Mutex::new(Vec::new());

fn record(tag: char) {
    ORDER.lock().push(tag);
}

fn task_a() {
    record('a');
    yield_();
    record('a');
    yield_();
    record('a');
    exit()
}

fn task_b() {
    record('b');
    yield_();
    record('b');
    yield_();
    record('b');
    yield_();
    // task_a 的收尾已经完成，其槽位应当回到空闲态
    assert_eq!(task_info(0).unwrap().state, TaskStatus::Free);
    assert_eq!(current(), Some(1));
    record('b');
    assert_eq!(*ORDER.lock(), ['a', 'b', 'a', 'b', 'a', 'b', 'b']);
    exit()
}

fn main() {
    env_logger::init();
    init();
    spawn(task_a, Priority::High).unwrap();
    spawn(task_b, Priority::High).unwrap();
    start_all().unwrap();
}
