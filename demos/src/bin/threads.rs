//! 三个同优先级线程轮流打印各自的标记

use uthread::{exit, init, spawn, start_all, yield_, Priority};

fn thread_a() {
    for _ in 0..30 {
        print!("a");
        yield_();
    }
    println!();
    exit()
}

fn thread_b() {
    for _ in 0..30 {
        print!("b");
        yield_();
    }
    println!();
    exit()
}

fn thread_c() {
    for _ in 0..30 {
        print!("c");
        yield_();
    }
    println!();
    exit()
}

fn main() {
    env_logger::init();
    init();
    spawn(thread_a, Priority::Medium).unwrap();
    spawn(thread_b, Priority::Medium).unwrap();
    spawn(thread_c, Priority::Medium).unwrap();
    start_all().unwrap();
}
