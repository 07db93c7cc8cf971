//! 端到端观察加权轮转：固定窗口内高优先级获得的
//! 时间片不少于中，中不少于低，低也不挨饿

use spin::Mutex;
use uthread::{exit, init, spawn, start_all, yield_, Priority};

const WINDOW: usize = 24;

static ORDER: Mutex<Vec<char>> = Mutex::new(Vec::new());

fn run_tagged(tag: char) {
    loop {
        let recorded = {
            let mut order = ORDER.lock();
            order.push(tag);
            order.len()
        };
        if recorded >= WINDOW {
            break;
        }
        yield_();
    }

    {
        let order = ORDER.lock();
        let count = |tag| order.iter().take(WINDOW).filter(|c| **c == tag).count();
        let high = count('h');
        let medium = count('m');
        let low = count('l');
        assert!(
            high >= medium && medium >= low,
            "weighting violated: h={high} m={medium} l={low}"
        );
        assert!(low >= 1, "low priority starved");
    }
    exit()
}

fn high() {
    run_tagged('h')
}

fn medium() {
    run_tagged('m')
}

fn low() {
    run_tagged('l')
}

fn main() {
    env_logger::init();
    init();
    spawn(high, Priority::High).unwrap();
    spawn(medium, Priority::Medium).unwrap();
    spawn(low, Priority::Low).unwrap();
    start_all().unwrap();
}
