mod cli;

use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use cli::Cli;
use uthread::{exit, init, spawn, start_all, yield_, Priority};

static ROUNDS: AtomicUsize = AtomicUsize::new(0);
static SCHEDULED: AtomicUsize = AtomicUsize::new(0);
static RUNS: [AtomicUsize; 3] = [const { AtomicUsize::new(0) }; 3];

fn run_tagged(index: usize, tag: char) {
    loop {
        RUNS[index].fetch_add(1, Ordering::Relaxed);
        print!("{tag}");
        if SCHEDULED.fetch_add(1, Ordering::Relaxed) + 1 >= ROUNDS.load(Ordering::Relaxed) {
            break;
        }
        yield_();
    }
    println!();
    println!("{tag}: ran {} times", RUNS[index].load(Ordering::Relaxed));
    exit()
}

fn high() {
    run_tagged(0, 'h')
}

fn medium() {
    run_tagged(1, 'm')
}

fn low() {
    run_tagged(2, 'l')
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    ROUNDS.store(cli.rounds, Ordering::Relaxed);
    println!("rounds={}", cli.rounds);

    init();
    spawn(high, Priority::High).unwrap();
    spawn(medium, Priority::Medium).unwrap();
    spawn(low, Priority::Low).unwrap();
    start_all().unwrap();
}
