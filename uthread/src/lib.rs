//! 单条内核线程之上的协作式用户级线程库。
//!
//! 固定容量的线程表之上做按优先级加权的环式轮转调度，
//! 寄存器级的上下文切换隔离在单一汇编原语之后。
//! 除显式的 [`yield_`] / [`exit`] 之外不存在任何挂起点，
//! 整个库假定自始至终运行在唯一一条内核线程上。

mod config;
mod error;
mod sync;
mod task;

pub use self::{
    config::{MAX_UTHREADS, USTACK_SIZE},
    error::Error,
    task::{
        current, exit, get_priority, init, set_priority, spawn, start_all, successor, task_info,
        yield_, Priority, TaskContext, TaskInfo, TaskStatus, Tid, __switch,
    },
};
