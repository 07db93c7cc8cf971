//! 协作式用户级线程的对外操作

mod context;
mod switch;
mod table;
#[allow(clippy::module_inception)]
mod task;


pub use self::{
    context::TaskContext,
    switch::__switch,
    table::successor,
    task::{Priority, TaskInfo, TaskStatus, Tid},
};

use core::convert::Infallible;
use core::mem;
use core::ptr;

use crate::error::Error;

use self::table::TASK_TABLE;
use self::task::TaskControlBlock;

/// 初始化线程表：全部槽位空闲，环序固定，当前线程指针为空。
/// 须在一切其它操作之前恰好调用一次；
/// 线程启动后再调用属使用错误，库不做防护。
pub fn init() {
    TASK_TABLE.exclusive_session(|table| table.reset());
}

/// 在表中登记一个新线程但不运行它。
/// 成功时返回占用的槽位号，表满时返回 [`Error::NoFreeSlot`]。
pub fn spawn(entry: fn(), priority: Priority) -> Result<Tid, Error> {
    TASK_TABLE.exclusive_session(|table| table.spawn(entry, priority))
}

/// 让出处理器：自身回到就绪态，从后继槽位起沿环选出下一个
/// 就绪线程并切换过去，直到自身再次被选中才返回。
/// 前置条件：调用者是经 [`start_all`] 启动的用户级线程。
pub fn yield_() {
    let (current_ctx, next_ctx) = TASK_TABLE.exclusive_session(|table| {
        let current = table.current.unwrap();
        table.slots[current].state = TaskStatus::Ready;

        // 自身刚刚回到就绪态，环行至多绕回自身，必然有解
        let next = table.pick_next(successor(current)).unwrap();
        table.slots[next].state = TaskStatus::Running;
        table.current = Some(next);
        log::trace!("[uthread] switch {current} -> {next}");

        (
            table.ctx_ptr(current),
            table.ctx_ptr(next) as *const TaskContext,
        )
    });

    // 借用已经归还，寄存器交换期间不得持有表的借用
    unsafe {
        __switch(current_ctx, next_ctx);
    }
}

/// 终止调用线程，永不返回。
///
/// 先如同 [`yield_`] 让出处理器；待本槽位再次被选中，只为完成
/// 收尾：槽位转为空闲，若全表皆空则以状态码 0 结束整个进程，
/// 否则一去不回地切换到下一个就绪线程。本线程的上下文被永久
/// 丢弃，栈区即刻可被之后的 spawn 复用。
pub fn exit() -> ! {
    yield_();

    let next_ctx = TASK_TABLE.exclusive_session(|table| {
        let current = table.current.unwrap();
        table.slots[current] = TaskControlBlock::vacant();

        // 唯一的 Running 刚转为空闲，无就绪即全表皆空
        let next = table.pick_next(successor(current))?;
        table.slots[next].state = TaskStatus::Running;
        table.current = Some(next);
        log::trace!("[uthread] exit {current} -> {next}");
        Some(table.ctx_ptr(next) as *const TaskContext)
    });

    let Some(next_ctx) = next_ctx else {
        log::info!("[uthread] last task exited, terminating process");
        std::process::exit(0);
    };

    // 保存目标是一次性的废弃上下文，本执行流不可能再被恢复
    let mut discard = TaskContext::empty();
    unsafe {
        __switch(ptr::addr_of_mut!(discard), next_ctx);
    }
    unreachable!()
}

/// 由原始（非用户级线程）执行流调用：与 [`yield_`] 同一策略、
/// 从 0 号槽位起选出第一个就绪线程，单向切换过去。
/// 原始执行流在表中没有槽位，其上下文不被保存，成功后永不返回。
/// 线程已经启动时返回 [`Error::AlreadyStarted`]，
/// 表中无就绪线程时返回 [`Error::NoReadyTask`]，均不改动任何槽位。
pub fn start_all() -> Result<Infallible, Error> {
    let next_ctx = TASK_TABLE.exclusive_session(|table| {
        if table.current.is_some() {
            return Err(Error::AlreadyStarted);
        }

        let next = table.pick_next(0).ok_or(Error::NoReadyTask)?;
        table.slots[next].state = TaskStatus::Running;
        table.current = Some(next);
        log::trace!("[uthread] start_all -> {next}");
        Ok(table.ctx_ptr(next) as *const TaskContext)
    })?;

    let mut discard = TaskContext::empty();
    unsafe {
        __switch(ptr::addr_of_mut!(discard), next_ctx);
    }
    unreachable!()
}

/// 替换调用线程的优先级并返回旧值。
/// 新值在下次被选中时生效，已扣的让行配额不作追改。
pub fn set_priority(new: Priority) -> Priority {
    TASK_TABLE.exclusive_session(|table| {
        let current = table.current.unwrap();
        mem::replace(&mut table.slots[current].priority, new)
    })
}

/// 调用线程当前的优先级
pub fn get_priority() -> Priority {
    TASK_TABLE.exclusive_session(|table| {
        let current = table.current.unwrap();
        table.slots[current].priority
    })
}

/// 正在运行的槽位号；[`start_all`] 之前为 None
pub fn current() -> Option<Tid> {
    TASK_TABLE.exclusive_session(|table| table.current)
}

/// 任一槽位的快照；tid 越界时为 None
pub fn task_info(tid: Tid) -> Option<TaskInfo> {
    TASK_TABLE.exclusive_session(|table| {
        table.slots.get(tid).map(|slot| TaskInfo {
            state: slot.state,
            priority: slot.priority,
            entry: slot.entry,
        })
    })
}

/// 新线程的第一站：取出登记的入口函数并调用。
/// 入口函数若自行返回而未调用 [`exit`]，由此处代为退出。
extern "C" fn task_entry() -> ! {
    let entry = TASK_TABLE.exclusive_session(|table| {
        let current = table.current.unwrap();
        table.slots[current].entry.unwrap()
    });
    entry();
    exit()
}
