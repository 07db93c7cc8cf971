//! 线程表：全部槽位与专属栈区的唯一属主

use core::cell::UnsafeCell;
use core::ptr;

use crate::config::{MAX_UTHREADS, USTACK_SIZE};
use crate::error::Error;
use crate::sync::UpCell;

use super::context::TaskContext;
use super::task::{Priority, TaskControlBlock, TaskStatus, Tid};

pub(crate) static TASK_TABLE: UpCell<TaskTable> = UpCell::new(TaskTable::new());

/// 每槽位专属的栈区。与槽位同寿：退出只作逻辑回收，
/// 内存从不释放，留待之后的 spawn 复用。
#[repr(align(16))]
struct UStack(UnsafeCell<[u8; USTACK_SIZE]>);

// 栈区只以裸指针形式交给对应槽位的执行流使用
unsafe impl Sync for UStack {}

static USTACKS: [UStack; MAX_UTHREADS] =
    [const { UStack(UnsafeCell::new([0; USTACK_SIZE])) }; MAX_UTHREADS];

/// 指定槽位栈区的顶端（最高地址，向下生长）
fn ustack_top(tid: Tid) -> usize {
    USTACKS[tid].0.get() as usize + USTACK_SIZE
}

/// 固定环序下的后继槽位，初始化后不再变动
pub fn successor(tid: Tid) -> Tid {
    (tid + 1) % MAX_UTHREADS
}

pub(crate) struct TaskTable {
    pub slots: [TaskControlBlock; MAX_UTHREADS],
    /// 正在运行的槽位；start_all 之前为 None
    pub current: Option<Tid>,
}

impl TaskTable {
    pub const fn new() -> Self {
        Self {
            slots: [const { TaskControlBlock::vacant() }; MAX_UTHREADS],
            current: None,
        }
    }

    /// 全部槽位回到空闲态，当前线程指针清空
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = TaskControlBlock::vacant();
        }
        self.current = None;
    }

    /// 按表序（而非环序）找第一个空闲槽位登记新线程，不触发执行。
    /// 表满时返回错误且不改动任何槽位。
    pub fn spawn(&mut self, entry: fn(), priority: Priority) -> Result<Tid, Error> {
        let tid = self
            .slots
            .iter()
            .position(|slot| slot.state == TaskStatus::Free)
            .ok_or(Error::NoFreeSlot)?;

        let slot = &mut self.slots[tid];
        slot.priority = priority;
        slot.entry = Some(entry);
        slot.ctx = TaskContext::new(ustack_top(tid));
        slot.yield_passes_left = 0;
        slot.state = TaskStatus::Ready;
        log::debug!("[uthread] spawn tid={tid} priority={priority:?}");

        Ok(tid)
    }

    /// 从 start 起沿环行走，按让行配额选出下一个就绪槽位：
    /// 配额归零的就绪槽位被选中并重新充值，否则扣一次配额继续走。
    /// 表中没有就绪槽位时返回 None，不触碰任何配额。
    pub fn pick_next(&mut self, start: Tid) -> Option<Tid> {
        if !self
            .slots
            .iter()
            .any(|slot| slot.state == TaskStatus::Ready)
        {
            return None;
        }

        // 每访问一个就绪槽位，要么选中收束，要么总配额严格减一，
        // 而充值只随选中发生，环行必然终止
        let mut tid = start;
        loop {
            let slot = &mut self.slots[tid];
            if slot.state == TaskStatus::Ready {
                if slot.yield_passes_left == 0 {
                    slot.yield_passes_left = slot.priority.yield_passes();
                    return Some(tid);
                }
                slot.yield_passes_left -= 1;
            }
            tid = successor(tid);
        }
    }

    pub fn ctx_ptr(&mut self, tid: Tid) -> *mut TaskContext {
        ptr::addr_of_mut!(self.slots[tid].ctx)
    }
}
