use super::context::TaskContext;

/// 槽位编号，即线程在表中的下标
pub type Tid = usize;

/// 槽位状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// 空闲，可被 spawn 复用
    Free,
    /// 就绪，等待环行选中
    Ready,
    /// 正在占有处理器，全表至多一个
    Running,
}

/// 调度优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// 两次被选中之间，环行经过本槽位时须让行的次数。
    /// 由此导出的选中频率（按被访问次数折算）为 高:中:低 = 6:3:2 。
    pub(crate) fn yield_passes(self) -> usize {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// 线程控制块，一槽一个
pub(crate) struct TaskControlBlock {
    pub state: TaskStatus,
    pub priority: Priority,
    pub ctx: TaskContext,
    /// spawn 时登记的入口函数，由 task_entry 取出调用
    pub entry: Option<fn()>,
    /// 剩余让行次数，见 [`Priority::yield_passes`]
    pub yield_passes_left: usize,
}

impl TaskControlBlock {
    pub const fn vacant() -> Self {
        Self {
            state: TaskStatus::Free,
            priority: Priority::Low,
            ctx: TaskContext::empty(),
            entry: None,
            yield_passes_left: 0,
        }
    }
}

/// 单个槽位的对外快照
#[derive(Debug, Clone, Copy)]
pub struct TaskInfo {
    pub state: TaskStatus,
    pub priority: Priority,
    pub entry: Option<fn()>,
}
