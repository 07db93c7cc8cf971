//! 库中使用的常量

/// 线程表的槽位数，编译期固定
pub const MAX_UTHREADS: usize = 8;

/// 每个槽位专属栈区的大小
pub const USTACK_SIZE: usize = 0x1_0000;
