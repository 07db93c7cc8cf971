#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 线程表已满，没有空闲槽位
    NoFreeSlot,
    /// 用户级线程已经启动，不能再次移交控制权
    AlreadyStarted,
    /// 表中没有任何就绪线程
    NoReadyTask,
}
