use core::cell::{RefCell, RefMut};

/// 仅供单一执行流使用的独占单元。
///
/// 协作式调度下同一时刻只有一个逻辑线程在运行，寄存器交换
/// 又总是在归还借用之后才发生，运行期借用检查即是仅剩的防线。
#[derive(Debug)]
pub struct UpCell<T> {
    inner: RefCell<T>,
}

unsafe impl<T> Sync for UpCell<T> {}

impl<T> UpCell<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: RefCell::new(value),
        }
    }

    /// Panic if the data has been borrowed.
    pub fn exclusive_access(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    pub fn exclusive_session<F, V>(&self, f: F) -> V
    where
        F: FnOnce(&mut T) -> V,
    {
        let mut inner = self.exclusive_access();
        f(&mut inner)
    }
}
