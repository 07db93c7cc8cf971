use core::arch::global_asm;

use super::TaskContext;

#[cfg(target_arch = "riscv64")]
global_asm!(include_str!("switch/riscv64.S"));
#[cfg(target_arch = "x86_64")]
global_asm!(include_str!("switch/x86_64.S"));
#[cfg(target_arch = "aarch64")]
global_asm!(include_str!("switch/aarch64.S"));

#[cfg(not(any(
    target_arch = "riscv64",
    target_arch = "x86_64",
    target_arch = "aarch64"
)))]
compile_error!("uthread supports riscv64, x86_64 and aarch64 only");

extern "C" {
    /// 把调用方的 ra/sp/被调用者保存寄存器存入 current，
    /// 再从 next 恢复同一组寄存器并跳转到其 ra。
    /// current 之后被再次恢复时，从本次调用之后继续执行；
    /// current 与 next 相同则等效于空操作。
    pub fn __switch(current_task_ctx_ptr: *mut TaskContext, next_task_ctx_ptr: *const TaskContext);
}
