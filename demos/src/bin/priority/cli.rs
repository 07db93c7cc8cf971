use clap::Parser;

/// 展示优先级加权轮转的小程序
#[derive(Parser)]
pub struct Cli {
    /// 三个线程合计被调度的轮数
    #[arg(long, short, default_value_t = 36)]
    pub rounds: usize,
}
