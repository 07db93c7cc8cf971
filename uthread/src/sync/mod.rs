mod up;

pub use self::up::UpCell;
