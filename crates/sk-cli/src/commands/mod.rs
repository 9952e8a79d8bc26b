pub mod dispatch;
pub mod logs;
