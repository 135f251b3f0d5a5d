// Planner Adapters
// 规划服务的适配器实现

mod remote;

pub use remote::*;
