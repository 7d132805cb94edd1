//! 核心层：错误、响应、中间件、存储抽象与公共视图

pub mod error;
pub mod middleware;
pub mod parallel;
pub mod repository;
pub mod response;
pub mod view;
