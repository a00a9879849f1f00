//! 数据模型定义
//!
//! 按资源划分：每个资源目录包含业务实体（entities）、
//! 请求模型（requests）和响应模型（responses）。

pub mod common;

pub mod assignments;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod grades;
pub mod submissions;
pub mod system;
pub mod users;

pub use common::response::ApiResponse;
