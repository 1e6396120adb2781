//! Rust Classroom - 虚拟教室领域模型
//!
//! 课程、选课、公告与资料、作业、提交与评分。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 领域模型（值对象、实体、聚合根）
//! - `runtime`: 时钟与 ID 端口、启动流程
//! - `services`: 应用服务与领域服务
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
