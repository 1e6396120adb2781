//! 应用服务
//!
//! 每个操作按 读取 → 调用领域方法 → 保存 的顺序执行，缺失的实体统一返回 NotFound。
//! 领域方法失败时不会保存，存储中的聚合保持原状。

pub mod assignments;
pub mod courses;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use courses::CourseService;
pub use submissions::SubmissionService;
pub use users::UserService;
