use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::runtime::{DomainContext, SystemClock, UuidGenerator};
use crate::services::{AssignmentService, CourseService, SubmissionService, UserService};
use crate::storage::Storage;

/// 启动后可用的存储、运行时端口与应用服务
pub struct StartupContext {
    pub storage: Rc<dyn Storage>,
    pub clock: SystemClock,
    pub ids: UuidGenerator,
    pub users: UserService,
    pub courses: CourseService,
    pub assignments: AssignmentService,
    pub submissions: SubmissionService,
}

impl StartupContext {
    pub fn ctx(&self) -> DomainContext<'_> {
        DomainContext::new(&self.clock, &self.ids)
    }
}

/// 准备启动上下文
/// 包括存储和各应用服务
pub fn prepare_startup(config: &AppConfig) -> StartupContext {
    let storage = crate::storage::create_storage();
    warn!("Storage backend initialized (in-memory)");

    debug!(
        "Course defaults: access code length {}, max students {:?}",
        config.course.access_code_length, config.course.default_max_students
    );
    debug!(
        "Assignment defaults: max points {}, allow late {}",
        config.assignment.default_max_points, config.assignment.allow_late_by_default
    );

    StartupContext {
        users: UserService::new(storage.clone()),
        courses: CourseService::new(storage.clone(), config.course.clone()),
        assignments: AssignmentService::new(storage.clone(), config.assignment.clone()),
        submissions: SubmissionService::new(storage.clone()),
        storage,
        clock: SystemClock,
        ids: UuidGenerator,
    }
}
