//! 运行时端口
//!
//! 领域模型本身不读取系统时间、不生成标识符，二者都通过 `DomainContext` 注入。

pub mod clock;
pub mod ids;
pub mod lifetime;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};

/// 变更操作所需的外部端口
#[derive(Clone, Copy)]
pub struct DomainContext<'a> {
    pub clock: &'a dyn Clock,
    pub ids: &'a dyn IdGenerator,
}

impl<'a> DomainContext<'a> {
    pub fn new(clock: &'a dyn Clock, ids: &'a dyn IdGenerator) -> Self {
        Self { clock, ids }
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    pub fn next_id(&self) -> uuid::Uuid {
        self.ids.next_id()
    }
}

impl std::fmt::Debug for DomainContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainContext")
            .field("now", &self.clock.now())
            .finish_non_exhaustive()
    }
}
