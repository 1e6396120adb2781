use std::cell::Cell;
use uuid::Uuid;

/// 标识符生成端口
pub trait IdGenerator {
    fn next_id(&self) -> Uuid;
}

/// 随机 v4 UUID
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// 顺序生成，结果可预测
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    next: Cell<u128>,
}

impl SequentialIdGenerator {
    pub fn starting_at(start: u128) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Uuid {
        let value = self.next.get() + 1;
        self.next.set(value);
        Uuid::from_u128(value)
    }
}
