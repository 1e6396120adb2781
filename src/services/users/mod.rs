pub mod register;

use std::rc::Rc;

use uuid::Uuid;

use crate::errors::{ClassroomError, Result};
use crate::models::User;
use crate::runtime::DomainContext;
use crate::storage::Storage;

pub struct UserService {
    storage: Rc<dyn Storage>,
}

impl UserService {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 注册用户
    pub fn register_user(
        &self,
        name: &str,
        email: &str,
        ctx: &DomainContext<'_>,
    ) -> Result<User> {
        register::register_user(self, name, email, ctx)
    }

    // 根据用户 ID 获取用户
    pub fn get_user(&self, user_id: Uuid) -> Result<User> {
        load_user(self.get_storage(), user_id)
    }
}

/// 按 ID 读取用户，不存在时返回 NotFound
pub(crate) fn load_user(storage: &dyn Storage, user_id: Uuid) -> Result<User> {
    storage
        .get_user_by_id(user_id)?
        .ok_or_else(|| ClassroomError::not_found(format!("User {user_id} not found")))
}
