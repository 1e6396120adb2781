//! 用户存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::User;
use uuid::Uuid;

impl MemoryStorage {
    /// 通过ID获取用户
    pub fn get_user_by_id_impl(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.borrow().get(&id).cloned())
    }

    /// 通过邮箱获取用户（不区分大小写）
    pub fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .borrow()
            .values()
            .find(|u| u.email().eq_ignore_ascii_case(email))
            .cloned())
    }

    /// 保存用户
    pub fn save_user_impl(&self, user: &User) -> Result<()> {
        self.users.borrow_mut().insert(user.id(), user.clone());
        Ok(())
    }
}
