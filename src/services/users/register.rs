use tracing::{info, warn};

use super::UserService;
use crate::errors::{ClassroomError, Result};
use crate::models::User;
use crate::runtime::DomainContext;
use crate::utils::{validate_email, validate_required};

pub fn register_user(
    service: &UserService,
    name: &str,
    email: &str,
    ctx: &DomainContext<'_>,
) -> Result<User> {
    let storage = service.get_storage();
    let name = name.trim();
    let email = email.trim();

    validate_required("Name", name).map_err(ClassroomError::validation)?;
    validate_email(email).map_err(ClassroomError::validation)?;

    // 邮箱唯一
    if storage.get_user_by_email(email)?.is_some() {
        warn!("Registration rejected, email {} already in use", email);
        return Err(ClassroomError::validation(format!(
            "Email {email} is already registered"
        )));
    }

    let user = User::new(ctx.next_id(), name, email);
    storage.save_user(&user)?;
    info!("User {} registered with id {}", user.name(), user.id());
    Ok(user)
}
