use tracing::info;
use uuid::Uuid;

use super::{CourseService, load_course};
use crate::errors::{ClassroomError, Result};
use crate::models::courses::requests::{AddMaterialRequest, PostAnnouncementRequest};
use crate::models::{Announcement, Material};
use crate::runtime::DomainContext;
use crate::services::users::load_user;
use crate::utils::validate_required;

pub fn post_announcement(
    service: &CourseService,
    course_id: Uuid,
    user_id: Uuid,
    request: PostAnnouncementRequest,
    ctx: &DomainContext<'_>,
) -> Result<Announcement> {
    let storage = service.get_storage();
    let mut course = load_course(storage, course_id)?;
    let user = load_user(storage, user_id)?;

    validate_required("Title", &request.title).map_err(ClassroomError::validation)?;

    let announcement = course.post_announcement(
        &user,
        request.title,
        request.content,
        request.visibility,
        ctx,
    )?;
    storage.save_course(&course)?;

    info!(
        "Announcement {} posted to course {} by {}",
        announcement.id(),
        course.id(),
        user.id()
    );
    Ok(announcement)
}

pub fn add_material(
    service: &CourseService,
    course_id: Uuid,
    user_id: Uuid,
    request: AddMaterialRequest,
    ctx: &DomainContext<'_>,
) -> Result<Material> {
    let storage = service.get_storage();
    let mut course = load_course(storage, course_id)?;
    let user = load_user(storage, user_id)?;

    validate_required("Title", &request.title).map_err(ClassroomError::validation)?;

    let material = course.add_material(
        &user,
        request.title,
        request.description,
        request.content_url,
        request.visibility,
        ctx,
    )?;
    storage.save_course(&course)?;

    info!("Material {} added to course {}", material.id(), course.id());
    Ok(material)
}

pub fn visible_announcements(
    service: &CourseService,
    course_id: Uuid,
    user_id: Uuid,
) -> Result<Vec<Announcement>> {
    let storage = service.get_storage();
    let course = load_course(storage, course_id)?;
    let user = load_user(storage, user_id)?;

    Ok(course
        .get_visible_announcements(&user)
        .into_iter()
        .cloned()
        .collect())
}

pub fn visible_materials(
    service: &CourseService,
    course_id: Uuid,
    user_id: Uuid,
) -> Result<Vec<Material>> {
    let storage = service.get_storage();
    let course = load_course(storage, course_id)?;
    let user = load_user(storage, user_id)?;

    Ok(course
        .get_visible_materials(&user)
        .into_iter()
        .cloned()
        .collect())
}
