//! Reads the multipart bodies posted by the blog editor and the product image upload.

use axum::extract::{multipart::Field, Multipart};

use crate::server::{error::AppError, model::upload::ImageUpload};

/// Raw text fields and image of a post form.
///
/// Numeric fields stay as text here so a malformed value becomes a field-level validation
/// error instead of a rejected request.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<String>,
    pub category_id: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Drains a multipart body into a [`PostForm`].
///
/// Unknown fields such as the `_method` override sent by HTML forms are skipped. A file part
/// with no content is treated as if no image had been chosen.
///
/// # Returns
/// - `Ok(PostForm)` - Collected fields
/// - `Err(AppError::MultipartErr)` - The body is not valid multipart data
pub async fn read_post_form(mut multipart: Multipart) -> Result<PostForm, AppError> {
    let mut form = PostForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => form.title = Some(field.text().await?),
            "content" => form.content = Some(field.text().await?),
            "user_id" => form.user_id = Some(field.text().await?),
            "category_id" => form.category_id = Some(field.text().await?),
            "image" => {
                if let Some(image) = read_image_part(field).await? {
                    form.image = Some(image);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Drains a multipart body, keeping only its `image` part.
///
/// # Returns
/// - `Ok(Some(ImageUpload))` - A non-empty image part was sent
/// - `Ok(None)` - No image part, or an empty one
/// - `Err(AppError::MultipartErr)` - The body is not valid multipart data
pub async fn read_image_form(mut multipart: Multipart) -> Result<Option<ImageUpload>, AppError> {
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        if let Some(upload) = read_image_part(field).await? {
            image = Some(upload);
        }
    }

    Ok(image)
}

async fn read_image_part(field: Field<'_>) -> Result<Option<ImageUpload>, AppError> {
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await?;

    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(ImageUpload {
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    }))
}
