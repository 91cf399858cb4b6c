//! Blog posts and their images.
//!
//! A post row and its image file are kept in step: a file is only written once the form
//! passes validation, a file written for a row that then fails to save is removed again,
//! and replacing or deleting a post removes the file it no longer references.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{category::CategoryRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    model::{
        post::{CreatePostParam, NewPost, Post, PostChanges, UpdatePostParam},
        upload::{ImageFormat, ImageUpload, CREATE_IMAGE_MAX_KIB, UPDATE_IMAGE_MAX_KIB},
    },
    storage::{ImageStorage, IMAGE_DIRECTORY},
    util::validation::{collect, ensure_valid, missing_reference},
};

/// Returned with a 400 when a title is already taken by another post.
pub const DUPLICATE_TITLE_MESSAGE: &str = "Title already exists. Please choose a different title.";

/// Maximum number of related articles returned for a category.
pub const RELATED_ARTICLE_LIMIT: u64 = 3;

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    /// Gets every post with its author, newest first
    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_all().await?)
    }

    /// Gets a post with its author
    pub async fn get_by_id(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_with_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Checks whether a post already uses the title
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the title is taken
    /// - `Err(AppError::BadRequest)` - The title is missing or blank
    pub async fn title_exists(&self, title: Option<&str>) -> Result<bool, AppError> {
        let title = title.map(str::trim).unwrap_or_default();

        if title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty.".to_string()));
        }

        Ok(PostRepository::new(self.db).title_exists(title).await?)
    }

    /// Gets up to three posts of a category
    pub async fn get_related(&self, category_id: i32) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db)
            .get_related(category_id, RELATED_ARTICLE_LIMIT)
            .await?)
    }

    /// Validates a new post, stores its image and inserts it
    ///
    /// Title uniqueness is checked before any other rule.
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post with its author
    /// - `Err(AppError::BadRequest)` - The title is already taken
    /// - `Err(AppError::Validation)` - A rule failed
    pub async fn create(&self, param: CreatePostParam) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        if let Some(title) = &param.title {
            if repo.title_exists(title).await? {
                return Err(AppError::BadRequest(DUPLICATE_TITLE_MESSAGE.to_string()));
            }
        }

        let mut errors = collect(param.validate());
        for (field, error) in param.form_errors {
            errors.add(field, error);
        }

        if let Some(user_id) = param.user_id {
            if !UserRepository::new(self.db).exists(user_id).await? {
                errors.add("user_id", missing_reference("user id"));
            }
        }

        if let Some(category_id) = param.category_id {
            if !CategoryRepository::new(self.db).exists(category_id).await? {
                errors.add("category_id", missing_reference("category id"));
            }
        }

        let image = match param.image {
            Some(upload) => match upload.check(CREATE_IMAGE_MAX_KIB) {
                Ok(format) => Some((upload, format)),
                Err(error) => {
                    errors.add("image", error);
                    None
                }
            },
            None => None,
        };

        ensure_valid(errors)?;

        let (Some(title), Some(content), Some(user_id)) =
            (param.title, param.content, param.user_id)
        else {
            return Err(AppError::InternalError(
                "Validated post is missing required fields".to_string(),
            ));
        };

        let image_path = self.store_image(image).await?;

        let created = repo
            .create(NewPost {
                user_id,
                category_id: param.category_id,
                title,
                content,
                image: image_path.clone(),
            })
            .await;

        let post = match created {
            Ok(post) => post,
            Err(err) => {
                self.storage.discard(image_path.as_deref()).await;
                return Err(err.into());
            }
        };

        self.get_by_id(post.id).await
    }

    /// Applies the provided fields to a post, replacing its image if a new one is sent
    ///
    /// # Returns
    /// - `Ok(Post)` - The refreshed post with its author
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::BadRequest)` - The new title belongs to another post
    /// - `Err(AppError::Validation)` - A rule failed
    pub async fn update(&self, id: i32, param: UpdatePostParam) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if let Some(title) = &param.title {
            if repo.title_exists_excluding(title, id).await? {
                return Err(AppError::BadRequest(DUPLICATE_TITLE_MESSAGE.to_string()));
            }
        }

        let mut errors = collect(param.validate());
        for (field, error) in param.form_errors {
            errors.add(field, error);
        }

        let image = match param.image {
            Some(upload) => match upload.check(UPDATE_IMAGE_MAX_KIB) {
                Ok(format) => Some((upload, format)),
                Err(error) => {
                    errors.add("image", error);
                    None
                }
            },
            None => None,
        };

        ensure_valid(errors)?;

        let image_path = self.store_image(image).await?;

        let updated = repo
            .update(
                id,
                PostChanges {
                    title: param.title,
                    content: param.content,
                    image: image_path.clone(),
                },
            )
            .await;

        match updated {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.storage.discard(image_path.as_deref()).await;
                return Err(AppError::NotFound("Post not found".to_string()));
            }
            Err(err) => {
                self.storage.discard(image_path.as_deref()).await;
                return Err(err.into());
            }
        }

        if image_path.is_some() {
            self.storage.discard(existing.image.as_deref()).await;
        }

        self.get_by_id(id).await
    }

    /// Deletes a post and its image file
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PostRepository::new(self.db);

        let post = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        self.storage.discard(post.image.as_deref()).await;

        repo.delete(id).await?;

        Ok(())
    }

    async fn store_image(
        &self,
        image: Option<(ImageUpload, ImageFormat)>,
    ) -> Result<Option<String>, AppError> {
        let Some((upload, format)) = image else {
            return Ok(None);
        };

        let path = self
            .storage
            .store(IMAGE_DIRECTORY, &upload.bytes, format.extension())
            .await?;

        tracing::debug!(
            "Stored upload {} ({}) as {}",
            upload.file_name.as_deref().unwrap_or("<unnamed>"),
            upload.content_type.as_deref().unwrap_or("unknown type"),
            path
        );

        Ok(Some(path))
    }
}
