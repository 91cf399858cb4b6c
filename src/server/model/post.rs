//! Blog post domain model and parameters.

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::{
    model::post::PostDto,
    server::{
        model::{upload::ImageUpload, user::User},
        util::{
            multipart::PostForm,
            validation::{normalize_input, rule_error},
        },
    },
};

/// A blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub category_id: Option<i32>,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<User>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            category_id: entity.category_id,
            title: entity.title,
            content: entity.content,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            user: None,
        }
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            user_id: self.user_id,
            category_id: self.category_id,
            title: self.title,
            content: self.content,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: self.user.map(User::into_dto),
        }
    }
}

/// A failure found while reading the raw form, reported alongside the declarative rules.
pub type FormError = (&'static str, ValidationError);

/// Parses an integer form field.
///
/// Blank input yields `None`. A `required` field that is blank, or any value that is not a
/// number, records a failure in `errors`.
fn parse_id(
    value: Option<String>,
    field: &'static str,
    label: &str,
    required: bool,
    errors: &mut Vec<FormError>,
) -> Option<i32> {
    let Some(value) = normalize_input(value) else {
        if required {
            errors.push((
                field,
                rule_error("required", format!("The {} field is required.", label)),
            ));
        }
        return None;
    };

    match value.parse::<i32>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push((
                field,
                rule_error("integer", format!("The {} field must be an integer.", label)),
            ));
            None
        }
    }
}

/// Fields of a new post as submitted.
///
/// The numeric fields arrive as text; `form_errors` holds the failures found while parsing
/// them, e.g. a missing or non-numeric `user_id`.
#[derive(Debug, Clone, Validate)]
pub struct CreatePostParam {
    #[validate(
        required(message = "The title field is required."),
        length(
            max = 255,
            message = "The title field must not be greater than 255 characters."
        )
    )]
    pub title: Option<String>,
    #[validate(required(message = "The content field is required."))]
    pub content: Option<String>,
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub image: Option<ImageUpload>,
    pub form_errors: Vec<FormError>,
}

impl From<PostForm> for CreatePostParam {
    fn from(form: PostForm) -> Self {
        let mut form_errors = Vec::new();
        let user_id = parse_id(form.user_id, "user_id", "user id", true, &mut form_errors);
        let category_id = parse_id(
            form.category_id,
            "category_id",
            "category id",
            false,
            &mut form_errors,
        );

        Self {
            title: normalize_input(form.title),
            content: normalize_input(form.content),
            user_id,
            category_id,
            image: form.image,
            form_errors,
        }
    }
}

/// Reads a text field that may be left out, but must not be blank once sent.
///
/// A part that was sent blank records a `required` failure in `errors`.
fn present_text(
    value: Option<String>,
    field: &'static str,
    errors: &mut Vec<FormError>,
) -> Option<String> {
    let sent = value.is_some();
    let value = normalize_input(value);

    if sent && value.is_none() {
        errors.push((
            field,
            rule_error("required", format!("The {} field is required.", field)),
        ));
    }

    value
}

/// Fields of a post edit. Only the provided ones are applied.
///
/// `form_errors` holds fields that were sent blank.
#[derive(Debug, Clone, Validate)]
pub struct UpdatePostParam {
    #[validate(length(
        max = 255,
        message = "The title field must not be greater than 255 characters."
    ))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<ImageUpload>,
    pub form_errors: Vec<FormError>,
}

impl From<PostForm> for UpdatePostParam {
    fn from(form: PostForm) -> Self {
        let mut form_errors = Vec::new();
        let title = present_text(form.title, "title", &mut form_errors);
        let content = present_text(form.content, "content", &mut form_errors);

        Self {
            title,
            content,
            image: form.image,
            form_errors,
        }
    }
}

/// A validated post ready to be inserted. `image` is the stored relative path.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i32,
    pub category_id: Option<i32>,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Column changes applied by an update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PostForm {
        PostForm {
            title: Some("  A title ".to_string()),
            content: Some("Body".to_string()),
            user_id: Some("3".to_string()),
            category_id: Some("".to_string()),
            image: None,
        }
    }

    #[test]
    fn create_param_trims_and_parses_fields() {
        let param = CreatePostParam::from(form());

        assert_eq!(param.title.as_deref(), Some("A title"));
        assert_eq!(param.user_id, Some(3));
        assert_eq!(param.category_id, None);
        assert!(param.form_errors.is_empty());
        assert!(param.validate().is_ok());
    }

    #[test]
    fn create_param_reports_non_numeric_ids() {
        let param = CreatePostParam::from(PostForm {
            user_id: Some("abc".to_string()),
            ..form()
        });

        assert_eq!(param.user_id, None);
        assert_eq!(param.form_errors.len(), 1);
        let (field, error) = &param.form_errors[0];
        assert_eq!(*field, "user_id");
        assert_eq!(
            error.message.as_deref(),
            Some("The user id field must be an integer.")
        );
    }

    #[test]
    fn create_param_requires_user_id() {
        let param = CreatePostParam::from(PostForm {
            user_id: None,
            ..form()
        });

        let (field, error) = &param.form_errors[0];
        assert_eq!(*field, "user_id");
        assert_eq!(error.code, "required");
    }

    #[test]
    fn create_param_requires_title_and_content() {
        let param = CreatePostParam::from(PostForm {
            title: Some("   ".to_string()),
            content: None,
            ..form()
        });

        let errors = param.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert!(field_errors.contains_key("title"));
        assert!(field_errors.contains_key("content"));
    }

    #[test]
    fn update_param_leaves_out_missing_fields() {
        let param = UpdatePostParam::from(PostForm::default());

        assert_eq!(param.title, None);
        assert_eq!(param.content, None);
        assert!(param.form_errors.is_empty());
    }

    #[test]
    fn update_param_requires_fields_sent_blank() {
        let param = UpdatePostParam::from(PostForm {
            title: Some("".to_string()),
            content: Some("  ".to_string()),
            ..PostForm::default()
        });

        let fields: Vec<&str> = param.form_errors.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, ["title", "content"]);
        assert_eq!(param.form_errors[0].1.code, "required");
        assert_eq!(
            param.form_errors[0].1.message.as_deref(),
            Some("The title field is required.")
        );
    }

    #[test]
    fn update_param_rejects_long_title() {
        let param = UpdatePostParam::from(PostForm {
            title: Some("x".repeat(256)),
            ..PostForm::default()
        });

        assert!(param.validate().is_err());
    }
}
