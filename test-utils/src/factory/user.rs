//! Users: the authors of reviews, replies and posts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Builds a customer account, or a staff account with [`UserFactory::staff`].
///
/// ```rust,ignore
/// let author = UserFactory::new(&db).name("Linh").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    /// Defaults to a non-admin `Customer {n}` with a unique `customer{n}@example.com` address.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();

        Self {
            db,
            name: format!("Customer {}", n),
            email: format!("customer{}@example.com", n),
            admin: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Marks the account as shop staff.
    pub fn staff(mut self) -> Self {
        self.admin = true;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            admin: ActiveValue::Set(self.admin),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }
}

/// Inserts a customer with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
