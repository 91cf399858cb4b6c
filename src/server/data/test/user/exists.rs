use super::*;

/// Tests that an inserted user is reported as existing.
///
/// Expected: Ok(true) for the user, Ok(false) for an unknown ID
#[tokio::test]
async fn reports_existing_and_missing_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.exists(user.id).await?);
    assert!(!repo.exists(user.id + 1000).await?);

    Ok(())
}

/// Tests finding a user by ID.
///
/// Expected: Ok(Some) with matching name
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let user = factory::user::UserFactory::new(db)
        .name("Linh")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_id(user.id).await?;

    assert_eq!(found.map(|u| u.name), Some("Linh".to_string()));

    Ok(())
}
