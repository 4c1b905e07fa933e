use super::*;

/// Tests replacing a user's password.
///
/// Expected: Ok(Some) with new password and names unchanged
#[tokio::test]
async fn updates_only_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisterUserRepository::new(db);
    let created = repo.create(alex()).await?;

    let updated = repo
        .update_password(created.id, "n3wPass".to_string())
        .await?
        .expect("user should exist");

    assert_eq!(updated.password, "n3wPass");
    assert_eq!(updated.first_name, "Alex");
    assert_eq!(updated.last_name, "Vele");

    let db_user = entity::prelude::RegisterUser::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_user.password, "n3wPass");

    Ok(())
}

/// Tests replacing the password of an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisterUserRepository::new(db);

    assert!(repo
        .update_password(99999, "n3wPass".to_string())
        .await?
        .is_none());

    Ok(())
}
