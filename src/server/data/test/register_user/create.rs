use super::*;

/// Tests registering a user.
///
/// Expected: Ok with every submitted field stored
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisterUserRepository::new(db);
    let created = repo.create(alex()).await?;

    assert!(created.id > 0);
    assert_eq!(created.first_name, "Alex");
    assert_eq!(created.last_name, "Vele");
    assert_eq!(created.email, "alex@gmail.com");
    assert_eq!(created.password, "12345@fsq");
    assert_eq!(created.role, Role::User);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests registering an admin.
///
/// Expected: Ok with admin role persisted
#[tokio::test]
async fn creates_admin_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisterUserRepository::new(db);
    let created = repo
        .create(CreateRegisterUserParam {
            role: Role::Admin,
            ..alex()
        })
        .await?;

    let db_user = entity::prelude::RegisterUser::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_user.role, Role::Admin);

    Ok(())
}
