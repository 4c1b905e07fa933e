use super::*;

/// Tests deleting a user removes their enrolments.
///
/// Expected: Ok(1) with user and user activities removed
#[tokio::test]
async fn deletes_user_and_enrolments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, activity, user, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = RegisterUserRepository::new(db);
    let rows = repo.delete(user.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());

    let enrolments = entity::prelude::UserActivity::find()
        .filter(entity::user_activity::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(enrolments, 0);

    assert!(entity::prelude::LearningActivity::find_by_id(activity.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting one user doesn't affect others.
///
/// Expected: Ok with only the target user removed
#[tokio::test]
async fn deletes_user_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = RegisterUserRepository::new(db);
    repo.delete(target.id).await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);

    Ok(())
}

/// Tests deleting a nonexistent user.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_unknown_id_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegisterUserRepository::new(db);

    assert_eq!(repo.delete(99999).await?, 0);

    Ok(())
}
