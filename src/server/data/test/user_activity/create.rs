use super::*;

/// Tests enrolling a user in a learning activity.
///
/// Expected: Ok with `ENROLLED` status
#[tokio::test]
async fn enrols_user_in_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let activity = factory::create_learning_activity(db).await?;

    let repo = UserActivityRepository::new(db);
    let created = repo
        .create(CreateUserActivityParam {
            user_id: user.id,
            activity_id: activity.id,
        })
        .await?;

    assert_eq!(created.user_id, user.id);
    assert_eq!(created.activity_id, activity.id);
    assert_eq!(created.status, ActivityStatus::Enrolled);

    let all = repo.get_all().await?;
    assert_eq!(all, vec![created]);

    Ok(())
}

/// Tests enrolling a nonexistent user.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_learning_activity(db).await?;

    let repo = UserActivityRepository::new(db);
    let result = repo
        .create(CreateUserActivityParam {
            user_id: 99999,
            activity_id: activity.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
