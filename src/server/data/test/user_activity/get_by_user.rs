use super::*;

/// Tests listing enrolments filtered to one user.
///
/// Expected: Ok with only that user's enrolments
#[tokio::test]
async fn returns_only_enrolments_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alex = factory::create_user(db).await?;
    let sam = factory::create_user(db).await?;
    let first = factory::create_learning_activity(db).await?;
    let second = factory::create_learning_activity(db).await?;

    factory::create_user_activity(db, alex.id, first.id).await?;
    factory::create_user_activity(db, sam.id, first.id).await?;
    factory::create_user_activity(db, alex.id, second.id).await?;

    let repo = UserActivityRepository::new(db);
    let enrolments = repo.get_by_user(alex.id).await?;

    assert_eq!(enrolments.len(), 2);
    assert!(enrolments.iter().all(|e| e.user_id == alex.id));
    assert_eq!(enrolments[0].activity_id, first.id);
    assert_eq!(enrolments[1].activity_id, second.id);

    assert!(repo.get_by_user(99999).await?.is_empty());

    Ok(())
}
