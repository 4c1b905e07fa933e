use super::*;

/// Tests finding a learning activity with its assessment.
///
/// Expected: Ok(Some) with nested assessment
#[tokio::test]
async fn finds_activity_with_assessment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let assessment = factory::create_assessment(db).await?;
    let activity = factory::create_learning_activity_with_assessment(db, assessment.id).await?;

    let repo = LearningActivityRepository::new(db);
    let found = repo.find_by_id(activity.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, activity.activity_name);
    assert_eq!(found.assessment.map(|a| a.id), Some(assessment.id));

    Ok(())
}

/// Tests finding an unknown learning activity id.
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

    let repo = LearningActivityRepository::new(db);

    assert!(repo.find_by_id(99999).await?.is_none());

    Ok(())
}
