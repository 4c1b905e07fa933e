use super::*;

/// Tests updating a learning activity and re-linking its assessment.
///
/// Expected: Ok(Some) with new fields and new assessment
#[tokio::test]
async fn updates_fields_and_assessment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_assessment = factory::create_assessment(db).await?;
    let new_assessment = factory::create_assessment(db).await?;
    let activity =
        factory::create_learning_activity_with_assessment(db, old_assessment.id).await?;

    let repo = LearningActivityRepository::new(db);
    let updated = repo
        .update(UpdateLearningActivityParam {
            id: activity.id,
            name: "Lifetimes".to_string(),
            resource_link: "https://doc.rust-lang.org/book/ch10-03.html".to_string(),
            level: "Intermediate".to_string(),
            score: 20.0,
            creation_date: None,
            assessment_id: Some(Some(new_assessment.id)),
        })
        .await?
        .expect("activity should exist");

    assert_eq!(updated.name, "Lifetimes");
    assert_eq!(updated.level, "Intermediate");
    assert_eq!(updated.score, 20.0);
    assert_eq!(updated.creation_date, activity.creation_date);
    assert_eq!(updated.assessment.map(|a| a.id), Some(new_assessment.id));

    Ok(())
}

/// Tests that an update without an assessment id keeps the existing link.
///
/// Expected: Ok(Some) with initial assessment
#[tokio::test]
async fn keeps_assessment_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let assessment = factory::create_assessment(db).await?;
    let activity = factory::create_learning_activity_with_assessment(db, assessment.id).await?;
    let new_date = Utc.with_ymd_and_hms(2023, 12, 24, 18, 0, 0).unwrap();

    let repo = LearningActivityRepository::new(db);
    let updated = repo
        .update(UpdateLearningActivityParam {
            id: activity.id,
            name: "Renamed".to_string(),
            resource_link: activity.resource_link.clone(),
            level: activity.activity_level.clone(),
            score: activity.score,
            creation_date: Some(new_date),
            assessment_id: None,
        })
        .await?
        .expect("activity should exist");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.creation_date, new_date);
    assert_eq!(updated.assessment.map(|a| a.id), Some(assessment.id));

    Ok(())
}

/// Tests that an explicit empty assessment detaches the activity from its assessment.
///
/// Expected: Ok(Some) without assessment, assessment row still stored
#[tokio::test]
async fn clears_assessment_when_set_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let assessment = factory::create_assessment(db).await?;
    let activity = factory::create_learning_activity_with_assessment(db, assessment.id).await?;

    let repo = LearningActivityRepository::new(db);
    let updated = repo
        .update(UpdateLearningActivityParam {
            id: activity.id,
            name: activity.activity_name.clone(),
            resource_link: activity.resource_link.clone(),
            level: activity.activity_level.clone(),
            score: activity.score,
            creation_date: None,
            assessment_id: Some(None),
        })
        .await?
        .expect("activity should exist");

    assert!(updated.assessment.is_none());
    let stored = entity::prelude::LearningActivity::find_by_id(activity.id)
        .one(db)
        .await?
        .expect("activity should exist");
    assert_eq!(stored.assessment_id, None);
    assert!(entity::prelude::Assessment::find_by_id(assessment.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests updating an unknown learning activity id.
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
    let updated = repo
        .update(UpdateLearningActivityParam {
            id: 99999,
            name: "Ghost".to_string(),
            resource_link: String::new(),
            level: String::new(),
            score: 0.0,
            creation_date: None,
            assessment_id: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
