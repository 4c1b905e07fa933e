use super::*;

/// Tests deleting an assessment by id.
///
/// Expected: Ok(1) with the row removed
#[tokio::test]
async fn deletes_assessment_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let assessment = factory::create_assessment(db).await?;

    let repo = AssessmentRepository::new(db);
    let rows = repo.delete(assessment.id).await?;

    assert_eq!(rows, 1);
    let db_assessment = entity::prelude::Assessment::find_by_id(assessment.id)
        .one(db)
        .await?;
    assert!(db_assessment.is_none());

    Ok(())
}

/// Tests that deleting an assessment keeps referencing learning activities.
///
/// Verifies that the activity survives with its assessment reference set to null.
///
/// Expected: Ok with activity's assessment_id cleared
#[tokio::test]
async fn deleting_assessment_clears_activity_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let assessment = factory::create_assessment(db).await?;
    let activity = factory::create_learning_activity_with_assessment(db, assessment.id).await?;

    let repo = AssessmentRepository::new(db);
    repo.delete(assessment.id).await?;

    let db_activity = entity::prelude::LearningActivity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(db_activity.is_some());
    assert_eq!(db_activity.unwrap().assessment_id, None);

    Ok(())
}

/// Tests deleting a nonexistent assessment.
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

    let repo = AssessmentRepository::new(db);
    let rows = repo.delete(99999).await?;

    assert_eq!(rows, 0);

    Ok(())
}
