use super::*;

/// Tests updating every field of an assessment.
///
/// Verifies that the stored row reflects exactly the new values.
///
/// Expected: Ok(Some) with updated assessment
#[tokio::test]
async fn updates_assessment_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let assessment = factory::create_assessment(db).await?;
    let new_date = Utc.with_ymd_and_hms(2025, 1, 15, 12, 30, 0).unwrap();

    let repo = AssessmentRepository::new(db);
    let updated = repo
        .update(UpdateAssessmentParam {
            id: assessment.id,
            name: "Updated".to_string(),
            assessment_type: "Essay".to_string(),
            date: new_date,
            weightage: 4.0,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.id, assessment.id);
    assert_eq!(updated.name, "Updated");

    let refetched = repo.find_by_id(assessment.id).await?.unwrap();
    assert_eq!(refetched.name, "Updated");
    assert_eq!(refetched.assessment_type, "Essay");
    assert_eq!(refetched.date, new_date);
    assert_eq!(refetched.weightage, 4.0);

    Ok(())
}

/// Tests updating an unknown assessment id.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AssessmentRepository::new(db);
    let updated = repo
        .update(UpdateAssessmentParam {
            id: 99999,
            name: "Ghost".to_string(),
            assessment_type: "MCQ".to_string(),
            date: Utc::now(),
            weightage: 1.0,
        })
        .await?;

    assert!(updated.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
