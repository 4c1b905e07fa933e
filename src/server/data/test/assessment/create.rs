use super::*;

/// Tests creating an assessment.
///
/// Verifies that the repository stores every submitted field and returns the
/// assessment with a database-assigned id.
///
/// Expected: Ok with stored assessment
#[tokio::test]
async fn creates_assessment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let repo = AssessmentRepository::new(db);
    let created = repo
        .create(CreateAssessmentParam {
            name: "Java".to_string(),
            assessment_type: "MCQ".to_string(),
            date,
            weightage: 2.5,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Java");
    assert_eq!(created.assessment_type, "MCQ");
    assert_eq!(created.date, date);
    assert_eq!(created.weightage, 2.5);

    let db_assessment = entity::prelude::Assessment::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_assessment.is_some());
    assert_eq!(db_assessment.unwrap().assessment_name, "Java");

    Ok(())
}

/// Tests that ids are assigned in insertion order.
///
/// Expected: Ok with increasing ids
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AssessmentRepository::new(db);
    let first = repo
        .create(CreateAssessmentParam {
            name: "First".to_string(),
            assessment_type: "MCQ".to_string(),
            date: Utc::now(),
            weightage: 1.0,
        })
        .await?;
    let second = repo
        .create(CreateAssessmentParam {
            name: "Second".to_string(),
            assessment_type: "Essay".to_string(),
            date: Utc::now(),
            weightage: 1.0,
        })
        .await?;

    assert!(second.id > first.id);

    Ok(())
}
