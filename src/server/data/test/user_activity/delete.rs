use super::*;

/// Tests deleting an enrolment.
///
/// Expected: Ok(1) with the enrolment removed and user and activity kept
#[tokio::test]
async fn deletes_enrolment_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, activity, user, enrolment) =
        factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = UserActivityRepository::new(db);

    assert_eq!(repo.delete(enrolment.id).await?, 1);
    assert!(repo.find_by_id(enrolment.id).await?.is_none());
    assert_eq!(repo.delete(enrolment.id).await?, 0);

    assert!(entity::prelude::RegisterUser::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::LearningActivity::find_by_id(activity.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
