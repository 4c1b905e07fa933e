use chrono::Utc;
use entity::user_activity::ActivityStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::user_activity::{CreateUserActivityParam, UserActivity};

pub struct UserActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Enrols a user in a learning activity with status `ENROLLED`, stamped with the current time
    pub async fn create(&self, param: CreateUserActivityParam) -> Result<UserActivity, DbErr> {
        let entity = entity::user_activity::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            activity_id: ActiveValue::Set(param.activity_id),
            status: ActiveValue::Set(ActivityStatus::Enrolled),
            enrolled_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(UserActivity::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserActivity>, DbErr> {
        let entity = entity::prelude::UserActivity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserActivity::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<UserActivity>, DbErr> {
        let entities = entity::prelude::UserActivity::find()
            .order_by_asc(entity::user_activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserActivity::from_entity).collect())
    }

    /// Gets all enrolments of one user ordered by id
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserActivity>, DbErr> {
        let entities = entity::prelude::UserActivity::find()
            .filter(entity::user_activity::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserActivity::from_entity).collect())
    }

    /// Sets the status of an enrolment, returning `Ok(None)` for an unknown id
    pub async fn update_status(
        &self,
        id: i32,
        status: ActivityStatus,
    ) -> Result<Option<UserActivity>, DbErr> {
        let Some(existing) = entity::prelude::UserActivity::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.status = ActiveValue::Set(status);

        let entity = active.update(self.db).await?;

        Ok(Some(UserActivity::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserActivity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
