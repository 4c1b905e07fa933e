pub use super::assessment::Entity as Assessment;
pub use super::learning_activity::Entity as LearningActivity;
pub use super::register_user::Entity as RegisterUser;
pub use super::user_activity::Entity as UserActivity;
