mod assessment;
mod learning_activity;
mod register_user;
mod user_activity;
