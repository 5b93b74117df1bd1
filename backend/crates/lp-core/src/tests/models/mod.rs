mod auth_result;
mod credentials;
mod login_result;
mod user_role;
