pub mod user_group_repository;
pub mod user_repository;
