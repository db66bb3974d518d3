//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)가 MongoDB `users` 컬렉션에 대해
//! [`UserStore`](crate::repositories::UserStore)를 구현합니다.

pub mod user_repo;

pub use user_repo::UserRepository;
