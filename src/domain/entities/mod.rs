//! # Domain Entities Module
//!
//! MongoDB 문서로 영속화되는 핵심 엔티티를 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 위치 필드 | 인덱스 |
//! |--------|--------|-----------|--------|
//! | [`users::User`] | `users` | `currentLocation` | `2dsphere`, `username`/`email` unique |
//! | [`restaurants::Restaurant`] | `restaurants` | `location` | `2dsphere`, `officialEmail` unique |
//!
//! 두 위치 필드는 같은 GeoJSON 점 형태(`{type: "Point", coordinates: [lon, lat]}`)를 공유합니다.

pub mod users;
pub mod restaurants;
