//! 주변 레스토랑 검색 서비스
//!
//! - [`proximity_service`] - 저장된 사용자 위치 기준의 반경 검색
//! - [`search_session`] - "더 넓게 검색"을 위한 반경 상태
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::search::{NearbyOutcome, SearchSession};
//!
//! let mut session = SearchSession::new(proximity.config());
//! while let NearbyOutcome::Empty = session.search(&proximity, &user_id).await? {
//!     if let Expansion::AtLimit(_) = session.expand() {
//!         break;
//!     }
//! }
//! ```

pub mod proximity_service;
pub mod search_session;

pub use proximity_service::{NearbyOutcome, ProximityService};
pub use search_session::{Expansion, SearchSession};
