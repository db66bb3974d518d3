//! # 확장 검색 세션
//!
//! "더 넓게 검색" 흐름의 반경 상태를 명시적으로 소유합니다.
//! 반경은 세션 안에서 늘어나기만 하며, 줄어드는 것은 [`SearchSession::reset`]을
//! 호출했을 때(예: 사용자가 위치를 새로 저장했을 때)뿐입니다.
//!
//! ## 상태 전이
//!
//! ```text
//! new() ──► default ──expand()──► default + step ──expand()──► ... ──► max (AtLimit)
//!              ▲                                                          │
//!              └────────────────────────── reset() ───────────────────────┘
//! ```
//!
//! HTTP는 상태가 없으므로 서버는 매 요청마다 응답에 실어 보낸 반경으로
//! [`SearchSession::resume`]하여 다음 반경을 계산합니다.

use crate::{
    config::SearchConfig,
    core::AppResult,
    domain::models::geo::SearchRadius,
    services::search::proximity_service::{NearbyOutcome, ProximityService},
};

/// 반경 확장 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// 반경이 늘어남
    Widened(SearchRadius),
    /// 이미 최대 반경이라 변화 없음
    AtLimit(SearchRadius),
}

/// 한 번의 검색 흐름이 공유하는 반경 상태
#[derive(Debug, Clone)]
pub struct SearchSession {
    current: SearchRadius,
    config: SearchConfig,
}

impl SearchSession {
    /// 기본 반경에서 시작하는 새 세션
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            current: SearchRadius::bounded(config.default_radius_meters, config),
            config: config.clone(),
        }
    }

    /// 이전 응답이 알려준 반경에서 세션을 이어갑니다.
    pub fn resume(radius: SearchRadius, config: &SearchConfig) -> Self {
        Self {
            current: SearchRadius::bounded(radius.meters(), config),
            config: config.clone(),
        }
    }

    pub fn radius(&self) -> SearchRadius {
        self.current
    }

    /// 반경을 확장 단위만큼 늘립니다. 최대 반경을 넘지 않으며 줄어들지 않습니다.
    pub fn expand(&mut self) -> Expansion {
        let max = self.config.max_radius_meters;
        if self.current.meters() >= max {
            return Expansion::AtLimit(self.current);
        }

        let next = self.current
            .meters()
            .saturating_add(self.config.radius_increment_meters)
            .min(max);
        self.current = SearchRadius::bounded(next, &self.config);

        Expansion::Widened(self.current)
    }

    /// 다음 확장 시 사용할 반경. 최대 반경이면 `None`
    pub fn next_radius(&self) -> Option<SearchRadius> {
        match self.clone().expand() {
            Expansion::Widened(radius) => Some(radius),
            Expansion::AtLimit(_) => None,
        }
    }

    /// 기본 반경으로 되돌립니다.
    pub fn reset(&mut self) {
        self.current = SearchRadius::bounded(self.config.default_radius_meters, &self.config);
    }

    /// 현재 반경으로 주변 검색을 실행합니다.
    pub async fn search(
        &self,
        service: &ProximityService,
        user_id: &str,
    ) -> AppResult<NearbyOutcome> {
        service.find_nearby(user_id, self.current).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::domain::entities::restaurants::Restaurant;
    use crate::domain::entities::users::User;
    use crate::domain::models::geo::{Coordinates, GeoPoint};
    use crate::repositories::memory::{north_of, InMemoryStore};

    #[test]
    fn test_new_session_starts_at_default() {
        let session = SearchSession::new(&SearchConfig::default());
        assert_eq!(session.radius().meters(), 5_000);
    }

    #[test]
    fn test_expand_is_monotonic_and_capped() {
        let config = SearchConfig::default();
        let mut session = SearchSession::new(&config);
        let mut previous = session.radius();

        for _ in 0..20 {
            session.expand();
            assert!(session.radius() >= previous);
            previous = session.radius();
        }

        assert_eq!(session.radius().meters(), config.max_radius_meters);
        assert_eq!(session.expand(), Expansion::AtLimit(session.radius()));
        assert_eq!(session.next_radius(), None);
    }

    #[test]
    fn test_expand_steps_by_increment() {
        let mut session = SearchSession::new(&SearchConfig::default());

        assert_eq!(session.next_radius().map(|r| r.meters()), Some(10_000));
        assert!(matches!(session.expand(), Expansion::Widened(r) if r.meters() == 10_000));
        assert!(matches!(session.expand(), Expansion::Widened(r) if r.meters() == 15_000));
    }

    #[test]
    fn test_last_step_lands_exactly_on_max() {
        let config = SearchConfig {
            max_radius_meters: 12_000,
            ..SearchConfig::default()
        };
        let mut session = SearchSession::resume(SearchRadius::bounded(10_000, &config), &config);

        assert!(matches!(session.expand(), Expansion::Widened(r) if r.meters() == 12_000));
        assert!(matches!(session.expand(), Expansion::AtLimit(_)));
    }

    #[test]
    fn test_reset_returns_to_default() {
        let config = SearchConfig::default();
        let mut session = SearchSession::new(&config);
        session.expand();
        session.expand();

        session.reset();

        assert_eq!(session.radius().meters(), config.default_radius_meters);
    }

    #[actix_web::test]
    async fn test_expanding_search_finds_farther_restaurant() {
        let store = Arc::new(InMemoryStore::new());
        let origin = Coordinates::new(6.9271, 79.8612).unwrap();
        let mut user = User::new("kasun", "kasun@example.com");
        user.current_location = Some(GeoPoint::from(origin));
        let user_id = store.insert_user(user);

        let mut far = Restaurant::new("far", "far@example.com");
        far.location = Some(GeoPoint::from(north_of(origin, 8_000.0)));
        store.insert_restaurant(far);

        let config = SearchConfig::default();
        let service = ProximityService::new(store.clone(), store.clone(), config.clone());
        let mut session = SearchSession::new(&config);

        assert!(matches!(session.search(&service, &user_id).await.unwrap(), NearbyOutcome::Empty));

        session.expand();
        let outcome = session.search(&service, &user_id).await.unwrap();
        assert!(matches!(outcome, NearbyOutcome::Found(ref list) if list.len() == 1));
    }
}
