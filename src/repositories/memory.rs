//! 테스트용 메모리 저장소
//!
//! MongoDB 없이 서비스와 핸들러를 검증하기 위한 구현입니다.
//! `$near`의 동작(반경 필터, 가까운 순 정렬, 개수 제한, 위치 없는 문서 제외)을
//! 대권 거리로 흉내 냅니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::{AppError, AppResult};
use crate::domain::entities::restaurants::Restaurant;
use crate::domain::entities::users::User;
use crate::domain::models::geo::{Coordinates, GeoPoint, SearchRadius};
use crate::repositories::{RestaurantStore, UserStore};
use crate::repositories::users::user_repo::parse_object_id;

const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// 두 점 사이의 대권 거리 (미터)
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (lat1, lat2) = (a.latitude().to_radians(), b.latitude().to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// `origin`에서 정북 방향으로 `meters`만큼 떨어진 좌표
pub fn north_of(origin: Coordinates, meters: f64) -> Coordinates {
    let delta = (meters / EARTH_RADIUS_METERS).to_degrees();
    Coordinates::new(origin.latitude() + delta, origin.longitude()).unwrap()
}

#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<ObjectId, User>>,
    restaurants: Mutex<HashMap<ObjectId, Restaurant>>,
    near_queries: AtomicUsize,
    unavailable: AtomicBool,
    latency: Mutex<Option<Duration>>,
    /// `limit`을 무시하고 전부 돌려주는 저장소를 흉내 냄
    ignore_limit: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, mut user: User) -> String {
        let id = user.id.unwrap_or_else(ObjectId::new);
        user.id = Some(id);
        self.users.lock().unwrap().insert(id, user);
        id.to_hex()
    }

    pub fn insert_restaurant(&self, mut restaurant: Restaurant) -> String {
        let id = restaurant.id.unwrap_or_else(ObjectId::new);
        restaurant.id = Some(id);
        self.restaurants.lock().unwrap().insert(id, restaurant);
        id.to_hex()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        let id = ObjectId::parse_str(id).ok()?;
        self.users.lock().unwrap().get(&id).cloned()
    }

    /// 지금까지 실행된 주변 검색 횟수
    pub fn near_queries(&self) -> usize {
        self.near_queries.load(Ordering::SeqCst)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap() = Some(latency);
    }

    pub fn set_ignore_limit(&self, ignore: bool) {
        self.ignore_limit.store(ignore, Ordering::SeqCst);
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(AppError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.check_available()?;
        let id = parse_object_id(id)?;
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn update_location(&self, id: &str, point: GeoPoint) -> AppResult<Option<User>> {
        self.check_available()?;
        let id = parse_object_id(id)?;
        let mut users = self.users.lock().unwrap();

        Ok(users.get_mut(&id).map(|user| {
            user.current_location = Some(point);
            user.clone()
        }))
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>> {
        self.check_available()?;
        let id = parse_object_id(id)?;
        Ok(self.restaurants.lock().unwrap().get(&id).cloned())
    }

    async fn find_near(
        &self,
        origin: &GeoPoint,
        radius: SearchRadius,
        limit: i64,
    ) -> AppResult<Vec<Restaurant>> {
        self.near_queries.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let latency = *self.latency.lock().unwrap();
        if let Some(latency) = latency {
            actix_web::rt::time::sleep(latency).await;
        }

        let mut within: Vec<(f64, Restaurant)> = self
            .restaurants
            .lock()
            .unwrap()
            .values()
            .filter_map(|r| {
                let distance = distance_meters(origin, r.location.as_ref()?);
                (distance <= f64::from(radius.meters())).then(|| (distance, r.clone()))
            })
            .collect();

        within.sort_by(|a, b| a.0.total_cmp(&b.0));

        let take = if self.ignore_limit.load(Ordering::SeqCst) {
            within.len()
        } else {
            limit.max(0) as usize
        };

        Ok(within.into_iter().take(take).map(|(_, r)| r).collect())
    }

    async fn update_location(&self, id: &str, point: GeoPoint) -> AppResult<Option<Restaurant>> {
        self.check_available()?;
        let id = parse_object_id(id)?;
        let mut restaurants = self.restaurants.lock().unwrap();

        Ok(restaurants.get_mut(&id).map(|r| {
            r.location = Some(point);
            r.clone()
        }))
    }

    async fn add_rating(&self, id: &str, rating: i64) -> AppResult<Option<Restaurant>> {
        self.check_available()?;
        let id = parse_object_id(id)?;
        let mut restaurants = self.restaurants.lock().unwrap();

        Ok(restaurants.get_mut(&id).map(|r| {
            r.rating_total += rating;
            r.rating_count += 1;
            r.average_rating = r.rating_total as f64 / r.rating_count as f64;
            r.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_of_is_consistent_with_distance() {
        let origin = Coordinates::new(6.9271, 79.8612).unwrap();
        let moved = north_of(origin, 4_000.0);

        let d = distance_meters(&GeoPoint::from(origin), &GeoPoint::from(moved));
        assert!((d - 4_000.0).abs() < 1.0);
    }
}
