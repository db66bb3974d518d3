use serde::{Deserialize, Serialize};
use validator::Validate;

/// 평점 등록 요청
///
/// ```json
/// { "rating": 4 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RatingRequest {
    /// 별점 (1 ~ 5)
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(RatingRequest { rating: 1 }.validate().is_ok());
        assert!(RatingRequest { rating: 5 }.validate().is_ok());
        assert!(RatingRequest { rating: 0 }.validate().is_err());
        assert!(RatingRequest { rating: 6 }.validate().is_err());
    }
}
