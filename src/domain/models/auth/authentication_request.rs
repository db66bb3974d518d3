/// 라우트 접근에 요구되는 역할
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredRole(String);

impl RequiredRole {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// 주체 역할 목록에 요구 역할이 포함되어 있는지 확인
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        user_roles.contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::roles;

    #[test]
    fn test_required_role() {
        let required = RequiredRole::new(roles::USER);

        assert!(required.is_satisfied(&[roles::USER.to_string()]));
        assert!(required.is_satisfied(&[roles::RESTAURANT.to_string(), roles::USER.to_string()]));
        assert!(!required.is_satisfied(&[roles::RESTAURANT.to_string()]));
        assert!(!required.is_satisfied(&[]));
    }
}
