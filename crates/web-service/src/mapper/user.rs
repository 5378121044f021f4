use crate::models::users::{UserCreateRequest, UserResponse};
use database::{NewUser, UserEntity};

/// 用户转换器
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl UserMapper {
    /// 请求转换为待插入记录
    ///
    /// `id`、`created_at`、`updated_at` 由存储层生成，这里不设置。
    /// 不做任何校验，调用前请求已经通过 [`ValidatedJson`](crate::extract::ValidatedJson)。
    pub fn to_entity(&self, request: UserCreateRequest) -> NewUser {
        NewUser {
            username: request.username,
            email: request.email,
            active: request.active.unwrap_or_default(),
        }
    }

    pub fn to_response(&self, user: &UserEntity) -> UserResponse {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_to_entity_copies_client_fields() {
        let request = UserCreateRequest {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            active: Some(true),
        };

        let user = UserMapper.to_entity(request);
        assert_eq!(
            user,
            NewUser {
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                active: true,
            }
        );
    }

    #[test]
    fn test_to_response_hides_active_and_timestamps() {
        let now = Utc::now();
        let entity = UserEntity {
            id: 3,
            username: "founduser".to_string(),
            email: "found@example.com".to_string(),
            active: false,
            created_at: now,
            updated_at: now,
        };

        let response = UserMapper.to_response(&entity);
        assert_eq!(response.id, 3);
        assert_eq!(response.username, "founduser");
        assert_eq!(response.email, "found@example.com");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
