use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

// JWT Claims 结构体
//
// 只承载身份（sub）与时效。角色不写入令牌：
// 网关每次请求从存储层重新加载用户，令牌中的旧角色无法绕过检查。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: usize,  // Expiration time (时间戳)
    pub iat: usize,  // Issued at (签发时间)
}

/// JWT 编解码器
///
/// 启动时从配置构造一次，之后只读，注入到应用数据中使用。
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64, // 分钟
}

impl JwtCodec {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.secret.as_ref()),
            access_token_expiry: config.access_token_expiry,
        }
    }

    // 签发 Access Token
    pub fn issue(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_expiry(user_id, chrono::Duration::minutes(self.access_token_expiry))
    }

    // 签发带自定义过期时间的 Token
    pub fn issue_with_expiry(
        &self,
        user_id: i64,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    // 验证令牌并解出用户ID
    pub fn decode(&self, token: &str) -> Result<i64, jsonwebtoken::errors::Error> {
        let validation = Validation::default();
        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;

        claims.sub.parse::<i64>().map_err(|_| {
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidToken)
        })
    }

    /// 令牌有效期（秒），用于响应中的 expires_in 字段
    pub fn expires_in(&self) -> i64 {
        self.access_token_expiry * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_codec() -> JwtCodec {
        JwtCodec::new(&JwtConfig {
            secret: "test-secret-key".to_string(),
            access_token_expiry: 15,
        })
    }

    #[test]
    fn test_issue_decode_round_trip() {
        let codec = test_codec();
        let token = codec.issue(42).unwrap();
        assert_eq!(codec.decode(&token).unwrap(), 42);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let codec = test_codec();
        let other = JwtCodec::new(&JwtConfig {
            secret: "another-secret".to_string(),
            access_token_expiry: 15,
        });
        let token = codec.issue(42).unwrap();
        assert!(other.decode(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = test_codec();
        // 过期时间早于当前时间且超出默认容差
        let token = codec
            .issue_with_expiry(42, chrono::Duration::minutes(-5))
            .unwrap();
        assert!(codec.decode(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let codec = test_codec();
        assert!(codec.decode("not-a-jwt").is_err());
    }
}
