use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{ClassroomError, Result};

// 去掉了易混淆的 0/O、1/I
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 课程访问码（值对象）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccessCode(String);

impl AccessCode {
    pub const MIN_LENGTH: usize = 6;

    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.chars().count() < Self::MIN_LENGTH {
            return Err(ClassroomError::validation(format!(
                "Access code must be at least {} characters",
                Self::MIN_LENGTH
            )));
        }
        Ok(Self(value))
    }

    /// 随机生成访问码，长度不足时按最小长度生成
    pub fn generate(length: usize) -> Self {
        let length = length.max(Self::MIN_LENGTH);
        let mut rng = rand::rng();
        let code = (0..length)
            .map(|_| {
                let idx = rng.random_range(0..CODE_CHARSET.len());
                CODE_CHARSET[idx] as char
            })
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 与用户提供的访问码比较（区分大小写）
    pub fn matches(&self, provided: &str) -> bool {
        self.0 == provided
    }
}

impl<'de> Deserialize<'de> for AccessCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AccessCode::new(s).map_err(|e| serde::de::Error::custom(e.message().to_string()))
    }
}

impl std::fmt::Display for AccessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccessCode {
    type Err = ClassroomError;

    fn from_str(s: &str) -> Result<Self> {
        AccessCode::new(s)
    }
}
