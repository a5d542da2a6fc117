use serde::{Deserialize, Serialize};

/// JSON body returned on every invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimestampBody {
    pub timestamp: u64,
}

impl TimestampBody {
    pub fn encode(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Status code reported in the proxy response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// 200 OK.
    #[default]
    Standard,
    /// The literal 50 the function has always returned. Not a valid HTTP
    /// status; only for callers that compare responses byte for byte.
    Legacy,
}

impl StatusPolicy {
    pub const STANDARD_CODE: i64 = 200;
    pub const LEGACY_CODE: i64 = 50;

    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy { Self::Legacy } else { Self::Standard }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Standard => Self::STANDARD_CODE,
            Self::Legacy => Self::LEGACY_CODE,
        }
    }
}
