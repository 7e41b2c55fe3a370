//! 编译期配置
//!
//! 构建时通过 `VTOURS_API_BASE` 指定 API 根路径，
//! 未设置时使用同源的 `/api/v1`。

use vtours::ClientConfig;

const API_BASE: Option<&str> = option_env!("VTOURS_API_BASE");

pub fn client_config() -> ClientConfig {
    ClientConfig::from_api_base(API_BASE)
}
