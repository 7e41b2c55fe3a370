//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。

use std::fmt::Display;
use vtours::Redirect;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 导览列表 (默认视图)
    #[default]
    Tours,
    Login,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/tours" => Self::Tours,
            "/login" => Self::Login,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Tours => "/",
            Self::Login => "/login",
            Self::NotFound => "/404",
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Tours)
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Self::Login)
    }
}

/// 导航指令：目标路由以及是否替换当前历史记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub route: AppRoute,
    pub replace: bool,
}

/// 把认证门禁的重定向指令映射为具体导航
pub fn resolve_redirect(redirect: Redirect) -> Option<Navigation> {
    match redirect {
        Redirect::Stay => None,
        Redirect::DefaultView => Some(Navigation {
            route: AppRoute::Tours,
            replace: true,
        }),
        Redirect::Login { replace } => Some(Navigation {
            route: AppRoute::Login,
            replace,
        }),
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Tours);
        assert_eq!(AppRoute::from_path("/tours/"), AppRoute::Tours);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip_for_navigable_routes() {
        for route in [AppRoute::Tours, AppRoute::Login] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn redirects_map_to_history_operations() {
        assert_eq!(resolve_redirect(Redirect::Stay), None);
        assert_eq!(
            resolve_redirect(Redirect::DefaultView),
            Some(Navigation {
                route: AppRoute::Tours,
                replace: true
            })
        );
        assert_eq!(
            resolve_redirect(Redirect::Login { replace: false }),
            Some(Navigation {
                route: AppRoute::Login,
                replace: false
            })
        );
    }
}
