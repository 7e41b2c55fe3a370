//! 认证模块
//!
//! 会话状态保存在 `AuthGate` 中，通过 Context 共享。
//! 所有导航都交给路由服务执行，这里只产出重定向指令。

use crate::web::WebHttpClient;
use crate::web::router::RouterService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vtours::{ApiError, AuthGate, SessionStatus, ToursApi};

pub type Api = ToursApi<WebHttpClient>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub gate: RwSignal<AuthGate>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            gate: RwSignal::new(AuthGate::new()),
        }
    }

    /// 会话状态信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<SessionStatus> {
        let gate = self.gate;
        Signal::derive(move || gate.with(|g| g.status()))
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("ToursApi should be provided")
}

/// 页面加载时探测会话
pub fn probe_session(ctx: AuthContext, router: RouterService, api: Api) {
    spawn_local(async move {
        let result = api.check_session().await;
        if let Ok(Some(user)) = &result {
            log::info!("signed in as {}", user.username);
        }
        let on_login = router.is_on_login();
        if let Some(redirect) = ctx.gate.try_update(|g| g.probe_finished(&result, on_login)) {
            router.apply(redirect);
        }
    });
}

/// 登录请求成功后调用
pub fn complete_login(ctx: AuthContext, router: RouterService) {
    if let Some(redirect) = ctx.gate.try_update(|g| g.login_succeeded()) {
        router.apply(redirect);
    }
}

/// 注销；失败时保持登录状态并展示错误
pub fn logout(ctx: AuthContext, router: RouterService, api: Api) {
    let started = ctx.gate.try_update(|g| g.begin_logout()).unwrap_or(false);
    if !started {
        return;
    }
    spawn_local(async move {
        let result = api.logout().await;
        if let Some(redirect) = ctx.gate.try_update(|g| g.logout_finished(result)) {
            router.apply(redirect);
        }
    });
}

/// 受保护请求返回 401 时回到登录页
pub fn check_expired(ctx: AuthContext, router: RouterService, err: &ApiError) {
    if err.status() == Some(401) {
        log::warn!("session expired");
        if let Some(redirect) = ctx.gate.try_update(|g| g.session_expired()) {
            router.apply(redirect);
        }
    }
}
