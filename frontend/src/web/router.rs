//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API：
//! 所有对 window.history 的操作都集中在此模块。

use leptos::prelude::*;
use vtours::{Redirect, SessionStatus};
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, Navigation, resolve_redirect};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        log::warn!("[Router] history update failed: {:?}", e);
    }
}

/// 守卫：会话探测完成前不拦截，由认证门禁决定去向
fn guard(target: AppRoute, status: SessionStatus) -> AppRoute {
    match status {
        SessionStatus::Unauthenticated if target.requires_auth() => AppRoute::Login,
        SessionStatus::Authenticated if target.is_login() => AppRoute::Tours,
        _ => target,
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；会话状态由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<SessionStatus>,
}

impl RouterService {
    fn new(session: Signal<SessionStatus>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn is_on_login(&self) -> bool {
        self.current_route.get_untracked().is_login()
    }

    /// 导航到指定路由（经过守卫）
    pub fn navigate(&self, nav: Navigation) {
        let route = guard(nav.route, self.session.get_untracked());
        if route != nav.route {
            log::info!("[Router] {} redirected to {}", nav.route, route);
        }
        write_history(route.to_path(), nav.replace);
        self.set_route.set(route);
    }

    /// 执行认证门禁给出的重定向指令
    pub fn apply(&self, redirect: Redirect) {
        if let Some(nav) = resolve_redirect(redirect) {
            self.navigate(nav);
        }
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let route = guard(target, session.get_untracked());
            if route != target {
                write_history(route.to_path(), true);
            }
            set_route.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

fn provide_router(session: Signal<SessionStatus>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 会话状态信号
    session: Signal<SessionStatus>,
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
