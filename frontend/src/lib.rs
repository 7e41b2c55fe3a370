//! 虚拟导览管理前端
//!
//! 采用 Context-Driven 的架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（History API）
//! - `web::http`: XHR 传输层
//! - `auth`: 会话状态
//! - `components`: UI 组件层
//!
//! 业务状态机全部来自 `vtours`，组件只负责渲染和转发事件。

mod auth;
mod config;
mod components {
    mod icons;
    pub mod login;
    pub mod tours_grid;
    pub mod tours_page;
    pub mod upload_modal;
}

use crate::auth::{AuthContext, probe_session, use_api, use_auth};
use crate::components::login::LoginPage;
use crate::components::tours_page::ToursPage;

use leptos::prelude::*;
use vtours::ToursApi;

pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;

    pub use http::{WebFile, WebHttpClient};
}

use web::WebHttpClient;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Tours => view! { <ToursPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <a href="/" class="btn btn-ghost mt-6">"Back to tours"</a>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 会话探测完成前只显示加载动画
#[component]
fn SessionGate() -> impl IntoView {
    let auth = use_auth();
    probe_session(auth, use_router(), use_api());

    let checking = move || auth.gate.with(|g| g.is_checking());

    view! {
        <Show
            when=move || !checking()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <RouterOutlet matcher=route_matcher />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. API 客户端
    provide_context(ToursApi::new(WebHttpClient, config::client_config()));

    // 3. 会话状态注入路由服务
    let session = auth_ctx.session_signal();

    view! {
        <Router session=session>
            <SessionGate />
        </Router>
    }
}
