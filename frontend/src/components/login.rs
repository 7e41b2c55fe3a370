use crate::auth::{complete_login, use_api, use_auth};
use crate::components::icons::ShieldCheck;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vtours::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = use_api();

    let form = RwSignal::new(LoginForm::new());
    let is_submitting = move || form.with(|f| f.is_submitting());
    let error_msg = move || form.with(|f| f.error().map(str::to_string));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let result = api.login(&credentials).await;
            let succeeded = form
                .try_update(|f| f.finish_submit(&result))
                .unwrap_or(false);
            if succeeded {
                complete_login(auth, router);
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Virtual Tours Manager"</h1>
                        <p class="text-base-content/70">"Sign in to manage your tours"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || error_msg().map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.username.clone())
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.password.clone())
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
