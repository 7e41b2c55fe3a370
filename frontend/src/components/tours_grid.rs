//! 导览网格
//!
//! 刷新计数器变化时重新拉取；删除成功后也会重新拉取，
//! 列表永远只展示服务端最近一次返回的内容。

use crate::auth::{check_expired, use_api, use_auth};
use crate::components::icons::{ExternalLink, ImageIcon, Pencil, Trash2};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vtours::{DeleteOutcome, ListView, RefreshTrigger, Tour, TourList};

#[component]
pub fn ToursGrid(
    /// 外壳持有的刷新计数器
    #[prop(into)]
    refresh: Signal<RefreshTrigger>,
    /// 点击"编辑"时把完整记录交给外壳
    #[prop(into)]
    on_edit: Callback<Tour>,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = use_api();
    let list = RwSignal::new(TourList::new());

    let fetch = {
        let api = api.clone();
        move |trigger: Option<RefreshTrigger>| {
            let ticket = match trigger {
                Some(trigger) => list.try_update(|l| l.begin_fetch(trigger)),
                None => list.try_update(|l| l.begin_refetch()),
            };
            let Some(ticket) = ticket else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.list_tours().await;
                if let Err(e) = &result {
                    check_expired(auth, router, e);
                }
                list.update(|l| {
                    l.finish_fetch(ticket, result);
                });
            });
        }
    };

    Effect::new({
        let fetch = fetch.clone();
        move |_| {
            let trigger = refresh.get();
            if list.with_untracked(|l| l.needs_fetch(trigger)) {
                fetch(Some(trigger));
            }
        }
    });

    let handle_delete = move |id: String| {
        let confirm = |prompt: &str| window().confirm_with_message(prompt).unwrap_or(false);
        let Some(id) = list.try_update(|l| l.request_delete(&id, confirm)).flatten() else {
            return;
        };

        let api = api.clone();
        let fetch = fetch.clone();
        spawn_local(async move {
            let result = api.delete_tour(&id).await;
            if let Err(e) = &result {
                check_expired(auth, router, e);
            }
            match list.try_update(|l| l.finish_delete(&id, result)) {
                Some(DeleteOutcome::Refetch) => fetch(None),
                Some(DeleteOutcome::Failed(message)) => {
                    let _ = window().alert_with_message(&message);
                }
                None => {}
            }
        });
    };

    let error_msg = move || list.with(|l| l.error().map(str::to_string));

    view! {
        {move || error_msg().map(|msg| view! {
            <div role="alert" class="alert alert-error mb-6">
                <span>{msg}</span>
                <button class="btn btn-sm btn-ghost" on:click=move |_| list.update(|l| l.dismiss_error())>
                    "Dismiss"
                </button>
            </div>
        })}

        {move || list.with(|l| match l.view() {
            ListView::Loading => view! {
                <div class="flex justify-center py-20">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }.into_any(),
            ListView::Empty => view! {
                <div class="text-center py-20 text-base-content/50 border border-dashed border-base-300 rounded-box">
                    <ImageIcon attr:class="h-10 w-10 mx-auto mb-4 opacity-50" />
                    <p>"No tours yet. Upload one to get started."</p>
                </div>
            }.into_any(),
            ListView::Grid(_) => ().into_any(),
        })}

        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            <For
                each=move || list.with(|l| l.tours().to_vec())
                key=|tour| tour.clone()
                children=move |tour| {
                    let id = tour.id.clone();
                    let deleting = {
                        let id = id.clone();
                        move || list.with(|l| l.is_deleting(&id))
                    };
                    let deleting_attr = deleting.clone();
                    let edit_target = tour.clone();
                    let handle_delete = handle_delete.clone();
                    view! {
                        <div class="card bg-base-100 shadow-xl overflow-hidden">
                            <figure class="aspect-video bg-base-300">
                                {match tour.cover_url.clone() {
                                    Some(src) => view! {
                                        <img src=src alt=tour.name.clone() class="w-full h-full object-cover" />
                                    }.into_any(),
                                    None => view! {
                                        <ImageIcon attr:class="h-10 w-10 opacity-30" />
                                    }.into_any(),
                                }}
                            </figure>
                            <div class="card-body p-4">
                                <h3 class="card-title text-base">{tour.name.clone()}</h3>
                                <p class="font-mono text-xs opacity-50">{tour.id.clone()}</p>
                                <div class="card-actions justify-end mt-2">
                                    <a href=tour.url.clone() target="_blank" rel="noopener noreferrer" class="btn btn-sm btn-ghost gap-1">
                                        <ExternalLink attr:class="h-4 w-4" /> "Open"
                                    </a>
                                    <button class="btn btn-sm btn-ghost gap-1" on:click=move |_| on_edit.run(edit_target.clone())>
                                        <Pencil attr:class="h-4 w-4" /> "Edit"
                                    </button>
                                    <button
                                        class="btn btn-sm btn-ghost text-error gap-1"
                                        disabled=deleting_attr
                                        on:click=move |_| handle_delete(id.clone())
                                    >
                                        {move || if deleting() {
                                            view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                        } else {
                                            view! { <Trash2 attr:class="h-4 w-4" /> }.into_any()
                                        }}
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
