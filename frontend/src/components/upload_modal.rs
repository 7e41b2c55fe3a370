//! 上传/编辑导览的模态框
//!
//! 所有状态都在外壳的 `UploadForm` 里，这里只负责渲染和转发事件。

mod file_field;

use crate::auth::{check_expired, use_api, use_auth};
use crate::web::WebFile;
use crate::web::router::use_router;
use file_field::FileField;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use vtours::request::UploadFile;
use vtours::{AppShell, ProgressCallback, UploadProgress};

pub type ShellSignal = RwSignal<AppShell<WebFile>, LocalStorage>;

#[component]
pub fn UploadModal(shell: ShellSignal) -> impl IntoView {
    let is_open = move || shell.with(|s| s.is_form_open());

    view! {
        <Show when=is_open>
            <TourForm shell=shell />
        </Show>
    }
}

#[component]
fn TourForm(shell: ShellSignal) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = use_api();

    let submitting = Signal::derive(move || shell.with(|s| s.form().is_submitting()));
    let is_edit = move || shell.with(|s| s.form().is_edit());
    let title = move || shell.with(|s| s.form().title());
    let error_msg = move || shell.with(|s| s.form().error().map(str::to_string));
    let progress = move || shell.with(|s| s.form().progress());
    let preview = move || shell.with(|s| s.form().preview_name());
    let archive_name = Signal::derive(move || {
        shell.with(|s| s.form().draft().archive.as_ref().map(|f| f.file_name()))
    });
    let cover_name = Signal::derive(move || {
        shell.with(|s| s.form().draft().cover.as_ref().map(|f| f.file_name()))
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(plan) = shell.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let ticket = plan.ticket;
        let on_progress: ProgressCallback = Rc::new(move |p: UploadProgress| {
            shell.update(|s| s.record_progress(ticket, p));
        });
        let api = api.clone();
        spawn_local(async move {
            let result = plan.submission.send(&api, Some(on_progress)).await;
            if let Err(e) = &result {
                check_expired(auth, router, e);
            }
            shell.update(|s| {
                s.finish_submit(ticket, &result);
            });
        });
    };

    view! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    {move || error_msg().map(|msg| view! {
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{msg}</span>
                        </div>
                    })}

                    <div class="form-control">
                        <label for="tour_id" class="label">
                            <span class="label-text">"Tour ID"</span>
                        </label>
                        <input
                            id="tour_id"
                            type="text"
                            placeholder="kinsky-palace-2024"
                            disabled=move || submitting.get()
                            on:input=move |ev| shell.update(|s| s.form_mut().set_tour_id(event_target_value(&ev)))
                            prop:value=move || shell.with(|s| s.form().draft().tour_id.clone())
                            class="input input-bordered w-full font-mono"
                        />
                        <label class="label">
                            <span class="label-text-alt text-base-content/50">
                                {move || preview().map(|name| format!("Displayed as \"{}\"", name)).unwrap_or_default()}
                            </span>
                        </label>
                    </div>

                    <FileField
                        id="tour_zip"
                        label="Tour archive (.zip)"
                        accept=".zip,application/zip"
                        hint=if is_edit() { "Leave empty to keep the current tour files" } else { "" }
                        selected=archive_name
                        disabled=submitting
                        on_change={move |file: Option<WebFile>| shell.update(|s| s.form_mut().set_archive(file))}
                    />
                    <FileField
                        id="cover_photo"
                        label="Cover photo"
                        accept="image/*"
                        hint=if is_edit() { "Leave empty to keep the current cover" } else { "" }
                        selected=cover_name
                        disabled=submitting
                        on_change={move |file: Option<WebFile>| shell.update(|s| s.form_mut().set_cover(file))}
                    />

                    <Show when=move || submitting.get()>
                        <div class="space-y-1">
                            <progress class="progress progress-primary w-full" max="100" value=move || progress().to_string()></progress>
                            <p class="text-xs text-right opacity-60">{move || format!("{}%", progress())}</p>
                        </div>
                    </Show>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| shell.update(|s| s.close_form())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || submitting.get() class="btn btn-primary">
                            {move || if submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Uploading..." }.into_any()
                            } else if is_edit() {
                                "Save changes".into_any()
                            } else {
                                "Upload".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <div class="modal-backdrop"></div>
        </div>
    }
}
