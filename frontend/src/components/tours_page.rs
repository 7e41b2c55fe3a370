use crate::auth::{logout, use_api, use_auth};
use crate::components::icons::{LogOut, Plus};
use crate::components::tours_grid::ToursGrid;
use crate::components::upload_modal::UploadModal;
use crate::web::WebFile;
use crate::web::router::use_router;
use leptos::prelude::*;
use vtours::{AppShell, Tour};

#[component]
pub fn ToursPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = use_api();

    let shell = RwSignal::new_local(AppShell::<WebFile>::new(api.config()));
    let refresh = Signal::derive(move || shell.with(|s| s.refresh_trigger()));
    let on_edit = Callback::new(move |tour: Tour| shell.update(|s| s.open_edit(tour)));

    let logout_pending = move || auth.gate.with(|g| g.is_logout_pending());
    let logout_error = move || auth.gate.with(|g| g.error().map(str::to_string));
    let on_logout = move |_| logout(auth, router, api.clone());

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow sticky top-0 z-40 px-4 md:px-8">
                <div class="flex-1 gap-3">
                    <div class="w-8 h-8 rounded-lg bg-primary text-primary-content flex items-center justify-center font-bold">
                        "VT"
                    </div>
                    <span class="text-lg font-semibold">"Virtual Tours Manager"</span>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-primary gap-2" on:click=move |_| shell.update(|s| s.open_upload())>
                        <Plus attr:class="h-4 w-4" /> "Upload Tour"
                    </button>
                    <button on:click=on_logout disabled=logout_pending class="btn btn-outline btn-error gap-2">
                        <LogOut attr:class="h-4 w-4" /> "Logout"
                    </button>
                </div>
            </div>

            <main class="max-w-7xl mx-auto px-4 md:px-8 py-10">
                {move || logout_error().map(|msg| view! {
                    <div role="alert" class="alert alert-error mb-6">
                        <span>{msg}</span>
                        <button class="btn btn-sm btn-ghost" on:click=move |_| auth.gate.update(|g| g.dismiss_error())>
                            "Dismiss"
                        </button>
                    </div>
                })}

                <div class="mb-8">
                    <h2 class="text-2xl font-bold">"Gallery"</h2>
                    <p class="text-base-content/70 mt-1">"Manage and view your virtual tour collection"</p>
                </div>

                <ToursGrid refresh=refresh on_edit=on_edit />
            </main>

            <UploadModal shell=shell />
        </div>
    }
}
