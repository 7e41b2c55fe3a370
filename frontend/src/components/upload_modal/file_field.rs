//! 文件选择字段
//!
//! 浏览器不允许通过代码设置文件输入框的值，
//! 因此表单每次打开都会重新挂载整个输入框。

use crate::web::WebFile;
use leptos::prelude::*;
use leptos::web_sys::HtmlInputElement;

/// 取出输入框中选中的第一个文件
fn selected_file(ev: &leptos::web_sys::Event) -> Option<WebFile> {
    event_target::<HtmlInputElement>(ev)
        .files()
        .and_then(|files| files.get(0))
        .map(WebFile)
}

#[component]
pub fn FileField(
    id: &'static str,
    label: &'static str,
    accept: &'static str,
    /// 编辑模式下留空表示保持原文件
    #[prop(optional)]
    hint: Option<&'static str>,
    /// 当前选中的文件名
    #[prop(into)]
    selected: Signal<Option<String>>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    on_change: Callback<Option<WebFile>, ()>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type="file"
                accept=accept
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(selected_file(&ev))
                class="file-input file-input-bordered w-full"
            />
            <label class="label">
                <span class="label-text-alt text-base-content/50">
                    {move || selected.get().or_else(|| hint.map(str::to_string)).unwrap_or_default()}
                </span>
            </label>
        </div>
    }
}
