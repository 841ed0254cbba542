use widget_runtime::ChipTone;

use super::*;

#[component]
/// Shared single-selection chip group container.
pub fn ChipGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = MaybeSignal::Static(true), into)] enabled: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-chip-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="chip-group"
            data-ui-gap=gap.token()
            data-ui-enabled=move || bool_token(enabled.get())
            role="listbox"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared selectable chip.
pub fn Chip(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(default = MaybeSignal::Static(true), into)] enabled: MaybeSignal<bool>,
    #[prop(optional, into)] tone: MaybeSignal<ChipTone>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=merge_layout_class("ui-chip", layout_class)
            data-ui-primitive="true"
            data-ui-kind="chip"
            data-ui-selected=move || bool_token(selected.get())
            data-ui-tone=move || tone.get().token()
            role="option"
            aria-selected=move || bool_token(selected.get())
            disabled=move || !enabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
