use widget_runtime::{StepStatus, StepTransition};

use super::*;

#[component]
/// Root container for a step wizard.
pub fn StepList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] horizontal: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-step-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="step-list"
            data-ui-orientation=move || if horizontal.get() { "horizontal" } else { "vertical" }
        >
            {children()}
        </section>
    }
}

#[component]
/// Individual step block with a clickable header.
pub fn StepView(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(into)] status: MaybeSignal<StepStatus>,
    #[prop(optional, into)] transition: MaybeSignal<Option<StepTransition>>,
    #[prop(optional)] on_header_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-step", layout_class)
            data-ui-primitive="true"
            data-ui-kind="step"
            data-ui-state=move || status.get().token()
            data-ui-transition=move || transition.get().map(StepTransition::token)
        >
            <button
                data-ui-slot="header"
                on:click=move |ev| {
                    if let Some(on_header_click) = on_header_click.as_ref() {
                        on_header_click.call(ev);
                    }
                }
            >
                <span data-ui-slot="badge">{move || status.get().token()}</span>
                <span data-ui-slot="title">{move || label.get()}</span>
            </button>
            <div data-ui-slot="body">{children()}</div>
        </section>
    }
}

#[component]
/// Shared action row for wizard navigation buttons.
pub fn StepActions(
    #[prop(default = LayoutJustify::Between)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-step-actions", layout_class)
            data-ui-primitive="true"
            data-ui-kind="step-actions"
            data-ui-justify=justify.token()
        >
            {children()}
        </div>
    }
}
