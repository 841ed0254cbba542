use super::*;

#[component]
/// Shared navigation tree surface.
pub fn TreeSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-tree", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tree"
            role="tree"
            aria-label=aria_label
        >
            {children()}
        </ul>
    }
}

#[component]
/// Header row above a navigation tree, hosting the title and filter box.
pub fn TreeHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-tree-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tree-header"
        >
            <span data-ui-slot="title">{move || title.get()}</span>
            {children()}
        </header>
    }
}

#[component]
/// Shared tree item row.
pub fn TreeItemView(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] expanded: MaybeSignal<bool>,
    #[prop(optional, into)] filtered_out: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class=merge_layout_class("ui-tree-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tree-item"
            data-ui-active=move || bool_token(active.get())
            data-ui-expanded=move || bool_token(expanded.get())
            data-ui-filtered-out=move || bool_token(filtered_out.get())
            role="treeitem"
            aria-selected=move || bool_token(active.get())
            aria-expanded=move || bool_token(expanded.get())
        >
            <button
                data-ui-slot="label"
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {move || label.get()}
            </button>
            <ul data-ui-slot="children" role="group">
                {children()}
            </ul>
        </li>
    }
}

#[component]
/// Non-interactive divider between tree items.
pub fn TreeSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <li
            class=merge_layout_class("ui-tree-separator", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tree-separator"
            role="separator"
            aria-hidden="true"
        ></li>
    }
}
