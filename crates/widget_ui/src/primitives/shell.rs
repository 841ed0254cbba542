use widget_runtime::PanelSide;

use super::*;

#[component]
/// Root application shell primitive hosting the bar, panels, content, and
/// footer regions.
pub fn PageShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-page-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-shell"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared top navigation bar primitive.
pub fn NavigationBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutPadding::Sm)] padding: LayoutPadding,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-navigation-bar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="navigation-bar"
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
            data-ui-collapsed=move || bool_token(collapsed.get())
            aria-label=aria_label
        >
            <span data-ui-slot="title">{move || title.get()}</span>
            {children()}
        </nav>
    }
}

#[component]
/// Shared menu toggle button shown in the navigation bar.
pub fn NavMenuButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] hidden: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=merge_layout_class("ui-nav-menu-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="nav-menu-button"
            data-ui-hidden=move || bool_token(hidden.get())
            aria-label="Toggle navigation panel"
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

#[component]
/// Shared sliding side panel.
pub fn SidePanel(
    side: PanelSide,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] visible: MaybeSignal<bool>,
    #[prop(optional, into)] fixed: MaybeSignal<bool>,
    #[prop(optional, into)] hidden: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class=merge_layout_class("ui-side-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="side-panel"
            data-ui-side=side.token()
            data-ui-visible=move || bool_token(visible.get())
            data-ui-fixed=move || bool_token(fixed.get())
            data-ui-hidden=move || bool_token(hidden.get())
        >
            {children()}
        </aside>
    }
}

#[component]
/// Shared main content region.
pub fn ContentRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("ui-content-region", layout_class)
            data-ui-primitive="true"
            data-ui-kind="content-region"
            data-ui-padding=padding.token()
        >
            {children()}
        </main>
    }
}

#[component]
/// Shared shell footer.
pub fn FooterBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] pinned: MaybeSignal<bool>,
    #[prop(default = MaybeSignal::Static(true), into)] visible: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-footer-bar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="footer-bar"
            data-ui-pinned=move || bool_token(pinned.get())
            data-ui-visible=move || bool_token(visible.get())
        >
            {children()}
        </footer>
    }
}

#[component]
/// Click-to-dismiss overlay shown behind an open unfixed panel.
pub fn ShellOverlay(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] visible: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-shell-overlay", layout_class)
            data-ui-primitive="true"
            data-ui-kind="shell-overlay"
            data-ui-visible=move || bool_token(visible.get())
            aria-hidden="true"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        ></div>
    }
}
