use widget_runtime::DescriptionPlacement;

use super::*;

#[component]
/// Shared block heading with an optional, repositionable description.
///
/// The description slot renders before or after the heading following the
/// placement token; the CSS layers also receive it as
/// `data-ui-description-placement`.
pub fn BlockHeading(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] heading: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<Option<String>>,
    #[prop(optional, into)] placement: MaybeSignal<DescriptionPlacement>,
) -> impl IntoView {
    let before = {
        let description = description.clone();
        move || {
            (placement.get() == DescriptionPlacement::BeforeHeading)
                .then(|| description.get())
                .flatten()
        }
    };
    let after = {
        let description = description.clone();
        move || {
            (placement.get() == DescriptionPlacement::AfterHeading)
                .then(|| description.get())
                .flatten()
        }
    };
    view! {
        <header
            class=merge_layout_class("ui-block-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="block-heading"
            data-ui-description-placement=move || placement.get().token()
        >
            {move || before().map(|text| view! { <div data-ui-slot="description">{text}</div> })}
            <div data-ui-slot="heading">{move || heading.get()}</div>
            {move || after().map(|text| view! { <div data-ui-slot="description">{text}</div> })}
        </header>
    }
}
