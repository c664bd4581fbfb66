use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    /// Makes the whole card a click target.
    #[prop_or_default]
    pub onclick: Option<f::Callback<f::MouseEvent>>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let mut class = f::class_list(&["card", "bg-base-100", "shadow-xl"], &props.class);
    if props.onclick.is_some() {
        class.push("cursor-pointer");
    }
    f::html! {
        <article {class} onclick={props.onclick.clone()}>
            <div class="card-body">
                if let Some(title) = props.title.clone() {
                    <h3 class="card-title justify-center text-2xl">{ title }</h3>
                }
                { for props.children.iter() }
            </div>
        </article>
    }
}
