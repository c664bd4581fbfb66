use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub title: f::AttrValue,
    #[prop_or_default]
    pub subtitle: Option<f::AttrValue>,
}

/// Centered page heading.
#[f::function_component(Hero)]
pub fn hero(props: &HeroProps) -> f::Html {
    f::html! {
        <header class="hero mb-12">
            <div class="hero-content text-center flex-col">
                <h1 class="text-5xl md:text-7xl font-bold text-primary mb-4">{ props.title.clone() }</h1>
                if let Some(subtitle) = props.subtitle.clone() {
                    <p class="text-xl md:text-2xl text-base-content/70 font-medium">{ subtitle }</p>
                }
            </div>
        </header>
    }
}
