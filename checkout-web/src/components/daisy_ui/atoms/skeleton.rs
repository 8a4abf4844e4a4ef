use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct SkeletonProps {
    #[prop_or_default]
    pub width: Option<f::AttrValue>,
    #[prop_or_default]
    pub height: Option<f::AttrValue>,
    #[prop_or_default]
    pub text: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Pulsing placeholder block shown while data is pending.
#[f::function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> f::Html {
    let mut class = f::class_list(&["skeleton"], &props.class);
    if props.text {
        class.push("skeleton-text");
    }
    let style = [("width", props.width.as_ref()), ("height", props.height.as_ref())]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{name}:{v};")))
        .collect::<String>();
    f::html! { <div class={class} style={style} aria-hidden="true"></div> }
}
