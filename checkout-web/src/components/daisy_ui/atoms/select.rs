use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
    pub disabled: bool,
    /// Shown beside the control while this option is selected.
    pub icon: Option<f::Html>,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<f::AttrValue>, label: impl Into<f::AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: f::Html) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let class = f::class_list(&["select", "select-bordered"], &props.class);
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<f::HtmlSelectElement>() {
                    cb.emit(sel.value().into());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    let selected_icon = props
        .value
        .as_ref()
        .and_then(|value| props.options.iter().find(|opt| &opt.value == value))
        .and_then(|opt| opt.icon.clone())
        .unwrap_or_default();
    let placeholder = props
        .placeholder
        .as_ref()
        .map(|text| {
            f::html! {
                <option value="" disabled={true} selected={props.value.is_none()}>{ text.clone() }</option>
            }
        })
        .unwrap_or_default();
    f::html! {
        <label class={class}>
            { props.label.as_ref().map(|text| f::html! { <span class="label">{ text.clone() }</span> }).unwrap_or_default() }
            { selected_icon }
            <select
                id={props.id.clone()}
                value={props.value.clone().unwrap_or_default()}
                disabled={props.disabled}
                onchange={on_change}
            >
                { placeholder }
                { for props.options.iter().map(|opt| {
                    let selected = props.value.as_ref() == Some(&opt.value);
                    f::html! {
                        <option value={opt.value.clone()} disabled={opt.disabled} selected={selected}>{ opt.label.clone() }</option>
                    }
                })}
            </select>
        </label>
    }
}
