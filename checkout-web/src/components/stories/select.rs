use crate::components::daisy_ui::{Select, SelectOption};
use yew::prelude::*;

const USERS: [&str; 5] = [
    "Durward Reynolds",
    "Kenton Towne",
    "Therese Wunsch",
    "Benedict Kessler",
    "Katelyn Rohan",
];

const COUNTRIES: [(&str, &str); 5] = [
    ("Polska", "🇵🇱"),
    ("Niemcy", "🇩🇪"),
    ("USA", "🇺🇸"),
    ("Francja", "🇫🇷"),
    ("Bangladesz", "🇧🇩"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectStory {
    Basic,
    Disabled,
    Countries,
}

impl SelectStory {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Disabled, Self::Countries];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Disabled => "Disabled",
            Self::Countries => "Countries",
        }
    }

    #[must_use]
    pub fn options(self) -> Vec<SelectOption> {
        match self {
            Self::Basic | Self::Disabled => USERS
                .iter()
                .map(|name| SelectOption::new(*name, *name))
                .collect(),
            Self::Countries => COUNTRIES
                .iter()
                .map(|(name, flag)| {
                    SelectOption::new(*name, *name)
                        .with_icon(html! { <span class="text-lg" aria-hidden="true">{ *flag }</span> })
                })
                .collect(),
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Basic | Self::Disabled => Some("Select option"),
            Self::Countries => None,
        }
    }

    #[must_use]
    pub const fn disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct SelectStoryFrameProps {
    pub story: SelectStory,
}

/// One story in a fixed-width frame, keeping its own selection.
#[function_component(SelectStoryFrame)]
pub fn select_story_frame(props: &SelectStoryFrameProps) -> Html {
    let story = props.story;
    let selected = use_state(|| None::<AttrValue>);
    let on_change = {
        let selected = selected.clone();
        Callback::from(move |value: AttrValue| selected.set(Some(value)))
    };
    html! {
        <section class="w-[440px]" data-story={story.name()}>
            <h3 class="font-semibold">{ story.name() }</h3>
            <Select
                id={AttrValue::from(format!("select-{}", story.name().to_lowercase()))}
                options={story.options()}
                value={(*selected).clone()}
                placeholder={story.placeholder().map(AttrValue::from)}
                disabled={story.disabled()}
                on_change={on_change}
            />
        </section>
    }
}

#[function_component(SelectStories)]
pub fn select_stories() -> Html {
    html! {
        <div class="flex flex-col gap-6">
            { for SelectStory::ALL.iter().map(|story| html! { <SelectStoryFrame story={*story} /> }) }
        </div>
    }
}
