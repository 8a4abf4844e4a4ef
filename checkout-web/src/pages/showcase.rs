use crate::components::stories::SelectStories;
use yew::prelude::*;

/// Component stories served at `/stories`.
#[function_component(Showcase)]
pub fn showcase() -> Html {
    html! {
        <main class="showcase flex flex-col gap-8 p-8">
            <h1 class="text-2xl">{ "Select" }</h1>
            <SelectStories />
        </main>
    }
}
