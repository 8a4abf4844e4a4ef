use crate::api::ApiClient;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub client: ApiClient,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    html! {
        <ContextProvider<ApiClient> context={props.client.clone()}>
            { for props.children.iter() }
        </ContextProvider<ApiClient>>
    }
}

#[hook]
pub fn use_api_client() -> Option<ApiClient> {
    use_context::<ApiClient>()
}
