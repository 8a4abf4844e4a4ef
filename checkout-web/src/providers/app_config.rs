use checkout_core::AppEnv;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppConfigProviderProps {
    pub env: AppEnv,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppConfigProvider)]
pub fn app_config_provider(props: &AppConfigProviderProps) -> Html {
    html! {
        <ContextProvider<AppEnv> context={props.env.clone()}>
            { for props.children.iter() }
        </ContextProvider<AppEnv>>
    }
}

/// Environment from the nearest provider, or the build-time environment.
#[hook]
pub fn use_app_config() -> AppEnv {
    use_context::<AppEnv>().unwrap_or_else(AppEnv::from_build_env)
}
