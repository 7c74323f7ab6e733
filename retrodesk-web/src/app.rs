#[cfg(target_arch = "wasm32")]
use crate::router::{Route, switch};
#[cfg(target_arch = "wasm32")]
use crate::site::SiteProvider;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <SiteProvider>
            <BrowserRouter basename={router_base}>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SiteProvider>
    }
}
