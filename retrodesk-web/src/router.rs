use crate::pages::desktop::Desktop;
use crate::pages::not_found::NotFound;
use crate::pages::rider::Rider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Desktop,
    #[at("/rider")]
    Rider,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[allow(clippy::needless_pass_by_value)] // `Switch` hands routes over by value.
pub fn switch(route: Route) -> Html {
    log::debug!("routing to {}", route.to_path());
    match route {
        Route::Desktop => html! { <Desktop /> },
        Route::Rider => html! { <Rider /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Desktop));
        assert_eq!(Route::recognize("/rider"), Some(Route::Rider));
        assert_eq!(Route::recognize("/missing"), Some(Route::NotFound));
        assert_eq!(Route::Rider.to_path(), "/rider");
    }
}
