use crate::router::Route;
use yew::prelude::*;
use yew_router::Routable;

/// Shown when no route matches.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let home = Route::Desktop.to_path();
    html! {
        <main id="main" class="not-found">
            <h1>{ "Page not found" }</h1>
            <p>{ "That folder does not exist on this desktop." }</p>
            <a href={home}>{ "Back to the desktop" }</a>
        </main>
    }
}
