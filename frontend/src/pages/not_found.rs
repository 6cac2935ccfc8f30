use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist or has moved."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">{"Back to home"}</Link<Route>>
        </div>
    }
}
