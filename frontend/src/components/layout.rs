use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::COUNTRIES;
use crate::Route;

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <h1>{&props.title}</h1>
            <p>{&props.subtitle}</p>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h4>{"Horizon Scholars"}</h4>
                    <p>{"International education consultants helping students study in Singapore, Dubai, Mauritius, the UK and Europe."}</p>
                </div>
                <div>
                    <h4>{"Destinations"}</h4>
                    <ul>
                        { for COUNTRIES.iter().map(|country| html! {
                            <li>
                                <Link<Route> to={Route::Country { slug: country.slug.to_string() }}>
                                    {country.name}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Testimonials}>{"Testimonials"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">{format!("© {} Horizon Scholars. All rights reserved.", year)}</p>
        </footer>
    }
}
