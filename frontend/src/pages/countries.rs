use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::components::layout::{scroll_to_top, PageHero};
use crate::consultation::contact_form::ContactForm;
use crate::content::{country_by_slug, COUNTRIES};
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Countries)]
pub fn countries() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="countries-page">
            <PageHero
                title="Study Destinations"
                subtitle="Five destinations, each with its own strengths. Find the one that fits your goals and budget."
            />
            <section class="content-section">
                <div class="card-grid wide">
                    { for COUNTRIES.iter().map(|country| html! {
                        <div class="card country-card">
                            <span class="card-flag">{country.flag}</span>
                            <h3>{country.name}</h3>
                            <p class="card-tagline">{country.tagline}</p>
                            <p>{country.summary}</p>
                            <Link<Route> to={Route::Country { slug: country.slug.to_string() }} classes="text-link">
                                {format!("Study in {} →", country.name)}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountryDetailProps {
    pub slug: String,
}

#[function_component(CountryDetail)]
pub fn country_detail(props: &CountryDetailProps) -> Html {
    // The router keeps this component alive between country pages.
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        props.slug.clone(),
    );

    let Some(country) = country_by_slug(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="country-page">
            <section class="page-hero">
                <span class="hero-flag">{country.flag}</span>
                <h1>{format!("Study in {}", country.name)}</h1>
                <p>{country.tagline}</p>
            </section>

            <section class="content-section narrow">
                <p class="lead">{country.summary}</p>
                <h2>{"Why students choose "}{country.name}</h2>
                <ul class="check-list">
                    { for country.highlights.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            </section>

            <section class="content-section alt">
                <div class="facts-grid">
                    <div class="fact"><h4>{"Intakes"}</h4><p>{country.intakes}</p></div>
                    <div class="fact"><h4>{"Tuition"}</h4><p>{country.tuition}</p></div>
                    <div class="fact"><h4>{"Living costs"}</h4><p>{country.living_costs}</p></div>
                    <div class="fact"><h4>{"Work while studying"}</h4><p>{country.work_rights}</p></div>
                </div>
            </section>

            <section class="content-section narrow">
                <h2>{"Popular courses"}</h2>
                <div class="tag-list">
                    { for country.popular_courses.iter().map(|course| html! { <span class="tag">{*course}</span> }) }
                </div>
            </section>

            <section class="content-section narrow">
                <h2>{format!("Enquire about {}", country.name)}</h2>
                <ContactForm destination={country.destination()} />
            </section>
        </div>
    }
}
