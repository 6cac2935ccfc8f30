use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::components::layout::scroll_to_top;
use crate::content::{COUNTRIES, SERVICES, TESTIMONIALS};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero-content">
                    <h1>{"Your future, studied abroad"}</h1>
                    <p class="hero-subtitle">
                        {"Personal guidance from choosing a course to landing at your new campus. Singapore, Dubai, Mauritius, the UK and Europe."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="primary-button">
                            {"Book a Free Consultation"}
                        </Link<Route>>
                        <Link<Route> to={Route::Countries} classes="secondary-button">
                            {"Explore Destinations"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="stats-strip">
                <div class="stat"><span class="stat-value">{"2,500+"}</span><span>{"Students placed"}</span></div>
                <div class="stat"><span class="stat-value">{"120+"}</span><span>{"Partner universities"}</span></div>
                <div class="stat"><span class="stat-value">{"98%"}</span><span>{"Visa success rate"}</span></div>
                <div class="stat"><span class="stat-value">{"5"}</span><span>{"Study destinations"}</span></div>
            </section>

            <section class="content-section">
                <h2>{"Where would you like to study?"}</h2>
                <div class="card-grid">
                    { for COUNTRIES.iter().map(|country| html! {
                        <Link<Route> to={Route::Country { slug: country.slug.to_string() }} classes="card country-card">
                            <span class="card-flag">{country.flag}</span>
                            <h3>{country.name}</h3>
                            <p>{country.tagline}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section class="content-section alt">
                <h2>{"How we help"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().take(3).map(|service| html! {
                        <div class="card">
                            <span class="card-icon">{service.icon}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="text-link">{"See all services →"}</Link<Route>>
            </section>

            if let Some(testimonial) = TESTIMONIALS.first() {
                <section class="content-section">
                    <blockquote class="featured-quote">
                        <p>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
                        <cite>{format!("{}, {} in {}", testimonial.name, testimonial.programme, testimonial.destination)}</cite>
                    </blockquote>
                    <Link<Route> to={Route::Testimonials} classes="text-link">{"Read more student stories →"}</Link<Route>>
                </section>
            }

            <section class="cta-banner">
                <h2>{"Not sure where to start?"}</h2>
                <p>{"Tell us about your goals and a counsellor will map out your options, free of charge."}</p>
                <Link<Route> to={Route::Contact} classes="primary-button">{"Talk to a Counsellor"}</Link<Route>>
            </section>
        </div>
    }
}
