use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::components::layout::{scroll_to_top, PageHero};
use crate::content::SERVICES;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="services-page">
            <PageHero
                title="Our Services"
                subtitle="End-to-end support, from your first question to your first lecture"
            />
            <section class="content-section">
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div class="card service-card">
                            <span class="card-icon">{service.icon}</span>
                            <span class="step-number">{format!("Step {}", i + 1)}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </section>
            <section class="cta-banner">
                <h2>{"All of this starts with one conversation"}</h2>
                <Link<Route> to={Route::Contact} classes="primary-button">{"Book a Free Consultation"}</Link<Route>>
            </section>
        </div>
    }
}
