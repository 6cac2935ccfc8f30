use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::layout::{scroll_to_top, PageHero};
use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="testimonials-page">
            <PageHero
                title="Student Stories"
                subtitle="Hear from students who are now studying around the world"
            />
            <section class="content-section">
                <div class="card-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <figure class="card testimonial-card">
                            <blockquote>{format!("\u{201c}{}\u{201d}", t.quote)}</blockquote>
                            <figcaption>
                                <strong>{t.name}</strong>
                                <span>{format!("{}, {}", t.programme, t.destination)}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </section>
        </div>
    }
}
