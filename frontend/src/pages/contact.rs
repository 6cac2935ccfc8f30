use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::layout::{scroll_to_top, PageHero};
use crate::consultation::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="contact-page">
            <PageHero
                title="Book a Free Consultation"
                subtitle="Tell us a little about yourself and a counsellor will be in touch within 24 hours"
            />
            <section class="contact-layout">
                <ContactForm />
                <aside class="contact-details">
                    <h3>{"Visit or call us"}</h3>
                    <p><strong>{"Phone: "}</strong><a href="tel:+6561234567">{"+65 6123 4567"}</a></p>
                    <p><strong>{"Email: "}</strong><a href="mailto:hello@horizonscholars.com">{"hello@horizonscholars.com"}</a></p>
                    <p><strong>{"Office hours: "}</strong>{"Monday to Saturday, 9am to 6pm"}</p>
                    <h3>{"What happens next?"}</h3>
                    <ol>
                        <li>{"A counsellor reviews your details"}</li>
                        <li>{"We call or email to schedule your session"}</li>
                        <li>{"You get a personalised study plan"}</li>
                    </ol>
                </aside>
            </section>
        </div>
    }
}
