use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::layout::{scroll_to_top, PageHero};

const VALUES: &[(&str, &str)] = &[
    ("Honest advice", "We recommend the universities that are right for you, not the ones that pay the highest commission."),
    ("Personal attention", "Every student has a dedicated counsellor from the first call until they arrive on campus."),
    ("Transparent costs", "Our counselling is free. Any third-party fees are explained up front."),
    ("Lasting support", "We stay in touch after you land, for accommodation questions, part-time work and beyond."),
];

#[function_component(About)]
pub fn about() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="about-page">
            <PageHero
                title="About Horizon Scholars"
                subtitle="Helping students take the leap to world-class education since 2012"
            />
            <section class="content-section narrow">
                <h2>{"Our story"}</h2>
                <p>
                    {"Horizon Scholars began with a single counsellor helping a handful of students apply to universities in the UK. Word spread, and today our team guides thousands of students each year towards degrees in Singapore, Dubai, Mauritius, the United Kingdom and across Europe."}
                </p>
                <p>
                    {"Many of our counsellors studied abroad themselves. We know how daunting the first steps are, from choosing a course to packing for a new country, and we built our service around making each of those steps clear."}
                </p>
            </section>
            <section class="content-section alt">
                <h2>{"What we stand for"}</h2>
                <div class="card-grid">
                    { for VALUES.iter().map(|(title, text)| html! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
