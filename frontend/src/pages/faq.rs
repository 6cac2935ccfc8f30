use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::components::layout::{scroll_to_top, PageHero};
use crate::content::FAQ;
use crate::Route;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="faq-page">
            <PageHero
                title="Frequently Asked Questions"
                subtitle="Everything you need to know before you start your study abroad journey"
            />
            <section class="faq-section">
                { for FAQ.iter().map(|entry| html! {
                    <FaqItem question={entry.question}>
                        <p>{entry.answer}</p>
                    </FaqItem>
                }) }
                <p class="faq-more">
                    {"Still have questions? "}
                    <Link<Route> to={Route::Contact} classes="text-link">{"Ask a counsellor"}</Link<Route>>
                </p>
            </section>
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .faq-item {
                    background: #ffffff;
                    border: 1px solid #e3e8ef;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .faq-item.open {
                    border-color: #0b5cab;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #1b2a41;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: #0b5cab;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.2rem;
                    color: #4a5b70;
                    line-height: 1.6;
                }
                .faq-more {
                    text-align: center;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
