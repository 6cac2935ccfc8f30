use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::responder::{self, WELCOME};
use crate::config;

#[derive(Clone, Copy, PartialEq)]
enum Speaker {
    Visitor,
    Bot,
}

#[derive(Clone, PartialEq)]
struct ChatMessage {
    speaker: Speaker,
    text: String,
}

pub enum ChatWidgetMsg {
    Toggle,
    SetDraft(String),
    Send,
    Reply(&'static str),
}

pub struct ChatWidget {
    expanded: bool,
    draft: String,
    messages: Vec<ChatMessage>,
    typing: bool,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            expanded: false,
            draft: String::new(),
            messages: Vec::new(),
            typing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.expanded = !self.expanded;
                if self.expanded && self.messages.is_empty() {
                    self.messages.push(ChatMessage {
                        speaker: Speaker::Bot,
                        text: WELCOME.to_string(),
                    });
                }
                true
            }
            ChatWidgetMsg::SetDraft(draft) => {
                self.draft = draft;
                true
            }
            ChatWidgetMsg::Send => {
                let text = self.draft.trim().to_string();
                if text.is_empty() || self.typing {
                    return false;
                }
                let reply = responder::respond(&text);
                self.messages.push(ChatMessage {
                    speaker: Speaker::Visitor,
                    text,
                });
                self.draft.clear();
                self.typing = true;
                ctx.link().send_future(async move {
                    TimeoutFuture::new(config::CHAT_TYPING_DELAY_MS).await;
                    ChatWidgetMsg::Reply(reply)
                });
                true
            }
            ChatWidgetMsg::Reply(reply) => {
                self.typing = false;
                self.messages.push(ChatMessage {
                    speaker: Speaker::Bot,
                    text: reply.to_string(),
                });
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatWidgetMsg::Toggle);
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetDraft(input.value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ChatWidgetMsg::Send)
        });

        html! {
            <div class={classes!("chat-widget", self.expanded.then_some("expanded"))}>
                if self.expanded {
                    <div class="chat-panel">
                        <div class="chat-header">
                            <span>{"Ask Horizon"}</span>
                            <button class="chat-close" onclick={toggle.clone()}>{"✕"}</button>
                        </div>
                        <div class="chat-log">
                            { for self.messages.iter().map(|message| {
                                let class = match message.speaker {
                                    Speaker::Visitor => "chat-bubble visitor",
                                    Speaker::Bot => "chat-bubble bot",
                                };
                                html! { <div {class}>{&message.text}</div> }
                            }) }
                            if self.typing {
                                <div class="chat-bubble bot typing">{"..."}</div>
                            }
                        </div>
                        <div class="chat-input">
                            <input
                                type="text"
                                placeholder="Type your question..."
                                value={self.draft.clone()}
                                {oninput}
                                {onkeypress}
                            />
                            <button onclick={ctx.link().callback(|_| ChatWidgetMsg::Send)}>
                                {"Send"}
                            </button>
                        </div>
                    </div>
                } else {
                    <button class="chat-toggle" onclick={toggle}>{"💬"}</button>
                }
                <style>
                    {r#"
                    .chat-widget {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 1000;
                        font-family: inherit;
                    }
                    .chat-toggle {
                        width: 60px;
                        height: 60px;
                        border-radius: 50%;
                        border: none;
                        background: #0b5cab;
                        color: white;
                        font-size: 1.6rem;
                        cursor: pointer;
                        box-shadow: 0 8px 24px rgba(11, 92, 171, 0.35);
                    }
                    .chat-panel {
                        width: 340px;
                        max-height: 480px;
                        display: flex;
                        flex-direction: column;
                        background: white;
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 16px 40px rgba(15, 40, 80, 0.25);
                    }
                    .chat-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.9rem 1rem;
                        background: #0b5cab;
                        color: white;
                        font-weight: 600;
                    }
                    .chat-close {
                        background: none;
                        border: none;
                        color: white;
                        cursor: pointer;
                    }
                    .chat-log {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .chat-bubble {
                        padding: 0.6rem 0.9rem;
                        border-radius: 12px;
                        max-width: 85%;
                        font-size: 0.9rem;
                        line-height: 1.4;
                    }
                    .chat-bubble.bot {
                        background: #eef3f9;
                        color: #1b2a41;
                        align-self: flex-start;
                    }
                    .chat-bubble.visitor {
                        background: #0b5cab;
                        color: white;
                        align-self: flex-end;
                    }
                    .chat-input {
                        display: flex;
                        border-top: 1px solid #e3e8ef;
                    }
                    .chat-input input {
                        flex: 1;
                        border: none;
                        padding: 0.8rem;
                        font-size: 0.9rem;
                    }
                    .chat-input button {
                        border: none;
                        background: none;
                        color: #0b5cab;
                        font-weight: 600;
                        padding: 0 1rem;
                        cursor: pointer;
                    }
                    @media (max-width: 480px) {
                        .chat-panel {
                            width: calc(100vw - 2rem);
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
