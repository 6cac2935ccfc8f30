use log::{error, info, warn};
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form::{ChallengeState, ConsultationForm, FormField, FormStatus, SubmitError};
use super::hcaptcha::{self, RenderOptions, ScriptLoad, WidgetId};
use super::intake;
use super::request::{
    DestinationCountry, SelectOption, StartWindow, StudyLevel, CALLING_CODES,
};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Destination preselected when the form sits on a country page.
    #[prop_or_default]
    pub destination: Option<DestinationCountry>,
}

pub enum ContactFormMsg {
    Edit(FormField, String),
    ScriptLoaded,
    ScriptFailed,
    WidgetChanged,
    Submit,
    SubmissionFinished(Result<(), SubmitError>),
    SendAnother,
}

pub struct ContactForm {
    form: ConsultationForm,
    widget: Option<WidgetId>,
    script: Option<ScriptLoad>,
    script_failed: bool,
    // Set when the widget container is (re)created and still empty.
    widget_pending: bool,
    error: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    pub on_send_another: Callback<MouseEvent>,
}

#[function_component(Confirmation)]
pub fn confirmation(props: &ConfirmationProps) -> Html {
    html! {
        <div class="consultation-confirmation">
            <div class="confirmation-icon">{"✓"}</div>
            <h3>{"Thank You!"}</h3>
            <p>{"Your consultation request has been received. One of our counsellors will get back to you within 24 hours."}</p>
            <button class="secondary-button" onclick={props.on_send_another.clone()}>
                {"Send another message"}
            </button>
        </div>
    }
}

/// Applies the destination a country page preselects. Ignored while a
/// request is in flight or confirmed.
fn preselect(form: &mut ConsultationForm, destination: Option<DestinationCountry>) {
    if let Some(destination) = destination {
        form.edit(FormField::Destination, destination.slug().to_string());
    }
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

impl ContactForm {
    /// Renders the widget into the container if the provider is ready.
    /// Returns true once the attempt has settled, mounted or failed, and the
    /// view needs updating.
    fn mount_widget(&mut self) -> bool {
        if !hcaptcha::is_available() {
            return false;
        }
        let options = RenderOptions {
            sitekey: config::get_hcaptcha_sitekey(),
            theme: "light",
        };
        match hcaptcha::render(config::HCAPTCHA_CONTAINER_ID, &options) {
            Ok(widget) => {
                self.widget = Some(widget);
                self.widget_pending = false;
                self.form.challenge_loaded();
                true
            }
            Err(e) => {
                gloo_console::error!("Failed to render verification widget:", e);
                self.script_failed = true;
                self.widget_pending = false;
                self.widget = None;
                self.form.challenge_lost();
                true
            }
        }
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: FormField,
        input_type: &'static str,
        value: &str,
        placeholder: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Edit(field, input.value())
        });
        html! {
            <input
                type={input_type}
                value={value.to_string()}
                {placeholder}
                {oninput}
                disabled={self.form.is_locked()}
            />
        }
    }

    fn select<T: SelectOption>(
        &self,
        ctx: &Context<Self>,
        field: FormField,
        selected: Option<T>,
        placeholder: &'static str,
    ) -> Html {
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactFormMsg::Edit(field, select.value())
        });
        html! {
            <select {onchange} disabled={self.form.is_locked()}>
                <option value="" selected={selected.is_none()}>{placeholder}</option>
                { for T::ALL.iter().map(|option| html! {
                    <option value={option.slug()} selected={selected == Some(*option)}>
                        {option.label()}
                    </option>
                }) }
            </select>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let request = self.form.request();
        let locked = self.form.is_locked();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_calling_code = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactFormMsg::Edit(FormField::CallingCode, select.value())
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::Edit(FormField::Message, area.value())
        });

        html! {
            <form class="consultation-form" {onsubmit}>
                if let Some(error) = &self.error {
                    <div class="form-error">{error}</div>
                }
                <div class="form-row">
                    <label>{"Full name *"}</label>
                    { self.text_input(ctx, FormField::Name, "text", &request.name, "Your full name") }
                </div>
                <div class="form-row">
                    <label>{"Email *"}</label>
                    { self.text_input(ctx, FormField::Email, "email", &request.email, "you@example.com") }
                </div>
                <div class="form-row">
                    <label>{"Phone number *"}</label>
                    <div class="phone-group">
                        <select class="calling-code" onchange={on_calling_code} disabled={locked}>
                            { for CALLING_CODES.iter().map(|(code, country)| html! {
                                <option value={*code} selected={request.country_calling_code == *code}>
                                    {format!("{} ({})", code, country)}
                                </option>
                            }) }
                        </select>
                        { self.text_input(ctx, FormField::Phone, "tel", &request.phone, "98765432") }
                    </div>
                </div>
                <div class="form-grid">
                    <div class="form-row">
                        <label>{"Destination"}</label>
                        { self.select::<DestinationCountry>(ctx, FormField::Destination, request.destination_country, "Select a destination") }
                    </div>
                    <div class="form-row">
                        <label>{"Study level"}</label>
                        { self.select::<StudyLevel>(ctx, FormField::StudyLevel, request.study_level, "Select a level") }
                    </div>
                    <div class="form-row">
                        <label>{"Preferred start"}</label>
                        { self.select::<StartWindow>(ctx, FormField::StartWindow, request.preferred_start_window, "Select a start date") }
                    </div>
                </div>
                <div class="form-row">
                    <label>{"Message *"}</label>
                    <textarea
                        rows="5"
                        placeholder="Tell us about your goals, preferred courses or any questions"
                        value={request.message.clone()}
                        oninput={on_message}
                        disabled={locked}
                    />
                </div>
                <div id={config::HCAPTCHA_CONTAINER_ID} class="hcaptcha-container"></div>
                if self.script_failed {
                    <p class="form-note">{"The verification check could not be loaded. Please refresh the page or reach us by phone or email."}</p>
                }
                <button type="submit" class="primary-button" disabled={!self.form.can_submit()}>
                    {
                        match (self.form.status(), self.form.challenge()) {
                            (FormStatus::Submitting, _) => "Sending...",
                            (_, ChallengeState::NotLoaded) => "Loading verification...",
                            _ => "Book Free Consultation",
                        }
                    }
                </button>
            </form>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = ConsultationForm::new();
        preselect(&mut form, ctx.props().destination);
        Self {
            form,
            widget: None,
            script: None,
            script_failed: false,
            widget_pending: true,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let on_ready = ctx.link().callback(|_| ContactFormMsg::ScriptLoaded);
            let on_error = ctx.link().callback(|_| ContactFormMsg::ScriptFailed);
            match hcaptcha::load_script(
                config::HCAPTCHA_SCRIPT_URL,
                move || on_ready.emit(()),
                move || on_error.emit(()),
            ) {
                Ok(load) => self.script = load,
                Err(e) => {
                    gloo_console::error!("Failed to load verification script:", e);
                    self.script_failed = true;
                }
            }
        } else if self.widget_pending
            && self.form.status() == FormStatus::Idle
            && self.mount_widget()
        {
            ctx.link().send_message(ContactFormMsg::WidgetChanged);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Moving between country pages reuses this component.
        if ctx.props().destination == old_props.destination {
            return false;
        }
        preselect(&mut self.form, ctx.props().destination);
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Detach the load listeners if the script is still pending.
        self.script.take();
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit(field, value) => self.form.edit(field, value),
            ContactFormMsg::ScriptLoaded => {
                if self.widget_pending {
                    self.mount_widget();
                }
                true
            }
            ContactFormMsg::WidgetChanged => true,
            ContactFormMsg::ScriptFailed => {
                error!("Verification script failed to load, submissions disabled");
                self.script_failed = true;
                true
            }
            ContactFormMsg::Submit => {
                let token = self
                    .widget
                    .as_ref()
                    .map(hcaptcha::get_response)
                    .unwrap_or_default();
                match self.form.begin_submit(&token) {
                    Ok(submission) => {
                        self.error = None;
                        ctx.link().send_future(async move {
                            ContactFormMsg::SubmissionFinished(intake::submit(submission).await)
                        });
                    }
                    Err(SubmitError::AlreadyInFlight) => return false,
                    Err(e) => {
                        warn!("Consultation request rejected: {}", e);
                        alert(&e.to_string());
                        self.error = Some(e.to_string());
                    }
                }
                true
            }
            ContactFormMsg::SubmissionFinished(Ok(())) => {
                info!("Consultation request submitted");
                self.form.complete_submission();
                if let Some(widget) = self.widget.take() {
                    hcaptcha::reset(&widget);
                }
                true
            }
            ContactFormMsg::SubmissionFinished(Err(e)) => {
                error!("Consultation submission failed: {}", e);
                self.form.fail_submission();
                if let Some(widget) = &self.widget {
                    hcaptcha::reset(widget);
                }
                alert("Sorry, something went wrong while sending your request. Please try again.");
                true
            }
            ContactFormMsg::SendAnother => {
                self.form.start_over();
                self.error = None;
                // The confirmation view replaced the container, so a fresh
                // widget is rendered into the new one.
                self.widget_pending = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="consultation-card">
                {
                    if self.form.status() == FormStatus::Submitted {
                        html! {
                            <Confirmation on_send_another={ctx.link().callback(|_| ContactFormMsg::SendAnother)} />
                        }
                    } else {
                        self.view_form(ctx)
                    }
                }
                <style>
                    {r#"
                    .consultation-card {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 2.5rem;
                        box-shadow: 0 12px 40px rgba(15, 40, 80, 0.12);
                        color: #1b2a41;
                    }
                    .consultation-form .form-row {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1.2rem;
                    }
                    .consultation-form label {
                        font-weight: 600;
                        font-size: 0.9rem;
                        margin-bottom: 0.4rem;
                    }
                    .consultation-form input,
                    .consultation-form select,
                    .consultation-form textarea {
                        padding: 0.75rem 1rem;
                        border: 1px solid #d3dbe6;
                        border-radius: 8px;
                        font-size: 1rem;
                        font-family: inherit;
                    }
                    .consultation-form input:disabled,
                    .consultation-form textarea:disabled {
                        background: #f3f5f8;
                    }
                    .form-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }
                    .phone-group {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .phone-group .calling-code {
                        flex: 0 0 11rem;
                    }
                    .phone-group input {
                        flex: 1;
                    }
                    .hcaptcha-container {
                        margin: 1rem 0;
                        min-height: 78px;
                    }
                    .form-error {
                        background: #fdecea;
                        color: #b3261e;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        margin-bottom: 1rem;
                    }
                    .form-note {
                        color: #8a5a00;
                        font-size: 0.9rem;
                    }
                    .consultation-confirmation {
                        text-align: center;
                        padding: 2rem 0;
                    }
                    .confirmation-icon {
                        font-size: 3rem;
                        color: #1f9d55;
                    }
                    @media (max-width: 768px) {
                        .form-grid {
                            grid-template-columns: 1fr;
                        }
                        .consultation-card {
                            padding: 1.5rem;
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_confirmation_view() {
        let html = ServerRenderer::<Confirmation>::with_props(|| ConfirmationProps {
            on_send_another: Callback::from(|_| ()),
        })
        .render()
        .await;

        assert!(html.contains("Thank You!"));
        assert!(html.contains("Send another message"));
    }

    #[test]
    fn test_preselect_follows_destination() {
        let mut form = ConsultationForm::new();
        preselect(&mut form, Some(DestinationCountry::Uk));
        assert_eq!(form.request().destination_country, Some(DestinationCountry::Uk));

        preselect(&mut form, Some(DestinationCountry::Dubai));
        assert_eq!(form.request().destination_country, Some(DestinationCountry::Dubai));

        preselect(&mut form, None);
        assert_eq!(form.request().destination_country, Some(DestinationCountry::Dubai));
    }

    #[test]
    fn test_preselect_ignored_while_submitting() {
        let mut form = ConsultationForm::new();
        form.challenge_loaded();
        preselect(&mut form, Some(DestinationCountry::Uk));
        form.edit(FormField::Name, "Jane Doe".to_string());
        form.edit(FormField::Email, "jane@example.com".to_string());
        form.edit(FormField::Phone, "98765432".to_string());
        form.edit(FormField::Message, "Interested in UK programs".to_string());
        form.begin_submit("token").unwrap();

        preselect(&mut form, Some(DestinationCountry::Europe));

        assert_eq!(form.request().destination_country, Some(DestinationCountry::Uk));
    }
}
