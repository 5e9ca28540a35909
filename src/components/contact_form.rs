use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::icons::{Icon, SvgIcon};
use crate::config::SUBMIT_DELAY_MS;
use crate::contact::{ContactForm as FormState, Field, Phase, Transmission};

pub enum Msg {
    Edit(Field, String),
    Submit,
    Deliver(Transmission),
    SendAnother,
}

/// Contact form that hands the validated message off to the messaging app.
pub struct ContactForm {
    form: FormState,
    // Dropping the timeout cancels it, so an unmounted form never delivers.
    pending: Option<Timeout>,
}

fn event_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Opens `url` in a new browsing context. `false` when the browser refused,
/// typically because of a popup blocker.
fn open_in_new_tab(url: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.open_with_url_and_target(url, "_blank").ok().flatten())
        .is_some()
}

impl ContactForm {
    fn field_view(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let value = self.form.fields().get(field).to_string();
        let error = self.form.error(field);
        let oninput = ctx
            .link()
            .callback(move |e: InputEvent| Msg::Edit(field, event_value(&e)));
        let class = classes!("form-input", error.is_some().then_some("invalid"));
        let readonly = self.form.is_sending();

        let control = match field {
            Field::Message => html! {
                <textarea
                    id={field.key()}
                    name={field.key()}
                    rows="5"
                    {class}
                    {value}
                    {placeholder}
                    {readonly}
                    {oninput}
                />
            },
            Field::Email => html! {
                <input type="email" id={field.key()} name={field.key()} {class} {value} {placeholder} {readonly} {oninput} />
            },
            _ => html! {
                <input type="text" id={field.key()} name={field.key()} {class} {value} {placeholder} {readonly} {oninput} />
            },
        };

        html! {
            <div class="form-field">
                <label for={field.key()}>{ label }</label>
                { control }
                if let Some(error) = error {
                    <p class="form-error">
                        <SvgIcon icon={Icon::AlertCircle} size={12} />
                        { error.to_string() }
                    </p>
                }
            </div>
        }
    }

    fn success_view(&self, ctx: &Context<Self>, fallback: Option<&str>) -> Html {
        html! {
            <div class="form-success">
                <SvgIcon icon={Icon::CheckCircle} size={64} class="accent" />
                <h3>{"Transmission Encoded"}</h3>
                if let Some(url) = fallback {
                    <p>{"Your browser blocked the secure frequency. Open it manually to complete transmission:"}</p>
                    <a class="fallback-link" href={url.to_string()} target="_blank" rel="noopener noreferrer">
                        {"Open WhatsApp"}
                    </a>
                } else {
                    <p>{"Redirecting to secure frequency (WhatsApp) to complete transmission."}</p>
                }
                <button class="send-another" onclick={ctx.link().callback(|_| Msg::SendAnother)}>
                    {"Send Another Transmission"}
                </button>
            </div>
        }
    }
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::new(),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.form.edit(field, value);
                true
            }
            Msg::Submit => {
                if let Some(transmission) = self.form.submit() {
                    let link = ctx.link().clone();
                    self.pending = Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                        link.send_message(Msg::Deliver(transmission));
                    }));
                }
                true
            }
            Msg::Deliver(transmission) => {
                self.pending = None;
                let fallback = if open_in_new_tab(&transmission.url) {
                    info!("transmission handed off");
                    None
                } else {
                    warn!("new tab was blocked, showing fallback link");
                    Some(transmission.url)
                };
                self.form.finish(fallback);
                true
            }
            Msg::SendAnother => {
                self.form.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let styles = html! {
            <style>
                {r#"
                    .contact-form {
                        position: relative;
                        z-index: 20;
                        max-width: 42rem;
                        margin: 3rem auto;
                        text-align: left;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form .row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .contact-form .row { grid-template-columns: 1fr 1fr; }
                    }
                    .form-field { display: flex; flex-direction: column; gap: 0.5rem; }
                    .form-field label {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #6b7280;
                    }
                    .form-input {
                        width: 100%;
                        padding: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2px;
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        font: inherit;
                        resize: none;
                        backdrop-filter: blur(4px);
                        transition: border-color 0.2s;
                    }
                    .form-input:focus { outline: none; border-color: #ff3366; }
                    .form-input.invalid { border-color: #ef4444; }
                    .form-error {
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                        color: #ef4444;
                        font-size: 0.75rem;
                    }
                    .form-submit {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 2px;
                        background: #ff3366;
                        color: #fff;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                        box-shadow: 0 0 20px rgba(255, 51, 102, 0.4);
                        transition: background 0.2s;
                    }
                    .form-submit:hover { background: #cc1f4b; }
                    .form-submit:disabled { opacity: 0.5; cursor: not-allowed; }
                    .form-success {
                        margin-top: 2rem;
                        padding: 3rem;
                        text-align: center;
                        border: 1px solid rgba(255, 51, 102, 0.3);
                        border-radius: 2px;
                        background: rgba(255, 51, 102, 0.1);
                        animation: pop-in 0.3s ease-out;
                    }
                    .form-success h3 { margin: 1rem 0 0.5rem; font-size: 1.5rem; color: #fff; }
                    .form-success p { color: #9ca3af; }
                    .form-success .fallback-link {
                        display: inline-block;
                        margin-top: 1rem;
                        padding: 0.75rem 1.5rem;
                        background: #25D366;
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .form-success .send-another {
                        margin-top: 1.5rem;
                        border: none;
                        background: none;
                        color: #ff3366;
                        font-size: 0.875rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                    }
                    .form-success .send-another:hover { color: #fff; }
                    @keyframes pop-in {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
        };

        if let Phase::Sent { fallback } = self.form.phase() {
            return html! {
                <>
                    { styles }
                    { self.success_view(ctx, fallback.as_deref()) }
                </>
            };
        }

        let sending = self.form.is_sending();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="contact-form" {onsubmit} novalidate=true>
                { styles }
                <div class="row">
                    { self.field_view(ctx, Field::Name, "Alias / Name", "Peter Parker") }
                    { self.field_view(ctx, Field::Email, "Secure Channel / Email", "spidey@dailybugle.com") }
                </div>
                { self.field_view(ctx, Field::Subject, "Objective / Subject", "Project Collaboration") }
                { self.field_view(ctx, Field::Message, "Intel / Message", "Brief us on your mission requirements...") }
                <button type="submit" class="form-submit" disabled={sending}>
                    if sending {
                        {"Encrypting & Sending..."}
                    } else {
                        <SvgIcon icon={Icon::Send} size={18} />
                        {"Establish Connection"}
                    }
                </button>
            </form>
        }
    }
}
