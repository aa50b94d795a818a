use std::time::Duration;

use leptos::server_fn::codec::Json;
use leptos::task::spawn_local;
use leptos::{html, prelude::*};

use crate::contact::{
    validate, ContactMessage, ContactReply, FieldErrors, FormStatus, SubmissionState,
    SEND_TIMEOUT_MS, STATUS_RESET_MS,
};
use crate::content::CONTACT_CHANNELS;

/// `POST /api/contact`: accepts the form fields as a JSON object, logs them
/// server-side, and answers with a confirmation message. Internal failures
/// surface as HTTP 500 through the server-fn error path.
#[server(prefix = "/api", endpoint = "contact", input = Json)]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<ContactReply, ServerFnError> {
    use crate::contact::record_submission;

    let msg = ContactMessage::from_raw(&name, &email, &subject, &message);
    if validate(&msg).is_err() {
        return Err(ServerFnError::new("Invalid contact form submission"));
    }
    Ok(record_submission(&msg).await)
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (errors, set_errors) = signal(FieldErrors::default());
    let state = RwSignal::new(SubmissionState::default());
    let status = move || state.get().status();

    let schedule_reset = move |seq: u64| {
        set_timeout(
            move || {
                state.update(|s| {
                    s.reset(seq);
                });
            },
            Duration::from_millis(STATUS_RESET_MS),
        );
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            subject_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };

        let msg = ContactMessage::from_raw(
            &name.value(),
            &email.value(),
            &subject.value(),
            &message.value(),
        );
        match validate(&msg) {
            Err(field_errors) => {
                set_errors(field_errors);
                return;
            }
            Ok(()) => set_errors(FieldErrors::default()),
        }

        // refused while a submission is already in flight
        let Some(seq) = state.write().begin() else {
            return;
        };

        // watchdog for a request that never resolves
        set_timeout(
            move || {
                if state.write().expire(seq) {
                    log::warn!("contact submission timed out");
                    schedule_reset(seq);
                }
            },
            Duration::from_millis(SEND_TIMEOUT_MS),
        );

        spawn_local(async move {
            let ok = match send_message(msg.name, msg.email, msg.subject, msg.message).await {
                Ok(_) => true,
                Err(err) => {
                    log::warn!("contact submission failed: {err}");
                    false
                }
            };
            if state.write().finish(seq, ok) {
                if ok {
                    // only a delivered message clears the fields
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                }
                schedule_reset(seq);
            }
        });
    };

    let input_class = "w-full px-4 py-2 rounded-lg border border-pink-200 bg-white/80 \
                       focus:outline-none focus:ring-2 focus:ring-pink-400";
    let error_note = |error: Option<crate::contact::FieldError>| {
        error.map(|e| view! { <p class="text-sm text-rose-500 mt-1">{e.to_string()}</p> })
    };

    view! {
        <section id="contact" class="py-20 md:py-28 bg-white/40">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-12">
                    <span class="text-pink-500 font-medium mb-2 block">"Let's work together"</span>
                    <h2 class="text-3xl md:text-4xl font-bold">"Get In Touch"</h2>
                </div>
                <div class="flex flex-col lg:flex-row gap-10">
                    <div class="flex-1 space-y-4">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|channel| {
                                let value = channel
                                    .href
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                class="text-gray-600 hover:text-pink-500 transition-colors duration-200"
                                            >
                                                {channel.value}
                                            </a>
                                        }
                                            .into_any()
                                    })
                                    .unwrap_or_else(|| {
                                        view! { <span class="text-gray-600">{channel.value}</span> }
                                            .into_any()
                                    });
                                view! {
                                    <div class="flex items-center gap-3 p-4 rounded-xl bg-white/80 border border-pink-100">
                                        <span class="text-xl">{channel.icon}</span>
                                        <div>
                                            <p class="text-sm font-medium">{channel.label}</p>
                                            {value}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <form node_ref=form_ref class="flex-1 space-y-4" on:submit=on_submit>
                        <div>
                            <label for="contact_name" class="block text-sm font-medium mb-1">
                                "Name"
                            </label>
                            <input
                                id="contact_name"
                                node_ref=name_ref
                                class=input_class
                                placeholder="Your name"
                            />
                            {move || error_note(errors().name)}
                        </div>
                        <div>
                            <label for="contact_email" class="block text-sm font-medium mb-1">
                                "Email"
                            </label>
                            <input
                                id="contact_email"
                                node_ref=email_ref
                                class=input_class
                                placeholder="you@example.com"
                            />
                            {move || error_note(errors().email)}
                        </div>
                        <div>
                            <label for="contact_subject" class="block text-sm font-medium mb-1">
                                "Subject"
                            </label>
                            <input
                                id="contact_subject"
                                node_ref=subject_ref
                                class=input_class
                                placeholder="What's this about?"
                            />
                        </div>
                        <div>
                            <label for="contact_message" class="block text-sm font-medium mb-1">
                                "Message"
                            </label>
                            <textarea
                                id="contact_message"
                                node_ref=message_ref
                                rows=5
                                class=input_class
                                placeholder="Tell me about your project..."
                            ></textarea>
                            {move || error_note(errors().message)}
                        </div>
                        <button
                            type="submit"
                            prop:disabled=move || status() == FormStatus::Sending
                            class="w-full px-6 py-3 rounded-full bg-gradient-to-r from-pink-500 to-purple-500 text-white font-medium shadow hover:shadow-lg transition-shadow duration-200 disabled:opacity-60 disabled:cursor-not-allowed"
                        >
                            {move || match status() {
                                FormStatus::Idle => "Send Message",
                                FormStatus::Sending => "Sending...",
                                FormStatus::Success => "Message Sent!",
                                FormStatus::Error => "Try Again",
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
