use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a005_contact::{ContactField, ContactFieldError, ContactForm};
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (errors, set_errors) = signal(Vec::<ContactFieldError>::new());
    let (confirmation, set_confirmation) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.submit()) {
            Some(Ok(submission)) => {
                log::info!("Form submitted: {:?}", submission.form);
                set_errors.set(Vec::new());
                set_confirmation.set(Some(format!(
                    "Message submitted at {}! Thank you.",
                    submission.submitted_at.format("%H:%M:%S")
                )));
            }
            Some(Err(field_errors)) => {
                log::debug!("contact form rejected: {} errors", field_errors.len());
                set_confirmation.set(None);
                set_errors.set(field_errors);
            }
            None => {}
        }
    };

    view! {
        <PageFrame page_id="a005_contact--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <h1>"Contact Us"</h1>
            </div>
            <div class="page__content">
                {move || confirmation.get().map(|text| view! {
                    <div class="success-message">{text}</div>
                })}
                <form class="contact-form" on:submit=on_submit>
                    <FormField form=form errors=errors field=ContactField::Name input_type="text" />
                    <FormField form=form errors=errors field=ContactField::Email input_type="email" />
                    <FormField form=form errors=errors field=ContactField::Message input_type="textarea" />
                    <button type="submit" class="button button--primary">"Submit"</button>
                </form>
            </div>
        </PageFrame>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    errors: ReadSignal<Vec<ContactFieldError>>,
    field: ContactField,
    input_type: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let set_value = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
    };
    let field_error = move || {
        errors.with(|list| {
            list.iter()
                .find(|e| e.field() == field)
                .map(ToString::to_string)
        })
    };

    let input = if input_type == "textarea" {
        view! {
            <textarea
                name=field.label().to_lowercase()
                rows="5"
                required
                prop:value=value
                on:input=set_value
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                name=field.label().to_lowercase()
                required
                prop:value=value
                on:input=set_value
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label>{field.label()}</label>
            {input}
            {move || field_error().map(|text| view! { <span class="field-error">{text}</span> })}
        </div>
    }
}
