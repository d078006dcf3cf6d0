//! New Post Form Component
//!
//! Form for creating posts, one control per entry of `Post::FORM_FIELDS`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wp_rest::{FieldKind, FormState, Post, SubmitOutcome};

use crate::context::AppContext;

/// Draft values after mount and after each successful submit
const POST_DEFAULTS: &[(&str, &str)] = &[("status", "draft")];

/// Form for creating a post. `on_created` runs once per created post,
/// after the draft has been cleared.
#[component]
pub fn NewPostForm(#[prop(into)] on_created: Callback<Post>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form = RwSignal::new(FormState::new(Post::FORM_FIELDS).with_defaults(POST_DEFAULTS));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Validation errors land in the draft and render below their fields
        let Some(payload) = form.try_update(|f| f.begin_submit::<Post>().ok()).flatten() else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = client.create_post(&payload).await;
            match form.try_update(|f| f.complete_submit(result)) {
                Some(SubmitOutcome::Created(post)) => {
                    log::info!("[NewPostForm] created post #{}", post.id);
                    on_created.run(post);
                }
                Some(_) => {}
                None => log::debug!("[NewPostForm] submit finished after unmount"),
            }
        });
    };

    let set_value = move |field: &'static str, v: String| form.update(|f| f.draft.set(field, v));
    let submitting = move || form.with(|f| f.submitting());

    let inputs = form
        .with_untracked(|f| f.fields())
        .iter()
        .map(|field| {
            let name = field.name;
            let value = move || form.with(|f| f.draft.get(name).to_string());
            let control = match field.kind {
                FieldKind::Line => view! {
                    <input
                        type="text"
                        prop:value=value
                        on:input=move |ev| set_value(name, event_target_value(&ev))
                    />
                }
                .into_any(),
                FieldKind::Multiline(rows) => view! {
                    <textarea
                        rows=rows.to_string()
                        prop:value=value
                        on:input=move |ev| set_value(name, event_target_value(&ev))
                    ></textarea>
                }
                .into_any(),
                FieldKind::Choice(options) => view! {
                    <select prop:value=value on:change=move |ev| set_value(name, event_target_value(&ev))>
                        {options.iter().map(|(option, label)| view! {
                            <option value=*option>{*label}</option>
                        }).collect_view()}
                    </select>
                }
                .into_any(),
            };
            let error = move || {
                form.with(|f| f.draft.error(name).map(str::to_string))
                    .map(|msg| view! { <span class="field-error">{msg}</span> })
            };
            view! {
                <label class="form-field">
                    <span>{field.label}</span>
                    {control}
                    {error}
                </label>
            }
        })
        .collect_view();

    view! {
        <form class="new-post-form" on:submit=on_submit novalidate>
            {inputs}

            <div class="form-row">
                <button type="submit" disabled=submitting>
                    {move || if submitting() { "Saving..." } else { "Create" }}
                </button>
            </div>

            {move || form.with(|f| f.submit_error().map(str::to_string))
                .map(|msg| view! { <div class="error-message" role="alert">{msg}</div> })}
        </form>
    }
}
