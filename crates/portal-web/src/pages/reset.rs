//! Password Reset Page

use leptos::prelude::*;

use portal_core::action::FormSubmitGuard;

use crate::ui::SignalTrigger;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let trigger = SignalTrigger::new("Send reset link", "fas fa-paper-plane ms-2");

    // The guard only decorates the button; the native submission proceeds
    // and navigates or re-renders the page.
    let on_submit = move |_ev: leptos::ev::SubmitEvent| {
        FormSubmitGuard::new("Sending...").engage(&trigger);
    };

    view! {
        <div class="reset-password">
            <h1>"Forgot your password?"</h1>
            <p class="subtitle">"We will email you a reset code."</p>

            <form action="/forgot-password" method="POST" on:submit=on_submit>
                <div class="field">
                    <label>"Email"</label>
                    <input type="email" name="email" required=true placeholder="you@example.com" />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || trigger.disabled.get()
                >
                    {move || trigger.label.get()}
                    <i class=move || trigger.icon_class.get() role="status" aria-hidden="true"></i>
                </button>
            </form>
        </div>
    }
}
