//! Dashboard Page

use leptos::prelude::*;

use portal_core::action::{Navigator, LOGIN_URL};
use portal_core::error::PortalError;

use crate::api::{PortalApi, ProfileSummary};
use crate::components::{DownloadWidget, SubscriptionLink};
use crate::ui::WindowNavigator;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (profile, set_profile) = signal(None::<ProfileSummary>);
    let (error, set_error) = signal(None::<String>);

    leptos::task::spawn_local(async move {
        match PortalApi::new().fetch_profile().await {
            Ok(summary) => set_profile.set(Some(summary)),
            Err(PortalError::AuthRequired) => WindowNavigator.assign(LOGIN_URL),
            Err(err) => set_error.set(Some(err.user_message().into())),
        }
    });

    view! {
        <div class="dashboard">
            <h1>"Your subscription"</h1>

            <Show when=move || error.get().is_some()>
                <div class="alert alert-danger">{move || error.get()}</div>
            </Show>

            {move || {
                profile.get().map(|summary| match summary.subscription_url {
                    Some(link) => {
                        view! {
                            <section class="active-subscription">
                                <SubscriptionLink link=link />
                                <DownloadWidget />
                            </section>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <section class="no-subscription">
                                <p>"No active subscription yet."</p>
                                <a href="/tariffs" class="btn btn-primary">"View tariffs"</a>
                            </section>
                        }
                            .into_any()
                    }
                })
            }}
        </div>
    }
}
