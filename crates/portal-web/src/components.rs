//! UI Components

use leptos::html;
use leptos::prelude::*;

use portal_core::action::{ActionUi, PaymentInitiator, PaymentRequest};
use portal_core::clipboard::copy_with_ack;
use portal_core::platform;

use crate::api::PortalApi;
use crate::ui::{
    client_hints, AlertNotifier, InputSource, SignalAck, SignalTrigger, WebClipboard,
    WindowNavigator, WindowTimer,
};

/// Checkout button for one tariff card
#[component]
pub fn PayButton(
    tariff: &'static str,
    price: f64,
    #[prop(optional)] primary: bool,
) -> impl IntoView {
    let trigger = SignalTrigger::new("Subscribe", "");
    let class = if primary {
        "btn btn-primary"
    } else {
        "btn btn-outline-primary"
    };

    let on_click = move |_| {
        leptos::task::spawn_local(async move {
            PaymentInitiator::new(PortalApi::new())
                .run(
                    ActionUi {
                        trigger: &trigger,
                        navigator: &WindowNavigator,
                        notifier: &AlertNotifier,
                    },
                    PaymentRequest {
                        tariff_name: tariff.into(),
                        price,
                    },
                )
                .await;
        });
    };

    view! {
        <button class=class disabled=move || trigger.disabled.get() on:click=on_click>
            <span class=move || trigger.icon_class.get() role="status" aria-hidden="true"></span>
            {move || trigger.label.get()}
        </button>
    }
}

/// Readonly subscription link with a copy button and an app deep link
#[component]
pub fn SubscriptionLink(link: String) -> impl IntoView {
    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let ack = SignalAck::new();
    let import_href = format!(
        "v2raytun://import/{}",
        String::from(js_sys::encode_uri_component(&link))
    );

    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            copy_with_ack(&InputSource(input_ref), &WebClipboard, &ack, &WindowTimer).await;
        });
    };

    view! {
        <div class="subscription-link">
            <label>"Subscription link"</label>
            <div class="input-group">
                <input type="text" readonly=true node_ref=input_ref prop:value=link />
                <button class=move || ack.class.get() on:click=on_copy>
                    <i class="fas fa-copy"></i>
                    " Copy"
                </button>
            </div>
            <a class="btn btn-primary" href=import_href>
                <i class="fas fa-bolt"></i>
                " Import into the app"
            </a>
        </div>
    }
}

/// Download link matched to the visitor's platform.
///
/// Renders nothing when client hints are unavailable; pages without a
/// subscription never mount this, so resolution is skipped there too.
#[component]
pub fn DownloadWidget() -> impl IntoView {
    client_hints().map(|hints| {
        let link = platform::resolve(&hints);
        view! {
            <div class="download-widget">
                <p>{link.description}</p>
                <a class="btn btn-primary" href=link.href target="_blank" rel="noopener">
                    <i class=link.icon_class></i>
                    " "
                    {link.button_label}
                </a>
            </div>
        }
    })
}
