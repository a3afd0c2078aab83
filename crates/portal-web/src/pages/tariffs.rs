//! Tariffs Page

use leptos::prelude::*;

use crate::components::PayButton;

#[component]
pub fn TariffsPage() -> impl IntoView {
    view! {
        <div class="tariffs">
            <h1>"Tariffs"</h1>
            <p class="subtitle">"Pick how long you want to stay connected"</p>

            <div class="plans">
                <div class="plan">
                    <h2>"1 Month"</h2>
                    <div class="price">"$4.99"</div>
                    <ul>
                        <li>"Unlimited traffic"</li>
                        <li>"All locations"</li>
                    </ul>
                    <PayButton tariff="1 Month" price=4.99 />
                </div>

                <div class="plan featured">
                    <span class="badge">"Popular"</span>
                    <h2>"3 Months"</h2>
                    <div class="price">"$11.99"</div>
                    <ul>
                        <li>"Unlimited traffic"</li>
                        <li>"All locations"</li>
                        <li>"Priority support"</li>
                    </ul>
                    <PayButton tariff="3 Months" price=11.99 primary=true />
                </div>

                <div class="plan">
                    <h2>"12 Months"</h2>
                    <div class="price">"$39.99"</div>
                    <ul>
                        <li>"Everything in 3 Months"</li>
                        <li>"Two months free"</li>
                    </ul>
                    <PayButton tariff="12 Months" price=39.99 />
                </div>
            </div>
        </div>
    }
}
