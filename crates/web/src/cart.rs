use leptos::{prelude::*, task};
use organimo::{cart::Cart, checkout::CheckoutRequest, items::LineItem};
use rusty_money::iso::Currency;

use crate::{api::Api, price_label};

/// Drawer row model for one cart line.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DrawerLine {
    sku: String,
    title: String,
    quantity: u32,
    unit_price: String,
    line_total: String,
}

impl DrawerLine {
    fn new(line: &LineItem, currency: &'static Currency) -> Self {
        Self {
            sku: line.sku().to_string(),
            title: line.title().to_string(),
            quantity: line.quantity(),
            unit_price: price_label(line.price(), currency),
            line_total: price_label(line.line_total(), currency),
        }
    }
}

fn drawer_lines(cart: &Cart) -> Vec<DrawerLine> {
    cart.items()
        .iter()
        .map(|line| DrawerLine::new(line, cart.currency()))
        .collect()
}

/// Slide-over cart: lines, subtotal and checkout.
#[component]
pub fn CartDrawer(
    /// Cart contents, read-only.
    #[prop(into)]
    cart: Signal<Cart>,
    /// Whether the drawer is showing.
    #[prop(into)]
    open: Signal<bool>,
    /// Hide the drawer.
    close: Callback<()>,
    /// Backend client used for checkout.
    api: Api,
) -> impl IntoView {
    let message = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let api = StoredValue::new(api);

    let on_checkout = move |_| {
        if submitting.get_untracked() {
            return;
        }

        let (request, currency) =
            cart.with_untracked(|cart| (CheckoutRequest::from(cart), cart.currency()));
        let api = api.get_value();

        submitting.set(true);
        message.set(None);

        task::spawn_local(async move {
            let outcome = api.checkout(&request).await;

            message.set(Some(outcome.message(currency)));
            submitting.set(false);
        });
    };

    view! {
        <aside
            class=move || if open.get() { "cart-drawer cart-drawer-open" } else { "cart-drawer" }
            aria-hidden=move || (!open.get()).to_string()
            aria-label="Shopping cart"
        >
            <div class="cart-drawer-header">
                <h2 class="text-lg font-semibold">"Your Cart"</h2>
                <button
                    type="button"
                    class="icon-button"
                    aria-label="Close cart"
                    on:click=move |_| close.run(())
                >
                    "×"
                </button>
            </div>
            {move || {
                let lines = cart.with(drawer_lines);

                if lines.is_empty() {
                    return view! { <p class="cart-drawer-empty">"Your cart is empty."</p> }
                        .into_any();
                }

                view! {
                    <ul class="cart-drawer-lines">
                        {lines
                            .into_iter()
                            .map(|line| {
                                view! {
                                    <li class="cart-drawer-line" data-sku=line.sku>
                                        <div>
                                            <p class="font-medium">{line.title}</p>
                                            <p class="text-sm text-stone-500">
                                                {line.quantity} " × " {line.unit_price}
                                            </p>
                                        </div>
                                        <span>{line.line_total}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
            <div class="cart-drawer-footer">
                <p class="cart-drawer-subtotal">
                    <span>"Subtotal"</span>
                    <span>{move || cart.with(|cart| price_label(cart.subtotal(), cart.currency()))}</span>
                </p>
                <button
                    type="button"
                    class="button-primary w-full"
                    disabled=move || submitting.get() || cart.with(Cart::is_empty)
                    on:click=on_checkout
                >
                    {move || if submitting.get() { "Checking out…" } else { "Checkout" }}
                </button>
                <p class="cart-drawer-message" role="status" aria-live="polite">
                    {move || message.get()}
                </p>
            </div>
        </aside>
    }
}
