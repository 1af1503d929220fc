//! Organimo storefront front end

use leptos::{logging::warn, prelude::*};
use organimo::{
    cart::PricePolicy,
    items::NewLineItem,
    pricing::format_amount,
    products::CategoryFilter,
    session::Session,
    views::ViewGuard,
};
use rust_decimal::Decimal;
use rusty_money::iso::Currency;

mod api;
mod cart;
mod home;
mod navbar;
mod product;
mod shop;

/// Price policy baked in at build time (`first-seen` or `latest`).
const PRICE_POLICY: Option<&str> = option_env!("ORGANIMO_PRICE_POLICY");

/// The view currently displayed in the main area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Page {
    /// Marketing home page with the featured product.
    Home,

    /// Product listing for a category.
    Shop(CategoryFilter),

    /// Product detail by slug.
    Product(String),
}

/// Handles shared by every page.
#[derive(Clone, Debug)]
pub(crate) struct Shell {
    /// Backend client.
    pub api: api::Api,

    /// Tracks the displayed page so late fetch results can be dropped.
    pub guard: ViewGuard<Page>,

    /// Switch the displayed page.
    pub navigate: Callback<Page>,

    /// Add one unit of an item to the session cart.
    pub add_to_cart: Callback<NewLineItem>,
}

/// Price policy named by `value`. Unset or blank keeps the first price; any
/// other unrecognised name is returned as the error.
fn price_policy(value: Option<&str>) -> Result<PricePolicy, &str> {
    match value.map(str::trim) {
        None | Some("" | "first-seen") => Ok(PricePolicy::FirstSeen),
        Some("latest") => Ok(PricePolicy::Latest),
        Some(other) => Err(other),
    }
}

/// Display string for an amount, e.g. `$29.99`.
pub(crate) fn price_label(amount: Decimal, currency: &'static Currency) -> String {
    format_amount(amount, currency).unwrap_or_else(|_| amount.to_string())
}

/// Main storefront shell.
#[component]
fn App() -> impl IntoView {
    let policy = price_policy(PRICE_POLICY).unwrap_or_else(|unknown| {
        warn!("unknown ORGANIMO_PRICE_POLICY {unknown:?}, keeping first-seen prices");
        PricePolicy::FirstSeen
    });
    let session = RwSignal::new(Session::new(policy));
    let current = RwSignal::new(Page::Home);

    let cart = Memo::new(move |_| session.with(|session| session.cart().clone()));
    let drawer_open = Memo::new(move |_| session.with(|session| session.drawer().is_open()));

    let shell = Shell {
        api: api::Api::from_env(),
        guard: ViewGuard::new(),
        navigate: Callback::new(move |page: Page| current.set(page)),
        add_to_cart: Callback::new(move |item: NewLineItem| {
            session.update(|session| {
                session.add_item(item);
            });
        }),
    };

    let open_drawer = Callback::new(move |()| session.update(Session::open_drawer));
    let close_drawer = Callback::new(move |()| session.update(Session::close_drawer));

    let api = shell.api.clone();
    let navigate = shell.navigate;

    view! {
        <div class="min-h-screen bg-stone-50 text-stone-900">
            <navbar::Navbar
                cart=cart
                navigate=navigate
                open_drawer=open_drawer
            />
            <main class="mx-auto max-w-6xl px-4 py-6">
                {move || {
                    let shell = shell.clone();

                    match current.get() {
                        Page::Home => view! { <home::HomePage shell=shell /> }.into_any(),
                        Page::Shop(filter) => {
                            view! { <shop::ShopPage filter=filter shell=shell /> }.into_any()
                        }
                        Page::Product(slug) => {
                            view! { <product::ProductPage slug=slug shell=shell /> }.into_any()
                        }
                    }
                }}
            </main>
            <cart::CartDrawer
                cart=cart
                open=drawer_open
                close=close_drawer
                api=api
            />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
