use leptos::{prelude::*, task};
use organimo::{
    items::NewLineItem,
    products::{CategoryFilter, ProductDetail, ProductPage as ProductState},
};
use rusty_money::iso::USD;

use crate::{Page, Shell, price_label};

/// Product detail page. Shows a loading state until the product arrives, then
/// the product or an explicit not-found / unavailable message.
#[component]
pub fn ProductPage(slug: String, shell: Shell) -> impl IntoView {
    let page = RwSignal::new(None::<ProductState>);
    let ticket = shell.guard.navigate(Page::Product(slug.clone()));

    task::spawn_local({
        let api = shell.api.clone();
        let guard = shell.guard.clone();

        async move {
            let loaded = api.product(&slug).await;

            if let Some(loaded) = guard.accept(&ticket, loaded) {
                page.set(Some(loaded));
            }
        }
    });

    let navigate = shell.navigate;
    let add_to_cart = shell.add_to_cart;

    let back = move || {
        view! {
            <button
                type="button"
                class="button-secondary"
                on:click=move |_| navigate.run(Page::Shop(CategoryFilter::all()))
            >
                "Back to shop"
            </button>
        }
    };

    view! {
        <section class="product-page">
            {move || match page.get() {
                None => view! { <p class="product-status">"Loading…"</p> }.into_any(),
                Some(ProductState::Loaded(product)) => {
                    view! { <ProductDetails product=product add_to_cart=add_to_cart /> }.into_any()
                }
                Some(ProductState::NotFound { slug }) => view! {
                    <div class="product-status">
                        <h1 class="text-2xl font-semibold">"Product not found"</h1>
                        <p>"We couldn't find \"" {slug} "\"."</p>
                    </div>
                }
                .into_any(),
                Some(ProductState::Unavailable { slug }) => view! {
                    <div class="product-status">
                        <h1 class="text-2xl font-semibold">"Product unavailable"</h1>
                        <p>"\"" {slug} "\" could not be loaded. Please try again later."</p>
                    </div>
                }
                .into_any(),
            }}
            {back}
        </section>
    }
}

#[component]
fn ProductDetails(product: ProductDetail, add_to_cart: Callback<NewLineItem>) -> impl IntoView {
    let item = NewLineItem::try_from(&product).ok();
    let unavailable = item.is_none();
    let price = price_label(product.price, USD);
    let rating = product.rating_label();

    view! {
        <article class="product-detail">
            <img class="product-detail-image" src=product.image alt=product.title.clone() />
            <div>
                <h1 class="text-3xl font-semibold">{product.title}</h1>
                {rating.map(|rating| view! { <p class="product-rating">"★ " {rating}</p> })}
                <p class="product-price">{price}</p>
                <p class="text-stone-600">{product.description}</p>
                <button
                    type="button"
                    class="button-primary mt-4"
                    disabled=unavailable
                    on:click=move |_| {
                        if let Some(item) = item.clone() {
                            add_to_cart.run(item);
                        }
                    }
                >
                    "Add to Cart"
                </button>
            </div>
        </article>
    }
}
