use leptos::prelude::*;
use organimo::{
    fixtures::{FeaturedProduct, load_featured},
    products::CategoryFilter,
};
use rusty_money::iso::USD;

use crate::{Page, Shell, price_label};

const FEATURED_FIXTURE_YAML: &str = include_str!("../../../fixtures/featured.yml");

/// Home page: hero and the featured product.
#[component]
pub fn HomePage(shell: Shell) -> impl IntoView {
    shell.guard.navigate(Page::Home);

    let navigate = shell.navigate;

    view! {
        <section class="hero">
            <h1 class="text-4xl font-semibold tracking-tight">"Sea moss, made simple."</h1>
            <p class="mt-2 text-stone-600">
                "Wildcrafted wellness, harvested in Canada and delivered to your door."
            </p>
            <button
                type="button"
                class="button-primary mt-4"
                on:click=move |_| navigate.run(Page::Shop(CategoryFilter::all()))
            >
                "Shop now"
            </button>
        </section>
        {match load_featured(FEATURED_FIXTURE_YAML, USD) {
            Ok(featured) => view! { <FeaturedCard featured=featured shell=shell /> }.into_any(),
            Err(error) => view! {
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error.to_string()}</p>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn FeaturedCard(featured: FeaturedProduct, shell: Shell) -> impl IntoView {
    let Shell {
        navigate,
        add_to_cart,
        ..
    } = shell;

    let slug = featured.product.slug.clone();
    let item = featured.line_item().ok();
    let unavailable = item.is_none();
    let price = price_label(featured.product.price, USD);

    view! {
        <section class="featured">
            <img
                class="featured-image"
                src=featured.product.image
                alt=featured.product.title.clone()
            />
            <div>
                <h2 class="text-2xl font-semibold">{featured.product.title}</h2>
                <p class="featured-rating">"★ " {featured.rating_label}</p>
                <p class="featured-price">{price}</p>
                <p class="text-stone-600">{featured.product.description}</p>
                <ul class="featured-badges">
                    {featured
                        .badges
                        .into_iter()
                        .map(|badge| view! { <li class="pill">{badge}</li> })
                        .collect_view()}
                </ul>
                <div class="mt-4 flex gap-3">
                    <button
                        type="button"
                        class="button-primary"
                        disabled=unavailable
                        on:click=move |_| {
                            if let Some(item) = item.clone() {
                                add_to_cart.run(item);
                            }
                        }
                    >
                        "Add to Cart"
                    </button>
                    <button
                        type="button"
                        class="button-secondary"
                        on:click=move |_| navigate.run(Page::Product(slug.clone()))
                    >
                        "View details"
                    </button>
                </div>
            </div>
        </section>
    }
}
