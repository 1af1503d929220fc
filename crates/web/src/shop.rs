use leptos::{logging::warn, prelude::*, task};
use organimo::{
    items::NewLineItem,
    products::{CategoryFilter, ProductSummary},
};
use rusty_money::iso::USD;

use crate::{Page, Shell, price_label};

/// Category choices offered on the shop page, as (query value, label).
const CATEGORIES: [(&str, &str); 4] = [
    ("", "All"),
    ("gel", "Gel"),
    ("capsules", "Capsules"),
    ("powder", "Powder"),
];

/// Product listing with a category filter.
#[component]
pub fn ShopPage(filter: CategoryFilter, shell: Shell) -> impl IntoView {
    let products = RwSignal::new(None::<Vec<ProductSummary>>);
    let ticket = shell.guard.navigate(Page::Shop(filter.clone()));

    task::spawn_local({
        let api = shell.api.clone();
        let guard = shell.guard.clone();
        let filter = filter.clone();

        async move {
            let listing = api.products(&filter).await;

            if let Some(listing) = guard.accept(&ticket, listing) {
                products.set(Some(listing));
            }
        }
    });

    let navigate = shell.navigate;
    let add_to_cart = shell.add_to_cart;
    let selected = filter.as_param().unwrap_or_default().to_string();

    view! {
        <section class="shop">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-semibold">"Shop"</h1>
                <label class="flex items-center gap-2">
                    <span class="text-sm">"Category"</span>
                    <select
                        class="shop-filter"
                        prop:value=selected.clone()
                        on:change=move |event| {
                            let value = event_target_value(&event);
                            navigate.run(Page::Shop(CategoryFilter::from_param(&value)));
                        }
                    >
                        {CATEGORIES
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option value=value selected={value == selected}>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
            {move || match products.get() {
                None => view! { <p class="shop-status">"Loading products…"</p> }.into_any(),
                Some(listing) if listing.is_empty() => {
                    view! { <p class="shop-status">"No products found."</p> }.into_any()
                }
                Some(listing) => view! {
                    <ul class="product-grid">
                        {listing
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <ProductCard
                                        product=product
                                        navigate=navigate
                                        add_to_cart=add_to_cart
                                    />
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn ProductCard(
    product: ProductSummary,
    navigate: Callback<Page>,
    add_to_cart: Callback<NewLineItem>,
) -> impl IntoView {
    let item = NewLineItem::try_from(&product);
    let slug = product.slug.clone();
    let price = price_label(product.price, USD);

    if let Err(error) = &item {
        warn!("product {} cannot be added to the cart: {error}", product.slug);
    }

    let item = item.ok();
    let unavailable = item.is_none();

    view! {
        <li class="product-card">
            <img class="product-card-image" src=product.image alt=product.title.clone() />
            <h2 class="font-medium">{product.title}</h2>
            <p class="text-sm text-stone-600">{product.description}</p>
            <p class="product-card-price">{price}</p>
            <div class="flex gap-2">
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
                    "View"
                </button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_choices_map_to_filters() {
        let filters: Vec<CategoryFilter> = CATEGORIES
            .iter()
            .map(|(value, _)| CategoryFilter::from_param(value))
            .collect();

        assert_eq!(
            filters,
            vec![
                CategoryFilter::all(),
                CategoryFilter::only("gel"),
                CategoryFilter::only("capsules"),
                CategoryFilter::only("powder"),
            ]
        );
    }
}
