use leptos::prelude::*;
use organimo::{cart::Cart, products::CategoryFilter};

use crate::Page;

/// Badge text for the cart button; hidden when the cart is empty.
fn badge_text(item_count: u32) -> Option<String> {
    match item_count {
        0 => None,
        1..=99 => Some(item_count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Top navigation with the cart button, plus a floating cart button for
/// small screens.
#[component]
pub fn Navbar(
    /// Cart contents, read-only.
    #[prop(into)]
    cart: Signal<Cart>,
    /// Switch the displayed page.
    navigate: Callback<Page>,
    /// Reveal the cart drawer.
    open_drawer: Callback<()>,
) -> impl IntoView {
    let badge = move || badge_text(cart.with(Cart::item_count));

    let cart_label = move || {
        let count = cart.with(Cart::item_count);

        if count == 1 {
            "Open cart, 1 item".to_string()
        } else {
            format!("Open cart, {count} items")
        }
    };

    view! {
        <header class="navbar">
            <nav class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3">
                <button
                    type="button"
                    class="navbar-brand"
                    on:click=move |_| navigate.run(Page::Home)
                >
                    "Organimo"
                </button>
                <div class="flex items-center gap-4">
                    <button
                        type="button"
                        class="navbar-link"
                        on:click=move |_| navigate.run(Page::Shop(CategoryFilter::all()))
                    >
                        "Shop"
                    </button>
                    <button
                        type="button"
                        class="navbar-cart"
                        aria-label=cart_label
                        on:click=move |_| open_drawer.run(())
                    >
                        "Cart"
                        {move || {
                            badge()
                                .map(|text| view! { <span class="navbar-badge">{text}</span> })
                        }}
                    </button>
                </div>
            </nav>
        </header>
        <button
            type="button"
            class="cart-fab md:hidden"
            aria-label=cart_label
            on:click=move |_| open_drawer.run(())
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <circle cx="8" cy="21" r="1"></circle>
                <circle cx="19" cy="21" r="1"></circle>
                <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"></path>
            </svg>
            {move || badge().map(|text| view! { <span class="cart-fab-badge">{text}</span> })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_has_no_badge() {
        assert_eq!(badge_text(0), None);
    }

    #[test]
    fn badge_shows_unit_count() {
        assert_eq!(badge_text(3).as_deref(), Some("3"));
        assert_eq!(badge_text(99).as_deref(), Some("99"));
    }

    #[test]
    fn badge_caps_large_counts() {
        assert_eq!(badge_text(150).as_deref(), Some("99+"));
    }
}
