// Browser-side rendering checks, run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::view;
use leptos_meta::provide_meta_context;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use makers_ui::components::layout::header::Header;
use makers_ui::components::ui::button::{Button, ButtonSize, ButtonVariant};
use makers_ui::icons::IconId;
use makers_ui::pages::about::About;
use makers_ui::pages::contact::Contact;
use makers_ui::pages::home::{Home, STATS};
use makers_ui::pages::projects::Projects;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn test_root() -> web_sys::HtmlElement {
    let document = document();
    if let Some(old) = document.get_element_by_id("test-root") {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id("test-root");
    document.body().unwrap().append_child(&root).unwrap();
    root.unchecked_into()
}

fn count_with_text(root: &web_sys::Element, selector: &str, text: &str) -> usize {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter(|node| node.text_content().unwrap_or_default().trim() == text)
        .count()
}

fn contains_text(root: &web_sys::Element, text: &str) -> bool {
    root.text_content().unwrap_or_default().contains(text)
}

async fn settle() {
    TimeoutFuture::new(100).await;
}

#[wasm_bindgen_test]
async fn home_renders_its_heading_once_and_all_stats() {
    let root = test_root();
    let _handle = mount_to(root.clone(), || {
        provide_meta_context();
        view! { <Home/> }
    });
    settle().await;

    assert_eq!(count_with_text(&root, "h1", "Makers"), 1);
    for (value, label) in STATS {
        assert!(contains_text(&root, value), "missing stat value {value}");
        assert!(contains_text(&root, label), "missing stat label {label}");
    }
}

#[wasm_bindgen_test]
async fn about_renders_its_heading_once_and_four_skill_cards() {
    let root = test_root();
    let _handle = mount_to(root.clone(), || {
        provide_meta_context();
        view! { <About/> }
    });
    settle().await;

    assert_eq!(count_with_text(&root, "h2", "About Makers"), 1);
    let cards = root.query_selector_all("article").unwrap();
    assert_eq!(cards.length(), 4);
}

#[wasm_bindgen_test]
async fn projects_page_renders_three_cards_with_tags() {
    let root = test_root();
    let _handle = mount_to(root.clone(), || {
        provide_meta_context();
        view! { <Projects/> }
    });
    settle().await;

    assert_eq!(count_with_text(&root, "h2", "Our Work"), 1);

    let cards = root.query_selector_all("article").unwrap();
    assert_eq!(cards.length(), 3);
    for i in 0..cards.length() {
        let card: web_sys::Element = cards.item(i).unwrap().unchecked_into();
        let tags = card.query_selector_all("span").unwrap();
        assert!(tags.length() > 0, "card {i} has no technology tags");
    }
}

#[wasm_bindgen_test]
async fn every_button_variant_and_size_renders_one_labelled_button() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Text,
        ButtonVariant::Gradient,
    ];
    let sizes = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    for variant in variants {
        for size in sizes {
            let root = test_root();
            let _handle = mount_to(root.clone(), || {
                view! {
                    <Button variant=variant size=size icon=IconId::ArrowRight>
                        "Press me"
                    </Button>
                }
            });
            settle().await;

            let buttons = root.query_selector_all("button").unwrap();
            assert_eq!(buttons.length(), 1, "{variant:?}/{size:?}");
            assert!(contains_text(&root, "Press me"));
            assert!(root.query_selector("i").unwrap().is_some(), "icon glyph missing");
        }
    }
}

#[wasm_bindgen_test]
async fn mobile_menu_toggle_is_idempotent() {
    let root = test_root();
    let _handle = mount_to(root.clone(), || view! { <Header/> });
    settle().await;

    let before = root.inner_html();
    let toggle: web_sys::HtmlElement = root
        .query_selector("button[aria-label='Toggle menu']")
        .unwrap()
        .unwrap()
        .unchecked_into();

    toggle.click();
    settle().await;
    assert!(
        root.query_selector("nav.fixed").unwrap().is_some(),
        "overlay missing after open"
    );

    toggle.click();
    settle().await;
    assert!(root.query_selector("nav.fixed").unwrap().is_none());
    assert_eq!(root.inner_html(), before);
}

#[wasm_bindgen_test]
async fn contact_form_submit_is_a_no_op() {
    let root = test_root();
    let _handle = mount_to(root.clone(), || {
        provide_meta_context();
        view! { <Contact/> }
    });
    settle().await;

    assert_eq!(count_with_text(&root, "h2", "Get In Touch"), 1);

    let form: web_sys::HtmlFormElement = root
        .query_selector("form")
        .unwrap()
        .unwrap()
        .unchecked_into();
    let event = web_sys::Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
    settle().await;

    // Nothing is wired to the form; the page must still be intact.
    assert_eq!(count_with_text(&root, "h2", "Get In Touch"), 1);
}
