// ui/src/components/layout/header.rs
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::prelude::IntoAny;
use leptos::prelude::Memo;
use leptos::prelude::OnAttribute;
use leptos::prelude::Show;
use leptos::prelude::{Get, RwSignal, Set};
use leptos::{IntoView, component, view};
use leptos_use::use_window_scroll;

use crate::icons::{Icon, IconId};
use crate::motion::{Entrance, RevealVariant};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: Option<&'static str>,
    pub children: &'static [NavLink],
}

// The services sub-links point at paths no route serves; they fall through
// to the 404 view. Kept verbatim from the site copy until the service pages
// land.
pub static SERVICES: [NavLink; 4] = [
    NavLink { label: "Web Design", path: "/services/web-design" },
    NavLink { label: "Web Development", path: "/services/web-development" },
    NavLink { label: "Mobile Apps", path: "/services/mobile-apps" },
    NavLink { label: "UI/UX Design", path: "/services/ui-ux-design" },
];

pub static NAV: [NavEntry; 5] = [
    NavEntry { label: "Home", path: Some("/"), children: &[] },
    NavEntry { label: "About", path: Some("/about"), children: &[] },
    NavEntry { label: "Services", path: None, children: &SERVICES },
    NavEntry { label: "Projects", path: Some("/projects"), children: &[] },
    NavEntry { label: "Contact", path: Some("/contact"), children: &[] },
];

const SCROLL_THRESHOLD: f64 = 50.0;

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLL_THRESHOLD);

    let menu_open = RwSignal::new(false);
    let services_open = RwSignal::new(false);

    let desktop_items = NAV
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let delay = (i as u32) * 100;
            if entry.children.is_empty() {
                let path = entry.path.unwrap_or("/");
                view! {
                    <Entrance variant=RevealVariant::FadeDown delay_ms=delay>
                        <a
                            href=path
                            class="relative py-2 text-lg font-medium text-white transition-colors duration-300 hover:text-primary"
                        >{entry.label}</a>
                    </Entrance>
                }
                .into_any()
            } else {
                view! {
                    <div
                        class="relative"
                        on:mouseenter=move |_| services_open.set(true)
                        on:mouseleave=move |_| services_open.set(false)
                    >
                        <Entrance variant=RevealVariant::FadeDown delay_ms=delay>
                            <span class="flex cursor-pointer items-center gap-2 py-2 text-lg font-medium text-white transition-colors duration-300 hover:text-primary">
                                {entry.label}
                                <span
                                    class="inline-block transition-transform duration-300"
                                    class=("rotate-180", move || services_open.get())
                                >
                                    <Icon id=IconId::ChevronDown/>
                                </span>
                            </span>
                        </Entrance>
                        <Show when=move || services_open.get()>
                            <div class="absolute left-1/2 top-full mt-4 min-w-[200px] -translate-x-1/2 rounded-lg bg-black/95 py-4 shadow-xl backdrop-blur">
                                {entry
                                    .children
                                    .iter()
                                    .map(|link| view! {
                                        <a
                                            href=link.path
                                            class="block px-6 py-3 font-medium text-white transition-all duration-300 hover:translate-x-1 hover:text-primary"
                                            on:click=move |_| services_open.set(false)
                                        >{link.label}</a>
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                }
                .into_any()
            }
        })
        .collect_view();

    // Rebuilt on every open; the overlay is unmounted while closed.
    let mobile_items = move || NAV
        .iter()
        .map(|entry| {
            if entry.children.is_empty() {
                let path = entry.path.unwrap_or("/");
                view! {
                    <a
                        href=path
                        class="text-xl font-medium text-white hover:text-primary"
                        on:click=move |_| menu_open.set(false)
                    >{entry.label}</a>
                }
                .into_any()
            } else {
                view! {
                    <div class="text-center">
                        <h3 class="mb-4 bg-gradient-to-r from-primary to-secondary bg-clip-text text-xl font-semibold text-transparent">
                            {entry.label}
                        </h3>
                        <div class="flex flex-col gap-3">
                            {entry
                                .children
                                .iter()
                                .map(|link| view! {
                                    <a
                                        href=link.path
                                        class="text-white/80 hover:text-white"
                                        on:click=move |_| menu_open.set(false)
                                    >{link.label}</a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <header
            class="fixed inset-x-0 top-0 z-50 flex items-center justify-between px-8 backdrop-blur transition-all duration-300"
            class=("py-4", move || !scrolled.get())
            class=("bg-black/70", move || !scrolled.get())
            class=("py-2", move || scrolled.get())
            class=("bg-black/90", move || scrolled.get())
            class=("shadow-xl", move || scrolled.get())
        >
            <Entrance variant=RevealVariant::FadeDown duration_ms=500>
                <a href="/" class="text-3xl font-bold tracking-tight text-white">
                    <span class="bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
                        "Makers"
                    </span>
                </a>
            </Entrance>

            <nav class="hidden items-center gap-10 md:flex">
                {desktop_items}
            </nav>

            <button
                class="flex h-11 w-11 items-center justify-center rounded-full bg-white/10 text-2xl text-white transition-all duration-300 hover:bg-white/20 md:hidden"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.set(!menu_open.get())
            >
                {move || {
                    let id = if menu_open.get() { IconId::Close } else { IconId::Menu };
                    view! { <Icon id/> }
                }}
            </button>

            <Show when=move || menu_open.get()>
                <nav class="fixed inset-0 z-40 flex flex-col items-center justify-center gap-10 bg-black/95 backdrop-blur md:hidden">
                    {mobile_items}
                </nav>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::{NAV, SERVICES};
    use crate::routes::Page;

    #[test]
    fn top_level_entries_resolve_to_registered_pages() {
        for entry in NAV.iter().filter(|e| e.children.is_empty()) {
            let path = entry.path.expect("leaf nav entry must carry a path");
            assert!(Page::from_path(path).is_some(), "{path} is not routed");
        }
    }

    #[test]
    fn services_dropdown_has_four_unrouted_targets() {
        assert_eq!(SERVICES.len(), 4);
        for link in SERVICES {
            assert!(link.path.starts_with("/services/"));
            assert!(Page::from_path(link.path).is_none());
        }
    }

    #[test]
    fn nav_labels_are_unique() {
        for (i, a) in NAV.iter().enumerate() {
            for b in &NAV[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
