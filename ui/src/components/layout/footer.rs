// ui/src/components/layout/footer.rs
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use crate::icons::{Icon, IconId};
use crate::motion::Reveal;

static QUICK_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About Us", "/about"),
    ("Services", "/services"),
    ("Projects", "/projects"),
    ("Contact", "/contact"),
];

static SOCIAL: [(IconId, &str); 5] = [
    (IconId::Facebook, "https://facebook.com"),
    (IconId::Twitter, "https://twitter.com"),
    (IconId::Instagram, "https://instagram.com"),
    (IconId::Linkedin, "https://linkedin.com"),
    (IconId::Github, "https://github.com"),
];

static CONTACT_INFO: [(IconId, &str); 3] = [
    (IconId::MapPin, "123 Animation Street, New York, 10001"),
    (IconId::Phone, "+1 (555) 123-4567"),
    (IconId::Mail, "info@makers.studio"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let socials = SOCIAL
        .iter()
        .map(|&(id, href)| view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="flex h-11 w-11 items-center justify-center rounded-full bg-white/10 text-xl text-white transition-all duration-300 hover:-translate-y-1 hover:bg-gradient-to-r hover:from-primary hover:to-secondary"
            >
                <Icon id/>
            </a>
        })
        .collect_view();

    let quick_links = QUICK_LINKS
        .iter()
        .map(|&(label, path)| view! {
            <a
                href=path
                class="w-fit text-white/80 transition-all duration-300 hover:translate-x-2 hover:text-white"
            >{label}</a>
        })
        .collect_view();

    let contact_items = CONTACT_INFO
        .iter()
        .map(|&(id, text)| view! {
            <div class="mb-5 flex items-center gap-4 text-white/80 transition-all duration-300 hover:-translate-y-0.5 hover:text-white">
                <span class="flex h-9 w-9 shrink-0 items-center justify-center rounded-full bg-gradient-to-r from-primary to-secondary text-white">
                    <Icon id/>
                </span>
                <p>{text}</p>
            </div>
        })
        .collect_view();

    view! {
        <footer class="relative overflow-hidden bg-gradient-to-r from-[#000428] to-[#004e92] px-8 pb-8 pt-24 text-white">
            <div class="relative z-[1] mx-auto grid max-w-6xl grid-cols-1 gap-16 sm:grid-cols-2 lg:grid-cols-4">
                <Reveal>
                    <h2 class="mb-5 text-3xl font-bold">
                        <span class="bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
                            "Makers"
                        </span>
                    </h2>
                    <p class="mb-6 leading-relaxed text-white/70">
                        "Creating beautiful and functional websites with stunning animations \
                         and intuitive interfaces that transform your digital presence."
                    </p>
                    <div class="flex gap-4">
                        {socials}
                    </div>
                </Reveal>

                <Reveal delay_ms=200>
                    <h3 class="mb-6 text-xl font-semibold">"Quick Links"</h3>
                    <nav class="flex flex-col gap-4">
                        {quick_links}
                    </nav>
                </Reveal>

                <Reveal delay_ms=300>
                    <h3 class="mb-6 text-xl font-semibold">"Contact Info"</h3>
                    {contact_items}
                </Reveal>

                <Reveal delay_ms=400>
                    <h3 class="mb-6 text-xl font-semibold">"Subscribe"</h3>
                    <p class="mb-4 leading-relaxed text-white/70">
                        "Stay updated with our latest news, updates, and exclusive offers."
                    </p>
                    // Input is a stub: nothing is wired to submit it anywhere.
                    <form class="relative flex">
                        <input
                            type="email"
                            placeholder="Your email address"
                            class="grow rounded-lg border border-white/10 bg-white/10 px-5 py-4 text-white outline-none backdrop-blur transition-all duration-300 placeholder:text-white/50 focus:bg-white/15"
                        />
                        <button
                            type="button"
                            class="absolute bottom-2 right-2 top-2 flex items-center justify-center gap-2 rounded-md bg-gradient-to-r from-primary to-secondary px-5 font-semibold text-white transition-all duration-300 hover:opacity-90"
                        >
                            <span>"Subscribe"</span>
                            <Icon id=IconId::ArrowRight/>
                        </button>
                    </form>
                </Reveal>
            </div>

            <div class="relative z-[1] mt-16 border-t border-white/10 pt-10 text-center text-sm text-white/70">
                <p>"© 2025 Makers. All rights reserved."</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::{CONTACT_INFO, QUICK_LINKS, SOCIAL};

    #[test]
    fn quick_links_cover_every_nav_label() {
        let labels: Vec<_> = QUICK_LINKS.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Home", "About Us", "Services", "Projects", "Contact"]);
    }

    #[test]
    fn social_and_contact_tables_are_populated() {
        assert_eq!(SOCIAL.len(), 5);
        assert_eq!(CONTACT_INFO.len(), 3);
        for (_, href) in SOCIAL {
            assert!(href.starts_with("https://"));
        }
    }
}
