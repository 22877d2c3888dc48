// ui/src/pages/contact.rs
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::prelude::OnAttribute;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

use crate::components::ui::button::{Button, ButtonVariant};
use crate::icons::{Icon, IconId};
use crate::motion::{Entrance, RevealVariant};

pub static INFO: [(IconId, &str, &str); 3] = [
    (IconId::Mail, "Email", "contact@makers.studio"),
    (IconId::Phone, "Phone", "+1 (123) 456-7890"),
    (IconId::MapPin, "Location", "New York, NY, USA"),
];

#[component]
pub fn Contact() -> impl IntoView {
    let info_items = INFO
        .iter()
        .map(|&(id, heading, value)| view! {
            <div class="mb-6 flex items-center gap-4">
                <span class="text-2xl text-secondary">
                    <Icon id/>
                </span>
                <div>
                    <h3 class="mb-1 text-xl font-semibold text-neutral-900">{heading}</h3>
                    <p class="text-neutral-500">{value}</p>
                </div>
            </div>
        })
        .collect_view();

    view! {
        <Title text="Makers — Get In Touch"/>

        <section class="bg-neutral-50 px-8 py-24">
            <div class="mx-auto max-w-6xl">
                <Entrance duration_ms=800>
                    <h2 class="relative mb-12 text-center text-4xl font-bold text-neutral-900 after:absolute after:-bottom-3 after:left-1/2 after:h-1 after:w-20 after:-translate-x-1/2 after:rounded after:bg-gradient-to-r after:from-secondary after:to-primary after:content-['']">
                        "Get In Touch"
                    </h2>
                </Entrance>

                <div class="mt-12 grid grid-cols-1 gap-8 md:grid-cols-2">
                    <Entrance variant=RevealVariant::FadeLeft duration_ms=800>
                        <div class="h-full rounded-xl bg-white p-8 shadow-md">
                            {info_items}
                        </div>
                    </Entrance>

                    <Entrance variant=RevealVariant::FadeRight duration_ms=800>
                        // No backend to post to; submit only suppresses the
                        // browser's default navigation.
                        <form
                            class="rounded-xl bg-white p-8 shadow-md"
                            on:submit=move |ev| ev.prevent_default()
                        >
                            <div class="mb-6">
                                <label class="mb-2 block font-medium text-neutral-900">"Name"</label>
                                <input
                                    type="text"
                                    placeholder="Your name"
                                    class="w-full rounded-md border border-neutral-300 p-3 text-base outline-none transition-colors duration-300 focus:border-secondary"
                                />
                            </div>
                            <div class="mb-6">
                                <label class="mb-2 block font-medium text-neutral-900">"Email"</label>
                                <input
                                    type="email"
                                    placeholder="Your email"
                                    class="w-full rounded-md border border-neutral-300 p-3 text-base outline-none transition-colors duration-300 focus:border-secondary"
                                />
                            </div>
                            <div class="mb-6">
                                <label class="mb-2 block font-medium text-neutral-900">"Subject"</label>
                                <input
                                    type="text"
                                    placeholder="Subject"
                                    class="w-full rounded-md border border-neutral-300 p-3 text-base outline-none transition-colors duration-300 focus:border-secondary"
                                />
                            </div>
                            <div class="mb-6">
                                <label class="mb-2 block font-medium text-neutral-900">"Message"</label>
                                <textarea
                                    placeholder="Your message"
                                    class="min-h-[150px] w-full resize-y rounded-md border border-neutral-300 p-3 text-base outline-none transition-colors duration-300 focus:border-secondary"
                                ></textarea>
                            </div>
                            <Button variant=ButtonVariant::Gradient button_type="submit">
                                "Send Message"
                            </Button>
                        </form>
                    </Entrance>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::INFO;

    #[test]
    fn contact_channels_are_listed_once_each() {
        assert_eq!(INFO.len(), 3);
        let headings: Vec<_> = INFO.iter().map(|(_, h, _)| *h).collect();
        assert_eq!(headings, ["Email", "Phone", "Location"]);
    }
}
