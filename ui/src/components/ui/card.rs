// ui/src/components/ui/card.rs
use leptos::prelude::ClassAttribute;
use leptos::prelude::Children;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use crate::icons::{Icon, IconId};
use crate::motion::Reveal;

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] icon: Option<IconId>,
    #[prop(default = true)] hover: bool,
    #[prop(default = false)] featured: bool,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let surface = if featured {
        "bg-gradient-to-br from-white to-neutral-100 shadow-xl ring-1 ring-primary/10"
    } else {
        "bg-white shadow-md"
    };
    let lift = if hover {
        "cursor-pointer hover:-translate-y-3 hover:shadow-xl"
    } else {
        ""
    };
    let icon_tint = if featured { "text-accent" } else { "text-primary" };

    view! {
        <Reveal delay_ms=delay_ms class="h-full">
            <article class=format!(
                "relative h-full overflow-hidden rounded-2xl p-10 transition-all duration-300 {surface} {lift} {class}"
            )>
                {icon.map(|id| view! {
                    <div class="mb-7 flex items-center justify-center">
                        <div class=format!(
                            "flex h-[70px] w-[70px] items-center justify-center rounded-[20px] \
                             bg-gradient-to-br from-primary/10 to-secondary/10 text-3xl {icon_tint}"
                        )>
                            <Icon id/>
                        </div>
                    </div>
                })}
                {title.map(|t| view! {
                    <header class="mb-6">
                        <h3 class=format!(
                            "text-2xl font-semibold {}",
                            if featured { "text-accent" } else { "text-neutral-800" }
                        )>{t}</h3>
                    </header>
                })}
                <div class="text-[1.05rem] leading-relaxed text-neutral-500">
                    {children()}
                </div>
            </article>
        </Reveal>
    }
}
