// ui/src/components/ui/section.rs
use leptos::prelude::Children;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::{IntoView, component, view};

use crate::motion::{Reveal, RevealVariant};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TitleGradient {
    #[default]
    Primary,
    Secondary,
    Accent,
    None,
}

impl TitleGradient {
    pub fn classes(self) -> &'static str {
        match self {
            TitleGradient::Primary => {
                "bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent"
            }
            TitleGradient::Secondary => {
                "bg-gradient-to-r from-secondary to-accent bg-clip-text text-transparent"
            }
            TitleGradient::Accent => {
                "bg-gradient-to-r from-accent to-primary bg-clip-text text-transparent"
            }
            TitleGradient::None => "",
        }
    }
}

/// Full-width page band with an optional revealed title block. The heading
/// reveal fires once per mount, like every other entrance on the site.
#[component]
pub fn Section(
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(default = false)] centered: bool,
    #[prop(default = false)] dark: bool,
    #[prop(default = false)] full_height: bool,
    #[prop(optional)] title_gradient: TitleGradient,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let band = format!(
        "relative flex flex-col justify-center px-8 py-28 {} {} {class}",
        if dark { "bg-neutral-900 text-white" } else { "bg-white text-neutral-800" },
        if full_height { "min-h-screen" } else { "" },
    );
    let inner = format!(
        "relative z-[2] mx-auto w-full max-w-6xl {}",
        if centered { "text-center" } else { "text-left" },
    );
    let subtitle_tint = if dark { "text-white/70" } else { "text-black/60" };
    let has_heading = title.is_some() || subtitle.is_some();

    view! {
        <section id=id class=band>
            <div class=inner>
                {has_heading.then(|| view! {
                    <Reveal class="mb-16">
                        {title.map(|t| view! {
                            <h2 class=format!(
                                "mb-6 inline-block text-5xl font-bold {}",
                                title_gradient.classes()
                            )>{t}</h2>
                        })}
                        {subtitle.map(|s| view! {
                            <p class=format!(
                                "mx-auto max-w-[700px] text-xl leading-relaxed {subtitle_tint}"
                            )>{s}</p>
                        })}
                    </Reveal>
                })}
                <Reveal variant=RevealVariant::FadeUp delay_ms=100>
                    {children()}
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::TitleGradient;

    #[test]
    fn gradients_resolve_to_distinct_classes() {
        let all = [
            TitleGradient::Primary,
            TitleGradient::Secondary,
            TitleGradient::Accent,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(a.classes().contains("bg-clip-text"));
            for b in &all[i + 1..] {
                assert_ne!(a.classes(), b.classes());
            }
        }
        assert!(TitleGradient::None.classes().is_empty());
    }
}
