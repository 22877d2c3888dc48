// ui/src/pages/home.rs
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::StyleAttribute;
use leptos::{IntoView, component, view};
use leptos_meta::Title;
use leptos_use::use_window_scroll;

use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::section::Section;
use crate::icons::{Icon, IconId};
use crate::motion::{Entrance, Reveal};

pub struct Service {
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 4] = [
    Service {
        icon: IconId::Palette,
        title: "Custom Icons",
        description: "Unique, scalable icons designed to perfectly represent your brand and enhance user experience.",
    },
    Service {
        icon: IconId::Brush,
        title: "Logo Design",
        description: "Professional logo creation that captures your brand essence and makes a lasting impression.",
    },
    Service {
        icon: IconId::Lightbulb,
        title: "Brand Identity",
        description: "Comprehensive branding solutions including color schemes, typography, and visual guidelines.",
    },
    Service {
        icon: IconId::Rocket,
        title: "Brand Strategy",
        description: "Strategic branding services to help your business stand out and connect with your audience.",
    },
];

pub static STATS: [(&str, &str); 4] = [
    ("500+", "Projects Completed"),
    ("50+", "Team Members"),
    ("10+", "Years Experience"),
    ("300+", "Happy Clients"),
];

static SOCIAL: [(IconId, &str); 3] = [
    (IconId::Github, "https://github.com"),
    (IconId::Linkedin, "https://linkedin.com"),
    (IconId::Twitter, "https://twitter.com"),
];

#[component]
pub fn Home() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    // Background drifts up at a fifth of the scroll speed and fades out.
    let parallax = move || {
        let y = scroll_y.get();
        format!(
            "transform: translateY({}px); opacity: {}",
            -y * 0.2,
            (1.0 - y / 1200.0).clamp(0.0, 1.0),
        )
    };

    let services = SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| view! {
            <Entrance delay_ms={600 + (i as u32) * 100} duration_ms=800>
                <div class="h-full rounded-2xl border border-white/10 bg-white/5 p-10 text-left backdrop-blur transition-all duration-300 hover:-translate-y-2 hover:border-white/20 hover:shadow-2xl">
                    <div class="mb-6 text-5xl text-secondary">
                        <Icon id=service.icon/>
                    </div>
                    <h3 class="mb-5 text-3xl font-semibold text-white">{service.title}</h3>
                    <p class="text-lg leading-relaxed text-neutral-400">{service.description}</p>
                </div>
            </Entrance>
        })
        .collect_view();

    let hero_stats = STATS
        .iter()
        .enumerate()
        .map(|(i, &(value, label))| view! {
            <Entrance delay_ms={1000 + (i as u32) * 100} duration_ms=800>
                <div class="rounded-2xl border border-white/10 bg-white/5 p-12 text-center backdrop-blur transition-all duration-300 hover:-translate-y-2 hover:shadow-2xl">
                    <div class="mb-4 bg-gradient-to-r from-primary to-secondary bg-clip-text text-6xl font-bold leading-none text-transparent">
                        {value}
                    </div>
                    <div class="text-lg font-medium text-white/80">{label}</div>
                </div>
            </Entrance>
        })
        .collect_view();

    let section_stats = STATS
        .iter()
        .enumerate()
        .map(|(i, &(value, label))| view! {
            <Reveal delay_ms={(i as u32) * 100}>
                <div class="p-8 text-center">
                    <div class="mb-4 bg-gradient-to-r from-primary to-secondary bg-clip-text text-6xl font-bold leading-none text-transparent">
                        {value}
                    </div>
                    <div class="text-lg font-medium text-white/80">{label}</div>
                </div>
            </Reveal>
        })
        .collect_view();

    let socials = SOCIAL
        .iter()
        .map(|&(id, href)| view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="text-3xl text-white transition-all duration-300 hover:-translate-y-1 hover:text-secondary"
            >
                <Icon id/>
            </a>
        })
        .collect_view();

    view! {
        <Title text="Makers — Icon & Branding Studio"/>

        <section class="relative flex min-h-screen items-center justify-center overflow-hidden bg-gradient-to-br from-neutral-900 to-neutral-800 p-8 text-white">
            <div class="absolute inset-0 z-0 overflow-hidden" style=parallax>
                <div class="animate-float absolute left-[10%] top-[10%] h-[300px] w-[300px] rounded-full bg-gradient-to-r from-secondary/10 to-primary/10 blur-3xl"></div>
                <div class="animate-float-reverse absolute right-[10%] top-[60%] h-[400px] w-[400px] rounded-full bg-gradient-to-r from-primary/10 to-accent/10 blur-3xl"></div>
            </div>

            <div class="relative z-[1] mx-auto max-w-[1400px] text-center">
                <Entrance duration_ms=800>
                    <h1 class="mb-6 bg-gradient-to-r from-secondary to-primary bg-clip-text text-7xl font-extrabold text-transparent">
                        "Makers"
                    </h1>
                </Entrance>
                <Entrance duration_ms=800 delay_ms=200>
                    <h2 class="mb-10 text-4xl font-normal text-neutral-400">
                        "Icon & Branding Studio"
                    </h2>
                </Entrance>
                <Entrance duration_ms=800 delay_ms=400>
                    <p class="mx-auto mb-12 max-w-[800px] text-xl leading-loose text-neutral-200">
                        "We craft unique icons and build powerful brands that tell your story \
                         and connect with your audience. Our creative studio specializes in \
                         creating memorable visual identities that stand out in the digital world."
                    </p>
                </Entrance>

                <Entrance duration_ms=800 delay_ms=600>
                    <div class="mt-12 flex justify-center gap-8">
                        {socials}
                    </div>
                </Entrance>

                <div class="mt-16 grid grid-cols-1 gap-10 sm:grid-cols-2 lg:grid-cols-4">
                    {services}
                </div>

                <div class="mt-20 grid grid-cols-1 gap-12 sm:grid-cols-2 lg:grid-cols-4">
                    {hero_stats}
                </div>
            </div>
        </section>

        <Section
            id="about"
            title="Why Choose Us"
            subtitle="We deliver exceptional results through our expertise and dedication"
            centered=true
            dark=true
        >
            <div class="grid grid-cols-1 gap-12 sm:grid-cols-2 lg:grid-cols-4">
                {section_stats}
            </div>
        </Section>

        <section class="relative overflow-hidden bg-gradient-to-r from-[#000428] to-[#004e92] px-8 py-24 text-center text-white">
            <div class="pointer-events-none absolute left-1/2 top-1/2 h-[500px] w-[500px] -translate-x-1/2 -translate-y-1/2 rounded-full bg-primary/40 opacity-70 blur-[100px]"></div>
            <div class="relative z-[2] mx-auto max-w-[800px] rounded-2xl border border-white/5 bg-black/20 p-12 shadow-2xl backdrop-blur">
                <Reveal>
                    <h2 class="mb-6 bg-gradient-to-r from-white to-neutral-300 bg-clip-text text-5xl font-bold text-transparent">
                        "Ready to Start Your Project?"
                    </h2>
                </Reveal>
                <Reveal delay_ms=100>
                    <p class="mb-10 text-xl leading-relaxed text-white/90">
                        "Let's work together to create something amazing. Contact us today to \
                         discuss your ideas and transform your vision into reality!"
                    </p>
                </Reveal>
                <Reveal delay_ms=200 class="flex justify-center">
                    <a href="/contact">
                        <Button
                            variant=ButtonVariant::Gradient
                            size=ButtonSize::Large
                            icon=IconId::ArrowRight
                        >
                            "Contact Us"
                        </Button>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{SERVICES, STATS};

    #[test]
    fn stats_carry_the_published_figures() {
        assert_eq!(
            STATS,
            [
                ("500+", "Projects Completed"),
                ("50+", "Team Members"),
                ("10+", "Years Experience"),
                ("300+", "Happy Clients"),
            ]
        );
    }

    #[test]
    fn four_services_each_fully_described() {
        assert_eq!(SERVICES.len(), 4);
        for service in &SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
        }
    }
}
