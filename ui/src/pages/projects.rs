// ui/src/pages/projects.rs
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

use crate::motion::{Reveal, RevealVariant};

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Tech Startup Branding",
        description: "Created a complete brand identity for a tech startup, including logo, icons, and brand guidelines. The project focused on creating a modern, innovative visual language that resonates with tech-savvy audiences.",
        image: "/assets/img/project-startup.jpg",
        tech: &["Logo Design", "Brand Identity", "Icon Set", "Visual Strategy"],
    },
    Project {
        title: "E-commerce Icon Set",
        description: "Designed a comprehensive icon set for an e-commerce platform, focusing on clarity and user experience. The icons were created with scalability and consistency in mind, ensuring perfect display across all devices.",
        image: "/assets/img/project-icons.jpg",
        tech: &["Icon Design", "Vector Graphics", "UI/UX", "Design Systems"],
    },
    Project {
        title: "Corporate Rebranding",
        description: "Led a complete rebranding project for a corporate client, including new logo and visual identity. The project involved extensive research and strategy development to create a fresh, modern brand presence.",
        image: "/assets/img/project-rebrand.jpg",
        tech: &["Brand Strategy", "Logo Design", "Visual Identity", "Brand Guidelines"],
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let tags = project
                .tech
                .iter()
                .enumerate()
                .map(|(j, tag)| view! {
                    <Reveal
                        variant=RevealVariant::Scale
                        duration_ms=300
                        delay_ms={(j as u32) * 100}
                        class="inline-block"
                    >
                        <span class="rounded-full bg-gradient-to-r from-neutral-100 to-neutral-200 px-4 py-2 text-sm font-medium text-secondary shadow-sm transition-all duration-300 hover:-translate-y-0.5 hover:shadow-md">
                            {*tag}
                        </span>
                    </Reveal>
                })
                .collect_view();

            view! {
                <Reveal duration_ms=800 delay_ms={(i as u32) * 200} class="h-full">
                    <article class="relative h-full overflow-hidden rounded-2xl border border-white/20 bg-white/90 p-10 shadow-xl backdrop-blur transition-all duration-300 hover:-translate-y-2 hover:shadow-2xl">
                        <div class="mb-8 h-[250px] overflow-hidden rounded-xl">
                            <img
                                src=project.image
                                alt=project.title
                                class="h-full w-full object-cover transition-transform duration-500 hover:scale-105"
                            />
                        </div>
                        <div class="text-left">
                            <h3 class="mb-6 bg-gradient-to-r from-neutral-900 to-secondary bg-clip-text text-3xl font-bold text-transparent">
                                {project.title}
                            </h3>
                            <p class="mb-6 text-lg leading-relaxed text-neutral-500">
                                {project.description}
                            </p>
                            <div class="flex flex-wrap gap-3">
                                {tags}
                            </div>
                        </div>
                    </article>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <Title text="Makers — Our Work"/>

        <section class="relative flex min-h-screen items-center overflow-hidden bg-gradient-to-br from-neutral-50 to-neutral-100 px-8 py-32">
            <div class="pointer-events-none absolute inset-0 z-0">
                <div class="animate-float absolute left-[10%] top-[10%] h-[200px] w-[200px] rounded-full bg-gradient-to-r from-secondary/10 to-primary/10 blur-3xl"></div>
                <div class="animate-float-reverse absolute right-[10%] top-[60%] h-[200px] w-[200px] rounded-full bg-gradient-to-r from-primary/10 to-accent/10 blur-3xl"></div>
            </div>

            <div class="relative z-[1] mx-auto max-w-[1400px]">
                <Reveal duration_ms=800>
                    <h2 class="relative mb-16 text-center text-6xl font-extrabold text-neutral-900 after:absolute after:-bottom-4 after:left-1/2 after:h-1 after:w-24 after:-translate-x-1/2 after:rounded after:bg-gradient-to-r after:from-secondary after:to-primary after:content-['']">
                        "Our Work"
                    </h2>
                </Reveal>

                <div class="mt-16 grid grid-cols-1 gap-12 md:grid-cols-2 xl:grid-cols-3">
                    {cards}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::PROJECTS;

    #[test]
    fn exactly_three_projects_with_tech_tags() {
        assert_eq!(PROJECTS.len(), 3);
        for project in &PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.tech.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn project_images_are_served_from_assets() {
        for project in &PROJECTS {
            assert!(project.image.starts_with("/assets/"));
        }
    }
}
