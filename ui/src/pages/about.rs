// ui/src/pages/about.rs
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

use crate::components::ui::card::Card;
use crate::icons::IconId;
use crate::motion::Entrance;

pub struct Skill {
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SKILLS: [Skill; 4] = [
    Skill {
        icon: IconId::Palette,
        title: "Icon Design",
        description: "Creating unique, scalable icons that perfectly represent your brand and enhance user experience across all platforms.",
    },
    Skill {
        icon: IconId::Vector,
        title: "Vector Graphics",
        description: "Expert in creating clean, scalable vector graphics that maintain quality at any size, perfect for logos and icons.",
    },
    Skill {
        icon: IconId::Users,
        title: "Brand Research",
        description: "Understanding your brand and audience to create visual identities that resonate and create lasting connections.",
    },
    Skill {
        icon: IconId::Lightbulb,
        title: "Creative Strategy",
        description: "Developing comprehensive branding strategies that align with your business goals and market positioning.",
    },
];

#[component]
pub fn About() -> impl IntoView {
    let skills = SKILLS
        .iter()
        .enumerate()
        .map(|(i, skill)| view! {
            <Card title=skill.title icon=skill.icon delay_ms={(i as u32) * 100} class="text-center">
                <p>{skill.description}</p>
            </Card>
        })
        .collect_view();

    view! {
        <Title text="Makers — About"/>

        <section class="bg-neutral-50 px-8 py-24">
            <div class="mx-auto max-w-6xl">
                <Entrance duration_ms=800>
                    <h2 class="relative mb-12 text-center text-4xl font-bold text-neutral-900 after:absolute after:-bottom-3 after:left-1/2 after:h-1 after:w-20 after:-translate-x-1/2 after:rounded after:bg-gradient-to-r after:from-secondary after:to-primary after:content-['']">
                        "About Makers"
                    </h2>
                </Entrance>

                <Entrance duration_ms=800 delay_ms=200>
                    <div class="mx-auto max-w-[800px] text-center text-lg leading-loose text-neutral-500">
                        <p>
                            "At Makers, we're passionate about creating visual identities that \
                             make brands stand out. Our team of experienced designers \
                             specializes in crafting unique icons and comprehensive branding \
                             solutions that tell your story and connect with your audience."
                        </p>
                        <p class="mt-4">
                            "We believe that great design is more than just aesthetics - it's \
                             about creating meaningful connections and memorable experiences. \
                             Our approach combines creative excellence with strategic thinking \
                             to deliver results that drive business growth."
                        </p>
                    </div>
                </Entrance>

                <div class="mt-12 grid grid-cols-1 gap-8 sm:grid-cols-2 lg:grid-cols-4">
                    {skills}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::SKILLS;

    #[test]
    fn four_skills_each_fully_described() {
        assert_eq!(SKILLS.len(), 4);
        for skill in &SKILLS {
            assert!(!skill.title.is_empty());
            assert!(!skill.description.is_empty());
        }
    }

    #[test]
    fn skill_titles_are_unique() {
        for (i, a) in SKILLS.iter().enumerate() {
            for b in &SKILLS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
