// ui/src/components/ui/button.rs
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::OnAttribute;
use leptos::prelude::{Callable, Callback, Children};
use leptos::{IntoView, component, view};

use crate::icons::{Icon, IconId};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Text,
    Gradient,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IconSide {
    #[default]
    Left,
    Right,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary text-white border-0",
            ButtonVariant::Secondary => "bg-black/80 text-white border-0",
            ButtonVariant::Outline => {
                "bg-transparent text-primary border-2 border-primary hover:enabled:bg-primary/5"
            }
            ButtonVariant::Text => {
                "bg-transparent text-primary border-0 hover:enabled:underline hover:enabled:translate-y-0 hover:enabled:shadow-none"
            }
            ButtonVariant::Gradient => {
                "bg-gradient-to-r from-primary to-secondary text-white border-0"
            }
        }
    }
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-5 py-2 text-sm",
            ButtonSize::Medium => "px-7 py-3 text-base",
            ButtonSize::Large => "px-10 py-4 text-lg",
        }
    }
}

impl IconSide {
    pub fn classes(self) -> &'static str {
        match self {
            IconSide::Left => "flex-row",
            IconSide::Right => "flex-row-reverse",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-3 font-semibold \
     rounded-lg tracking-wide cursor-pointer transition-all duration-300 \
     hover:enabled:-translate-y-0.5 hover:enabled:shadow-lg active:enabled:translate-y-0 \
     disabled:opacity-60 disabled:cursor-not-allowed";

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] icon: Option<IconId>,
    #[prop(optional)] icon_side: IconSide,
    #[prop(default = false)] full_width: bool,
    #[prop(default = false)] disabled: bool,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "{BASE_CLASSES} {} {} {} {} {}",
        variant.classes(),
        size.classes(),
        icon_side.classes(),
        if full_width { "w-full" } else { "w-auto" },
        class,
    );

    view! {
        <button
            type=button_type
            class=classes
            disabled=disabled
            on:click=move |_| {
                if !disabled {
                    if let Some(cb) = on_press {
                        cb.run(());
                    }
                }
            }
        >
            {icon.map(|id| view! { <Icon id class="text-[1.2em]"/> })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::{ButtonSize, ButtonVariant, IconSide};

    const VARIANTS: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Text,
        ButtonVariant::Gradient,
    ];

    const SIZES: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    #[test]
    fn every_variant_resolves_to_distinct_classes() {
        for (i, a) in VARIANTS.iter().enumerate() {
            assert!(!a.classes().is_empty());
            for b in &VARIANTS[i + 1..] {
                assert_ne!(a.classes(), b.classes());
            }
        }
    }

    #[test]
    fn every_size_resolves_to_distinct_classes() {
        for (i, a) in SIZES.iter().enumerate() {
            assert!(a.classes().contains("px-"));
            for b in &SIZES[i + 1..] {
                assert_ne!(a.classes(), b.classes());
            }
        }
    }

    #[test]
    fn defaults_match_the_documented_options() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
        assert_eq!(IconSide::default(), IconSide::Left);
    }

    #[test]
    fn icon_side_flips_flex_direction() {
        assert_eq!(IconSide::Left.classes(), "flex-row");
        assert_eq!(IconSide::Right.classes(), "flex-row-reverse");
    }
}
