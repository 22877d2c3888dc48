// ui/src/motion.rs
//
// Declarative entrance transitions: each variant is a pair of inline-style
// keyframes keyed by `MotionState`, applied through a plain CSS transition.
// `Reveal` flips state when the element first scrolls into view, `Entrance`
// flips it right after mount.
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::NodeRef;
use leptos::prelude::NodeRefAttribute;
use leptos::prelude::StyleAttribute;
use leptos::prelude::{Children, Effect, Get, RwSignal, Set};
use leptos::{IntoView, component, view};
use leptos_use::use_intersection_observer;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MotionState {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealVariant {
    Fade,
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
}

impl RevealVariant {
    pub fn style(self, state: MotionState) -> &'static str {
        match state {
            MotionState::Visible => "opacity: 1; transform: none",
            MotionState::Hidden => match self {
                RevealVariant::Fade => "opacity: 0",
                RevealVariant::FadeUp => "opacity: 0; transform: translateY(30px)",
                RevealVariant::FadeDown => "opacity: 0; transform: translateY(-30px)",
                RevealVariant::FadeLeft => "opacity: 0; transform: translateX(-30px)",
                RevealVariant::FadeRight => "opacity: 0; transform: translateX(30px)",
                RevealVariant::Scale => "opacity: 0; transform: scale(0.8)",
            },
        }
    }
}

pub fn transition_css(duration_ms: u32, delay_ms: u32) -> String {
    format!(
        "transition: opacity {duration_ms}ms cubic-bezier(0.25, 0.1, 0.25, 1) {delay_ms}ms, \
         transform {duration_ms}ms cubic-bezier(0.25, 0.1, 0.25, 1) {delay_ms}ms; "
    )
}

/// Plays its entrance transition when the wrapper first scrolls into view.
/// With `once` (the default) the transition never replays on re-entry.
#[component]
pub fn Reveal(
    #[prop(optional)] variant: RevealVariant,
    #[prop(default = 600)] duration_ms: u32,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(default = true)] once: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target: NodeRef<html::Div> = NodeRef::new();
    let visible = RwSignal::new(false);

    use_intersection_observer(target, move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
        if entries.iter().any(|e| e.is_intersecting()) {
            visible.set(true);
        } else if !once {
            visible.set(false);
        }
    });

    let style = move || {
        let state = if visible.get() { MotionState::Visible } else { MotionState::Hidden };
        format!("{}{}", transition_css(duration_ms, delay_ms), variant.style(state))
    };

    view! {
        <div node_ref=target class=class style=style>
            {children()}
        </div>
    }
}

/// Plays its entrance transition once, right after mount. One timer tick of
/// deferral so the browser paints the hidden state first.
#[component]
pub fn Entrance(
    #[prop(optional)] variant: RevealVariant,
    #[prop(default = 600)] duration_ms: u32,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        Timeout::new(30, move || visible.set(true)).forget();
    });

    let style = move || {
        let state = if visible.get() { MotionState::Visible } else { MotionState::Hidden };
        format!("{}{}", transition_css(duration_ms, delay_ms), variant.style(state))
    };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{MotionState, RevealVariant, transition_css};

    #[test]
    fn visible_state_is_shared_across_variants() {
        let variants = [
            RevealVariant::Fade,
            RevealVariant::FadeUp,
            RevealVariant::FadeDown,
            RevealVariant::FadeLeft,
            RevealVariant::FadeRight,
            RevealVariant::Scale,
        ];
        for v in variants {
            assert_eq!(v.style(MotionState::Visible), "opacity: 1; transform: none");
        }
    }

    #[test]
    fn hidden_states_are_distinct_per_variant() {
        let variants = [
            RevealVariant::Fade,
            RevealVariant::FadeUp,
            RevealVariant::FadeDown,
            RevealVariant::FadeLeft,
            RevealVariant::FadeRight,
            RevealVariant::Scale,
        ];
        for (i, a) in variants.iter().enumerate() {
            assert!(a.style(MotionState::Hidden).starts_with("opacity: 0"));
            for b in &variants[i + 1..] {
                assert_ne!(a.style(MotionState::Hidden), b.style(MotionState::Hidden));
            }
        }
    }

    #[test]
    fn transition_css_carries_duration_and_delay() {
        let css = transition_css(600, 150);
        assert!(css.contains("opacity 600ms"));
        assert!(css.contains("transform 600ms"));
        assert!(css.contains("150ms"));
    }

    #[test]
    fn default_variant_slides_up() {
        assert_eq!(RevealVariant::default(), RevealVariant::FadeUp);
    }
}
