// ui/src/icons.rs
//
// Glyphs come from the Remix Icon webfont (stylesheet attached in `App`);
// each id maps to one font class rendered on an <i> element.
use leptos::prelude::ClassAttribute;
use leptos::{IntoView, component, view};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconId {
    Menu,
    Close,
    ChevronDown,
    Mail,
    Phone,
    MapPin,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Github,
    ArrowRight,
    Palette,
    Brush,
    Lightbulb,
    Rocket,
    Vector,
    Users,
}

impl IconId {
    pub fn glyph_class(self) -> &'static str {
        match self {
            IconId::Menu => "ri-menu-line",
            IconId::Close => "ri-close-line",
            IconId::ChevronDown => "ri-arrow-down-s-line",
            IconId::Mail => "ri-mail-line",
            IconId::Phone => "ri-phone-line",
            IconId::MapPin => "ri-map-pin-line",
            IconId::Facebook => "ri-facebook-line",
            IconId::Twitter => "ri-twitter-line",
            IconId::Instagram => "ri-instagram-line",
            IconId::Linkedin => "ri-linkedin-line",
            IconId::Github => "ri-github-line",
            IconId::ArrowRight => "ri-arrow-right-line",
            IconId::Palette => "ri-palette-line",
            IconId::Brush => "ri-brush-line",
            IconId::Lightbulb => "ri-lightbulb-line",
            IconId::Rocket => "ri-rocket-line",
            IconId::Vector => "ri-shape-line",
            IconId::Users => "ri-team-line",
        }
    }
}

#[component]
pub fn Icon(id: IconId, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <i class=format!("{} {}", id.glyph_class(), class)></i>
    }
}
