// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{about::About, contact::Contact, home::Home, projects::Projects};

/// The four routed views. Nav chrome and route registration both derive from
/// this enum so they cannot drift apart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = match path {
            "/" | "" => "/",
            p => p.trim_end_matches('/'),
        };
        Page::ALL.into_iter().find(|p| p.path() == trimmed)
    }
}

#[component]
pub fn SiteRoutes() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("")          view=Home     />
        <Route path=path!("/about")    view=About    />
        <Route path=path!("/projects") view=Projects />
        <Route path=path!("/contact")  view=Contact  />
      </Routes>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <section class="min-h-screen flex flex-col items-center justify-center gap-6 bg-neutral-50 text-center px-8">
        <h2 class="text-5xl font-extrabold text-neutral-900">"404"</h2>
        <p class="text-lg text-neutral-500">"This page does not exist (yet)."</p>
        <a href="/" class="text-primary underline underline-offset-4 hover:text-secondary">
          "Back to home"
        </a>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn four_pages_with_distinct_paths() {
        assert_eq!(Page::ALL.len(), 4);
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn from_path_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn from_path_accepts_trailing_slash() {
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
        assert_eq!(Page::from_path(""), Some(Page::Home));
    }

    #[test]
    fn unknown_paths_have_no_page() {
        for path in ["/services", "/services/web-design", "/blog", "/projects/1"] {
            assert_eq!(Page::from_path(path), None);
        }
    }
}
