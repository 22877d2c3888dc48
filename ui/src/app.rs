use leptos::*;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos_router::components::Router;

use leptos_meta::Stylesheet;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::routes::SiteRoutes;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Router>
        <Stylesheet href="https://cdn.jsdelivr.net/npm/remixicon@4.5.0/fonts/remixicon.css"/>
        <Title text="Makers — Icon & Branding Studio"/>

        <Header/>

        // pt-20 keeps routed content clear of the fixed header
        <main class="min-h-screen bg-neutral-50 pt-20">
          <SiteRoutes/>
        </main>

        <Footer/>
      </Router>
    }
}
