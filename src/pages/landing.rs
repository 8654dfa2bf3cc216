use yew::prelude::*;
use yew_hooks::use_title;
use log::info;

use crate::components::{
    contact::Contact, floating_cta::FloatingCta, footer::Footer, hero::Hero,
    manifesto::Manifesto, navbar::Navbar, services::Services, showroom::Showroom,
};
use crate::config;
use crate::content::SiteContent;
use crate::observers::use_view_flags;

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| SiteContent::load_or_default(), ());
    let flags = use_view_flags();

    use_title(config::PAGE_TITLE.to_string());

    // Scroll to top on first mount, unless we were deep-linked to a section
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let hash = window.location().hash().unwrap_or_default();
                    if hash.is_empty() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    } else {
                        info!("Landing opened at {}", hash);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Navbar links={content.nav_links.clone()} />
            <Hero image={content.images.hero.clone()} />
            <Services services={content.services.clone()} />
            <Manifesto
                values={content.values.clone()}
                background={content.images.manifesto_background.clone()}
                feature_image={content.images.manifesto_feature.clone()}
            />
            <Showroom brands={content.brands.clone()} gallery={content.gallery.clone()} />
            <Contact channels={content.contact.clone()} />
            <Footer />
            <FloatingCta visible={flags.floating_button_visible} />
        </div>
    }
}
