use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;
use crate::content::{Icon, IconGlyph};

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub visible: bool,
}

/// WhatsApp shortcut pinned to the corner once the hero is mostly scrolled
/// past. Hidden again when scrolling back up.
#[styled_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    let state = if props.visible {
        css!("transform: translateY(0) scale(1); opacity: 1;")
    } else {
        css!("transform: translateY(40px) scale(0.75); opacity: 0; pointer-events: none;")
    };

    html! {
        <div class={classes!("floating-cta", state)} aria-hidden={(!props.visible).to_string()}>
            <a
                href={config::WHATSAPP_URL}
                target="_blank"
                rel="noopener noreferrer"
                class="floating-cta-button skewed"
                tabindex={if props.visible { "0" } else { "-1" }}
            >
                <span class="floating-cta-icon">
                    <IconGlyph icon={Icon::MessageSquare} size={28} />
                </span>
                <span class="floating-cta-label">{"Agendar Box"}</span>
            </a>
        </div>
    }
}
