use yew::prelude::*;

use crate::config;
use crate::content::{Icon, IconGlyph, Service};
use crate::observers::use_reveal;
use crate::view_state::stagger_delay_ms;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
}

/// Services grid. Cards enter once, staggered, the first time the grid is
/// scrolled into view.
#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let grid_ref = use_node_ref();
    let revealed = use_reveal(grid_ref.clone(), config::REVEAL_THRESHOLD);

    html! {
        <section id="servicos" class="services">
            <div class="section-inner">
                <div class="section-header centered">
                    <h2 class="eyebrow">{"Core Expertise"}</h2>
                    <p class="section-title">{"Serviços "}<span class="accent">{"Elite"}</span></p>
                </div>
                <div ref={grid_ref} class="services-grid">
                    {
                        props.services.iter().enumerate().map(|(i, service)| html! {
                            <div
                                key={service.id}
                                class={classes!("service-card", "reveal", revealed.then(|| "revealed"))}
                                style={format!("transition-delay: {}ms;", stagger_delay_ms(i))}
                            >
                                <div class="service-icon">
                                    <IconGlyph icon={service.icon} size={32} />
                                </div>
                                <h3>{&service.title}</h3>
                                <p>{&service.description}</p>
                                <div class="service-more">
                                    {"Saiba Mais"}<IconGlyph icon={Icon::ChevronRight} size={14} />
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
