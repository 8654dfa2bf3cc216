use yew::prelude::*;

use crate::config;
use crate::content::{marquee, Brand};
use crate::observers::use_reveal;
use crate::view_state::stagger_delay_ms;

#[derive(Properties, PartialEq)]
pub struct ShowroomProps {
    pub brands: Vec<Brand>,
    pub gallery: Vec<String>,
}

#[function_component(Showroom)]
pub fn showroom(props: &ShowroomProps) -> Html {
    let gallery_ref = use_node_ref();
    let revealed = use_reveal(gallery_ref.clone(), config::REVEAL_THRESHOLD);

    html! {
        <section id="showroom" class="showroom">
            <div class="section-inner showroom-header">
                <div>
                    <h2 class="eyebrow">{"Exclusividade"}</h2>
                    <h3 class="section-title">{"Nosso "}<span class="accent">{"Showroom"}</span></h3>
                </div>
                <p class="showroom-copy">
                    {"Marcas icônicas, cuidados meticulosos. Referência no atendimento de superesportivos em todo o interior de São Paulo."}
                </p>
            </div>

            <div class="marquee-viewport">
                <div class="marquee-track animate-marquee">
                    {
                        marquee(&props.brands).enumerate().map(|(i, brand)| html! {
                            <div key={i} class="brand-tile" title={brand.name.clone()}>
                                <span>{&brand.logo}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div ref={gallery_ref} class="section-inner gallery-grid">
                {
                    props.gallery.iter().enumerate().map(|(i, src)| html! {
                        <div
                            key={src.clone()}
                            class={classes!("gallery-item", "reveal", revealed.then(|| "revealed"))}
                            style={format!("transition-delay: {}ms;", stagger_delay_ms(i))}
                        >
                            <img src={src.clone()} alt="Gallery" loading="lazy" />
                            <div class="gallery-shade"></div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
