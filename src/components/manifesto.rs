use yew::prelude::*;
use web_sys::Element;

use crate::config;
use crate::content::{IconGlyph, Value};
use crate::observers::use_scroll_subscription;
use crate::view_state::{section_parallax, translate_y_style};

#[derive(Properties, PartialEq)]
pub struct ManifestoProps {
    pub values: Vec<Value>,
    pub background: String,
    pub feature_image: String,
}

#[function_component(Manifesto)]
pub fn manifesto(props: &ManifestoProps) -> Html {
    let section_ref = use_node_ref();
    let parallax = use_state_eq(|| 0.0_f64);

    {
        let section_ref = section_ref.clone();
        let setter = parallax.setter();
        use_scroll_subscription(move |metric| {
            let Some(section) = section_ref.cast::<Element>() else {
                return;
            };
            let rect = section.get_bounding_client_rect();
            if let Some(offset) = section_parallax(
                rect.top(),
                rect.bottom(),
                metric.viewport_height,
                config::MANIFESTO_PARALLAX_FACTOR,
            ) {
                setter.set(offset);
            }
        });
    }

    html! {
        <section id="dna" ref={section_ref} class="manifesto">
            <div class="manifesto-background" style={translate_y_style(*parallax)}>
                <img src={props.background.clone()} alt="Technical Background" />
            </div>

            <div class="section-inner manifesto-grid">
                <div>
                    <h2 class="eyebrow">{"Manifesto"}</h2>
                    <h3 class="manifesto-title">
                        {"DNA "}<span class="accent italic">{"Italiano"}</span><br />
                        {"Performance Global"}
                    </h3>
                    <p class="manifesto-copy">
                        {"Nossa oficina não é apenas um local de reparos; é um laboratório de engenharia. Inspirados pela herança automotiva de Modena, trouxemos para Sorocaba o que há de mais avançado em tecnologia de alta performance."}
                    </p>
                    <div class="values">
                        {
                            props.values.iter().map(|value| html! {
                                <div key={value.title.clone()} class="value">
                                    <div class="value-icon">
                                        <IconGlyph icon={value.icon} />
                                    </div>
                                    <div>
                                        <h4>{&value.title}</h4>
                                        <p>{&value.description}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="manifesto-feature">
                    <div class="feature-frame"></div>
                    <img src={props.feature_image.clone()} alt="Luxury Workshop" loading="lazy" />
                    <div class="feature-badge skewed">
                        <p>{"Estética & Função"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
