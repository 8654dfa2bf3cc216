use yew::prelude::*;

use crate::content::{Icon, IconGlyph};
use crate::observers::use_scroll_metric;
use crate::view_state::{translate_y_style, HeroLayers};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub image: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let metric = use_scroll_metric();
    let layers = HeroLayers::from_offset(metric.offset);

    let background_style = translate_y_style(layers.background_offset);
    let content_style = format!(
        "{} opacity: {:.3};",
        translate_y_style(layers.content_offset),
        layers.opacity
    );
    let stats_style = format!("opacity: {:.3};", layers.opacity);

    html! {
        <header id="top" class="hero">
            <div class="hero-background" style={background_style}>
                <img src={props.image.clone()} alt="Sports Car Engine" />
                <div class="hero-shade horizontal"></div>
                <div class="hero-shade vertical"></div>
            </div>

            <div class="hero-content" style={content_style}>
                <div class="hero-kicker slide-in">
                    <span class="kicker-line"></span>
                    <span>{"Sorocaba • High Performance"}</span>
                </div>
                <h1 class="slide-in">
                    {"Engenharia de "}<br />
                    <span class="outline-text precision-animated">{"Precisão"}</span><br />
                    <span class="solid">{"Absoluta"}</span>
                </h1>
                <p class="hero-subtitle slide-in">
                    {"Elevamos o patamar da performance automotiva em Sorocaba. Técnicas italianas aplicadas aos motores mais potentes do mundo."}
                </p>
                <div class="hero-cta-group">
                    <a href="#contato" class="hero-cta primary skewed">
                        <span>{"Iniciar Projeto"}<IconGlyph icon={Icon::ArrowRight} size={18} /></span>
                    </a>
                    <a href="#dna" class="hero-cta secondary skewed">
                        <span>{"Conheça o Lab"}</span>
                    </a>
                </div>
            </div>

            <div class="hero-stats" style={stats_style}>
                <div class="stat">
                    <p class="stat-value">{"0.2s"}</p>
                    <p class="stat-label">{"Tempo de Resposta"}</p>
                </div>
                <div class="stat">
                    <p class="stat-value">{"+1000hp"}</p>
                    <p class="stat-label">{"Capacidade Tuning"}</p>
                </div>
            </div>
        </header>
    }
}
