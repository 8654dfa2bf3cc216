use yew::prelude::*;

use crate::config;
use crate::content::{ContactChannel, Icon, IconGlyph};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub channels: Vec<ContactChannel>,
}

fn map_frame() -> Html {
    html! {
        <iframe
            src={config::MAP_EMBED_URL}
            title="Modena Performance no mapa"
            width="100%"
            height="100%"
            style="border: 0;"
            allowfullscreen=true
            loading="lazy"
            referrerpolicy="no-referrer-when-downgrade"
        ></iframe>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <section id="contato" class="contact">
            <div class="section-inner contact-grid">
                <div>
                    <h2 class="eyebrow">{"Visite-nos"}</h2>
                    <h3 class="contact-title">
                        {"O Paddock de "}<br />
                        <span class="accent italic">{"Sua Máquina"}</span>
                    </h3>

                    <div class="contact-channels">
                        {
                            props.channels.iter().map(|channel| html! {
                                <div key={channel.label.clone()} class="contact-channel">
                                    <div class="channel-icon">
                                        <IconGlyph icon={channel.icon} />
                                    </div>
                                    <div>
                                        <p class="channel-label">{&channel.label}</p>
                                        <p class="channel-value">{&channel.value}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="social-links">
                        <a
                            href={config::INSTAGRAM_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-link"
                            aria-label="Instagram"
                        >
                            <IconGlyph icon={Icon::Instagram} size={20} />
                        </a>
                    </div>
                </div>

                <div class="map-frame">
                    { map_frame() }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn map_frame_is_a_lazy_fullscreen_iframe() {
        let VNode::VTag(tag) = map_frame() else {
            panic!("map frame should render a single element");
        };
        assert_eq!(tag.tag(), "iframe");
        let attributes: Vec<(&str, &str)> = tag.attributes.iter().collect();
        assert!(attributes.iter().any(|(name, _)| *name == "allowfullscreen"));
        assert!(attributes.contains(&("loading", "lazy")));
        assert!(attributes.contains(&("referrerpolicy", "no-referrer-when-downgrade")));
        assert!(attributes.contains(&("src", config::MAP_EMBED_URL)));
    }
}
