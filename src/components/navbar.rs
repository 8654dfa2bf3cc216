use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::content::{Icon, IconGlyph, NavLink};
use crate::observers::use_view_flags;
use crate::view_state::{MenuAction, MobileMenu};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub links: Vec<NavLink>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let flags = use_view_flags();
    let menu = use_reducer_eq(MobileMenu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Anchor navigation still happens, the menu just closes with it.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Navigate);
        })
    };

    html! {
        <nav class={classes!("top-nav", flags.is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <div class="logo-mark skewed">
                        <span>{"M"}</span>
                    </div>
                    <span class="logo-text">
                        {"Modena "}<span class="accent">{"Performance"}</span>
                    </span>
                </a>

                <div class="nav-links">
                    {
                        props.links.iter().map(|link| html! {
                            <a key={link.href.clone()} href={link.href.clone()} class="nav-link">
                                {&link.name}
                            </a>
                        }).collect::<Html>()
                    }
                    <a href="#contato" class="nav-cta skewed">
                        <span>{"Agendar"}</span>
                    </a>
                </div>

                <button
                    class="burger-menu"
                    aria-label="Menu"
                    aria-expanded={menu.is_open.to_string()}
                    onclick={toggle_menu}
                >
                    <IconGlyph icon={if menu.is_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            {
                if menu.is_open {
                    html! {
                        <div class="mobile-menu">
                            {
                                props.links.iter().map(|link| html! {
                                    <a
                                        key={link.href.clone()}
                                        href={link.href.clone()}
                                        class="mobile-nav-link"
                                        onclick={close_menu.clone()}
                                    >
                                        {&link.name}
                                    </a>
                                }).collect::<Html>()
                            }
                            <a
                                href={config::WHATSAPP_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="mobile-nav-link accent"
                                onclick={close_menu.clone()}
                            >
                                {"Agendar"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
