use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

// Animations stay in a plain stylesheet; keyframe names must be global.
const ANIMATIONS: &str = r#"
@keyframes marquee {
    0% { transform: translateX(0); }
    100% { transform: translateX(-50%); }
}
@keyframes precision-glow {
    0%, 100% {
        -webkit-text-stroke: 1px rgba(212, 0, 0, 0.3);
        text-shadow: 0 0 10px rgba(212, 0, 0, 0);
    }
    50% {
        -webkit-text-stroke: 1px rgba(212, 0, 0, 1);
        text-shadow: 0 0 20px rgba(212, 0, 0, 0.5);
    }
}
@keyframes precision-reveal {
    0% { width: 0; border-right: 2px solid #D40000; }
    40% { width: 100%; border-right: 2px solid #D40000; }
    50% { width: 100%; border-right: 0px solid transparent; }
    90% { width: 100%; border-right: 0px solid transparent; }
    100% { width: 0; border-right: 0px solid transparent; }
}
@keyframes slide-in-left {
    from { opacity: 0; transform: translateX(-2rem); }
    to { opacity: 1; transform: translateX(0); }
}
.animate-marquee {
    animation: marquee 30s linear infinite;
}
.slide-in {
    animation: slide-in-left 0.9s ease-out both;
}
.outline-text {
    -webkit-text-stroke: 1px rgba(255, 255, 255, 0.1);
    color: transparent;
}
.precision-animated {
    position: relative;
    display: inline-block;
    animation: precision-glow 4s ease-in-out infinite;
}
.precision-animated::after {
    content: 'Precisão';
    position: absolute;
    left: 0;
    top: 0;
    width: 0;
    height: 100%;
    color: #D40000;
    overflow: hidden;
    white-space: nowrap;
    animation: precision-reveal 8s cubic-bezier(0.65, 0, 0.35, 1) infinite;
    -webkit-text-stroke: 0;
}
"#;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #0A0A0A;
                    color: #ffffff;
                    font-family: 'Inter', sans-serif;
                }
                ::selection {
                    background: #D40000;
                    color: #ffffff;
                }
                a {
                    color: inherit;
                    text-decoration: none;
                }
                .accent {
                    color: #D40000;
                }
                .italic {
                    font-style: italic;
                }
                .skewed {
                    display: inline-flex;
                    transform: skewX(-15deg);
                }
                .skewed > * {
                    transform: skewX(15deg);
                }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .eyebrow {
                    color: #D40000;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }
                .top-nav {
                    position: fixed;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(10, 10, 10, 0.95);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #ffffff;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: #0A0A0A;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    will-change: transform;
                }
                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(0.5) contrast(1.2);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 48rem;
                    padding: 5rem 1.5rem 0;
                    will-change: transform, opacity;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .services-grid, .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                }
                .manifesto {
                    position: relative;
                    overflow: hidden;
                    background: #000000;
                    padding: 6rem 0;
                }
                .manifesto-background {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 100%;
                    height: 140%;
                    opacity: 0.2;
                    pointer-events: none;
                    transition: transform 0.1s ease-out;
                }
                .marquee-viewport {
                    overflow: hidden;
                    padding: 2.5rem 0;
                }
                .marquee-track {
                    display: flex;
                    gap: 2rem;
                    white-space: nowrap;
                }
                .map-frame {
                    height: 500px;
                    filter: grayscale(1) invert(1) brightness(0.75);
                    opacity: 0.8;
                    transition: all 1s;
                }
                .map-frame:hover {
                    filter: none;
                    opacity: 1;
                }
                .floating-cta {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 60;
                    transition: all 0.5s;
                }
                .floating-cta-button {
                    width: 4rem;
                    height: 4rem;
                    align-items: center;
                    justify-content: center;
                    background: #D40000;
                    box-shadow: 0 0 20px rgba(212, 0, 0, 0.5);
                }
            "#)} />
            <style>{ANIMATIONS}</style>
        </>
    }
}
