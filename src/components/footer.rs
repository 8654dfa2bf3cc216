use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <div class="logo-mark small skewed">
                    <span>{"M"}</span>
                </div>
                <span class="logo-text small">
                    {"Modena "}<span class="accent">{"Performance"}</span>
                </span>
            </div>
            <p class="copyright">
                {"© 2024 Modena Performance Lab. Sorocaba, São Paulo. Todos os direitos reservados."}
            </p>
        </footer>
    }
}
