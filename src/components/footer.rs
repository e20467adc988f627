//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <span class="footer__copyright">"© 2026 folio. All rights reserved."</span>
                <div class="footer__links">
                    <a class="footer__link" href="/projects">
                        "Projects"
                    </a>
                    <a class="footer__link" href="/contact">
                        "Contact"
                    </a>
                    <a
                        class="footer__link"
                        href="https://github.com"
                        target="_blank"
                        rel="noreferrer"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </footer>
    }
}
