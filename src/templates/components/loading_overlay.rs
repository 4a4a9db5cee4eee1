use maud::{html, Markup};

pub fn loading_overlay(visible: bool) -> Markup {
    html! {
        div id="loading-overlay" class="loading-overlay" hidden[!visible] {
            div class="spinner" {}
        }
    }
}
