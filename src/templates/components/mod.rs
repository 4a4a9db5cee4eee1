use maud::{html, Markup};

pub mod error;
pub mod listing_modal;
pub mod loading_overlay;
pub mod square;
pub mod thumbnail;

pub use error::error_page;
pub use listing_modal::listing_modal;
pub use loading_overlay::loading_overlay;
pub use square::placed_square;
pub use thumbnail::thumbnail;

/// `/?detail=<url>` with the url form-encoded.
pub fn detail_href(url: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("detail", url)
        .finish();
    format!("/?{query}")
}

pub fn axis_labels(x_label: &str, y_label: &str) -> Markup {
    html! {
        div class="x-axis-label" { (x_label) }
        div class="y-axis-label" { (y_label) }
    }
}
