use crate::domain::PlacedSquare;
use crate::templates::components::detail_href;
use maud::{html, Markup};

pub fn placed_square(square: &PlacedSquare) -> Markup {
    let mut style = format!("top: {}px; left: {}px;", square.top, square.left);
    if let Some(src) = &square.listing.image_url {
        style.push_str(&format!(" background-image: url('{src}');"));
    }

    html! {
        div class="square"
            draggable="true"
            data-square-id=(square.id)
            data-href=(detail_href(&square.listing.url))
            title=(square.listing.address)
            style=(style)
        {
            span class="close-square" data-remove=(square.id) { "×" }
        }
    }
}
