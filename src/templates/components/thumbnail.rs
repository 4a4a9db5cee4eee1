use crate::domain::Listing;
use crate::templates::components::detail_href;
use maud::{html, Markup};

/// Draggable catalog entry. The drag payload is the listing url.
pub fn thumbnail(listing: &Listing) -> Markup {
    html! {
        a class="thumbnail"
            href=(detail_href(&listing.url))
            draggable="true"
            data-listing=(listing.url)
        {
            @if let Some(src) = &listing.image_url {
                img src=(src) alt=(listing.description) draggable="false";
            }
            div class="caption" { (listing.address) }
        }
    }
}
