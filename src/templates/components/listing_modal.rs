use crate::domain::Listing;
use maud::{html, Markup};

/// Detail overlay. The description is rendered as escaped text with its
/// line breaks kept.
pub fn listing_modal(listing: &Listing) -> Markup {
    html! {
        div class="modal" {
            div class="modal-content" {
                a class="close" href="/" { "×" }
                h2 {
                    a href=(listing.url) target="_blank" rel="noopener noreferrer" {
                        (listing.address)
                    }
                    br;
                    (listing.summary_line())
                }
                @if let Some(src) = &listing.image_url {
                    img src=(src) alt=(listing.description);
                }
                p {
                    @for (i, line) in listing.description_lines().enumerate() {
                        @if i > 0 { br; }
                        (line)
                    }
                }
            }
        }
    }
}
