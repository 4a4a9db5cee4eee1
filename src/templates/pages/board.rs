// templates/pages/board.rs

use crate::app::Snapshot;
use crate::domain::Listing;
use crate::templates::components::{
    axis_labels, listing_modal, loading_overlay, placed_square, thumbnail,
};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

pub struct BoardVm<'a> {
    pub snapshot: &'a Snapshot,
    pub detail: Option<&'a Listing>,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

// Drag gestures post to the board API, then poll /api/state until the
// ranking cycle settles and reload.
const BOARD_SCRIPT: &str = r#"
(() => {
  const plot = document.getElementById('plot');
  const overlay = document.getElementById('loading-overlay');

  const post = (path, body) => fetch(path, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body),
  });

  const settle = async () => {
    for (;;) {
      const state = await (await fetch('/api/state')).json();
      overlay.hidden = !state.loading;
      if (!state.loading) { window.location.reload(); return; }
      await new Promise(r => setTimeout(r, 500));
    }
  };

  const geometry = (e) => {
    const r = plot.getBoundingClientRect();
    return {
      drop: { x: e.clientX, y: e.clientY },
      container: { left: r.left, top: r.top, height: r.height },
    };
  };

  document.querySelectorAll('[data-listing]').forEach(el =>
    el.addEventListener('dragstart', e => e.dataTransfer.setData('listing', el.dataset.listing)));

  document.querySelectorAll('[data-square-id]').forEach(el => {
    el.addEventListener('dragstart', e => e.dataTransfer.setData('id', el.dataset.squareId));
    el.addEventListener('click', () => window.location.assign(el.dataset.href));
  });

  document.querySelectorAll('[data-remove]').forEach(el =>
    el.addEventListener('click', async e => {
      e.stopPropagation();
      overlay.hidden = false;
      await post('/api/board/remove', { id: Number(el.dataset.remove) });
      settle();
    }));

  plot.addEventListener('dragover', e => e.preventDefault());
  plot.addEventListener('drop', async e => {
    e.preventDefault();
    const id = e.dataTransfer.getData('id');
    const url = e.dataTransfer.getData('listing');
    if (id) {
      overlay.hidden = false;
      await post('/api/board/move', { id: Number(id), ...geometry(e) });
    } else if (url) {
      overlay.hidden = false;
      await post('/api/board/place', { url, ...geometry(e) });
    } else {
      return;
    }
    settle();
  });

  if (!overlay.hidden) settle();
})();
"#;

pub fn board_page(vm: &BoardVm) -> Markup {
    desktop_layout(
        "Rental Buddy",
        html! {
            main class="content" {
                div id="plot" class="plot" {
                    @for square in &vm.snapshot.squares {
                        (placed_square(square))
                    }
                    (axis_labels(vm.x_label, vm.y_label))
                }

                div class="listings-grid" {
                    @if vm.snapshot.ordered.is_empty() {
                        p { "No listings available" }
                    } @else {
                        @for listing in &vm.snapshot.ordered {
                            (thumbnail(listing))
                        }
                    }
                }
            }

            @if let Some(listing) = vm.detail {
                (listing_modal(listing))
            }

            (loading_overlay(vm.snapshot.loading))

            script { (PreEscaped(BOARD_SCRIPT)) }
        },
    )
}
