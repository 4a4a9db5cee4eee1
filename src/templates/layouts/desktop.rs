use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f4f6fb; color: #001d4a; }
.top-bar { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; background: #001d4a; color: #fff; }
.title { margin: 0; font-size: 1.5rem; }
.content { display: flex; gap: 1.5rem; padding: 1.5rem; }
.plot { position: relative; flex: 0 0 600px; height: 600px; background: #fff; border: 2px solid #001d4a; }
.square { position: absolute; width: 50px; height: 50px; background-color: #001d4a; background-size: cover; cursor: pointer; }
.close-square { position: absolute; top: -8px; right: -8px; background: #fff; border-radius: 50%; width: 16px; line-height: 16px; text-align: center; font-size: 12px; cursor: pointer; }
.x-axis-label { position: absolute; bottom: -1.75rem; left: 50%; }
.y-axis-label { position: absolute; left: -2.5rem; top: 50%; transform: rotate(-90deg); }
.listings-grid { flex: 1; display: grid; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); gap: 0.75rem; align-content: start; }
.thumbnail { display: block; background: #fff; border-radius: 6px; overflow: hidden; color: inherit; text-decoration: none; cursor: grab; }
.thumbnail img { width: 100%; height: 100px; object-fit: cover; }
.caption { padding: 0.4rem; font-size: 0.85rem; }
.modal { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; }
.modal-content { background: #fff; max-width: 720px; max-height: 90vh; overflow-y: auto; padding: 1.5rem; border-radius: 8px; position: relative; }
.modal-content img { max-width: 100%; }
.close { position: absolute; top: 0.5rem; right: 1rem; font-size: 1.5rem; text-decoration: none; color: inherit; }
.loading-overlay { position: fixed; inset: 0; background: rgba(255,255,255,0.6); display: flex; align-items: center; justify-content: center; }
.loading-overlay[hidden] { display: none; }
.spinner { width: 48px; height: 48px; border: 6px solid #ccc; border-top-color: #001d4a; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="top-bar" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="32"
                        height="32"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#ffffff"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="logo"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h1 class="title" { (title) }
                }
                (content)
            }
        }
    }
}
