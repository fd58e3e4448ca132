use crate::domain::category::{DEVELOPMENTS, REAL_ESTATE};
use crate::geos::COMMUNES;
use crate::templates::components::category_href;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1a1a1a; background: #fafafa; }
header, footer { padding: 1rem 2rem; background: #111; color: #fff; }
header a, footer a { color: #d4af37; text-decoration: none; margin-right: 1rem; }
.container { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
.narrow { max-width: 720px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.card { background: #fff; border: 1px solid #eee; border-radius: 6px; overflow: hidden; }
.card img { width: 100%; height: 200px; object-fit: cover; }
.card-body { padding: 1rem; }
.price-uf { font-size: 1.4rem; font-weight: 600; }
.price-clp { color: #666; }
.error { color: #b91c1c; font-weight: 600; }
form.stack label { display: block; margin-top: .75rem; font-size: .8rem; text-transform: uppercase; color: #555; }
form.stack input, form.stack select, form.stack textarea { width: 100%; padding: .5rem; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 8px; border-bottom: 1px solid #eee; text-align: left; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Casa Catalog" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    nav {
                        a href="/" { strong { "Casa Catalog" } }
                        a href=(category_href(REAL_ESTATE)) { "Real Estate" }
                        a href=(category_href(DEVELOPMENTS)) { "Developments" }
                        a href="/admin" { "Admin" }
                    }
                }
                (content)
                footer {
                    p {
                        @for commune in COMMUNES {
                            a href=(category_href(commune)) { (commune) }
                        }
                    }
                }
            }
        }
    }
}
