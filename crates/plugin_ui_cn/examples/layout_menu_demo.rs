//! plugin_ui_cn Layout Menu Demo
//!
//! Loads a grouped menu from TOML, attaches callbacks, then walks through a
//! few interactions and prints the rendered markup after each one.
//!
//! Run with: cargo run -p plugin_ui_cn --example layout_menu_demo
//! (set `RUST_LOG=plugin_ui_core=trace` to follow state changes)

use anyhow::Result;
use plugin_ui_cn::prelude::*;
use tracing_subscriber::EnvFilter;

const MENU: &str = r#"
[settings]
search_placeholder = "Find a page…"

[[groups]]
id = "main"
label = "Main"
secondary_label = "Store"

[[groups.items]]
id = "dashboard"
label = "Dashboard"
href = "/dashboard"

[[groups.items]]
id = "reports"
label = "Reports"

[[groups.items.children]]
id = "sales"
label = "Sales"
href = "/reports/sales"

[[groups.items.children]]
id = "products"
label = "Products"
secondary_label = "Top sellers"
href = "/reports/products"

[[groups]]
id = "tools"
label = "Tools"

[[groups.items]]
id = "import"
label = "Import"

[[groups.items]]
id = "export"
label = "Export"
disabled = true
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut document = MenuDocument::from_toml(MENU)?;
    document.settings.indent_step = 16.0;

    let builder = LayoutMenuBuilder::from_document(document)?
        .on_item_click(|item| tracing::info!(id = %item.id, "item activated"))
        .on_navigate(|href| tracing::info!(href, "navigate"))
        .class("sidebar");

    let mut menu = builder.build();
    print_step("initial", &menu);

    menu.click(&ItemPath::in_group("main", "reports"));
    print_step("reports expanded", &menu);

    menu.key_down(&ItemPath::from_ids(Some("main"), ["reports", "sales"]), Key::Enter);

    menu.set_search("prod");
    print_step("search \"prod\"", &menu);

    menu.set_search("nothing here");
    print_step("no results", &menu);

    let outcome = menu.click(&ItemPath::in_group("tools", "export"));
    tracing::info!(?outcome, "clicked a row hidden by the search");

    menu.remount();
    print_step("remounted", &menu);

    Ok(())
}

fn print_step(title: &str, menu: &LayoutMenu) {
    let view = menu.view();
    let rows: Vec<String> = view
        .rows()
        .map(|row| format!("{}{}", "  ".repeat(row.depth), row.item.label))
        .collect();

    println!("== {} ==", title);
    for row in &rows {
        println!("{}", row);
    }
    if let Some(empty) = &view.empty {
        println!("{}", empty);
    }
    println!("{}\n", menu.render().to_markup());
}
