//! Built-in datasets: markets, produce, region offsets and the default hub projects.

use crate::model::{Market, PeakWindow, PersonaView, ProduceItem, Project};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Market selected when no preference has been stored yet.
pub const DEFAULT_MARKET_ID: &str = "austin";

pub fn markets() -> Vec<Market> {
    vec![
        Market::new("ferry", "Ferry Plaza Farmers Market", "San Francisco, CA", "coastal_west"),
        Market::new("santamonica", "Santa Monica Farmers Market", "Santa Monica, CA", "coastal_west"),
        Market::new("pike", "Pike Place Market", "Seattle, WA", "pnw"),
        Market::new("portland", "Portland Farmers Market", "Portland, OR", "pnw"),
        Market::new("union", "Union Square Greenmarket", "New York, NY", "northeast"),
        Market::new("boston", "Boston Public Market", "Boston, MA", "northeast"),
        Market::new("austin", "Austin Farmers Market", "Austin, TX", "texas"),
        Market::new("arlington", "Arlington Farmers Market", "Arlington, TX", "texas"),
        Market::new("miami", "Miami Farmers Market", "Miami, FL", "florida"),
    ]
}

/// Month shift per region, applied to every base peak window.
pub fn region_offsets() -> HashMap<String, i32> {
    [
        ("coastal_west", -1),
        ("pnw", 0),
        ("northeast", 0),
        ("texas", 1),
        ("florida", -2),
    ]
    .into_iter()
    .map(|(region, shift)| (region.to_string(), shift))
    .collect()
}

pub fn produce() -> Vec<ProduceItem> {
    vec![
        ProduceItem::new("oranges", "Oranges", PeakWindow::new(10, 2))
            .with_about("Citrus fruit packed with vitamin C, perfect for fresh juice or snacking.")
            .with_tips("Choose firm, heavy oranges for their size. Store at room temperature or refrigerate for longer freshness.")
            .with_nutrition("Excellent source of Vitamin C, fiber, and folate. Supports immune health.")
            .with_tags(&["Citrus"]),
        ProduceItem::new("strawberries", "Strawberries", PeakWindow::new(3, 6))
            .with_about("Bright, sweet berries that shine fresh, in desserts, or blended.")
            .with_tips("Look for dry, glossy berries with green caps. Refrigerate unwashed; wash right before eating.")
            .with_nutrition("Vitamin C, manganese, antioxidants. Naturally sweet with high water content.")
            .with_tags(&["Berry"]),
        ProduceItem::new("blueberries", "Blueberries", PeakWindow::new(5, 8))
            .with_about("Small berries with big flavor, great for snacking, baking, and oatmeal.")
            .with_tips("Pick firm berries with a silvery bloom. Refrigerate; freeze for long-term storage.")
            .with_nutrition("Antioxidants, Vitamin K, fiber. Often associated with heart and brain health.")
            .with_tags(&["Berry"]),
        ProduceItem::new("tomatoes", "Tomatoes", PeakWindow::new(6, 9))
            .with_about("Summer staple for salads, sauces, and sandwiches.")
            .with_tips("Aromatic and slightly soft is good. Keep at room temp until ripe, then refrigerate briefly.")
            .with_nutrition("Vitamin C, potassium, lycopene. Great for fresh and cooked dishes.")
            .with_tags(&["Vegetable"]),
        ProduceItem::new("cucumber", "Cucumber", PeakWindow::new(5, 8))
            .with_about("Crisp and refreshing, perfect for salads and quick pickles.")
            .with_tips("Choose firm cucumbers with even color. Store in the fridge; avoid freezing.")
            .with_nutrition("Hydration-focused, low calorie, with small amounts of Vitamin K.")
            .with_tags(&["Vegetable"]),
        ProduceItem::new("watermelon", "Watermelon", PeakWindow::new(6, 8))
            .with_about("Hydrating summer fruit, best icy-cold on a hot day.")
            .with_tips("Look for a creamy yellow field spot and a deep hollow sound when tapped.")
            .with_nutrition("Hydration, Vitamin C, and lycopene; naturally sweet with lots of water.")
            .with_tags(&["Melon"]),
        ProduceItem::new("apples", "Apples", PeakWindow::new(8, 10))
            .with_about("Crunchy and versatile, from snacking to pies to savory pairings.")
            .with_tips("Pick firm apples without bruises. Refrigerate for longer freshness.")
            .with_nutrition("Fiber (pectin), Vitamin C. Classic high-satiety snack.")
            .with_tags(&["Pome"]),
        ProduceItem::new("peaches", "Peaches", PeakWindow::new(5, 7))
            .with_about("Fragrant stone fruit with peak sweetness in warm months.")
            .with_tips("Slight give + strong aroma is good. Ripen on counter; refrigerate once ripe.")
            .with_nutrition("Vitamins A & C; juicy, sweet, and satisfying.")
            .with_tags(&["Stone fruit"]),
    ]
}

pub fn find_market<'a>(markets: &'a [Market], id: &str) -> Option<&'a Market> {
    markets.iter().find(|m| m.id == id)
}

/// Looks up a market, falling back to the first catalog entry for unknown ids.
pub fn market_or_default<'a>(markets: &'a [Market], id: &str) -> Option<&'a Market> {
    find_market(markets, id).or_else(|| markets.first())
}

pub fn find_produce<'a>(items: &'a [ProduceItem], id: &str) -> Option<&'a ProduceItem> {
    items.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new("p1", "CSV Dashboard Widget")
            .with_description("Loads a CSV and renders a clean table view with filtering and quick stats.")
            .with_tags(&["Web", "Data"])
            .with_updated(date(2026, 2, 1))
            .with_url("./projects/csv-widget/index.html")
            .with_pinned(true)
            .with_personas(vec![
                PersonaView::new("default", "Default", "Table + filters + stats."),
                PersonaView::new("focus", "Focus", "Stats-only mini widget for quick checks."),
                PersonaView::new("dev", "Dev", "Shows schema, validation, and raw preview."),
            ]),
        Project::new("p2", "Gradient Loop Tool")
            .with_description("Generate smooth cyclic gradients from key points and preview them live.")
            .with_tags(&["Tool", "UI"])
            .with_updated(date(2026, 1, 20))
            .with_url("./projects/gradient-loop/index.html")
            .with_persona("focus")
            .with_personas(vec![
                PersonaView::new("default", "Default", "Editor + preview + export."),
                PersonaView::new("focus", "Focus", "Big preview + minimal controls."),
                PersonaView::new("share", "Share", "Copy CSS, PNG export, and link settings."),
            ]),
        Project::new("p3", "NTSS Mock Login Flow")
            .with_description("A small standalone prototype showing account registration & login states.")
            .with_tags(&["HCI", "Prototype"])
            .with_updated(date(2026, 2, 10))
            .with_url("./projects/ntss-login/index.html")
            .with_personas(vec![
                PersonaView::new("default", "Default", "Walkthrough with states A→B→C→D."),
                PersonaView::new("critique", "Critique", "Highlights affordances & breakdowns."),
                PersonaView::new("demo", "Demo", "Fullscreen flow with narration notes."),
            ]),
        Project::new("p4", "Minecraft Build Viewer (WIP)")
            .with_description("Prototype for browsing build layers and materials lists (future).")
            .with_tags(&["Minecraft", "WIP"])
            .with_updated(date(2026, 1, 5))
            .with_url("#")
            .with_visible(false)
            .with_persona("dev")
            .with_personas(vec![
                PersonaView::new("default", "Default", "Browse builds and steps."),
                PersonaView::new("dev", "Dev", "Shows parsing pipeline + debug views."),
                PersonaView::new("compact", "Compact", "Tiny widget with next build step."),
            ]),
        Project::new("p5", "The Market Basket (Prototype)")
            .with_description("Seasonal produce finder with market selector, expandable cards, and seasonality bars.")
            .with_tags(&["HCI", "Prototype", "Web"])
            .with_updated(date(2026, 2, 13))
            .with_url("./projects/market-basket/index.html")
            .with_pinned(true)
            .with_personas(vec![
                PersonaView::new("default", "Default", "Market selector + Fresh First list + expandable cards."),
                PersonaView::new("focus", "Focus", "Shows only items in season now (fast scan)."),
                PersonaView::new("demo", "Demo", "Auto-expands top item and highlights Today marker."),
            ]),
    ]
}
