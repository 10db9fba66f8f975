mod common;

use serde_json::json;
use std::sync::Arc;

use blocksite::config::SiteConfig;
use blocksite::render::PageState;
use blocksite::Site;
use common::{component, MemorySource};

fn site(source: MemorySource) -> (Site, Arc<MemorySource>) {
    let source = Arc::new(source);
    let site = Site::with_source("/tmp/blocksite-test", SiteConfig::default(), source.clone());
    (site, source)
}

#[tokio::test]
async fn test_about_page_hero_then_empty_stats() {
    let source = MemorySource::new()
        .with_page(
            "about",
            json!([
                component("1", "hero", json!({"title": "About Us"}), 0, true),
                component("2", "stats", json!({"stats": []}), 1, true)
            ]),
        )
        .with_theme(json!({}));
    let (site, _) = site(source);

    let view = site.view(Some("about")).await;
    assert!(matches!(view.state(), PageState::Ready(_)));

    let html = site.render_view(&view);
    let hero = html.find(">About Us</h1>").unwrap();
    let subtitle = html.find("Trusted guidance for every loan decision").unwrap();
    let stats = html.find(r#"<div class="stats-grid"></div>"#).unwrap();
    assert!(hero < subtitle && subtitle < stats);
}

#[tokio::test]
async fn test_testimonial_badge_and_stars() {
    let source = MemorySource::new().with_page(
        "home",
        json!([component(
            "t",
            "testimonials",
            json!({"testimonials": [{"name": "Asha", "rating": 5, "content": "Great service"}]}),
            0,
            true
        )]),
    );
    let (site, _) = site(source);

    let html = site.render_page(None).await;
    assert!(html.contains(r#"">A</div>"#));
    assert_eq!(html.matches("star filled").count(), 5);
    assert!(html.contains("Great service"));
}

#[tokio::test]
async fn test_unknown_block_does_not_break_page() {
    let source = MemorySource::new().with_page(
        "home",
        json!([
            component("1", "hero", json!({"title": "Hello"}), 0, true),
            component("2", "mystery_widget", json!({"gizmo": [1, 2, 3]}), 1, true),
            component("3", "cta_banner", json!({"title": "Apply now"}), 2, true)
        ]),
    );
    let (site, _) = site(source);

    let html = site.render_page(Some("home")).await;
    assert!(html.contains("mystery_widget"));
    assert!(html.contains(r#""gizmo""#));
    let hero = html.find(">Hello</h1>").unwrap();
    let unknown = html.find("mystery_widget").unwrap();
    let cta = html.find(">Apply now</h2>").unwrap();
    assert!(hero < unknown && unknown < cta);
}

#[tokio::test]
async fn test_visible_blocks_only_in_ascending_order() {
    let source = MemorySource::new().with_page(
        "rates",
        json!([
            component("c", "text_block", json!({"content": "third"}), 30, true),
            component("h1", "text_block", json!({"content": "hidden"}), 5, false),
            component("a", "text_block", json!({"content": "first"}), 10, true),
            component("h2", "text_block", json!({"content": "hidden too"}), 15, false),
            component("b", "text_block", json!({"content": "second"}), 20, true)
        ]),
    );
    let (site, _) = site(source);

    let page = site.resolver.resolve_page(Some("rates")).await;
    let ids: Vec<_> = page.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let html = site.render_page(Some("rates")).await;
    assert!(!html.contains("hidden"));
    assert!(html.find("first").unwrap() < html.find("second").unwrap());
    assert!(html.find("second").unwrap() < html.find("third").unwrap());
}

#[tokio::test]
async fn test_degraded_theme_still_renders_every_type() {
    let types = [
        "hero",
        "stats",
        "services",
        "whyUs",
        "testimonials",
        "contact",
        "text_block",
        "image_gallery",
        "cta_banner",
    ];
    let components: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| component(&i.to_string(), t, json!({}), i as i64, true))
        .collect();
    // No theme configured: the theme fetch fails
    let source = MemorySource::new().with_page("home", json!(components));
    let (site, _) = site(source);

    let page = site.resolver.resolve_page(None).await;
    assert!(page.theme.is_empty());
    assert_eq!(page.blocks.len(), types.len());

    let html = site.render_page(None).await;
    assert_eq!(html.matches(r#"<section class="block block-"#).count(), types.len());
    assert!(html.contains("--primary-color: #1e3a8a;"));
}

#[tokio::test]
async fn test_missing_page_renders_empty_view() {
    let (site, _) = site(MemorySource::new());

    let view = site.view(Some("nowhere")).await;
    assert!(matches!(view.state(), PageState::Empty(_)));
    let html = site.render_view(&view);
    assert!(html.contains("Nothing here yet"));
}

#[tokio::test]
async fn test_render_is_idempotent() {
    let source = MemorySource::new()
        .with_page(
            "home",
            json!([
                component("1", "hero", json!({}), 0, true),
                component("2", "weird", json!({"b": 1, "a": 2}), 1, true)
            ]),
        )
        .with_theme(json!({"primary_color": "#010101"}));
    let (site, _) = site(source);

    let first = site.render_page(None).await;
    let second = site.render_page(None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_theme_refresh_after_invalidation() {
    let source = MemorySource::new()
        .with_page("home", json!([component("1", "hero", json!({}), 0, true)]))
        .with_theme(json!({"primary_color": "#111111"}));
    let (site, source) = site(source);

    assert!(site.render_page(None).await.contains("#111111"));

    source.set_theme(Some(json!({"primary_color": "#222222"})));
    // Still cached
    assert!(site.render_page(None).await.contains("#111111"));

    site.resolver.invalidate_theme();
    assert!(site.render_page(None).await.contains("#222222"));
    assert_eq!(source.theme_calls(), 2);
}
