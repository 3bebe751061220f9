//! Failure isolation across boundaries sharing one resolver

use art_components::{
    BoundaryView, ComponentCatalog, ComponentResolver, ComponentStatus, RenderBoundary,
};
use art_test_utils::{CountingLoader, FailingLoader};
use pretty_assertions::assert_eq;
use serde_json::json;

fn resolver() -> (ComponentResolver, CountingLoader, FailingLoader) {
    let working = CountingLoader::with_markup("<svg id=\"pv\"/>");
    let broken = FailingLoader::new("chunk load error");
    let mut builder = ComponentCatalog::builder();
    builder
        .register("pv-diagram", working.shared())
        .unwrap()
        .register("broken-widget", broken.shared())
        .unwrap();
    (ComponentResolver::new(builder.build()), working, broken)
}

#[tokio::test]
async fn failing_loader_offers_retry_and_spares_siblings() {
    let (resolver, working, broken) = resolver();
    let mut failed = RenderBoundary::mount(&resolver, "broken-widget", json!({}));
    let mut sibling = RenderBoundary::mount(&resolver, "pv-diagram", json!({}));

    resolver.resolve("broken-widget").unwrap().settled().await;
    resolver.resolve("pv-diagram").unwrap().settled().await;

    let BoundaryView::Failed { retryable, message, .. } = failed.view() else {
        panic!("expected fallback for broken widget");
    };
    assert!(retryable);
    assert!(message.contains("chunk load error"));
    assert!(matches!(sibling.view(), BoundaryView::Content { .. }));

    assert!(failed.retry());
    assert_eq!(resolver.status("broken-widget"), ComponentStatus::Loading);
    assert!(matches!(failed.view(), BoundaryView::Loading { .. }));

    resolver.resolve("broken-widget").unwrap().settled().await;
    assert!(failed.view().is_failed());
    assert_eq!(broken.calls(), 2);
    assert_eq!(working.calls(), 1);
    assert!(matches!(sibling.view(), BoundaryView::Content { .. }));
}

#[tokio::test]
async fn remounting_reuses_loaded_component() {
    let (resolver, working, _) = resolver();
    let first = RenderBoundary::mount(&resolver, "pv-diagram", json!({ "ratio": 8 }));
    resolver.resolve("pv-diagram").unwrap().settled().await;
    drop(first);

    let mut second = RenderBoundary::mount(&resolver, "pv-diagram", json!({ "ratio": 10 }));
    assert!(matches!(second.view(), BoundaryView::Content { .. }));
    assert_eq!(working.calls(), 1);
}
