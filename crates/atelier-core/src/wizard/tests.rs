//! Tests for the wizard module.

use std::{cell::RefCell, rc::Rc};

use rust_decimal::Decimal;

use super::*;
use crate::{
    error::PersistError,
    models::{Connection, FlowNode},
    money::MAX_PRICE,
    store::MemoryStore,
    suggest::STARTER_PAGES,
};

/// Helper function to create a wizard backed by a shared memory slot
fn create_test_wizard() -> (MemoryStore, Wizard) {
    let store = MemoryStore::new();
    let wizard = WizardBuilder::new()
        .with_store(store.clone())
        .build()
        .expect("Failed to create wizard");
    (store, wizard)
}

fn growth(bundle: Option<i64>) -> SelectPackage {
    SelectPackage {
        id: "growth".to_string(),
        name: "Growth".to_string(),
        price: Decimal::from(1000),
        included_pages: 5,
        brand_kit_bundle_price: bundle.map(Decimal::from),
        extra_page_cost: Decimal::from(50),
    }
}

fn seo_pack() -> AddonSpec {
    AddonSpec {
        id: "seo".to_string(),
        name: "SEO Pack".to_string(),
        price: Decimal::from(150),
    }
}

#[test]
fn test_new_wizard_starts_empty() {
    let (store, wizard) = create_test_wizard();

    assert!(wizard.order().is_empty());
    assert!(wizard.invoice().is_empty());
    assert!(store.contents().is_none());
    assert!(wizard.last_saved_at().is_none());
}

#[test]
fn test_select_package_seeds_starter_pages() {
    let (_store, mut wizard) = create_test_wizard();

    let applied = wizard.select_package(growth(None));

    assert!(applied.changed);
    assert_eq!(wizard.order().pages(), STARTER_PAGES);
    assert_eq!(applied.view.invoice.total, Decimal::from(1000));
}

#[test]
fn test_select_package_keeps_existing_pages() {
    let (_store, mut wizard) = create_test_wizard();
    wizard.add_page("Menu");

    wizard.select_package(growth(None));

    assert_eq!(wizard.order().pages(), ["Menu".to_string()]);
}

#[test]
fn test_overage_scenario() {
    let (_store, mut wizard) = create_test_wizard();
    wizard.select_package(growth(None));
    for page in ["Blog", "Gallery", "FAQ"] {
        wizard.add_page(page);
    }

    let view = wizard.view();

    assert_eq!(wizard.order().pages().len(), 7);
    assert_eq!(view.invoice.line_items.len(), 2);
    assert_eq!(view.invoice.line_items[0].amount, Decimal::from(1000));
    assert_eq!(view.invoice.line_items[1].amount, Decimal::from(100));
    assert_eq!(view.invoice.total, Decimal::from(1100));
    assert_eq!(view.deposit, Decimal::from(550));
    assert!(view.pages.over_limit());
}

#[test]
fn test_brand_kit_without_package() {
    let (_store, mut wizard) = create_test_wizard();

    let on = wizard.toggle_brand_kit();
    assert_eq!(on.view.invoice.total, Decimal::from(500));

    let off = wizard.toggle_brand_kit();
    assert!(off.changed);
    assert_eq!(off.view.invoice.total, Decimal::ZERO);
}

#[test]
fn test_bundled_brand_kit() {
    let (_store, mut wizard) = create_test_wizard();
    wizard.select_package(growth(Some(300)));

    let applied = wizard.toggle_brand_kit();
    let line = applied
        .view
        .invoice
        .line_items
        .last()
        .expect("Brand kit line");

    assert_eq!(line.amount, Decimal::from(300));
    assert_eq!(line.label, "Brand Kit (Bundled)");
    assert!(applied.view.brand_kit.bundled);
}

#[test]
fn test_duplicate_page_is_noop() {
    let (store, mut wizard) = create_test_wizard();
    wizard.add_page("Home");
    let saved = store.contents();

    let applied = wizard.add_page(" Home ");

    assert!(!applied.changed);
    assert_eq!(wizard.order().pages(), ["Home".to_string()]);
    assert_eq!(store.contents(), saved);
}

#[test]
fn test_blank_page_is_noop() {
    let (store, mut wizard) = create_test_wizard();

    let applied = wizard.add_page("   ");

    assert!(!applied.changed);
    assert!(wizard.order().pages().is_empty());
    assert!(store.contents().is_none());
}

#[test]
fn test_remove_unknown_page_is_noop() {
    let (_store, mut wizard) = create_test_wizard();
    wizard.add_page("Home");

    assert!(!wizard.remove_page("Careers").changed);
    assert!(wizard.remove_page("Home").changed);
    assert!(wizard.order().pages().is_empty());
}

#[test]
fn test_reorder_page() {
    let (_store, mut wizard) = create_test_wizard();
    wizard.select_package(growth(None));

    let applied = wizard.reorder_page(ReorderPage { from: 3, to: 0 });

    assert!(applied.changed);
    assert_eq!(wizard.order().pages(), ["Contact", "Home", "About", "Services"]);
}

#[test]
fn test_reorder_page_out_of_bounds_is_noop() {
    let (_store, mut wizard) = create_test_wizard();
    wizard.select_package(growth(None));

    assert!(!wizard.reorder_page(ReorderPage { from: 4, to: 0 }).changed);
    assert!(!wizard.reorder_page(ReorderPage { from: 0, to: 9 }).changed);
    assert!(!wizard.reorder_page(ReorderPage { from: 2, to: 2 }).changed);
    assert_eq!(wizard.order().pages(), STARTER_PAGES);
}

#[test]
fn test_upsert_addon_never_duplicates() {
    let (_store, mut wizard) = create_test_wizard();

    wizard.upsert_addon(seo_pack());
    let repeat = wizard.upsert_addon(seo_pack());
    wizard.upsert_addon(AddonSpec {
        price: Decimal::from(200),
        ..seo_pack()
    });

    assert!(!repeat.changed);
    assert_eq!(wizard.order().addons().len(), 1);
    assert_eq!(wizard.order().addons()[0].price, Decimal::from(200));
}

#[test]
fn test_upsert_then_remove_addon() {
    let (_store, mut wizard) = create_test_wizard();

    wizard.upsert_addon(seo_pack());
    let applied = wizard.remove_addon("seo");

    assert!(applied.changed);
    assert!(wizard.order().addons().is_empty());
    assert!(applied.view.invoice.is_empty());
}

#[test]
fn test_toggle_addon_adds_then_removes() {
    let (_store, mut wizard) = create_test_wizard();

    let added = wizard.toggle_addon(seo_pack());
    assert_eq!(added.view.invoice.total, Decimal::from(150));

    let removed = wizard.toggle_addon(seo_pack());
    assert!(removed.changed);
    assert!(wizard.order().addon("seo").is_none());
}

#[test]
fn test_addon_with_empty_id_is_noop() {
    let (_store, mut wizard) = create_test_wizard();

    let applied = wizard.upsert_addon(AddonSpec {
        id: String::new(),
        ..seo_pack()
    });

    assert!(!applied.changed);
    assert!(wizard.order().addons().is_empty());
}

#[test]
fn test_custom_branding_activation() {
    let (_store, mut wizard) = create_test_wizard();

    let on = wizard.set_custom_branding(SetCustomBranding {
        name: "Mascot Design".to_string(),
        price: Decimal::from(250),
    });
    assert!(wizard.order().custom_branding().active);
    assert_eq!(on.view.invoice.line_items[0].label, "Mascot Design");

    let off = wizard.set_custom_branding(SetCustomBranding {
        name: "Mascot Design".to_string(),
        price: Decimal::from(-5),
    });
    assert!(!wizard.order().custom_branding().active);
    assert!(off.view.invoice.is_empty());
}

#[test]
fn test_negative_package_price_is_clamped() {
    let (_store, mut wizard) = create_test_wizard();

    let applied = wizard.select_package(SelectPackage {
        price: Decimal::from(-100),
        ..growth(None)
    });

    assert_eq!(applied.view.invoice.total, Decimal::ZERO);
}

#[test]
fn test_page_annotation_merges() {
    let (_store, mut wizard) = create_test_wizard();

    wizard.set_page_annotation("Home", PlanAnnotation::Notes("Hero video".to_string()));
    wizard.set_page_annotation(
        "Home",
        PlanAnnotation::Integration {
            name: "Stripe".to_string(),
            enabled: true,
        },
    );
    let repeat = wizard.set_page_annotation("Home", PlanAnnotation::Notes("Hero video".to_string()));

    let plan = wizard.order().page_plan("Home").expect("Home plan");
    assert!(!repeat.changed);
    assert_eq!(plan.notes, "Hero video");
    assert!(plan.integrations.contains("Stripe"));
    assert!(wizard.invoice().is_empty());
}

#[test]
fn test_page_plan_survives_page_removal() {
    let (_store, mut wizard) = create_test_wizard();
    wizard.add_page("Blog");
    wizard.set_page_annotation("Blog", PlanAnnotation::Seo("recipes".to_string()));

    wizard.remove_page("Blog");

    assert!(wizard.order().page_plan("Blog").is_some());
}

#[test]
fn test_set_flowchart_prunes_dangling_connections() {
    let (_store, mut wizard) = create_test_wizard();
    let node = |id: &str| FlowNode {
        id: id.to_string(),
        text: id.to_string(),
        ..FlowNode::default()
    };
    let chart = FlowchartData {
        nodes: vec![node("home"), node("about")],
        connections: vec![
            Connection {
                from: "home".to_string(),
                to: "about".to_string(),
            },
            Connection {
                from: "home".to_string(),
                to: "ghost".to_string(),
            },
        ],
    };

    let applied = wizard.set_flowchart(chart);

    assert!(applied.changed);
    assert_eq!(wizard.order().flowchart_data().connections.len(), 1);
}

#[test]
fn test_set_industry_trims() {
    let (_store, mut wizard) = create_test_wizard();

    wizard.set_industry("  bakery ");

    assert_eq!(wizard.order().industry(), "bakery");
    assert!(!wizard.set_industry("bakery").changed);
}

#[test]
fn test_listeners_receive_snapshots() {
    let (_store, mut wizard) = create_test_wizard();
    let totals = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&totals);
    wizard.subscribe(move |view: &ViewSnapshot| seen.borrow_mut().push(view.invoice.total));

    wizard.toggle_brand_kit();
    wizard.add_page("");
    wizard.upsert_addon(seo_pack());

    assert_eq!(*totals.borrow(), vec![Decimal::from(500), Decimal::from(650)]);
}

#[test]
fn test_quota_failure_is_a_warning() {
    let (store, mut wizard) = create_test_wizard();
    wizard.add_page("Home");
    let saved = store.contents();
    store.set_quota(Some(8));

    let applied = wizard.add_page("About");

    assert!(applied.changed);
    assert!(matches!(
        applied.warning,
        Some(PersistError::QuotaExceeded { .. })
    ));
    assert_eq!(wizard.order().pages().len(), 2);
    assert_eq!(store.contents(), saved);
}

#[test]
fn test_listeners_notified_despite_warning() {
    let (store, mut wizard) = create_test_wizard();
    store.set_quota(Some(0));
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    wizard.subscribe(move |_: &ViewSnapshot| *counter.borrow_mut() += 1);

    let applied = wizard.toggle_brand_kit();

    assert!(applied.warning.is_some());
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_reload_round_trips_order() {
    let (store, mut wizard) = create_test_wizard();
    wizard.select_package(growth(Some(300)));
    wizard.toggle_brand_kit();
    wizard.set_industry("bakery");
    wizard.add_page("Menu");
    wizard.upsert_addon(AddonSpec {
        price: Decimal::new(1999, 2),
        ..seo_pack()
    });
    wizard.set_custom_branding(SetCustomBranding {
        name: "Mascot".to_string(),
        price: Decimal::from(250),
    });
    wizard.set_page_annotation(
        "Menu",
        PlanAnnotation::MobileSketch(Some("data:image/png;base64,AAAA".to_string())),
    );

    let reloaded = WizardBuilder::new()
        .with_store(store.clone())
        .build()
        .expect("Failed to reload wizard");

    assert_eq!(reloaded.order(), wizard.order());
    assert_eq!(reloaded.invoice(), wizard.invoice());
    assert!(reloaded.last_saved_at().is_some());
}

#[test]
fn test_explicit_save() {
    let (store, mut wizard) = create_test_wizard();

    wizard.save().expect("Failed to save");

    assert!(store.contents().is_some());
}

#[test]
fn test_mutation_enum_apply() {
    let mut order = Order::new();

    assert!(Mutation::AddPage("Home".to_string()).apply(&mut order));
    assert!(!Mutation::AddPage("Home".to_string()).apply(&mut order));
    assert!(!Mutation::RemoveAddon("missing".to_string()).apply(&mut order));
    assert_eq!(Mutation::ToggleBrandKit.name(), "toggle_brand_kit");
}

fn reload(store: &MemoryStore) -> Wizard {
    WizardBuilder::new()
        .with_store(store.clone())
        .build()
        .expect("Failed to reload wizard")
}

#[test]
fn test_huge_addon_prices_are_capped() {
    let (_store, mut wizard) = create_test_wizard();

    for id in ["a", "b"] {
        wizard.upsert_addon(AddonSpec {
            id: id.to_string(),
            name: id.to_string(),
            price: Decimal::MAX,
        });
    }

    let view = wizard.view();
    assert_eq!(wizard.order().addons()[0].price, MAX_PRICE);
    assert_eq!(view.invoice.total, MAX_PRICE * Decimal::TWO);
    assert_eq!(view.deposit, MAX_PRICE);
}

#[test]
fn test_huge_extra_page_cost_is_capped() {
    let (_store, mut wizard) = create_test_wizard();

    let applied = wizard.select_package(SelectPackage {
        price: Decimal::ZERO,
        included_pages: 0,
        extra_page_cost: Decimal::from_i128_with_scale(30_000_000_000_000_000_000_000_000_000, 0),
        ..growth(None)
    });

    assert_eq!(applied.view.pages.extra_pages, 4);
    assert_eq!(applied.view.invoice.total, MAX_PRICE * Decimal::from(4));
}

#[test]
fn test_stored_huge_prices_load_capped() {
    let store = MemoryStore::with_contents(
        r#"{"addons": [
            {"id": "a", "name": "A", "price": 5e28},
            {"id": "b", "name": "B", "price": 5e28}
        ]}"#,
    );

    let wizard = reload(&store);

    assert_eq!(wizard.view().invoice.total, MAX_PRICE * Decimal::TWO);
}

#[test]
fn test_prices_round_trip_exactly() {
    let (store, mut wizard) = create_test_wizard();
    wizard.upsert_addon(AddonSpec {
        id: "max".to_string(),
        name: "Largest".to_string(),
        price: Decimal::new(99_999_999_999, 2),
    });
    wizard.upsert_addon(AddonSpec {
        id: "long".to_string(),
        name: "Too many digits".to_string(),
        price: Decimal::from_i128_with_scale(1_234_567_890_123_456_789, 2),
    });

    let reloaded = reload(&store);

    assert_eq!(wizard.order().addons()[0].price, Decimal::new(99_999_999_999, 2));
    assert_eq!(wizard.order().addons()[1].price, MAX_PRICE);
    assert_eq!(reloaded.order(), wizard.order());
}

#[test]
fn test_integration_set_round_trips() {
    let (store, mut wizard) = create_test_wizard();

    wizard.set_page_annotation(
        "Home",
        PlanAnnotation::Integrations(
            ["".to_string(), " Stripe ".to_string()].into_iter().collect(),
        ),
    );

    let plan = wizard.order().page_plan("Home").expect("Home plan");
    assert_eq!(plan.integrations.len(), 1);
    assert!(plan.integrations.contains("Stripe"));
    assert_eq!(reload(&store).order(), wizard.order());
}

#[test]
fn test_non_finite_flowchart_geometry_round_trips() {
    let (store, mut wizard) = create_test_wizard();

    wizard.set_flowchart(FlowchartData {
        nodes: vec![FlowNode {
            id: "home".to_string(),
            x: f64::NAN,
            y: f64::INFINITY,
            w: 120.0,
            ..FlowNode::default()
        }],
        connections: vec![],
    });

    let node = &wizard.order().flowchart_data().nodes[0];
    assert_eq!((node.x, node.y, node.w), (0.0, 0.0, 120.0));
    assert_eq!(reload(&store).order(), wizard.order());
}
