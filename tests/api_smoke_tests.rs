use china_map::api::{DrilldownCatalog, Lifecycle, MapViewController, Transition, ViewState};
use china_map::core::{BoundaryDataset, RegionCode};
use china_map::surface::HeadlessSurface;
use china_map::view::ViewConfiguration;

fn feature_collection() -> BoundaryDataset {
    BoundaryDataset::from_string(r#"{"type":"FeatureCollection","features":[]}"#)
}

#[test]
fn map_view_smoke_flow() {
    let catalog =
        DrilldownCatalog::china(feature_collection(), feature_collection()).expect("catalog");
    let mut controller =
        MapViewController::mount(HeadlessSurface::new(), catalog).expect("mount");

    assert_eq!(controller.lifecycle(), Lifecycle::Active);
    assert_eq!(controller.view_state(), ViewState::National);

    assert!(controller.surface().click_feature("江西省"));
    let transitions = controller.dispatch_pending().expect("dispatch");
    assert_eq!(transitions, vec![Transition::DrilledDown(RegionCode::JIANGXI)]);
    assert_eq!(
        controller.view_state(),
        ViewState::Province(RegionCode::new(360000))
    );
    assert_eq!(
        controller.surface().current_configuration(),
        Some(&ViewConfiguration::jiangxi())
    );

    assert!(controller.surface().click_background());
    controller.dispatch_pending().expect("dispatch");
    assert_eq!(controller.view_state(), ViewState::National);
    assert_eq!(
        controller.current_configuration(),
        &ViewConfiguration::national()
    );

    controller.dispose();
    assert!(controller.surface().is_released());
    assert!(!controller.surface().click_background());
}
