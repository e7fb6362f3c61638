use china_map::api::{DrilldownCatalog, MapViewController, Transition, ViewState};
use china_map::core::{BoundaryDataset, RegionCode};
use china_map::interaction::MapEvent;
use china_map::surface::HeadlessSurface;
use proptest::prelude::*;

fn click_strategy() -> impl Strategy<Value = MapEvent> {
    prop_oneof![
        Just(MapEvent::BackgroundClicked),
        Just(MapEvent::feature("江西省")),
        Just(MapEvent::feature("安徽省")),
        Just(MapEvent::feature("中国")),
        "[a-z]{1,8}".prop_map(|name| MapEvent::FeatureClicked { name }),
    ]
}

fn mounted() -> MapViewController<HeadlessSurface> {
    let dataset = BoundaryDataset::from_string(r#"{"type":"FeatureCollection","features":[]}"#);
    let catalog = DrilldownCatalog::china(dataset.clone(), dataset).expect("catalog");
    MapViewController::mount(HeadlessSurface::new(), catalog).expect("mount")
}

proptest! {
    #[test]
    fn view_state_always_matches_rendered_configuration(
        clicks in proptest::collection::vec(click_strategy(), 0..40)
    ) {
        let mut controller = mounted();

        for click in clicks {
            let before = controller.view_state();
            let transition = controller.handle_event(click).expect("transition");

            let expected = match transition {
                Transition::DrilledDown(code) => ViewState::Province(code),
                Transition::ResetToNational => ViewState::National,
                Transition::Ignored => before,
            };
            prop_assert_eq!(controller.view_state(), expected);
            prop_assert_eq!(
                controller.surface().current_configuration(),
                Some(controller.current_configuration())
            );
        }
    }

    #[test]
    fn queued_and_direct_dispatch_agree(
        clicks in proptest::collection::vec(click_strategy(), 0..40)
    ) {
        let mut direct = mounted();
        let mut queued = mounted();

        let mut direct_transitions = Vec::new();
        for click in &clicks {
            direct_transitions.push(direct.handle_event(click.clone()).expect("direct"));
            match click {
                MapEvent::FeatureClicked { name } => {
                    prop_assert!(queued.surface().click_feature(name));
                }
                MapEvent::BackgroundClicked => {
                    prop_assert!(queued.surface().click_background());
                }
            }
        }
        let queued_transitions = queued.dispatch_pending().expect("queued");

        prop_assert_eq!(queued_transitions, direct_transitions);
        prop_assert_eq!(queued.view_state(), direct.view_state());
    }

    #[test]
    fn only_jiangxi_ever_drills_down(
        clicks in proptest::collection::vec(click_strategy(), 1..40)
    ) {
        let mut controller = mounted();
        for click in clicks {
            if let Transition::DrilledDown(code) = controller.handle_event(click).expect("transition") {
                prop_assert_eq!(code, RegionCode::JIANGXI);
            }
        }
    }
}
