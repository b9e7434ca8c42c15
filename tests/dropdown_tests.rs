use wagt::dropdown::{Dropdown, DropdownAction, Geometry, Placement, expanded_height, update};

fn geometry(viewport_height: f64, anchor_top: f64, menu_scroll_height: f64) -> Geometry {
    Geometry {
        viewport_height,
        anchor_top,
        menu_scroll_height,
    }
}

#[test]
fn test_menu_height_is_capped() {
    assert_eq!(geometry(800.0, 0.0, 120.0).menu_height(), 120.0);
    assert_eq!(geometry(800.0, 0.0, 900.0).menu_height(), 300.0);
}

#[test]
fn test_unmeasurable_menu_uses_full_cap() {
    assert_eq!(geometry(800.0, 0.0, f64::NAN).menu_height(), 300.0);
    assert_eq!(geometry(800.0, 0.0, f64::INFINITY).menu_height(), 300.0);
    // 800 - 500 = 300 < 300 + 50
    assert_eq!(geometry(800.0, 500.0, f64::NAN).placement(), Placement::Above);
}

#[test]
fn test_opens_below_with_room() {
    assert_eq!(geometry(800.0, 100.0, 200.0).placement(), Placement::Below);
}

#[test]
fn test_opens_above_near_bottom() {
    // 800 - 600 = 200 < 200 + 50
    assert_eq!(geometry(800.0, 600.0, 200.0).placement(), Placement::Above);
}

#[test]
fn test_placement_boundary() {
    // Exactly menu + margin of room stays below
    assert_eq!(geometry(800.0, 550.0, 200.0).placement(), Placement::Below);
    assert_eq!(geometry(800.0, 551.0, 200.0).placement(), Placement::Above);
}

#[test]
fn test_tall_menu_uses_capped_height() {
    // Needs 350 of room, not 1050
    assert_eq!(geometry(800.0, 400.0, 1000.0).placement(), Placement::Below);
}

#[test]
fn test_open_sets_placement() {
    let mut d = Dropdown::new();
    update(&mut d, DropdownAction::Open(Some(geometry(800.0, 700.0, 100.0))));
    assert!(d.open);
    assert!(d.show_top());
}

#[test]
fn test_open_without_geometry_keeps_placement() {
    let mut d = Dropdown {
        open: false,
        placement: Placement::Above,
    };
    update(&mut d, DropdownAction::Open(None));
    assert!(d.open);
    assert_eq!(d.placement, Placement::Above);
}

#[test]
fn test_close() {
    let mut d = Dropdown::new();
    update(&mut d, DropdownAction::Open(None));
    update(&mut d, DropdownAction::Close);
    assert!(!d.open);
}

#[test]
fn test_click_inside_keeps_open() {
    let mut d = Dropdown::new();
    update(&mut d, DropdownAction::Open(None));
    update(&mut d, DropdownAction::Click { inside: true });
    assert!(d.open);
}

#[test]
fn test_click_outside_closes() {
    let mut d = Dropdown::new();
    update(&mut d, DropdownAction::Open(None));
    update(&mut d, DropdownAction::Click { inside: false });
    assert!(!d.open);
}

#[test]
fn test_expanded_height() {
    assert_eq!(expanded_height(true, 240.0).as_deref(), Some("240px"));
    assert_eq!(expanded_height(false, 240.0), None);
}
