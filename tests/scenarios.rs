use responsive_sheet::{
    create, create_oriented, create_sized, Breakpoints, ConfigurationError, Declaration,
    Orientations, ResponsiveSheet, StyleRegistry, Styles, TokenMap, Viewport,
};

/// Hands back each declaration as its own token, so results can be compared
/// against the input directly.
struct Passthrough;

impl StyleRegistry for Passthrough {
    type Token = Declaration;

    fn register(&self, styles: &Styles) -> TokenMap<Declaration> {
        styles
            .iter()
            .map(|(name, declaration)| (name.to_string(), declaration.clone()))
            .collect()
    }
}

fn width(value: i64) -> Declaration {
    Declaration::new().set("width", value)
}

fn height(value: i64) -> Declaration {
    Declaration::new().set("height", value)
}

fn buckets() -> Breakpoints {
    Breakpoints::new()
        .add(
            "100",
            Styles::new().add("foo", width(100)).add("bar", height(100)),
        )
        .add("10", Styles::new().add("foo", width(10)))
}

#[test]
fn test_create_acts_as_pass_through() {
    let styles = Styles::new().add("foo", width(420));
    let created = create(&Passthrough, &styles);

    assert_eq!(created.get("foo"), styles.get("foo"));
    assert_eq!(created.len(), 1);
}

#[test]
fn test_min_width_scenario() {
    let viewport = Viewport::new(0.0, 0.0);
    let sheet = create_sized(&Passthrough, viewport.clone(), "min-width", &buckets()).unwrap();

    assert_eq!(sheet.get("foo"), Some(vec![]), "no sizes matched");
    assert_eq!(sheet.get("bar"), Some(vec![]), "empty for other style");

    viewport.resize(10.0, 0.0);
    assert_eq!(sheet.get("foo"), Some(vec![width(10)]));
    assert_eq!(sheet.get("bar"), Some(vec![]));

    viewport.resize(99.0, 0.0);
    assert_eq!(sheet.get("foo"), Some(vec![width(10)]), "off by one");

    viewport.resize(100.0, 0.0);
    assert_eq!(sheet.get("foo"), Some(vec![width(10), width(100)]));
    assert_eq!(sheet.get("bar"), Some(vec![height(100)]));
}

#[test]
fn test_max_height_scenario() {
    let viewport = Viewport::new(0.0, 0.0);
    let sheet = create_sized(&Passthrough, viewport.clone(), "max-height", &buckets()).unwrap();

    assert_eq!(sheet.get("foo"), Some(vec![width(100), width(10)]));
    assert_eq!(sheet.get("bar"), Some(vec![height(100)]));

    viewport.resize(0.0, 10.0);
    assert_eq!(sheet.get("foo"), Some(vec![width(100), width(10)]));
    assert_eq!(sheet.get("bar"), Some(vec![height(100)]));

    viewport.resize(0.0, 11.0);
    assert_eq!(sheet.get("foo"), Some(vec![width(100)]), "only the largest");
    assert_eq!(sheet.get("bar"), Some(vec![height(100)]));

    viewport.resize(0.0, 99.0);
    assert_eq!(sheet.get("foo"), Some(vec![width(100)]), "off by one");

    viewport.resize(0.0, 200.0);
    assert_eq!(sheet.get("foo"), Some(vec![]));
    assert_eq!(sheet.get("bar"), Some(vec![]));
}

#[test]
fn test_oriented_scenario() {
    let styles = Orientations::new()
        .landscape(Styles::new().add("foo", width(420)))
        .portrait(
            Styles::new()
                .add("foo", height(420))
                .add("bar", Declaration::new().set("color", "red")),
        );
    let viewport = Viewport::new(100.0, 0.0);
    let sheet = create_oriented(&Passthrough, viewport.clone(), &styles);

    assert_eq!(sheet.get("foo").as_ref(), styles.landscape.get("foo"));
    assert_eq!(sheet.get("bar"), None);

    viewport.resize(0.0, 100.0);
    assert_eq!(sheet.get("foo").as_ref(), styles.portrait.get("foo"));
    assert_eq!(sheet.get("bar").as_ref(), styles.portrait.get("bar"));
}

#[test]
fn test_oriented_only_landscape_defined() {
    let styles = Orientations::new().landscape(Styles::new().add("foo", width(420)));
    let sheet = create_oriented(&Passthrough, Viewport::new(0.0, 100.0), &styles);

    assert_eq!(sheet.get("foo"), None);
}

#[test]
fn test_oriented_empty_styles() {
    let sheet = create_oriented(&Passthrough, Viewport::default(), &Orientations::new());

    assert_eq!(sheet.names().count(), 0);
    assert_eq!(sheet.get("foo"), None);
}

#[test]
fn test_reads_follow_viewport_without_rebuilding() {
    let viewport = Viewport::new(50.0, 0.0);
    let sheet = create_sized(&Passthrough, viewport.clone(), "max-width", &buckets()).unwrap();

    let before = sheet.get("foo");
    assert_eq!(before, sheet.get("foo"));

    viewport.resize(5.0, 0.0);
    let after = sheet.get("foo");
    assert_ne!(before, after);
    assert_eq!(after, Some(vec![width(100), width(10)]));
}

#[test]
fn test_duplicate_names_consult_every_bucket() {
    let breakpoints = Breakpoints::new()
        .at(300, Styles::new().add("card", width(3)))
        .at(100, Styles::new().add("card", width(1)).add("label", height(1)))
        .at(200, Styles::new().add("label", height(2)).add("card", width(2)));

    let viewport = Viewport::new(250.0, 0.0);
    let sheet = create_sized(&Passthrough, viewport, "min-width", &breakpoints).unwrap();

    assert_eq!(sheet.names().collect::<Vec<_>>(), ["card", "label"]);
    assert_eq!(sheet.get("card"), Some(vec![width(1), width(2)]));
    assert_eq!(sheet.get("label"), Some(vec![height(1), height(2)]));
}

#[test]
fn test_sheets_share_one_viewport() {
    let viewport = Viewport::new(800.0, 600.0);
    let sized = create_sized(&Passthrough, viewport.clone(), "min-width", &buckets()).unwrap();
    let oriented = create_oriented(
        &Passthrough,
        viewport.clone(),
        &Orientations::new().portrait(Styles::new().add("foo", height(1))),
    );

    assert_eq!(sized.get("foo").map(|s| s.len()), Some(2));
    assert_eq!(oriented.get("foo"), None);

    viewport.resize(50.0, 600.0);
    assert_eq!(sized.get("foo").map(|s| s.len()), Some(1));
    assert_eq!(oriented.get("foo"), Some(height(1)));
}

fn first_value<S: ResponsiveSheet>(sheet: &S) -> Option<S::Value> {
    let name = sheet.names().next()?.to_string();
    sheet.get(&name)
}

#[test]
fn test_out_of_range_threshold_is_rejected() {
    let breakpoints = Breakpoints::new()
        .add("2147483647", Styles::new().add("foo", width(1)))
        .add("9999999999", Styles::new().add("foo", width(2)));

    let viewport = Viewport::default();
    let err = create_sized(&Passthrough, viewport, "min-width", &breakpoints).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::InvalidThreshold {
            key: "9999999999".to_string()
        }
    );
}

#[test]
fn test_generic_read_through_trait() {
    let viewport = Viewport::new(10.0, 0.0);
    let sheet = create_sized(&Passthrough, viewport, "min-width", &buckets()).unwrap();
    assert_eq!(first_value(&sheet), Some(vec![width(10)]));
}
