#![cfg(test)]

use core::error::Error;
use style_orchestrator::passes::{BasePass, ShorthandPass};
use style_orchestrator::{NormalizedStyle, NormalizedValue, Pass, Pipeline, RawStyle};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn px(value: f64) -> Option<NormalizedValue> {
    Some(NormalizedValue::Px(value))
}

#[test]
fn window_and_view_from_json() -> Result<(), Box<dyn Error>> {
    init_logging();
    let window: RawStyle = serde_json::from_str(r#"{ "width": "480px", "height": "320px" }"#)?;
    let view: RawStyle = serde_json::from_str(
        r#"{
            "border-radius": "10px",
            "background-color": "grey",
            "border-color": "blue",
            "border-width": 5,
            "border-side": "right-bottom",
            "opacity": 1
        }"#,
    )?;
    let pipeline = Pipeline::default();

    let window_out = pipeline.normalize(&window);
    assert_eq!(
        serde_json::to_string(&window_out)?,
        r#"{"height":320.0,"width":480.0}"#
    );

    let view_out = pipeline.normalize(&view);
    assert_eq!(view_out.get("border-radius").copied(), px(10.0));
    assert_eq!(view_out.get("border-width").copied(), px(5.0));
    assert_eq!(
        view_out.get("border-color"),
        Some(&NormalizedValue::Packed(0xFF00_00FF))
    );
    assert!(view_out.contains_key("background-color"));
    // Compound side keywords are not decomposed into flags.
    assert!(!view_out.contains_key("border-side"));
    assert!(!view_out.contains_key("opacity"));
    Ok(())
}

#[test]
fn shorthand_runs_after_base_and_wins() {
    init_logging();
    let style = RawStyle::new()
        .with("padding-left", "100px")
        .with("padding", "1 2 3 4");
    let result = Pipeline::default().normalize(&style);
    assert_eq!(result.get("padding-left").copied(), px(1.0));
    assert_eq!(result.get("padding-top").copied(), px(2.0));
    assert_eq!(result.get("padding-right").copied(), px(3.0));
    assert_eq!(result.get("padding-bottom").copied(), px(4.0));
}

#[test]
fn reversed_order_lets_longhand_win() {
    init_logging();
    let style = RawStyle::new()
        .with("padding-left", "100px")
        .with("padding", 5);
    let pipeline = Pipeline::empty()
        .with_pass(ShorthandPass)
        .with_pass(BasePass::new());
    let result = pipeline.normalize(&style);
    assert_eq!(result.get("padding-left").copied(), px(100.0));
    assert_eq!(result.get("padding-top").copied(), px(5.0));
}

#[test]
fn flex_container_defaults_and_identity() {
    init_logging();
    let pipeline = Pipeline::default();

    let flex = pipeline.normalize(&RawStyle::new().with("display", "flex"));
    assert_eq!(flex.get("flex-flow"), Some(&NormalizedValue::Packed(0)));
    assert_eq!(flex.get("flex-align"), Some(&NormalizedValue::Tuple([0, 0, 0])));

    let block = RawStyle::new()
        .with("display", "block")
        .with("width", 10)
        .with("justify-content", "center");
    let without_flex = Pipeline::empty().with_pass(BasePass::new()).normalize(&block);
    assert_eq!(pipeline.normalize(&block), without_flex);
}

#[test]
fn full_pass_chain() {
    init_logging();
    let style = RawStyle::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("flex-wrap", "wrap")
        .with("justify-content", "center")
        .with("align-items", "flex-end")
        .with("align-content", "space-around")
        .with("flex-grow", 1)
        .with("text-align", "right")
        .with("overflow-scroll", "off")
        .with("scroll-dir", "horizontal")
        .with("width", "100%")
        .with("color", "white");
    let result = Pipeline::default().normalize(&style);
    assert_eq!(result.get("flex-flow"), Some(&NormalizedValue::Packed(0b0101)));
    assert_eq!(result.get("flex-align"), Some(&NormalizedValue::Tuple([2, 1, 4])));
    assert_eq!(result.get("flex-grow"), Some(&NormalizedValue::Number(1.0)));
    assert_eq!(result.get("text-align"), Some(&NormalizedValue::Packed(3)));
    assert_eq!(result.get("scrollbar-mode"), Some(&NormalizedValue::Packed(0)));
    assert_eq!(result.get("scroll-dir"), Some(&NormalizedValue::Packed(0b0011)));
    assert_eq!(result.get("width_pct"), Some(&NormalizedValue::Percent(100.0)));
    assert_eq!(result.get("color"), Some(&NormalizedValue::Packed(0xFFFF_FFFF)));
}

#[test]
fn normalizing_twice_is_identical() {
    init_logging();
    let style = RawStyle::new()
        .with("padding", "1 2")
        .with("height", "50%")
        .with("display", "flex");
    let pipeline = Pipeline::default();
    let first = pipeline.normalize(&style);
    let second = pipeline.normalize(&style);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn custom_pass_sees_accumulated_result() {
    init_logging();
    let double_width = |_: &RawStyle, mut result: NormalizedStyle| {
        if let Some(&NormalizedValue::Px(width)) = result.get("width") {
            result.insert("width", NormalizedValue::Px(width * 2.0));
        }
        result
    };
    let pipeline = Pipeline::default().with_pass(double_width);
    let result = pipeline.normalize(&RawStyle::new().with("width", "21px"));
    assert_eq!(result.get("width").copied(), px(42.0));
    assert_eq!(pipeline.len(), 6);
    assert_eq!(double_width.name(), "anonymous");
}

#[test]
fn inline_declarations() {
    init_logging();
    let result =
        Pipeline::default().normalize_inline("width: 50%; padding: 4; border-side: top; color: red");
    assert_eq!(result.get("width_pct"), Some(&NormalizedValue::Percent(50.0)));
    assert_eq!(result.get("padding-bottom").copied(), px(4.0));
    assert_eq!(result.get("border-side"), Some(&NormalizedValue::Packed(0x02)));
    assert_eq!(result.get("color"), Some(&NormalizedValue::Packed(0xFFFF_0000)));
}
