use super::*;

#[test]
fn filters_serialize_with_fixed_separators() {
    assert_eq!(Filter::bare("hflip").to_string(), "hflip");
    assert_eq!(
        Filter::positional("crop", ["100", "50", "10", "0"]).to_string(),
        "crop=100:50:10:0"
    );
    assert_eq!(
        Filter::keyed("eq", [("brightness", "0.2"), ("contrast", "1.1")]).to_string(),
        "eq=brightness=0.2:contrast=1.1"
    );
    assert_eq!(
        Filter::op(
            "overlay",
            vec![
                FilterArg::value("(W-w)/2"),
                FilterArg::value("(H-h)/2"),
                FilterArg::named("format", "auto"),
            ],
        )
        .to_string(),
        "overlay=(W-w)/2:(H-h)/2:format=auto"
    );
    assert_eq!(Filter::raw("curves=vintage, sobel").to_string(), "curves=vintage, sobel");
}

#[test]
fn expression_joins_with_commas() {
    let mut e = FilterExpression::new();
    assert!(e.clone().non_empty().is_none());
    e.push(Filter::positional("transpose", ["1"]));
    e.push(Filter::positional("transpose", ["1"]));
    e.push(Filter::bare("negate"));
    assert_eq!(e.to_string(), "transpose=1,transpose=1,negate");
    assert_eq!(e.len(), 3);
    assert!(e.contains_op("negate"));
    assert!(!e.contains_op("hflip"));
}

#[test]
fn raw_stages_have_no_name() {
    let e: FilterExpression = [Filter::raw("sobel")].into_iter().collect();
    assert_eq!(e.filters()[0].name(), None);
    assert!(!e.contains_op("sobel"));
}
