use super::*;

#[test]
fn short_stderr_is_kept() {
    let r = ExecutionReport::new(Some(0), "done\n");
    assert!(r.succeeded());
    assert_eq!(r.diagnostic, "done");
}

#[test]
fn long_stderr_keeps_the_tail() {
    let mut stderr = "x".repeat(1000);
    stderr.push_str("Error while opening encoder");
    let r = ExecutionReport::new(Some(1), &stderr);
    assert!(!r.succeeded());
    assert_eq!(r.diagnostic.chars().count(), DIAGNOSTIC_LIMIT);
    assert!(r.diagnostic.ends_with("Error while opening encoder"));
}

#[test]
fn multibyte_text_is_cut_on_char_boundaries() {
    let stderr = "ошибка ".repeat(200);
    let r = ExecutionReport::new(None, &stderr);
    assert_eq!(r.diagnostic.chars().count(), DIAGNOSTIC_LIMIT);
    assert!(!r.succeeded());
}
