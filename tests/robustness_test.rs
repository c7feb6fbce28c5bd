use rs_htmldoc::{Document, Error, Options};
use std::time::{Duration, Instant};

#[test]
fn new_does_not_fail_on_unclosed_tags() {
    let doc = Document::new("<p>text<div>more").expect("parser recovers");
    assert_eq!(doc.tag("p").first().map(|n| n.text()).as_deref(), Some("text"));
    assert_eq!(doc.tag("div").first().map(|n| n.text()).as_deref(), Some("more"));
}

#[test]
fn new_does_not_fail_on_invalid_nesting() {
    let doc = Document::new("<p><div></p></div>").expect("parser recovers");
    assert!(doc.tag("div").exists());
}

#[test]
fn new_does_not_fail_on_broken_attributes() {
    let doc = Document::new("<div class=\"test id=broken>").expect("parser recovers");
    assert!(doc.class("test").first().is_none());
}

#[test]
fn empty_input_still_has_a_skeleton() {
    for html in ["", "   \n\t  ", "<html></html>", "<body></body>"] {
        let doc = Document::new(html).expect("empty input parses");
        assert_eq!(doc.tag("body").count(), 1, "input {html:?}");
        assert!(doc.tag("a").first().is_none());
        assert_eq!(doc.tag("body").first().map(|n| n.text()).as_deref(), Some(""));
    }
}

#[test]
fn text_only_input_is_wrapped_in_body() {
    let doc = Document::new("&amp text &lt;").expect("parser recovers");
    let body = doc.tag("body").first().expect("implied body");
    assert_eq!(body.text(), "& text <");
}

#[test]
fn script_text_is_text_content() {
    let doc = Document::new("<body><script>alert('x')</script><p>Safe</p></body>").unwrap();
    assert_eq!(doc.tag("script").first().map(|n| n.text()).as_deref(), Some("alert('x')"));
    assert_eq!(doc.tag("p").first().map(|n| n.text()).as_deref(), Some("Safe"));
}

#[test]
fn null_bytes_are_tolerated() {
    assert!(Document::new("text\x00more").is_ok());
}

#[test]
fn deep_nesting_past_limit_is_a_parse_error() {
    let html = "<div>".repeat(600);
    let result = Document::new(&html);
    assert!(matches!(result, Err(Error::ParseError(_))));

    let relaxed = Options {
        max_depth: 1000,
        ..Options::default()
    };
    let doc = Document::with_options(&html, &relaxed).expect("within relaxed limit");
    assert_eq!(doc.tag("div").count(), 600);

    let innermost = doc.tag("div").all().pop().expect("innermost div");
    assert_eq!(innermost.parent().tag("div").count(), 599);
    assert!(innermost.parent().tag("body").exists());
}

#[test]
fn large_document_queries_complete() {
    let target_size = 4 * 1024 * 1024;
    let chunk = r#"<li><a href="/item" class="item">Some repeated content</a></li>"#;
    let mut html = String::with_capacity(target_size + 128);
    html.push_str("<html><body><ul>");
    let mut items = 0;
    while html.len() < target_size {
        html.push_str(chunk);
        items += 1;
    }
    html.push_str(r#"<li><a href="/last" class="last">Last</a></li></ul></body></html>"#);

    let start = Instant::now();
    let doc = Document::new(&html).expect("large document parses");
    assert_eq!(doc.selector("a.item").count(), items);
    assert_eq!(doc.selector("a.last").first().map(|n| n.text()).as_deref(), Some("Last"));
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_secs(30), "large HTML querying took {elapsed:?}");
}
