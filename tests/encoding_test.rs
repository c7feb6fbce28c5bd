use rs_htmldoc::{Document, Error, Options};

fn from_bytes(html: &[u8]) -> Document {
    Document::from_bytes(html, &Options::default()).expect("document should parse")
}

fn first_text(doc: &Document, tag: &str) -> String {
    doc.tag(tag).first().map(|n| n.text()).unwrap_or_default()
}

/// UTF-8 content is handled correctly
#[test]
fn utf8_content_handled_correctly() {
    let html = "\
        <html>\
        <head><meta charset=\"utf-8\"></head>\
        <body><p class=\"intl\">Special characters: é, ñ, ü, 中文</p></body>\
        </html>\
    ".as_bytes();

    let doc = from_bytes(html);

    assert_eq!(first_text(&doc, "p"), "Special characters: é, ñ, ü, 中文");
}

/// ISO-8859-1 encoding is converted to UTF-8
#[test]
fn iso88591_converted_to_utf8() {
    // é = 0xE9, ñ = 0xF1, ü = 0xFC in ISO-8859-1
    let html = b"<html>\
        <head><meta charset=\"ISO-8859-1\"></head>\
        <body><h1>Caf\xE9 espa\xF1ol</h1><p>M\xFCnchen</p></body></html>";

    let doc = from_bytes(html);

    assert_eq!(first_text(&doc, "h1"), "Café español");
    assert_eq!(first_text(&doc, "p"), "München");
}

/// Windows-1252 from a Content-Type declaration
#[test]
fn windows1252_detected_from_content_type() {
    // 0x93 = left double quote, 0x94 = right double quote, 0x96 = en-dash
    let html = b"<html>\
        <head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>\
        <body><p>\x93Smart quotes\x94 and an en\x96dash.</p></body></html>";

    let doc = from_bytes(html);

    assert_eq!(first_text(&doc, "p"), "\u{201C}Smart quotes\u{201D} and an en\u{2013}dash.");
}

/// Attribute values are decoded too, so selectors can match them
#[test]
fn decoded_attribute_values_match_selectors() {
    let html = b"<meta charset=\"ISO-8859-1\"><p class=\"caf\xE9\">menu</p>";

    let doc = from_bytes(html);

    assert_eq!(doc.selector("p.café").first().map(|n| n.text()).as_deref(), Some("menu"));
}

/// Invalid bytes are replaced by default
#[test]
fn invalid_encoding_handled_gracefully() {
    let html = b"<html><body>\
        <p>Valid text</p>\
        <p>Invalid: \xFF\xFE\xFD</p>\
        <p>More valid text</p>\
        </body></html>";

    let doc = from_bytes(html);
    let texts: Vec<_> = doc.tag("p").all().iter().map(|n| n.text()).collect();

    assert_eq!(texts.len(), 3);
    assert_eq!(texts[0], "Valid text");
    assert!(texts[1].contains('\u{FFFD}'));
    assert_eq!(texts[2], "More valid text");
}

/// Strict decoding turns invalid bytes into a parse error
#[test]
fn strict_encoding_rejects_invalid_bytes() {
    let options = Options {
        strict_encoding: true,
        ..Options::default()
    };
    let html = b"<p>This has \x80\x81\x82 bad bytes</p>";

    let result = Document::from_bytes(html, &options);

    assert!(matches!(result, Err(Error::ParseError(_))));
}

/// Strict decoding accepts clean input in a legacy encoding
#[test]
fn strict_encoding_accepts_clean_latin1() {
    let options = Options {
        strict_encoding: true,
        ..Options::default()
    };
    let html = b"<meta charset=\"ISO-8859-1\"><p>\xE0 \xE8 \xEC \xF2 \xF9</p>";

    let doc = Document::from_bytes(html, &options).expect("clean latin-1 should parse");

    assert_eq!(first_text(&doc, "p"), "à è ì ò ù");
}

/// Test multiple charset declarations (first one wins)
#[test]
fn multiple_charset_declarations() {
    let html = b"<html>\
        <head><meta charset=\"ISO-8859-1\"><meta charset=\"UTF-8\"></head>\
        <body><p>Caf\xE9</p></body></html>";

    let doc = from_bytes(html);

    assert_eq!(first_text(&doc, "p"), "Café");
}

/// Test that UTF-8 BOM does not disturb queries
#[test]
fn utf8_bom_handled_correctly() {
    let html = b"\xEF\xBB\xBF<html><body><p>Content with BOM</p></body></html>";

    let doc = from_bytes(html);

    assert_eq!(first_text(&doc, "p"), "Content with BOM");
}

/// A meta tag claiming UTF-16 on ASCII markup is read as UTF-8
#[test]
fn declared_utf16_on_ascii_markup_reads_as_utf8() {
    let html = b"<html><head><meta charset=\"utf-16\"></head><body><p>Hello</p></body></html>";

    let doc = from_bytes(html);

    assert_eq!(first_text(&doc, "p"), "Hello");
}

/// A label mapped to the replacement encoding does not blank the document
#[test]
fn replacement_label_reads_as_utf8() {
    let html = b"<meta charset=\"iso-2022-kr\"><p>Plain text</p>";

    let doc = from_bytes(html);

    assert_eq!(first_text(&doc, "p"), "Plain text");
}
