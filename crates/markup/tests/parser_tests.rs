//! Tests for parsing and re-serializing HTML fragments.

use markup::{parse, to_html, Element, MarkupParseError, Node, Tag};

fn roundtrip(input: &str) -> String {
    to_html(&parse(input).unwrap())
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn roundtrip_plain_text() {
    assert_eq!(roundtrip("Hello World"), "Hello World");
}

#[test]
fn roundtrip_whitespace_is_kept() {
    assert_eq!(roundtrip("  a \n b  "), "  a \n b  ");
}

#[test]
fn roundtrip_nested_markup() {
    let input = r#"<p class="lead">Some <em>very <b>bold</b></em> text</p>"#;
    assert_eq!(roundtrip(input), input);
}

#[test]
fn roundtrip_entities_are_verbatim() {
    assert_eq!(roundtrip("fish &amp; chips"), "fish &amp; chips");
}

#[test]
fn roundtrip_attribute_with_double_quotes() {
    let nodes = parse(r#"<a title='say "hi"'>go</a>"#).unwrap();
    let html = to_html(&nodes);
    assert_eq!(html, r#"<a title='say "hi"'>go</a>"#);

    let back = parse(&html).unwrap();
    let link = back[0].as_element().unwrap();
    assert_eq!(link.tag.attribute("title"), Some(r#"say "hi""#));
}

#[test]
fn roundtrip_text_joined_around_comment_stays_text() {
    let nodes = parse("x<<!-- c -->!y").unwrap();
    assert_eq!(nodes, vec![Node::Text("x<!y".to_string())]);

    let html = to_html(&nodes);
    assert_eq!(html, "x&lt;!y");
    assert!(parse(&html).is_ok());
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn normalize_tag_case_and_quotes() {
    insta::assert_snapshot!(
        roundtrip("<A HREF='/x' Target=_blank>link</A>"),
        @r#"<a href="/x" target="_blank">link</a>"#
    );
}

#[test]
fn normalize_break_forms() {
    assert_eq!(roundtrip("a<br/>b<BR>c<br />d"), "a<br>b<br>c<br>d");
}

#[test]
fn normalize_void_and_self_closing() {
    assert_eq!(
        roundtrip(r#"<img src="a.png"/><span/>x"#),
        r#"<img src="a.png"><span></span>x"#
    );
}

#[test]
fn normalize_drops_comments_and_doctype() {
    assert_eq!(roundtrip("<!doctype html><!-- c -->text"), "text");
}

#[test]
fn normalize_boolean_attributes() {
    assert_eq!(
        roundtrip("<input type=checkbox checked>"),
        r#"<input type="checkbox" checked>"#
    );
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn structure_of_link_inside_paragraph() {
    let nodes = parse(r#"<p>go <a href="/home">home</a></p>"#).unwrap();
    let expected = vec![Node::Element(Element::new(Tag::new("p")).with_children(vec![
        Node::Text("go ".to_string()),
        Node::Element(
            Element::new(Tag::new("a").with_attribute("href", "/home"))
                .with_children(vec![Node::Text("home".to_string())]),
        ),
    ]))];
    assert_eq!(nodes, expected);
}

#[test]
fn element_clone_is_deep() {
    let nodes = parse("<b><i>x</i></b>").unwrap();
    let original = nodes[0].as_element().unwrap().clone();
    let mut copy = original.clone();
    copy.children.clear();
    assert_eq!(original.children.len(), 1);
    assert_eq!(original.to_html(), "<b><i>x</i></b>");
}

#[test]
fn text_content_skips_tags_and_breaks() {
    let nodes = parse("<div>one <b>two</b><br>three</div>").unwrap();
    assert_eq!(nodes[0].text(), "one twothree");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn error_unclosed_tag() {
    assert_eq!(parse("ok <b"), Err(MarkupParseError::UnclosedTag(3)));
}

#[test]
fn error_unexpected_close_tag() {
    assert_eq!(
        parse("<b>x</b></b>"),
        Err(MarkupParseError::UnexpectedCloseTag(8, "b".to_string()))
    );
}

#[test]
fn error_invalid_tag_name_after_letter() {
    assert!(matches!(
        parse("<a$b>x</a$b>"),
        Err(MarkupParseError::InvalidTagName(0, _))
    ));
}

#[test]
fn error_messages_are_descriptive() {
    let err = parse("<b>x</i>").unwrap_err();
    assert_eq!(err.to_string(), "unexpected close tag </i> at position 4");
}
