use super::*;
use arbor_content::Document;
use serde_json::{Value, json};

fn ctx() -> PostBodyContext {
    PostBodyContext::new("#0099ff", "#336699")
}

fn doc(content: Value) -> Document {
    serde_json::from_value(json!({
        "nodeType": "document",
        "data": {},
        "content": content
    }))
    .unwrap()
}

fn text(value: &str) -> Value {
    json!({ "nodeType": "text", "value": value, "marks": [], "data": {} })
}

fn marked_text(value: &str, marks: &[&str]) -> Value {
    let marks: Vec<Value> = marks.iter().map(|m| json!({ "type": m })).collect();
    json!({ "nodeType": "text", "value": value, "marks": marks, "data": {} })
}

fn asset_node(mime: &str, url: &str) -> Value {
    json!({
        "nodeType": "embedded-asset-block",
        "data": { "target": { "fields": {
            "title": "A title",
            "description": "A description",
            "file": { "url": url, "fileName": "file.bin", "contentType": mime }
        }}},
        "content": []
    })
}

fn entry_node(node_type: &str, id: &str, fields: Value) -> Value {
    json!({
        "nodeType": node_type,
        "data": { "target": {
            "sys": { "contentType": { "sys": { "id": id } } },
            "fields": fields
        }},
        "content": []
    })
}

fn render(content: Value) -> String {
    render_post_body(&doc(content), &ctx()).unwrap()
}

fn render_strict(content: Value) -> Result<String, RenderError> {
    render_post_body(&doc(content), &ctx().strict())
}

#[test]
fn smoke() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [text("Hello world")] }
    ]));
    assert!(html.contains("Hello world"));
}

#[test]
fn every_block_type_produces_exactly_one_output() {
    let cases: Vec<(Value, &str)> = vec![
        (
            json!({ "nodeType": "paragraph", "data": {}, "content": [text("p")] }),
            "<p>",
        ),
        (
            json!({ "nodeType": "heading-1", "data": {}, "content": [text("h")] }),
            "<h1>",
        ),
        (
            json!({ "nodeType": "heading-2", "data": {}, "content": [text("h")] }),
            "<h2>",
        ),
        (
            json!({ "nodeType": "heading-3", "data": {}, "content": [text("h")] }),
            "<h3>",
        ),
        (
            json!({ "nodeType": "heading-4", "data": {}, "content": [text("h")] }),
            "<h4>",
        ),
        (
            json!({ "nodeType": "heading-5", "data": {}, "content": [text("h")] }),
            "<h5>",
        ),
        (
            json!({ "nodeType": "heading-6", "data": {}, "content": [text("h")] }),
            "<em class=\"post-emphasis\"",
        ),
        (
            json!({ "nodeType": "blockquote", "data": {}, "content": [text("q")] }),
            "<blockquote class=\"post-quote\"",
        ),
        (json!({ "nodeType": "hr", "data": {}, "content": [] }), "<hr />"),
        (
            json!({ "nodeType": "unordered-list", "data": {}, "content": [] }),
            "<ul>",
        ),
        (
            json!({ "nodeType": "ordered-list", "data": {}, "content": [] }),
            "<ol>",
        ),
    ];

    for (node, expected) in cases {
        let mut html = String::new();
        let node: Node = serde_json::from_value(node).unwrap();
        render_node(&mut html, &node, &ctx()).unwrap();
        assert!(
            html.contains(expected),
            "expected {expected:?} in {html:?}"
        );
        // one output rule per node: exactly one top-level open tag
        assert_eq!(html.matches(expected).count(), 1);
    }
}

#[test]
fn paragraph_wraps_children() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [text("a & b")] }
    ]));
    assert_eq!(html, "<div class=\"post-body\" style=\"--post-color: #0099ff\">\n<p>a &amp; b</p>\n</div>\n");
}

#[test]
fn text_marks_nest_and_escape() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            marked_text("<bold> & italic", &["bold", "italic"])
        ]}
    ]));
    assert!(html.contains("<strong><em>&lt;bold&gt; &amp; italic</em></strong>"));
}

#[test]
fn code_mark_renders_a_quote_bubble() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            marked_text("aside text", &["code"])
        ]}
    ]));
    assert!(html.contains("<blockquote class=\"quote-bubble\""));
    assert!(html.contains("background-color: #336699"));
    // #336699 is dark on YIQ, so the bubble text is white
    assert!(html.contains("color: #ffffff"));
    assert!(html.contains("aside text"));
}

#[test]
fn whitespace_only_code_mark_renders_nothing() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            marked_text("   \n\t ", &["code"])
        ]}
    ]));
    assert_eq!(html, "<div class=\"post-body\" style=\"--post-color: #0099ff\">\n<p></p>\n</div>\n");
    assert!(!html.contains("quote-bubble"));
}

#[test]
fn heading_six_uses_the_complementary_color() {
    let html = render(json!([
        { "nodeType": "heading-6", "data": {}, "content": [text("aside")] }
    ]));
    assert!(html.contains("<em class=\"post-emphasis\" style=\"color: #336699\">aside</em>"));
}

#[test]
fn image_asset_renders_an_image_element() {
    let html = render(json!([asset_node("image/jpeg", "https://images.example.com/a.jpg")]));
    assert!(html.contains("<img class=\"post-image\""));
    assert!(html.contains("loading=\"lazy\""));
    assert!(html.contains("title=\"A title\""));
    assert!(html.contains("alt=\"A description\""));
    assert!(html.contains("src=\"https://images.example.com/a.jpg\""));
}

#[test]
fn video_asset_renders_a_video_embed() {
    let html = render(json!([asset_node("video/mp4", "https://videos.example.com/a.mp4")]));
    assert!(html.contains("<video class=\"post-video\""));
    assert!(html.contains("<source src=\"https://videos.example.com/a.mp4\" type=\"video/mp4\" />"));
}

#[test]
fn application_asset_renders_a_download_link() {
    let html = render(json!([asset_node("application/pdf", "https://files.example.com/a.pdf")]));
    assert!(html.contains("<a class=\"post-attachment\" href=\"https://files.example.com/a.pdf\">"));
    assert!(html.contains("A title</a>"));
}

#[test]
fn unrecognized_mime_group_is_dropped_when_lenient() {
    let html = render(json!([asset_node("font/woff", "https://files.example.com/a.woff")]));
    assert_eq!(html, "<div class=\"post-body\" style=\"--post-color: #0099ff\">\n</div>\n");
}

#[test]
fn unrecognized_mime_group_raises_when_strict() {
    let err = render_strict(json!([asset_node("font/woff", "https://files.example.com/a.woff")]))
        .unwrap_err();
    match err {
        RenderError::UnrecognizedMimeType { mime } => assert_eq!(mime, "font/woff"),
        other => panic!("expected UnrecognizedMimeType, got {other:?}"),
    }
}

#[test]
fn source_code_entry_carries_fields_unchanged() {
    let html = render(json!([entry_node(
        "embedded-entry-block",
        "sourceCode",
        json!({ "title": "Adder", "code": "let x = 1;", "language": "rust" })
    )]));
    assert!(html.contains("<figcaption>Adder</figcaption>"));
    assert!(html.contains("let x = 1;"));
    assert!(html.contains("class=\"language-rust\""));
}

#[test]
fn gallery_entry_renders_images_and_caption() {
    let html = render(json!([entry_node(
        "embedded-entry-block",
        "imageGallery",
        json!({
            "title": "Trip",
            "images": [
                { "fields": { "file": { "url": "https://img.example.com/1.jpg", "contentType": "image/jpeg" } } },
                { "fields": { "file": { "url": "https://img.example.com/2.jpg", "contentType": "image/jpeg" } } }
            ]
        })
    )]));
    assert_eq!(html.matches("<img class=\"gallery-image\"").count(), 2);
    assert!(html.contains("<h6 class=\"gallery-title\">Trip</h6>"));
}

#[test]
fn youtube_entry_renders_an_iframe() {
    let html = render(json!([entry_node(
        "embedded-entry-block",
        "youtubeVideo",
        json!({ "title": "Talk", "url": "https://www.youtube.com/watch?v=abc123" })
    )]));
    assert!(html.contains("<iframe src=\"https://www.youtube-nocookie.com/embed/abc123\""));
}

#[test]
fn unrecognized_entry_is_dropped_when_lenient() {
    let html = render(json!([entry_node(
        "embedded-entry-block",
        "newsletterSignup",
        json!({ "headline": "Join" })
    )]));
    assert_eq!(html, "<div class=\"post-body\" style=\"--post-color: #0099ff\">\n</div>\n");
}

#[test]
fn unrecognized_entry_raises_when_strict() {
    let err = render_strict(json!([entry_node(
        "embedded-entry-block",
        "newsletterSignup",
        json!({ "headline": "Join" })
    )]))
    .unwrap_err();
    match err {
        RenderError::UnrecognizedContentType { id } => assert_eq!(id, "newsletterSignup"),
        other => panic!("expected UnrecognizedContentType, got {other:?}"),
    }
}

#[test]
fn post_entry_is_block_unknown_but_inline_preview() {
    let post_fields = json!({
        "title": "Other post",
        "slug": "other-post",
        "excerpt": "Linked from here."
    });

    // Block position: not part of the block vocabulary, strict raises.
    let err = render_strict(json!([entry_node(
        "embedded-entry-block",
        "post",
        post_fields.clone()
    )]))
    .unwrap_err();
    assert!(matches!(err, RenderError::UnrecognizedContentType { .. }));

    // Inline position: renders the preview card.
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            entry_node("embedded-entry-inline", "post", post_fields)
        ]}
    ]));
    assert!(html.contains("<article class=\"post-preview\""));
    assert!(html.contains("href=\"/posts/other-post\""));
    assert!(html.contains("Other post"));
}

#[test]
fn inline_source_code_renders_like_block() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            entry_node("embedded-entry-inline", "sourceCode", json!({ "code": "x" }))
        ]}
    ]));
    assert!(html.contains("<figure class=\"source-code\">"));
}

#[test]
fn inline_gallery_is_unrecognized() {
    let err = render_strict(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            entry_node("embedded-entry-inline", "imageGallery", json!({ "images": [] }))
        ]}
    ]))
    .unwrap_err();
    match err {
        RenderError::UnrecognizedContentType { id } => assert_eq!(id, "imageGallery"),
        other => panic!("expected UnrecognizedContentType, got {other:?}"),
    }
}

#[test]
fn hyperlink_renders_an_anchor() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            { "nodeType": "hyperlink", "data": { "uri": "https://example.com/x?a=1&b=2" },
              "content": [text("a link")] }
        ]}
    ]));
    assert!(html.contains("<a href=\"https://example.com/x?a=1&amp;b=2\">a link</a>"));
}

#[test]
fn entry_hyperlink_resolves_to_the_target_slug() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [
            { "nodeType": "entry-hyperlink",
              "data": { "target": {
                  "sys": { "contentType": { "sys": { "id": "post" } } },
                  "fields": { "title": "Target", "slug": "target-post" }
              }},
              "content": [text("see this post")] }
        ]}
    ]));
    assert!(html.contains("<a href=\"/posts/target-post\">see this post</a>"));
}

#[test]
fn list_items_flatten_paragraph_wrappers() {
    let html = render(json!([
        { "nodeType": "unordered-list", "data": {}, "content": [
            { "nodeType": "list-item", "data": {}, "content": [
                { "nodeType": "paragraph", "data": {}, "content": [text("item one")] }
            ]},
            { "nodeType": "list-item", "data": {}, "content": [
                { "nodeType": "paragraph", "data": {}, "content": [text("item two")] }
            ]}
        ]}
    ]));
    assert!(html.contains("<li>item one</li>"));
    assert!(html.contains("<li>item two</li>"));
    assert!(!html.contains("<li><p>"));
}

#[test]
fn nested_lists_keep_their_structure() {
    let html = render(json!([
        { "nodeType": "unordered-list", "data": {}, "content": [
            { "nodeType": "list-item", "data": {}, "content": [
                { "nodeType": "paragraph", "data": {}, "content": [text("outer")] },
                { "nodeType": "unordered-list", "data": {}, "content": [
                    { "nodeType": "list-item", "data": {}, "content": [
                        { "nodeType": "paragraph", "data": {}, "content": [text("inner")] }
                    ]}
                ]}
            ]}
        ]}
    ]));
    // outer item keeps its nested list, both levels flattened
    assert!(html.contains("<li>outer<ul>\n<li>inner</li>\n</ul>\n</li>"));
}

#[test]
fn flattening_does_not_leak_outside_list_items() {
    let html = render(json!([
        { "nodeType": "paragraph", "data": {}, "content": [text("before")] },
        { "nodeType": "unordered-list", "data": {}, "content": [
            { "nodeType": "list-item", "data": {}, "content": [
                { "nodeType": "paragraph", "data": {}, "content": [text("item")] }
            ]}
        ]},
        { "nodeType": "paragraph", "data": {}, "content": [text("after")] }
    ]));
    // sibling paragraphs keep their wrappers
    assert!(html.contains("<p>before</p>"));
    assert!(html.contains("<p>after</p>"));
    assert!(html.contains("<li>item</li>"));
}

#[test]
fn empty_document_renders_an_empty_container() {
    let html = render(json!([]));
    assert_eq!(html, "<div class=\"post-body\" style=\"--post-color: #0099ff\">\n</div>\n");
}

#[test]
fn asset_without_file_is_dropped() {
    let html = render(json!([
        {
            "nodeType": "embedded-asset-block",
            "data": { "target": { "fields": { "title": "No file" } } },
            "content": []
        }
    ]));
    assert_eq!(html, "<div class=\"post-body\" style=\"--post-color: #0099ff\">\n</div>\n");
}
