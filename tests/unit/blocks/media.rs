use super::*;

#[test]
fn valid_image_url_builds_external_image() {
    let b = image("https://cdn.example.com/a.png", Some("diagram"));
    let v = serde_json::to_value(&b).unwrap();
    assert_eq!(v["type"], "image");
    assert_eq!(v["image"]["type"], "external");
    assert_eq!(v["image"]["external"]["url"], "https://cdn.example.com/a.png");
    assert_eq!(v["image"]["caption"][0]["text"]["content"], "diagram");
}

#[test]
fn ftp_image_degrades_to_paragraph_naming_the_url() {
    let b = image("ftp://x", None);
    assert_eq!(b.type_name(), "paragraph");
    assert!(b.plain_text().contains("ftp://x"));
}

#[test]
fn try_media_reports_the_issue() {
    let err = try_media(MediaKind::Video, "not a url", None).unwrap_err();
    assert_eq!(
        err,
        BuildIssue::InvalidUrl {
            url: "not a url".to_owned()
        }
    );
}

#[test]
fn every_url_builder_degrades_instead_of_failing() {
    for b in [
        video("x", None),
        audio("x", None),
        pdf("x", None),
        file("x", None),
        embed("x"),
        bookmark("x", None),
    ] {
        assert_eq!(b.type_name(), "paragraph");
    }
}

#[test]
fn embed_and_bookmark_keep_valid_urls() {
    assert_eq!(embed("https://codepen.io/x").type_name(), "embed");
    assert_eq!(bookmark("https://rust-lang.org", None).type_name(), "bookmark");
}
