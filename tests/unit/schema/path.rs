use super::*;

#[test]
fn root_renders_as_dollar() {
    assert_eq!(JsonPath::root().to_string(), "$");
}

#[test]
fn fields_and_indices_render_in_order() {
    let p = JsonPath::root()
        .field("sections")
        .index(0)
        .field("content")
        .index(2);
    assert_eq!(p.to_string(), "$.sections[0].content[2]");
    assert_eq!(p.elems().len(), 4);
}

#[test]
fn child_paths_leave_the_parent_untouched() {
    let parent = JsonPath::root().field("sections");
    let _child = parent.index(3);
    assert_eq!(parent.to_string(), "$.sections");
}
