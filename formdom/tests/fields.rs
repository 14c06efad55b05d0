use formdom::{Control, FieldNode};

// ============================================================================
// Construction and identity
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = FieldNode::text();
    let b = FieldNode::text();
    assert_ne!(a.field_id(), b.field_id());
}

#[test]
fn test_explicit_id_and_name() {
    let field = FieldNode::text().id("email").name("email");
    assert_eq!(field.field_id(), "email");
    assert_eq!(field.field_name().as_deref(), Some("email"));
}

#[test]
fn test_clone_is_shared_handle() {
    let field = FieldNode::text().value("before");
    let alias = field.clone();
    alias.set_value("after");
    assert_eq!(field.current_value(), "after");
    assert!(field.same_node(&alias));
}

#[test]
fn test_type_names() {
    assert_eq!(FieldNode::text().type_name(), "text");
    assert_eq!(FieldNode::radio().type_name(), "radio");
    assert_eq!(FieldNode::checkbox().type_name(), "checkbox");
    assert_eq!(FieldNode::select(["a"]).type_name(), "select-one");
    assert_eq!(FieldNode::multi_select(["a"]).type_name(), "select-multiple");
    assert_eq!(FieldNode::fieldset().type_name(), "fieldset");
}

#[test]
fn test_fake_controls_are_not_input_fields() {
    assert!(!FieldNode::fieldset().is_input_field());
    assert!(!FieldNode::reset().is_input_field());
    assert!(FieldNode::text().is_input_field());
    assert!(FieldNode::submit("Send").is_input_field());
}

// ============================================================================
// Select values
// ============================================================================

#[test]
fn test_select_value_tracks_selected_index() {
    let select = FieldNode::select(["first", "second", "third"]);
    assert_eq!(select.current_value(), "first");

    select.set_selected_index(2);
    assert_eq!(select.current_value(), "third");
    assert_eq!(select.current_index(), 2);
}

#[test]
fn test_select_negative_index_has_empty_value() {
    let select = FieldNode::select(["first", "second"]).selected_index(-1);
    assert_eq!(select.current_index(), -1);
    assert_eq!(select.current_value(), "");
}

#[test]
fn test_multi_select_selected_values() {
    let select = FieldNode::multi_select(["a", "b", "c"])
        .option_selected(0, true)
        .option_selected(2, true);
    assert_eq!(select.selected_values(), vec!["a".to_string(), "c".to_string()]);
    assert_eq!(select.current_value(), "a");
}

// ============================================================================
// Classes, title, attributes
// ============================================================================

#[test]
fn test_class_toggling() {
    let field = FieldNode::text();
    field.add_class("invalid");
    assert!(field.has_class("invalid"));

    // Adding twice keeps a single entry, removing clears it
    field.add_class("invalid");
    field.remove_class("invalid");
    assert!(!field.has_class("invalid"));
}

#[test]
fn test_empty_class_is_ignored() {
    let field = FieldNode::text();
    field.add_class("");
    assert!(!field.has_class(""));
}

#[test]
fn test_title_roundtrip() {
    let field = FieldNode::text();
    assert_eq!(field.title(), None);
    field.set_title("message");
    assert_eq!(field.title().as_deref(), Some("message"));
    field.clear_title();
    assert_eq!(field.title(), None);
}

#[test]
fn test_attrs() {
    let field = FieldNode::text().attr("required", "true");
    assert_eq!(field.get_attr("required").as_deref(), Some("true"));
    assert_eq!(field.get_attr("pattern"), None);

    field.set_attr("pattern", "integer");
    assert_eq!(field.get_attr("pattern").as_deref(), Some("integer"));
    field.remove_attr("pattern");
    assert_eq!(field.get_attr("pattern"), None);
}

#[test]
fn test_control_snapshot() {
    let select = FieldNode::select(["x"]);
    match select.control() {
        Control::Select {
            options,
            selected_index,
            multiple,
        } => {
            assert_eq!(options.len(), 1);
            assert_eq!(selected_index, 0);
            assert!(!multiple);
        }
        other => panic!("unexpected control: {other:?}"),
    }
}
