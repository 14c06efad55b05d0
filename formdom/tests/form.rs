use formdom::{FieldNode, Form, SubmitEvent};

fn sample_form() -> Form {
    Form::new()
        .attr("blocksubmit", "false")
        .field(FieldNode::fieldset())
        .field(FieldNode::text().id("first").name("first"))
        .field(FieldNode::radio().name("color").value("red"))
        .field(FieldNode::radio().name("color").value("blue"))
        .field(FieldNode::submit("Send"))
}

#[test]
fn test_fields_keep_document_order() {
    let form = sample_form();
    let ids: Vec<String> = form.fields().iter().map(|f| f.type_name().to_string()).collect();
    assert_eq!(ids, vec!["fieldset", "text", "radio", "radio", "submit"]);
}

#[test]
fn test_child_fields_exclude_fake_controls() {
    let form = sample_form();
    let children = form.child_fields();
    assert_eq!(children.len(), 4);
    assert!(children.iter().all(|f| f.type_name() != "fieldset"));
}

#[test]
fn test_field_group_by_name() {
    let form = sample_form();
    let group = form.field_group("color");
    assert_eq!(group.len(), 2);
    assert_eq!(group[0].current_value(), "red");
    assert_eq!(group[1].current_value(), "blue");
}

#[test]
fn test_field_by_id() {
    let form = sample_form();
    assert!(form.field_by_id("first").is_some());
    assert!(form.field_by_id("missing").is_none());
}

#[test]
fn test_submit_controls() {
    let form = sample_form();
    let submits = form.submit_controls();
    assert_eq!(submits.len(), 1);
    assert_eq!(submits[0].current_value(), "Send");
}

#[test]
fn test_form_attr() {
    let form = sample_form();
    assert_eq!(form.get_attr("blocksubmit").as_deref(), Some("false"));
    assert_eq!(form.get_attr("error"), None);
}

#[test]
fn test_add_and_remove_fields_between_queries() {
    let form = Form::new();
    assert!(form.fields().is_empty());

    form.add_field(FieldNode::text().id("late"));
    assert_eq!(form.fields().len(), 1);

    assert!(form.remove_field("late"));
    assert!(!form.remove_field("late"));
    assert!(form.fields().is_empty());
}

#[test]
fn test_submit_event_prevent_default() {
    let mut event = SubmitEvent::new();
    assert!(!event.default_prevented());
    event.prevent_default();
    assert!(event.default_prevented());
}
