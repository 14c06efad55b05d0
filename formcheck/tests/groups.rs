use formcheck::prelude::*;

fn radio_group(members: &[FieldNode]) -> RadioGroupValidator {
    RadioGroupValidator::new(members.to_vec()).expect("group construction")
}

fn checkbox_group(members: &[FieldNode]) -> CheckboxGroupValidator {
    CheckboxGroupValidator::new(members.to_vec()).expect("group construction")
}

// ============================================================================
// Radio groups
// ============================================================================

#[test]
fn test_optional_radio_group_is_always_valid() {
    let members = [
        FieldNode::radio().name("color").value("red"),
        FieldNode::radio().name("color").value("blue"),
    ];
    assert!(radio_group(&members).is_valid().unwrap());
}

#[test]
fn test_required_radio_group_needs_one_checked() {
    let members = [
        FieldNode::radio().name("color").value("red"),
        FieldNode::radio().name("color").value("blue").attr("required", "true"),
    ];
    assert!(!radio_group(&members).is_valid().unwrap());

    members[0].set_checked(true);
    assert!(radio_group(&members).is_valid().unwrap());
}

#[test]
fn test_radio_required_honors_only_the_literal_true() {
    let members = [
        FieldNode::radio().name("color").attr("required", "required"),
    ];
    assert!(radio_group(&members).is_valid().unwrap());
}

#[test]
fn test_radio_required_on_disabled_member_is_ignored() {
    let members = [
        FieldNode::radio().name("color").attr("required", "true").disabled(true),
        FieldNode::radio().name("color"),
    ];
    assert!(radio_group(&members).is_valid().unwrap());
}

// ============================================================================
// Checkbox groups
// ============================================================================

#[test]
fn test_checkbox_group_defaults_allow_anything() {
    let members = [
        FieldNode::checkbox().name("extras"),
        FieldNode::checkbox().name("extras"),
    ];
    assert!(checkbox_group(&members).is_valid().unwrap());

    members[0].set_checked(true);
    members[1].set_checked(true);
    assert!(checkbox_group(&members).is_valid().unwrap());
}

#[test]
fn test_checkbox_minchecked_maxchecked_bounds() {
    let members = [
        FieldNode::checkbox().name("extras"),
        FieldNode::checkbox().name("extras"),
        FieldNode::checkbox()
            .name("extras")
            .attr("minchecked", "1")
            .attr("maxchecked", "1"),
    ];
    // Zero checked: under the minimum
    assert!(!checkbox_group(&members).is_valid().unwrap());

    // Exactly one checked: valid
    members[0].set_checked(true);
    assert!(checkbox_group(&members).is_valid().unwrap());

    // Two checked: over the maximum
    members[1].set_checked(true);
    assert!(!checkbox_group(&members).is_valid().unwrap());
}

#[test]
fn test_disabled_members_do_not_count_as_checked() {
    let members = [
        FieldNode::checkbox().name("extras").checked(true).disabled(true),
        FieldNode::checkbox().name("extras").attr("minchecked", "1"),
    ];
    assert!(!checkbox_group(&members).is_valid().unwrap());
}

#[test]
fn test_malformed_minchecked_is_an_error() {
    let members = vec![FieldNode::checkbox().name("extras").attr("minchecked", "one")];
    assert!(matches!(
        CheckboxGroupValidator::new(members),
        Err(ValidatorError::InvalidAttribute { .. })
    ));
}

// ============================================================================
// Last-wins attribute resolution
// ============================================================================

#[test]
fn test_conflicting_messages_last_member_wins() {
    let members = [
        FieldNode::checkbox().name("extras").attr("message", "first message"),
        FieldNode::checkbox()
            .name("extras")
            .attr("minchecked", "1")
            .attr("message", "last message"),
    ];
    let validator = checkbox_group(&members);
    assert_eq!(validator.message(), "last message");
}

#[test]
fn test_message_scan_includes_disabled_members() {
    // Unlike required/minchecked, message resolution scans every member
    let members = [
        FieldNode::radio().name("color").attr("message", "from enabled"),
        FieldNode::radio().name("color").attr("message", "from disabled").disabled(true),
    ];
    assert_eq!(radio_group(&members).message(), "from disabled");
}

// ============================================================================
// Group flagging
// ============================================================================

#[test]
fn test_flagging_decorates_every_member() {
    let members = [
        FieldNode::radio().name("color").attr("required", "true"),
        FieldNode::radio()
            .name("color")
            .attr("errorclass", "invalid")
            .attr("message", "pick one"),
    ];
    let validator = radio_group(&members);

    // validate() returns true when the group is dirty
    assert!(validator.validate().unwrap());
    for member in &members {
        assert!(member.has_class("invalid"));
        assert_eq!(member.title().as_deref(), Some("pick one"));
    }

    members[0].set_checked(true);
    assert!(!radio_group(&members).validate().unwrap());
    for member in &members {
        assert!(!member.has_class("invalid"));
        assert_eq!(member.title(), None);
    }
}

#[test]
fn test_group_without_errorclass_is_not_decorated() {
    let members = [FieldNode::radio().name("color").attr("required", "true")];
    let validator = radio_group(&members);
    assert!(validator.validate().unwrap());
    assert_eq!(members[0].title(), None);
}

#[test]
fn test_group_name_comes_from_members() {
    let members = [FieldNode::radio().name("color")];
    assert_eq!(radio_group(&members).name(), "color");
}
