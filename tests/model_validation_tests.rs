use hobbyclass_portal::models::{
    Availability, ClassStatus, CreateUserRequest, LoginResponse, Role, User, UserStatus,
};

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    assert_eq!(serde_json::to_string(&Role::Mentor).unwrap(), r#""mentor""#);
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), r#""student""#);
}

#[test]
fn test_role_rejects_unknown_variant() {
    // The closed enum is the validation: no free-form role strings get in.
    let result: Result<Role, _> = serde_json::from_str(r#""superuser""#);
    assert!(result.is_err());
}

#[test]
fn test_role_parse_mirrors_serde_names() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("mentor"), Some(Role::Mentor));
    assert_eq!(Role::parse("student"), Some(Role::Student));
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn test_landing_routes_per_role() {
    assert_eq!(Role::Admin.landing_route(), "/admin-dashboard");
    assert_eq!(Role::Mentor.landing_route(), "/mentor-dashboard");
    assert_eq!(Role::Student.landing_route(), "/student-dashboard");
}

#[test]
fn test_class_status_and_availability_parsing() {
    assert_eq!(ClassStatus::parse("pending"), Some(ClassStatus::Pending));
    assert_eq!(ClassStatus::parse("retired"), None);
    assert_eq!(Availability::parse("busy"), Some(Availability::Busy));
    assert_eq!(Availability::parse("away"), None);
}

#[test]
fn test_user_json_roundtrip() {
    let user = User {
        id: 7,
        name: "Test User".to_string(),
        email: "test@hobbyclass.com".to_string(),
        role: Role::Student,
        status: UserStatus::Active,
    };
    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains(r#""role":"student""#));
    assert!(json.contains(r#""status":"active""#));

    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_create_user_request_defaults_status_to_active() {
    let req: CreateUserRequest = serde_json::from_str(
        r#"{"name":"X","email":"x@x.com","role":"student"}"#,
    )
    .unwrap();
    assert_eq!(req.status, UserStatus::Active);
}

#[test]
fn test_login_response_omits_absent_fields() {
    let failure = LoginResponse {
        success: false,
        message: "Invalid credentials".to_string(),
        user: None,
        redirect: None,
    };
    let json = serde_json::to_string(&failure).unwrap();
    assert!(!json.contains("user"));
    assert!(!json.contains("redirect"));
}
