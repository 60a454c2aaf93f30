use super::*;

#[test]
fn parses_static_routes() {
    assert_eq!(AppRoute::parse("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::parse("/signup"), Some(AppRoute::Signup));
    assert_eq!(AppRoute::parse("/boards/"), Some(AppRoute::Boards));
    assert_eq!(AppRoute::parse("/team"), Some(AppRoute::Team));
}

#[test]
fn parses_parameterized_routes() {
    assert_eq!(AppRoute::parse("/boards/7"), Some(AppRoute::Board { id: "7".to_owned() }));
    assert_eq!(
        AppRoute::parse("/companies/acme"),
        Some(AppRoute::Company { id: "acme".to_owned() })
    );
    assert_eq!(
        AppRoute::parse("/public/board/roadmap-2024"),
        Some(AppRoute::PublicBoard {
            url: "roadmap-2024".to_owned()
        })
    );
}

#[test]
fn unknown_and_root_paths_do_not_match() {
    assert_eq!(AppRoute::parse("/"), None);
    assert_eq!(AppRoute::parse("/public/board"), None);
    assert_eq!(AppRoute::parse("/admin"), None);
}

#[test]
fn groups_match_access_rules() {
    assert_eq!(AppRoute::Login.group(), RouteGroup::Auth);
    assert_eq!(AppRoute::Signup.group(), RouteGroup::Auth);
    assert_eq!(AppRoute::Feedbacks.group(), RouteGroup::Protected);
    assert_eq!(AppRoute::Settings { section: None }.group(), RouteGroup::Protected);
    assert_eq!(
        AppRoute::PublicBoard { url: "x".to_owned() }.group(),
        RouteGroup::Public
    );
}

// =============================================================
// Settings section
// =============================================================

#[test]
fn settings_reads_known_section() {
    assert_eq!(
        AppRoute::parse("/settings?section=integrations"),
        Some(AppRoute::Settings {
            section: Some(SettingsSection::Integrations)
        })
    );
}

#[test]
fn settings_treats_unknown_section_as_absent() {
    assert_eq!(
        AppRoute::parse("/settings?section=billing"),
        Some(AppRoute::Settings { section: None })
    );
    assert_eq!(SettingsSection::from_query(Some("Profile")), None);
    assert_eq!(SettingsSection::from_query(None), None);
}

#[test]
fn every_section_round_trips_through_its_name() {
    for section in SettingsSection::ALL {
        assert_eq!(section.as_str().parse::<SettingsSection>(), Ok(section));
    }
    assert_eq!(
        "billing".parse::<SettingsSection>(),
        Err(UnknownSection("billing".to_owned()))
    );
}

#[test]
fn href_matches_parse() {
    let routes = [
        AppRoute::Board { id: "3".to_owned() },
        AppRoute::Settings {
            section: Some(SettingsSection::Security),
        },
        AppRoute::PublicBoard { url: "demo".to_owned() },
    ];
    for route in routes {
        assert_eq!(AppRoute::parse(&route.href()), Some(route.clone()));
    }
}

// =============================================================
// Query helpers
// =============================================================

#[test]
fn query_param_decodes_values() {
    assert_eq!(query_param("redirect=%2Fboards%2F3", "redirect").as_deref(), Some("/boards/3"));
    assert_eq!(query_param("?a=1&b=2", "b").as_deref(), Some("2"));
    assert_eq!(query_param("", "a"), None);
}

#[test]
fn post_login_target_honours_local_paths_only() {
    assert_eq!(post_login_target(Some("/boards/3")), "/boards/3");
    assert_eq!(post_login_target(None), "/dashboard");
    assert_eq!(post_login_target(Some("https://evil.test")), "/dashboard");
    assert_eq!(post_login_target(Some("//evil.test")), "/dashboard");
}
