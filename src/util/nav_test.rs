use super::*;

fn roles(premium: bool, admin: bool) -> Roles {
    Roles { authenticated: true, premium, admin }
}

#[test]
fn admin_panel_link_only_for_admins() {
    assert!(!nav_links(roles(true, false)).contains(&ADMIN_LINK));
    assert_eq!(nav_links(roles(true, true)).last(), Some(&ADMIN_LINK));
    assert_eq!(nav_links(roles(false, false)).len(), 5);
}

#[test]
fn tier_labels() {
    assert_eq!(tier_label(roles(true, true)), "Admin");
    assert_eq!(tier_label(roles(true, false)), "Pro");
    assert_eq!(tier_label(roles(false, false)), "Free");
}

#[test]
fn upgrade_prompt_hidden_for_premium() {
    assert!(shows_upgrade(roles(false, false)));
    assert!(!shows_upgrade(roles(true, false)));
    assert!(!shows_upgrade(Roles::default()));
}

#[test]
fn active_link_matches_nested_paths() {
    let analysis = MEMBER_LINKS[1];
    assert!(is_active(analysis, "/analysis"));
    assert!(is_active(analysis, "/analysis/EURUSD"));
    assert!(!is_active(analysis, "/analysisx"));
    assert!(!is_active(analysis, "/dashboard"));
}
