//! Integration tests for squadify-gatekeeper
//!
//! These tests parse a constraints list and check whole teams against it.

use squadify_domain::{Card, Concern, Label, Severity, Team};
use squadify_gatekeeper::{
    find_constraints_list, parse_constraints, Gatekeeper, GatekeeperConfig,
};

fn card(title: &str, labels: &[&str], fields: &[&str]) -> Card {
    let card = labels
        .iter()
        .fold(Card::new(title), |card, name| card.with_label(Label::new(*name).unwrap()));
    fields.iter().fold(card, |card, text| card.with_field(*text))
}

fn constraints_list() -> Team {
    Team::new("Squadification Constraints")
        .with_card(card("Backend dev", &["Dev"], &[]))
        .with_card(card("Frontend dev", &["Dev"], &[]))
        .with_card(card("Full-stack dev", &["Dev"], &[]))
        .with_card(card("Manual tester", &["Tester"], &[]))
        .with_card(card("Automation tester", &["Tester"], &[]))
        .with_card(card("Team lead", &["Lead"], &[]))
        .with_card(card("size > 5", &[], &[]))
        .with_card(card("size <= 9", &[], &[]))
        .with_card(card("confidence > 2", &[], &[]))
}

fn board() -> Vec<Team> {
    vec![
        Team::new("Backlog *"),
        constraints_list(),
        Team::new("Team Alpha")
            .with_card(card("Alice", &["Dev"], &["Confidence: 4"]))
            .with_card(card("Bob", &["Tester"], &["Confidence: 4"]))
            .with_card(card("Carol", &["Lead"], &["Confidence: 5"]))
            .with_card(card("Dave", &["*Intern"], &[]))
            .with_card(card("Erin", &["Designer"], &[]))
            .with_card(card("Frank", &["Designer"], &[])),
    ]
}

#[test]
fn test_parse_board_constraints() {
    let lists = board();
    let constraints =
        parse_constraints(find_constraints_list(&lists, "Squadification Constraints").unwrap());

    assert_eq!(constraints.role_minimums.get("Dev"), 3);
    assert_eq!(constraints.role_minimums.get("Tester"), 2);
    assert_eq!(constraints.role_minimums.get("Lead"), 1);
    assert_eq!(constraints.team_min_size, Some(5.0));
    assert_eq!(constraints.team_max_size, Some(10.0));
    assert_eq!(constraints.min_confidence, Some(2.0));
}

#[test]
fn test_understaffed_team() {
    let lists = board();
    let constraints = parse_constraints(&lists[1]);
    let gatekeeper = Gatekeeper::default_config();

    let status = gatekeeper.check_team(&lists[2], &constraints);
    assert_eq!(status.member_count, 6);
    assert_eq!(status.severity, Severity::Violation);
    assert_eq!(status.messages(), vec!["Not enough Devs", "Not enough Testers"]);

    // Dropping a designer takes the team to the exclusive lower bound
    let mut smaller = lists[2].clone();
    smaller.cards.pop();
    let status = gatekeeper.check_team(&smaller, &constraints);
    assert_eq!(
        status.messages(),
        vec!["Not enough Devs", "Not enough Testers", "Not enough members"]
    );
}

#[test]
fn test_fully_staffed_team_with_concerns() {
    let constraints = parse_constraints(&constraints_list());
    let team = Team::new("Team Beta")
        .with_card(card("Alice", &["Dev"], &["Confidence: 3"]))
        .with_card(card("Bob", &["Dev"], &["Confidence: 3"]))
        .with_card(card("Cid", &["Dev"], &["Confidence: 2"]))
        .with_card(card("Dana", &["Tester"], &["Confidence: 3"]))
        .with_card(card("Eve", &["Tester"], &["Confidence: 3"]))
        .with_card(card("Finn", &["Lead"], &["Confidence: 2"]))
        .with_card(card("Office move in May", &["concern"], &[]));

    let status = Gatekeeper::default_config().check_team(&team, &constraints);
    assert_eq!(status.member_count, 6);
    assert!(status.is_valid());
    assert_eq!(status.severity, Severity::Concern);
    assert_eq!(
        status.concerns[0],
        Concern::FlaggedCard {
            title: "Office move in May".to_string()
        }
    );
    // 16 / 6
    assert_eq!(status.messages()[1], "Low confidence score (2.7)");
}

#[test]
fn test_custom_colours_and_list_name() {
    let config = GatekeeperConfig::from_toml(
        r#"
        constraints_list_name = "Rules"

        [status_colors]
        invalid = "crimson"
        "#,
    )
    .unwrap();

    let lists = vec![
        Team::new("Rules").with_card(card("One lead", &["Lead"], &[])),
        Team::new("Team A").with_card(card("Alice", &["Dev"], &[])),
    ];
    let constraints =
        parse_constraints(find_constraints_list(&lists, &config.constraints_list_name).unwrap());
    let gatekeeper = Gatekeeper::new(config);

    let status = gatekeeper.check_team_list(&lists[1], &constraints).unwrap();
    assert_eq!(status.messages(), vec!["No Lead"]);
    assert_eq!(status.status_color, "crimson");

    assert!(gatekeeper.check_team_list(&lists[0], &constraints).is_err());
}
